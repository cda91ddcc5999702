//! Implementation of the Rakefile lexer
//!
//! The classification is handled by logos; this module attaches line and column positions
//! to each token and turns unrecognized input into [`TokenKind::Unknown`] tokens so that
//! lexing never stops early.
//!
//! Two constructs run across lines in a way no token regex can follow, so they are folded
//! here by moving the logos lexer past them:
//! - the body of a heredoc becomes one String token right after the line that opened it;
//! - an embedded document (`=begin` ... `=end`, both at column 0) becomes one Comment token.
//!
//! Without a terminator neither is folded, and the text is lexed as ordinary code.

use crate::rake::lexer::tokens::{unquote, Token, TokenKind};
use logos::Logos;

/// Tokenize a string into positioned tokens, without the contextual keyword pass
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = TokenKind::lexer(source);
    let mut position = Position::default();
    let mut tokens = Vec::new();
    // Heredocs opened on the current line, in order
    let mut heredocs: Vec<HeredocTerminator> = Vec::new();

    while let Some(result) = lexer.next() {
        let mut kind = result.unwrap_or(TokenKind::Unknown);
        let start = lexer.span().start;

        if kind == TokenKind::Assign && start == position.line_start {
            if let Some(len) = embedded_document_len(&source[start..]) {
                let rest = len - lexer.slice().len();
                lexer.bump(rest);
                kind = TokenKind::Comment;
            }
        }
        if kind == TokenKind::Heredoc {
            heredocs.push(HeredocTerminator::from_opener(lexer.slice()));
        }

        tokens.push(position.token(source, kind, start, lexer.slice()));

        if kind == TokenKind::Newline && !heredocs.is_empty() {
            let body_start = lexer.span().end;
            if let Some(len) = heredoc_bodies_len(&source[body_start..], &heredocs) {
                lexer.bump(len);
                let body = &source[body_start..body_start + len];
                tokens.push(position.token(source, TokenKind::String, body_start, body));
            }
            heredocs.clear();
        }
    }

    tokens
}

/// Line bookkeeping while tokens are produced in source order
struct Position {
    line: usize,
    /// Byte offset where the current line starts
    line_start: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            line: 1,
            line_start: 0,
        }
    }
}

impl Position {
    /// Position the token found at byte `start` and move past its text
    fn token(&mut self, source: &str, kind: TokenKind, start: usize, text: &str) -> Token {
        let column = source[self.line_start..start].chars().count();
        let token = Token::new(kind, self.line, column, text);

        for (offset, c) in text.char_indices() {
            if c == '\n' {
                self.line += 1;
                self.line_start = start + offset + 1;
            }
        }
        token
    }
}

#[derive(Debug, PartialEq, Eq)]
struct HeredocTerminator {
    word: String,
    /// `<<~` and `<<-` allow the terminator to be indented
    indented: bool,
}

impl HeredocTerminator {
    fn from_opener(opener: &str) -> Self {
        let rest = opener.strip_prefix("<<").unwrap_or(opener);
        let (indented, word) = match rest.strip_prefix(|c: char| c == '~' || c == '-') {
            Some(word) => (true, word),
            None => (false, rest),
        };
        Self {
            word: unquote(word),
            indented,
        }
    }

    fn ends_at(&self, line: &str) -> bool {
        let line = line.trim_end_matches('\r');
        if self.indented {
            line.trim_start() == self.word
        } else {
            line == self.word
        }
    }
}

/// Byte length of the heredoc bodies at the start of `rest`, through the last terminator
/// line but not its line break. Bodies of several heredocs opened on one line follow each
/// other.
fn heredoc_bodies_len(rest: &str, heredocs: &[HeredocTerminator]) -> Option<usize> {
    let mut pending = heredocs.iter().peekable();
    let mut offset = 0;

    for line in rest.split_inclusive('\n') {
        let content = line.strip_suffix('\n').unwrap_or(line);
        if pending.next_if(|heredoc| heredoc.ends_at(content)).is_some()
            && pending.peek().is_none()
        {
            return Some(offset + content.len()).filter(|&len| len > 0);
        }
        offset += line.len();
    }
    None
}

/// Byte length of an embedded document at the start of `rest`, through the `=end` line but
/// not its line break
fn embedded_document_len(rest: &str) -> Option<usize> {
    if !is_directive(rest, "=begin") {
        return None;
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let content = line.strip_suffix('\n').unwrap_or(line);
        if offset > 0 && is_directive(content, "=end") {
            return Some(offset + content.len());
        }
        offset += line.len();
    }
    None
}

fn is_directive(line: &str, directive: &str) -> bool {
    line.strip_prefix(directive)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("desc \"x\"\ntask :a");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Identifier, 1, 0, "desc"),
                Token::new(TokenKind::Space, 1, 4, " "),
                Token::new(TokenKind::String, 1, 5, "\"x\""),
                Token::new(TokenKind::Newline, 1, 8, "\n"),
                Token::new(TokenKind::Identifier, 2, 0, "task"),
                Token::new(TokenKind::Space, 2, 4, " "),
                Token::new(TokenKind::Symbol, 2, 5, ":a"),
            ]
        );
    }

    #[test]
    fn test_multiline_string_advances_lines() {
        let tokens = tokenize("'a\nb' x");
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[2], Token::new(TokenKind::Identifier, 2, 3, "x"));
    }

    #[test]
    fn test_unterminated_string_keeps_lexing() {
        let tokens = tokenize("task :a\ndesc \"oops\n");
        assert_eq!(tokens[2], Token::new(TokenKind::Symbol, 1, 5, ":a"));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Unknown));
    }

    #[test]
    fn test_columns_count_characters() {
        let tokens = tokenize("'é' :a");
        assert_eq!(tokens[2], Token::new(TokenKind::Symbol, 1, 4, ":a"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_heredoc_body_is_one_string() {
        let tokens = tokenize("sh <<~EOS\n  if x\n  EOS\ntask :b");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Identifier, 1, 0, "sh"),
                Token::new(TokenKind::Space, 1, 2, " "),
                Token::new(TokenKind::Heredoc, 1, 3, "<<~EOS"),
                Token::new(TokenKind::Newline, 1, 9, "\n"),
                Token::new(TokenKind::String, 2, 0, "  if x\n  EOS"),
                Token::new(TokenKind::Newline, 3, 5, "\n"),
                Token::new(TokenKind::Identifier, 4, 0, "task"),
                Token::new(TokenKind::Space, 4, 4, " "),
                Token::new(TokenKind::Symbol, 4, 5, ":b"),
            ]
        );
    }

    #[test]
    fn test_plain_heredoc_terminator_needs_column_zero() {
        let tokens = tokenize("x = <<EOS\n  EOS\nEOS\ny");
        assert_eq!(tokens[6], Token::new(TokenKind::String, 2, 0, "  EOS\nEOS"));
        assert_eq!(tokens[8], Token::new(TokenKind::Identifier, 4, 0, "y"));
    }

    #[test]
    fn test_heredocs_on_one_line_fold_together() {
        let tokens = tokenize("run(<<-A, <<'B')\ndo\n  A\nend\nB\nz");
        let body = tokens
            .iter()
            .find(|t| t.kind == TokenKind::String)
            .expect("heredoc body");
        assert_eq!(body.text, "do\n  A\nend\nB");
        assert!(!kinds(&tokens).contains(&TokenKind::Do));
        assert_eq!(tokens.last(), Some(&Token::new(TokenKind::Identifier, 6, 0, "z")));
    }

    #[test]
    fn test_unterminated_heredoc_is_lexed_as_code() {
        let tokens = tokenize("sh <<~EOS\nif x\n");
        assert!(kinds(&tokens).contains(&TokenKind::If));
        assert!(!kinds(&tokens).contains(&TokenKind::String));
    }

    #[test]
    fn test_embedded_document_is_one_comment() {
        let tokens = tokenize("=begin\ntask :x do\n=end\ntask :y");
        assert_eq!(
            tokens[0],
            Token::new(TokenKind::Comment, 1, 0, "=begin\ntask :x do\n=end")
        );
        assert_eq!(tokens[1], Token::new(TokenKind::Newline, 3, 4, "\n"));
        assert_eq!(tokens[2], Token::new(TokenKind::Identifier, 4, 0, "task"));
    }

    #[test]
    fn test_embedded_document_needs_directive_lines() {
        let beginning = tokenize("=beginning\ndo\n=end\n");
        assert_eq!(beginning[0].kind, TokenKind::Assign);

        let indented = tokenize("x\n =begin\ndo\n=end\n");
        assert!(kinds(&indented).contains(&TokenKind::Do));

        let unterminated = tokenize("=begin\ndo\n");
        assert_eq!(unterminated[0].kind, TokenKind::Assign);
        assert!(kinds(&unterminated).contains(&TokenKind::Do));
    }
}

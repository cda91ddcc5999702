//! Contextual keyword transformation
//!
//! Logos classifies each token on its own. Whether `if` opens a block or modifies a
//! statement, whether `do` opens a block or only closes a `while` condition, and whether
//! `default:` is a label depends on the neighbouring tokens. This pass rewrites those
//! kinds in place so that block counting downstream only sees real block openers.
//!
//! Rules, applied in order:
//! - a keyword right after `.` or `::` is a method name (`task.end`), so an Identifier;
//! - a name or keyword immediately followed by a single `:` is a Label (`default: :test`);
//! - `if`/`unless`/`while`/`until` after an expression on the same line are modifiers;
//! - `do` after a `while`/`until`/`for` on the same line belongs to the loop condition;
//! - `__END__` only ends the script at column 0.

use crate::rake::lexer::tokens::{Token, TokenKind};

/// Words that take an expression after them, so a following `if` still opens a block
const EXPRESSION_PREFIXES: &[&str] = &[
    "and", "or", "not", "then", "else", "elsif", "when", "in",
];

/// Apply all contextual rewrites to a raw token list
pub fn transform_keywords(tokens: Vec<Token>) -> Vec<Token> {
    let tokens = demote_method_names(tokens);
    let tokens = merge_labels(tokens);
    classify_line_keywords(tokens)
}

fn demote_method_names(mut tokens: Vec<Token>) -> Vec<Token> {
    for i in 1..tokens.len() {
        let after_call = matches!(
            tokens[i - 1].kind,
            TokenKind::Dot | TokenKind::ColonColon
        );
        if after_call && tokens[i].kind.is_keyword() {
            tokens[i].kind = TokenKind::Identifier;
        }
    }
    tokens
}

fn merge_labels(tokens: Vec<Token>) -> Vec<Token> {
    let mut result: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();

    while let Some(mut token) = iter.next() {
        let nameish = matches!(token.kind, TokenKind::Identifier | TokenKind::Constant)
            || token.kind.is_keyword();
        if nameish && iter.peek().is_some_and(|next| next.kind == TokenKind::Colon) {
            if let Some(colon) = iter.next() {
                token.kind = TokenKind::Label;
                token.text.push_str(&colon.text);
            }
        }
        result.push(token);
    }

    result
}

fn classify_line_keywords(mut tokens: Vec<Token>) -> Vec<Token> {
    // Last significant token on the current line, if any
    let mut previous: Option<usize> = None;
    // Loop keywords on this line still waiting for their optional `do`
    let mut open_loops = 0usize;

    for i in 0..tokens.len() {
        let kind = tokens[i].kind;
        match kind {
            TokenKind::Newline => {
                previous = None;
                open_loops = 0;
                continue;
            }
            TokenKind::Space | TokenKind::Comment => continue,
            TokenKind::Operator if tokens[i].text == ";" => {
                previous = None;
                continue;
            }
            _ => {}
        }

        let after_value = previous.is_some_and(|p| {
            let prev = &tokens[p];
            prev.kind.ends_value()
                && !(prev.kind == TokenKind::Identifier
                    && EXPRESSION_PREFIXES.contains(&prev.text.as_str()))
        });

        tokens[i].kind = match kind {
            TokenKind::If if after_value => TokenKind::IfModifier,
            TokenKind::Unless if after_value => TokenKind::UnlessModifier,
            TokenKind::While if after_value => TokenKind::WhileModifier,
            TokenKind::Until if after_value => TokenKind::UntilModifier,
            TokenKind::While | TokenKind::Until | TokenKind::For => {
                open_loops += 1;
                kind
            }
            TokenKind::Do if open_loops > 0 => {
                open_loops -= 1;
                TokenKind::DoCondition
            }
            TokenKind::EndOfScript if tokens[i].column != 0 => TokenKind::Identifier,
            _ => kind,
        };

        previous = Some(i);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rake::lexer::tokenize;

    fn kinds(source: &str) -> Vec<TokenKind> {
        transform_keywords(tokenize(source))
            .into_iter()
            .filter(|t| !t.kind.is_space())
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_statement_modifier() {
        assert_eq!(
            kinds("sh 'make' if windows"),
            vec![
                TokenKind::Identifier,
                TokenKind::String,
                TokenKind::IfModifier,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_leading_if_opens_block() {
        assert_eq!(kinds("if x")[0], TokenKind::If);
        assert_eq!(kinds("y = if x")[2], TokenKind::If);
        assert_eq!(kinds("return unless ok")[1], TokenKind::UnlessModifier);
        assert_eq!(kinds("else if x")[1], TokenKind::If);
    }

    #[test]
    fn test_modifier_state_resets_per_line() {
        assert_eq!(
            kinds("puts 1\nif x"),
            vec![
                TokenKind::Identifier,
                TokenKind::Integer,
                TokenKind::Newline,
                TokenKind::If,
                TokenKind::Identifier,
            ]
        );
        assert_eq!(kinds("a; while b")[2], TokenKind::While);
    }

    #[test]
    fn test_loop_do_is_condition() {
        assert_eq!(
            kinds("while running do"),
            vec![TokenKind::While, TokenKind::Identifier, TokenKind::DoCondition]
        );
        assert_eq!(kinds("list.each do")[3], TokenKind::Do);
    }

    #[test]
    fn test_keyword_after_dot_is_identifier() {
        assert_eq!(
            kinds("t.end Foo::class"),
            vec![
                TokenKind::Identifier,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::Constant,
                TokenKind::ColonColon,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_labels() {
        let tokens = transform_keywords(tokenize("task default: :test"));
        assert_eq!(tokens[2], Token::new(TokenKind::Label, 1, 5, "default:"));
        assert_eq!(tokens[4].kind, TokenKind::Symbol);
        assert_eq!(kinds("Foo::Bar")[1], TokenKind::ColonColon);
        assert_eq!(kinds("a ? b : c")[3], TokenKind::Colon);
    }

    #[test]
    fn test_keywords_in_heredoc_and_embedded_document_are_hidden() {
        assert_eq!(
            kinds("sh <<~EOS if ok\n  while x do\n  EOS\n=begin\nif\n=end\n"),
            vec![
                TokenKind::Identifier,
                TokenKind::Heredoc,
                TokenKind::IfModifier,
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::String,
                TokenKind::Newline,
                TokenKind::Comment,
                TokenKind::Newline,
            ]
        );
    }

    #[test]
    fn test_end_of_script_needs_column_zero() {
        assert_eq!(kinds("__END__")[0], TokenKind::EndOfScript);
        assert_eq!(kinds("x __END__")[1], TokenKind::Identifier);
    }
}

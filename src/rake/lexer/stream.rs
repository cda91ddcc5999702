//! Pull-based token source used by the scanner
//!
//! [`TokenStream`] hands out tokens one at a time and supports the small set of
//! primitives the Rakefile scanner is built on:
//!
//! - a single pushback slot ([`TokenStream::unget`]) for one token of lookahead;
//! - whitespace skipping that either stays on the current line or crosses line breaks;
//! - [`TokenStream::read_until`], which always terminates at end of input;
//! - nested captures: every token read while a capture is open is recorded into it, and
//!   a pushed back token is removed from it again. Task signatures and bodies are built
//!   from these captures.

use crate::rake::lexer::lex;
use crate::rake::lexer::tokens::{Token, TokenKind};

#[derive(Debug)]
pub struct TokenStream {
    tokens: std::vec::IntoIter<Token>,
    pushback: Option<Token>,
    captures: Vec<Vec<Token>>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            pushback: None,
            captures: Vec::new(),
        }
    }

    /// Lex `source` and wrap the resulting tokens
    pub fn from_source(source: &str) -> Self {
        Self::new(lex(source))
    }

    /// Push a token back so the next read returns it again.
    ///
    /// Only one token may be buffered at a time.
    pub fn unget(&mut self, token: Token) {
        debug_assert!(
            self.pushback.is_none(),
            "only one token of lookahead may be pushed back"
        );
        for capture in &mut self.captures {
            if capture.last() == Some(&token) {
                capture.pop();
            }
        }
        self.pushback = Some(token);
    }

    /// Skip whitespace. Line breaks are only skipped when `cross_newline` is set.
    pub fn skip_whitespace(&mut self, cross_newline: bool) {
        while let Some(token) = self.next() {
            let skippable = token.kind.is_space()
                || (cross_newline && token.kind == TokenKind::Newline);
            if !skippable {
                self.unget(token);
                break;
            }
        }
    }

    /// Read tokens up to and including the first one whose kind is in `kinds`.
    ///
    /// Returns whatever was read if the input ends first.
    pub fn read_until(&mut self, kinds: &[TokenKind]) -> Vec<Token> {
        let mut run = Vec::new();
        for token in self.by_ref() {
            let found = kinds.contains(&token.kind);
            run.push(token);
            if found {
                break;
            }
        }
        run
    }

    /// Start recording every token read from now on
    pub fn start_capture(&mut self) {
        self.captures.push(Vec::new());
    }

    /// Start recording with `token`, which has already been read, as the first entry
    pub fn start_capture_with(&mut self, token: Token) {
        self.captures.push(vec![token]);
    }

    /// What the innermost capture has recorded so far
    pub fn captured(&self) -> &[Token] {
        self.captures.last().map(Vec::as_slice).unwrap_or_default()
    }

    /// Stop the innermost capture and return what it recorded
    pub fn finish_capture(&mut self) -> Vec<Token> {
        self.captures.pop().unwrap_or_default()
    }

    /// Check whether any token remains, including a pushed back one
    pub fn is_exhausted(&self) -> bool {
        self.pushback.is_none() && self.tokens.len() == 0
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.pushback.take().or_else(|| self.tokens.next())?;
        for capture in &mut self.captures {
            capture.push(token.clone());
        }
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_unget_returns_same_token() {
        let mut stream = TokenStream::from_source("task :a");
        let first = stream.next().unwrap();
        stream.unget(first.clone());
        assert_eq!(stream.next(), Some(first));
        assert_eq!(stream.next().unwrap().kind, TokenKind::Space);
    }

    #[test]
    fn test_skip_whitespace_stays_on_line() {
        let mut stream = TokenStream::from_source("  \n  x");
        stream.skip_whitespace(false);
        assert_eq!(stream.next().unwrap().kind, TokenKind::Newline);
    }

    #[test]
    fn test_skip_whitespace_crosses_lines() {
        let mut stream = TokenStream::from_source("  \n  x");
        stream.skip_whitespace(true);
        assert_eq!(stream.next().unwrap().text, "x");
    }

    #[test]
    fn test_read_until_includes_terminator() {
        let mut stream = TokenStream::from_source("[:a, :b] rest");
        let run = stream.read_until(&[TokenKind::RBracket]);
        assert_eq!(texts(&run), vec!["[", ":a", ",", " ", ":b", "]"]);
        assert_eq!(stream.next().unwrap().kind, TokenKind::Space);
    }

    #[test]
    fn test_read_until_stops_at_end_of_input() {
        let mut stream = TokenStream::from_source("[:a, :b");
        let run = stream.read_until(&[TokenKind::RBracket]);
        assert_eq!(run.len(), 5);
        assert!(stream.is_exhausted());
        assert_eq!(stream.next(), None);
    }

    #[test]
    fn test_nested_captures() {
        let mut stream = TokenStream::from_source("a b c");
        stream.start_capture();
        stream.next();
        stream.start_capture();
        stream.next();
        stream.next();
        let inner = stream.finish_capture();
        let outer = stream.finish_capture();
        assert_eq!(texts(&inner), vec![" ", "b"]);
        assert_eq!(texts(&outer), vec!["a", " ", "b"]);
    }

    #[test]
    fn test_capture_seeded_with_read_token() {
        let mut stream = TokenStream::from_source("task :a");
        let keyword = stream.next().unwrap();
        stream.start_capture_with(keyword);
        stream.next();
        stream.next();
        assert_eq!(texts(stream.captured()), vec!["task", " ", ":a"]);
        assert_eq!(texts(&stream.finish_capture()), vec!["task", " ", ":a"]);
        assert!(stream.captured().is_empty());
    }

    #[test]
    fn test_unget_removes_token_from_capture() {
        let mut stream = TokenStream::from_source("task do");
        stream.start_capture();
        stream.next();
        stream.skip_whitespace(false);
        let tk = stream.next().unwrap();
        stream.unget(tk);
        assert_eq!(texts(&stream.finish_capture()), vec!["task", " "]);
    }
}

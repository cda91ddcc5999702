//! Lexer module for Rakefiles
//!
//! This module turns Rakefile source into classified tokens. It does not understand Ruby,
//! it only tells apart the token shapes the scanner in [parser](crate::rake::parser) cares
//! about: block keywords, names, symbols, strings, line breaks and a bit of punctuation.
//!
//! Lexing runs in two steps:
//!     1. Core tokenization with logos, folding heredoc bodies and `=begin` documents into
//!        single tokens. See [lexer_impl].
//!     2. Contextual keyword rewriting (statement modifiers, loop `do`, labels, method names
//!        that look like keywords). See [keyword_transform].
//!
//! The two steps are kept apart so the logos lexer stays a plain, context free one.

pub mod detokenizer;
pub mod keyword_transform;
pub mod lexer_impl;
pub mod stream;
pub mod tokens;

pub use detokenizer::detokenize;
pub use keyword_transform::transform_keywords;
pub use lexer_impl::tokenize;
pub use stream::TokenStream;
pub use tokens::{Token, TokenKind};

/// Main lexer function that returns fully processed tokens (tokenize + keyword transform)
pub fn lex(source: &str) -> Vec<Token> {
    transform_keywords(tokenize(source))
}

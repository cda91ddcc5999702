//! Block scanning
//!
//! There is no Ruby grammar here. A statement or block is delimited by counting the
//! keywords that open a block against the `end`s that close one:
//!
//!     task :default => :test            <- no block opener before the line break:
//!                                          the statement ends with the line
//!     task :default do                  <- `do` opens, nest 1
//!       if ENV['CI'] then sh 'x' end    <- `if` opens, `end` closes, nest 1
//!     end                               <- nest 0, the block is complete
//!
//! Statement modifiers and loop-condition `do`s are classified by the lexer and do not
//! count as openers.

use crate::rake::lexer::{Token, TokenKind, TokenStream};

/// Consume one single-line statement or one complete block, returning every token read.
///
/// Stops at the first line break if no block has been opened by then, or as soon as all
/// opened blocks are closed. End of input ends the run wherever it is.
pub fn consume_body(stream: &mut TokenStream) -> Vec<Token> {
    let mut body = Vec::new();
    let mut nest = 0isize;
    let mut seen_nest = false;

    for token in stream.by_ref() {
        let kind = token.kind;
        body.push(token);

        if kind.opens_block() {
            nest += 1;
            seen_nest = true;
        } else if kind.closes_block() {
            nest -= 1;
        } else if kind == TokenKind::Newline && !seen_nest {
            break;
        }

        if seen_nest && nest == 0 {
            break;
        }
    }

    tracing::trace!(tokens = body.len(), "consumed body");
    body
}

/// Consume the rest of an array literal whose `[` has already been read, closing `]`
/// included. Elements are not filtered.
pub fn consume_array(stream: &mut TokenStream) -> Vec<Token> {
    stream.read_until(&[TokenKind::RBracket])
}

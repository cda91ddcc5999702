//! Task argument and dependency extraction
//!
//! Runs right after the task name has been read and looks at what follows it on the line:
//!
//!     task :name                          nothing
//!     task :name do ... end               nothing, the `do` is left for the body
//!     task :name => :dep                  one dependency
//!     task :name => [:a, :b]              dependencies in order
//!     task :name, [:arg] => :dep          task arguments, then dependencies
//!     task name: [:a, :b]                 label form, the label's colon maps to the deps
//!
//! Our lexer emits `=>` as a single token. Token streams that split it into `=` and `>`
//! are accepted as well.

use super::block::consume_array;
use crate::rake::ast::TaskKind;
use crate::rake::lexer::{Token, TokenKind, TokenStream};

/// What followed a task name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskArguments {
    pub arguments: Vec<String>,
    pub dependencies: Vec<String>,
}

/// Read the next argument of a call, skipping an opening parenthesis: `desc("x")`.
pub fn next_argument(stream: &mut TokenStream, cross_newline: bool) -> Option<Token> {
    stream.skip_whitespace(cross_newline);
    let token = stream.next()?;
    if token.kind == TokenKind::LParen {
        stream.skip_whitespace(true);
        return stream.next();
    }
    Some(token)
}

/// Consume the optional argument list and dependency expression after a task name.
///
/// `labelled` is set when the name was written as a label (`name:`), in which case the
/// dependency expression starts right away. Anything unrecognized is pushed back and left
/// for the body scanner; it never produces dependencies.
pub fn consume_task_arguments(
    stream: &mut TokenStream,
    kind: TaskKind,
    labelled: bool,
) -> TaskArguments {
    let mut result = TaskArguments::default();

    if labelled {
        consume_dependencies(stream, kind, &mut result);
        return result;
    }

    stream.skip_whitespace(false);
    let Some(mut token) = stream.next() else {
        return result;
    };

    if token.kind == TokenKind::Comma {
        stream.skip_whitespace(true);
        match stream.next() {
            Some(open) if open.kind == TokenKind::LBracket => {
                result.arguments = symbol_names(&consume_array(stream));
            }
            Some(other) => {
                stream.unget(other);
                return result;
            }
            None => return result,
        }

        stream.skip_whitespace(false);
        token = match stream.next() {
            Some(token) => token,
            None => return result,
        };
    }

    match token.kind {
        TokenKind::Assoc => consume_dependencies(stream, kind, &mut result),
        TokenKind::Assign => match stream.next() {
            Some(gt) if gt.kind == TokenKind::Gt => consume_dependencies(stream, kind, &mut result),
            Some(other) => stream.unget(other),
            None => {}
        },
        _ => stream.unget(token),
    }

    result
}

fn consume_dependencies(stream: &mut TokenStream, kind: TaskKind, result: &mut TaskArguments) {
    stream.skip_whitespace(true);
    let Some(token) = stream.next() else {
        return;
    };

    if token.kind == TokenKind::LBracket {
        let elements = consume_array(stream);
        result
            .dependencies
            .extend(elements.iter().filter_map(|t| dependency_name(t, kind)));
        return;
    }

    match dependency_name(&token, kind) {
        Some(name) => result.dependencies.push(name),
        None => {
            tracing::debug!(token = %token.text, line = token.line, "unrecognized dependency expression");
            stream.unget(token);
        }
    }
}

fn dependency_name(token: &Token, kind: TaskKind) -> Option<String> {
    match token.kind {
        TokenKind::Symbol => Some(token.literal_name()),
        TokenKind::String if kind.accepts_path_dependencies() => Some(token.literal_name()),
        _ => None,
    }
}

fn symbol_names(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Symbol)
        .map(Token::literal_name)
        .collect()
}

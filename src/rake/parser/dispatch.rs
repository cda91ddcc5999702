//! The dispatch loop
//!
//! Reads tokens one by one and routes the few shapes it recognizes: Rake DSL calls by
//! name, constants that may start a task builder, and block keywords that move the
//! ambient depth. Everything else is skipped.
//!
//! The loop is entered once for the whole file and once more for every namespace block.
//! A nested run remembers the depth it started at and returns [`ScanFlow::Continue`] when
//! the `end` closing its namespace brings the depth back to that level. End of input,
//! `__END__` and `:enddoc:` return an abort flow, which every caller passes straight up.

use super::context::{ScanContext, ScanFlow};
use super::handlers::{
    parse_description, parse_namespace, parse_require, parse_task, parse_task_builder,
};
use crate::rake::ast::TaskKind;
use crate::rake::lexer::{TokenKind, TokenStream};

/// The Rake DSL methods the scanner understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Desc,
    Task(TaskKind),
    Namespace,
    Require { relative: bool },
}

impl Keyword {
    pub fn from_identifier(name: &str) -> Option<Self> {
        let keyword = match name {
            "desc" => Keyword::Desc,
            "task" => Keyword::Task(TaskKind::Task),
            "multitask" => Keyword::Task(TaskKind::Multitask),
            "file" => Keyword::Task(TaskKind::File),
            "directory" => Keyword::Task(TaskKind::Directory),
            "namespace" => Keyword::Namespace,
            "require" => Keyword::Require { relative: false },
            "require_relative" => Keyword::Require { relative: true },
            _ => return None,
        };
        Some(keyword)
    }
}

/// Scan statements until the current namespace closes or the input ends
pub fn parse_rakefile(context: &mut ScanContext<'_>, stream: &mut TokenStream) -> ScanFlow {
    let start_depth = context.depth;
    // Kind of the last token read, to tell `task` from a `.task` method call
    let mut previous = TokenKind::Newline;

    while let Some(token) = stream.next() {
        let after_call = matches!(previous, TokenKind::Dot | TokenKind::ColonColon);
        previous = token.kind;

        match token.kind {
            TokenKind::Constant => parse_task_builder(context, stream, token),
            TokenKind::Class | TokenKind::Module => {
                context.depth += 1;
                skip_definition_name(stream);
            }
            TokenKind::Def => {
                context.depth += 1;
                stream.skip_whitespace(false);
                stream.next();
            }
            kind if kind.opens_block() => context.depth += 1,
            TokenKind::End => {
                context.depth -= 1;
                if start_depth > 0 && context.depth <= start_depth {
                    return ScanFlow::Continue;
                }
            }
            TokenKind::Identifier if !after_call => {
                let Some(keyword) = Keyword::from_identifier(&token.text) else {
                    continue;
                };
                match keyword {
                    Keyword::Desc => parse_description(context, stream),
                    Keyword::Task(kind) => {
                        parse_task(context, stream, token, kind);
                    }
                    Keyword::Namespace => {
                        let flow = parse_namespace(context, stream);
                        if flow.is_abort() {
                            return flow;
                        }
                    }
                    Keyword::Require { relative } => parse_require(context, stream, relative),
                }
            }
            TokenKind::EndOfScript => return ScanFlow::EndOfInput,
            TokenKind::Comment if is_enddoc(&token.text) => return ScanFlow::EndOfDocument,
            _ => {}
        }
    }

    ScanFlow::EndOfInput
}

/// `class Foo::Bar < Base` names a definition and its superclass, not task builders
fn skip_definition_name(stream: &mut TokenStream) {
    skip_constant_path(stream);
    stream.skip_whitespace(false);
    match stream.next() {
        Some(token) if token.kind == TokenKind::Operator && token.text == "<" => {
            skip_constant_path(stream);
        }
        Some(token) => stream.unget(token),
        None => {}
    }
}

fn skip_constant_path(stream: &mut TokenStream) {
    stream.skip_whitespace(false);
    while let Some(token) = stream.next() {
        if !matches!(token.kind, TokenKind::Constant | TokenKind::ColonColon) {
            stream.unget(token);
            break;
        }
    }
}

fn is_enddoc(comment: &str) -> bool {
    comment.trim_start_matches('#').trim() == ":enddoc:"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(Keyword::from_identifier("desc"), Some(Keyword::Desc));
        assert_eq!(
            Keyword::from_identifier("file"),
            Some(Keyword::Task(TaskKind::File))
        );
        assert_eq!(
            Keyword::from_identifier("require_relative"),
            Some(Keyword::Require { relative: true })
        );
        assert_eq!(Keyword::from_identifier("puts"), None);
        assert_eq!(Keyword::from_identifier("Task"), None);
    }

    #[test]
    fn test_enddoc_directive() {
        assert!(is_enddoc("# :enddoc:"));
        assert!(is_enddoc("#:enddoc:"));
        assert!(!is_enddoc("# enddoc"));
    }
}

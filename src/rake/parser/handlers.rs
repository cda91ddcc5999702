//! Handlers for the recognized Rake DSL calls
//!
//! Each handler is called by the dispatch loop with the stream positioned right after the
//! word that selected it, and reads as little as it needs.

use super::arguments::{consume_task_arguments, next_argument};
use super::block::consume_body;
use super::context::{ScanContext, ScanFlow};
use super::dispatch::parse_rakefile;
use crate::rake::ast::{Include, Require, Task, TaskId, TaskKind};
use crate::rake::lexer::{detokenize, Token, TokenKind, TokenStream};
use tracing::debug;

/// Parse a Rake task
///
///     task :name => [:deps] do ... end
///
/// A task already declared in the current namespace gains the new dependencies; its
/// comment, signature and body stay those of the first declaration.
pub fn parse_task(
    context: &mut ScanContext<'_>,
    stream: &mut TokenStream,
    keyword: Token,
    kind: TaskKind,
) -> Option<TaskId> {
    let line = keyword.line;
    stream.start_capture_with(keyword);

    let name_token = match next_argument(stream, false) {
        Some(token) if is_task_name(&token) => token,
        other => {
            if let Some(token) = other {
                stream.unget(token);
            }
            stream.finish_capture();
            return None;
        }
    };
    let name = task_name(&name_token);
    let labelled = name_token.kind == TokenKind::Label;

    let container = context.container;
    let (id, created) = match context.document.find_task(container, &name) {
        Some(id) => (id, false),
        None => {
            let text = detokenize(stream.captured());
            let task = Task::new(name.clone(), kind, container, text, line);
            context.stats.add_task(&task);
            (context.document.add_task(task), true)
        }
    };

    let comment = context.description.take();
    let arguments = consume_task_arguments(stream, kind, labelled);
    let signature = stream.finish_capture();
    let body = consume_body(stream);

    let capture_tokens = context.options.capture_tokens;
    let task = context.document.task_mut(id);
    task.dependencies.extend(arguments.dependencies);

    if created {
        task.comment = comment;
        task.arguments = arguments.arguments;
        if capture_tokens {
            task.signature = signature;
            task.body = body;
        }
        debug!(task = %name, kind = %kind, line, "task created");
    } else {
        if !comment.is_empty() {
            debug!(task = %name, line, "description of repeated task declaration discarded");
        }
        if task.arguments.is_empty() {
            task.arguments = arguments.arguments;
        }
        debug!(task = %name, line, dependencies = task.dependencies.len(), "task merged");
    }

    Some(id)
}

/// The task name as written. A label `default:` is the symbol `:default`.
fn task_name(token: &Token) -> String {
    match token.kind {
        TokenKind::Label => format!(":{}", token.literal_name()),
        _ => token.text.clone(),
    }
}

fn is_task_name(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Symbol | TokenKind::String | TokenKind::Label
    )
}

/// Parse a Rake namespace
///
///     namespace :doc do ... end
///
/// Reopening a namespace that already exists in the current container continues the
/// existing one.
pub fn parse_namespace(context: &mut ScanContext<'_>, stream: &mut TokenStream) -> ScanFlow {
    let token = match next_argument(stream, true) {
        Some(token) if matches!(token.kind, TokenKind::Symbol | TokenKind::String) => token,
        Some(other) => {
            stream.unget(other);
            return ScanFlow::Continue;
        }
        None => return ScanFlow::EndOfInput,
    };
    let name = token.literal_name();

    let parent = context.container;
    let id = match context.document.find_child(parent, &name) {
        Some(id) => {
            debug!(namespace = %name, line = token.line, "namespace reopened");
            id
        }
        None => {
            let id = context.document.add_namespace(parent, name.as_str());
            context.stats.add_namespace(context.document.namespace(id));
            debug!(namespace = %name, line = token.line, "namespace created");
            id
        }
    };

    stream.skip_whitespace(false);

    let mut scope = context.enter_namespace(id);
    parse_rakefile(&mut scope, stream)
}

/// Parse a Rake task builder
///
///     Hoe.spec 'my_cool_project' do ... end
///     Rake::TestTask.new(:test) do |t| ... end
///
/// The rest of the line is read and a block opened on it is skipped. The constant is
/// recorded as an include of the current namespace, with or without a block.
pub fn parse_task_builder(context: &mut ScanContext<'_>, stream: &mut TokenStream, token: Token) {
    let line = token.line;
    let name = constant_path(stream, token.text);

    if context.options.is_ignored_constant(&name) {
        stream.read_until(&[TokenKind::Newline]);
        return;
    }

    let run = stream.read_until(&[TokenKind::Do, TokenKind::Newline]);
    if let Some(open) = run.last().filter(|t| t.kind == TokenKind::Do) {
        stream.unget(open.clone());
        let block = consume_body(stream);
        debug!(builder = %name, line, tokens = block.len(), "task builder block skipped");
    }

    debug!(builder = %name, line, "include recorded");
    context
        .document
        .add_include(context.container, Include::new(name, line));
}

/// Extend a constant with the `::Name` segments that follow it
fn constant_path(stream: &mut TokenStream, mut name: String) -> String {
    while let Some(separator) = stream.next() {
        if separator.kind != TokenKind::ColonColon {
            stream.unget(separator);
            break;
        }
        match stream.next() {
            Some(segment) if segment.kind == TokenKind::Constant => {
                name.push_str("::");
                name.push_str(&segment.text);
            }
            Some(other) => {
                stream.unget(other);
                break;
            }
            None => break,
        }
    }
    name
}

/// Parse a Rake description
///
///     desc "My cool task"
pub fn parse_description(context: &mut ScanContext<'_>, stream: &mut TokenStream) {
    match next_argument(stream, true) {
        Some(token) if token.kind == TokenKind::String => {
            context.description.set(token.literal_name());
        }
        Some(other) => stream.unget(other),
        None => {}
    }
}

/// Parse a require, which always belongs to the document
///
///     require 'rake/clean'
pub fn parse_require(context: &mut ScanContext<'_>, stream: &mut TokenStream, relative: bool) {
    match next_argument(stream, false) {
        Some(token) if token.kind == TokenKind::String => {
            let name = token.literal_name();
            debug!(require = %name, relative, line = token.line, "require recorded");
            context
                .document
                .add_require(Require::new(name, token.line).relative(relative));
        }
        Some(other) => stream.unget(other),
        None => {}
    }
}

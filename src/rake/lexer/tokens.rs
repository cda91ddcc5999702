//! Token definitions for Rakefiles
//!
//! This module defines the token kinds produced by the Rakefile lexer. Kinds are derived with
//! logos; the positioned [`Token`] pairs a kind with its line, column and literal text.
//! A handful of kinds are never produced by logos itself, they are assigned by the
//! [keyword transformation](super::keyword_transform) pass once the surrounding tokens are known.
use logos::Logos;
use serde::Serialize;

/// All token kinds the Rakefile lexer can produce
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    // Block keywords
    #[token("do")]
    Do,
    #[token("end")]
    End,
    #[token("class")]
    Class,
    #[token("module")]
    Module,
    #[token("def")]
    Def,
    #[token("begin")]
    Begin,
    #[token("if")]
    If,
    #[token("unless")]
    Unless,
    #[token("case")]
    Case,
    #[token("while")]
    While,
    #[token("until")]
    Until,
    #[token("for")]
    For,

    // Only meaningful at column 0, demoted to Identifier elsewhere
    #[token("__END__")]
    EndOfScript,

    // Contextual kinds, assigned after lexing
    IfModifier,
    UnlessModifier,
    WhileModifier,
    UntilModifier,
    DoCondition,
    Label,

    // Names
    #[regex(r"[a-z_][A-Za-z0-9_]*[?!]?")]
    Identifier,
    #[regex(r"[A-Z][A-Za-z0-9_]*")]
    Constant,
    #[regex(r"@@?[A-Za-z_][A-Za-z0-9_]*")]
    InstanceVariable,
    #[regex(r"\$[A-Za-z0-9_]+")]
    GlobalVariable,

    // Literals
    #[regex(r":[A-Za-z_][A-Za-z0-9_]*[?!]?")]
    #[regex(r#":"([^"\\]|\\.)*""#)]
    #[regex(r":'([^'\\]|\\.)*'")]
    Symbol,
    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\]|\\.)*'")]
    String,
    /// Heredoc opener such as `<<~EOS`. The lexer folds the body into the String that
    /// follows the end of the line.
    #[regex(r#"<<[~-]?([A-Za-z_][A-Za-z0-9_]*|'[^'\n]*'|"[^"\n]*")"#)]
    Heredoc,
    #[regex(r"[0-9][0-9_]*(\.[0-9]+)?")]
    Integer,

    #[regex(r"#[^\n]*")]
    Comment,

    // Whitespace (line breaks are their own kind)
    #[regex(r"[ \t\r]+")]
    Space,
    #[token("\n")]
    Newline,

    // Punctuation
    #[token("=>")]
    Assoc,
    #[token("=")]
    Assign,
    #[token(">")]
    Gt,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("::")]
    ColonColon,
    #[token(":")]
    Colon,
    #[token("|")]
    Pipe,
    #[regex(r"[+\-*/%<!&^~?;\\]")]
    Operator,

    // Input logos could not classify, such as an unterminated quote
    Unknown,
}

impl TokenKind {
    /// Keywords that open a block closed by a matching `end`
    pub fn opens_block(&self) -> bool {
        matches!(
            self,
            TokenKind::Do
                | TokenKind::Class
                | TokenKind::Module
                | TokenKind::Def
                | TokenKind::Begin
                | TokenKind::If
                | TokenKind::Unless
                | TokenKind::Case
                | TokenKind::While
                | TokenKind::Until
                | TokenKind::For
        )
    }

    pub fn closes_block(&self) -> bool {
        matches!(self, TokenKind::End)
    }

    /// Check if this token is horizontal whitespace
    pub fn is_space(&self) -> bool {
        matches!(self, TokenKind::Space)
    }

    /// Check if this token is a reserved word in any of its contextual forms
    pub fn is_keyword(&self) -> bool {
        self.opens_block()
            || matches!(
                self,
                TokenKind::End
                    | TokenKind::EndOfScript
                    | TokenKind::IfModifier
                    | TokenKind::UnlessModifier
                    | TokenKind::WhileModifier
                    | TokenKind::UntilModifier
                    | TokenKind::DoCondition
            )
    }

    /// Tokens that can end an expression, after which `if`/`unless`/`while`/`until`
    /// act as statement modifiers rather than opening a block.
    pub fn ends_value(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Constant
                | TokenKind::InstanceVariable
                | TokenKind::GlobalVariable
                | TokenKind::Symbol
                | TokenKind::String
                | TokenKind::Heredoc
                | TokenKind::Integer
                | TokenKind::RParen
                | TokenKind::RBracket
                | TokenKind::RBrace
                | TokenKind::End
        )
    }
}

/// A classified token with its position and literal source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based line
    pub line: usize,
    /// 0-based column, counted in characters
    pub column: usize,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, column: usize, text: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            column,
            text: text.into(),
        }
    }

    /// The literal name this token denotes, without sigils or quotes.
    ///
    /// `:default`, `:"default"` and `:'default'` give `default`, `'blah'` gives `blah`, the label
    /// `default:` gives `default`. Any other token yields its text unchanged.
    pub fn literal_name(&self) -> String {
        match self.kind {
            TokenKind::Symbol => unquote(self.text.strip_prefix(':').unwrap_or(&self.text)),
            TokenKind::String => unquote(&self.text),
            TokenKind::Label => self
                .text
                .strip_suffix(':')
                .unwrap_or(&self.text)
                .to_string(),
            _ => self.text.clone(),
        }
    }
}

/// Remove the surrounding quote characters of a string literal and resolve the
/// escaped quote and backslash sequences. Text that is not quoted is returned as is.
pub fn unquote(text: &str) -> String {
    let mut chars = text.chars();
    let quote = match chars.next() {
        Some(q @ ('"' | '\'')) if text.len() >= 2 && text.ends_with(q) => q,
        _ => return text.to_string(),
    };
    let inner = &text[1..text.len() - 1];

    let mut result = String::with_capacity(inner.len());
    let mut escaped = false;
    for c in inner.chars() {
        if escaped {
            if c != quote && c != '\\' {
                result.push('\\');
            }
            result.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else {
            result.push(c);
        }
    }
    if escaped {
        result.push('\\');
    }
    result
}

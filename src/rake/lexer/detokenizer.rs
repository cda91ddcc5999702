//! Detokenizer for Rakefile token runs
//!
//! Tokens keep their literal text, so turning a run back into source is a concatenation.
//! Used for task display text and for rendering signature and body runs.
use crate::rake::lexer::tokens::Token;

/// Trait for converting a token to the source text it was read from
pub trait ToRakeString {
    fn to_rake_string(&self) -> String;
}

impl ToRakeString for Token {
    fn to_rake_string(&self) -> String {
        self.text.clone()
    }
}

/// Detokenize a run of tokens into a string
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(ToRakeString::to_rake_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rake::lexer::lex;

    #[test]
    fn test_detokenize_task() {
        let source = "desc \"my cool task\"\ntask :default => [:build, :test] do\n  sh 'rake'\nend\n";
        assert_eq!(detokenize(&lex(source)), source);
    }

    #[test]
    fn test_detokenize_empty() {
        assert_eq!(detokenize(&[]), "");
    }
}

//! Top-level error type for the translation pipeline.

use crate::parser::ast::SourceLocation;
use crate::parser::lexer::LexError;
use crate::parser::parse::ParseError;
use thiserror::Error;

/// Either of the two fatal failures a translation can hit.
///
/// `Display` is the one-line diagnostic returned by [`crate::transpile`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranspileError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl TranspileError {
    /// Where in the source the translation stopped.
    pub fn location(&self) -> SourceLocation {
        match self {
            TranspileError::Lex(err) => err.location(),
            TranspileError::Parse(err) => err.location(),
        }
    }
}

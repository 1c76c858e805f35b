//! # Introduction
//!
//! cpp2py translates a small, fixed subset of C++ into equivalent Python
//! source. The translation is a pure text-to-text function; the `cpp2py`
//! binary wraps it in a printer and a side-by-side terminal viewer built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Translation pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST → Generator → Python
//! ```
//!
//! 1. [`parser`] tokenises the source and builds an AST.
//! 2. [`codegen`] walks the AST once and renders Python text.
//! 3. [`driver`] reads a source file and runs the pipeline for the binary.
//! 4. [`ui`] is the ratatui viewer; not part of the stable library API.
//!
//! Each stage runs to completion before the next starts, and every call
//! builds fresh stage instances, so no state leaks between translations.
//!
//! ## Example
//!
//! ```
//! let python = cpp2py::transpile("int x = 5;\nif (x < 10) { x = x + 1; }");
//! assert_eq!(python, "x = 5\nif x < 10:\n    x = x + 1\n");
//!
//! let diagnostic = cpp2py::transpile("int x = @;");
//! assert_eq!(diagnostic, "Lexical error at line 1, column 9: illegal character '@'");
//! ```

pub mod codegen;
pub mod driver;
pub mod error;
pub mod parser;
pub mod ui;

pub use codegen::{CodegenOptions, Generator};
pub use error::TranspileError;

use parser::lexer::Lexer;
use parser::parse::Parser;

/// Translate C++ source to Python.
///
/// Never fails: a lexical or syntax error comes back as its one-line
/// diagnostic in place of the translation.
pub fn transpile(source: &str) -> String {
    match try_transpile(source) {
        Ok(python) => python,
        Err(err) => err.to_string(),
    }
}

/// Translate with default [`CodegenOptions`], reporting failures as errors.
pub fn try_transpile(source: &str) -> Result<String, TranspileError> {
    try_transpile_with(source, &CodegenOptions::default())
}

/// Translate with explicit code generation options.
pub fn try_transpile_with(
    source: &str,
    options: &CodegenOptions,
) -> Result<String, TranspileError> {
    let result = run_pipeline(source, options);
    if let Err(err) = &result {
        tracing::debug!(%err, "translation failed");
    }
    result
}

fn run_pipeline(source: &str, options: &CodegenOptions) -> Result<String, TranspileError> {
    let tokens = Lexer::new(source).tokenize()?;
    tracing::debug!(tokens = tokens.len(), "lexed source");

    let program = Parser::new(tokens).parse_program()?;
    tracing::debug!(
        includes = program.includes.len(),
        statements = program.statements.len(),
        "parsed program"
    );

    let python = Generator::new(options).generate(&program);
    tracing::debug!(bytes = python.len(), "generated python");

    Ok(python)
}

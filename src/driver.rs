//! File-based entry point shared by the printer and the viewer.

use crate::codegen::CodegenOptions;
use crate::error::TranspileError;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// A source file together with the outcome of translating it.
#[derive(Debug, Clone)]
pub struct Translation {
    pub source: String,
    pub result: Result<String, TranspileError>,
}

impl Translation {
    /// Translate in-memory source.
    pub fn from_source(source: String, options: &CodegenOptions) -> Self {
        let result = crate::try_transpile_with(&source, options);
        Self { source, result }
    }

    /// The Python text, or the diagnostic when translation failed.
    pub fn rendered(&self) -> String {
        match &self.result {
            Ok(python) => python.clone(),
            Err(err) => err.to_string(),
        }
    }

    /// 1-based line the translation stopped at, if it failed.
    pub fn error_line(&self) -> Option<usize> {
        self.result.as_ref().err().map(|err| err.location().line)
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Read `path` and translate its contents.
///
/// Only I/O failures are reported through the outer `Result`; a lexical or
/// syntax error lands in [`Translation::result`].
pub fn translate_file(path: &Path, options: &CodegenOptions) -> anyhow::Result<Translation> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read source file '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "read source file");

    Ok(Translation::from_source(source, options))
}

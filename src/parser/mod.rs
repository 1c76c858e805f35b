//! C++ subset parser
//!
//! This module transforms C++ source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parser struct, error type and helpers (tokens → AST)
//! - `statements` / `expressions`: the grammar, split by construct
//! - [`ast`]: AST node definitions
//!
//! # Supported C++ Subset
//!
//! - `#include <name>` directives before the first statement
//! - Types: `int`, `float` scalars; `int`-valued functions with `int` parameters
//! - Statements: declarations, assignment, `x++`, `if`/`else`, counted `for`,
//!   `while`, single-level classes with fields only, `cout`, `return`
//! - Expressions: `+ - * /`, `< >`, `&& ||`, `!`, literals and identifiers
//! - No parenthesized expressions, calls, pointers, arrays or templates
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one method per precedence level.
//! No external parser generator dependencies.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;

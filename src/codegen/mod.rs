//! Python code generation
//!
//! Walks a parsed [`Program`] once and renders Python source text:
//! - `statements`: one rule per statement node, emitting indented,
//!   newline-terminated lines
//! - `expressions`: inline fragments with no indentation or newline
//!
//! Nesting depth is passed down the recursion as a plain argument; the
//! generator itself holds only immutable configuration, so one instance can
//! render any number of programs.
//!
//! # Operator precedence
//!
//! Expressions are emitted infix without added parentheses. The output is only
//! faithful because Python orders `* /` over `+ -` over `< >` over `and` over
//! `or` the same way the parser does. Two known gaps: Python chains `a < b < c`
//! where C++ compares `(a < b) < c`, and Python's `not` binds looser than
//! comparison while `!` binds tighter.

mod expressions;
mod statements;

use crate::parser::ast::Program;

/// Default number of spaces per indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Code generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenOptions {
    /// Spaces per nesting level; clamped to at least 1.
    pub indent_width: usize,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl CodegenOptions {
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width.max(1);
        self
    }
}

/// Renders a [`Program`] as Python source.
pub struct Generator {
    indent_unit: String,
}

impl Generator {
    pub fn new(options: &CodegenOptions) -> Self {
        Self {
            indent_unit: " ".repeat(options.indent_width.max(1)),
        }
    }

    /// Generate Python text for the whole program. Includes produce no output.
    pub fn generate(&self, program: &Program) -> String {
        let mut out = String::new();
        for stmt in &program.statements {
            self.format_stmt(stmt, 0, &mut out);
        }
        out
    }

    fn pad(&self, depth: usize) -> String {
        self.indent_unit.repeat(depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::*;

    fn loc() -> SourceLocation {
        SourceLocation::new(1, 1)
    }

    fn var(name: &str) -> Box<AstNode> {
        Box::new(AstNode::Variable(name.to_string(), loc()))
    }

    fn int(n: u32) -> Box<AstNode> {
        Box::new(AstNode::IntLiteral(n.to_string(), loc()))
    }

    fn nested_program() -> Program {
        // while (n > 0) { if (n < 3) { n++; } n = n - 1; }
        Program {
            includes: vec![Include {
                header: "iostream".to_string(),
                location: loc(),
            }],
            statements: vec![AstNode::While {
                condition: Box::new(AstNode::BinaryOp {
                    op: BinOp::Gt,
                    left: var("n"),
                    right: int(0),
                    location: loc(),
                }),
                body: vec![
                    AstNode::If {
                        condition: Box::new(AstNode::BinaryOp {
                            op: BinOp::Lt,
                            left: var("n"),
                            right: int(3),
                            location: loc(),
                        }),
                        then_branch: vec![AstNode::Increment {
                            name: "n".to_string(),
                            location: loc(),
                        }],
                        else_branch: None,
                        location: loc(),
                    },
                    AstNode::Assignment {
                        name: "n".to_string(),
                        value: Box::new(AstNode::BinaryOp {
                            op: BinOp::Sub,
                            left: var("n"),
                            right: int(1),
                            location: loc(),
                        }),
                        location: loc(),
                    },
                ],
                location: loc(),
            }],
        }
    }

    #[test]
    fn test_nested_blocks_restore_depth() {
        let output = Generator::new(&CodegenOptions::default()).generate(&nested_program());

        assert_eq!(
            output,
            "while n > 0:\n    if n < 3:\n        n = n + 1\n    n = n - 1\n"
        );
    }

    #[test]
    fn test_custom_indent_width() {
        let options = CodegenOptions::default().with_indent_width(2);
        let output = Generator::new(&options).generate(&nested_program());

        assert_eq!(output, "while n > 0:\n  if n < 3:\n    n = n + 1\n  n = n - 1\n");
    }

    #[test]
    fn test_zero_indent_width_is_clamped() {
        let options = CodegenOptions::default().with_indent_width(0);
        assert_eq!(options.indent_width, 1);

        let raw = CodegenOptions { indent_width: 0 };
        let output = Generator::new(&raw).generate(&nested_program());
        assert!(output.contains("\n if n < 3:\n"));
    }

    #[test]
    fn test_generator_is_reusable() {
        let generator = Generator::new(&CodegenOptions::default());
        let program = nested_program();

        assert_eq!(generator.generate(&program), generator.generate(&program));
    }
}

// AST (Abstract Syntax Tree) definitions for the C++ subset

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Scalar types accepted in declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Int,
    Float,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    // Comparison
    Lt,
    Gt,
    // Logical
    And,
    Or,
}

impl BinOp {
    /// The operator as written in C++ source.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::And => "&&",
            BinOp::Or => "||",
        }
    }

    pub fn is_comparison(self) -> bool {
        matches!(self, BinOp::Lt | BinOp::Gt)
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Not, // !x
}

/// `#include <header>` directive
#[derive(Debug, Clone, PartialEq)]
pub struct Include {
    pub header: String,
    pub location: SourceLocation,
}

/// Function parameter (always `int`)
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub location: SourceLocation,
}

/// Class field
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub field_type: ScalarType,
    /// Parsed but not emitted: every field starts at zero.
    pub init: Option<Box<AstNode>>,
    pub location: SourceLocation,
}

/// AST nodes representing statements and expressions
///
/// Block bodies (`then_branch`, `body`, ...) and `Class::fields` are never
/// empty; the parser rejects `{}`.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    // Statements
    Declaration {
        name: String,
        var_type: ScalarType,
        init: Option<Box<AstNode>>,
        location: SourceLocation,
    },
    Assignment {
        name: String,
        value: Box<AstNode>,
        location: SourceLocation,
    },
    Increment {
        name: String,
        location: SourceLocation,
    },
    If {
        condition: Box<AstNode>,
        then_branch: Vec<AstNode>,
        else_branch: Option<Vec<AstNode>>,
        location: SourceLocation,
    },
    /// `for (int var = init; condition; var++)`; `condition` is always a
    /// comparison `BinaryOp`.
    For {
        var: String,
        init: Box<AstNode>,
        condition: Box<AstNode>,
        body: Vec<AstNode>,
        location: SourceLocation,
    },
    While {
        condition: Box<AstNode>,
        body: Vec<AstNode>,
        location: SourceLocation,
    },
    Function {
        name: String,
        params: Vec<Param>,
        body: Vec<AstNode>,
        location: SourceLocation,
    },
    Class {
        name: String,
        fields: Vec<Field>,
        location: SourceLocation,
    },
    /// `cout << a [<< b] [<< endl];`
    Output {
        values: Vec<AstNode>,
        newline: bool,
        location: SourceLocation,
    },
    Return {
        value: Box<AstNode>,
        location: SourceLocation,
    },

    // Expressions
    /// Decimal digits as lexed, without leading zeros
    IntLiteral(String, SourceLocation),
    FloatLiteral(f64, SourceLocation),
    StringLiteral(String, SourceLocation),
    Variable(String, SourceLocation),
    BinaryOp {
        op: BinOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
        location: SourceLocation,
    },
    UnaryOp {
        op: UnOp,
        operand: Box<AstNode>,
        location: SourceLocation,
    },
}

impl AstNode {
    /// Get the source location of this node
    pub fn location(&self) -> &SourceLocation {
        match self {
            AstNode::Declaration { location, .. } => location,
            AstNode::Assignment { location, .. } => location,
            AstNode::Increment { location, .. } => location,
            AstNode::If { location, .. } => location,
            AstNode::For { location, .. } => location,
            AstNode::While { location, .. } => location,
            AstNode::Function { location, .. } => location,
            AstNode::Class { location, .. } => location,
            AstNode::Output { location, .. } => location,
            AstNode::Return { location, .. } => location,
            AstNode::IntLiteral(_, loc) => loc,
            AstNode::FloatLiteral(_, loc) => loc,
            AstNode::StringLiteral(_, loc) => loc,
            AstNode::Variable(_, loc) => loc,
            AstNode::BinaryOp { location, .. } => location,
            AstNode::UnaryOp { location, .. } => location,
        }
    }

    /// Move every nested node into `out`, leaving empty leaves in their place.
    fn detach_children(&mut self, out: &mut Vec<AstNode>) {
        match self {
            AstNode::Declaration { init, .. } => out.extend(init.take().map(|expr| *expr)),
            AstNode::Assignment { value, .. } | AstNode::Return { value, .. } => {
                out.push(take_boxed(value));
            }
            AstNode::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                out.push(take_boxed(condition));
                out.append(then_branch);
                if let Some(body) = else_branch {
                    out.append(body);
                }
            }
            AstNode::For {
                init,
                condition,
                body,
                ..
            } => {
                out.push(take_boxed(init));
                out.push(take_boxed(condition));
                out.append(body);
            }
            AstNode::While {
                condition, body, ..
            } => {
                out.push(take_boxed(condition));
                out.append(body);
            }
            AstNode::Function { body, .. } => out.append(body),
            AstNode::Class { fields, .. } => {
                out.extend(fields.iter_mut().filter_map(|f| f.init.take()).map(|expr| *expr));
            }
            AstNode::Output { values, .. } => out.append(values),
            AstNode::BinaryOp { left, right, .. } => {
                out.push(take_boxed(left));
                out.push(take_boxed(right));
            }
            AstNode::UnaryOp { operand, .. } => out.push(take_boxed(operand)),
            AstNode::Increment { .. }
            | AstNode::IntLiteral(..)
            | AstNode::FloatLiteral(..)
            | AstNode::StringLiteral(..)
            | AstNode::Variable(..) => {}
        }
    }
}

fn take_boxed(node: &mut Box<AstNode>) -> AstNode {
    std::mem::replace(
        &mut **node,
        AstNode::IntLiteral(String::new(), SourceLocation::new(0, 0)),
    )
}

/// Long operator chains nest thousands of boxes deep; tear them down with an
/// explicit worklist instead of recursive drop glue.
impl Drop for AstNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub includes: Vec<Include>,
    pub statements: Vec<AstNode>, // Never empty once parsed
}

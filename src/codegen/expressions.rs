//! Expression rendering

use super::Generator;
use crate::parser::ast::{AstNode, BinOp, UnOp};

/// Python spelling of a binary operator.
fn python_operator(op: BinOp) -> &'static str {
    match op {
        BinOp::And => "and",
        BinOp::Or => "or",
        BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div | BinOp::Lt | BinOp::Gt => op.symbol(),
    }
}

impl Generator {
    /// Render an expression inline.
    ///
    /// Left-associative chains are walked down their left spine and
    /// emitted in a loop, so call depth does not grow with chain length.
    pub(super) fn format_expr(&self, expr: &AstNode) -> String {
        let mut spine = Vec::new();
        let mut node = expr;
        while let AstNode::BinaryOp {
            op, left, right, ..
        } = node
        {
            spine.push((*op, &**right));
            node = &**left;
        }

        let mut out = self.format_operand(node);
        for (op, right) in spine.into_iter().rev() {
            out.push(' ');
            out.push_str(python_operator(op));
            out.push(' ');
            out.push_str(&self.format_expr(right));
        }
        out
    }

    fn format_operand(&self, expr: &AstNode) -> String {
        match expr {
            AstNode::UnaryOp { .. } => {
                let mut negations = 0;
                let mut node = expr;
                while let AstNode::UnaryOp {
                    op: UnOp::Not,
                    operand,
                    ..
                } = node
                {
                    negations += 1;
                    node = &**operand;
                }
                format!("{}{}", "not ".repeat(negations), self.format_expr(node))
            }
            AstNode::IntLiteral(digits, _) => digits.clone(),
            // Debug keeps the fractional part: 3.0 stays "3.0"
            AstNode::FloatLiteral(x, _) => format!("{:?}", x),
            AstNode::StringLiteral(s, _) => format!("\"{}\"", s),
            AstNode::Variable(name, _) => name.clone(),
            AstNode::BinaryOp { .. } => self.format_expr(expr),
            stmt => unreachable!("statement in expression position: {:?}", stmt),
        }
    }
}

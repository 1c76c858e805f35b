//! Expression parsing implementation
//!
//! One method per precedence level, lowest first. Every binary level is
//! left-associative.
//!
//! ```text
//! expression     ::= logic_or
//! logic_or       ::= logic_and ("||" logic_and)*
//! logic_and      ::= comparison ("&&" comparison)*
//! comparison     ::= additive (("<" | ">") additive)*
//! additive       ::= multiplicative (("+" | "-") multiplicative)*
//! multiplicative ::= unary (("*" | "/") unary)*
//! unary          ::= "!" unary | primary
//! primary        ::= INT | FLOAT | STRING | IDENT
//! ```
//!
//! There are no parenthesized sub-expressions and no calls. A `<` directly
//! followed by another `<` is the output operator `<<`, so the comparison
//! level stops there and leaves it to the output statement.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<AstNode, ParseError> {
        self.parse_logical_or()
    }

    /// Parse logical OR (||)
    fn parse_logical_or(&mut self) -> Result<AstNode, ParseError> {
        let mut left = self.parse_logical_and()?;

        while self.match_token(&TokenKind::OrOr) {
            let loc = self.previous_location();
            let right = Box::new(self.parse_logical_and()?);
            left = AstNode::BinaryOp {
                op: BinOp::Or,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse logical AND (&&)
    fn parse_logical_and(&mut self) -> Result<AstNode, ParseError> {
        let mut left = self.parse_comparison()?;

        while self.match_token(&TokenKind::AndAnd) {
            let loc = self.previous_location();
            let right = Box::new(self.parse_comparison()?);
            left = AstNode::BinaryOp {
                op: BinOp::And,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse comparison (< >)
    fn parse_comparison(&mut self) -> Result<AstNode, ParseError> {
        let mut left = self.parse_additive()?;

        loop {
            let op = if self.check(&TokenKind::Lt) && !self.check_ahead(1, &TokenKind::Lt) {
                BinOp::Lt
            } else if self.check(&TokenKind::Gt) {
                BinOp::Gt
            } else {
                break;
            };

            let loc = self.advance().location;
            let right = Box::new(self.parse_additive()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<AstNode, ParseError> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = if self.match_token(&TokenKind::Plus) {
                BinOp::Add
            } else if self.match_token(&TokenKind::Minus) {
                BinOp::Sub
            } else {
                break;
            };

            let loc = self.previous_location();
            let right = Box::new(self.parse_multiplicative()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse multiplicative (* /)
    fn parse_multiplicative(&mut self) -> Result<AstNode, ParseError> {
        let mut left = self.parse_unary()?;

        loop {
            let op = if self.match_token(&TokenKind::Star) {
                BinOp::Mul
            } else if self.match_token(&TokenKind::Slash) {
                BinOp::Div
            } else {
                break;
            };

            let loc = self.previous_location();
            let right = Box::new(self.parse_unary()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse unary (!)
    ///
    /// Loops over the prefix run so `!!!x` does not recurse once per `!`.
    fn parse_unary(&mut self) -> Result<AstNode, ParseError> {
        let mut negations = Vec::new();
        while self.match_token(&TokenKind::Bang) {
            negations.push(self.previous_location());
        }

        let mut node = self.parse_primary()?;
        for loc in negations.into_iter().rev() {
            node = AstNode::UnaryOp {
                op: UnOp::Not,
                operand: Box::new(node),
                location: loc,
            };
        }

        Ok(node)
    }

    /// Parse primary: literal or identifier
    fn parse_primary(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.current_location();

        let node = match &self.peek().kind {
            TokenKind::IntLiteral(digits) => AstNode::IntLiteral(digits.clone(), loc),
            TokenKind::FloatLiteral(x) => AstNode::FloatLiteral(*x, loc),
            TokenKind::StringLiteral(s) => AstNode::StringLiteral(s.clone(), loc),
            TokenKind::Ident(name) => AstNode::Variable(name.clone(), loc),
            _ => return Err(self.unexpected("expression")),
        };

        self.advance();
        Ok(node)
    }
}

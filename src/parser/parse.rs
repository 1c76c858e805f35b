//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: Parsing statements (declarations, control flow, functions, classes)
//! - `expressions`: Parsing expressions, one method per precedence level
//!
//! # Grammar
//!
//! ```text
//! program ::= include* statement+ EOF
//! include ::= "#include <" word ">"
//! ```
//!
//! Every production has exactly one legal continuation at each point, so the
//! first mismatch is reported and parsing stops; there is no recovery.
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.

use crate::parser::ast::*;
use crate::parser::lexer::{Token, TokenKind};
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Syntax error at {location}: unexpected {found}, expected {expected}")]
    UnexpectedToken {
        found: TokenKind,
        expected: String,
        location: SourceLocation,
    },

    #[error("Syntax error at {location}: unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput {
        expected: String,
        location: SourceLocation,
    },
}

impl ParseError {
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::UnexpectedToken { location, .. }
            | ParseError::UnexpectedEndOfInput { location, .. } => *location,
        }
    }
}

/// Recursive descent parser for the C++ subset.
///
/// A parser is single-use: [`Parser::parse_program`] consumes it.
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    /// Create a parser over a token stream produced by the lexer.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !matches!(tokens.last(), Some(Token { kind: TokenKind::Eof, .. })) {
            let location = tokens
                .last()
                .map(|t| t.location)
                .unwrap_or(SourceLocation::new(1, 1));
            tokens.push(Token::new(TokenKind::Eof, location));
        }

        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the entire program: leading includes, then at least one statement.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut includes = Vec::new();

        while let TokenKind::IncludeDirective(header) = &self.peek().kind {
            includes.push(Include {
                header: header.clone(),
                location: self.current_location(),
            });
            self.advance();
        }

        let mut statements = vec![self.parse_statement()?];
        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        Ok(Program {
            includes,
            statements,
        })
    }

    // ===== Helper methods =====

    pub(crate) fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind)
    }

    pub(crate) fn check_ahead(&self, n: usize, kind: &TokenKind) -> bool {
        self.peek_ahead(n)
            .is_some_and(|t| std::mem::discriminant(&t.kind) == std::mem::discriminant(kind))
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    pub(crate) fn previous_location(&self) -> SourceLocation {
        self.previous().location
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location
    }

    /// Error describing the current token as unexpected.
    pub(crate) fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        let token = self.peek();
        match &token.kind {
            TokenKind::Eof => ParseError::UnexpectedEndOfInput {
                expected: expected.into(),
                location: token.location,
            },
            kind => ParseError::UnexpectedToken {
                found: kind.clone(),
                expected: expected.into(),
                location: token.location,
            },
        }
    }

    pub(crate) fn expect_token(
        &mut self,
        kind: &TokenKind,
        expected: &str,
    ) -> Result<SourceLocation, ParseError> {
        if self.check(kind) {
            Ok(self.advance().location)
        } else {
            Err(self.unexpected(expected))
        }
    }

    pub(crate) fn expect_lparen(&mut self, ctx: &str) -> Result<SourceLocation, ParseError> {
        self.expect_token(&TokenKind::LParen, &format!("'(' {ctx}"))
    }

    pub(crate) fn expect_rparen(&mut self, ctx: &str) -> Result<SourceLocation, ParseError> {
        self.expect_token(&TokenKind::RParen, &format!("')' {ctx}"))
    }

    pub(crate) fn expect_lbrace(&mut self, ctx: &str) -> Result<SourceLocation, ParseError> {
        self.expect_token(&TokenKind::LBrace, &format!("'{{' {ctx}"))
    }

    pub(crate) fn expect_rbrace(&mut self, ctx: &str) -> Result<SourceLocation, ParseError> {
        self.expect_token(&TokenKind::RBrace, &format!("'}}' {ctx}"))
    }

    pub(crate) fn expect_semicolon(&mut self, ctx: &str) -> Result<SourceLocation, ParseError> {
        self.expect_token(&TokenKind::Semicolon, &format!("';' {ctx}"))
    }

    pub(crate) fn expect_identifier(&mut self, ctx: &str) -> Result<String, ParseError> {
        if let TokenKind::Ident(name) = &self.peek().kind {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.unexpected(format!("identifier {ctx}")))
        }
    }
}

//! Statement parsing implementation
//!
//! This module handles parsing of all statement types in the C++ subset:
//!
//! - Variable declarations: `int x = 42;`, `float y = 1.5;`, `int z;`
//! - Assignment and post-increment: `x = x + 1;`, `x++;`
//! - Control flow: `if`/`else`, counted `for`, `while`
//! - Function definitions (int-valued, int parameters only)
//! - Class definitions (fields only)
//! - Output (`cout << ...`) and `return`
//!
//! # Grammar
//!
//! ```text
//! statement   ::= declaration | function | assignment | increment | if_stmt
//!               | for_stmt | while_stmt | class_def | output | return_stmt
//! declaration ::= ("int" | "float") IDENT ("=" expression)? ";"
//! function    ::= "int" IDENT "(" params? ")" block
//! params      ::= "int" IDENT ("," "int" IDENT)*
//! assignment  ::= IDENT "=" expression ";"
//! increment   ::= IDENT "++" ";"
//! if_stmt     ::= "if" "(" expression ")" block ("else" block)?
//! for_stmt    ::= "for" "(" "int" IDENT "=" expression ";" comparison ";" IDENT "++" ")" block
//! while_stmt  ::= "while" "(" expression ")" block
//! class_def   ::= "class" IDENT "{" declaration+ "}" ";"
//! output      ::= "cout" "<<" expression ("<<" expression)? ("<<" "endl")? ";"
//! return_stmt ::= "return" expression ";"
//! block       ::= "{" statement+ "}"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.current_location();

        // `int name (` starts a function, any other `int` a declaration
        if self.check(&TokenKind::Int) && self.check_ahead(2, &TokenKind::LParen) {
            return self.parse_function_definition();
        }

        if self.check(&TokenKind::Int) || self.check(&TokenKind::Float) {
            return self.parse_variable_declaration();
        }

        if self.match_token(&TokenKind::If) {
            return self.parse_if_statement(loc);
        }

        if self.match_token(&TokenKind::For) {
            return self.parse_for_statement(loc);
        }

        if self.match_token(&TokenKind::While) {
            return self.parse_while_statement(loc);
        }

        if self.match_token(&TokenKind::Class) {
            return self.parse_class_definition(loc);
        }

        if self.match_token(&TokenKind::Cout) {
            return self.parse_output_statement(loc);
        }

        if self.match_token(&TokenKind::Return) {
            let value = Box::new(self.parse_expression()?);
            self.expect_semicolon("after return value")?;
            return Ok(AstNode::Return {
                value,
                location: loc,
            });
        }

        if let TokenKind::Ident(_) = self.peek().kind {
            return self.parse_assignment_or_increment();
        }

        Err(self.unexpected("statement"))
    }

    /// Parse block: `{ statement+ }`
    pub(crate) fn parse_block(&mut self, ctx: &str) -> Result<Vec<AstNode>, ParseError> {
        self.expect_lbrace(ctx)?;

        let mut statements = vec![self.parse_statement()?];
        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        self.expect_rbrace("at end of block")?;
        Ok(statements)
    }

    /// Parse `type name [= expr];`, shared by statements and class fields
    fn parse_declarator(&mut self, ctx: &str) -> Result<Field, ParseError> {
        let location = self.current_location();

        let field_type = if self.match_token(&TokenKind::Int) {
            ScalarType::Int
        } else if self.match_token(&TokenKind::Float) {
            ScalarType::Float
        } else {
            return Err(self.unexpected("'int' or 'float'"));
        };

        let name = self.expect_identifier("after type")?;

        let init = if self.match_token(&TokenKind::Eq) {
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };

        self.expect_semicolon(ctx)?;

        Ok(Field {
            name,
            field_type,
            init,
            location,
        })
    }

    fn parse_variable_declaration(&mut self) -> Result<AstNode, ParseError> {
        let Field {
            name,
            field_type,
            init,
            location,
        } = self.parse_declarator("after declaration")?;

        Ok(AstNode::Declaration {
            name,
            var_type: field_type,
            init,
            location,
        })
    }

    /// Parse `name = expr;` or `name++;`
    fn parse_assignment_or_increment(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.current_location();
        let name = self.expect_identifier("at start of statement")?;

        if self.match_token(&TokenKind::PlusPlus) {
            self.expect_semicolon("after increment")?;
            return Ok(AstNode::Increment {
                name,
                location: loc,
            });
        }

        self.expect_token(&TokenKind::Eq, "'=' or '++' after identifier")?;
        let value = Box::new(self.parse_expression()?);
        self.expect_semicolon("after assignment")?;

        Ok(AstNode::Assignment {
            name,
            value,
            location: loc,
        })
    }

    /// Parse function definition: int name(params) { body }
    fn parse_function_definition(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.expect_token(&TokenKind::Int, "'int' return type")?;
        let name = self.expect_identifier("after 'int'")?;

        self.expect_lparen("after function name")?;
        let params = self.parse_parameter_list()?;
        self.expect_rparen("after parameters")?;

        let body = self.parse_block("before function body")?;

        Ok(AstNode::Function {
            name,
            params,
            body,
            location: loc,
        })
    }

    /// Parse parameter list: int a, int b, ...
    fn parse_parameter_list(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();

        if self.check(&TokenKind::RParen) {
            return Ok(params);
        }

        loop {
            let location = self.expect_token(&TokenKind::Int, "'int' parameter type")?;
            let name = self.expect_identifier("after parameter type")?;
            params.push(Param { name, location });

            if !self.match_token(&TokenKind::Comma) {
                break;
            }
        }

        Ok(params)
    }

    fn parse_if_statement(&mut self, loc: SourceLocation) -> Result<AstNode, ParseError> {
        self.expect_lparen("after 'if'")?;
        let condition = Box::new(self.parse_expression()?);
        self.expect_rparen("after if condition")?;

        let then_branch = self.parse_block("before if body")?;

        let else_branch = if self.match_token(&TokenKind::Else) {
            Some(self.parse_block("after 'else'")?)
        } else {
            None
        };

        Ok(AstNode::If {
            condition,
            then_branch,
            else_branch,
            location: loc,
        })
    }

    /// Parse the one accepted loop shape:
    /// `for (int i = init; i < limit; i++) { ... }`
    ///
    /// The guard must be a `<` or `>` comparison. The identifier in the
    /// increment clause is not checked against the induction variable.
    fn parse_for_statement(&mut self, loc: SourceLocation) -> Result<AstNode, ParseError> {
        self.expect_lparen("after 'for'")?;

        self.expect_token(&TokenKind::Int, "'int' in for-loop initializer")?;
        let var = self.expect_identifier("in for-loop initializer")?;
        self.expect_token(&TokenKind::Eq, "'=' in for-loop initializer")?;
        let init = Box::new(self.parse_expression()?);
        self.expect_semicolon("after for-loop initializer")?;

        let guard_start = self.peek().clone();
        let condition = self.parse_expression()?;
        if !matches!(condition, AstNode::BinaryOp { op, .. } if op.is_comparison()) {
            return Err(ParseError::UnexpectedToken {
                found: guard_start.kind,
                expected: "comparison in for-loop condition".to_string(),
                location: guard_start.location,
            });
        }
        self.expect_semicolon("after for-loop condition")?;

        self.expect_identifier("in for-loop increment")?;
        self.expect_token(&TokenKind::PlusPlus, "'++' in for-loop increment")?;
        self.expect_rparen("after for-loop increment")?;

        let body = self.parse_block("before for body")?;

        Ok(AstNode::For {
            var,
            init,
            condition: Box::new(condition),
            body,
            location: loc,
        })
    }

    fn parse_while_statement(&mut self, loc: SourceLocation) -> Result<AstNode, ParseError> {
        self.expect_lparen("after 'while'")?;
        let condition = Box::new(self.parse_expression()?);
        self.expect_rparen("after while condition")?;

        let body = self.parse_block("before while body")?;

        Ok(AstNode::While {
            condition,
            body,
            location: loc,
        })
    }

    /// Parse class definition: class Name { fields };
    fn parse_class_definition(&mut self, loc: SourceLocation) -> Result<AstNode, ParseError> {
        let name = self.expect_identifier("after 'class'")?;
        self.expect_lbrace("after class name")?;

        let mut fields = vec![self.parse_declarator("after class field")?];
        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            fields.push(self.parse_declarator("after class field")?);
        }

        self.expect_rbrace("after class fields")?;
        self.expect_semicolon("after class definition")?;

        Ok(AstNode::Class {
            name,
            fields,
            location: loc,
        })
    }

    /// Parse `cout << a [<< b] [<< endl];`
    fn parse_output_statement(&mut self, loc: SourceLocation) -> Result<AstNode, ParseError> {
        self.expect_stream_operator("after 'cout'")?;

        let mut values = vec![self.parse_expression()?];
        let mut newline = false;

        while self.check(&TokenKind::Lt) {
            self.expect_stream_operator("in output chain")?;

            if self.match_token(&TokenKind::Endl) {
                newline = true;
                break;
            }

            if values.len() == 2 {
                return Err(self.unexpected("'endl'"));
            }
            values.push(self.parse_expression()?);
        }

        self.expect_semicolon("after output statement")?;

        Ok(AstNode::Output {
            values,
            newline,
            location: loc,
        })
    }

    /// `<<` arrives from the lexer as two `<` tokens.
    fn expect_stream_operator(&mut self, ctx: &str) -> Result<(), ParseError> {
        let expected = format!("'<<' {ctx}");
        self.expect_token(&TokenKind::Lt, &expected)?;
        self.expect_token(&TokenKind::Lt, &expected)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::lexer::{Lexer, TokenKind};
    use crate::parser::parse::{ParseError, Parser};

    fn parse_one(source: &str) -> AstNode {
        let tokens = Lexer::new(source).tokenize().unwrap();
        let mut program = Parser::new(tokens).parse_program().unwrap();
        assert_eq!(program.statements.len(), 1);
        program.statements.remove(0)
    }

    fn parse_err(source: &str) -> ParseError {
        let tokens = Lexer::new(source).tokenize().unwrap();
        Parser::new(tokens).parse_program().unwrap_err()
    }

    #[test]
    fn test_declarations() {
        assert!(matches!(
            parse_one("int x;"),
            AstNode::Declaration { var_type: ScalarType::Int, init: None, .. }
        ));
        assert!(matches!(
            parse_one("float y = 1.5;"),
            AstNode::Declaration { var_type: ScalarType::Float, init: Some(_), .. }
        ));
    }

    #[test]
    fn test_if_else() {
        match &parse_one("if (x > 1) { x = 1; } else { x = 2; x++; }") {
            AstNode::If {
                then_branch,
                else_branch,
                ..
            } => {
                assert_eq!(then_branch.len(), 1);
                assert_eq!(else_branch.as_ref().map(|b| b.len()), Some(2));
            }
            other => panic!("Expected if statement, got {:?}", other),
        }
    }

    #[test]
    fn test_for_loop_shape() {
        match &parse_one("for (int i = 0; i < n; i++) { x = i; }") {
            AstNode::For {
                var,
                init,
                condition,
                body,
                ..
            } => {
                assert_eq!(var, "i");
                assert!(matches!(&**init, AstNode::IntLiteral(digits, _) if digits == "0"));
                assert!(matches!(&**condition, AstNode::BinaryOp { op: BinOp::Lt, .. }));
                assert_eq!(body.len(), 1);
            }
            other => panic!("Expected for loop, got {:?}", other),
        }
    }

    #[test]
    fn test_for_guard_must_be_comparison() {
        let err = parse_err("for (int i = 0; n; i++) { x = i; }");

        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                found: TokenKind::Ident("n".to_string()),
                expected: "comparison in for-loop condition".to_string(),
                location: SourceLocation::new(1, 17),
            }
        );
    }

    #[test]
    fn test_for_requires_post_increment() {
        let err = parse_err("for (int i = 0; i < 3; i = i + 1) { x = i; }");
        assert!(matches!(err, ParseError::UnexpectedToken { found: TokenKind::Eq, .. }));
    }

    #[test]
    fn test_empty_block_is_rejected() {
        let err = parse_err("while (x) { }");
        assert!(matches!(err, ParseError::UnexpectedToken { found: TokenKind::RBrace, .. }));
    }

    #[test]
    fn test_output_forms() {
        assert!(matches!(
            parse_one("cout << x;"),
            AstNode::Output { ref values, newline: false, .. } if values.len() == 1
        ));
        assert!(matches!(
            parse_one("cout << x << endl;"),
            AstNode::Output { ref values, newline: true, .. } if values.len() == 1
        ));
        assert!(matches!(
            parse_one("cout << \"x = \" << x << endl;"),
            AstNode::Output { ref values, newline: true, .. } if values.len() == 2
        ));
    }

    #[test]
    fn test_output_comparison_stays_inside_value() {
        match &parse_one("cout << a < b << endl;") {
            AstNode::Output { values, .. } => {
                assert!(matches!(values[0], AstNode::BinaryOp { op: BinOp::Lt, .. }));
            }
            other => panic!("Expected output statement, got {:?}", other),
        }
    }

    #[test]
    fn test_output_chain_limited_to_two_values() {
        let err = parse_err("cout << a << b << c;");
        assert_eq!(
            err.to_string(),
            "Syntax error at line 1, column 19: unexpected identifier 'c', expected 'endl'"
        );
    }

    #[test]
    fn test_class_requires_trailing_semicolon() {
        let err = parse_err("class A { int x; }");
        assert!(matches!(
            err,
            ParseError::UnexpectedEndOfInput { ref expected, .. } if expected == "';' after class definition"
        ));
    }

    #[test]
    fn test_function_without_params() {
        match &parse_one("int main() { return 0; }") {
            AstNode::Function { name, params, .. } => {
                assert_eq!(name, "main");
                assert!(params.is_empty());
            }
            other => panic!("Expected function, got {:?}", other),
        }
    }

    #[test]
    fn test_function_params_must_be_int() {
        let err = parse_err("int f(float a) { return a; }");
        assert!(matches!(err, ParseError::UnexpectedToken { found: TokenKind::Float, .. }));
    }

    #[test]
    fn test_unclosed_block_reports_end_of_input() {
        let err = parse_err("if (x < 1) {\n  x = 1;\n");

        assert_eq!(
            err,
            ParseError::UnexpectedEndOfInput {
                expected: "'}' at end of block".to_string(),
                location: SourceLocation::new(3, 1),
            }
        );
    }
}

//! Lexer (tokenizer) for the C++ subset
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! `#include <name>` is kept as a single [`TokenKind::IncludeDirective`] token;
//! every other use of `#` is rejected.
//!
//! Block comments are only recognised when `/*` and `*/` sit on the same line.
//! A `/*` without a closing `*/` before the end of its line is not a comment at
//! all and lexes as `/` followed by `*`.

use super::ast::SourceLocation;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Kinds of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Decimal digits without leading zeros; any length is accepted.
    IntLiteral(String),
    FloatLiteral(f64),
    StringLiteral(String),

    // Identifiers
    Ident(String),

    // `#include <header>`
    IncludeDirective(String),

    // Keywords
    Int,
    Float,
    Class,
    If,
    Else,
    For,
    While,
    Return,
    Cout,
    Endl,
    Include,
    StringKw,
    Iostream,
    Namespace,
    Std,

    // Arithmetic
    Plus,     // +
    Minus,    // -
    Star,     // *
    Slash,    // /
    PlusPlus, // ++

    // Comparison
    Lt, // <
    Gt, // >

    // Logical
    AndAnd, // &&
    OrOr,   // ||
    Bang,   // !

    // Punctuation
    Eq,        // =
    Arrow,     // ->
    Colon,     // :
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    LBracket,  // [
    RBracket,  // ]
    Semicolon, // ;
    Comma,     // ,

    // End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::IntLiteral(n) => write!(f, "integer literal {}", n),
            TokenKind::FloatLiteral(x) => write!(f, "float literal {:?}", x),
            TokenKind::StringLiteral(s) => write!(f, "string literal \"{}\"", s),
            TokenKind::Ident(s) => write!(f, "identifier '{}'", s),
            TokenKind::IncludeDirective(h) => write!(f, "'#include <{}>'", h),
            TokenKind::Int => write!(f, "'int'"),
            TokenKind::Float => write!(f, "'float'"),
            TokenKind::Class => write!(f, "'class'"),
            TokenKind::If => write!(f, "'if'"),
            TokenKind::Else => write!(f, "'else'"),
            TokenKind::For => write!(f, "'for'"),
            TokenKind::While => write!(f, "'while'"),
            TokenKind::Return => write!(f, "'return'"),
            TokenKind::Cout => write!(f, "'cout'"),
            TokenKind::Endl => write!(f, "'endl'"),
            TokenKind::Include => write!(f, "'include'"),
            TokenKind::StringKw => write!(f, "'string'"),
            TokenKind::Iostream => write!(f, "'iostream'"),
            TokenKind::Namespace => write!(f, "'namespace'"),
            TokenKind::Std => write!(f, "'std'"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::PlusPlus => write!(f, "'++'"),
            TokenKind::Lt => write!(f, "'<'"),
            TokenKind::Gt => write!(f, "'>'"),
            TokenKind::AndAnd => write!(f, "'&&'"),
            TokenKind::OrOr => write!(f, "'||'"),
            TokenKind::Bang => write!(f, "'!'"),
            TokenKind::Eq => write!(f, "'='"),
            TokenKind::Arrow => write!(f, "'->'"),
            TokenKind::Colon => write!(f, "':'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::LBracket => write!(f, "'['"),
            TokenKind::RBracket => write!(f, "']'"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// A classified lexical unit and the position where it begins.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Lexical error at {location}: illegal character '{character}'")]
    IllegalCharacter {
        character: char,
        location: SourceLocation,
    },
}

impl LexError {
    pub fn location(&self) -> SourceLocation {
        match self {
            LexError::IllegalCharacter { location, .. } => *location,
        }
    }
}

/// Reserved words, looked up once per scanned identifier.
fn keyword_table() -> FxHashMap<&'static str, TokenKind> {
    let mut keywords = FxHashMap::default();
    keywords.insert("int", TokenKind::Int);
    keywords.insert("float", TokenKind::Float);
    keywords.insert("class", TokenKind::Class);
    keywords.insert("if", TokenKind::If);
    keywords.insert("else", TokenKind::Else);
    keywords.insert("for", TokenKind::For);
    keywords.insert("while", TokenKind::While);
    keywords.insert("return", TokenKind::Return);
    keywords.insert("cout", TokenKind::Cout);
    keywords.insert("endl", TokenKind::Endl);
    keywords.insert("include", TokenKind::Include);
    keywords.insert("string", TokenKind::StringKw);
    keywords.insert("iostream", TokenKind::Iostream);
    keywords.insert("namespace", TokenKind::Namespace);
    keywords.insert("std", TokenKind::Std);
    keywords
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Lexer for C++ subset source code.
///
/// A lexer is single-use: [`Lexer::tokenize`] consumes it, so line and column
/// counters always start fresh for each input.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    keywords: FxHashMap<&'static str, TokenKind>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            keywords: keyword_table(),
        }
    }

    /// Tokenize the entire input. The last token is always [`TokenKind::Eof`].
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();

            if self.is_at_end() {
                tokens.push(Token::new(TokenKind::Eof, self.current_location()));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let ch = match self.advance() {
            Some(ch) => ch,
            None => return Ok(Token::new(TokenKind::Eof, loc)),
        };

        let kind = match ch {
            '"' => self.string_literal(loc)?,
            '#' => self.include_directive(loc)?,
            '0'..='9' => self.number_literal(ch),
            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(ch),

            '+' => {
                if self.peek() == Some('+') {
                    self.advance();
                    TokenKind::PlusPlus
                } else {
                    TokenKind::Plus
                }
            }
            '-' => {
                if self.peek() == Some('>') {
                    self.advance();
                    TokenKind::Arrow
                } else {
                    TokenKind::Minus
                }
            }
            '&' if self.peek() == Some('&') => {
                self.advance();
                TokenKind::AndAnd
            }
            '|' if self.peek() == Some('|') => {
                self.advance();
                TokenKind::OrOr
            }
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            '!' => TokenKind::Bang,
            '=' => TokenKind::Eq,
            ':' => TokenKind::Colon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,

            _ => {
                return Err(LexError::IllegalCharacter {
                    character: ch,
                    location: loc,
                })
            }
        };

        Ok(Token::new(kind, loc))
    }

    /// Parse string literal; the opening quote is already consumed.
    ///
    /// No escape processing. The literal must close on the line it opens.
    fn string_literal(&mut self, loc: SourceLocation) -> Result<TokenKind, LexError> {
        let mut string = String::new();

        while let Some(ch) = self.peek() {
            match ch {
                '"' => {
                    self.advance();
                    return Ok(TokenKind::StringLiteral(string));
                }
                '\n' => break,
                _ => {
                    string.push(ch);
                    self.advance();
                }
            }
        }

        Err(LexError::IllegalCharacter {
            character: '"',
            location: loc,
        })
    }

    /// Match `include <name>` after a `#`; anything else makes the `#` illegal.
    fn include_directive(&mut self, loc: SourceLocation) -> Result<TokenKind, LexError> {
        let (length, header) = self.scan_include().ok_or(LexError::IllegalCharacter {
            character: '#',
            location: loc,
        })?;

        for _ in 0..length {
            self.advance();
        }

        Ok(TokenKind::IncludeDirective(header))
    }

    /// Look ahead for `include`, optional blanks, `<word>`. Returns the number
    /// of characters the directive spans (after `#`) and the header name.
    fn scan_include(&self) -> Option<(usize, String)> {
        let mut offset = 0;

        for expected in "include".chars() {
            if self.peek_ahead(offset) != Some(expected) {
                return None;
            }
            offset += 1;
        }

        while matches!(self.peek_ahead(offset), Some(' ') | Some('\t')) {
            offset += 1;
        }

        if self.peek_ahead(offset) != Some('<') {
            return None;
        }
        offset += 1;

        let mut header = String::new();
        while let Some(ch) = self.peek_ahead(offset).filter(|c| is_word_char(*c)) {
            header.push(ch);
            offset += 1;
        }

        if header.is_empty() || self.peek_ahead(offset) != Some('>') {
            return None;
        }

        Some((offset + 1, header))
    }

    /// Parse numeric literal: digits, optionally `.` and more digits.
    fn number_literal(&mut self, first_digit: char) -> TokenKind {
        let mut num_str = String::new();
        num_str.push(first_digit);
        self.take_digits(&mut num_str);

        let has_fraction = self.peek() == Some('.')
            && self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit());

        if has_fraction {
            num_str.push('.');
            self.advance();
            self.take_digits(&mut num_str);

            // digits '.' digits always parses; overflow saturates to infinity
            let value = num_str.parse::<f64>().unwrap_or(f64::INFINITY);
            return TokenKind::FloatLiteral(value);
        }

        // Kept as text so literals wider than i64 pass through unchanged
        let digits = num_str.trim_start_matches('0');
        if digits.is_empty() {
            TokenKind::IntLiteral("0".to_string())
        } else {
            TokenKind::IntLiteral(digits.to_string())
        }
    }

    fn take_digits(&mut self, buf: &mut String) {
        while let Some(ch) = self.peek().filter(|c| c.is_ascii_digit()) {
            buf.push(ch);
            self.advance();
        }
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self, first_char: char) -> TokenKind {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek().filter(|c| is_word_char(*c)) {
            ident.push(ch);
            self.advance();
        }

        match self.keywords.get(ident.as_str()).cloned() {
            Some(keyword) => keyword,
            None => TokenKind::Ident(ident),
        }
    }

    /// Skip whitespace and comments
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(ch) if ch.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_ahead(1) == Some('/') => {
                    self.skip_line_comment();
                }
                Some('/') if self.peek_ahead(1) == Some('*') => {
                    match self.block_comment_length() {
                        Some(length) => {
                            for _ in 0..length {
                                self.advance();
                            }
                        }
                        None => break,
                    }
                }
                _ => break,
            }
        }
    }

    /// Skip single-line comment (// ...), leaving the newline in place
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Length of a `/* ... */` comment starting at the current position, if
    /// it closes on the same line.
    fn block_comment_length(&self) -> Option<usize> {
        let mut offset = 2;

        while let Some(ch) = self.peek_ahead(offset) {
            if ch == '\n' {
                return None;
            }
            if ch == '*' && self.peek_ahead(offset + 1) == Some('/') {
                return Some(offset + 2);
            }
            offset += 1;
        }

        None
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_simple_tokens() {
        let tokens = kinds("int main() { return 0; }");

        assert_eq!(
            tokens,
            vec![
                TokenKind::Int,
                TokenKind::Ident("main".to_string()),
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::Return,
                TokenKind::IntLiteral("0".to_string()),
                TokenKind::Semicolon,
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_take_precedence_over_identifiers() {
        let tokens = kinds("cout endl std integer _if");

        assert_eq!(tokens[0], TokenKind::Cout);
        assert_eq!(tokens[1], TokenKind::Endl);
        assert_eq!(tokens[2], TokenKind::Std);
        assert_eq!(tokens[3], TokenKind::Ident("integer".to_string()));
        assert_eq!(tokens[4], TokenKind::Ident("_if".to_string()));
    }

    #[test]
    fn test_operators() {
        let tokens = kinds("++ + -> - && || ! << < >");

        assert_eq!(
            tokens,
            vec![
                TokenKind::PlusPlus,
                TokenKind::Plus,
                TokenKind::Arrow,
                TokenKind::Minus,
                TokenKind::AndAnd,
                TokenKind::OrOr,
                TokenKind::Bang,
                TokenKind::Lt,
                TokenKind::Lt,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        let tokens = kinds("42 2.5 7.0 12abc");

        assert_eq!(tokens[0], TokenKind::IntLiteral("42".to_string()));
        assert_eq!(tokens[1], TokenKind::FloatLiteral(2.5));
        assert_eq!(tokens[2], TokenKind::FloatLiteral(7.0));
        assert_eq!(tokens[3], TokenKind::IntLiteral("12".to_string()));
        assert_eq!(tokens[4], TokenKind::Ident("abc".to_string()));
    }

    #[test]
    fn test_trailing_dot_is_illegal() {
        let err = Lexer::new("x = 3.;").tokenize().unwrap_err();

        assert_eq!(
            err,
            LexError::IllegalCharacter {
                character: '.',
                location: SourceLocation::new(1, 6),
            }
        );
    }

    #[test]
    fn test_wide_integers_are_kept_as_digits() {
        let tokens = kinds("99999999999999999999 007 000");

        assert_eq!(tokens[0], TokenKind::IntLiteral("99999999999999999999".to_string()));
        assert_eq!(tokens[1], TokenKind::IntLiteral("7".to_string()));
        assert_eq!(tokens[2], TokenKind::IntLiteral("0".to_string()));
    }

    #[test]
    fn test_string_literal_has_no_escapes() {
        let tokens = kinds(r#""hello\nworld""#);
        assert_eq!(tokens[0], TokenKind::StringLiteral(r"hello\nworld".to_string()));
    }

    #[test]
    fn test_string_literal_cannot_span_lines() {
        let err = Lexer::new("x = \"abc\ndef\";").tokenize().unwrap_err();

        assert_eq!(
            err,
            LexError::IllegalCharacter {
                character: '"',
                location: SourceLocation::new(1, 5),
            }
        );
    }

    #[test]
    fn test_comments() {
        let tokens = kinds("int x; // comment\nint y; /* block */ int z;");

        assert_eq!(
            tokens,
            vec![
                TokenKind::Int,
                TokenKind::Ident("x".to_string()),
                TokenKind::Semicolon,
                TokenKind::Int,
                TokenKind::Ident("y".to_string()),
                TokenKind::Semicolon,
                TokenKind::Int,
                TokenKind::Ident("z".to_string()),
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_block_comment_does_not_span_lines() {
        let tokens = kinds("/* open\nclose */");

        assert_eq!(tokens[0], TokenKind::Slash);
        assert_eq!(tokens[1], TokenKind::Star);
        assert_eq!(tokens[2], TokenKind::Ident("open".to_string()));
        assert_eq!(tokens[3], TokenKind::Ident("close".to_string()));
    }

    #[test]
    fn test_include_directive() {
        let tokens = Lexer::new("#include <iostream>\n#include<string>\nint x;")
            .tokenize()
            .unwrap();

        assert_eq!(tokens[0].kind, TokenKind::IncludeDirective("iostream".to_string()));
        assert_eq!(tokens[1].kind, TokenKind::IncludeDirective("string".to_string()));
        assert_eq!(tokens[1].location, SourceLocation::new(2, 1));
        assert_eq!(tokens[2].kind, TokenKind::Int);
        assert_eq!(tokens[2].location.line, 3);
    }

    #[test]
    fn test_include_with_dotted_header_is_illegal() {
        let err = Lexer::new("#include <stdio.h>").tokenize().unwrap_err();
        assert!(matches!(err, LexError::IllegalCharacter { character: '#', .. }));
    }

    #[test]
    fn test_illegal_character() {
        let err = Lexer::new("int x;\nx = @;").tokenize().unwrap_err();

        assert_eq!(
            err,
            LexError::IllegalCharacter {
                character: '@',
                location: SourceLocation::new(2, 5),
            }
        );
        assert_eq!(
            err.to_string(),
            "Lexical error at line 2, column 5: illegal character '@'"
        );
    }

    #[test]
    fn test_single_ampersand_is_illegal() {
        let err = Lexer::new("a & b").tokenize().unwrap_err();
        assert!(matches!(err, LexError::IllegalCharacter { character: '&', .. }));
    }

    #[test]
    fn test_line_and_column_tracking() {
        let tokens = Lexer::new("int a;\r\n  a++;").tokenize().unwrap();

        assert_eq!(tokens[3].location, SourceLocation::new(2, 3));
        assert_eq!(tokens[4].kind, TokenKind::PlusPlus);
        assert_eq!(tokens[4].location, SourceLocation::new(2, 4));
    }
}

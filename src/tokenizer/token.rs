use serde::{Serialize, Serializer};
use thiserror::Error;

/// Location of the first character of a token.
///
/// `line` starts at 1. `column` counts characters consumed on the current
/// line, so the first character of a line sits at column 1 and a fresh
/// scanner (nothing consumed yet) is at column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 0 }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::EnumCount)]
pub enum TokenKind {
    EndOfInput,
    Illegal,
    /// Maximal run of Unicode letters (general category `L`), no digits or `_`
    Identifier,
    /// Maximal run of Unicode decimal digits (general category `Nd`)
    IntegerLiteral,
    KeywordInt,
    Semicolon,
    KeywordReturn,
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
}

impl TokenKind {
    /// Canonical diagnostic name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Identifier => "IDENT",
            TokenKind::IntegerLiteral => "INTLIT",
            TokenKind::KeywordInt => "int",
            TokenKind::Semicolon => ";",
            TokenKind::KeywordReturn => "return",
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::KeywordInt | TokenKind::KeywordReturn)
    }

    /// Whether tokens of this kind carry their source text as a literal.
    pub fn has_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::IntegerLiteral | TokenKind::Illegal
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(flatten)]
    pub position: Position,
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(position: Position, kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            position,
            kind,
            literal: literal.into(),
        }
    }

    /// A token whose text is implied by its kind.
    pub fn bare(position: Position, kind: TokenKind) -> Self {
        Self::new(position, kind, String::new())
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Decodes the value of an integer literal.
    ///
    /// Only ASCII digit literals decode; other scripts' digits are scanned as
    /// integer literals but rejected here.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minic_lex::tokenizer::token::{Position, Token, TokenKind};
    /// let token = Token::new(Position::new(1, 1), TokenKind::IntegerLiteral, "42");
    /// assert_eq!(token.integer_value().unwrap(), 42);
    /// ```
    pub fn integer_value(&self) -> Result<i64, LiteralError> {
        if self.kind != TokenKind::IntegerLiteral {
            return Err(LiteralError::NotAnInteger { kind: self.kind });
        }
        if !self.literal.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LiteralError::NonAsciiDigits {
                literal: self.literal.clone(),
            });
        }
        self.literal
            .parse::<i64>()
            .map_err(|_| LiteralError::OutOfRange {
                literal: self.literal.clone(),
            })
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}\t{}", self.position, self.kind, self.literal)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("Token {kind} is not an integer literal")]
    NotAnInteger { kind: TokenKind },
    #[error("Integer literal has non-ASCII digits: {literal}")]
    NonAsciiDigits { literal: String },
    #[error("Integer literal out of range: {literal}")]
    OutOfRange { literal: String },
}

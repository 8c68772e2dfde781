//! # Tokenizer Component
//!
//! Lexical analysis for a minimal C subset: integer literals, identifiers, the
//! keywords `int` and `return`, and the punctuation `;` `{` `}` `(` `)`.
//!
//! ## Component Structure
//!
//! * [`token`]: positions, token kinds and tokens
//! * [`source`]: character sources with one character of pushback
//! * [`scanner`]: the scanning state machine
//! * [`keyword`]: keyword table
//! * [`symbol`]: punctuation table
//!
//! ## Positions
//!
//! Lines start at 1. Columns count the characters consumed on the current
//! line, so the first character of a line is at column 1. A token is
//! positioned at its first character; end of input is positioned one column
//! past the last character.
//!
//! ## Usage Example
//!
//! ```rust
//! use minic_lex::tokenizer::{tokenize, token::TokenKind};
//!
//! let tokens = tokenize("int main() { return 0; }").unwrap();
//! assert_eq!(tokens[1].kind, TokenKind::Identifier);
//! assert_eq!(tokens[1].literal, "main");
//! assert_eq!(tokens.last().unwrap().to_string(), "1:25\tEOF\t");
//! ```

pub mod keyword;
pub mod scanner;
pub mod source;
pub mod symbol;
pub mod token;

pub use scanner::{ScanError, Scanner, Tokens};
pub use source::{CharSource, ReaderSource, SourceError, StrSource};
pub use token::{LiteralError, Position, Token, TokenKind};

/// Scans a whole string, including the final end-of-input token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ScanError> {
    Scanner::new(StrSource::new(input)).scan_all()
}

pub mod config;
pub mod error;
pub mod listing;
pub mod tokenizer;

// Re-exports
pub use error::*;
pub use tokenizer::{tokenize, Position, ScanError, Scanner, Token, TokenKind};

//! # Keywords
//!
//! The language reserves two words, `int` and `return`. The identifier
//! sub-scanner always reads a full run of letters first; a run becomes a
//! keyword only when it matches one of these spellings exactly, so `returns`
//! and `integer` stay identifiers.

use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::token::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    Int,
    Return,
}

impl From<Keyword> for TokenKind {
    fn from(keyword: Keyword) -> Self {
        match keyword {
            Keyword::Int => TokenKind::KeywordInt,
            Keyword::Return => TokenKind::KeywordReturn,
        }
    }
}

/// Resolves a scanned letter run to a keyword kind.
pub fn lookup(word: &str) -> Option<TokenKind> {
    Keyword::from_str(word).ok().map(TokenKind::from)
}

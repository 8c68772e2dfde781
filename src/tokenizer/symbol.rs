//! # Punctuation
//!
//! Every punctuation token of the language is a single character, so the
//! scanner emits it as soon as the character is read.

use super::token::TokenKind;

/// Maps a punctuation character to its token kind.
pub fn delimiter(c: char) -> Option<TokenKind> {
    match c {
        ';' => Some(TokenKind::Semicolon),
        '{' => Some(TokenKind::OpenBrace),
        '}' => Some(TokenKind::CloseBrace),
        '(' => Some(TokenKind::OpenParen),
        ')' => Some(TokenKind::CloseParen),
        _ => None,
    }
}

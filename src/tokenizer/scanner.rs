//! # Scanner
//!
//! Hand-written state machine that turns a [`CharSource`] into [`Token`]s.
//!
//! Each call to [`Scanner::next_token`] starts in the initial state and reads
//! characters until one token is determined:
//!
//! * newlines and other whitespace are skipped without emitting anything
//! * `;` `{` `}` `(` `)` are emitted immediately
//! * a digit or letter is pushed back and re-read by the integer or identifier
//!   sub-scanner, which consumes the maximal run and pushes back the first
//!   character that does not belong to it
//! * anything else becomes an [`TokenKind::Illegal`] token; scanning can resume
//!   with the next call
//!
//! Running out of input yields [`TokenKind::EndOfInput`], as many times as the
//! caller asks. Any other read failure is fatal and surfaces as [`ScanError`].

use std::iter::FusedIterator;

use thiserror::Error;
use unicode_general_category::{get_general_category, GeneralCategory};

use super::{
    keyword,
    source::{CharSource, SourceError},
    symbol,
    token::{Position, Token, TokenKind},
};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read source at {position}: {source}")]
    Source {
        position: Position,
        source: SourceError,
    },
    #[error("Invalid pushback at {position}")]
    InvalidPushback { position: Position },
}

impl ScanError {
    pub fn position(&self) -> Position {
        match self {
            ScanError::Source { position, .. } | ScanError::InvalidPushback { position } => {
                *position
            }
        }
    }
}

#[derive(Debug)]
pub struct Scanner<S> {
    source: S,
    position: Position,
}

impl<S: CharSource> Scanner<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            position: Position::default(),
        }
    }

    /// Current cursor: the line being scanned and the number of characters
    /// consumed on it.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Scans the next token.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minic_lex::tokenizer::{scanner::Scanner, source::StrSource, token::TokenKind};
    /// let mut scanner = Scanner::new(StrSource::new("return 0;"));
    /// assert_eq!(scanner.next_token().unwrap().kind, TokenKind::KeywordReturn);
    /// let zero = scanner.next_token().unwrap();
    /// assert_eq!(zero.kind, TokenKind::IntegerLiteral);
    /// assert_eq!(zero.literal, "0");
    /// ```
    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        loop {
            let c = match self.source.read() {
                Ok(c) => c,
                Err(SourceError::EndOfStream) => {
                    // end of input sits just past the last consumed character
                    let position = Position::new(self.position.line, self.position.column + 1);
                    return Ok(self.emit(Token::bare(position, TokenKind::EndOfInput)));
                }
                Err(e) => return Err(self.fail(e)),
            };

            self.position.column += 1;

            if let Some(kind) = symbol::delimiter(c) {
                return Ok(self.emit(Token::bare(self.position, kind)));
            }

            match c {
                '\n' => self.new_line(),
                c if c.is_whitespace() => continue,
                c if is_digit(c) => {
                    let start = self.position;
                    self.backup()?;
                    let literal = self.scan_run(is_digit)?;
                    return Ok(self.emit(Token::new(start, TokenKind::IntegerLiteral, literal)));
                }
                c if is_letter(c) => {
                    let start = self.position;
                    self.backup()?;
                    let literal = self.scan_run(is_letter)?;
                    let token = match keyword::lookup(&literal) {
                        Some(kind) => {
                            tracing::debug!("Resolved keyword {} at {}", kind, start);
                            Token::bare(start, kind)
                        }
                        None => Token::new(start, TokenKind::Identifier, literal),
                    };
                    return Ok(self.emit(token));
                }
                c => {
                    return Ok(self.emit(Token::new(self.position, TokenKind::Illegal, c.to_string())))
                }
            }
        }
    }

    /// Iterates over the tokens before [`TokenKind::EndOfInput`].
    pub fn tokens(&mut self) -> Tokens<'_, S> {
        Tokens {
            scanner: self,
            done: false,
        }
    }

    /// Scans the remaining input, including the final end-of-input token.
    pub fn scan_all(&mut self) -> Result<Vec<Token>, ScanError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }

    /// Consumes the maximal run of characters accepted by `accept`.
    ///
    /// The source must be positioned on the first character of the run. End of
    /// input terminates the run normally.
    fn scan_run<F>(&mut self, accept: F) -> Result<String, ScanError>
    where
        F: Fn(char) -> bool,
    {
        let mut literal = String::new();
        loop {
            let c = match self.source.read() {
                Ok(c) => c,
                Err(SourceError::EndOfStream) => return Ok(literal),
                Err(e) => return Err(self.fail(e)),
            };

            self.position.column += 1;
            if accept(c) {
                literal.push(c);
            } else {
                // belongs to the next token
                self.backup()?;
                return Ok(literal);
            }
        }
    }

    fn new_line(&mut self) {
        self.position.line += 1;
        self.position.column = 0;
    }

    /// Unreads the last character and takes back its column.
    fn backup(&mut self) -> Result<(), ScanError> {
        match self.source.unread() {
            Ok(()) => {
                self.position.column -= 1;
                Ok(())
            }
            Err(SourceError::InvalidUnread) => {
                let error = ScanError::InvalidPushback {
                    position: self.position,
                };
                tracing::error!("{}", error);
                Err(error)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    fn fail(&self, source: SourceError) -> ScanError {
        let error = ScanError::Source {
            position: self.position,
            source,
        };
        tracing::error!("{}", error);
        error
    }

    fn emit(&self, token: Token) -> Token {
        tracing::trace!(
            position = %token.position,
            kind = %token.kind,
            literal = %token.literal,
            "token"
        );
        token
    }
}

/// Decimal digit in any script (general category `Nd`).
fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || matches!(get_general_category(c), GeneralCategory::DecimalNumber)
}

/// Letter in any script (general category `L`). Letter numbers such as `Ⅻ`
/// and combining marks are not letters.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Iterator returned by [`Scanner::tokens`].
///
/// Ends at end of input without yielding the end-of-input token, and after the
/// first error.
#[derive(Debug)]
pub struct Tokens<'a, S> {
    scanner: &'a mut Scanner<S>,
    done: bool,
}

impl<S: CharSource> Iterator for Tokens<'_, S> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.scanner.next_token() {
            Ok(token) if token.is_eof() => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<S: CharSource> FusedIterator for Tokens<'_, S> {}

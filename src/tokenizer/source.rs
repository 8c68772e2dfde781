//! # Character Sources
//!
//! The scanner never touches files or buffers directly. It pulls characters
//! through the [`CharSource`] trait, which delivers one codepoint per read and
//! can push the most recently read codepoint back exactly once.
//!
//! Two sources are provided:
//!
//! * [`ReaderSource`]: decodes UTF-8 from any [`BufRead`] (files, stdin, cursors)
//! * [`StrSource`]: walks an in-memory `&str`

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    str::Chars,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("End of stream")]
    EndOfStream,
    #[error("Unread without a preceding read")]
    InvalidUnread,
    #[error("Invalid UTF-8 sequence: {bytes:02x?}")]
    InvalidEncoding { bytes: Vec<u8> },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// One codepoint at a time, with a single slot of pushback.
pub trait CharSource {
    /// Returns the next character, or [`SourceError::EndOfStream`] once the
    /// input is exhausted (and on every read after that).
    fn read(&mut self) -> Result<char, SourceError>;

    /// Pushes the most recently read character back so the next
    /// [`read`](CharSource::read) returns it again.
    ///
    /// Fails with [`SourceError::InvalidUnread`] when nothing was read since
    /// the last unread, or when the last read failed.
    fn unread(&mut self) -> Result<(), SourceError>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn read(&mut self) -> Result<char, SourceError> {
        (**self).read()
    }

    fn unread(&mut self) -> Result<(), SourceError> {
        (**self).unread()
    }
}

impl<S: CharSource + ?Sized> CharSource for Box<S> {
    fn read(&mut self) -> Result<char, SourceError> {
        (**self).read()
    }

    fn unread(&mut self) -> Result<(), SourceError> {
        (**self).unread()
    }
}

/// Pushback bookkeeping shared by the sources.
#[derive(Debug, Clone, Default)]
struct Pushback {
    /// Last character handed out that may still be unread.
    last: Option<char>,
    /// Character waiting to be read again.
    pending: Option<char>,
}

impl Pushback {
    fn read_with<F>(&mut self, decode: F) -> Result<char, SourceError>
    where
        F: FnOnce() -> Result<char, SourceError>,
    {
        let result = match self.pending.take() {
            Some(c) => Ok(c),
            None => decode(),
        };
        self.last = result.as_ref().ok().copied();
        result
    }

    fn unread(&mut self) -> Result<(), SourceError> {
        let c = self.last.take().ok_or(SourceError::InvalidUnread)?;
        self.pending = Some(c);
        Ok(())
    }
}

/// UTF-8 decoding source over a buffered byte reader.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    pushback: Pushback,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pushback: Pushback::default(),
        }
    }

    /// Looks at the next byte without consuming it.
    fn peek_byte(&mut self) -> Result<Option<u8>, SourceError> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn decode(&mut self) -> Result<char, SourceError> {
        let first = self.peek_byte()?.ok_or(SourceError::EndOfStream)?;
        self.reader.consume(1);
        let width = utf8_width(first);
        if width == 0 {
            return Err(SourceError::InvalidEncoding { bytes: vec![first] });
        }

        let mut buf = [first, 0, 0, 0];
        for i in 1..width {
            // a byte that cannot continue the sequence is left for the next read
            match self.peek_byte()? {
                Some(byte) if byte & 0xc0 == 0x80 => {
                    self.reader.consume(1);
                    buf[i] = byte;
                }
                _ => {
                    return Err(SourceError::InvalidEncoding {
                        bytes: buf[..i].to_vec(),
                    })
                }
            }
        }

        std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or_else(|| SourceError::InvalidEncoding {
                bytes: buf[..width].to_vec(),
            })
    }
}

impl ReaderSource<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> CharSource for ReaderSource<R> {
    fn read(&mut self) -> Result<char, SourceError> {
        let mut pushback = std::mem::take(&mut self.pushback);
        let result = pushback.read_with(|| self.decode());
        self.pushback = pushback;
        result
    }

    fn unread(&mut self) -> Result<(), SourceError> {
        self.pushback.unread()
    }
}

/// Length of the UTF-8 sequence introduced by `byte`, 0 if it cannot start one.
fn utf8_width(byte: u8) -> usize {
    match byte {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => 0,
    }
}

/// In-memory source over a string slice.
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    chars: Chars<'a>,
    pushback: Pushback,
}

impl<'a> StrSource<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
            pushback: Pushback::default(),
        }
    }
}

impl CharSource for StrSource<'_> {
    fn read(&mut self) -> Result<char, SourceError> {
        let chars = &mut self.chars;
        self.pushback
            .read_with(|| chars.next().ok_or(SourceError::EndOfStream))
    }

    fn unread(&mut self) -> Result<(), SourceError> {
        self.pushback.unread()
    }
}

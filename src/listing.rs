//! Token listing used by the `minic-lex` driver.

use std::io::Write;

use crate::{
    config::{ListingConfig, OutputFormat},
    tokenizer::{CharSource, Scanner, Token, TokenKind},
    InternalResult,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingSummary {
    /// Tokens written, end of input included when listed.
    pub tokens: usize,
    pub illegal: usize,
    /// Listing stopped at an illegal character before end of input.
    pub stopped_early: bool,
}

/// Scans to the end of input and writes the tokens to `out`.
pub fn write_listing<S, W>(
    scanner: &mut Scanner<S>,
    config: &ListingConfig,
    out: &mut W,
) -> InternalResult<ListingSummary>
where
    S: CharSource,
    W: Write,
{
    let mut summary = ListingSummary::default();
    let mut collected = Vec::new();

    loop {
        let token = scanner.next_token()?;
        let is_eof = token.is_eof();
        let is_illegal = token.kind == TokenKind::Illegal;

        if !is_eof || config.include_eof {
            summary.tokens += 1;
            match config.format {
                OutputFormat::Text => write_line(out, &token)?,
                OutputFormat::Json => collected.push(token),
            }
        }

        if is_eof {
            break;
        }
        if is_illegal {
            summary.illegal += 1;
            if config.stop_on_illegal {
                summary.stopped_early = true;
                break;
            }
        }
    }

    if config.format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, &collected)?;
        writeln!(out)?;
    }
    out.flush()?;

    tracing::debug!("Listed {:?}", summary);
    Ok(summary)
}

fn write_line<W: Write>(out: &mut W, token: &Token) -> std::io::Result<()> {
    writeln!(out, "{}", token)
}

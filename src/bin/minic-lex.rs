use clap::Parser;
use minic_lex::{
    config::{ListingConfig, ListingOverrides, OutputFormat},
    listing::write_listing,
    tokenizer::{CharSource, ReaderSource, Scanner},
    InternalResult,
};
use std::{io, path::PathBuf, process::ExitCode};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file to scan, `-` for stdin
    file: PathBuf,

    /// Path to a JSON listing config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format, overrides the config file
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// List the end-of-input token too
    #[arg(long, overrides_with = "no_include_eof")]
    include_eof: bool,

    /// Leave the end-of-input token out, overrides the config file
    #[arg(long, overrides_with = "include_eof")]
    no_include_eof: bool,

    /// Stop at the first illegal character
    #[arg(long, overrides_with = "no_stop_on_illegal")]
    stop_on_illegal: bool,

    /// Keep scanning past illegal characters, overrides the config file
    #[arg(long, overrides_with = "stop_on_illegal")]
    no_stop_on_illegal: bool,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

/// `Some(true)` for `--flag`, `Some(false)` for `--no-flag`, `None` if neither was given.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn load_config(cli: &Cli) -> InternalResult<ListingConfig> {
    let config = match &cli.config {
        Some(path) => ListingConfig::from_file(path)?,
        None => ListingConfig::default(),
    };

    Ok(config.with_overrides(&ListingOverrides {
        format: cli.format,
        include_eof: switch(cli.include_eof, cli.no_include_eof),
        stop_on_illegal: switch(cli.stop_on_illegal, cli.no_stop_on_illegal),
    }))
}

fn open_source(cli: &Cli) -> InternalResult<Box<dyn CharSource>> {
    if cli.file.as_os_str() == "-" {
        return Ok(Box::new(ReaderSource::new(io::stdin().lock())));
    }
    Ok(Box::new(ReaderSource::open(&cli.file)?))
}

fn run(cli: &Cli) -> InternalResult<ExitCode> {
    let config = load_config(cli)?;
    debug!("config: {:?}", config);

    let mut scanner = Scanner::new(open_source(cli)?);
    info!("Scanning {}", cli.file.display());

    let stdout = io::stdout();
    let summary = write_listing(&mut scanner, &config, &mut stdout.lock())?;

    if summary.stopped_early {
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

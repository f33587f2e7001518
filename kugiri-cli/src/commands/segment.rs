//! Segment command implementation

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use kugiri_core::{BoundaryKind, BreakData, DecodePolicy, Text, TextEncoding};

use crate::error::CliError;
use crate::output::{JsonFormatter, OffsetsFormatter, OutputFormatter, TextFormatter};

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files (default: read stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Boundary kind to segment by
    #[arg(short, long, value_enum, default_value = "sentence")]
    pub kind: KindArg,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Source encoding of the input bytes
    #[arg(short, long, value_enum, default_value = "utf8")]
    pub encoding: EncodingArg,

    /// Abort on malformed input instead of substituting U+FFFD
    #[arg(long)]
    pub strict: bool,

    /// Drop segments that are entirely whitespace
    #[arg(long)]
    pub skip_whitespace: bool,

    /// TOML file replacing the built-in abbreviation list
    #[arg(short, long, value_name = "FILE")]
    pub abbreviations: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Boundary kinds selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    /// Grapheme clusters (user-perceived characters)
    Grapheme,
    /// Words
    Word,
    /// Sentences
    Sentence,
    /// Line-break opportunities
    Line,
}

impl KindArg {
    /// The corresponding engine boundary kind.
    pub fn to_kind(self) -> BoundaryKind {
        match self {
            KindArg::Grapheme => BoundaryKind::Grapheme,
            KindArg::Word => BoundaryKind::Word,
            KindArg::Sentence => BoundaryKind::Sentence,
            KindArg::Line => BoundaryKind::Line,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one segment per line
    Text,
    /// JSON array of segments with scalar ranges
    Json,
    /// One `start..end` scalar range per line with the segment
    Offsets,
}

impl OutputFormat {
    fn create<'a>(self, writer: Box<dyn Write + 'a>) -> Box<dyn OutputFormatter + 'a> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Offsets => Box::new(OffsetsFormatter::new(writer)),
        }
    }
}

/// Supported source encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EncodingArg {
    /// UTF-8
    Utf8,
    /// UTF-16, little-endian
    Utf16le,
    /// UTF-16, big-endian
    Utf16be,
}

impl EncodingArg {
    /// The corresponding decoder encoding.
    pub fn to_encoding(self) -> TextEncoding {
        match self {
            EncodingArg::Utf8 => TextEncoding::Utf8,
            EncodingArg::Utf16le => TextEncoding::Utf16Le,
            EncodingArg::Utf16be => TextEncoding::Utf16Be,
        }
    }
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Segmenting by {} boundaries", self.kind.to_kind());
        log::debug!("Arguments: {self:?}");

        let data = self.break_data()?;
        let policy = if self.strict {
            DecodePolicy::Strict
        } else {
            DecodePolicy::Replace
        };
        let encoding = self.encoding.to_encoding();

        let mut formatter = self.format.create(self.writer()?);
        if self.input.is_empty() {
            log::debug!("Reading stdin");
            let bytes = read_stdin()?;
            self.emit(&bytes, encoding, policy, &data, formatter.as_mut())?;
        } else {
            for path in &self.input {
                log::debug!("Reading {}", path.display());
                let bytes = read_file(path)?;
                self.emit(&bytes, encoding, policy, &data, formatter.as_mut())?;
            }
        }
        formatter.finish()
    }

    /// Segment one decoded buffer and feed the formatter.
    fn emit(
        &self,
        bytes: &[u8],
        encoding: TextEncoding,
        policy: DecodePolicy,
        data: &Arc<BreakData>,
        formatter: &mut dyn OutputFormatter,
    ) -> Result<()> {
        let text = Text::from_encoded_bytes_with(bytes, encoding, policy)
            .map_err(|e| CliError::SegmentationError(e.to_string()))?
            .with_break_data(data.clone());
        let kind = self.kind.to_kind();
        let ranges = text
            .segment_ranges(kind)
            .map_err(|e| CliError::SegmentationError(e.to_string()))?;

        log::info!("Found {} segment(s)", ranges.len());
        for range in ranges {
            let Some(segment) = text.substring(range.clone()) else {
                continue;
            };
            if self.skip_whitespace && segment.chars().all(char::is_whitespace) {
                continue;
            }
            formatter.format_segment(segment, range)?;
        }
        Ok(())
    }

    /// Break data with the configured abbreviation overlay.
    fn break_data(&self) -> Result<Arc<BreakData>> {
        let mut builder = BreakData::builder();
        if let Some(path) = &self.abbreviations {
            builder = builder
                .suppressions_path(path)
                .map_err(|e| CliError::ConfigError(e.to_string()))?;
        }
        builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    fn writer(&self) -> Result<Box<dyn Write>> {
        Ok(match &self.output {
            Some(path) => Box::new(
                fs::File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // try_init: the logger may already be installed when several
            // commands run inside one test process.
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }
    fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

fn read_stdin() -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read stdin")?;
    Ok(bytes)
}

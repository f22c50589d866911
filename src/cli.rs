//! Command-line driver: read, transform, write.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use log::{LevelFilter, info};

use crate::{Limits, PnmError, Unstoppable, haar, read_file, write_file};

#[derive(Debug, Parser)]
#[command(about = "Haar wavelet decomposition of PGM/PPM images.")]
#[command(author, version, long_about = None)]
pub struct Args {
    /// Number of decomposition (or reconstruction) levels.
    #[arg(long, default_value_t = 1)]
    pub level: u32,

    /// Reconstruct pixels from wavelet coefficients instead of decomposing.
    #[arg(long)]
    pub compose: bool,

    /// Refuse inputs wider than this.
    #[arg(long)]
    pub max_width: Option<u64>,

    /// Refuse inputs taller than this.
    #[arg(long)]
    pub max_height: Option<u64>,

    /// Refuse inputs with more pixels than this.
    #[arg(long)]
    pub max_pixels: Option<u64>,

    /// Refuse inputs whose buffer plus transform scratch exceeds this many bytes.
    #[arg(long)]
    pub max_memory: Option<u64>,

    /// More logging; repeat for debug and trace output.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Input PGM/PPM path.
    pub in_path: PathBuf,

    /// Output path; written in the input's PNM variant.
    pub out_path: PathBuf,
}

impl Args {
    /// Parse `args`, accepting the single-dash `-level n` and `-compose`
    /// spellings.
    pub fn parse_legacy<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_legacy_flags(args))
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn limits(&self) -> Option<Limits> {
        let limits = Limits {
            max_width: self.max_width,
            max_height: self.max_height,
            max_pixels: self.max_pixels,
            max_memory_bytes: self.max_memory,
        };
        let any = [limits.max_width, limits.max_height, limits.max_pixels, limits.max_memory_bytes]
            .iter()
            .any(Option::is_some);
        any.then_some(limits)
    }
}

/// Rewrite `-level` and `-compose` to their `--` forms.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some("-level") => OsString::from("--level"),
            Some("-compose") => OsString::from("--compose"),
            _ => arg,
        })
        .collect()
}

/// Decode `in_path`, run the requested levels, encode to `out_path`.
pub fn run(args: &Args) -> Result<(), PnmError> {
    let limits = args.limits();
    let decoded = read_file(&args.in_path, limits.as_ref(), Unstoppable)?;
    let (mut buffer, format) = decoded.into_parts();
    info!(
        "{}: {}x{} {:?}",
        args.in_path.display(),
        buffer.width(),
        buffer.height(),
        format
    );

    if args.compose {
        haar::recompose(&mut buffer, args.level, Unstoppable)?;
    } else {
        haar::decompose(&mut buffer, args.level, Unstoppable)?;
    }

    write_file(&args.out_path, &buffer, format, Unstoppable)
}

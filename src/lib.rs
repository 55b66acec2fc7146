// src/lib.rs

pub mod dumper {
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::{
    error::Error,
    fmt,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

// -------------- Error type --------------

#[derive(Debug)]
pub enum ByteDumpError {
    Io(String),
    NotAFile(String),
}

impl fmt::Display for ByteDumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteDumpError::Io(e) => write!(f, "I/O error: {}", e),
            ByteDumpError::NotAFile(p) => write!(f, "not a regular file: {}", p),
        }
    }
}

impl Error for ByteDumpError {}

// -------------- ByteFormatter --------------

/// Renders a byte slice as comma-separated lowercase hex literals.
pub struct ByteFormatter;

impl ByteFormatter {
    /// One token per input byte, in input order: `0x00, 0xff, 0x10`.
    /// An empty slice yields an empty string.
    pub fn format(&self, input: &[u8]) -> String {
        input
            .iter()
            .map(|b| format!("0x{:02x}", b))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// -------------- File reading --------------

/// Reads the whole file at `path` into memory as raw bytes.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>, ByteDumpError> {
    let mut file = File::open(path)
        .map_err(|e| ByteDumpError::Io(format!("{}: {}", path.display(), e)))?;
    let meta = file
        .metadata()
        .map_err(|e| ByteDumpError::Io(format!("{}: {}", path.display(), e)))?;
    if meta.is_dir() {
        return Err(ByteDumpError::NotAFile(path.display().to_string()));
    }
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| ByteDumpError::Io(format!("{}: {}", path.display(), e)))?;
    Ok(bytes)
}

// -------------- CLI --------------

#[derive(Parser)]
#[command(name = "bytedump")]
pub struct Cli {
    /// File whose bytes are printed as hex literals
    pub path: PathBuf,
}

// -------------- Main --------------

pub(crate) fn main_internal(path: &Path) -> Result<(), Box<dyn Error>> {
    let log_cfg = ConfigBuilder::new()
        .set_time_format_str("%+")
        .build();
    TermLogger::init(
        LevelFilter::Info,
        log_cfg,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .unwrap();

    // Read input
    let bytes = read_bytes(path)?;
    info!("Read {} bytes from {}", bytes.len(), path.display());

    // Format and write output
    let line = ByteFormatter.format(&bytes);
    println!("{}", line);

    Ok(())
}

}

use clap::Parser;

/// A convenient entrypoint for the binary:
pub fn run_app() -> Result<(), Box<dyn std::error::Error>> {
    let cli = crate::dumper::Cli::parse();

    crate::dumper::main_internal(&cli.path)?;
    Ok(())
}

//! Logging init: file under XDG state dir, or graceful fallback to stderr.
//!
//! Status lines and summaries go to stdout; the log only carries diagnostics
//! (per-file errors, digests, run totals).

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Default directives for the log file when `RUST_LOG` is unset.
pub const FILE_FILTER_DEFAULT: &str = "info,dor_core=debug,dor=debug";
/// Default directives for the stderr fallback: warnings only so stderr does
/// not drown the status lines.
pub const STDERR_FILTER_DEFAULT: &str = "warn";

fn env_filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Writer that is either a file or stderr (used when file clone fails).
enum FileOrStderr {
    File(std::fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(std::fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

/// Initialize structured logging to `~/.local/state/dor/dor.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dor")?;
    let log_dir = xdg_dirs.get_state_home().join("dor");

    fs::create_dir_all(&log_dir)?;
    let log_file_path: PathBuf = log_dir.join("dor.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    let writer: BoxMakeWriter = BoxMakeWriter::new(FileMakeWriter(file));

    let env_filter = env_filter_or(FILE_FILTER_DEFAULT);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("init tracing subscriber: {e}"))?;

    tracing::info!("dor logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only (no file). Use when init_logging() fails so the CLI doesn't crash.
pub fn init_logging_stderr() {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter_or(STDERR_FILTER_DEFAULT))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
    if let Err(e) = result {
        eprintln!("dor: logging disabled: {e}");
    }
}

//! Per-file status lines and the end-of-run summary block.

use super::FileError;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

/// Line of asterisks framing the summary.
pub const BANNER: &str = "********************";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Verify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Skipped,
    Failed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Ok => "OK",
            Status::Skipped => "SKIPPED",
            Status::Failed => "FAILED",
        })
    }
}

/// Counters for one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub mode: Mode,
    /// Entries examined (data files for Create, sidecars for Verify).
    pub total: u64,
    pub ok: u64,
    /// Subset of `total - ok` caused by I/O errors or missing data files.
    pub errors: u64,
}

impl RunSummary {
    pub fn new(mode: Mode) -> Self {
        RunSummary {
            mode,
            total: 0,
            ok: 0,
            errors: 0,
        }
    }

    /// Skipped (Create) or failed (Verify) count as printed in the summary.
    pub fn not_ok(&self) -> u64 {
        self.total - self.ok
    }

    /// No file needs attention. Skipped files are fine for Create; any
    /// non-OK sidecar is a failure for Verify.
    pub fn is_clean(&self) -> bool {
        match self.mode {
            Mode::Create => self.errors == 0,
            Mode::Verify => self.not_ok() == 0,
        }
    }

    fn not_ok_label(&self) -> &'static str {
        match self.mode {
            Mode::Create => "Skipped",
            Mode::Verify => "Failed",
        }
    }

    pub fn write_to(&self, mut out: impl Write) -> io::Result<()> {
        writeln!(out, "{BANNER}")?;
        writeln!(out, "OK: {}", self.ok)?;
        writeln!(out, "{}: {}", self.not_ok_label(), self.not_ok())?;
        writeln!(out, "{BANNER}")?;
        Ok(())
    }
}

/// Writes status lines to `out` while keeping the counters.
pub struct Reporter<W: Write> {
    out: W,
    summary: RunSummary,
}

impl<W: Write> Reporter<W> {
    pub fn new(mode: Mode, out: W) -> Self {
        Reporter {
            out,
            summary: RunSummary::new(mode),
        }
    }

    pub fn record(&mut self, path: &Path, status: Status) -> io::Result<()> {
        self.summary.total += 1;
        if status == Status::Ok {
            self.summary.ok += 1;
        }
        writeln!(self.out, "{} {}", path.display(), status)
    }

    pub fn record_error(&mut self, path: &Path, err: &FileError) -> io::Result<()> {
        tracing::warn!(path = %path.display(), error = %err, "file failed");
        self.summary.errors += 1;
        self.record(path, Status::Failed)
    }

    pub fn finish(mut self) -> io::Result<RunSummary> {
        self.summary.write_to(&mut self.out)?;
        self.out.flush()?;
        Ok(self.summary)
    }
}

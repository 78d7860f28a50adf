//! CLI for DOR.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use dor_core::checksum::Algorithm;
use dor_core::config::{self, DorConfig};
use dor_core::pipeline::RunSettings;
use std::path::PathBuf;

use commands::{run_create, run_verify};

/// Top-level CLI for DOR.
#[derive(Debug, Parser)]
#[command(name = "dor", version)]
#[command(
    about = "A command line program that validates and checks files for data corruption.",
    long_about = None
)]
pub struct Cli {
    /// Create checksum file for each file in the path.
    #[arg(short = 'c', long, value_name = "PATH", conflicts_with = "verify")]
    pub create: Option<PathBuf>,

    /// Verify checksum files in the path.
    #[arg(short = 'v', long, value_name = "PATH")]
    pub verify: Option<PathBuf>,

    /// Checksum algorithm: md5 or sha256 (overrides config.toml).
    #[arg(short = 'a', long, value_name = "ALGO")]
    pub algorithm: Option<Algorithm>,

    /// Sidecar extension without the dot (default: algorithm name).
    #[arg(short = 'e', long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Do not descend into directories whose name starts with '.'.
    #[arg(long)]
    pub skip_hidden_dirs: bool,

    /// Follow symbolic links.
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Read configuration from FILE instead of ~/.config/dor/config.toml.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// What the invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Create(PathBuf),
    Verify(PathBuf),
    Help,
}

/// How a completed run went, for the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    FilesFailed,
}

impl Cli {
    pub fn run_from_args() -> Result<Outcome> {
        Cli::parse().run()
    }

    pub fn action(&self) -> Action {
        match (&self.create, &self.verify) {
            (Some(path), _) => Action::Create(path.clone()),
            (None, Some(path)) => Action::Verify(path.clone()),
            (None, None) => Action::Help,
        }
    }

    pub fn run(self) -> Result<Outcome> {
        let summary = match self.action() {
            Action::Help => {
                Cli::command().print_help()?;
                println!();
                return Ok(Outcome::Clean);
            }
            Action::Create(root) => run_create(&root, &self.load_settings()?)?,
            Action::Verify(root) => run_verify(&root, &self.load_settings()?)?,
        };
        Ok(if summary.is_clean() {
            Outcome::Clean
        } else {
            Outcome::FilesFailed
        })
    }

    fn load_settings(&self) -> Result<RunSettings> {
        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        self.settings(cfg)
    }

    /// Merge CLI overrides into the loaded config and resolve run settings.
    pub fn settings(&self, mut cfg: DorConfig) -> Result<RunSettings> {
        if let Some(algorithm) = self.algorithm {
            cfg.algorithm = algorithm;
        }
        if let Some(ext) = &self.extension {
            cfg.extension = Some(ext.clone());
        }
        if self.skip_hidden_dirs {
            cfg.walk.skip_hidden_dirs = true;
        }
        if self.follow_symlinks {
            cfg.walk.follow_symlinks = true;
        }
        cfg.settings()
    }
}

#[cfg(test)]
mod tests;

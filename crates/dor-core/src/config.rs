use crate::checksum::{Algorithm, DEFAULT_BUF_SIZE};
use crate::pipeline::RunSettings;
use crate::walker::WalkOptions;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_read_buffer_bytes() -> usize {
    DEFAULT_BUF_SIZE
}

/// Global configuration loaded from `~/.config/dor/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DorConfig {
    /// Checksum algorithm: "md5" (default) or "sha256".
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Sidecar extension without the dot. None = algorithm name ("md5", "sha256").
    #[serde(default)]
    pub extension: Option<String>,
    /// Read buffer size used while hashing.
    #[serde(default = "default_read_buffer_bytes")]
    pub read_buffer_bytes: usize,
    /// Traversal options.
    #[serde(default)]
    pub walk: WalkOptions,
}

impl Default for DorConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            extension: None,
            read_buffer_bytes: DEFAULT_BUF_SIZE,
            walk: WalkOptions::default(),
        }
    }
}

impl DorConfig {
    /// Resolve the settings a pipeline run uses.
    pub fn settings(&self) -> Result<RunSettings> {
        let extension = match &self.extension {
            Some(ext) => {
                validate_extension(ext)?;
                ext.clone()
            }
            None => self.algorithm.default_extension().to_string(),
        };
        Ok(RunSettings {
            algorithm: self.algorithm,
            extension,
            read_buffer_bytes: self.read_buffer_bytes.max(1),
            walk: self.walk.clone(),
        })
    }
}

/// Sidecar extensions are a single path component suffix: no dots, no separators.
pub fn validate_extension(ext: &str) -> Result<()> {
    if ext.is_empty() {
        bail!("sidecar extension must not be empty");
    }
    if let Some(c) = ext.chars().find(|c| matches!(c, '.' | '/' | '\\') || c.is_whitespace()) {
        bail!("sidecar extension {ext:?} must not contain {c:?}");
    }
    Ok(())
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dor")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<DorConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: DorConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DorConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DorConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

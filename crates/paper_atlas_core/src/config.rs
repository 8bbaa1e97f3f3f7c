//! Site data configuration.
//!
//! # Responsibility
//! - Name the data directory and the three data files.
//! - Hold display limits shared by summary and row projections.
//!
//! # Invariants
//! - Every field has a default, so a partial override file is valid.
//! - `data_dir` must not be blank.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Number of method names shown as pills on the home page.
pub const DEFAULT_METHOD_PILL_LIMIT: usize = 12;
/// Number of tags shown per paper row.
pub const DEFAULT_ROW_TAG_LIMIT: usize = 8;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors from reading a configuration override file.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// `data_dir` is blank after trim.
    EmptyDataDir,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "invalid config `{}`: {source}", path.display())
            }
            Self::EmptyDataDir => write!(f, "data_dir must not be blank"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::EmptyDataDir => None,
        }
    }
}

/// Where site data lives and how much of it is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub data_dir: PathBuf,
    pub papers_file: String,
    pub taxonomy_file: String,
    pub methods_file: String,
    pub method_pill_limit: usize,
    pub row_tag_limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            papers_file: "papers.json".to_string(),
            taxonomy_file: "taxonomy.json".to_string(),
            methods_file: "methods.json".to_string(),
            method_pill_limit: DEFAULT_METHOD_PILL_LIMIT,
            row_tag_limit: DEFAULT_ROW_TAG_LIMIT,
        }
    }
}

impl SiteConfig {
    /// Default configuration rooted at `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Reads a JSON override file. Missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.data_dir.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(ConfigError::EmptyDataDir);
        }
        Ok(())
    }

    pub fn papers_path(&self) -> PathBuf {
        self.data_dir.join(&self.papers_file)
    }

    pub fn taxonomy_path(&self) -> PathBuf {
        self.data_dir.join(&self.taxonomy_file)
    }

    pub fn methods_path(&self) -> PathBuf {
        self.data_dir.join(&self.methods_file)
    }
}

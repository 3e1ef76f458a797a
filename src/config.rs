use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{QuizError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub color: bool,
    pub word_bank: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            word_bank: None,
            seed: None,
        }
    }
}

/// Settings given on the command line. Anything set here wins over the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub no_color: bool,
    pub word_bank: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Config {
    pub fn with_overrides(self, overrides: &Overrides) -> Self {
        Self {
            color: self.color && !overrides.no_color,
            word_bank: overrides.word_bank.clone().or(self.word_bank),
            seed: overrides.seed.or(self.seed),
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Result<Config>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "glosa") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("glosa_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    /// A missing file means defaults; an unreadable or malformed one is an error.
    fn load(&self) -> Result<Config> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(QuizError::Config(format!("{}: {e}", self.path.display()))),
        };
        serde_json::from_slice(&bytes)
            .map_err(|e| QuizError::Config(format!("{}: {e}", self.path.display())))
    }
}

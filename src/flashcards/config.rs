use crate::error::{FlashcardsError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const HOME_ENV: &str = "FLASHCARDS_HOME";

/// User configuration, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashcardsConfig {
    /// Deck loaded at startup when `--import_from` is not given
    #[serde(default)]
    pub import_from: Option<PathBuf>,

    /// Deck written on exit when `--export_to` is not given
    #[serde(default)]
    pub export_to: Option<PathBuf>,

    /// Colored output on the terminal
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for FlashcardsConfig {
    fn default() -> Self {
        Self {
            import_from: None,
            export_to: None,
            color: default_color(),
        }
    }
}

/// Deck paths in effect for a session after flags and config are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupPaths {
    pub import_from: Option<PathBuf>,
    pub export_to: Option<PathBuf>,
}

impl FlashcardsConfig {
    /// `$FLASHCARDS_HOME` if set, otherwise the platform config directory.
    pub fn default_dir() -> Result<PathBuf> {
        if let Some(home) = std::env::var_os(HOME_ENV) {
            return Ok(PathBuf::from(home));
        }
        ProjectDirs::from("com", "flashcards", "flashcards")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| FlashcardsError::Config("Could not determine config dir".to_string()))
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        Self::load_file(config_dir.as_ref().join(CONFIG_FILENAME))
    }

    /// Load config from an explicit file, or return defaults if not found
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(FlashcardsError::Io)?;
        let config: FlashcardsConfig =
            serde_json::from_str(&content).map_err(FlashcardsError::Serialization)?;
        Ok(config)
    }

    /// Flags win over config values.
    pub fn startup_paths(
        &self,
        import_flag: Option<PathBuf>,
        export_flag: Option<PathBuf>,
    ) -> StartupPaths {
        StartupPaths {
            import_from: import_flag.or_else(|| self.import_from.clone()),
            export_to: export_flag.or_else(|| self.export_to.clone()),
        }
    }
}

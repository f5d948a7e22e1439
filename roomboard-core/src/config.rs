//! Global roomboard configuration.
//!
//! Lives at ~/.config/roomboard/config.toml. The only setting is where the
//! booking store file is kept.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{RoomBoardError, RoomBoardResult};

static DEFAULT_DATA_DIR: &str = "~/roomboard";
const STORE_FILE: &str = "bookings.json";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

#[derive(Serialize, Deserialize, Clone)]
pub struct RoomBoardConfig {
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for RoomBoardConfig {
    fn default() -> Self {
        RoomBoardConfig { data_dir: default_data_dir() }
    }
}

impl RoomBoardConfig {
    pub fn config_path() -> RoomBoardResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RoomBoardError::Config("Could not determine config directory".into()))?
            .join("roomboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, creating a commented default file on first run.
    pub fn load() -> RoomBoardResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: RoomBoardConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| RoomBoardError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RoomBoardError::Config(e.to_string()))?;

        Ok(config)
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Where the booking store blob lives.
    pub fn store_path(&self) -> PathBuf {
        self.data_path().join(STORE_FILE)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> RoomBoardResult<()> {
        let contents = format!(
            "\
# roomboard configuration

# Where the booking store lives:
# data_dir = \"{}\"
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RoomBoardError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| RoomBoardError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

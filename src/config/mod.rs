use crate::errors::{AppError, AppResult};
use crate::models::time_unit::TimeUnit;
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// IANA name of the device timezone; absent means UTC.
    #[serde(default)]
    pub device_timezone: Option<String>,
    #[serde(default = "default_time_unit")]
    pub default_time_unit: String,
    #[serde(default = "default_repeat")]
    pub default_repeat: u32,
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,
}

fn default_time_unit() -> String {
    TimeUnit::Never.as_str().to_string()
}
fn default_repeat() -> u32 {
    1
}
fn default_upcoming_limit() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            device_timezone: None,
            default_time_unit: default_time_unit(),
            default_repeat: default_repeat(),
            upcoming_limit: default_upcoming_limit(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("farmevent")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".farmevent")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("farmevent.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("farmevent.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Default recurrence for new events; an invalid setting falls back to `never`.
    pub fn default_unit(&self) -> TimeUnit {
        TimeUnit::from_code(&self.default_time_unit).unwrap_or(TimeUnit::Never)
    }

    /// Initialize configuration and return the database path to use.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        // Write config file
        if !is_test {
            Self::with_database(db_path.clone()).save_to(&Self::config_file())?;
            success(format!("Config file: {:?}", Self::config_file()));
        }

        Ok(db_path)
    }
}

use crate::errors::{AppError, AppResult};
use crate::models::perimeter::Perimeter;
use crate::models::position::Position;
use crate::models::worker::{Role, Worker};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Perimeter as it lives in the config file: flat, unvalidated numbers.
/// `Config::perimeter()` turns it into a validated `Perimeter`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerimeterConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_worker")]
    pub worker: Worker,
    #[serde(default = "default_perimeter")]
    pub perimeter: PerimeterConfig,
    /// Path to the JSON fix file maintained by an external position
    /// daemon. When unset, coordinates must be passed on the command line.
    #[serde(default)]
    pub fix_file: Option<String>,
}

fn default_worker() -> Worker {
    Worker {
        id: "w-0001".to_string(),
        name: "Default Worker".to_string(),
        role: Role::Worker,
    }
}

fn default_perimeter() -> PerimeterConfig {
    PerimeterConfig {
        latitude: 37.7749,
        longitude: -122.4194,
        radius_km: 2.0,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            worker: default_worker(),
            perimeter: default_perimeter(),
            fix_file: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("geoclock")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".geoclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("geoclock.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("geoclock.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// The validated work zone currently in force. Changes take effect on
    /// the next gate evaluation, never retroactively on past events.
    pub fn perimeter(&self) -> AppResult<Perimeter> {
        let center = Position::checked(self.perimeter.latitude, self.perimeter.longitude)?;
        Perimeter::new(center, self.perimeter.radius_km)
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            config.save()?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}

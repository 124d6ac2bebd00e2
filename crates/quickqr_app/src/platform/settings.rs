use std::fs;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use quickqr_engine::{parse_ec_level, EcLevel, EncoderSettings, EngineConfig};
use quickqr_logging::{parse_level, qr_warn};
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILENAME: &str = ".quickqr.ron";

/// Optional user settings, read from `.quickqr.ron` in the working directory.
/// Every field may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where Download writes `qrCode.png`.
    pub output_dir: PathBuf,
    pub log_file: PathBuf,
    pub log_level: String,
    /// `L`, `M`, `Q` or `H`.
    pub error_correction: String,
    pub min_dimension: u32,
    pub quiet_zone: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let encoder = EncoderSettings::default();
        Self {
            output_dir: PathBuf::from("."),
            log_file: PathBuf::from("quickqr.log"),
            log_level: "info".to_string(),
            error_correction: "M".to_string(),
            min_dimension: encoder.min_dimension,
            quiet_zone: encoder.quiet_zone,
        }
    }
}

impl Settings {
    pub fn log_level(&self) -> LevelFilter {
        parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn engine_config(&self) -> EngineConfig {
        let ec_level = parse_ec_level(&self.error_correction).unwrap_or_else(|| {
            qr_warn!(
                "Unknown error correction {:?}; using M",
                self.error_correction
            );
            EcLevel::M
        });
        EngineConfig {
            encoder: EncoderSettings {
                ec_level,
                min_dimension: self.min_dimension.max(1),
                quiet_zone: self.quiet_zone,
            },
            output_dir: self.output_dir.clone(),
        }
    }
}

/// Missing, unreadable or malformed files fall back to the defaults.
///
/// Runs before the logger exists, so problems go to stderr.
pub(crate) fn load_settings(path: &Path) -> Settings {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Settings::default();
        }
        Err(err) => {
            eprintln!("Warning: Failed to read settings from {:?}: {}", path, err);
            return Settings::default();
        }
    };

    match ron::from_str(&content) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Warning: Failed to parse settings from {:?}: {}", path, err);
            Settings::default()
        }
    }
}

//! Application-level configuration loading, including the base field presets.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::state::field::{FIELDERS_PER_SIDE, Point};

/// Client canvas width; fielder and shot coordinates live in this range.
pub const CANVAS_WIDTH: f64 = 600.0;
/// Client canvas height.
pub const CANVAS_HEIGHT: f64 = 400.0;
/// Where the batsman stands on the client canvas.
pub const BATSMAN_POS: Point = Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0 + 60.0);

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "GULLY_BACK_CONFIG_PATH";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    field_presets: Vec<Vec<Point>>,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to the
    /// baked-in field presets.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match parse_config(&contents) {
                Ok(app_config) => {
                    info!(
                        path = %path.display(),
                        presets = app_config.preset_count(),
                        "loaded field presets from config"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Base fielder template for the given over, cycling through the presets.
    pub fn preset_for_over(&self, overs: u32) -> &[Point] {
        let index = overs as usize % self.field_presets.len();
        &self.field_presets[index]
    }

    /// Number of base field presets available.
    pub fn preset_count(&self) -> usize {
        self.field_presets.len()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            field_presets: default_field_presets(),
        }
    }
}

/// Problems with the content of a configuration file.
#[derive(Debug, Error)]
enum ConfigError {
    /// The file is not valid JSON for the expected shape.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// No presets at all.
    #[error("config contains no field presets")]
    Empty,
    /// A preset with the wrong number of fielders.
    #[error("field preset {index} has {count} fielders (expected {FIELDERS_PER_SIDE})")]
    WrongSize {
        /// Preset position in the file.
        index: usize,
        /// Number of fielders found.
        count: usize,
    },
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    field_presets: Vec<Vec<RawPosition>>,
}

#[derive(Debug, Deserialize)]
/// JSON representation of a single fielder position inside the configuration file.
struct RawPosition {
    x: f64,
    y: f64,
}

impl From<RawPosition> for Point {
    fn from(value: RawPosition) -> Self {
        Point::new(value.x, value.y)
    }
}

/// Parse and validate a configuration file body.
fn parse_config(contents: &str) -> Result<AppConfig, ConfigError> {
    let raw: RawConfig = serde_json::from_str(contents)?;
    if raw.field_presets.is_empty() {
        return Err(ConfigError::Empty);
    }
    for (index, preset) in raw.field_presets.iter().enumerate() {
        if preset.len() != FIELDERS_PER_SIDE {
            return Err(ConfigError::WrongSize {
                index,
                count: preset.len(),
            });
        }
    }

    let field_presets = raw
        .field_presets
        .into_iter()
        .map(|preset| preset.into_iter().map(Point::from).collect())
        .collect();
    Ok(AppConfig { field_presets })
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Built-in field presets shipped with the binary.
fn default_field_presets() -> Vec<Vec<Point>> {
    vec![
        vec![
            Point::new(260.0, 280.0),
            Point::new(180.0, 260.0),
            Point::new(140.0, 210.0),
            Point::new(170.0, 140.0),
            Point::new(250.0, 110.0),
            Point::new(350.0, 110.0),
            Point::new(430.0, 170.0),
            Point::new(460.0, 240.0),
            Point::new(500.0, 180.0),
            Point::new(100.0, 100.0),
            Point::new(480.0, 60.0),
        ],
        vec![
            Point::new(250.0, 285.0),
            Point::new(220.0, 290.0),
            Point::new(170.0, 260.0),
            Point::new(130.0, 200.0),
            Point::new(160.0, 130.0),
            Point::new(90.0, 80.0),
            Point::new(240.0, 100.0),
            Point::new(180.0, 50.0),
            Point::new(360.0, 110.0),
            Point::new(450.0, 180.0),
            Point::new(520.0, 250.0),
        ],
        vec![
            Point::new(550.0, 300.0),
            Point::new(480.0, 150.0),
            Point::new(500.0, 80.0),
            Point::new(400.0, 50.0),
            Point::new(560.0, 220.0),
            Point::new(370.0, 140.0),
            Point::new(430.0, 210.0),
            Point::new(180.0, 160.0),
            Point::new(140.0, 230.0),
            Point::new(240.0, 140.0),
            Point::new(120.0, 120.0),
        ],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_three_full_presets() {
        let config = AppConfig::default();
        assert_eq!(config.preset_count(), 3);
        for overs in 0..3 {
            assert_eq!(config.preset_for_over(overs).len(), FIELDERS_PER_SIDE);
        }
    }

    #[test]
    fn preset_selection_cycles_with_period_three() {
        let config = AppConfig::default();
        assert_eq!(config.preset_for_over(0), config.preset_for_over(3));
        assert_eq!(config.preset_for_over(0), config.preset_for_over(6));
        assert_eq!(config.preset_for_over(1), config.preset_for_over(4));
        assert_ne!(config.preset_for_over(0), config.preset_for_over(1));
    }

    #[test]
    fn parse_rejects_short_presets() {
        let body = r#"{"field_presets": [[{"x": 1.0, "y": 2.0}]]}"#;
        assert!(matches!(
            parse_config(body),
            Err(ConfigError::WrongSize { index: 0, count: 1 })
        ));
    }

    #[test]
    fn parse_rejects_empty_preset_list() {
        assert!(matches!(
            parse_config(r#"{"field_presets": []}"#),
            Err(ConfigError::Empty)
        ));
    }

    #[test]
    fn parse_accepts_a_full_preset() {
        let positions: Vec<String> = (0..FIELDERS_PER_SIDE)
            .map(|i| format!(r#"{{"x": {i}.0, "y": 5.0}}"#))
            .collect();
        let body = format!(r#"{{"field_presets": [[{}]]}}"#, positions.join(","));

        let config = parse_config(&body).unwrap();
        assert_eq!(config.preset_count(), 1);
        assert_eq!(config.preset_for_over(7)[2], Point::new(2.0, 5.0));
    }
}

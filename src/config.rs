//! Landing page configuration.
//!
//! Parsed from `landing.toml`. Every section and field has a default, so an
//! empty file (or no file at all) yields the stock page.
//!
//! ```toml
//! [background]
//! seed = 42
//! node_count = 80
//! connect_distance = 4.5
//!
//! [orbit]
//! period_secs = 45.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "landing.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub window: WindowConfig,
    pub background: BackgroundConfig,
    pub orbit: OrbitConfig,
    pub reveal: RevealConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "DigiNexAI | Intelligence, Orchestrated.".to_string(),
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// Procedural background tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Fixed seed for reproducible scenes; `None` draws from OS entropy
    pub seed: Option<u64>,
    pub node_count: usize,
    /// Full width of the node volume per axis (nodes span ±extent/2)
    pub extent: [f32; 3],
    /// Two nodes are connected iff their distance is below this
    pub connect_distance: f32,
    /// Edges drawn at most
    pub max_edges: usize,
    pub star_count: usize,
    /// Constant Y-axis drift, rad/s
    pub drift_speed: f32,
    /// Per-frame blend toward the target rotation at 60 Hz
    pub smoothing: f32,
    /// Rotation (rad) added at full pointer deflection
    pub pointer_influence: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            seed: None,
            node_count: 60,
            extent: [20.0, 12.0, 10.0],
            connect_distance: 4.0,
            max_edges: 80,
            star_count: 800,
            drift_speed: 0.03,
            smoothing: 0.02,
            pointer_influence: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Orbit radius, percent of the container size
    pub radius_pct: f32,
    /// Seconds per full revolution
    pub period_secs: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            radius_pct: 45.0,
            period_secs: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction that counts as intersecting
    pub threshold: f32,
    /// Pixels cut from the bottom of the viewport before testing
    pub bottom_margin: f32,
    /// Duration of the reveal transition, seconds
    pub transition_secs: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 50.0,
            transition_secs: 0.7,
        }
    }
}

/// Errors from loading `landing.toml`
#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Invalid { field: &'static str, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "failed to read {}: {}", path.display(), e),
            ConfigError::Parse(path, e) => write!(f, "failed to parse {}: {}", path.display(), e),
            ConfigError::Invalid { field, message } => write!(f, "[{}] {}", field, message),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, e) => Some(e),
            ConfigError::Parse(_, e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

fn invalid(field: &'static str, message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        message: message.into(),
    }
}

impl LandingConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: LandingConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        log::info!("Loaded landing config from {}", path.display());
        Ok(config)
    }

    /// Parse from an in-memory TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: LandingConfig = toml::from_str(content)
            .map_err(|e| ConfigError::Parse(PathBuf::from("<inline>"), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise return defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("{} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let bg = &self.background;
        if bg.node_count == 0 {
            return Err(invalid("background.node_count", "must be at least 1"));
        }
        if bg.extent.iter().any(|e| !e.is_finite() || *e <= 0.0) {
            return Err(invalid("background.extent", "every axis must be positive"));
        }
        if !(bg.connect_distance.is_finite() && bg.connect_distance > 0.0) {
            return Err(invalid("background.connect_distance", "must be positive"));
        }
        if !(bg.smoothing > 0.0 && bg.smoothing <= 1.0) {
            return Err(invalid(
                "background.smoothing",
                format!("{} is outside (0, 1]", bg.smoothing),
            ));
        }
        if !(self.orbit.period_secs.is_finite() && self.orbit.period_secs > 0.0) {
            return Err(invalid("orbit.period_secs", "must be positive"));
        }
        if !(0.0..=50.0).contains(&self.orbit.radius_pct) {
            return Err(invalid("orbit.radius_pct", "must lie within the container (0..=50)"));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(invalid(
                "reveal.threshold",
                format!("{} is outside [0, 1]", self.reveal.threshold),
            ));
        }
        if self.reveal.bottom_margin < 0.0 {
            return Err(invalid("reveal.bottom_margin", "must not be negative"));
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(invalid("window", "size must be positive"));
        }
        Ok(())
    }
}

//! Configuration loader
//!
//! Loads the widget configuration from a TOML file. Falls back to the
//! embedded defaults if no file is given or the file is unusable.

use std::io;
use std::path::{Path, PathBuf};
use std::{fs, str};

use tracing::{debug, info, warn};

use cubeclock_core::config::{ConfigError, WidgetConfig};

/// Embedded default configuration (compiled into the binary)
pub const EMBEDDED_CONFIG: &str = include_str!("../../cubeclock.toml");

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "CUBECLOCK_CONFIG";

/// Configuration loading errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLoadError {
    /// File could not be read
    Io(io::ErrorKind),
    /// Invalid UTF-8 in TOML data
    InvalidUtf8,
    /// TOML parsing failed
    TomlParse,
    /// Parsed values rejected by validation
    Invalid(ConfigError),
}

impl From<io::Error> for ConfigLoadError {
    fn from(e: io::Error) -> Self {
        ConfigLoadError::Io(e.kind())
    }
}

impl From<ConfigError> for ConfigLoadError {
    fn from(e: ConfigError) -> Self {
        ConfigLoadError::Invalid(e)
    }
}

/// Config file named on the command line, else in the environment
pub fn config_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(CONFIG_ENV))
        .map(PathBuf::from)
}

/// Load configuration
///
/// Reads `path` if given, otherwise the embedded defaults. A file that
/// cannot be used is reported and the embedded defaults are used instead.
pub fn load_config(path: Option<&Path>) -> WidgetConfig {
    if let Some(path) = path {
        info!(path = %path.display(), "Loading configuration");
        match load_file(path) {
            Ok(config) => return config,
            Err(e) => warn!(?e, "Failed to load config file, using embedded defaults"),
        }
    } else {
        debug!("No config file given, using embedded defaults");
    }

    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            warn!(?e, "Embedded config rejected, using built-in values");
            WidgetConfig::default()
        }
    }
}

fn load_file(path: &Path) -> Result<WidgetConfig, ConfigLoadError> {
    let bytes = fs::read(path)?;
    debug!("Read {} bytes of TOML", bytes.len());

    let text = str::from_utf8(&bytes).map_err(|_| ConfigLoadError::InvalidUtf8)?;
    parse_config(text)
}

/// Parse and validate a TOML configuration
pub fn parse_config(text: &str) -> Result<WidgetConfig, ConfigLoadError> {
    let config: WidgetConfig = toml::from_str(text).map_err(|e| {
        warn!(error = %e, "TOML parse error");
        ConfigLoadError::TomlParse
    })?;

    if let Err(e) = config.validate() {
        warn!(?e, "Config validation failed");
        return Err(e.into());
    }

    log_config_summary(&config);
    Ok(config)
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &WidgetConfig) {
    info!(
        lead_in_ms = config.timer.lead_in_ms,
        tick_ms = config.timer.tick_interval_ms,
        blink_ms = config.timer.blink_interval_ms,
        blink_toggles = config.timer.blink_toggles,
        "Timer"
    );
    info!(
        half_edge = config.cube.half_edge(),
        camera_distance = config.projection.camera_distance,
        use_skew = config.projection.use_skew,
        "Cube"
    );
    debug!(
        fade_in_ms = config.animation.fade_in_ms,
        fade_out_ms = config.animation.fade_out_ms,
        spin_leg_ms = config.animation.spin_leg_ms,
        "Animation"
    );
}

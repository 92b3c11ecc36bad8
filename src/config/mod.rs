// SPDX-License-Identifier: MPL-2.0
//! Loading and saving toast preferences in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toast]` - Defaults applied to requests that leave a field unset
//! - `[layout]` - Stacking gap, edge margin, card width, and estimated height
//! - `[timing]` - Tick period and fade length
//!
//! Every field is optional; missing fields fall back to the constants in
//! [`defaults`], and out-of-range values are clamped when read.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.layout.gap = Some(12.0);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::toast::{Defaults, Position, Status};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Defaults for toast requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Display time in milliseconds.
    #[serde(default = "default_duration_ms", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,

    /// Screen edge (`top` or `bottom`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// Accent status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            position: Some(Position::default()),
            status: Some(Status::default()),
        }
    }
}

/// Overlay layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Gap between stacked toasts.
    #[serde(default = "default_gap", skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,

    /// Distance from the screen edge to the nearest toast.
    #[serde(default = "default_edge_margin", skip_serializing_if = "Option::is_none")]
    pub edge_margin: Option<f32>,

    /// Toast card width.
    #[serde(default = "default_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    /// Height used to place a toast until its card has been measured.
    #[serde(
        default = "default_estimated_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_height: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap: default_gap(),
            edge_margin: default_edge_margin(),
            width: default_width(),
            estimated_height: default_estimated_height(),
        }
    }
}

/// Timer and animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// Tick period driving expiry, in milliseconds.
    #[serde(default = "default_tick_ms", skip_serializing_if = "Option::is_none")]
    pub tick_ms: Option<u64>,

    /// Fade-in/fade-out length, in milliseconds.
    #[serde(default = "default_fade_ms", skip_serializing_if = "Option::is_none")]
    pub fade_ms: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            fade_ms: default_fade_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub timing: TimingConfig,
}

impl Config {
    /// Request defaults, with the display time clamped to a sane range.
    #[must_use]
    pub fn defaults(&self) -> Defaults {
        let duration_ms = self
            .toast
            .duration_ms
            .unwrap_or(DEFAULT_DURATION_MS)
            .clamp(MIN_DURATION_MS, MAX_DURATION_MS);

        Defaults {
            duration: Duration::from_millis(duration_ms),
            position: self.toast.position.unwrap_or_default(),
            status: self.toast.status.unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn gap(&self) -> f32 {
        clamp_f32(self.layout.gap, DEFAULT_GAP, 0.0, MAX_GAP)
    }

    #[must_use]
    pub fn edge_margin(&self) -> f32 {
        clamp_f32(self.layout.edge_margin, DEFAULT_EDGE_MARGIN, 0.0, MAX_EDGE_MARGIN)
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        clamp_f32(self.layout.width, DEFAULT_WIDTH, MIN_WIDTH, MAX_WIDTH)
    }

    #[must_use]
    pub fn estimated_height(&self) -> f32 {
        clamp_f32(
            self.layout.estimated_height,
            DEFAULT_ESTIMATED_HEIGHT,
            MIN_ESTIMATED_HEIGHT,
            MAX_ESTIMATED_HEIGHT,
        )
    }

    #[must_use]
    pub fn tick(&self) -> Duration {
        Duration::from_millis(
            self.timing
                .tick_ms
                .unwrap_or(DEFAULT_TICK_MS)
                .clamp(MIN_TICK_MS, MAX_TICK_MS),
        )
    }

    #[must_use]
    pub fn fade(&self) -> Duration {
        Duration::from_millis(
            self.timing
                .fade_ms
                .unwrap_or(DEFAULT_FADE_MS)
                .min(MAX_FADE_MS),
        )
    }
}

/// Falls back to `default` for missing or non-finite values, then clamps.
fn clamp_f32(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    value
        .filter(|v| v.is_finite())
        .unwrap_or(default)
        .clamp(min, max)
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_DURATION_MS)
}

fn default_gap() -> Option<f32> {
    Some(DEFAULT_GAP)
}

fn default_edge_margin() -> Option<f32> {
    Some(DEFAULT_EDGE_MARGIN)
}

fn default_width() -> Option<f32> {
    Some(DEFAULT_WIDTH)
}

fn default_estimated_height() -> Option<f32> {
    Some(DEFAULT_ESTIMATED_HEIGHT)
}

fn default_tick_ms() -> Option<u64> {
    Some(DEFAULT_TICK_MS)
}

fn default_fade_ms() -> Option<u64> {
    Some(DEFAULT_FADE_MS)
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

//! Renderer configuration.
//!
//! Values come from `CUBE_*` environment variables; anything missing or
//! unparsable falls back to the construction defaults.
//!
//! | Variable | Field |
//! |----------|-------|
//! | `CUBE_HALF_WIDTH` | `half_width` |
//! | `CUBE_WIDTH` | `window_width` |
//! | `CUBE_HEIGHT` | `window_height` |
//! | `CUBE_SAMPLE_STEP` | `sample_step` |
//! | `CUBE_DEPTH_SCALE` | `depth_scale` |
//! | `CUBE_BACKGROUND` | `background` (first character) |
//! | `CUBE_FRAMES` | `frame_limit` |
//! | `CUBE_FIT_TERMINAL` | `fit_terminal` (`1` or `true`) |
//! | `CUBE_LOG_PATH` | `log_path` |

use std::str::FromStr;

use term_cube_types::{
    DEFAULT_BACKGROUND, DEFAULT_DEPTH_SCALE, DEFAULT_HALF_WIDTH, DEFAULT_SAMPLE_STEP,
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MAX_HALF_WIDTH,
};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    pub half_width: f32,
    pub window_width: usize,
    pub window_height: usize,
    /// Distance between neighbouring surface samples. Controls density, not rotation rate.
    pub sample_step: f32,
    pub depth_scale: f32,
    pub background: char,
    /// Stop after this many frames; run until killed when `None`.
    pub frame_limit: Option<u64>,
    /// Replace the window size with the terminal size at startup.
    pub fit_terminal: bool,
    pub log_path: Option<String>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            half_width: DEFAULT_HALF_WIDTH,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            sample_step: DEFAULT_SAMPLE_STEP,
            depth_scale: DEFAULT_DEPTH_SCALE,
            background: DEFAULT_BACKGROUND,
            frame_limit: None,
            fit_terminal: false,
            log_path: None,
        }
    }
}

impl RendererConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let background = lookup("CUBE_BACKGROUND")
            .and_then(|s| s.chars().next())
            .unwrap_or(defaults.background);

        let fit_terminal = lookup("CUBE_FIT_TERMINAL")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let log_path = lookup("CUBE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            half_width: parse_or(&lookup, "CUBE_HALF_WIDTH", defaults.half_width),
            window_width: parse_or(&lookup, "CUBE_WIDTH", defaults.window_width),
            window_height: parse_or(&lookup, "CUBE_HEIGHT", defaults.window_height),
            sample_step: parse_or(&lookup, "CUBE_SAMPLE_STEP", defaults.sample_step),
            depth_scale: parse_or(&lookup, "CUBE_DEPTH_SCALE", defaults.depth_scale),
            background,
            frame_limit: lookup("CUBE_FRAMES").and_then(|s| s.trim().parse().ok()),
            fit_terminal,
            log_path,
        }
    }

    /// Reject settings the render loop cannot run with.
    ///
    /// A zero sample step would never advance the sampling grid, and a
    /// half-width at or past `MAX_HALF_WIDTH` lets a corner reach the camera.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sample_step > 0.0) {
            return Err(ConfigError::SampleStep(self.sample_step));
        }
        if !(self.half_width > 0.0 && self.half_width < MAX_HALF_WIDTH) {
            return Err(ConfigError::HalfWidth {
                value: self.half_width,
                max: MAX_HALF_WIDTH,
            });
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::EmptyWindow {
                width: self.window_width,
                height: self.window_height,
            });
        }
        Ok(())
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

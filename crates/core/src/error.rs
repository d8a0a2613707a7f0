use std::io;

use thiserror::Error;

/// Rejected startup configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("sample step must be positive, got {0}")]
    SampleStep(f32),

    #[error("cube half-width must be in (0, {max}), got {value}")]
    HalfWidth { value: f32, max: f32 },

    #[error("window must be at least 1x1, got {width}x{height}")]
    EmptyWindow { width: usize, height: usize },
}

/// Failure inside the frame loop.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write frame to sink")]
    Sink(#[from] io::Error),
}

//! Rotating cube rasterizer - projection, compositing and the frame loop.
//!
//! This crate has no terminal dependency. Output goes through the
//! [`FrameSink`] trait and pacing through [`Pacer`], so frames can be rendered
//! and inspected in tests without a TTY or real sleeps.
//!
//! # Module Structure
//!
//! - [`projection`]: rotation about X, Y, Z and perspective divide
//! - [`faces`]: the six cube faces as a fixed descriptor table
//! - [`canvas`]: depth and character buffers with the depth-tested write
//! - [`renderer`]: renderer state, validated setters and the frame state machine
//! - [`pacing`]: frame pacing and cancellation
//! - [`config`]: environment-driven configuration
//!
//! # Example
//!
//! ```
//! use term_cube_core::Renderer;
//!
//! let mut renderer = Renderer::new(10.0, 80, 24, 1.0);
//! renderer.render_frame();
//!
//! let canvas = renderer.canvas();
//! assert!(canvas.symbols().iter().any(|&c| c != ' '));
//! assert!(canvas.depth().iter().any(|&d| d > 0.0));
//! ```

pub mod canvas;
pub mod config;
pub mod error;
pub mod faces;
pub mod pacing;
pub mod projection;
pub mod renderer;
pub mod sink;

pub use canvas::Canvas;
pub use config::RendererConfig;
pub use error::{ConfigError, RenderError};
pub use faces::{Face, FACES};
pub use pacing::{CancelToken, Pacer, ThreadPacer};
pub use projection::{project, rotate, Projected, Rotation, Screen};
pub use renderer::{FramePhase, Renderer};
pub use sink::FrameSink;

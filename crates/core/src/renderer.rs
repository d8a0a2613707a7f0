//! Renderer state, validated setters and the frame state machine.

use std::time::Duration;

use tracing::{debug, info, warn};

use term_cube_types::{
    Angles, Vec3, ANGLE_STEP, DEFAULT_BACKGROUND, DEFAULT_DEPTH_SCALE, DEFAULT_HALF_WIDTH,
    DEFAULT_SAMPLE_STEP, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, FRAME_INTERVAL_MS,
};

use crate::canvas::Canvas;
use crate::config::RendererConfig;
use crate::error::{ConfigError, RenderError};
use crate::faces::FACES;
use crate::pacing::{CancelToken, Pacer, ThreadPacer};
use crate::projection::{project, Projected, Rotation, Screen};
use crate::sink::FrameSink;

/// Phases of one frame, cycled in order forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePhase {
    /// Reset both buffers and recompute the horizontal offset.
    Clearing,
    /// Project and composite every surface sample of every face.
    Sampling,
    /// Stream the character buffer to the sink.
    Flushing,
    /// Advance the rotation angles and wait out the frame interval.
    Advancing,
}

impl FramePhase {
    pub fn next(self) -> Self {
        match self {
            FramePhase::Clearing => FramePhase::Sampling,
            FramePhase::Sampling => FramePhase::Flushing,
            FramePhase::Flushing => FramePhase::Advancing,
            FramePhase::Advancing => FramePhase::Clearing,
        }
    }
}

/// Rotating cube rasterizer.
///
/// Setters are meant to be called between runs; the renderer is not shared
/// across threads.
#[derive(Debug, Clone)]
pub struct Renderer {
    angles: Angles,
    half_width: f32,
    sample_step: f32,
    window_width: usize,
    window_height: usize,
    depth_scale: f32,
    horizontal_offset: f32,
    background: char,
    canvas: Canvas,
    phase: FramePhase,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(
            DEFAULT_HALF_WIDTH,
            DEFAULT_WINDOW_WIDTH,
            DEFAULT_WINDOW_HEIGHT,
            DEFAULT_SAMPLE_STEP,
        )
    }
}

impl Renderer {
    /// Create a renderer with all angles at zero.
    ///
    /// `half_width` must stay below
    /// [`MAX_HALF_WIDTH`](term_cube_types::MAX_HALF_WIDTH) and `sample_step`
    /// must be positive; neither is checked here.
    pub fn new(
        half_width: f32,
        window_width: usize,
        window_height: usize,
        sample_step: f32,
    ) -> Self {
        Self {
            angles: Angles::default(),
            half_width,
            sample_step,
            window_width,
            window_height,
            depth_scale: DEFAULT_DEPTH_SCALE,
            horizontal_offset: 0.0,
            background: DEFAULT_BACKGROUND,
            canvas: Canvas::new(window_width, window_height, DEFAULT_BACKGROUND),
            phase: FramePhase::Clearing,
        }
    }

    /// Validate `config` and build a renderer from it.
    pub fn from_config(config: &RendererConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut renderer = Self::new(
            config.half_width,
            config.window_width,
            config.window_height,
            config.sample_step,
        );
        renderer.set_depth_scale(config.depth_scale);
        renderer.set_background(config.background);
        Ok(renderer)
    }

    pub fn angles(&self) -> Angles {
        self.angles
    }

    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    pub fn sample_step(&self) -> f32 {
        self.sample_step
    }

    pub fn window_width(&self) -> usize {
        self.window_width
    }

    pub fn window_height(&self) -> usize {
        self.window_height
    }

    pub fn depth_scale(&self) -> f32 {
        self.depth_scale
    }

    pub fn horizontal_offset(&self) -> f32 {
        self.horizontal_offset
    }

    pub fn background(&self) -> char {
        self.background
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Phase the next [`step`](Renderer::step) will execute.
    pub fn phase(&self) -> FramePhase {
        self.phase
    }

    /// Set the distance between surface samples.
    ///
    /// Negative values are rejected. Zero is accepted but leaves the sampling
    /// grid unable to advance; callers must not render with it.
    pub fn set_sample_step(&mut self, step: f32) -> bool {
        if step < 0.0 || step.is_nan() {
            warn!(step, "rejected sample step");
            return false;
        }
        self.sample_step = step;
        true
    }

    /// Takes effect at the next clear.
    pub fn set_background(&mut self, symbol: char) -> bool {
        self.background = symbol;
        true
    }

    /// Set the projection zoom. Unbounded.
    pub fn set_depth_scale(&mut self, scale: f32) -> bool {
        self.depth_scale = scale;
        true
    }

    pub fn set_window_width(&mut self, width: i32) -> bool {
        let Ok(width) = usize::try_from(width) else {
            warn!(width, "rejected window width");
            return false;
        };
        self.window_width = width;
        self.resize_canvas();
        true
    }

    pub fn set_window_height(&mut self, height: i32) -> bool {
        let Ok(height) = usize::try_from(height) else {
            warn!(height, "rejected window height");
            return false;
        };
        self.window_height = height;
        self.resize_canvas();
        true
    }

    fn resize_canvas(&mut self) {
        debug!(
            width = self.window_width,
            height = self.window_height,
            "resizing frame buffers"
        );
        self.canvas
            .resize(self.window_width, self.window_height, self.background);
    }

    fn screen(&self) -> Screen {
        Screen {
            width: self.window_width,
            height: self.window_height,
            horizontal_offset: self.horizontal_offset,
            depth_scale: self.depth_scale,
        }
    }

    /// Rotate by the current angles and project onto the screen.
    pub fn project_point(&self, p: Vec3) -> Projected {
        project(Rotation::new(self.angles).apply(p), &self.screen())
    }

    /// Project `p` and depth-test it into the buffers. Returns whether it was written.
    pub fn composite(&mut self, p: Vec3, symbol: char) -> bool {
        let projected = self.project_point(p);
        match projected.cell(self.window_width, self.window_height) {
            Some(idx) => self.canvas.plot(idx, projected.inv_depth, symbol),
            None => false,
        }
    }

    fn clear(&mut self) {
        self.canvas.clear(self.background);
        self.horizontal_offset = -2.0 * self.half_width;
    }

    fn sample_faces(&mut self) {
        let rotation = Rotation::new(self.angles);
        let screen = self.screen();
        let h = self.half_width;
        let step = self.sample_step;

        let mut u = -h;
        while u < h {
            let mut v = -h;
            while v < h {
                for face in &FACES {
                    let projected = project(rotation.apply(face.point(u, v, h)), &screen);
                    if let Some(idx) = projected.cell(screen.width, screen.height) {
                        self.canvas.plot(idx, projected.inv_depth, face.symbol);
                    }
                }
                v += step;
            }
            u += step;
        }
    }

    fn flush<S: FrameSink>(&self, sink: &mut S) -> std::io::Result<()> {
        sink.home_cursor()?;
        for row in self.canvas.rows() {
            // The row break takes the place of column 0.
            sink.write_row(&row[1..])?;
        }
        sink.present()
    }

    /// Clear and sample one frame into the buffers without touching any sink.
    pub fn render_frame(&mut self) {
        self.clear();
        self.sample_faces();
    }

    /// Execute the current phase and move to the next one.
    pub fn step<S: FrameSink, P: Pacer>(
        &mut self,
        sink: &mut S,
        pacer: &mut P,
    ) -> Result<FramePhase, RenderError> {
        match self.phase {
            FramePhase::Clearing => self.clear(),
            FramePhase::Sampling => self.sample_faces(),
            FramePhase::Flushing => self.flush(sink)?,
            FramePhase::Advancing => {
                self.angles.advance(ANGLE_STEP);
                pacer.pause(Duration::from_millis(FRAME_INTERVAL_MS));
            }
        }
        self.phase = self.phase.next();
        Ok(self.phase)
    }

    /// Erase the screen once, then render frames until `cancel` fires or
    /// `frame_limit` frames have completed. Returns the number of completed frames.
    pub fn run<S: FrameSink, P: Pacer>(
        &mut self,
        sink: &mut S,
        pacer: &mut P,
        cancel: &CancelToken,
        frame_limit: Option<u64>,
    ) -> Result<u64, RenderError> {
        info!(
            width = self.window_width,
            height = self.window_height,
            half_width = self.half_width,
            sample_step = self.sample_step,
            ?frame_limit,
            "render loop starting"
        );

        sink.clear_screen()?;
        sink.present()?;
        self.phase = FramePhase::Clearing;

        let mut frames = 0u64;
        loop {
            if self.phase == FramePhase::Clearing
                && (cancel.is_cancelled() || frame_limit.is_some_and(|limit| frames >= limit))
            {
                break;
            }
            if self.step(sink, pacer)? == FramePhase::Clearing {
                frames += 1;
            }
        }

        info!(frames, "render loop stopped");
        Ok(frames)
    }

    /// Render with real-time pacing until the process is killed.
    ///
    /// Only returns if the sink fails.
    pub fn run_forever<S: FrameSink>(&mut self, sink: &mut S) -> Result<(), RenderError> {
        self.run(sink, &mut ThreadPacer, &CancelToken::new(), None)?;
        Ok(())
    }
}

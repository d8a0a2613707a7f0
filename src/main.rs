//! Terminal cube runner (default binary).
//!
//! Reads `CUBE_*` settings from the environment, then streams frames to
//! stdout until killed, or until `CUBE_FRAMES` frames have been drawn.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};

use term_cube::core::{CancelToken, Renderer, RendererConfig, ThreadPacer};
use term_cube::term::{terminal_size, TerminalSink};

fn main() -> Result<()> {
    let mut config = RendererConfig::from_env();
    init_logging(config.log_path.as_deref())?;

    if config.fit_terminal {
        let (w, h) = terminal_size();
        config.window_width = w;
        // Every frame starts with a row break, so one terminal line is spent on it.
        config.window_height = h.saturating_sub(1);
    }

    let mut renderer =
        Renderer::from_config(&config).context("invalid renderer configuration")?;
    let mut sink = TerminalSink::stdout();

    match config.frame_limit {
        Some(limit) => {
            renderer
                .run(&mut sink, &mut ThreadPacer, &CancelToken::new(), Some(limit))
                .context("render loop failed")?;
        }
        None => renderer.run_forever(&mut sink).context("render loop failed")?,
    }
    Ok(())
}

/// Send tracing output to `path`; logging stays off when no path is given.
fn init_logging(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("failed to open log file {path}"))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

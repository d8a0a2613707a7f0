//! Terminal output for the cube renderer.
//!
//! Frames are written as a plain character stream: one full-screen erase
//! before the first frame, then a cursor-home and every row per frame. No
//! alternate screen or raw mode is used, so the process can be stopped with
//! an ordinary interrupt.

pub mod sink;

pub use term_cube_core as core;

pub use sink::{encode_frame_into, terminal_size, TerminalSink};

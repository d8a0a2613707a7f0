//! TerminalSink: streams renderer frames to a terminal through crossterm.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use term_cube_core::{Canvas, FrameSink};

/// Buffers crossterm commands and writes them to `W` on [`present`](FrameSink::present).
pub struct TerminalSink<W: Write> {
    out: W,
    buf: Vec<u8>,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn clear_screen(&mut self) -> io::Result<()> {
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn home_cursor(&mut self) -> io::Result<()> {
        self.buf.queue(cursor::MoveTo(0, 0))?;
        Ok(())
    }

    fn write_row(&mut self, cells: &[char]) -> io::Result<()> {
        self.buf.queue(Print('\n'))?;
        for &ch in cells {
            self.buf.queue(Print(ch))?;
        }
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.buf.clear();
        Ok(())
    }
}

/// Encode one frame (cursor-home plus every row) into `out`.
///
/// Produces the same bytes a [`TerminalSink`] writes for a flushed frame.
pub fn encode_frame_into(canvas: &Canvas, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    for row in canvas.rows() {
        out.queue(Print('\n'))?;
        for &ch in &row[1..] {
            out.queue(Print(ch))?;
        }
    }
    Ok(())
}

/// Current terminal size as `(width, height)`, falling back to 80x24.
pub fn terminal_size() -> (usize, usize) {
    let (w, h) = terminal::size().unwrap_or((80, 24));
    (w as usize, h as usize)
}

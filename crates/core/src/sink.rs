//! Output side of the frame loop.

use std::io;

/// A character device the renderer streams frames into.
///
/// Implementations may buffer; nothing is guaranteed visible until
/// [`present`](FrameSink::present) returns.
pub trait FrameSink {
    /// Erase the whole screen.
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Move the cursor to the top-left cell.
    fn home_cursor(&mut self) -> io::Result<()>;

    /// Start a new line and write `cells` after it.
    fn write_row(&mut self, cells: &[char]) -> io::Result<()>;

    /// Flush everything written so far.
    fn present(&mut self) -> io::Result<()>;
}

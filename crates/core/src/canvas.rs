//! Depth and character buffers plus the depth-tested compositor.

/// Row-major depth-reciprocal and symbol grids of the same shape.
///
/// A depth cell holds the largest reciprocal depth written since the last
/// [`clear`](Canvas::clear), or `0.0` if nothing landed there. The symbol at
/// the same index belongs to the sample that wrote that depth.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    depth: Vec<f32>,
    symbols: Vec<char>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: char) -> Self {
        let len = width * height;
        Self {
            width,
            height,
            depth: vec![0.0; len],
            symbols: vec![background; len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn depth(&self) -> &[f32] {
        &self.depth
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Resize both grids to `width * height`.
    ///
    /// Contents are unspecified until the next clear. The allocation is kept
    /// when shrinking.
    pub fn resize(&mut self, width: usize, height: usize, background: char) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = width * height;
        self.depth.resize(len, 0.0);
        self.symbols.resize(len, background);
    }

    pub fn clear(&mut self, background: char) {
        self.symbols.fill(background);
        self.depth.fill(0.0);
    }

    /// Depth-test a sample at `idx` and write it if strictly closer.
    ///
    /// Indices outside the grid are dropped. Returns whether the sample won.
    #[inline(always)]
    pub fn plot(&mut self, idx: usize, inv_depth: f32, symbol: char) -> bool {
        match self.depth.get_mut(idx) {
            Some(d) if inv_depth > *d => {
                *d = inv_depth;
                self.symbols[idx] = symbol;
                true
            }
            _ => false,
        }
    }

    /// Symbol rows, top to bottom. Empty when the width is zero.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        let width = self.width.max(1);
        let take = if self.width == 0 { 0 } else { self.height };
        self.symbols.chunks_exact(width).take(take)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_background_and_zero_depth() {
        let c = Canvas::new(4, 3, '.');
        assert_eq!(c.len(), 12);
        assert!(c.symbols().iter().all(|&s| s == '.'));
        assert!(c.depth().iter().all(|&d| d == 0.0));
    }

    #[test]
    fn plot_is_a_no_op_on_equal_depth() {
        let mut c = Canvas::new(2, 2, ' ');
        assert!(c.plot(1, 0.5, '@'));
        assert!(!c.plot(1, 0.5, '#'));
        assert_eq!(c.symbols()[1], '@');
        assert_eq!(c.depth()[1], 0.5);
    }

    #[test]
    fn closer_sample_wins_in_either_order() {
        let mut near_first = Canvas::new(2, 2, ' ');
        near_first.plot(3, 0.02, 'n');
        near_first.plot(3, 0.01, 'f');

        let mut far_first = Canvas::new(2, 2, ' ');
        far_first.plot(3, 0.01, 'f');
        far_first.plot(3, 0.02, 'n');

        assert_eq!(near_first.symbols()[3], 'n');
        assert_eq!(far_first.symbols()[3], 'n');
        assert_eq!(near_first.depth()[3], far_first.depth()[3]);
    }

    #[test]
    fn out_of_range_plot_is_dropped() {
        let mut c = Canvas::new(2, 2, ' ');
        assert!(!c.plot(4, 1.0, '@'));
        assert!(c.symbols().iter().all(|&s| s == ' '));
    }

    #[test]
    fn resize_then_clear_resets_every_cell() {
        let mut c = Canvas::new(2, 2, ' ');
        c.plot(0, 1.0, '@');
        c.resize(5, 3, ' ');
        c.clear('-');
        assert_eq!(c.len(), 15);
        assert!(c.symbols().iter().all(|&s| s == '-'));
        assert!(c.depth().iter().all(|&d| d == 0.0));
    }

    #[test]
    fn rows_split_by_width() {
        let c = Canvas::new(3, 2, 'x');
        let rows: Vec<&[char]> = c.rows().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.len() == 3));

        let empty = Canvas::new(0, 5, 'x');
        assert_eq!(empty.rows().count(), 0);
    }
}

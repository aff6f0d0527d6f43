//! Watching a sequential render go by.  Observers see rows as they
//! finish; they never see, or touch, the pixels.

use std::io::Write;

/// Receives row-completion events from a sequential render.
pub trait Progress {
    /// Called once, before the first row, with the number of rows.
    fn start(&mut self, _rows: usize) {}
    /// Called after row `y` has been completely emitted.
    fn row(&mut self, _y: usize) {}
    /// Called once, after the last row.
    fn finish(&mut self) {}
}

/// The silent observer.
impl Progress for () {}

/// A terminal bar of the form `[####......]`.  The dots are drawn
/// first, then the cursor returns and each `#` overwrites one.
pub struct ProgressBar<W: Write> {
    out: W,
    width: usize,
    every: usize,
}

impl<W: Write> ProgressBar<W> {
    /// A bar `width` characters wide drawn onto `out`.
    pub fn new(out: W, width: usize) -> Self {
        ProgressBar {
            out,
            width,
            every: 1,
        }
    }

    // Write errors are ignored.
    fn draw(&mut self, s: &str) {
        let _ = self.out.write_all(s.as_bytes());
        let _ = self.out.flush();
    }
}

impl<W: Write> Progress for ProgressBar<W> {
    fn start(&mut self, rows: usize) {
        self.every = if self.width == 0 {
            rows.max(1)
        } else {
            (rows / self.width).max(1)
        };
        let dots = ".".repeat(self.width);
        self.draw(&format!("[{}]\r[", dots));
    }

    fn row(&mut self, y: usize) {
        if y % self.every == 0 {
            self.draw("#");
        }
    }

    fn finish(&mut self) {
        self.draw("] done.\n");
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The one error type shared by the renderer, its configuration, and
//! the output sinks.  The arithmetic itself never fails; everything
//! here is either a bad configuration or the outside world refusing
//! our bytes.

use std::io;

/// Everything that can stop a render from producing an image.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The integral plane must have at least one pixel in each
    /// direction.
    #[fail(display = "image size {}x{} is empty", _0, _1)]
    EmptyImage(usize, usize),

    /// The image would not fit in memory, or in the 32-bit dimensions
    /// image encoders use.
    #[fail(display = "image size {}x{} is too large", _0, _1)]
    TooLarge(usize, usize),

    /// The complex window must have a finite, positive extent.
    #[fail(display = "view window is degenerate: {}", _0)]
    BadView(String),

    /// A parallel render needs somebody to do the work.
    #[fail(display = "thread count must be at least 1")]
    NoThreads,

    /// One of the parallel workers panicked, so the buffer cannot be
    /// trusted.
    #[fail(display = "a render worker panicked")]
    WorkerPanicked,

    /// Creating or writing the output failed.
    #[fail(display = "could not write image: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        RenderError::Io(err)
    }
}

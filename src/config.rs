// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Every knob a render has, with the defaults that produce the stock
//! 4000x3000 image.

use num_cpus;

use error::RenderError;
use escape::{Bailout, MAX_ITERATIONS};
use palette::Gradient;
use planes::{PlaneMapper, View};

/// Default image width in pixels.
pub const WIDTH: usize = 4000;
/// Default image height in pixels.
pub const HEIGHT: usize = 3000;
/// Default width, in characters, of the terminal progress bar.
pub const BAR_WIDTH: usize = 60;

/// How the pixels get computed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Schedule {
    /// One thread, row by row, left to right.
    Sequential,
    /// One unit of work per pixel, handed out to a pool of threads.
    Parallel,
}

/// The full description of a render.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Iterations after which a point is presumed inside the set.
    pub max_iterations: usize,
    /// The window of the complex plane being drawn.
    pub view: View,
    /// Colors for escaping points.
    pub gradient: Gradient,
    /// How escape is tested.
    pub bailout: Bailout,
    /// Worker threads for the parallel schedule.
    pub threads: usize,
    /// Sequential or parallel.
    pub schedule: Schedule,
    /// Width of the progress bar drawn by the binary.
    pub bar_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: WIDTH,
            height: HEIGHT,
            max_iterations: MAX_ITERATIONS,
            view: View::default(),
            gradient: Gradient::default(),
            bailout: Bailout::default(),
            threads: num_cpus::get(),
            schedule: Schedule::Parallel,
            bar_width: BAR_WIDTH,
        }
    }
}

impl Config {
    /// A default configuration with a different image size.  Handy
    /// for tests that want a tiny grid.
    pub fn with_size(width: usize, height: usize) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Check that a render with this configuration can be attempted,
    /// returning the plane it will be drawn on.
    pub fn validate(&self) -> Result<PlaneMapper, RenderError> {
        if self.threads == 0 {
            return Err(RenderError::NoThreads);
        }
        PlaneMapper::new(self.width, self.height, self.view)
    }
}

#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which repeatedly squaring a number and adding `c` back in,
//! starting from zero, never runs off to infinity.  We cannot iterate
//! forever, so each point gets a fixed budget of iterations; the
//! number it actually used before leaving the circle of radius two is
//! its "escape time," and that number picks the pixel's color.  Points
//! that spend the entire budget are presumed to be inside the set and
//! are painted black.
//!
//! The crate renders one fixed window, [-2, 1) x [-1, 1), into an RGB
//! buffer, either one pixel after another or with one unit of work per
//! pixel spread over a pool of threads, and writes it out as a binary
//! PPM.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

pub mod config;
pub mod error;
pub mod escape;
pub mod palette;
pub mod planes;
pub mod ppm;
pub mod progress;
pub mod render;

pub use config::{Config, Schedule};
pub use error::RenderError;
pub use escape::{escape_time, evaluate, Bailout, MAX_ITERATIONS};
pub use palette::Gradient;
pub use planes::{Pixel, PlaneMapper, View};
pub use progress::{Progress, ProgressBar};
pub use render::Renderer;

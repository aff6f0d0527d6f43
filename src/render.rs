// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The grid renderer.  Every pixel is mapped to a point on the complex
//! plane, the point is run through the escape-time function, and the
//! count is turned into a color.  Pixels do not depend on one another,
//! so the order in which they are computed is a scheduling question
//! only: the sequential schedule walks the rows in order and can
//! stream them out as it goes, while the parallel schedule hands each
//! pixel to whichever worker asks next and assembles the image in
//! memory.
//!
//! Both schedules produce byte-identical buffers.

extern crate crossbeam;

use itertools;
use itertools::iproduct;
use std::io::{self, Write};
use std::iter::Zip;
use std::ops::Range;
use std::slice::ChunksMut;
use std::sync::{Arc, Mutex};

use config::{Config, Schedule};
use error::RenderError;
use escape::{escape_time, Bailout};
use palette::Gradient;
use planes::{Pixel, PlaneMapper};
use progress::Progress;

/// Pixels still to be drawn, each paired with the three bytes of the
/// buffer it alone may write.
type WorkQueue<'a> =
    Arc<Mutex<Zip<itertools::Product<Range<usize>, Range<usize>>, ChunksMut<'a, u8>>>>;

/// Holds a validated configuration.  Once built it is never mutated,
/// so a single renderer can be shared by every worker thread.
#[derive(Debug)]
pub struct Renderer {
    plane: PlaneMapper,
    limit: usize,
    gradient: Gradient,
    bailout: Bailout,
    threads: usize,
    schedule: Schedule,
}

impl Renderer {
    /// Validate `config` and prepare to render it.
    pub fn new(config: &Config) -> Result<Self, RenderError> {
        let plane = config.validate()?;
        debug!(
            "renderer: {}x{}, {} iterations, {:?} bailout, {:?} with {} threads",
            config.width,
            config.height,
            config.max_iterations,
            config.bailout,
            config.schedule,
            config.threads
        );
        Ok(Renderer {
            plane,
            limit: config.max_iterations,
            gradient: config.gradient,
            bailout: config.bailout,
            threads: config.threads,
            schedule: config.schedule,
        })
    }

    /// The plane this renderer draws on.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// Length in bytes of a finished image.
    pub fn buffer_len(&self) -> usize {
        self.plane.len() * 3
    }

    /// The color of a single pixel.
    #[inline]
    pub fn shade(&self, pixel: &Pixel) -> [u8; 3] {
        let point = self.plane.pixel_to_point(pixel);
        let iterations = escape_time(point, self.limit, self.bailout);
        self.gradient.color(iterations, self.limit)
    }

    /// Render with whichever schedule the configuration asked for.
    pub fn render(&self) -> Result<Vec<u8>, RenderError> {
        match self.schedule {
            Schedule::Sequential => Ok(self.render_sequential()),
            Schedule::Parallel => self.render_parallel(self.threads),
        }
    }

    /// Walk the plane row by row on the calling thread, writing each
    /// pixel to `out` the moment it is colored.  `progress` hears about
    /// each row after its last pixel has been written.  Nothing is
    /// buffered here; hand in a `BufWriter` if `out` is a file.
    pub fn stream<W, P>(&self, out: &mut W, progress: &mut P) -> io::Result<()>
    where
        W: Write,
        P: Progress,
    {
        progress.start(self.plane.height());
        for row in 0..self.plane.height() {
            for column in 0..self.plane.width() {
                out.write_all(&self.shade(&Pixel(column, row)))?;
            }
            trace!("row {} streamed", row);
            progress.row(row);
        }
        progress.finish();
        Ok(())
    }

    /// The sequential schedule, collected into a buffer.
    pub fn render_sequential(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.buffer_len());
        for row in 0..self.plane.height() {
            for column in 0..self.plane.width() {
                buffer.extend_from_slice(&self.shade(&Pixel(column, row)));
            }
        }
        buffer
    }

    /// The parallel schedule.  Every pixel is a separate unit of work;
    /// `threads` workers pull units from a shared queue until it runs
    /// dry, taking up to a row's worth at a time.  The queue hands out
    /// each pixel together with exclusive access to its own slot in the
    /// buffer, so the workers write without any further coordination.
    /// Returns once every worker has finished.
    pub fn render_parallel(&self, threads: usize) -> Result<Vec<u8>, RenderError> {
        if threads == 0 {
            return Err(RenderError::NoThreads);
        }
        let batch = self.plane.width();
        let mut buffer = vec![0 as u8; self.buffer_len()];
        {
            let units: WorkQueue = Arc::new(Mutex::new(
                iproduct!(0..self.plane.height(), 0..self.plane.width())
                    .zip(buffer.chunks_mut(3)),
            ));
            crossbeam::scope(|spawner| {
                for worker in 0..threads {
                    let units = units.clone();
                    spawner.spawn(move |_| {
                        let mut rendered = 0;
                        loop {
                            // A poisoned queue means another worker
                            // panicked; the scope will report it.
                            let taken: Vec<_> = match units.lock() {
                                Ok(mut units) => units.by_ref().take(batch).collect(),
                                Err(_) => Vec::new(),
                            };
                            if taken.is_empty() {
                                break;
                            }
                            for ((row, column), slot) in taken {
                                slot.copy_from_slice(&self.shade(&Pixel(column, row)));
                                rendered += 1;
                            }
                        }
                        debug!("worker {} rendered {} pixels", worker, rendered);
                    });
                }
            })
            .map_err(|_| RenderError::WorkerPanicked)?;
        }
        Ok(buffer)
    }
}

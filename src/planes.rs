//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a window on the complex plane.  Only one direction is needed:
//! every pixel asks where it lives, nothing asks the reverse.
use num::Complex;

use error::RenderError;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the x, y of a pixel in the integral plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// The window of the complex plane the image shows, written as
/// `coordinate = index / size * span - offset` on each axis.  The
/// left and top edges are included, the right and bottom are not.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct View {
    /// Width of the window along the real axis.
    pub re_span: f64,
    /// Subtracted after scaling; the left edge is at `-re_offset`.
    pub re_offset: f64,
    /// Height of the window along the imaginary axis.
    pub im_span: f64,
    /// Subtracted after scaling; the top edge is at `-im_offset`.
    pub im_offset: f64,
}

impl Default for View {
    /// Real axis [-2, 1), imaginary axis [-1, 1).
    fn default() -> Self {
        View {
            re_span: 3.0,
            re_offset: 2.0,
            im_span: 2.0,
            im_offset: 1.0,
        }
    }
}

/// Bytes needed for a `width` x `height` RGB image, if that fits in
/// a `usize`.
pub fn rgb_len(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(height).and_then(|n| n.checked_mul(3))
}

/// Maps pixels on the integral plane to points inside the view.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The right-lower hand corner of the integral cartesian plane.
    pub integral_plane: IntegralPlane,
    /// The window of the complex plane being rendered.
    pub view: View,
}

impl PlaneMapper {
    /// Constructor.  Refuses planes with no pixels and windows with
    /// no area.
    pub fn new(width: usize, height: usize, view: View) -> Result<PlaneMapper, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyImage(width, height));
        }

        if rgb_len(width, height).is_none() {
            return Err(RenderError::TooLarge(width, height));
        }

        let finite = [view.re_span, view.re_offset, view.im_span, view.im_offset]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(RenderError::BadView("all bounds must be finite".to_string()));
        }

        if view.re_span <= 0.0 || view.im_span <= 0.0 {
            return Err(RenderError::BadView("spans must be positive".to_string()));
        }

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            view,
        })
    }

    /// The width of the integral plane.
    pub fn width(&self) -> usize {
        self.integral_plane.0
    }

    /// The height of the integral plane.
    pub fn height(&self) -> usize {
        self.integral_plane.1
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Given a pixel on the integral cartesian plane, return the point
    /// of the complex plane it samples.  The arithmetic is done in
    /// exactly the order `index / size * span - offset` so that
    /// the same pixel always samples the same point, bit for bit.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            (pixel.0 as f64) / (self.integral_plane.0 as f64) * self.view.re_span
                - self.view.re_offset,
            (pixel.1 as f64) / (self.integral_plane.1 as f64) * self.view.im_span
                - self.view.im_offset,
        )
    }

    /// The byte offset of a pixel's RGB triple in a row-major buffer.
    pub fn offset(&self, pixel: &Pixel) -> usize {
        (pixel.1 * self.integral_plane.0 + pixel.0) * 3
    }
}

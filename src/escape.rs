//! The escape-time function: how long a point survives being squared
//! and shifted before it leaves the circle of radius two.

use num::Complex;

/// The default number of iterations after which a point is presumed
/// to be inside the set.
pub const MAX_ITERATIONS: usize = 100;

/// How "has it left the circle" is decided.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Bailout {
    /// Compare the true modulus, `|z| <= 2`.  This is a `hypot`, so
    /// it is slower, but it is the stock test.
    Modulus,
    /// Compare the squared modulus, `|z|^2 <= 4`.  Cheaper, and
    /// identical except when a value lands exactly on the boundary,
    /// where rounding in the two formulas can disagree.
    NormSqr,
}

impl Default for Bailout {
    fn default() -> Self {
        Bailout::Modulus
    }
}

impl Bailout {
    /// True while `z` is still inside the bounding circle.
    #[inline]
    pub fn bounded(self, z: Complex<f64>) -> bool {
        match self {
            Bailout::Modulus => z.norm() <= 2.0,
            Bailout::NormSqr => z.norm_sqr() <= 4.0,
        }
    }
}

/// Iterate `z = z * z + c` from zero, testing before each step, and
/// return how many steps were taken before `z` escaped or `limit` was
/// reached.  A return of `limit` means "presumed inside".
pub fn escape_time(c: Complex<f64>, limit: usize, bailout: Bailout) -> usize {
    let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    let mut iterations = 0;
    while iterations < limit && bailout.bounded(z) {
        z = z * z + c;
        iterations += 1;
    }
    iterations
}

/// `escape_time` with the stock limit and bailout.
pub fn evaluate(re: f64, im: f64) -> usize {
    escape_time(Complex::new(re, im), MAX_ITERATIONS, Bailout::Modulus)
}

//! Turns an escape count into a color.

/// A two-stop linear gradient.  Points presumed inside the set are
/// always black; everything else slides from `start` (escaped at once)
/// to `end` (escaped on the last possible step).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gradient {
    /// RGB for a count of zero.
    pub start: [u8; 3],
    /// RGB for a count of one less than the limit.
    pub end: [u8; 3],
}

impl Default for Gradient {
    /// Pale mint to violet.
    fn default() -> Self {
        Gradient {
            start: [194, 252, 199],
            end: [140, 10, 196],
        }
    }
}

/// Black, for points that never escaped.
pub const INSIDE: [u8; 3] = [0, 0, 0];

/// Interpolate from `a` to `b` by `t`, truncating toward zero.
#[inline]
pub fn lerp(t: f64, a: u8, b: u8) -> u8 {
    (t * f64::from(b) + (1.0 - t) * f64::from(a)) as u8
}

impl Gradient {
    /// The color of a pixel whose point took `iterations` steps out of
    /// a possible `limit`.
    pub fn color(&self, iterations: usize, limit: usize) -> [u8; 3] {
        if iterations >= limit {
            return INSIDE;
        }
        // iterations < limit, so limit >= 1; a limit of one leaves
        // only iterations == 0, which is the start color.
        let t = if limit > 1 {
            iterations as f64 / (limit - 1) as f64
        } else {
            0.0
        };
        [
            lerp(t, self.start[0], self.end[0]),
            lerp(t, self.start[1], self.end[1]),
            lerp(t, self.start[2], self.end[2]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_is_black() {
        assert_eq!(Gradient::default().color(100, 100), INSIDE);
    }

    #[test]
    fn endpoints_are_exact() {
        let g = Gradient::default();
        assert_eq!(g.color(0, 100), [194, 252, 199]);
        assert_eq!(g.color(99, 100), [140, 10, 196]);
    }

    #[test]
    fn interpolation_truncates() {
        // t = 1/99: 193.45, 249.55, 198.97
        assert_eq!(Gradient::default().color(1, 100), [193, 249, 198]);
    }

    #[test]
    fn every_channel_stays_between_its_endpoints() {
        let g = Gradient::default();
        for i in 0..100 {
            let c = g.color(i, 100);
            assert!(c[0] >= 140 && c[0] <= 194, "red {} at {}", c[0], i);
            assert!(c[1] >= 10 && c[1] <= 252, "green {} at {}", c[1], i);
            assert!(c[2] >= 196 && c[2] <= 199, "blue {} at {}", c[2], i);
        }
    }

    #[test]
    fn limit_of_one_uses_the_start_color() {
        let g = Gradient::default();
        assert_eq!(g.color(0, 1), g.start);
        assert_eq!(g.color(1, 1), INSIDE);
    }
}

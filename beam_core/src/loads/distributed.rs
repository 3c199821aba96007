//! Distributed loads: uniform (UDL) and linearly varying (TRL).
//!
//! Both kinds expose their resultant and their first moment about the load's
//! own start point. The solvers work from the first moment rather than the
//! centroid so a trapezoid whose end intensities cancel (zero resultant,
//! non-zero couple) never divides by zero.

use serde::{Deserialize, Serialize};

use super::CutContribution;

/// Uniform distributed load over `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Start of the loaded span (m)
    pub start: f64,
    /// End of the loaded span (m), `end > start`
    pub end: f64,
    /// Intensity (N/m), positive upward
    pub intensity: f64,
}

impl DistributedLoad {
    /// Loaded length (m)
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Total force `q·ℓ` (N)
    pub fn resultant(&self) -> f64 {
        self.intensity * self.span()
    }

    /// First moment about `start`: `q·ℓ²/2` (N·m)
    pub fn first_moment(&self) -> f64 {
        self.intensity * self.span().powi(2) / 2.0
    }

    /// Midpoint of the loaded span (m)
    pub fn centroid(&self) -> f64 {
        self.start + 0.5 * self.span()
    }

    pub(crate) fn cut_contribution(&self, x: f64) -> CutContribution {
        if x <= self.start {
            CutContribution::ZERO
        } else if x <= self.end {
            // Partial load up to the cut
            let loaded = x - self.start;
            let force = self.intensity * loaded;
            CutContribution {
                shear: force,
                moment: force * loaded / 2.0,
            }
        } else {
            let force = self.resultant();
            CutContribution {
                shear: force,
                moment: force * (x - self.start) - self.first_moment(),
            }
        }
    }
}

/// Shape of a linearly varying load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriangularProfile {
    /// Zero at start, peak at end
    Rising,
    /// Peak at start, zero at end
    Falling,
    /// Non-zero at both ends
    Trapezoidal,
    /// Zero everywhere
    Empty,
}

/// Linearly varying load over `[start, end]`
///
/// Intensity goes from `intensity_start` at `start` to `intensity_end` at
/// `end`. A pure triangle has one of the two set to zero, but any trapezoid
/// is handled exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangularLoad {
    /// Start of the loaded span (m)
    pub start: f64,
    /// End of the loaded span (m), `end > start`
    pub end: f64,
    /// Intensity at `start` (N/m), positive upward
    pub intensity_start: f64,
    /// Intensity at `end` (N/m), positive upward
    pub intensity_end: f64,
}

impl TriangularLoad {
    /// Loaded length (m)
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn profile(&self) -> TriangularProfile {
        match (self.intensity_start != 0.0, self.intensity_end != 0.0) {
            (false, true) => TriangularProfile::Rising,
            (true, false) => TriangularProfile::Falling,
            (true, true) => TriangularProfile::Trapezoidal,
            (false, false) => TriangularProfile::Empty,
        }
    }

    /// Total force `½(q₁ + q₂)·ℓ` (N)
    pub fn resultant(&self) -> f64 {
        0.5 * (self.intensity_start + self.intensity_end) * self.span()
    }

    /// First moment about `start`: `ℓ²(q₁ + 2q₂)/6` (N·m)
    pub fn first_moment(&self) -> f64 {
        self.span().powi(2) * (self.intensity_start + 2.0 * self.intensity_end) / 6.0
    }

    /// Position of the resultant (m).
    ///
    /// One third of the span from the peak for a pure triangle. `None` when
    /// the resultant vanishes.
    pub fn centroid(&self) -> Option<f64> {
        let force = self.resultant();
        if force == 0.0 {
            None
        } else {
            Some(self.start + self.first_moment() / force)
        }
    }

    /// Intensity at `x`, linearly interpolated (N/m)
    pub fn intensity_at(&self, x: f64) -> f64 {
        let slope = (self.intensity_end - self.intensity_start) / self.span();
        self.intensity_start + slope * (x - self.start)
    }

    pub(crate) fn cut_contribution(&self, x: f64) -> CutContribution {
        if x <= self.start {
            CutContribution::ZERO
        } else if x <= self.end {
            // Split the loaded part [start, x] into a rectangle at the cut
            // intensity plus a triangle peaking at `start`.
            let base = x - self.start;
            let f_cut = self.intensity_at(x);
            let r_triangle = 0.5 * base * (self.intensity_start - f_cut);
            let r_rectangle = base * f_cut;
            CutContribution {
                shear: r_triangle + r_rectangle,
                moment: r_triangle * (2.0 / 3.0) * base + r_rectangle * 0.5 * base,
            }
        } else {
            let force = self.resultant();
            CutContribution {
                shear: force,
                moment: force * (x - self.start) - self.first_moment(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    #[test]
    fn test_udl_resultant_and_centroid() {
        let udl = DistributedLoad {
            start: 1.2,
            end: 5.2,
            intensity: -2000.0,
        };
        assert!(approx_eq(udl.resultant(), -8000.0, 1e-12));
        assert!(approx_eq(udl.centroid(), 3.2, 1e-12));
    }

    #[test]
    fn test_udl_cut_continuous_at_end() {
        let udl = DistributedLoad {
            start: 1.0,
            end: 3.0,
            intensity: -4.0,
        };
        let inside = udl.cut_contribution(3.0);
        let outside = udl.cut_contribution(3.0 + 1e-9);
        assert!(approx_eq(inside.shear, outside.shear, 1e-6));
        assert!(approx_eq(inside.moment, outside.moment, 1e-6));
        // Full resultant -8 N acting at x = 2, cut at x = 5
        let far = udl.cut_contribution(5.0);
        assert!(approx_eq(far.shear, -8.0, 1e-12));
        assert!(approx_eq(far.moment, -24.0, 1e-12));
    }

    #[test]
    fn test_falling_triangle_resultant_and_centroid() {
        let trl = TriangularLoad {
            start: 0.0,
            end: 4.0,
            intensity_start: 10.0,
            intensity_end: 0.0,
        };
        assert_eq!(trl.profile(), TriangularProfile::Falling);
        assert!(approx_eq(trl.resultant(), 20.0, 1e-12));
        // One third of the span from the peak at the start
        assert!(approx_eq(trl.centroid().unwrap(), 4.0 / 3.0, 1e-12));
    }

    #[test]
    fn test_rising_triangle_centroid() {
        let trl = TriangularLoad {
            start: 2.0,
            end: 5.0,
            intensity_start: 0.0,
            intensity_end: -6.0,
        };
        assert_eq!(trl.profile(), TriangularProfile::Rising);
        assert!(approx_eq(trl.resultant(), -9.0, 1e-12));
        assert!(approx_eq(trl.centroid().unwrap(), 4.0, 1e-12));
    }

    #[test]
    fn test_trapezoid_centroid() {
        // 2 N/m rising to 4 N/m over 3 m: F = 9, x̄ = 3(2 + 8)/(3·6) = 5/3
        let trl = TriangularLoad {
            start: 0.0,
            end: 3.0,
            intensity_start: 2.0,
            intensity_end: 4.0,
        };
        assert_eq!(trl.profile(), TriangularProfile::Trapezoidal);
        assert!(approx_eq(trl.resultant(), 9.0, 1e-12));
        assert!(approx_eq(trl.centroid().unwrap(), 5.0 / 3.0, 1e-12));
    }

    #[test]
    fn test_self_cancelling_trapezoid_has_no_centroid() {
        let trl = TriangularLoad {
            start: 0.0,
            end: 2.0,
            intensity_start: 5.0,
            intensity_end: -5.0,
        };
        assert_eq!(trl.resultant(), 0.0);
        assert!(trl.centroid().is_none());
        assert!(trl.first_moment() != 0.0);
    }

    #[test]
    fn test_rising_partial_cut_matches_closed_form() {
        // Rising from 0 to q over [0, L]: at cut ξ, q(ξ) = qξ/L,
        // shear = qξ²/(2L), moment = qξ³/(6L)
        let (q, l) = (-12.0, 6.0);
        let trl = TriangularLoad {
            start: 0.0,
            end: l,
            intensity_start: 0.0,
            intensity_end: q,
        };
        let xi = 2.0;
        let cut = trl.cut_contribution(xi);
        assert!(approx_eq(cut.shear, q * xi * xi / (2.0 * l), 1e-12));
        assert!(approx_eq(cut.moment, q * xi.powi(3) / (6.0 * l), 1e-12));
    }

    #[test]
    fn test_triangle_cut_continuous_at_end() {
        let trl = TriangularLoad {
            start: 1.0,
            end: 4.0,
            intensity_start: -3.0,
            intensity_end: -1.0,
        };
        let inside = trl.cut_contribution(4.0);
        let outside = trl.cut_contribution(4.0 + 1e-9);
        assert!(approx_eq(inside.shear, outside.shear, 1e-6));
        assert!(approx_eq(inside.moment, outside.moment, 1e-6));
    }
}

//! Concentrated actions: point forces and point moments.

use serde::{Deserialize, Serialize};

use super::CutContribution;

/// Concentrated force at a single position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Distance from the left end (m)
    pub position: f64,
    /// Horizontal component (N), positive to the right
    pub force_x: f64,
    /// Vertical component (N), positive upward
    pub force_y: f64,
}

impl PointLoad {
    pub(crate) fn cut_contribution(&self, x: f64) -> CutContribution {
        if x > self.position {
            CutContribution {
                shear: self.force_y,
                moment: self.force_y * (x - self.position),
            }
        } else {
            CutContribution::ZERO
        }
    }
}

/// Concentrated couple at a single position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMoment {
    /// Distance from the left end (m)
    pub position: f64,
    /// Magnitude (N·m), positive counter-clockwise
    pub magnitude: f64,
}

impl PointMoment {
    /// A counter-clockwise couple left of the cut produces hogging moment,
    /// so it enters the sagging-positive diagram with a negative sign.
    pub(crate) fn cut_contribution(&self, x: f64) -> CutContribution {
        if x > self.position {
            CutContribution {
                shear: 0.0,
                moment: -self.magnitude,
            }
        } else {
            CutContribution::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_load_boundary_is_exclusive() {
        let p = PointLoad {
            position: 2.0,
            force_x: 0.0,
            force_y: -10.0,
        };
        assert_eq!(p.cut_contribution(1.999), CutContribution::ZERO);
        assert_eq!(p.cut_contribution(2.0), CutContribution::ZERO);

        let after = p.cut_contribution(3.0);
        assert_eq!(after.shear, -10.0);
        assert_eq!(after.moment, -10.0);
    }

    #[test]
    fn test_point_moment_jump() {
        let m = PointMoment {
            position: 1.0,
            magnitude: 5.0,
        };
        assert_eq!(m.cut_contribution(1.0), CutContribution::ZERO);
        let after = m.cut_contribution(4.0);
        assert_eq!(after.shear, 0.0);
        assert_eq!(after.moment, -5.0);
    }
}

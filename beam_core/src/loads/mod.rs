//! Load model for beam analysis
//!
//! Four immutable load records, wrapped in the [`Load`] tagged union:
//!
//! - [`PointLoad`] - concentrated force with horizontal and vertical components
//! - [`PointMoment`] - concentrated couple
//! - [`DistributedLoad`] - uniform distributed load (UDL) over a sub-span
//! - [`TriangularLoad`] - linearly varying load (TRL): triangle or trapezoid
//!
//! # Sign Convention
//!
//! - Vertical forces and intensities: positive upward (gravity loads are negative)
//! - Horizontal forces: positive to the right
//! - Moments: positive counter-clockwise
//!
//! All positions are measured in meters from the left end of the beam and
//! must lie in `[0, length]`. Out-of-range loads are rejected by
//! [`Load::validate`], never clamped.
//!
//! # Example
//!
//! ```
//! use beam_core::loads::Load;
//!
//! // 2 kN/m downward over [1.2, 5.2] and an 8 kN·m clockwise couple at 3.2 m
//! let loads = vec![
//!     Load::uniform(1.2, 5.2, -2000.0),
//!     Load::moment(3.2, -8000.0),
//! ];
//!
//! let total: f64 = loads.iter().map(Load::vertical_force).sum();
//! assert!((total + 8000.0).abs() < 1e-9);
//! ```

pub mod concentrated;
pub mod distributed;

pub use concentrated::{PointLoad, PointMoment};
pub use distributed::{DistributedLoad, TriangularLoad, TriangularProfile};

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, CalcError, CalcResult};

/// Shear and bending-moment contribution of a load (or the part of a load)
/// lying to the left of a section cut.
///
/// `moment` follows the sagging-positive convention used by the field solver.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CutContribution {
    /// Vertical force to the left of the cut (N)
    pub shear: f64,
    /// Bending moment at the cut (N·m), sagging positive
    pub moment: f64,
}

impl CutContribution {
    pub const ZERO: CutContribution = CutContribution {
        shear: 0.0,
        moment: 0.0,
    };
}

/// A single load applied to the beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Load {
    /// Concentrated force
    Point(PointLoad),
    /// Concentrated couple
    Moment(PointMoment),
    /// Uniform distributed load
    Uniform(DistributedLoad),
    /// Linearly varying distributed load
    Triangular(TriangularLoad),
}

impl Load {
    /// Create a point load at `position` with components `force_x`, `force_y` (N)
    pub fn point(position: f64, force_x: f64, force_y: f64) -> Self {
        Load::Point(PointLoad {
            position,
            force_x,
            force_y,
        })
    }

    /// Create a point moment (N·m, counter-clockwise positive)
    pub fn moment(position: f64, magnitude: f64) -> Self {
        Load::Moment(PointMoment {
            position,
            magnitude,
        })
    }

    /// Create a uniform distributed load (N/m) over `[start, end]`
    pub fn uniform(start: f64, end: f64, intensity: f64) -> Self {
        Load::Uniform(DistributedLoad {
            start,
            end,
            intensity,
        })
    }

    /// Create a linearly varying load over `[start, end]`
    pub fn triangular(start: f64, end: f64, intensity_start: f64, intensity_end: f64) -> Self {
        Load::Triangular(TriangularLoad {
            start,
            end,
            intensity_start,
            intensity_end,
        })
    }

    /// Short display name
    pub fn kind(&self) -> &'static str {
        match self {
            Load::Point(_) => "Point load",
            Load::Moment(_) => "Point moment",
            Load::Uniform(_) => "UDL",
            Load::Triangular(_) => "TRL",
        }
    }

    /// Net vertical force (N), positive upward
    pub fn vertical_force(&self) -> f64 {
        match self {
            Load::Point(p) => p.force_y,
            Load::Moment(_) => 0.0,
            Load::Uniform(u) => u.resultant(),
            Load::Triangular(t) => t.resultant(),
        }
    }

    /// Net horizontal force (N), positive to the right
    pub fn horizontal_force(&self) -> f64 {
        match self {
            Load::Point(p) => p.force_x,
            _ => 0.0,
        }
    }

    /// Counter-clockwise moment of this load about `point` (N·m)
    ///
    /// For forces this is `F·(x_F − point)`; couples contribute their
    /// magnitude regardless of where they act.
    pub fn moment_about(&self, point: f64) -> f64 {
        match self {
            Load::Point(p) => p.force_y * (p.position - point),
            Load::Moment(m) => m.magnitude,
            Load::Uniform(u) => u.resultant() * (u.start - point) + u.first_moment(),
            Load::Triangular(t) => t.resultant() * (t.start - point) + t.first_moment(),
        }
    }

    /// Position of the vertical resultant, if it is defined.
    ///
    /// Couples have none; a trapezoid whose intensities cancel has zero
    /// resultant and therefore no centroid either.
    pub fn centroid(&self) -> Option<f64> {
        match self {
            Load::Point(p) => Some(p.position),
            Load::Moment(_) => None,
            Load::Uniform(u) => Some(u.centroid()),
            Load::Triangular(t) => t.centroid(),
        }
    }

    /// Contribution of this load to shear and moment at section `x`.
    ///
    /// A concentrated action at `p` is counted only once `x > p`, so the
    /// value reported at `x == p` is the one immediately left of the jump.
    pub fn cut_contribution(&self, x: f64) -> CutContribution {
        match self {
            Load::Point(p) => p.cut_contribution(x),
            Load::Moment(m) => m.cut_contribution(x),
            Load::Uniform(u) => u.cut_contribution(x),
            Load::Triangular(t) => t.cut_contribution(x),
        }
    }

    /// Contribution at `x = 0` of an action applied exactly at `x = 0`.
    ///
    /// On a cantilever the wall carries such an action together with the
    /// fixed-end reactions, so the fixed-end station counts it with `x >= p`.
    /// Distributed loads have nothing concentrated at their start.
    pub(crate) fn fixed_end_contribution(&self) -> CutContribution {
        match self {
            Load::Point(p) if p.position == 0.0 => CutContribution {
                shear: p.force_y,
                moment: 0.0,
            },
            Load::Moment(m) if m.position == 0.0 => CutContribution {
                shear: 0.0,
                moment: -m.magnitude,
            },
            _ => CutContribution::ZERO,
        }
    }

    /// Check that all positions lie on a beam of `length` and that every
    /// value is finite. `index` identifies the load in error messages.
    pub fn validate(&self, index: usize, length: f64) -> CalcResult<()> {
        let field = |name: &str| format!("loads[{}].{}", index, name);

        match self {
            Load::Point(p) => {
                require_finite(field("force_x"), p.force_x)?;
                require_finite(field("force_y"), p.force_y)?;
                check_position(&field("position"), p.position, length)
            }
            Load::Moment(m) => {
                require_finite(field("magnitude"), m.magnitude)?;
                check_position(&field("position"), m.position, length)
            }
            Load::Uniform(u) => {
                require_finite(field("intensity"), u.intensity)?;
                check_span(&field("start"), &field("end"), u.start, u.end, length)
            }
            Load::Triangular(t) => {
                require_finite(field("intensity_start"), t.intensity_start)?;
                require_finite(field("intensity_end"), t.intensity_end)?;
                check_span(&field("start"), &field("end"), t.start, t.end, length)
            }
        }
    }
}

/// Validate every load in a list against a beam length.
pub fn validate_loads(loads: &[Load], length: f64) -> CalcResult<()> {
    loads
        .iter()
        .enumerate()
        .try_for_each(|(i, load)| load.validate(i, length))
}

fn check_position(field: &str, position: f64, length: f64) -> CalcResult<()> {
    require_finite(field, position)?;
    if position < 0.0 || position > length {
        return Err(CalcError::invalid_input(
            field,
            position.to_string(),
            format!("Position must lie within the beam [0, {}]", length),
        ));
    }
    Ok(())
}

fn check_span(start_field: &str, end_field: &str, start: f64, end: f64, length: f64) -> CalcResult<()> {
    check_position(start_field, start, length)?;
    check_position(end_field, end, length)?;
    if end <= start {
        return Err(CalcError::invalid_input(
            end_field,
            end.to_string(),
            format!("Load span must have end > start (start = {})", start),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_force_per_kind() {
        assert_eq!(Load::point(1.0, 5.0, -10.0).vertical_force(), -10.0);
        assert_eq!(Load::moment(1.0, 50.0).vertical_force(), 0.0);
        assert_eq!(Load::uniform(0.0, 2.0, -3.0).vertical_force(), -6.0);
        assert_eq!(Load::triangular(0.0, 4.0, 10.0, 0.0).vertical_force(), 20.0);
    }

    #[test]
    fn test_horizontal_force_only_from_point_loads() {
        assert_eq!(Load::point(1.0, 5.0, -10.0).horizontal_force(), 5.0);
        assert_eq!(Load::uniform(0.0, 2.0, -3.0).horizontal_force(), 0.0);
    }

    #[test]
    fn test_moment_about_matches_resultant_times_arm() {
        let udl = Load::uniform(1.0, 3.0, -2.0);
        // F = -4 at x = 2, about x = 0.5 -> -4 * 1.5
        assert!((udl.moment_about(0.5) + 6.0).abs() < 1e-12);

        let couple = Load::moment(2.0, 7.0);
        assert_eq!(couple.moment_about(0.0), 7.0);
        assert_eq!(couple.moment_about(5.0), 7.0);
    }

    #[test]
    fn test_centroids() {
        assert_eq!(Load::point(2.5, 0.0, -1.0).centroid(), Some(2.5));
        assert_eq!(Load::moment(2.5, 1.0).centroid(), None);
        assert_eq!(Load::uniform(1.0, 3.0, -1.0).centroid(), Some(2.0));
    }

    #[test]
    fn test_fixed_end_contribution_only_for_actions_at_origin() {
        let force = Load::point(0.0, 3.0, -500.0).fixed_end_contribution();
        assert_eq!(force.shear, -500.0);
        assert_eq!(force.moment, 0.0);

        let couple = Load::moment(0.0, 100.0).fixed_end_contribution();
        assert_eq!(couple.shear, 0.0);
        assert_eq!(couple.moment, -100.0);

        assert_eq!(Load::point(0.5, 0.0, -500.0).fixed_end_contribution(), CutContribution::ZERO);
        assert_eq!(Load::uniform(0.0, 2.0, -10.0).fixed_end_contribution(), CutContribution::ZERO);
    }

    #[test]
    fn test_validation_accepts_loads_on_beam() {
        let loads = vec![
            Load::point(0.0, 0.0, -1.0),
            Load::point(6.0, 0.0, -1.0),
            Load::uniform(0.0, 6.0, -1.0),
            Load::triangular(1.0, 2.0, 0.0, -5.0),
        ];
        assert!(validate_loads(&loads, 6.0).is_ok());
    }

    #[test]
    fn test_validation_rejects_out_of_range_position() {
        let err = Load::point(7.0, 0.0, -1.0).validate(3, 6.0).unwrap_err();
        match err {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "loads[3].position"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(Load::moment(-0.1, 1.0).validate(0, 6.0).is_err());
    }

    #[test]
    fn test_validation_rejects_zero_length_span() {
        assert!(Load::uniform(2.0, 2.0, -1.0).validate(0, 6.0).is_err());
        assert!(Load::triangular(3.0, 3.0, -1.0, 0.0).validate(0, 6.0).is_err());
    }

    #[test]
    fn test_validation_rejects_reversed_span() {
        assert!(Load::uniform(4.0, 2.0, -1.0).validate(0, 6.0).is_err());
    }

    #[test]
    fn test_validation_rejects_non_finite() {
        assert!(Load::point(1.0, f64::NAN, -1.0).validate(0, 6.0).is_err());
        assert!(Load::uniform(1.0, 2.0, f64::INFINITY).validate(0, 6.0).is_err());
    }

    #[test]
    fn test_serialization_is_tagged() {
        let load = Load::triangular(0.0, 4.0, 10.0, 0.0);
        let json = serde_json::to_string(&load).unwrap();
        assert!(json.contains("\"type\":\"Triangular\""));
        assert!(json.contains("\"intensity_start\":10.0"));

        let parsed: Load = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, load);
    }
}

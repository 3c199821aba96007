//! # Slope and Deflection
//!
//! Double integration of the curvature `κ = M/(E·I)` over the station grid
//! with the trapezoidal rule.
//!
//! Both cumulative integrals start from zero at `x = 0`. For a cantilever
//! that already is the fixed-end condition `θ(0) = y(0) = 0`. For a simply
//! supported beam a rigid-body rotation `c0 + c1·x` is removed afterwards so
//! the deflection vanishes at the two anchor points:
//!
//! - [`DeflectionAnchor::Supports`]: at the pin and roller positions,
//!   interpolated linearly where a support falls between stations
//! - [`DeflectionAnchor::BeamEnds`]: at `x = 0` and `x = L`, which only
//!   matches the physical supports when they sit at the beam ends
//!
//! The slope is shifted by `c1` in both cases.
//!
//! Positive slope is counter-clockwise, positive deflection is upward.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::calculations::beam::{BeamConfig, BeamType};
use crate::calculations::internal_forces::{extreme_by, DiscretizedField, Extreme};
use crate::errors::{require_finite, CalcError, CalcResult};

/// Where a simply supported beam's deflection is pinned to zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeflectionAnchor {
    /// Zero deflection at the pin (A) and roller (B)
    #[default]
    Supports,
    /// Zero deflection at both beam ends
    BeamEnds,
}

/// Curvature, slope and deflection on the same stations as the force field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflectionField {
    /// Station positions (m)
    pub x: Vec<f64>,
    /// Curvature M/EI (1/m)
    pub curvature: Vec<f64>,
    /// Slope (rad), counter-clockwise positive
    pub slope: Vec<f64>,
    /// Deflection (m), upward positive
    pub deflection: Vec<f64>,
}

impl DeflectionField {
    /// Largest |y| with its signed value and position
    pub fn max_abs_deflection(&self) -> Extreme {
        extreme_by(&self.x, &self.deflection, |y| y.abs())
    }

    /// Largest |θ| with its signed value and position
    pub fn max_abs_slope(&self) -> Extreme {
        extreme_by(&self.x, &self.slope, |t| t.abs())
    }

    /// Deflection at an arbitrary position, linearly interpolated
    pub fn deflection_at(&self, x: f64) -> f64 {
        interpolate(&self.x, &self.deflection, x)
    }
}

/// Integrate the moment diagram of `field` into slope and deflection.
///
/// `flexural_rigidity` is E·I in N·m² and must be positive.
pub fn solve_deflection(
    beam: &BeamConfig,
    field: &DiscretizedField,
    flexural_rigidity: f64,
    anchor: DeflectionAnchor,
) -> CalcResult<DeflectionField> {
    require_finite("flexural_rigidity", flexural_rigidity)?;
    if flexural_rigidity <= 0.0 {
        return Err(CalcError::invalid_input(
            "flexural_rigidity",
            flexural_rigidity.to_string(),
            "E·I must be positive",
        ));
    }
    if field.is_empty() || field.moment.len() != field.len() {
        return Err(CalcError::invalid_input(
            "field",
            format!("{} stations", field.len()),
            "Moment diagram is empty or does not match its stations",
        ));
    }

    let x = field.x.clone();
    let curvature: Vec<f64> = field.moment.iter().map(|m| m / flexural_rigidity).collect();
    let mut slope = cumulative_trapezoid(&x, &curvature);
    let mut deflection = cumulative_trapezoid(&x, &slope);

    if let BeamType::Simple { pin, roller } = beam.beam_type {
        let (a, b) = match anchor {
            DeflectionAnchor::Supports => (pin, roller),
            DeflectionAnchor::BeamEnds => (0.0, beam.length),
        };
        let ya = interpolate(&x, &deflection, a);
        let yb = interpolate(&x, &deflection, b);
        let c1 = (yb - ya) / (b - a);
        let c0 = ya - c1 * a;

        for ((xi, t), y) in x.iter().zip(slope.iter_mut()).zip(deflection.iter_mut()) {
            *t -= c1;
            *y -= c0 + c1 * xi;
        }
        debug!(
            "Deflection anchored at x = {} and x = {} ({:?}), rotation {:.3e} rad",
            a, b, anchor, c1
        );
    }

    let result = DeflectionField {
        x,
        curvature,
        slope,
        deflection,
    };
    debug!(
        "Max |y| = {:.4e} m at x = {:.4} m",
        result.max_abs_deflection().value.abs(),
        result.max_abs_deflection().position
    );

    Ok(result)
}

/// Running trapezoidal integral of `values` over `x`, starting at zero
fn cumulative_trapezoid(x: &[f64], values: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut acc = 0.0;
    out.push(acc);
    for i in 1..values.len() {
        acc += 0.5 * (values[i - 1] + values[i]) * (x[i] - x[i - 1]);
        out.push(acc);
    }
    out
}

/// Piecewise-linear interpolation, clamped to the end values
pub(crate) fn interpolate(x: &[f64], values: &[f64], at: f64) -> f64 {
    let i = x.partition_point(|&xi| xi < at);
    if i == 0 {
        return values[0];
    }
    if i >= x.len() {
        return values[values.len() - 1];
    }
    let (x0, x1) = (x[i - 1], x[i]);
    let t = (at - x0) / (x1 - x0);
    values[i - 1] + t * (values[i] - values[i - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::internal_forces::solve_internal_forces;
    use crate::calculations::reactions::solve_reactions;
    use crate::loads::Load;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b.abs() < 1e-10 {
            a.abs() < tol
        } else {
            ((a - b) / b).abs() < tol
        }
    }

    fn deflect(
        beam: &BeamConfig,
        loads: &[Load],
        ei: f64,
        anchor: DeflectionAnchor,
    ) -> DeflectionField {
        let reactions = solve_reactions(beam, loads).unwrap();
        let field = solve_internal_forces(beam, loads, &reactions, 10_000).unwrap();
        solve_deflection(beam, &field, ei, anchor).unwrap()
    }

    #[test]
    fn test_simple_span_uniform_load() {
        // δmax = 5wL⁴/(384EI) at midspan, downward
        let (w, l, ei) = (-1000.0, 10.0, 1.0e7);
        let beam = BeamConfig::simple_span(l);
        let result = deflect(&beam, &[Load::uniform(0.0, l, w)], ei, DeflectionAnchor::Supports);

        let max = result.max_abs_deflection();
        let expected = 5.0 * w * l.powi(4) / (384.0 * ei);
        assert!(approx_eq(max.value, expected, 1e-4));
        assert!((max.position - 5.0).abs() < 0.01);
        assert!(result.deflection[0].abs() < 1e-12);
        assert!(result.deflection[10_000].abs() < 1e-12);
        // Symmetric load: zero slope at midspan
        assert!(result.slope[5_000].abs() < 1e-9);
    }

    #[test]
    fn test_zero_at_interior_supports() {
        let beam = BeamConfig::simple(6.4, 1.2, 5.2);
        let loads = vec![Load::uniform(1.2, 5.2, -2000.0), Load::moment(3.2, -8000.0)];
        let result = deflect(&beam, &loads, 2.0e6, DeflectionAnchor::Supports);

        let scale = result.max_abs_deflection().value.abs();
        assert!(scale > 0.0);
        assert!(result.deflection_at(1.2).abs() < 1e-9 * scale);
        assert!(result.deflection_at(5.2).abs() < 1e-9 * scale);
    }

    #[test]
    fn test_beam_end_anchor_zeroes_the_ends() {
        let beam = BeamConfig::simple(6.4, 1.2, 5.2);
        let loads = vec![Load::uniform(1.2, 5.2, -2000.0)];
        let ends = deflect(&beam, &loads, 2.0e6, DeflectionAnchor::BeamEnds);
        let supports = deflect(&beam, &loads, 2.0e6, DeflectionAnchor::Supports);

        let scale = ends.max_abs_deflection().value.abs();
        assert!(ends.deflection[0].abs() < 1e-12);
        assert!(ends.deflection[10_000].abs() < 1e-9 * scale);
        // Interior supports are not honoured by the end anchor
        assert!(ends.deflection_at(1.2).abs() > 1e-6 * scale);
        assert!(supports.deflection_at(1.2).abs() < 1e-9 * scale);
    }

    #[test]
    fn test_anchors_agree_for_end_supports() {
        let beam = BeamConfig::simple_span(8.0);
        let loads = vec![Load::point(3.0, 0.0, -500.0), Load::triangular(0.0, 8.0, 0.0, -200.0)];
        let a = deflect(&beam, &loads, 5.0e5, DeflectionAnchor::Supports);
        let b = deflect(&beam, &loads, 5.0e5, DeflectionAnchor::BeamEnds);
        for i in 0..a.deflection.len() {
            assert!((a.deflection[i] - b.deflection[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_cantilever_tip_load() {
        // δtip = PL³/(3EI)
        let (p, l, ei) = (-10.0, 3.0, 1000.0);
        let beam = BeamConfig::cantilever(l);
        let result = deflect(&beam, &[Load::point(l, 0.0, p)], ei, DeflectionAnchor::Supports);

        assert_eq!(result.deflection[0], 0.0);
        assert_eq!(result.slope[0], 0.0);
        let tip = result.deflection[result.deflection.len() - 1];
        assert!(approx_eq(tip, p * l.powi(3) / (3.0 * ei), 1e-5));
        // Tip slope PL²/(2EI)
        let tip_slope = result.slope[result.slope.len() - 1];
        assert!(approx_eq(tip_slope, p * l * l / (2.0 * ei), 1e-6));
    }

    #[test]
    fn test_zero_load_has_zero_deflection() {
        let beam = BeamConfig::simple(5.0, 1.0, 4.0);
        let result = deflect(&beam, &[], 1.0e6, DeflectionAnchor::Supports);
        assert!(result.deflection.iter().all(|y| *y == 0.0));
        assert!(result.slope.iter().all(|t| *t == 0.0));
    }

    #[test]
    fn test_invalid_rigidity() {
        let beam = BeamConfig::simple_span(4.0);
        let reactions = solve_reactions(&beam, &[]).unwrap();
        let field = solve_internal_forces(&beam, &[], &reactions, 10).unwrap();
        for ei in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = solve_deflection(&beam, &field, ei, DeflectionAnchor::Supports).unwrap_err();
            assert!(err.is_configuration_error());
        }
    }

    #[test]
    fn test_interpolate() {
        let x = [0.0, 1.0, 2.0];
        let v = [0.0, 10.0, 30.0];
        assert_eq!(interpolate(&x, &v, 0.5), 5.0);
        assert_eq!(interpolate(&x, &v, 1.0), 10.0);
        assert_eq!(interpolate(&x, &v, 1.5), 20.0);
        assert_eq!(interpolate(&x, &v, -1.0), 0.0);
        assert_eq!(interpolate(&x, &v, 3.0), 30.0);
    }
}

//! # Bending and Shear Stress
//!
//! Stresses derived from the shear and moment diagrams and the resolved
//! section properties:
//!
//! - Bending: `σ(x) = M(x)·c / Ix` at the extreme fibre
//! - Shear: `τ = V·Q / (Ix·b)`
//! - Factor of safety: `fy / max|σ|`, and `0.55·fy / max|τ|` for shear
//!
//! `Q(y) = b·|y|·(|y|/2)` is the first moment of the strip between the
//! neutral axis and the fibre at `y`. It is exact for rectangles and an
//! approximation for every other shape, which are reduced to their
//! representative width `b`. The representative shear stress uses
//! `Q = b·c²/2`, the largest value over the fibre samples.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::stress::{factor_of_safety, FactorOfSafety};
//!
//! assert_eq!(factor_of_safety(250.0e6, 125.0e6), FactorOfSafety::Finite(2.0));
//! assert_eq!(factor_of_safety(250.0e6, 0.0), FactorOfSafety::Unbounded);
//! ```

use std::cmp::Ordering;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::calculations::internal_forces::{extreme_by, DiscretizedField, Extreme};
use crate::errors::{CalcError, CalcResult};
use crate::materials::Material;
use crate::sections::SectionProperties;

/// Capacity over demand
///
/// `Unbounded` when the demand is zero everywhere. Unbounded compares greater
/// than any finite value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum FactorOfSafety {
    Finite(f64),
    Unbounded,
}

impl FactorOfSafety {
    /// Finite value, `None` when unbounded
    pub fn value(&self) -> Option<f64> {
        match self {
            FactorOfSafety::Finite(v) => Some(*v),
            FactorOfSafety::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, FactorOfSafety::Unbounded)
    }

    /// True when the factor reaches `required`
    pub fn meets(&self, required: f64) -> bool {
        match self {
            FactorOfSafety::Finite(v) => *v >= required,
            FactorOfSafety::Unbounded => true,
        }
    }
}

impl PartialOrd for FactorOfSafety {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (FactorOfSafety::Finite(a), FactorOfSafety::Finite(b)) => a.partial_cmp(b),
            (FactorOfSafety::Finite(_), FactorOfSafety::Unbounded) => Some(Ordering::Less),
            (FactorOfSafety::Unbounded, FactorOfSafety::Finite(_)) => Some(Ordering::Greater),
            (FactorOfSafety::Unbounded, FactorOfSafety::Unbounded) => Some(Ordering::Equal),
        }
    }
}

impl std::fmt::Display for FactorOfSafety {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactorOfSafety::Finite(v) => write!(f, "{:.2}", v),
            FactorOfSafety::Unbounded => write!(f, "unbounded (no load effect)"),
        }
    }
}

/// `strength / demand`, unbounded for zero demand
pub fn factor_of_safety(strength: f64, demand: f64) -> FactorOfSafety {
    let demand = demand.abs();
    if demand == 0.0 {
        FactorOfSafety::Unbounded
    } else {
        FactorOfSafety::Finite(strength / demand)
    }
}

/// `Q(y) = b·|y|·(|y|/2)` at each fibre position (m³)
pub fn first_moment_of_area(width: f64, y_samples: &[f64]) -> Vec<f64> {
    y_samples.iter().map(|y| width * y.abs() * (y.abs() / 2.0)).collect()
}

/// `Q = b·c²/2` used for the representative shear stress (m³)
pub fn neutral_axis_first_moment(section: &SectionProperties) -> f64 {
    section.b * section.c * section.c / 2.0
}

/// `σ = M·c / Ix` (Pa)
pub fn bending_stress(moment: f64, section: &SectionProperties) -> f64 {
    moment * section.c / section.ix
}

/// `τ = V·Q / (Ix·b)` (Pa), `None` for a zero-width or zero-inertia section
pub fn shear_stress(shear: f64, first_moment: f64, section: &SectionProperties) -> Option<f64> {
    let denominator = section.ix * section.b;
    if denominator == 0.0 {
        None
    } else {
        Some(shear * first_moment / denominator)
    }
}

/// Representative shear stress at every station (Pa)
pub fn shear_stress_field(field: &DiscretizedField, section: &SectionProperties) -> Option<Vec<f64>> {
    let q = neutral_axis_first_moment(section);
    field
        .shear
        .iter()
        .map(|v| shear_stress(*v, q, section))
        .collect()
}

/// Shear stress over the section depth for shear force `shear` (Pa).
///
/// At each fibre the first moment of the area beyond it, `Q(c) − Q(y)`,
/// is used, so the profile peaks at the neutral axis and vanishes at the
/// extreme fibres.
///
/// This is not `V·Q(y)/(Ix·b)` with the per-fibre values of
/// [`first_moment_of_area`]: those grow away from the neutral axis, so a
/// profile built from them directly is zero at the axis and largest at the
/// fibres. Per-height results therefore differ from that plain `Q(y)`
/// mapping; the representative value from [`shear_stress_field`] agrees
/// with both, since `Q(c)` is the neutral-axis first moment.
pub fn shear_stress_profile(shear: f64, section: &SectionProperties) -> Option<Vec<f64>> {
    let q_na = neutral_axis_first_moment(section);
    first_moment_of_area(section.b, &section.y_samples)
        .into_iter()
        .map(|q| shear_stress(shear, q_na - q, section))
        .collect()
}

/// Stress summary for one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressResults {
    /// Extreme-fibre bending stress at every station (Pa)
    pub bending_stress: Vec<f64>,
    /// Largest |σ| with position
    pub max_bending_stress: Extreme,
    /// Largest representative |τ| with position, `None` when `b == 0`
    pub max_shear_stress: Option<Extreme>,
    /// `fy / max|σ|`
    pub bending_fos: FactorOfSafety,
    /// `0.55·fy / max|τ|`, `None` when shear stress is undefined
    pub shear_fos: Option<FactorOfSafety>,
}

/// Bending and shear stresses and their factors of safety.
pub fn solve_stress(
    field: &DiscretizedField,
    section: &SectionProperties,
    material: &Material,
) -> CalcResult<StressResults> {
    if !(section.ix > 0.0 && section.ix.is_finite()) {
        return Err(CalcError::invalid_input(
            "section.ix",
            section.ix.to_string(),
            "Second moment of area must be positive",
        ));
    }
    material.validate()?;

    let bending: Vec<f64> = field.moment.iter().map(|m| bending_stress(*m, section)).collect();
    let max_bending_stress = extreme_by(&field.x, &bending, |s| s.abs());
    let bending_fos = factor_of_safety(material.yield_strength, max_bending_stress.value);

    let max_shear_stress =
        shear_stress_field(field, section).map(|tau| extreme_by(&field.x, &tau, |t| t.abs()));
    let shear_fos =
        max_shear_stress.map(|tau| factor_of_safety(material.shear_yield_strength(), tau.value));

    if bending_fos.is_unbounded() {
        warn!("Bending moment is zero everywhere; bending factor of safety is unbounded");
    }
    if max_shear_stress.is_none() {
        warn!("Section width is zero; shear stress is undefined");
    }
    debug!(
        "max |σ| = {:.4e} Pa (FOS {}), max |τ| = {:?}",
        max_bending_stress.value.abs(),
        bending_fos,
        max_shear_stress.map(|t| t.value.abs())
    );

    Ok(StressResults {
        bending_stress: bending,
        max_bending_stress,
        max_shear_stress,
        bending_fos,
        shear_fos,
    })
}

//! # Shear Force and Bending Moment Diagrams
//!
//! Evaluates V(x) and M(x) on a uniform grid of `divisions + 1` stations by
//! superposition: every reaction and every load adds its contribution at the
//! stations past its point of application.
//!
//! ## Sign Convention
//!
//! - Shear: resultant of the vertical forces left of the cut, positive upward
//! - Moment: sagging positive, `M(x) = Σ F·(x − x_F) − Σ M_ccw` over the
//!   actions left of the cut
//!
//! A concentrated action at `p` counts only at stations with `x > p`, so each
//! diagram reports the value immediately left of a jump. The cantilever's
//! fixed-end reactions act at every station including `x = 0`, which gives
//! `M(0) = −Ma` and `M(L) = 0`. A point load or couple applied exactly at the
//! wall is counted at `x = 0` as well (`x >= 0`), so the wall absorbs it and
//! the fixed-end station carries no spurious jump.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::beam::BeamConfig;
//! use beam_core::calculations::internal_forces::solve_internal_forces;
//! use beam_core::calculations::reactions::solve_reactions;
//! use beam_core::loads::Load;
//!
//! let beam = BeamConfig::simple_span(10.0);
//! let loads = vec![Load::uniform(0.0, 10.0, -100.0)];
//! let reactions = solve_reactions(&beam, &loads).unwrap();
//! let field = solve_internal_forces(&beam, &loads, &reactions, 1000).unwrap();
//!
//! // wL²/8 at midspan
//! let (_, m_mid) = field.sample(500);
//! assert!((m_mid - 1250.0).abs() < 1e-6);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::calculations::beam::{BeamConfig, BeamType};
use crate::calculations::reactions::Reactions;
use crate::errors::{CalcError, CalcResult};
use crate::loads::{validate_loads, CutContribution, Load};

/// Default number of grid divisions (10 001 stations)
pub const DEFAULT_DIVISIONS: usize = 10_000;

/// Shear and moment sampled on a uniform grid over `[0, L]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscretizedField {
    /// Station positions (m), `x[i] = i·L/N`
    pub x: Vec<f64>,
    /// Shear force at each station (N)
    pub shear: Vec<f64>,
    /// Bending moment at each station (N·m), sagging positive
    pub moment: Vec<f64>,
}

/// Extreme value of a sampled diagram and where it occurs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extreme {
    /// Signed value at the extreme station
    pub value: f64,
    /// Station position (m)
    pub position: f64,
}

impl DiscretizedField {
    /// Number of stations
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Grid spacing (m)
    pub fn step(&self) -> f64 {
        match self.x.len() {
            0 | 1 => 0.0,
            n => self.x[n - 1] / (n - 1) as f64,
        }
    }

    /// `(shear, moment)` at station `i`
    pub fn sample(&self, i: usize) -> (f64, f64) {
        (self.shear[i], self.moment[i])
    }

    /// Largest |V| with its signed value and position
    pub fn max_abs_shear(&self) -> Extreme {
        extreme_by(&self.x, &self.shear, |v| v.abs())
    }

    /// Largest |M| with its signed value and position
    pub fn max_abs_moment(&self) -> Extreme {
        extreme_by(&self.x, &self.moment, |m| m.abs())
    }

    /// Most positive (sagging) moment
    pub fn max_sagging_moment(&self) -> Extreme {
        extreme_by(&self.x, &self.moment, |m| m)
    }

    /// Most negative (hogging) moment
    pub fn max_hogging_moment(&self) -> Extreme {
        extreme_by(&self.x, &self.moment, |m| -m)
    }
}

/// Station with the largest `key(value)`; the first one wins on ties.
pub(crate) fn extreme_by(x: &[f64], values: &[f64], key: impl Fn(f64) -> f64) -> Extreme {
    let mut best = Extreme {
        value: 0.0,
        position: 0.0,
    };
    let mut best_key = f64::NEG_INFINITY;
    for (&xi, &vi) in x.iter().zip(values) {
        let k = key(vi);
        if k > best_key {
            best_key = k;
            best = Extreme {
                value: vi,
                position: xi,
            };
        }
    }
    best
}

/// Uniform station grid over `[0, length]` with `divisions + 1` samples.
///
/// The last station is exactly `length`.
pub fn station_grid(length: f64, divisions: usize) -> CalcResult<Vec<f64>> {
    if divisions == 0 {
        return Err(CalcError::invalid_input(
            "divisions",
            "0",
            "At least one grid division is required",
        ));
    }
    let step = length / divisions as f64;
    Ok((0..=divisions)
        .map(|i| if i == divisions { length } else { i as f64 * step })
        .collect())
}

/// Evaluate shear and moment diagrams for `beam` under `loads`.
///
/// `reactions` must come from [`solve_reactions`](super::reactions::solve_reactions)
/// for the same beam and loads.
pub fn solve_internal_forces(
    beam: &BeamConfig,
    loads: &[Load],
    reactions: &Reactions,
    divisions: usize,
) -> CalcResult<DiscretizedField> {
    beam.validate()?;
    validate_loads(loads, beam.length)?;

    let x = station_grid(beam.length, divisions)?;
    let mut shear = vec![0.0; x.len()];
    let mut moment = vec![0.0; x.len()];

    match (beam.beam_type, *reactions) {
        (BeamType::Simple { pin, roller }, Reactions::Simple { va, vb, .. }) => {
            superpose(&x, &mut shear, &mut moment, |x| support_force(va, pin, x));
            superpose(&x, &mut shear, &mut moment, |x| support_force(vb, roller, x));
        }
        (BeamType::Cantilever, Reactions::Cantilever { va, ma, .. }) => {
            // Fixed-end reactions act from x = 0 onward
            superpose(&x, &mut shear, &mut moment, |x| CutContribution {
                shear: va,
                moment: va * x - ma,
            });
        }
        _ => {
            return Err(CalcError::invalid_input(
                "reactions",
                format!("{:?}", reactions),
                format!("Reactions do not match a {} beam", beam.beam_type),
            ));
        }
    }

    for load in loads {
        superpose(&x, &mut shear, &mut moment, |x| load.cut_contribution(x));
    }

    if beam.is_cantilever() {
        // Actions at the wall act together with the fixed-end reactions
        for load in loads {
            let c = load.fixed_end_contribution();
            shear[0] += c.shear;
            moment[0] += c.moment;
        }
    }

    let field = DiscretizedField { x, shear, moment };
    debug!(
        "Evaluated {} stations: max |V| = {:.3} N, max |M| = {:.3} N·m",
        field.len(),
        field.max_abs_shear().value.abs(),
        field.max_abs_moment().value.abs()
    );

    Ok(field)
}

/// Add one action's contribution at every station.
fn superpose(
    x: &[f64],
    shear: &mut [f64],
    moment: &mut [f64],
    contribution: impl Fn(f64) -> CutContribution,
) {
    for ((&xi, v), m) in x.iter().zip(shear.iter_mut()).zip(moment.iter_mut()) {
        let c = contribution(xi);
        *v += c.shear;
        *m += c.moment;
    }
}

fn support_force(force: f64, position: f64, x: f64) -> CutContribution {
    if x > position {
        CutContribution {
            shear: force,
            moment: force * (x - position),
        }
    } else {
        CutContribution::ZERO
    }
}

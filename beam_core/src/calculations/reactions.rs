//! # Support Reactions
//!
//! Closed-form static equilibrium for the unknowns a determinate beam leaves
//! open. One pass over the load list, no iteration.
//!
//! ## Formulas
//!
//! With upward forces and counter-clockwise moments positive:
//!
//! - **Simple** (pin A, roller B):
//!   `Vb = −(Σ F·(x − A) + Σ M) / (B − A)`, `Va = −ΣF − Vb`, `Ha = −ΣFx`
//! - **Cantilever** (fixed at 0):
//!   `Va = −ΣF`, `Ha = −ΣFx`, `Ma = −Σ F·x − Σ M`
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::beam::BeamConfig;
//! use beam_core::calculations::reactions::{solve_reactions, Reactions};
//! use beam_core::loads::Load;
//!
//! // 10 N downward at the tip of a 3 m cantilever
//! let beam = BeamConfig::cantilever(3.0);
//! let reactions = solve_reactions(&beam, &[Load::point(3.0, 0.0, -10.0)]).unwrap();
//!
//! match reactions {
//!     Reactions::Cantilever { va, ma, .. } => {
//!         assert!((va - 10.0).abs() < 1e-9);
//!         assert!((ma - 30.0).abs() < 1e-9);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::calculations::beam::{BeamConfig, BeamType};
use crate::errors::CalcResult;
use crate::loads::{validate_loads, Load};

/// Support reactions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Reactions {
    /// Pin-roller reactions
    Simple {
        /// Vertical reaction at the pin (N), positive upward
        va: f64,
        /// Horizontal reaction at the pin (N), positive to the right
        ha: f64,
        /// Vertical reaction at the roller (N), positive upward
        vb: f64,
    },
    /// Fixed-end reactions
    Cantilever {
        /// Vertical reaction (N), positive upward
        va: f64,
        /// Horizontal reaction (N), positive to the right
        ha: f64,
        /// Reaction moment (N·m), positive counter-clockwise
        ma: f64,
    },
}

/// Net force and moment left over after adding reactions to the loads.
/// All three are zero (to rounding) for a correct solution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumResiduals {
    /// Σ vertical forces (N)
    pub force_y: f64,
    /// Σ horizontal forces (N)
    pub force_x: f64,
    /// Σ moments about x = 0 (N·m), counter-clockwise positive
    pub moment: f64,
}

impl EquilibriumResiduals {
    /// True when every residual is within `tolerance` of zero, relative to
    /// `scale` (typically the largest applied force or moment).
    pub fn is_balanced(&self, tolerance: f64, scale: f64) -> bool {
        let limit = tolerance * scale.max(1.0);
        self.force_y.abs() <= limit && self.force_x.abs() <= limit && self.moment.abs() <= limit
    }
}

impl Reactions {
    /// Total vertical reaction (N)
    pub fn vertical_total(&self) -> f64 {
        match *self {
            Reactions::Simple { va, vb, .. } => va + vb,
            Reactions::Cantilever { va, .. } => va,
        }
    }

    /// Horizontal reaction (N)
    pub fn horizontal(&self) -> f64 {
        match *self {
            Reactions::Simple { ha, .. } | Reactions::Cantilever { ha, .. } => ha,
        }
    }

    /// Sum the loads and these reactions as a free body.
    pub fn residuals(&self, beam: &BeamConfig, loads: &[Load]) -> EquilibriumResiduals {
        let mut force_y: f64 = loads.iter().map(Load::vertical_force).sum();
        let mut force_x: f64 = loads.iter().map(Load::horizontal_force).sum();
        let mut moment: f64 = loads.iter().map(|l| l.moment_about(0.0)).sum();

        force_x += self.horizontal();
        match (*self, beam.beam_type) {
            (Reactions::Simple { va, vb, .. }, BeamType::Simple { pin, roller }) => {
                force_y += va + vb;
                moment += va * pin + vb * roller;
            }
            (Reactions::Cantilever { va, ma, .. }, _) => {
                force_y += va;
                moment += ma;
            }
            (Reactions::Simple { va, vb, .. }, BeamType::Cantilever) => {
                // Mismatched pairing: report the force imbalance only
                force_y += va + vb;
            }
        }

        EquilibriumResiduals {
            force_y,
            force_x,
            moment,
        }
    }
}

/// Solve the support reactions for `beam` under `loads`.
///
/// Validates the beam and every load first; an empty load list is valid and
/// yields zero reactions.
pub fn solve_reactions(beam: &BeamConfig, loads: &[Load]) -> CalcResult<Reactions> {
    beam.validate()?;
    validate_loads(loads, beam.length)?;

    let force_x: f64 = loads.iter().map(Load::horizontal_force).sum();
    let force_y: f64 = loads.iter().map(Load::vertical_force).sum();

    let reactions = match beam.beam_type {
        BeamType::Simple { pin, roller } => {
            let moment_about_pin: f64 = loads
                .iter()
                .map(|load| {
                    let m = load.moment_about(pin);
                    trace!("{} contributes {:.6} N·m about A", load.kind(), m);
                    m
                })
                .sum();
            let vb = -moment_about_pin / (roller - pin);
            Reactions::Simple {
                va: -force_y - vb,
                ha: -force_x,
                vb,
            }
        }
        BeamType::Cantilever => {
            let moment_about_root: f64 = loads.iter().map(|load| load.moment_about(0.0)).sum();
            Reactions::Cantilever {
                va: -force_y,
                ha: -force_x,
                ma: -moment_about_root,
            }
        }
    };

    debug!(
        "Solved {} reactions for {} loads: {:?}",
        beam.beam_type,
        loads.len(),
        reactions
    );

    Ok(reactions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b.abs() < 1e-10 {
            a.abs() < tol
        } else {
            ((a - b) / b).abs() < tol
        }
    }

    fn mixed_loads() -> Vec<Load> {
        vec![
            Load::point(0.5, 3.0, -1200.0),
            Load::moment(2.0, 450.0),
            Load::uniform(1.0, 4.0, -800.0),
            Load::triangular(2.5, 6.0, 0.0, -1500.0),
            Load::triangular(0.0, 3.0, -600.0, -200.0),
        ]
    }

    #[test]
    fn test_scenario_simple_udl_and_moment() {
        // 6.4 m beam, A = 1.2, B = 5.2, UDL -2 kN/m over AB, -8 kN·m at 3.2 m
        let beam = BeamConfig::simple(6.4, 1.2, 5.2);
        let loads = vec![Load::uniform(1.2, 5.2, -2000.0), Load::moment(3.2, -8000.0)];

        let reactions = solve_reactions(&beam, &loads).unwrap();

        // About A: Vb·4 + (-8000)(2) + (-8000) = 0 -> Vb = 6000, Va = 8000 - 6000
        match reactions {
            Reactions::Simple { va, ha, vb } => {
                assert!(approx_eq(vb, 6000.0, 1e-9));
                assert!(approx_eq(va, 2000.0, 1e-9));
                assert_eq!(ha, 0.0);
            }
            other => panic!("expected simple reactions, got {:?}", other),
        }
    }

    #[test]
    fn test_scenario_cantilever_tip_load() {
        let beam = BeamConfig::cantilever(3.0);
        let reactions = solve_reactions(&beam, &[Load::point(3.0, 0.0, -10.0)]).unwrap();

        match reactions {
            Reactions::Cantilever { va, ha, ma } => {
                assert!(approx_eq(va, 10.0, 1e-12));
                assert_eq!(ha, 0.0);
                assert!(approx_eq(ma, 30.0, 1e-12));
            }
            other => panic!("expected cantilever reactions, got {:?}", other),
        }
    }

    #[test]
    fn test_midspan_point_load_splits_evenly() {
        let beam = BeamConfig::simple_span(10.0);
        let reactions = solve_reactions(&beam, &[Load::point(5.0, 0.0, -1000.0)]).unwrap();
        match reactions {
            Reactions::Simple { va, vb, .. } => {
                assert!(approx_eq(va, 500.0, 1e-12));
                assert!(approx_eq(vb, 500.0, 1e-12));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_falling_triangle_on_simple_span() {
        // F = -20 N at 4/3 m on a 4 m span: Vb = 20·(4/3)/4, Va = 20 - Vb
        let beam = BeamConfig::simple_span(4.0);
        let reactions = solve_reactions(&beam, &[Load::triangular(0.0, 4.0, -10.0, 0.0)]).unwrap();
        match reactions {
            Reactions::Simple { va, vb, .. } => {
                assert!(approx_eq(vb, 20.0 / 3.0, 1e-12));
                assert!(approx_eq(va, 40.0 / 3.0, 1e-12));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_horizontal_reaction_balances_axial_components() {
        let beam = BeamConfig::simple(6.0, 1.0, 5.0);
        let loads = vec![Load::point(2.0, 250.0, 0.0), Load::point(4.0, -100.0, -50.0)];
        let reactions = solve_reactions(&beam, &loads).unwrap();
        assert!(approx_eq(reactions.horizontal(), -150.0, 1e-12));

        let cantilever = solve_reactions(&BeamConfig::cantilever(6.0), &loads).unwrap();
        assert!(approx_eq(cantilever.horizontal(), -150.0, 1e-12));
    }

    #[test]
    fn test_equilibrium_simple_with_overhangs() {
        let beam = BeamConfig::simple(6.0, 1.5, 4.5);
        let loads = mixed_loads();
        let reactions = solve_reactions(&beam, &loads).unwrap();

        let applied: f64 = loads.iter().map(Load::vertical_force).sum();
        assert!(approx_eq(reactions.vertical_total() + applied, 0.0, 1e-6));

        let residuals = reactions.residuals(&beam, &loads);
        assert!(residuals.is_balanced(1e-9, 10_000.0), "{:?}", residuals);
    }

    #[test]
    fn test_equilibrium_cantilever() {
        let beam = BeamConfig::cantilever(6.0);
        let loads = mixed_loads();
        let reactions = solve_reactions(&beam, &loads).unwrap();

        let residuals = reactions.residuals(&beam, &loads);
        assert!(residuals.is_balanced(1e-9, 10_000.0), "{:?}", residuals);
    }

    #[test]
    fn test_moment_equilibrium_about_any_point() {
        let beam = BeamConfig::simple(6.0, 0.5, 5.0);
        let loads = mixed_loads();
        let (va, vb) = match solve_reactions(&beam, &loads).unwrap() {
            Reactions::Simple { va, vb, .. } => (va, vb),
            _ => unreachable!(),
        };

        for point in [0.0, 0.5, 2.7, 6.0] {
            let loads_moment: f64 = loads.iter().map(|l| l.moment_about(point)).sum();
            let total = loads_moment + va * (0.5 - point) + vb * (5.0 - point);
            assert!(total.abs() < 1e-6, "moment about {} = {}", point, total);
        }
    }

    #[test]
    fn test_empty_loads_give_zero_reactions() {
        let simple = solve_reactions(&BeamConfig::simple_span(5.0), &[]).unwrap();
        assert_eq!(
            simple,
            Reactions::Simple {
                va: 0.0,
                ha: 0.0,
                vb: 0.0
            }
        );
        let cantilever = solve_reactions(&BeamConfig::cantilever(5.0), &[]).unwrap();
        assert_eq!(cantilever.vertical_total(), 0.0);
    }

    #[test]
    fn test_configuration_errors_are_surfaced() {
        assert!(solve_reactions(&BeamConfig::simple(6.0, 4.0, 4.0), &[]).is_err());
        assert!(solve_reactions(&BeamConfig::cantilever(-1.0), &[]).is_err());

        let beam = BeamConfig::simple_span(6.0);
        assert!(solve_reactions(&beam, &[Load::uniform(2.0, 2.0, -1.0)]).is_err());
        assert!(solve_reactions(&beam, &[Load::point(6.5, 0.0, -1.0)]).is_err());
    }

    #[test]
    fn test_serialization() {
        let reactions = Reactions::Cantilever {
            va: 10.0,
            ha: 0.0,
            ma: 30.0,
        };
        let json = serde_json::to_string(&reactions).unwrap();
        assert!(json.contains("\"type\":\"Cantilever\""));
        let parsed: Reactions = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, reactions);
    }
}

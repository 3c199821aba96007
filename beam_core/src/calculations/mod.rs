//! # Beam Calculations
//!
//! The solver stages for a statically determinate beam. Each stage is a pure
//! function of its inputs plus the output of the stage before it:
//!
//! - [`beam`] - Beam length and support layout
//! - [`reactions`] - Support reactions from static equilibrium
//! - [`internal_forces`] - Shear force and bending moment diagrams
//! - [`deflection`] - Slope and deflection by double integration
//! - [`stress`] - Bending/shear stress and factors of safety
//! - [`analysis`] - Runs the stages in order for one beam
//!
//! All records are JSON-serializable and every entry point returns
//! [`CalcResult`](crate::errors::CalcResult).

pub mod analysis;
pub mod beam;
pub mod deflection;
pub mod internal_forces;
pub mod reactions;
pub mod stress;

// Re-export commonly used types
pub use analysis::{AnalysisResults, BeamAnalysis, SolverSettings};
pub use beam::{BeamConfig, BeamType};
pub use deflection::{solve_deflection, DeflectionAnchor, DeflectionField};
pub use internal_forces::{solve_internal_forces, station_grid, DiscretizedField, Extreme, DEFAULT_DIVISIONS};
pub use reactions::{solve_reactions, EquilibriumResiduals, Reactions};
pub use stress::{solve_stress, FactorOfSafety, StressResults};

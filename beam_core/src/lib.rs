//! # beam_core - Statically Determinate Beam Solver
//!
//! `beam_core` computes support reactions, shear force and bending moment
//! diagrams, slope and deflection, and bending/shear stresses for simply
//! supported (pin + roller, overhangs allowed) and cantilever beams under
//! point loads, point moments, uniform and linearly varying loads.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **SI throughout**: m, N, N·m, N/m, Pa
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::calculations::{BeamAnalysis, BeamConfig, Reactions};
//! use beam_core::loads::Load;
//!
//! // 6.4 m beam, pin at 1.2 m, roller at 5.2 m
//! let results = BeamAnalysis::new(BeamConfig::simple(6.4, 1.2, 5.2))
//!     .with_load(Load::uniform(1.2, 5.2, -2000.0))
//!     .with_load(Load::moment(3.2, -8000.0))
//!     .analyze()
//!     .unwrap();
//!
//! if let Reactions::Simple { va, vb, .. } = results.reactions {
//!     assert!((va - 2000.0).abs() < 1e-6);
//!     assert!((vb - 6000.0).abs() < 1e-6);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Reactions, diagrams, deflection, stress, analysis pipeline
//! - [`loads`] - Point loads, point moments, UDLs and linearly varying loads
//! - [`sections`] - Cross-section shapes and their properties
//! - [`materials`] - Material properties and the material catalogue
//! - [`project`] - Project container, metadata, and settings
//! - [`file_io`] - Project files with atomic saves
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod materials;
pub mod project;
pub mod sections;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project};
pub use project::{Project, ProjectMetadata, SCHEMA_VERSION};

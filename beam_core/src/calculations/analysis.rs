//! # Beam Analysis Pipeline
//!
//! Runs the solvers in order for one beam:
//!
//! reactions → shear/moment field → (deflection, stress)
//!
//! [`BeamAnalysis::analyze`] stops after the force field; use
//! [`BeamAnalysis::analyze_full`] when a section and material are known.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::analysis::BeamAnalysis;
//! use beam_core::calculations::beam::BeamConfig;
//! use beam_core::loads::Load;
//!
//! // 10 m simple span with a 1 kN/m downward UDL
//! let results = BeamAnalysis::new(BeamConfig::simple_span(10.0))
//!     .with_load(Load::uniform(0.0, 10.0, -1000.0))
//!     .analyze()
//!     .unwrap();
//!
//! // wL²/8 = 12.5 kN·m at midspan
//! assert!((results.max_sagging_moment.value - 12_500.0).abs() < 1e-3);
//! assert!((results.max_sagging_moment.position - 5.0).abs() < 1e-3);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::calculations::beam::BeamConfig;
use crate::calculations::deflection::{solve_deflection, DeflectionAnchor, DeflectionField};
use crate::calculations::internal_forces::{
    solve_internal_forces, DiscretizedField, Extreme, DEFAULT_DIVISIONS,
};
use crate::calculations::reactions::{solve_reactions, EquilibriumResiduals, Reactions};
use crate::calculations::stress::{solve_stress, StressResults};
use crate::errors::{CalcError, CalcResult};
use crate::loads::Load;
use crate::materials::Material;
use crate::sections::SectionProperties;

/// Relative tolerance for the equilibrium self-check
pub const EQUILIBRIUM_TOLERANCE: f64 = 1e-6;

/// Numerical settings shared by every solver stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Grid divisions N (N + 1 stations)
    pub divisions: usize,
    /// Zero-deflection points for simply supported beams
    pub deflection_anchor: DeflectionAnchor,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            divisions: DEFAULT_DIVISIONS,
            deflection_anchor: DeflectionAnchor::default(),
        }
    }
}

impl SolverSettings {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.divisions == 0 {
            return Err(CalcError::invalid_input(
                "settings.divisions",
                "0",
                "At least one grid division is required",
            ));
        }
        Ok(())
    }
}

/// Everything computed for one beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub beam: BeamConfig,
    pub reactions: Reactions,
    /// Loads plus reactions summed as a free body
    pub residuals: EquilibriumResiduals,
    pub field: DiscretizedField,
    /// Largest |V|
    pub max_shear: Extreme,
    /// Largest |M|
    pub max_moment: Extreme,
    /// Most positive M
    pub max_sagging_moment: Extreme,
    /// Most negative M
    pub max_hogging_moment: Extreme,
    /// Present after [`BeamAnalysis::analyze_full`]
    pub deflection: Option<DeflectionField>,
    /// Largest |y|, present with `deflection`
    pub max_deflection: Option<Extreme>,
    /// Present after [`BeamAnalysis::analyze_full`]
    pub stress: Option<StressResults>,
}

/// One beam with its loads, ready to solve
#[derive(Debug, Clone, PartialEq)]
pub struct BeamAnalysis {
    pub beam: BeamConfig,
    pub loads: Vec<Load>,
    pub settings: SolverSettings,
}

impl BeamAnalysis {
    /// Create an unloaded analysis with default settings
    pub fn new(beam: BeamConfig) -> Self {
        BeamAnalysis {
            beam,
            loads: Vec::new(),
            settings: SolverSettings::default(),
        }
    }

    /// Add a load
    pub fn with_load(mut self, load: Load) -> Self {
        self.loads.push(load);
        self
    }

    /// Add several loads
    pub fn with_loads(mut self, loads: impl IntoIterator<Item = Load>) -> Self {
        self.loads.extend(loads);
        self
    }

    pub fn with_settings(mut self, settings: SolverSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Add a load to an existing analysis
    pub fn add_load(&mut self, load: Load) {
        self.loads.push(load);
    }

    /// Reactions and shear/moment diagrams
    pub fn analyze(&self) -> CalcResult<AnalysisResults> {
        self.settings.validate()?;
        debug!(
            "Analyzing {} beam, L = {} m, {} loads, N = {}",
            self.beam.beam_type,
            self.beam.length,
            self.loads.len(),
            self.settings.divisions
        );

        let reactions = solve_reactions(&self.beam, &self.loads)?;
        let residuals = reactions.residuals(&self.beam, &self.loads);
        let scale: f64 = self
            .loads
            .iter()
            .map(|l| l.vertical_force().abs() + l.horizontal_force().abs() + l.moment_about(0.0).abs())
            .sum();
        if !residuals.is_balanced(EQUILIBRIUM_TOLERANCE, scale) {
            warn!("Equilibrium residuals above tolerance: {:?}", residuals);
        }

        let field = solve_internal_forces(&self.beam, &self.loads, &reactions, self.settings.divisions)?;

        Ok(AnalysisResults {
            beam: self.beam,
            reactions,
            residuals,
            max_shear: field.max_abs_shear(),
            max_moment: field.max_abs_moment(),
            max_sagging_moment: field.max_sagging_moment(),
            max_hogging_moment: field.max_hogging_moment(),
            field,
            deflection: None,
            max_deflection: None,
            stress: None,
        })
    }

    /// Reactions, diagrams, deflection and stresses
    pub fn analyze_full(
        &self,
        section: &SectionProperties,
        material: &Material,
    ) -> CalcResult<AnalysisResults> {
        material.validate()?;
        let mut results = self.analyze()?;

        let flexural_rigidity = material.elastic_modulus * section.ix;
        let deflection = solve_deflection(
            &self.beam,
            &results.field,
            flexural_rigidity,
            self.settings.deflection_anchor,
        )?;
        let stress = solve_stress(&results.field, section, material)?;

        results.max_deflection = Some(deflection.max_abs_deflection());
        results.deflection = Some(deflection);
        results.stress = Some(stress);
        Ok(results)
    }
}

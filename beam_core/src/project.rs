//! # Project Data Structures
//!
//! The `Project` struct is the root container for one beam problem: the
//! beam, its loads, the section and material, and the solver settings.
//! Projects serialize to human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: SolverSettings (grid divisions, deflection anchor)
//! ├── beam: BeamConfig (length, supports)
//! ├── loads: Vec<Load>
//! ├── section: SectionProfile
//! └── material: Material
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::beam::BeamConfig;
//! use beam_core::loads::Load;
//! use beam_core::materials::MaterialLibrary;
//! use beam_core::project::Project;
//! use beam_core::sections::SectionProfile;
//!
//! let steel = MaterialLibrary::builtin().lookup("Structural Steel (ASTM A36)").unwrap().clone();
//! let mut project = Project::new(
//!     "Jane Engineer",
//!     "25-042",
//!     "ACME Corp",
//!     BeamConfig::simple_span(6.0),
//!     SectionProfile::Rectangle { width: 0.1, height: 0.3 },
//!     steel,
//! );
//! project.add_load(Load::uniform(0.0, 6.0, -5000.0));
//!
//! let results = project.analyze().unwrap();
//! assert!(results.stress.unwrap().bending_fos.meets(1.0));
//! ```

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::calculations::analysis::{AnalysisResults, BeamAnalysis, SolverSettings};
use crate::calculations::beam::BeamConfig;
use crate::errors::CalcResult;
use crate::loads::{validate_loads, Load};
use crate::materials::Material;
use crate::sections::SectionProfile;

/// Current schema version for project files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Solver settings
    #[serde(default)]
    pub settings: SolverSettings,

    pub beam: BeamConfig,

    #[serde(default)]
    pub loads: Vec<Load>,

    pub section: SectionProfile,

    pub material: Material,
}

impl Project {
    /// Create a new project with no loads.
    pub fn new(
        engineer: impl Into<String>,
        job_id: impl Into<String>,
        client: impl Into<String>,
        beam: BeamConfig,
        section: SectionProfile,
        material: Material,
    ) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: SolverSettings::default(),
            beam,
            loads: Vec::new(),
            section,
            material,
        }
    }

    /// Add a load and mark the project modified.
    pub fn add_load(&mut self, load: Load) {
        self.loads.push(load);
        self.touch();
    }

    /// Remove a load by index.
    ///
    /// Returns the removed load if the index was valid.
    pub fn remove_load(&mut self, index: usize) -> Option<Load> {
        if index < self.loads.len() {
            let load = self.loads.remove(index);
            self.touch();
            Some(load)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Check the beam, loads, section, material and settings together.
    pub fn validate(&self) -> CalcResult<()> {
        self.settings.validate()?;
        self.beam.validate()?;
        validate_loads(&self.loads, self.beam.length)?;
        self.section.validate()?;
        self.material.validate()
    }

    /// The beam and loads as a solver pipeline
    pub fn analysis(&self) -> BeamAnalysis {
        BeamAnalysis::new(self.beam)
            .with_loads(self.loads.iter().cloned())
            .with_settings(self.settings)
    }

    /// Run the full analysis with this project's section and material.
    pub fn analyze(&self) -> CalcResult<AnalysisResults> {
        self.validate()?;
        let section = self.section.properties()?;
        debug!(
            "Project {}: {} section, Ix = {:.4e} m⁴, material {}",
            self.meta.job_id, self.section, section.ix, self.material
        );
        self.analysis().analyze_full(&section, &self.material)
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

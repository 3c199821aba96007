//! # Materials
//!
//! Isotropic material properties in SI units, plus a searchable
//! [`MaterialLibrary`] that reads the tabular JSON catalogue format.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials::{Material, MaterialLibrary};
//!
//! let steel = MaterialLibrary::builtin().lookup("Structural Steel (ASTM A36)").unwrap();
//! assert_eq!(steel.yield_strength, 250.0e6);
//! assert_eq!(steel.shear_yield_strength(), 0.55 * 250.0e6);
//! ```

pub mod library;

pub use library::{MaterialLibrary, MaterialProperty, MaterialRecord};

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, CalcError, CalcResult};

/// Ratio of shear yield to tensile yield strength
pub const SHEAR_YIELD_RATIO: f64 = 0.55;

/// Isotropic structural material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Catalogue name
    pub name: String,
    /// Density (kg/m³)
    pub density: f64,
    /// Tensile yield strength (Pa)
    pub yield_strength: f64,
    /// Ultimate tensile strength (Pa)
    pub ultimate_strength: f64,
    /// Young's modulus (Pa)
    pub elastic_modulus: f64,
    /// Poisson's ratio
    pub poisson_ratio: f64,
}

impl Material {
    /// Shear yield strength `0.55·fy` (Pa)
    pub fn shear_yield_strength(&self) -> f64 {
        SHEAR_YIELD_RATIO * self.yield_strength
    }

    /// Shear modulus `E / (2(1 + ν))` (Pa)
    pub fn shear_modulus(&self) -> f64 {
        self.elastic_modulus / (2.0 * (1.0 + self.poisson_ratio))
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("material.density", self.density),
            ("material.yield_strength", self.yield_strength),
            ("material.ultimate_strength", self.ultimate_strength),
            ("material.elastic_modulus", self.elastic_modulus),
            ("material.poisson_ratio", self.poisson_ratio),
        ] {
            require_finite(field, value)?;
        }

        if self.yield_strength <= 0.0 {
            return Err(CalcError::invalid_input(
                "material.yield_strength",
                self.yield_strength.to_string(),
                "Yield strength must be positive",
            ));
        }
        if self.elastic_modulus <= 0.0 {
            return Err(CalcError::invalid_input(
                "material.elastic_modulus",
                self.elastic_modulus.to_string(),
                "Elastic modulus must be positive",
            ));
        }
        if !(-1.0..0.5).contains(&self.poisson_ratio) {
            return Err(CalcError::invalid_input(
                "material.poisson_ratio",
                self.poisson_ratio.to_string(),
                "Poisson's ratio must lie in [-1, 0.5)",
            ));
        }

        Ok(())
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

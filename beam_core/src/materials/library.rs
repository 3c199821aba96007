//! Material catalogue.
//!
//! Catalogue files are a JSON array of records in engineering units:
//!
//! ```json
//! [
//!   {
//!     "Material": "Aluminum 6061-T6",
//!     "Density": 2700,
//!     "Yield Strength": 276,
//!     "Ultimate Strength": 310,
//!     "Elastic Modulus": 68.9,
//!     "Poisson Ratio": 0.33
//!   }
//! ]
//! ```
//!
//! Density is kg/m³, strengths are MPa and the modulus is GPa. Records are
//! converted to SI [`Material`] values on load.

use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::Material;
use crate::errors::{CalcError, CalcResult};
use crate::units::{Gigapascals, Megapascals, Pascals};

/// One catalogue entry as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    #[serde(rename = "Material")]
    pub name: String,
    /// kg/m³
    #[serde(rename = "Density")]
    pub density: f64,
    /// MPa
    #[serde(rename = "Yield Strength")]
    pub yield_strength: f64,
    /// MPa
    #[serde(rename = "Ultimate Strength")]
    pub ultimate_strength: f64,
    /// GPa
    #[serde(rename = "Elastic Modulus")]
    pub elastic_modulus: f64,
    #[serde(rename = "Poisson Ratio")]
    pub poisson_ratio: f64,
}

impl From<MaterialRecord> for Material {
    fn from(record: MaterialRecord) -> Self {
        Material {
            name: record.name,
            density: record.density,
            yield_strength: Pascals::from(Megapascals(record.yield_strength)).value(),
            ultimate_strength: Pascals::from(Megapascals(record.ultimate_strength)).value(),
            elastic_modulus: Pascals::from(Gigapascals(record.elastic_modulus)).value(),
            poisson_ratio: record.poisson_ratio,
        }
    }
}

impl From<&Material> for MaterialRecord {
    fn from(material: &Material) -> Self {
        MaterialRecord {
            name: material.name.clone(),
            density: material.density,
            yield_strength: Megapascals::from(Pascals(material.yield_strength)).value(),
            ultimate_strength: Megapascals::from(Pascals(material.ultimate_strength)).value(),
            elastic_modulus: Gigapascals::from(Pascals(material.elastic_modulus)).value(),
            poisson_ratio: material.poisson_ratio,
        }
    }
}

/// Searchable material property (SI units)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialProperty {
    Density,
    YieldStrength,
    UltimateStrength,
    ElasticModulus,
    PoissonRatio,
}

impl MaterialProperty {
    pub fn value_of(&self, material: &Material) -> f64 {
        match self {
            MaterialProperty::Density => material.density,
            MaterialProperty::YieldStrength => material.yield_strength,
            MaterialProperty::UltimateStrength => material.ultimate_strength,
            MaterialProperty::ElasticModulus => material.elastic_modulus,
            MaterialProperty::PoissonRatio => material.poisson_ratio,
        }
    }
}

/// In-memory material catalogue
#[derive(Debug, Clone, Default)]
pub struct MaterialLibrary {
    materials: Vec<Material>,
}

static BUILTIN: Lazy<MaterialLibrary> = Lazy::new(|| {
    let records = [
        ("Structural Steel (ASTM A36)", 7850.0, 250.0, 400.0, 200.0, 0.26),
        ("Structural Steel (S355)", 7850.0, 355.0, 490.0, 210.0, 0.30),
        ("Stainless Steel 304", 8000.0, 215.0, 505.0, 193.0, 0.29),
        ("Aluminum 6061-T6", 2700.0, 276.0, 310.0, 68.9, 0.33),
        ("Titanium Ti-6Al-4V", 4430.0, 880.0, 950.0, 113.8, 0.342),
        ("Copper C11000", 8940.0, 69.0, 220.0, 115.0, 0.33),
    ];
    MaterialLibrary::from_records(records.iter().map(
        |&(name, density, fy, fu, e, nu)| MaterialRecord {
            name: name.to_string(),
            density,
            yield_strength: fy,
            ultimate_strength: fu,
            elastic_modulus: e,
            poisson_ratio: nu,
        },
    ))
});

impl MaterialLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Small catalogue of common structural metals
    pub fn builtin() -> &'static MaterialLibrary {
        &BUILTIN
    }

    pub fn from_records(records: impl IntoIterator<Item = MaterialRecord>) -> Self {
        MaterialLibrary {
            materials: records.into_iter().map(Material::from).collect(),
        }
    }

    /// Parse a JSON catalogue
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let records: Vec<MaterialRecord> = serde_json::from_str(json)
            .map_err(|e| CalcError::serialization(format!("Invalid material catalogue: {}", e)))?;
        Ok(Self::from_records(records))
    }

    /// Load a JSON catalogue from disk
    pub fn load_from_json(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            CalcError::file_error("read", path.display().to_string(), e.to_string())
        })?;
        let library = Self::from_json_str(&json)?;
        debug!("Loaded {} materials from {}", library.len(), path.display());
        Ok(library)
    }

    pub fn insert(&mut self, material: Material) {
        self.materials.push(material);
    }

    /// Look up a material by name
    ///
    /// Matching is case-insensitive.
    pub fn lookup(&self, name: &str) -> CalcResult<&Material> {
        self.materials
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CalcError::material_not_found(name))
    }

    /// Materials whose `property` lies in `[min, max]`
    pub fn search_by_property(&self, property: MaterialProperty, min: f64, max: f64) -> Vec<&Material> {
        self.materials
            .iter()
            .filter(|m| {
                let value = property.value_of(m);
                min <= value && value <= max
            })
            .collect()
    }

    /// All material names in catalogue order
    pub fn names(&self) -> Vec<&str> {
        self.materials.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

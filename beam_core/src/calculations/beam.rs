//! # Beam Configuration
//!
//! Geometry and support layout of a statically determinate beam.
//!
//! ## Supported Beam Types
//!
//! - **Simple**: pin at `A`, roller at `B`, `0 ≤ A < B ≤ L`. Overhangs on
//!   either side are allowed.
//! - **Cantilever**: fixed at `x = 0`, free at `x = L`.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::beam::BeamConfig;
//!
//! let beam = BeamConfig::simple(6.4, 1.2, 5.2);
//! assert!(beam.validate().is_ok());
//!
//! // Supports out of order are rejected, not swapped
//! assert!(BeamConfig::simple(6.4, 5.2, 1.2).validate().is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, CalcError, CalcResult};

/// Support arrangement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BeamType {
    /// Pin at `pin` (A), roller at `roller` (B)
    Simple {
        /// Pin position A (m)
        pin: f64,
        /// Roller position B (m)
        roller: f64,
    },
    /// Fixed at `x = 0`, free at the right end
    Cantilever,
}

impl BeamType {
    /// Get display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            BeamType::Simple { .. } => "Simply supported",
            BeamType::Cantilever => "Cantilever",
        }
    }
}

impl std::fmt::Display for BeamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Beam length and support layout.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": 6.4,
///   "beam_type": { "type": "Simple", "pin": 1.2, "roller": 5.2 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamConfig {
    /// Beam length (m)
    pub length: f64,
    /// Support arrangement
    pub beam_type: BeamType,
}

impl BeamConfig {
    /// Simply supported beam with pin at `pin` and roller at `roller`
    pub fn simple(length: f64, pin: f64, roller: f64) -> Self {
        BeamConfig {
            length,
            beam_type: BeamType::Simple { pin, roller },
        }
    }

    /// Simply supported beam with supports at both ends
    pub fn simple_span(length: f64) -> Self {
        BeamConfig::simple(length, 0.0, length)
    }

    /// Cantilever fixed at `x = 0`
    pub fn cantilever(length: f64) -> Self {
        BeamConfig {
            length,
            beam_type: BeamType::Cantilever,
        }
    }

    pub fn is_cantilever(&self) -> bool {
        matches!(self.beam_type, BeamType::Cantilever)
    }

    /// Positions where vertical displacement is restrained
    pub fn support_positions(&self) -> Vec<f64> {
        match self.beam_type {
            BeamType::Simple { pin, roller } => vec![pin, roller],
            BeamType::Cantilever => vec![0.0],
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("length", self.length)?;
        if self.length <= 0.0 {
            return Err(CalcError::invalid_input(
                "length",
                self.length.to_string(),
                "Beam length must be positive",
            ));
        }

        if let BeamType::Simple { pin, roller } = self.beam_type {
            for (field, value) in [("beam_type.pin", pin), ("beam_type.roller", roller)] {
                require_finite(field, value)?;
                if value < 0.0 || value > self.length {
                    return Err(CalcError::invalid_input(
                        field,
                        value.to_string(),
                        format!("Support must lie within the beam [0, {}]", self.length),
                    ));
                }
            }
            if roller <= pin {
                return Err(CalcError::invalid_input(
                    "beam_type.roller",
                    roller.to_string(),
                    format!("Roller (B) must be to the right of the pin (A = {})", pin),
                ));
            }
        }

        Ok(())
    }
}

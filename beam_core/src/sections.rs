//! # Cross-Section Properties
//!
//! Closed-form second moment of area `Ix`, extreme-fibre distance `c` and
//! representative width `b` for the common section shapes. The stress solver
//! only sees the resolved [`SectionProperties`]; the shape is chosen once when
//! the project is set up.
//!
//! All dimensions are in metres.
//!
//! ## Representative Width
//!
//! | Shape | `b` |
//! |-------|-----|
//! | Rectangle, Square | width |
//! | Circle, Hollow circle | outer diameter |
//! | Hollow square, Hollow rectangle | outer width |
//! | I-beam, T-beam | web thickness |
//!
//! ## Example
//!
//! ```rust
//! use beam_core::sections::SectionProfile;
//!
//! let section = SectionProfile::Rectangle { width: 0.1, height: 0.2 };
//! let props = section.properties().unwrap();
//! // bh³/12
//! assert!((props.ix - 0.1 * 0.2_f64.powi(3) / 12.0).abs() < 1e-15);
//! assert_eq!(props.c, 0.1);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, CalcError, CalcResult};

/// Number of fibre positions sampled over `[-c, c]`
pub const SECTION_SAMPLES: usize = 10_001;

/// Cross-section shape and dimensions (m)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SectionProfile {
    Rectangle {
        width: f64,
        height: f64,
    },
    Square {
        side: f64,
    },
    Circle {
        diameter: f64,
    },
    HollowCircle {
        outer_diameter: f64,
        inner_diameter: f64,
    },
    HollowSquare {
        outer_side: f64,
        inner_side: f64,
    },
    HollowRectangle {
        outer_width: f64,
        outer_height: f64,
        inner_width: f64,
        inner_height: f64,
    },
    /// Doubly symmetric I-beam
    IBeam {
        flange_width: f64,
        flange_thickness: f64,
        web_height: f64,
        web_thickness: f64,
    },
    /// Single flange on top of a web
    TBeam {
        flange_width: f64,
        flange_thickness: f64,
        web_height: f64,
        web_thickness: f64,
    },
}

/// Resolved geometric properties used by the stress solver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Second moment of area about the bending axis (m⁴)
    pub ix: f64,
    /// Distance from the neutral axis to the extreme fibre (m)
    pub c: f64,
    /// Representative width for shear stress (m)
    pub b: f64,
    /// Fibre positions evenly spaced over `[-c, c]` (m)
    pub y_samples: Vec<f64>,
}

impl SectionProperties {
    /// Properties given directly as scalars.
    pub fn new(ix: f64, c: f64, b: f64) -> CalcResult<Self> {
        require_finite("section.ix", ix)?;
        require_finite("section.c", c)?;
        require_finite("section.b", b)?;
        if ix <= 0.0 {
            return Err(CalcError::invalid_input(
                "section.ix",
                ix.to_string(),
                "Second moment of area must be positive",
            ));
        }
        if c <= 0.0 {
            return Err(CalcError::invalid_input(
                "section.c",
                c.to_string(),
                "Extreme fibre distance must be positive",
            ));
        }
        if b < 0.0 {
            return Err(CalcError::invalid_input(
                "section.b",
                b.to_string(),
                "Width cannot be negative",
            ));
        }

        Ok(SectionProperties {
            ix,
            c,
            b,
            y_samples: fibre_samples(c),
        })
    }

    /// Elastic section modulus `Ix / c` (m³)
    pub fn section_modulus(&self) -> f64 {
        self.ix / self.c
    }
}

fn fibre_samples(c: f64) -> Vec<f64> {
    let n = SECTION_SAMPLES - 1;
    let step = 2.0 * c / n as f64;
    (0..=n)
        .map(|i| if i == n { c } else { -c + i as f64 * step })
        .collect()
}

impl SectionProfile {
    /// Get display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionProfile::Rectangle { .. } => "Rectangle",
            SectionProfile::Square { .. } => "Square",
            SectionProfile::Circle { .. } => "Circle",
            SectionProfile::HollowCircle { .. } => "Hollow circle",
            SectionProfile::HollowSquare { .. } => "Hollow square",
            SectionProfile::HollowRectangle { .. } => "Hollow rectangle",
            SectionProfile::IBeam { .. } => "I-beam",
            SectionProfile::TBeam { .. } => "T-beam",
        }
    }

    /// Cross-sectional area (m²)
    pub fn area(&self) -> f64 {
        match *self {
            SectionProfile::Rectangle { width, height } => width * height,
            SectionProfile::Square { side } => side * side,
            SectionProfile::Circle { diameter } => PI * diameter * diameter / 4.0,
            SectionProfile::HollowCircle {
                outer_diameter,
                inner_diameter,
            } => PI * (outer_diameter.powi(2) - inner_diameter.powi(2)) / 4.0,
            SectionProfile::HollowSquare {
                outer_side,
                inner_side,
            } => outer_side.powi(2) - inner_side.powi(2),
            SectionProfile::HollowRectangle {
                outer_width,
                outer_height,
                inner_width,
                inner_height,
            } => outer_width * outer_height - inner_width * inner_height,
            SectionProfile::IBeam {
                flange_width,
                flange_thickness,
                web_height,
                web_thickness,
            } => 2.0 * flange_width * flange_thickness + web_height * web_thickness,
            SectionProfile::TBeam {
                flange_width,
                flange_thickness,
                web_height,
                web_thickness,
            } => flange_width * flange_thickness + web_height * web_thickness,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in self.dimensions() {
            require_finite(field, value)?;
            if value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Section dimension must be positive",
                ));
            }
        }

        let hollow = match *self {
            SectionProfile::HollowCircle {
                outer_diameter,
                inner_diameter,
            } => Some(("section.inner_diameter", inner_diameter, outer_diameter)),
            SectionProfile::HollowSquare {
                outer_side,
                inner_side,
            } => Some(("section.inner_side", inner_side, outer_side)),
            SectionProfile::HollowRectangle {
                outer_width,
                inner_width,
                ..
            } => Some(("section.inner_width", inner_width, outer_width)),
            _ => None,
        };
        if let Some((field, inner, outer)) = hollow {
            if inner >= outer {
                return Err(CalcError::invalid_input(
                    field,
                    inner.to_string(),
                    format!("Inner dimension must be smaller than the outer ({})", outer),
                ));
            }
        }
        if let SectionProfile::HollowRectangle {
            outer_height,
            inner_height,
            ..
        } = *self
        {
            if inner_height >= outer_height {
                return Err(CalcError::invalid_input(
                    "section.inner_height",
                    inner_height.to_string(),
                    format!("Inner dimension must be smaller than the outer ({})", outer_height),
                ));
            }
        }

        Ok(())
    }

    fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match *self {
            SectionProfile::Rectangle { width, height } => {
                vec![("section.width", width), ("section.height", height)]
            }
            SectionProfile::Square { side } => vec![("section.side", side)],
            SectionProfile::Circle { diameter } => vec![("section.diameter", diameter)],
            SectionProfile::HollowCircle {
                outer_diameter,
                inner_diameter,
            } => vec![
                ("section.outer_diameter", outer_diameter),
                ("section.inner_diameter", inner_diameter),
            ],
            SectionProfile::HollowSquare {
                outer_side,
                inner_side,
            } => vec![("section.outer_side", outer_side), ("section.inner_side", inner_side)],
            SectionProfile::HollowRectangle {
                outer_width,
                outer_height,
                inner_width,
                inner_height,
            } => vec![
                ("section.outer_width", outer_width),
                ("section.outer_height", outer_height),
                ("section.inner_width", inner_width),
                ("section.inner_height", inner_height),
            ],
            SectionProfile::IBeam {
                flange_width,
                flange_thickness,
                web_height,
                web_thickness,
            }
            | SectionProfile::TBeam {
                flange_width,
                flange_thickness,
                web_height,
                web_thickness,
            } => vec![
                ("section.flange_width", flange_width),
                ("section.flange_thickness", flange_thickness),
                ("section.web_height", web_height),
                ("section.web_thickness", web_thickness),
            ],
        }
    }

    /// Resolve `Ix`, `c`, `b` and the fibre samples.
    pub fn properties(&self) -> CalcResult<SectionProperties> {
        self.validate()?;

        let (ix, c, b) = match *self {
            SectionProfile::Rectangle { width, height } => {
                (width * height.powi(3) / 12.0, height / 2.0, width)
            }
            SectionProfile::Square { side } => (side.powi(4) / 12.0, side / 2.0, side),
            SectionProfile::Circle { diameter } => {
                let r = diameter / 2.0;
                (PI * r.powi(4) / 4.0, r, diameter)
            }
            SectionProfile::HollowCircle {
                outer_diameter,
                inner_diameter,
            } => {
                let (ro, ri) = (outer_diameter / 2.0, inner_diameter / 2.0);
                (PI * (ro.powi(4) - ri.powi(4)) / 4.0, ro, outer_diameter)
            }
            SectionProfile::HollowSquare {
                outer_side,
                inner_side,
            } => (
                (outer_side.powi(4) - inner_side.powi(4)) / 12.0,
                outer_side / 2.0,
                outer_side,
            ),
            SectionProfile::HollowRectangle {
                outer_width,
                outer_height,
                inner_width,
                inner_height,
            } => (
                (outer_width * outer_height.powi(3) - inner_width * inner_height.powi(3)) / 12.0,
                outer_height / 2.0,
                outer_width,
            ),
            SectionProfile::IBeam {
                flange_width,
                flange_thickness,
                web_height,
                web_thickness,
            } => {
                let c = flange_thickness + web_height / 2.0;
                // Flange centroid to neutral axis
                let d = c - flange_thickness / 2.0;
                let flange = flange_width * flange_thickness.powi(3) / 12.0
                    + flange_width * flange_thickness * d * d;
                let web = web_thickness * web_height.powi(3) / 12.0;
                (2.0 * flange + web, c, web_thickness)
            }
            SectionProfile::TBeam {
                flange_width,
                flange_thickness,
                web_height,
                web_thickness,
            } => {
                // Measured down from the top of the flange
                let a_flange = flange_width * flange_thickness;
                let a_web = web_thickness * web_height;
                let y_flange = flange_thickness / 2.0;
                let y_web = flange_thickness + web_height / 2.0;
                let y_bar = (a_flange * y_flange + a_web * y_web) / (a_flange + a_web);
                let c = y_bar.max(flange_thickness + web_height - y_bar);
                let ix = flange_width * flange_thickness.powi(3) / 12.0
                    + a_flange * (y_bar - y_flange).powi(2)
                    + web_thickness * web_height.powi(3) / 12.0
                    + a_web * (y_web - y_bar).powi(2);
                (ix, c, web_thickness)
            }
        };

        SectionProperties::new(ix, c, b)
    }
}

impl std::fmt::Display for SectionProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
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

    #[test]
    fn test_rectangle() {
        let props = SectionProfile::Rectangle {
            width: 0.1,
            height: 0.3,
        }
        .properties()
        .unwrap();
        assert!(approx_eq(props.ix, 0.1 * 0.027 / 12.0, 1e-12));
        assert!(approx_eq(props.c, 0.15, 1e-12));
        assert_eq!(props.b, 0.1);
        assert!(approx_eq(props.section_modulus(), 0.1 * 0.09 / 6.0, 1e-12));
    }

    #[test]
    fn test_square_matches_rectangle() {
        let square = SectionProfile::Square { side: 0.2 }.properties().unwrap();
        let rect = SectionProfile::Rectangle {
            width: 0.2,
            height: 0.2,
        }
        .properties()
        .unwrap();
        assert!(approx_eq(square.ix, rect.ix, 1e-12));
        assert_eq!(square.c, rect.c);
    }

    #[test]
    fn test_circles() {
        let solid = SectionProfile::Circle { diameter: 0.2 }.properties().unwrap();
        assert!(approx_eq(solid.ix, PI * 0.1f64.powi(4) / 4.0, 1e-12));
        assert_eq!(solid.b, 0.2);

        let hollow = SectionProfile::HollowCircle {
            outer_diameter: 0.2,
            inner_diameter: 0.1,
        }
        .properties()
        .unwrap();
        assert!(approx_eq(hollow.ix, PI * (0.1f64.powi(4) - 0.05f64.powi(4)) / 4.0, 1e-12));
        assert!(hollow.ix < solid.ix);
    }

    #[test]
    fn test_ibeam() {
        // bf = 0.2, tf = 0.02, hw = 0.3, tw = 0.01
        let props = SectionProfile::IBeam {
            flange_width: 0.2,
            flange_thickness: 0.02,
            web_height: 0.3,
            web_thickness: 0.01,
        }
        .properties()
        .unwrap();
        // Outer box minus the two voids beside the web
        let expected = (0.2 * 0.34f64.powi(3) - 0.19 * 0.3f64.powi(3)) / 12.0;
        assert!(approx_eq(props.ix, expected, 1e-9));
        assert!(approx_eq(props.c, 0.17, 1e-12));
        assert_eq!(props.b, 0.01);
    }

    #[test]
    fn test_tbeam_neutral_axis() {
        let props = SectionProfile::TBeam {
            flange_width: 0.2,
            flange_thickness: 0.02,
            web_height: 0.2,
            web_thickness: 0.02,
        }
        .properties()
        .unwrap();
        // Areas 0.004 each: ȳ = (0.004·0.01 + 0.004·0.12)/0.008 = 0.065 from top
        assert!(approx_eq(props.c, 0.22 - 0.065, 1e-12));
        assert_eq!(props.b, 0.02);
        assert!(props.ix > 0.0);
    }

    #[test]
    fn test_fibre_samples() {
        let props = SectionProfile::Rectangle {
            width: 0.1,
            height: 0.2,
        }
        .properties()
        .unwrap();
        assert_eq!(props.y_samples.len(), SECTION_SAMPLES);
        assert_eq!(props.y_samples[0], -0.1);
        assert_eq!(props.y_samples[SECTION_SAMPLES - 1], 0.1);
        assert!(props.y_samples[SECTION_SAMPLES / 2].abs() < 1e-15);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(SectionProfile::Rectangle {
            width: 0.0,
            height: 0.2
        }
        .properties()
        .is_err());
        assert!(SectionProfile::Circle { diameter: f64::NAN }.properties().is_err());
        assert!(SectionProfile::HollowCircle {
            outer_diameter: 0.1,
            inner_diameter: 0.1
        }
        .properties()
        .is_err());
        assert!(SectionProfile::HollowRectangle {
            outer_width: 0.2,
            outer_height: 0.3,
            inner_width: 0.1,
            inner_height: 0.35
        }
        .validate()
        .is_err());
        assert!(SectionProperties::new(0.0, 0.1, 0.1).is_err());
        assert!(SectionProperties::new(1e-6, 0.1, -0.1).is_err());
    }

    #[test]
    fn test_serialization() {
        let section = SectionProfile::IBeam {
            flange_width: 0.2,
            flange_thickness: 0.02,
            web_height: 0.3,
            web_thickness: 0.01,
        };
        let json = serde_json::to_string(&section).unwrap();
        assert!(json.contains("\"type\":\"IBeam\""));
        let parsed: SectionProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, section);
    }
}

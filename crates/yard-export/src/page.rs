//! Page geometry and export options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use yard_config::ExportConfig;

use crate::error::ExportError;

/// Paper sizes, portrait dimensions in PDF points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageFormat {
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    Letter,
    Legal,
    Tabloid,
}

impl PageFormat {
    pub const ALL: [Self; 10] = [
        Self::A0,
        Self::A1,
        Self::A2,
        Self::A3,
        Self::A4,
        Self::A5,
        Self::A6,
        Self::Letter,
        Self::Legal,
        Self::Tabloid,
    ];

    /// Portrait `(width, height)` in points.
    #[must_use]
    pub const fn size_pt(self) -> (f64, f64) {
        match self {
            Self::A0 => (2383.94, 3370.39),
            Self::A1 => (1683.78, 2383.94),
            Self::A2 => (1190.55, 1683.78),
            Self::A3 => (841.89, 1190.55),
            Self::A4 => (595.28, 841.89),
            Self::A5 => (419.53, 595.28),
            Self::A6 => (297.64, 419.53),
            Self::Letter => (612.0, 792.0),
            Self::Legal => (612.0, 1008.0),
            Self::Tabloid => (792.0, 1224.0),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A0 => "a0",
            Self::A1 => "a1",
            Self::A2 => "a2",
            Self::A3 => "a3",
            Self::A4 => "a4",
            Self::A5 => "a5",
            Self::A6 => "a6",
            Self::Letter => "letter",
            Self::Legal => "legal",
            Self::Tabloid => "tabloid",
        }
    }
}

impl fmt::Display for PageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == lower)
            .ok_or_else(|| ExportError::InvalidLayout(format!("unknown page format: {s}")))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl FromStr for Orientation {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "portrait" | "p" => Ok(Self::Portrait),
            "landscape" | "l" => Ok(Self::Landscape),
            _ => Err(ExportError::InvalidLayout(format!("unknown orientation: {s}"))),
        }
    }
}

/// Layout unit. Placements are reported in this unit; the PDF itself is
/// always written in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    #[default]
    Pt,
    Mm,
    Cm,
    In,
    /// CSS pixel (1/96 in).
    Px,
}

impl Unit {
    /// Points per one of this unit.
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::Pt => 1.0,
            Self::Mm => 72.0 / 25.4,
            Self::Cm => 72.0 / 2.54,
            Self::In => 72.0,
            Self::Px => 72.0 / 96.0,
        }
    }

    #[must_use]
    pub fn to_points(self, value: f64) -> f64 {
        value * self.points()
    }

    #[must_use]
    pub fn from_points(self, value: f64) -> f64 {
        value / self.points()
    }
}

impl FromStr for Unit {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pt" => Ok(Self::Pt),
            "mm" => Ok(Self::Mm),
            "cm" => Ok(Self::Cm),
            "in" => Ok(Self::In),
            "px" => Ok(Self::Px),
            _ => Err(ExportError::InvalidLayout(format!("unknown unit: {s}"))),
        }
    }
}

/// Opaque background colour painted under transparent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Self = Self(255, 255, 255);
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for Rgb {
    type Err = ExportError;

    /// Parse `#rgb` or `#rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ExportError::InvalidLayout(format!("invalid background colour: {s}"));
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let expand = |i: usize| channel(&hex[i..=i].repeat(2));
                Ok(Self(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            _ => Err(invalid()),
        }
    }
}

/// Page dimensions in a given unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
    pub unit: Unit,
}

impl PageSize {
    /// `(width, height)` in points.
    #[must_use]
    pub fn points(&self) -> (f64, f64) {
        (self.unit.to_points(self.width), self.unit.to_points(self.height))
    }
}

/// Page setup and capture parameters for one export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub page_format: PageFormat,
    pub orientation: Orientation,
    pub unit: Unit,
    /// Raster capture scale factor (device pixels per layout pixel).
    pub capture_scale: f32,
    pub background: Rgb,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            page_format: PageFormat::A3,
            orientation: Orientation::Portrait,
            unit: Unit::Pt,
            capture_scale: 2.0,
            background: Rgb::WHITE,
        }
    }
}

impl ExportOptions {
    /// Page size in the configured unit, orientation applied.
    #[must_use]
    pub fn page_size(&self) -> PageSize {
        let (w, h) = self.page_format.size_pt();
        let (w, h) = match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        };
        PageSize {
            width: self.unit.from_points(w),
            height: self.unit.from_points(h),
            unit: self.unit,
        }
    }

    /// Reject scales that cannot produce a raster.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidLayout`] for non-finite or non-positive
    /// capture scales.
    pub fn validate(&self) -> Result<(), ExportError> {
        if !self.capture_scale.is_finite() || self.capture_scale <= 0.0 {
            return Err(ExportError::InvalidLayout(format!(
                "capture scale must be positive, got {}",
                self.capture_scale
            )));
        }
        Ok(())
    }
}

impl TryFrom<&ExportConfig> for ExportOptions {
    type Error = ExportError;

    fn try_from(config: &ExportConfig) -> Result<Self, Self::Error> {
        let options = Self {
            page_format: config.page_format.parse()?,
            orientation: config.orientation.parse()?,
            unit: config.unit.parse()?,
            capture_scale: config.capture_scale,
            background: config.background.parse()?,
        };
        options.validate()?;
        Ok(options)
    }
}

//! PDF export configuration.
//!
//! Values are kept as plain strings here; `yard-export` parses them into its
//! typed page format, orientation, and unit.

use serde::{Deserialize, Serialize};

fn default_page_format() -> String {
    String::from("a3")
}

fn default_orientation() -> String {
    String::from("portrait")
}

fn default_unit() -> String {
    String::from("pt")
}

const fn default_capture_scale() -> f32 {
    2.0
}

fn default_background() -> String {
    String::from("#ffffff")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Paper size name (`a0`..`a6`, `letter`, `legal`, `tabloid`).
    #[serde(default = "default_page_format")]
    pub page_format: String,

    /// `portrait` or `landscape`.
    #[serde(default = "default_orientation")]
    pub orientation: String,

    /// Layout unit (`pt`, `mm`, `cm`, `in`, `px`).
    #[serde(default = "default_unit")]
    pub unit: String,

    /// Raster capture scale factor.
    #[serde(default = "default_capture_scale")]
    pub capture_scale: f32,

    /// Background colour used under transparent pixels (`#rgb` or `#rrggbb`).
    #[serde(default = "default_background")]
    pub background: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            page_format: default_page_format(),
            orientation: default_orientation(),
            unit: default_unit(),
            capture_scale: default_capture_scale(),
            background: default_background(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ExportConfig::default();
        assert_eq!(config.page_format, "a3");
        assert_eq!(config.orientation, "portrait");
        assert_eq!(config.unit, "pt");
        assert!((config.capture_scale - 2.0).abs() < f32::EPSILON);
        assert_eq!(config.background, "#ffffff");
    }
}

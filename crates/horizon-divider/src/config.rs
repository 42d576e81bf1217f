//! Configured divider defaults.
//!
//! A divider built without an explicit color, size or margin falls back to a
//! [`DividerDefaults`] value. Applications that theme their dividers load the
//! defaults once from a TOML document and hand them to every builder:
//!
//! ```
//! use horizon_divider::{Color, DividerDefaults};
//!
//! let defaults = DividerDefaults::from_toml_str(r##"
//! size = 2
//! color = "#336699"
//! "##)?;
//!
//! assert_eq!(defaults.size, 2);
//! assert_eq!(defaults.color, Color::from_rgb8(0x33, 0x66, 0x99));
//! assert_eq!(defaults.margin, 0);
//! # Ok::<(), horizon_divider::ConfigError>(())
//! ```

use std::str::FromStr;

use horizon_divider_render::Color;
use serde::{Deserialize, Deserializer, de};

use crate::error::ConfigError;
use crate::logging::targets;

/// Fallback values for dividers that do not configure them.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DividerDefaults {
    /// Size in pixels for drawables without an intrinsic size.
    pub size: u32,
    /// Fill color of dividers that configure neither a color nor an image.
    #[serde(deserialize_with = "deserialize_hex_color")]
    pub color: Color,
    /// Cross-axis margin in pixels.
    pub margin: u32,
}

impl DividerDefaults {
    /// Built-in divider size.
    pub const DEFAULT_SIZE: u32 = 1;
    /// Built-in divider color (`#CCCCCC`).
    pub const DEFAULT_COLOR: Color = Color::LIGHT_GRAY;
    /// Built-in margin.
    pub const DEFAULT_MARGIN: u32 = 0;

    /// Parse defaults from a TOML document. Missing keys keep their built-in
    /// values.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let defaults: Self = toml::from_str(source)?;
        tracing::debug!(
            target: targets::CONFIG,
            size = defaults.size,
            margin = defaults.margin,
            "loaded divider defaults"
        );
        Ok(defaults)
    }

    /// Set the default size using builder pattern.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the default color using builder pattern.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the default margin using builder pattern.
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Check if these are the built-in defaults.
    pub fn is_builtin(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for DividerDefaults {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            color: Self::DEFAULT_COLOR,
            margin: Self::DEFAULT_MARGIN,
        }
    }
}

impl FromStr for DividerDefaults {
    type Err = ConfigError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::from_toml_str(source)
    }
}

fn deserialize_hex_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let hex = String::deserialize(deserializer)?;
    Color::from_hex(&hex).ok_or_else(|| de::Error::custom(format!("invalid color '{hex}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_keeps_builtins() {
        let defaults = DividerDefaults::from_toml_str("").unwrap();
        assert!(defaults.is_builtin());
        assert_eq!(defaults.color, Color::from_rgb8(0xCC, 0xCC, 0xCC));
    }

    #[test]
    fn parses_all_fields() {
        let defaults: DividerDefaults = "size = 3\nmargin = 8\ncolor = \"#00000080\"".parse().unwrap();
        assert_eq!(defaults.size, 3);
        assert_eq!(defaults.margin, 8);
        assert_eq!(defaults.color, Color::from_rgba8(0, 0, 0, 0x80));
    }

    #[test]
    fn rejects_bad_color() {
        let err = DividerDefaults::from_toml_str("color = \"teal\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDefaults(_)));
        assert!(err.to_string().contains("invalid color"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = DividerDefaults::from_toml_str("thickness = 2").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDefaults(_)));
    }

    #[test]
    fn builder_methods() {
        let defaults = DividerDefaults::default().with_size(4).with_margin(2).with_color(Color::RED);
        assert_eq!(defaults.size, 4);
        assert_eq!(defaults.margin, 2);
        assert_eq!(defaults.color, Color::RED);
        assert!(!defaults.is_builtin());
    }
}

//! Error types for divider configuration and painting.

use thiserror::Error;

/// Errors raised while building a divider or loading its defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Both a color and an image were supplied.
    #[error("a divider cannot use both a color and an image")]
    ConflictingDrawable,

    /// A constant tint was supplied for a divider that paints no image.
    #[error("a tint can only be applied to an image divider")]
    TintWithoutImage,

    /// A space divider was combined with an option that paints something.
    #[error("a space divider cannot be combined with `{option}`")]
    SpaceWithDrawing {
        /// The conflicting builder option.
        option: &'static str,
    },

    /// The defaults document could not be parsed.
    #[error("invalid divider defaults: {0}")]
    InvalidDefaults(#[from] toml::de::Error),
}

impl ConfigError {
    /// Create a space conflict error for the given option.
    pub fn space_with(option: &'static str) -> Self {
        Self::SpaceWithDrawing { option }
    }
}

/// Errors raised while painting dividers.
#[derive(Debug, Error)]
pub enum DividerError {
    /// No drawable could be resolved for a group that must be painted.
    #[error("no drawable resolved for group {group_index} of {group_count}")]
    UnresolvedDrawable {
        /// Index of the group being painted.
        group_index: usize,
        /// Number of groups in the list.
        group_count: usize,
    },
}

impl DividerError {
    /// Create an unresolved drawable error.
    pub fn unresolved(group_count: usize, group_index: usize) -> Self {
        Self::UnresolvedDrawable {
            group_index,
            group_count,
        }
    }
}

/// Result type for divider operations.
pub type Result<T> = std::result::Result<T, DividerError>;

use thiserror::Error;

use crate::tokens::{FontAttribute, Foundation};

/// A reference that does not resolve against the primitive store
///
/// Carried as the sentinel of an unresolved leaf in a resolved theme and
/// reported by the validator. Never used to abort a resolve pass.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MissingRef {
    #[error("unknown color collection `{name}`")]
    ColorCollection { name: String },

    #[error("unknown color role `{name}`")]
    ColorRole { name: String },

    #[error("color role `{role}` needs a scale")]
    MissingScale { role: String },

    #[error("scale {scale} is not one of the canonical steps")]
    InvalidScale { scale: i64 },

    #[error("color collection `{name}` has no entry for scale {scale}")]
    MissingStep { name: String, scale: u16 },

    #[error("foundation color `{which}` does not take a scale (got {scale})")]
    FoundationScale { which: Foundation, scale: i64 },

    #[error("unknown font {attribute} `{key}`")]
    Font { attribute: FontAttribute, key: String },

    #[error("unknown dimension `{key}`")]
    Dimension { key: u32 },
}

impl MissingRef {
    /// Short machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ColorCollection { .. } => "color-collection",
            Self::ColorRole { .. } => "color-role",
            Self::MissingScale { .. } | Self::InvalidScale { .. } | Self::MissingStep { .. } => {
                "scale"
            }
            Self::FoundationScale { .. } => "foundation-scale",
            Self::Font { .. } => "font",
            Self::Dimension { .. } => "dimension",
        }
    }

    /// True when the problem lies in the token's `scale` rather than its `color`
    pub fn concerns_scale(&self) -> bool {
        matches!(
            self,
            Self::MissingScale { .. }
                | Self::InvalidScale { .. }
                | Self::MissingStep { .. }
                | Self::FoundationScale { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("partial theme must be a JSON object, got {found}")]
    PartialNotObject { found: &'static str },

    #[error("partial theme does not fit the theme shape: {0}")]
    Shape(#[source] serde_json::Error),

    #[error("unknown mode `{0}` (expected `light` or `dark`)")]
    UnknownMode(String),

    #[error("unknown color role `{0}`")]
    UnknownRole(String),

    #[error("unknown palette section `{0}`")]
    UnknownSection(String),

    #[error("unknown preset `{0}`")]
    UnknownPreset(String),

    #[error("theme `{0}` not found")]
    ThemeNotFound(String),

    #[error("theme `{0}` already exists")]
    DuplicateTheme(String),

    #[error("theme has no id")]
    MissingId,

    #[error("cannot remove the last theme")]
    LastTheme,

    #[error("theme collection has no themes")]
    EmptyCollection,
}

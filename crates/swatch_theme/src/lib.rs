//! Swatch Theme Engine
//!
//! Resolution, validation and deep merge for layered design-token themes.
//!
//! # Overview
//!
//! A [`Theme`] is described in three layers:
//! - **Primitives**: color ramps, foundation colors, font tables, dimensions
//! - **Roles**: semantic names (primary, h1, spacing md, ...) bound to primitive keys
//! - **Palettes**: per-mode surface/text/icon/border tokens pointing at roles
//!
//! The engine turns such a theme into concrete values for one display mode,
//! reports every reference that does not resolve, and folds partial edits
//! into a theme without disturbing untouched branches.
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_theme::{merge, Mode, PartialTheme, Section, Theme};
//!
//! let theme = Theme::default();
//! assert!(theme.validate().is_empty());
//!
//! let resolved = theme.resolve(Mode::Dark);
//! assert!(resolved.palette.hex(Section::Surface, "primary", "default").is_some());
//!
//! let edit = PartialTheme::from_json_str(r#"{ "color": { "accent": "violet" } }"#).unwrap();
//! let edited = merge(&edit, &theme);
//! assert_eq!(edited.color.accent, "violet");
//! ```
//!
//! # Failure model
//!
//! Data problems never abort: a dangling reference resolves to
//! [`Resolved::Missing`] for that leaf only, and [`validate`] lists every
//! such reference at once. Only malformed input (bad JSON, a partial edit
//! that does not fit the theme shape) surfaces as a [`ThemeError`].
//!
//! # State
//!
//! [`ThemeStore`] holds the active theme and mode for an application,
//! caches the resolved theme per mode and notifies subscribers of changes.
//! [`ThemeCollection`] keeps saved themes with one current selection.

pub mod collection;
pub mod error;
pub mod merge;
pub mod presets;
pub mod resolve;
pub mod state;
pub mod theme;
pub mod tokens;
pub mod validate;

// Re-export commonly used types
pub use collection::ThemeCollection;
pub use error::{MissingRef, ThemeError};
pub use merge::{merge, merge_values, try_merge, PartialTheme};
pub use presets::{preset_theme, ThemePreset};
pub use resolve::{
    resolve_theme, resolve_theme_with, FontValue, ResolveOptions, Resolved, ResolvedColor,
    ResolvedPalette, ResolvedSizes, ResolvedTheme, Resolver, Strictness,
};
pub use state::{SubscriptionId, ThemeEvent, ThemeStore};
pub use theme::{BaseConfig, Theme};
pub use tokens::*;
pub use validate::{has_errors, validate, Issue, Severity};

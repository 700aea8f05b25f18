//! Token resolution
//!
//! Resolution dereferences a [`Theme`] for one display mode:
//!
//! - **Alias layer** ([`Resolver::color_role`], [`Resolver::font`],
//!   [`Resolver::dimension`]): role bindings -> primitive store entries
//! - **Palette layer** ([`Resolver::color`], [`Resolver::palette`]):
//!   palette tokens -> role -> ramp step, or directly -> foundation
//!
//! Every lookup is a pure function of the theme. A dangling reference never
//! aborts the pass: the affected leaf becomes [`Resolved::Missing`] and the
//! rest of the theme still resolves.
//!
//! # Strictness
//!
//! A foundation reference carrying a `scale` is a configuration slip.
//! [`Strictness::Lenient`] ignores the scale and returns the foundation;
//! [`Strictness::Strict`] reports it as [`MissingRef::FoundationScale`].

mod alias;
mod output;
mod palette;

pub use alias::{FontValue, RoleTarget};
pub use output::{
    ResolvedBorder, ResolvedColor, ResolvedGroup, ResolvedPalette, ResolvedSection,
    ResolvedSizes, ResolvedTheme,
};

use serde::{Deserialize, Serialize, Serializer};

use crate::error::MissingRef;
use crate::theme::Theme;
use crate::tokens::*;

/// How to treat a foundation reference that carries a scale
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Ignore the stray scale
    #[default]
    Lenient,
    /// Treat the stray scale as unresolvable
    Strict,
}

/// Resolution options
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct ResolveOptions {
    pub strictness: Strictness,
}

impl ResolveOptions {
    pub fn lenient() -> Self {
        Self {
            strictness: Strictness::Lenient,
        }
    }

    pub fn strict() -> Self {
        Self {
            strictness: Strictness::Strict,
        }
    }
}

/// A resolved leaf: a concrete value, or why there is none
///
/// Serializes as the bare value, or `null` when missing.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolved<T> {
    Value(T),
    Missing(MissingRef),
}

impl<T> Resolved<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Missing(_) => None,
        }
    }

    pub fn missing(&self) -> Option<&MissingRef> {
        match self {
            Self::Value(_) => None,
            Self::Missing(missing) => Some(missing),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn into_result(self) -> Result<T, MissingRef> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Missing(missing) => Err(missing),
        }
    }
}

impl<T> From<Result<T, MissingRef>> for Resolved<T> {
    fn from(result: Result<T, MissingRef>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(missing) => Self::Missing(missing),
        }
    }
}

impl<T: Serialize> Serialize for Resolved<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => value.serialize(serializer),
            Self::Missing(_) => serializer.serialize_none(),
        }
    }
}

/// Resolves references of one theme
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'a> {
    theme: &'a Theme,
    options: ResolveOptions,
}

impl<'a> Resolver<'a> {
    /// A lenient resolver
    pub fn new(theme: &'a Theme) -> Self {
        Self::with_options(theme, ResolveOptions::default())
    }

    pub fn with_options(theme: &'a Theme, options: ResolveOptions) -> Self {
        Self { theme, options }
    }

    pub fn theme_ref(&self) -> &'a Theme {
        self.theme
    }

    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    /// Resolve every role and token for `mode`
    pub fn theme(&self, mode: Mode) -> ResolvedTheme {
        let color = ColorRole::ALL
            .iter()
            .map(|role| {
                let resolved = self.color_role(*role).map(|target| self.materialize(target));
                (*role, Resolved::from(resolved))
            })
            .collect();

        let font = FontAttribute::ALL
            .iter()
            .map(|attribute| {
                let roles = FontRoles::from_fn(|role| Resolved::from(self.font(role, *attribute)));
                (*attribute, roles)
            })
            .collect();

        let mut size = ResolvedSizes::default();
        for (kind, name, key) in self.theme.size.iter() {
            size.table_mut(kind)
                .insert(name.to_string(), Resolved::from(self.dimension(key)));
        }

        let resolved = ResolvedTheme {
            mode,
            color,
            font,
            size,
            palette: self.palette(mode),
        };

        let unresolved = resolved.missing().len();
        if unresolved > 0 {
            tracing::debug!(
                "Resolver::theme - {} leaves unresolved for mode {}",
                unresolved,
                mode
            );
        }
        resolved
    }

    fn materialize(&self, target: RoleTarget<'a>) -> ResolvedColor {
        match target {
            RoleTarget::Ramp { ramp, .. } => ResolvedColor::Ramp(ramp.clone()),
            RoleTarget::Foundation(which) => {
                ResolvedColor::Foundation(self.theme.base.color.foundation(which).to_string())
            }
        }
    }
}

/// Resolve `theme` for `mode` with lenient foundation handling
pub fn resolve_theme(mode: Mode, theme: &Theme) -> ResolvedTheme {
    Resolver::new(theme).theme(mode)
}

/// Resolve `theme` for `mode` with explicit options
pub fn resolve_theme_with(mode: Mode, theme: &Theme, options: ResolveOptions) -> ResolvedTheme {
    Resolver::with_options(theme, options).theme(mode)
}

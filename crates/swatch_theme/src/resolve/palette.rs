//! Palette layer: palette tokens -> hex strings

use super::{Resolved, ResolvedPalette, Resolver, RoleTarget, Strictness};
use crate::error::MissingRef;
use crate::tokens::*;

impl<'a> Resolver<'a> {
    /// Resolve a single palette token value to a hex string
    ///
    /// Foundations win over any scale: in lenient mode the scale is ignored,
    /// in strict mode it is reported. A role needs a canonical scale that its
    /// ramp has an entry for.
    pub fn color(&self, value: &ColorValue) -> Result<String, MissingRef> {
        match ColorRef::parse(&value.color) {
            Some(ColorRef::Foundation(which)) => self.foundation(which, value.scale),
            Some(ColorRef::Role(role)) => match self.color_role(role)? {
                RoleTarget::Foundation(which) => self.foundation(which, value.scale),
                RoleTarget::Ramp { name, ramp } => {
                    let scale = value.scale.ok_or_else(|| MissingRef::MissingScale {
                        role: role.name().to_string(),
                    })?;
                    let step = match u16::try_from(scale) {
                        Ok(step) if is_scale_step(scale) => step,
                        _ => return Err(MissingRef::InvalidScale { scale }),
                    };
                    ramp.get(&step)
                        .cloned()
                        .ok_or_else(|| MissingRef::MissingStep {
                            name: name.to_string(),
                            scale: step,
                        })
                }
            },
            None => Err(MissingRef::ColorRole {
                name: value.color.clone(),
            }),
        }
    }

    fn foundation(&self, which: Foundation, scale: Option<i64>) -> Result<String, MissingRef> {
        if let (Some(scale), Strictness::Strict) = (scale, self.options().strictness) {
            return Err(MissingRef::FoundationScale { which, scale });
        }
        Ok(self
            .theme_ref()
            .base
            .color
            .foundation(which)
            .to_string())
    }

    /// Resolve the token at `section.group.variant` of `mode`'s palette
    ///
    /// Returns `None` when the palette has no such token.
    pub fn token(
        &self,
        mode: Mode,
        section: Section,
        group: &str,
        variant: &str,
    ) -> Option<Result<String, MissingRef>> {
        self.theme_ref()
            .palette(mode)
            .token(section, group, variant)
            .map(|value| self.color(value))
    }

    /// Resolve all four sections of `mode`'s palette
    pub fn palette(&self, mode: Mode) -> ResolvedPalette {
        let mut resolved = ResolvedPalette::default();
        for (section, group, variant, value) in self.theme_ref().palette(mode).tokens() {
            let hex = Resolved::from(self.color(value));
            if let Resolved::Missing(missing) = &hex {
                tracing::trace!(
                    "unresolved palette token {}.{}.{}.{}: {}",
                    mode,
                    section,
                    group,
                    variant,
                    missing
                );
            }
            resolved
                .section_mut(section)
                .entry(group.to_string())
                .or_default()
                .insert(variant.to_string(), hex);
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::ResolveOptions;
    use crate::theme::Theme;

    fn brand_theme() -> Theme {
        let mut theme = Theme::default();
        let mut ramp = Ramp::new();
        ramp.insert(500, "#112233".to_string());
        theme.base.color.collection.insert("brand".into(), ramp);
        theme.color.set(ColorRole::Primary, "brand");
        theme
    }

    #[test]
    fn role_token_resolves_to_ramp_step() {
        let theme = brand_theme();
        let resolver = Resolver::new(&theme);
        assert_eq!(
            resolver.color(&ColorValue::role(ColorRole::Primary, 500)),
            Ok("#112233".to_string())
        );
    }

    #[test]
    fn role_token_without_scale_is_missing() {
        let theme = brand_theme();
        let resolver = Resolver::new(&theme);
        let value = ColorValue {
            color: "primary".into(),
            scale: None,
        };
        assert_eq!(
            resolver.color(&value),
            Err(MissingRef::MissingScale {
                role: "primary".into()
            })
        );
    }

    #[test]
    fn non_canonical_scale_is_rejected_before_lookup() {
        let theme = brand_theme();
        let resolver = Resolver::new(&theme);
        assert_eq!(
            resolver.color(&ColorValue::role(ColorRole::Primary, 550)),
            Err(MissingRef::InvalidScale { scale: 550 })
        );
    }

    #[test]
    fn absent_ramp_step_is_missing() {
        let theme = brand_theme();
        let resolver = Resolver::new(&theme);
        assert_eq!(
            resolver.color(&ColorValue::role(ColorRole::Primary, 600)),
            Err(MissingRef::MissingStep {
                name: "brand".into(),
                scale: 600
            })
        );
    }

    #[test]
    fn unknown_role_name_is_missing() {
        let theme = brand_theme();
        let resolver = Resolver::new(&theme);
        let value = ColorValue {
            color: "brand".into(),
            scale: Some(500),
        };
        assert_eq!(
            resolver.color(&value),
            Err(MissingRef::ColorRole {
                name: "brand".into()
            })
        );
    }

    #[test]
    fn foundation_ignores_scale_when_lenient() {
        let theme = Theme::default();
        let resolver = Resolver::new(&theme);
        let value = ColorValue {
            color: "foundation.white".into(),
            scale: Some(500),
        };
        assert_eq!(
            resolver.color(&value),
            Ok(theme.base.color.foundations.white.clone())
        );
    }

    #[test]
    fn foundation_scale_is_fatal_when_strict() {
        let theme = Theme::default();
        let resolver = Resolver::with_options(&theme, ResolveOptions::strict());
        let value = ColorValue {
            color: "foundation.black".into(),
            scale: Some(100),
        };
        assert_eq!(
            resolver.color(&value),
            Err(MissingRef::FoundationScale {
                which: Foundation::Black,
                scale: 100
            })
        );
        assert!(resolver
            .color(&ColorValue::foundation(Foundation::Black))
            .is_ok());
    }

    #[test]
    fn role_bound_to_foundation_ignores_scale() {
        let mut theme = Theme::default();
        theme.color.set(ColorRole::Accent, "black");
        let resolver = Resolver::new(&theme);
        assert_eq!(
            resolver.color(&ColorValue::role(ColorRole::Accent, 700)),
            Ok(theme.base.color.foundations.black.clone())
        );
    }

    #[test]
    fn token_lookup_returns_none_for_unknown_slots() {
        let theme = Theme::default();
        let resolver = Resolver::new(&theme);
        assert!(resolver
            .token(Mode::Light, Section::Surface, "primary", "default")
            .is_some());
        assert!(resolver
            .token(Mode::Light, Section::Surface, "primary", "sparkle")
            .is_none());
    }

    #[test]
    fn palette_keeps_every_token() {
        let theme = Theme::default();
        let resolver = Resolver::new(&theme);
        for mode in Mode::ALL {
            let resolved = resolver.palette(mode);
            assert_eq!(resolved.len(), theme.palette(mode).len());
        }
    }
}

//! Alias layer: role bindings -> primitive store entries

use serde::Serialize;

use super::Resolver;
use crate::error::MissingRef;
use crate::tokens::*;

/// What a color role is bound to once looked up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleTarget<'a> {
    Ramp { name: &'a str, ramp: &'a Ramp },
    Foundation(Foundation),
}

/// A resolved font attribute
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FontValue {
    Family(String),
    Number(f32),
}

impl FontValue {
    pub fn as_family(&self) -> Option<&str> {
        match self {
            Self::Family(family) => Some(family),
            Self::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Family(_) => None,
            Self::Number(number) => Some(*number),
        }
    }
}

impl<'a> Resolver<'a> {
    /// Look up the ramp (or foundation) a color role is bound to
    ///
    /// A binding naming an existing ramp always resolves to that ramp, so a
    /// ramp may shadow a foundation name.
    pub fn color_role(&self, role: ColorRole) -> Result<RoleTarget<'a>, MissingRef> {
        let theme = self.theme_ref();
        let binding = theme.color.get(role);

        if let Some(ramp) = theme.base.color.ramp(binding) {
            return Ok(RoleTarget::Ramp {
                name: binding,
                ramp,
            });
        }

        Foundation::parse(binding)
            .map(RoleTarget::Foundation)
            .ok_or_else(|| MissingRef::ColorCollection {
                name: binding.to_string(),
            })
    }

    /// Look up one attribute of a font role
    pub fn font(&self, role: FontRole, attribute: FontAttribute) -> Result<FontValue, MissingRef> {
        let theme = self.theme_ref();
        let key = theme.font.key(attribute, role);
        let tables = &theme.base.font;

        let value = match attribute {
            FontAttribute::Family => tables
                .family(key)
                .map(|family| FontValue::Family(family.to_string())),
            _ => tables.number(attribute, key).map(FontValue::Number),
        };

        value.ok_or_else(|| MissingRef::Font {
            attribute,
            key: key.to_string(),
        })
    }

    /// Look up a dimension key in pixels
    pub fn dimension(&self, key: u32) -> Result<f32, MissingRef> {
        self.theme_ref()
            .base
            .size
            .dimension(key)
            .ok_or(MissingRef::Dimension { key })
    }

    /// Resolve a named size role; `None` if no such role is bound
    pub fn size(&self, kind: SizeKind, name: &str) -> Option<Result<f32, MissingRef>> {
        self.theme_ref()
            .size
            .table(kind)
            .get(name)
            .map(|key| self.dimension(*key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn color_role_resolves_to_bound_ramp() {
        let theme = Theme::default();
        let resolver = Resolver::new(&theme);
        match resolver.color_role(ColorRole::Primary).unwrap() {
            RoleTarget::Ramp { name, ramp } => {
                assert_eq!(name, theme.color.primary);
                assert_eq!(ramp.len(), SCALE_STEPS.len());
            }
            other => panic!("expected ramp, got {other:?}"),
        }
    }

    #[test]
    fn color_role_falls_back_to_foundation_names() {
        let mut theme = Theme::default();
        theme.color.set(ColorRole::NeutralLight, "white");
        theme.color.set(ColorRole::NeutralDark, "foundation.black");
        let resolver = Resolver::new(&theme);

        assert_eq!(
            resolver.color_role(ColorRole::NeutralLight).unwrap(),
            RoleTarget::Foundation(Foundation::White)
        );
        assert_eq!(
            resolver.color_role(ColorRole::NeutralDark).unwrap(),
            RoleTarget::Foundation(Foundation::Black)
        );
    }

    #[test]
    fn ramp_named_like_a_foundation_wins() {
        let mut theme = Theme::default();
        let ramp = theme.base.color.collection[0].clone();
        theme.base.color.collection.insert("white".into(), ramp);
        theme.color.set(ColorRole::Accent, "white");

        let resolver = Resolver::new(&theme);
        assert!(matches!(
            resolver.color_role(ColorRole::Accent).unwrap(),
            RoleTarget::Ramp { name: "white", .. }
        ));
    }

    #[test]
    fn unknown_collection_is_reported() {
        let mut theme = Theme::default();
        theme.color.set(ColorRole::Primary, "brand");
        let resolver = Resolver::new(&theme);
        assert_eq!(
            resolver.color_role(ColorRole::Primary).unwrap_err(),
            MissingRef::ColorCollection {
                name: "brand".into()
            }
        );
    }

    #[test]
    fn font_attributes_resolve_through_tables() {
        let theme = Theme::default();
        let resolver = Resolver::new(&theme);

        let family = resolver.font(FontRole::H1, FontAttribute::Family).unwrap();
        assert!(family.as_family().is_some());

        let weight = resolver.font(FontRole::H1, FontAttribute::Weight).unwrap();
        assert_eq!(weight.as_number(), Some(700.0));
    }

    #[test]
    fn missing_font_key_names_the_attribute() {
        let mut theme = Theme::default();
        *theme
            .font
            .attribute_mut(FontAttribute::Size)
            .get_mut(FontRole::Caption) = "5xl".into();
        let resolver = Resolver::new(&theme);
        assert_eq!(
            resolver.font(FontRole::Caption, FontAttribute::Size).unwrap_err(),
            MissingRef::Font {
                attribute: FontAttribute::Size,
                key: "5xl".into()
            }
        );
    }

    #[test]
    fn size_roles_resolve_to_pixels() {
        let mut theme = Theme::default();
        let resolver = Resolver::new(&theme);
        assert_eq!(resolver.size(SizeKind::Spacing, "md"), Some(Ok(20.0)));
        assert_eq!(resolver.size(SizeKind::Spacing, "5xl"), None);

        theme.size.spacing.insert("odd".into(), 125);
        let resolver = Resolver::new(&theme);
        assert_eq!(
            resolver.size(SizeKind::Spacing, "odd"),
            Some(Err(MissingRef::Dimension { key: 125 }))
        );
    }
}

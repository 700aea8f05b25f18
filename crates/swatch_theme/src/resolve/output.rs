//! Resolved theme values handed to the presentation layer

use indexmap::IndexMap;
use serde::Serialize;

use super::{FontValue, Resolved};
use crate::error::MissingRef;
use crate::tokens::*;

/// Variant name -> resolved hex
pub type ResolvedGroup = IndexMap<String, Resolved<String>>;

/// Group name -> resolved variants
pub type ResolvedSection = IndexMap<String, ResolvedGroup>;

/// One mode's palette with every token dereferenced
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ResolvedPalette {
    pub surface: ResolvedSection,
    pub text: ResolvedSection,
    pub icon: ResolvedSection,
    pub border: ResolvedSection,
}

impl ResolvedPalette {
    pub fn section(&self, section: Section) -> &ResolvedSection {
        match section {
            Section::Surface => &self.surface,
            Section::Text => &self.text,
            Section::Icon => &self.icon,
            Section::Border => &self.border,
        }
    }

    pub fn section_mut(&mut self, section: Section) -> &mut ResolvedSection {
        match section {
            Section::Surface => &mut self.surface,
            Section::Text => &mut self.text,
            Section::Icon => &mut self.icon,
            Section::Border => &mut self.border,
        }
    }

    pub fn get(&self, section: Section, group: &str, variant: &str) -> Option<&Resolved<String>> {
        self.section(section)
            .get(group)
            .and_then(|tokens| tokens.get(variant))
    }

    /// The hex at `section.group.variant`, if the token exists and resolved
    pub fn hex(&self, section: Section, group: &str, variant: &str) -> Option<&str> {
        self.get(section, group, variant)
            .and_then(Resolved::value)
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, &str, &str, &Resolved<String>)> + '_ {
        Section::ALL.iter().flat_map(move |section| {
            self.section(*section).iter().flat_map(move |(group, tokens)| {
                tokens
                    .iter()
                    .map(move |(variant, value)| (*section, group.as_str(), variant.as_str(), value))
            })
        })
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A resolved color role: its whole ramp, or a foundation hex
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResolvedColor {
    Ramp(Ramp),
    Foundation(String),
}

impl ResolvedColor {
    /// The hex for `scale`; a foundation answers every scale
    pub fn at(&self, scale: u16) -> Option<&str> {
        match self {
            Self::Ramp(ramp) => ramp.get(&scale).map(String::as_str),
            Self::Foundation(hex) => Some(hex),
        }
    }
}

/// Resolved border sizes in pixels
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ResolvedBorder {
    pub width: IndexMap<String, Resolved<f32>>,
    pub radius: IndexMap<String, Resolved<f32>>,
}

/// Resolved size roles in pixels
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ResolvedSizes {
    pub border: ResolvedBorder,
    pub spacing: IndexMap<String, Resolved<f32>>,
}

impl ResolvedSizes {
    pub fn table(&self, kind: SizeKind) -> &IndexMap<String, Resolved<f32>> {
        match kind {
            SizeKind::BorderWidth => &self.border.width,
            SizeKind::BorderRadius => &self.border.radius,
            SizeKind::Spacing => &self.spacing,
        }
    }

    pub fn table_mut(&mut self, kind: SizeKind) -> &mut IndexMap<String, Resolved<f32>> {
        match kind {
            SizeKind::BorderWidth => &mut self.border.width,
            SizeKind::BorderRadius => &mut self.border.radius,
            SizeKind::Spacing => &mut self.spacing,
        }
    }
}

/// A theme dereferenced for one mode
///
/// Same shape as the source theme, but every role and token holds a
/// concrete value (or the reason it could not be resolved). Recompute it
/// whenever the theme or mode changes; it is never persisted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedTheme {
    pub mode: Mode,
    pub color: IndexMap<ColorRole, Resolved<ResolvedColor>>,
    pub font: IndexMap<FontAttribute, FontRoles<Resolved<FontValue>>>,
    pub size: ResolvedSizes,
    pub palette: ResolvedPalette,
}

impl ResolvedTheme {
    pub fn color(&self, role: ColorRole) -> Option<&ResolvedColor> {
        self.color.get(&role).and_then(Resolved::value)
    }

    pub fn font(&self, role: FontRole, attribute: FontAttribute) -> Option<&FontValue> {
        self.font
            .get(&attribute)
            .and_then(|roles| roles.get(role).value())
    }

    /// Every unresolved leaf with its dotted path
    pub fn missing(&self) -> Vec<(String, &MissingRef)> {
        let mut missing = Vec::new();

        for (role, resolved) in &self.color {
            if let Some(why) = resolved.missing() {
                missing.push((format!("color.{}", role), why));
            }
        }

        for (attribute, roles) in &self.font {
            for (role, resolved) in roles.iter() {
                if let Some(why) = resolved.missing() {
                    missing.push((format!("font.{}.{}", attribute, role), why));
                }
            }
        }

        for kind in SizeKind::ALL {
            for (name, resolved) in self.size.table(kind) {
                if let Some(why) = resolved.missing() {
                    missing.push((format!("size.{}.{}", kind.path(), name), why));
                }
            }
        }

        for (section, group, variant, resolved) in self.palette.iter() {
            if let Some(why) = resolved.missing() {
                missing.push((
                    format!("palette.{}.{}.{}.{}", self.mode, section, group, variant),
                    why,
                ));
            }
        }

        missing
    }

    /// True when no leaf is missing
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Flatten palette, sizes and fonts into CSS custom properties
    ///
    /// Names are kebab-cased, e.g. `--{prefix}-surface-primary-default-hover`.
    /// Unresolved leaves are left out.
    pub fn css_variables(&self, prefix: &str) -> IndexMap<String, String> {
        let mut vars = IndexMap::new();

        for (section, group, variant, resolved) in self.palette.iter() {
            if let Some(hex) = resolved.value() {
                vars.insert(
                    format!(
                        "--{}-{}-{}-{}",
                        prefix,
                        section,
                        kebab(group),
                        kebab(variant)
                    ),
                    hex.clone(),
                );
            }
        }

        for kind in SizeKind::ALL {
            for (name, resolved) in self.size.table(kind) {
                if let Some(px) = resolved.value() {
                    vars.insert(
                        format!("--{}-{}-{}", prefix, kind.css_name(), kebab(name)),
                        format!("{}px", px),
                    );
                }
            }
        }

        for (attribute, roles) in &self.font {
            for (role, resolved) in roles.iter() {
                let Some(value) = resolved.value() else {
                    continue;
                };
                let rendered = match (attribute, value) {
                    (_, FontValue::Family(family)) => family.clone(),
                    (FontAttribute::Weight, FontValue::Number(weight)) => weight.to_string(),
                    (_, FontValue::Number(px)) => format!("{}px", px),
                };
                vars.insert(
                    format!(
                        "--{}-font-{}-{}",
                        prefix,
                        kebab(role.name()),
                        kebab(attribute.name())
                    ),
                    rendered,
                );
            }
        }

        vars
    }
}

/// `defaultSubtleHover` -> `default-subtle-hover`
fn kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_theme;
    use crate::theme::Theme;

    #[test]
    fn kebab_cases_camel_names() {
        assert_eq!(kebab("defaultSubtleHover"), "default-subtle-hover");
        assert_eq!(kebab("pageAlternative"), "page-alternative");
        assert_eq!(kebab("h1"), "h1");
        assert_eq!(kebab("2xl"), "2xl");
    }

    #[test]
    fn missing_reports_palette_paths_with_mode() {
        let mut theme = Theme::default();
        theme
            .palette
            .dark
            .surface
            .get_mut("primary")
            .unwrap()
            .get_mut("default")
            .unwrap()
            .scale = Some(333);

        let resolved = resolve_theme(Mode::Dark, &theme);
        let missing = resolved.missing();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].0, "palette.dark.surface.primary.default");
        assert_eq!(missing[0].1, &MissingRef::InvalidScale { scale: 333 });
    }

    #[test]
    fn css_variables_cover_palette_sizes_and_fonts() {
        let theme = Theme::default();
        let resolved = resolve_theme(Mode::Light, &theme);
        let vars = resolved.css_variables("swatch");

        assert_eq!(
            vars.get("--swatch-surface-primary-default").map(String::as_str),
            resolved.palette.hex(Section::Surface, "primary", "default")
        );
        assert_eq!(
            vars.get("--swatch-spacing-md").map(String::as_str),
            Some("20px")
        );
        assert_eq!(
            vars.get("--swatch-font-h1-weight").map(String::as_str),
            Some("700")
        );
        assert!(vars.contains_key("--swatch-font-body-short-paragraph-spacing"));
    }

    #[test]
    fn css_variables_skip_unresolved_tokens() {
        let mut theme = Theme::default();
        theme.base.size.dimension.remove(&500);
        let resolved = resolve_theme(Mode::Light, &theme);
        let vars = resolved.css_variables("swatch");
        assert!(!vars.contains_key("--swatch-spacing-md"));
        assert!(vars.contains_key("--swatch-spacing-sm"));
    }

    #[test]
    fn resolved_theme_serializes_with_role_keys() {
        let resolved = resolve_theme(Mode::Light, &Theme::default());
        let json = serde_json::to_value(&resolved).unwrap();
        assert_eq!(json["mode"], "light");
        assert!(json["color"]["neutral-light"].is_object());
        assert!(json["font"]["family"]["h1"].is_string());
        assert!(json["palette"]["surface"]["primary"]["default"].is_string());
    }
}

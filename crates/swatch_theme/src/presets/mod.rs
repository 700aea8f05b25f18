//! Built-in theme presets
//!
//! Every preset shares the same primitive store (ramps, font tables,
//! dimensions) and palette tables; presets differ in which ramps the color
//! roles are bound to.

mod palette;
pub mod ramps;

use indexmap::IndexMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ThemeError;
use crate::theme::{BaseConfig, Theme};
use crate::tokens::*;

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Blue primary, violet secondary, teal accent.
    #[default]
    Ocean,
    /// Orange primary, rose secondary, amber accent.
    Ember,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Ocean => "ocean",
            Self::Ember => "ember",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Ocean => "Ocean",
            Self::Ember => "Ember",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 2] = [ThemePreset::Ocean, ThemePreset::Ember];
        &PRESETS
    }

    /// Build the complete theme for this preset, identified by the preset id.
    pub fn theme(self) -> Theme {
        Theme {
            id: Some(self.id().to_string()),
            name: Some(self.display_name().to_string()),
            base: base_config(),
            color: self.color_bindings(),
            font: font_bindings(),
            size: size_bindings(),
            palette: PaletteModes::new(palette::palette(Mode::Light), palette::palette(Mode::Dark)),
        }
    }

    fn color_bindings(self) -> ColorBindings {
        let (primary, secondary, accent) = match self {
            Self::Ocean => ("blue", "violet", "teal"),
            Self::Ember => ("orange", "rose", "amber"),
        };
        ColorBindings {
            primary: primary.into(),
            secondary: secondary.into(),
            accent: accent.into(),
            success: "green".into(),
            error: "red".into(),
            information: "sky".into(),
            warning: "amber".into(),
            neutral_light: "gray".into(),
            neutral_dark: "slate".into(),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ThemePreset {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ThemeError::UnknownPreset(s.to_string()))
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_theme(preset: ThemePreset) -> Theme {
    preset.theme()
}

/// The shared primitive store
pub fn base_config() -> BaseConfig {
    BaseConfig {
        font: font_tables(),
        color: color_primitives(),
        size: size_primitives(),
    }
}

fn color_primitives() -> ColorPrimitives {
    let named: [(&str, &[&str; 13]); 11] = [
        ("blue", &ramps::BLUE),
        ("violet", &ramps::VIOLET),
        ("teal", &ramps::TEAL),
        ("orange", &ramps::ORANGE),
        ("rose", &ramps::ROSE),
        ("green", &ramps::GREEN),
        ("red", &ramps::RED),
        ("sky", &ramps::SKY),
        ("amber", &ramps::AMBER),
        ("gray", &ramps::GRAY),
        ("slate", &ramps::SLATE),
    ];
    ColorPrimitives {
        collection: named
            .into_iter()
            .map(|(name, steps)| (name.to_string(), ramp_from_steps(steps)))
            .collect(),
        foundations: Foundations::default(),
    }
}

const FONT_SCALE: [&str; 9] = ["4xl", "3xl", "2xl", "xl", "lg", "md", "base", "sm", "xs"];

fn numbers(keys: &[&str], values: &[f32]) -> IndexMap<String, f32> {
    keys.iter()
        .zip(values)
        .map(|(key, value)| (key.to_string(), *value))
        .collect()
}

fn font_tables() -> FontTables {
    FontTables {
        family: [
            ("heading", "Inter"),
            ("body", "Inter"),
            ("mono", "JetBrains Mono"),
        ]
        .into_iter()
        .map(|(key, family)| (key.to_string(), family.to_string()))
        .collect(),
        size: numbers(
            &FONT_SCALE,
            &[64.0, 48.0, 40.0, 32.0, 24.0, 20.0, 16.0, 14.0, 12.0],
        ),
        height: numbers(
            &FONT_SCALE,
            &[72.0, 56.0, 48.0, 40.0, 32.0, 28.0, 24.0, 20.0, 16.0],
        ),
        weight: numbers(
            &["regular", "medium", "semiBold", "bold"],
            &[400.0, 500.0, 600.0, 700.0],
        ),
        spacing: numbers(&["lg", "md", "xs", "base"], &[0.0, 0.0, 0.0, 0.0]),
        paragraph_spacing: numbers(&["base"], &[16.0]),
    }
}

fn font_bindings() -> FontBindings {
    let size = |role: FontRole| {
        let key = match role {
            FontRole::H1 => "4xl",
            FontRole::H2 => "3xl",
            FontRole::H3 => "2xl",
            FontRole::H4 => "xl",
            FontRole::H5 => "lg",
            FontRole::H6 => "md",
            FontRole::Caption => "xs",
            FontRole::Label | FontRole::LabelLong => "sm",
            _ => "base",
        };
        key.to_string()
    };

    FontBindings {
        family: FontRoles::from_fn(|role| {
            let key = if role.is_heading() { "heading" } else { "body" };
            key.to_string()
        }),
        size: FontRoles::from_fn(size),
        height: FontRoles::from_fn(size),
        weight: FontRoles::from_fn(|role| {
            let key = match role {
                FontRole::H1 | FontRole::H2 | FontRole::H3 => "bold",
                FontRole::H4 | FontRole::H5 | FontRole::H6 => "semiBold",
                FontRole::Hyperlink
                | FontRole::HyperlinkHover
                | FontRole::Label
                | FontRole::LabelLong => "medium",
                _ => "regular",
            };
            key.to_string()
        }),
        spacing: FontRoles::from_fn(|role| {
            let key = match role {
                FontRole::H1 | FontRole::H2 => "lg",
                _ => "base",
            };
            key.to_string()
        }),
        paragraph_spacing: FontRoles::from_fn(|_| "base".to_string()),
    }
}

/// Canonical dimension keys
pub const DIMENSION_KEYS: [u32; 23] = [
    0, 25, 50, 100, 150, 200, 300, 400, 500, 600, 700, 800, 900, 1000, 1100, 1200, 1300, 1400,
    1500, 1600, 1700, 1800, 1900,
];

fn size_primitives() -> SizePrimitives {
    SizePrimitives {
        dimension: DIMENSION_KEYS
            .iter()
            .map(|key| {
                // 1900 is the "pill" radius
                let px = if *key == 1900 {
                    9999.0
                } else {
                    *key as f32 * 4.0 / 100.0
                };
                (*key, px)
            })
            .collect(),
    }
}

fn bindings(entries: &[(&str, u32)]) -> IndexMap<String, u32> {
    entries
        .iter()
        .map(|(name, key)| (name.to_string(), *key))
        .collect()
}

fn size_bindings() -> SizeBindings {
    SizeBindings {
        border: BorderBindings {
            width: bindings(&[("xs", 25), ("sm", 50), ("md", 100)]),
            radius: bindings(&[
                ("none", 0),
                ("3xs", 50),
                ("2xs", 100),
                ("xs", 150),
                ("sm", 200),
                ("md", 300),
                ("lg", 400),
                ("xl", 500),
                ("2xl", 600),
                ("3xl", 700),
                ("4xl", 800),
                ("pill", 1900),
            ]),
        },
        spacing: bindings(&[
            ("4xs", 50),
            ("3xs", 100),
            ("2xs", 200),
            ("xs", 300),
            ("sm", 400),
            ("md", 500),
            ("lg", 600),
            ("xl", 800),
            ("2xl", 1000),
            ("3xl", 1100),
            ("4xl", 1300),
        ]),
    }
}

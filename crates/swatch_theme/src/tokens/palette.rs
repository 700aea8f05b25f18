//! Mode-specific palette tokens

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::color::{ColorRole, Foundation};
use crate::error::ThemeError;

/// Display mode a palette is selected for
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::UnknownMode(other.to_string())),
        }
    }
}

/// Palette sections
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Surface,
    Text,
    Icon,
    Border,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Surface,
        Section::Text,
        Section::Icon,
        Section::Border,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Surface => "surface",
            Self::Text => "text",
            Self::Icon => "icon",
            Self::Border => "border",
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownSection(s.to_string()))
    }
}

/// A palette token value: a role (with a scale) or a foundation
///
/// `color` stays a plain string so editors can hold names that do not
/// resolve yet; the resolver parses it into a [`ColorRef`](super::ColorRef).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorValue {
    pub color: String,
    /// Any integer is accepted; non-canonical steps are reported on resolve
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<i64>,
}

impl ColorValue {
    pub fn role(role: ColorRole, scale: u16) -> Self {
        Self {
            color: role.name().to_string(),
            scale: Some(i64::from(scale)),
        }
    }

    pub fn foundation(which: Foundation) -> Self {
        Self {
            color: which.reference().to_string(),
            scale: None,
        }
    }
}

/// Variant name -> value, e.g. `default`, `defaultHover`, `onColor`
pub type TokenGroup = IndexMap<String, ColorValue>;

/// Group name -> variants, e.g. `primary`, `page`, `onColor`
pub type PaletteSection = IndexMap<String, TokenGroup>;

/// The four sections of one mode's palette
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default)]
    pub surface: PaletteSection,
    #[serde(default)]
    pub text: PaletteSection,
    #[serde(default)]
    pub icon: PaletteSection,
    #[serde(default)]
    pub border: PaletteSection,
}

impl Palette {
    pub fn section(&self, section: Section) -> &PaletteSection {
        match section {
            Section::Surface => &self.surface,
            Section::Text => &self.text,
            Section::Icon => &self.icon,
            Section::Border => &self.border,
        }
    }

    pub fn section_mut(&mut self, section: Section) -> &mut PaletteSection {
        match section {
            Section::Surface => &mut self.surface,
            Section::Text => &mut self.text,
            Section::Icon => &mut self.icon,
            Section::Border => &mut self.border,
        }
    }

    /// Look up a single token
    pub fn token(&self, section: Section, group: &str, variant: &str) -> Option<&ColorValue> {
        self.section(section)
            .get(group)
            .and_then(|tokens| tokens.get(variant))
    }

    /// Every token as `(section, group, variant, value)`
    pub fn tokens(&self) -> impl Iterator<Item = (Section, &str, &str, &ColorValue)> + '_ {
        Section::ALL.iter().flat_map(move |section| {
            self.section(*section).iter().flat_map(move |(group, tokens)| {
                tokens
                    .iter()
                    .map(move |(variant, value)| (*section, group.as_str(), variant.as_str(), value))
            })
        })
    }

    /// Total number of tokens across all sections
    pub fn len(&self) -> usize {
        self.tokens().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Light and dark palette tables
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteModes {
    pub light: Palette,
    pub dark: Palette,
}

impl PaletteModes {
    pub fn new(light: Palette, dark: Palette) -> Self {
        Self { light, dark }
    }

    pub fn for_mode(&self, mode: Mode) -> &Palette {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    pub fn for_mode_mut(&mut self, mode: Mode) -> &mut Palette {
        match mode {
            Mode::Light => &mut self.light,
            Mode::Dark => &mut self.dark,
        }
    }
}

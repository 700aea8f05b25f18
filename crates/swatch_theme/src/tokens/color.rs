//! Color primitives and color role tokens

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ThemeError;

/// The canonical scale steps every ramp is indexed by
pub const SCALE_STEPS: [u16; 13] = [
    100, 150, 200, 300, 400, 500, 600, 700, 800, 900, 1000, 1100, 1200,
];

/// Returns true if `scale` is one of the canonical [`SCALE_STEPS`]
pub fn is_scale_step(scale: i64) -> bool {
    SCALE_STEPS.iter().any(|step| i64::from(*step) == scale)
}

/// A tonal range for one color family: scale step -> hex string
pub type Ramp = BTreeMap<u16, String>;

/// Builds a ramp from 13 hex values laid out in [`SCALE_STEPS`] order
pub fn ramp_from_steps(hexes: &[&str; 13]) -> Ramp {
    SCALE_STEPS
        .iter()
        .zip(hexes.iter())
        .map(|(scale, hex)| (*scale, (*hex).to_string()))
        .collect()
}

/// One of the two absolute colors outside the ramp system
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Foundation {
    White,
    Black,
}

impl Foundation {
    pub const ALL: [Foundation; 2] = [Foundation::White, Foundation::Black];

    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    /// The qualified reference form used by palette tokens
    pub fn reference(self) -> &'static str {
        match self {
            Self::White => "foundation.white",
            Self::Black => "foundation.black",
        }
    }

    /// Parses `white` / `black`, with or without the `foundation.` prefix
    pub fn parse(value: &str) -> Option<Self> {
        let name = value.strip_prefix("foundation.").unwrap_or(value);
        match name {
            "white" => Some(Self::White),
            "black" => Some(Self::Black),
            _ => None,
        }
    }
}

impl Display for Foundation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The two foundation colors
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foundations {
    pub white: String,
    pub black: String,
}

impl Foundations {
    pub fn get(&self, which: Foundation) -> &str {
        match which {
            Foundation::White => &self.white,
            Foundation::Black => &self.black,
        }
    }
}

impl Default for Foundations {
    fn default() -> Self {
        Self {
            white: "#FFFFFF".to_string(),
            black: "#000000".to_string(),
        }
    }
}

/// Raw color building blocks: named ramps plus foundations
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorPrimitives {
    /// Collection of ramps referenced by the color roles
    #[serde(default)]
    pub collection: IndexMap<String, Ramp>,
    #[serde(default)]
    pub foundations: Foundations,
}

impl ColorPrimitives {
    /// Look up a ramp by name
    pub fn ramp(&self, name: &str) -> Option<&Ramp> {
        self.collection.get(name)
    }

    /// Look up a single step of a named ramp
    pub fn step(&self, name: &str, scale: u16) -> Option<&str> {
        self.ramp(name)
            .and_then(|ramp| ramp.get(&scale))
            .map(String::as_str)
    }

    pub fn foundation(&self, which: Foundation) -> &str {
        self.foundations.get(which)
    }
}

/// Semantic color role keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Success,
    Error,
    Information,
    Warning,
    NeutralLight,
    NeutralDark,
}

impl ColorRole {
    pub const ALL: [ColorRole; 9] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Success,
        ColorRole::Error,
        ColorRole::Information,
        ColorRole::Warning,
        ColorRole::NeutralLight,
        ColorRole::NeutralDark,
    ];

    /// Stable name, as used in theme JSON and palette references
    pub fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Error => "error",
            Self::Information => "information",
            Self::Warning => "warning",
            Self::NeutralLight => "neutral-light",
            Self::NeutralDark => "neutral-dark",
        }
    }
}

impl Display for ColorRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorRole {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.name() == s)
            .ok_or_else(|| ThemeError::UnknownRole(s.to_string()))
    }
}

/// A palette-level color reference: a role or a foundation
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRef {
    Role(ColorRole),
    Foundation(Foundation),
}

impl ColorRef {
    /// Parses a palette `color` field. Role names win over foundation names.
    pub fn parse(value: &str) -> Option<Self> {
        if let Ok(role) = value.parse::<ColorRole>() {
            return Some(Self::Role(role));
        }
        Foundation::parse(value).map(Self::Foundation)
    }
}

/// Role -> color collection bindings (the alias layer)
///
/// Each role holds a ramp name from [`ColorPrimitives::collection`] or a
/// foundation name (`white`, `black`, `foundation.white`, `foundation.black`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorBindings {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub success: String,
    pub error: String,
    pub information: String,
    pub warning: String,
    #[serde(rename = "neutral-light")]
    pub neutral_light: String,
    #[serde(rename = "neutral-dark")]
    pub neutral_dark: String,
}

impl ColorBindings {
    /// Binds every role to the same target
    pub fn uniform(target: &str) -> Self {
        Self {
            primary: target.to_string(),
            secondary: target.to_string(),
            accent: target.to_string(),
            success: target.to_string(),
            error: target.to_string(),
            information: target.to_string(),
            warning: target.to_string(),
            neutral_light: target.to_string(),
            neutral_dark: target.to_string(),
        }
    }

    /// Get the binding for a role
    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Accent => &self.accent,
            ColorRole::Success => &self.success,
            ColorRole::Error => &self.error,
            ColorRole::Information => &self.information,
            ColorRole::Warning => &self.warning,
            ColorRole::NeutralLight => &self.neutral_light,
            ColorRole::NeutralDark => &self.neutral_dark,
        }
    }

    /// Rebind a role
    pub fn set(&mut self, role: ColorRole, target: impl Into<String>) {
        let slot = match role {
            ColorRole::Primary => &mut self.primary,
            ColorRole::Secondary => &mut self.secondary,
            ColorRole::Accent => &mut self.accent,
            ColorRole::Success => &mut self.success,
            ColorRole::Error => &mut self.error,
            ColorRole::Information => &mut self.information,
            ColorRole::Warning => &mut self.warning,
            ColorRole::NeutralLight => &mut self.neutral_light,
            ColorRole::NeutralDark => &mut self.neutral_dark,
        };
        *slot = target.into();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &str)> + '_ {
        ColorRole::ALL.iter().map(move |role| (*role, self.get(*role)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_steps_are_canonical() {
        assert!(is_scale_step(100));
        assert!(is_scale_step(150));
        assert!(is_scale_step(1200));
        assert!(!is_scale_step(50));
        assert!(!is_scale_step(250));
        assert!(!is_scale_step(1300));
    }

    #[test]
    fn ramp_from_steps_keys_every_step() {
        let hexes = ["#000000"; 13];
        let ramp = ramp_from_steps(&hexes);
        assert_eq!(ramp.len(), 13);
        assert!(SCALE_STEPS.iter().all(|s| ramp.contains_key(s)));
    }

    #[test]
    fn foundation_parse_accepts_both_forms() {
        assert_eq!(Foundation::parse("white"), Some(Foundation::White));
        assert_eq!(Foundation::parse("foundation.black"), Some(Foundation::Black));
        assert_eq!(Foundation::parse("foundation.grey"), None);
        assert_eq!(Foundation::parse("primary"), None);
    }

    #[test]
    fn color_ref_prefers_roles() {
        assert_eq!(
            ColorRef::parse("neutral-dark"),
            Some(ColorRef::Role(ColorRole::NeutralDark))
        );
        assert_eq!(
            ColorRef::parse("foundation.white"),
            Some(ColorRef::Foundation(Foundation::White))
        );
        assert_eq!(ColorRef::parse("brand"), None);
    }

    #[test]
    fn bindings_get_and_set() {
        let mut bindings = ColorBindings::uniform("gray");
        bindings.set(ColorRole::Primary, "brand");
        assert_eq!(bindings.get(ColorRole::Primary), "brand");
        assert_eq!(bindings.get(ColorRole::NeutralLight), "gray");
        assert_eq!(bindings.iter().count(), 9);
    }

    #[test]
    fn bindings_serialize_with_kebab_case_neutrals() {
        let json = serde_json::to_value(ColorBindings::uniform("gray")).unwrap();
        assert_eq!(json["neutral-light"], "gray");
        assert_eq!(json["neutral-dark"], "gray");
    }

    #[test]
    fn role_from_str_rejects_unknown() {
        assert_eq!("accent".parse::<ColorRole>().unwrap(), ColorRole::Accent);
        assert!("brand".parse::<ColorRole>().is_err());
    }
}

//! The full theme value

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::merge::PartialTheme;
use crate::presets::ThemePreset;
use crate::resolve::{resolve_theme, ResolvedTheme};
use crate::tokens::*;
use crate::validate::{validate, Issue};

/// The primitive store: raw, non-referential building blocks
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseConfig {
    #[serde(default)]
    pub font: FontTables,
    #[serde(default)]
    pub color: ColorPrimitives,
    #[serde(default)]
    pub size: SizePrimitives,
}

/// A complete theme: primitives, role bindings and both palettes
///
/// A theme is a plain value. It is changed by merging partial edits into
/// it (see [`merge`](crate::merge())) and swapped wholesale when another
/// theme becomes active.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub base: BaseConfig,
    pub color: ColorBindings,
    pub font: FontBindings,
    #[serde(default)]
    pub size: SizeBindings,
    pub palette: PaletteModes,
}

impl Theme {
    /// Parse a theme from its JSON persistence form
    pub fn from_json_str(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON
    pub fn to_json_string_pretty(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn palette(&self, mode: Mode) -> &Palette {
        self.palette.for_mode(mode)
    }

    /// Report every dangling or malformed reference
    pub fn validate(&self) -> Vec<Issue> {
        validate(self)
    }

    /// Resolve for a mode with lenient foundation handling
    pub fn resolve(&self, mode: Mode) -> ResolvedTheme {
        resolve_theme(mode, self)
    }

    /// The empty partial fragment: every section present, nothing set
    pub fn empty_partial() -> PartialTheme {
        let palette = serde_json::json!({ "surface": {}, "text": {}, "icon": {}, "border": {} });
        let value = serde_json::json!({
            "base": {},
            "color": {},
            "font": {
                "family": {},
                "size": {},
                "height": {},
                "weight": {},
                "spacing": {},
                "paragraphSpacing": {}
            },
            "size": { "border": { "width": {}, "radius": {} }, "spacing": {} },
            "palette": { "light": palette.clone(), "dark": palette }
        });
        match value {
            serde_json::Value::Object(map) => PartialTheme::from_map(map),
            _ => PartialTheme::new(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        ThemePreset::default().theme()
    }
}

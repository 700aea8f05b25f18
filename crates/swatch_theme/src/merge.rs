//! Structural deep merge of partial theme edits
//!
//! Editors commit partial fragments; the merge folds them into the current
//! theme without touching anything the fragment does not mention:
//!
//! - objects merge key by key, recursively
//! - scalars, arrays and `null` in the fragment replace the base value
//! - a key absent from the fragment leaves the base value alone
//!
//! The merge is keyed by JSON shape, not by field names, so the same code
//! serves the primitive store, the role bindings and the palettes. Whether
//! the merged theme's references resolve is the validator's concern.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ThemeError;
use crate::theme::Theme;

/// A partial theme: any subset of the theme's JSON shape
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartialTheme(Map<String, Value>);

impl PartialTheme {
    /// The empty fragment; merging it is a no-op
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Wrap a JSON value; the root must be an object
    pub fn from_value(value: Value) -> Result<Self, ThemeError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ThemeError::PartialNotObject {
                found: json_kind(&other),
            }),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ThemeError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Value> for PartialTheme {
    type Error = ThemeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Merge `partial` onto `base`, returning the combined value
pub fn merge_values(partial: &Value, base: &Value) -> Value {
    let mut merged = base.clone();
    merge_into(&mut merged, partial);
    merged
}

fn merge_into(target: &mut Value, partial: &Value) {
    match (target, partial) {
        (Value::Object(target), Value::Object(partial)) => {
            for (key, value) in partial {
                match target.get_mut(key) {
                    Some(existing) => merge_into(existing, value),
                    None => {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, partial) => *target = partial.clone(),
    }
}

/// Merge `partial` onto `base`, reporting fragments that break the theme shape
///
/// Dangling references are not shape errors; `{"color": {"primary": "nope"}}`
/// merges fine and is left for [`validate`](crate::validate()).
pub fn try_merge(partial: &PartialTheme, base: &Theme) -> Result<Theme, ThemeError> {
    if partial.is_empty() {
        return Ok(base.clone());
    }

    let mut merged = serde_json::to_value(base)?;
    merge_into(&mut merged, &partial.to_value());

    serde_json::from_value(merged).map_err(ThemeError::Shape)
}

/// Merge `partial` onto `base`; always yields a complete theme
///
/// A fragment that does not fit the theme shape (a string where a table is
/// expected, `null` on a required field) is dropped with a warning and the
/// base is returned unchanged.
pub fn merge(partial: &PartialTheme, base: &Theme) -> Theme {
    match try_merge(partial, base) {
        Ok(theme) => theme,
        Err(err) => {
            tracing::warn!("merge - dropping partial theme: {}", err);
            base.clone()
        }
    }
}

//! Dimension primitives and size role tokens

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Dimension key -> pixel value
pub type DimensionTable = BTreeMap<u32, f32>;

/// Size building blocks of the primitive store
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SizePrimitives {
    #[serde(default)]
    pub dimension: DimensionTable,
}

impl SizePrimitives {
    /// Look up a dimension in pixels
    pub fn dimension(&self, key: u32) -> Option<f32> {
        self.dimension.get(&key).copied()
    }
}

/// The three families of size roles
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SizeKind {
    BorderWidth,
    BorderRadius,
    Spacing,
}

impl SizeKind {
    pub const ALL: [SizeKind; 3] = [
        SizeKind::BorderWidth,
        SizeKind::BorderRadius,
        SizeKind::Spacing,
    ];

    /// Dotted path of the binding table inside `size`
    pub fn path(self) -> &'static str {
        match self {
            Self::BorderWidth => "border.width",
            Self::BorderRadius => "border.radius",
            Self::Spacing => "spacing",
        }
    }

    /// Prefix used when flattening into CSS custom properties
    pub fn css_name(self) -> &'static str {
        match self {
            Self::BorderWidth => "border-width",
            Self::BorderRadius => "border-radius",
            Self::Spacing => "spacing",
        }
    }
}

impl Display for SizeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Border size bindings
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderBindings {
    #[serde(default)]
    pub width: IndexMap<String, u32>,
    #[serde(default)]
    pub radius: IndexMap<String, u32>,
}

/// Size role -> dimension key bindings
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBindings {
    #[serde(default)]
    pub border: BorderBindings,
    #[serde(default)]
    pub spacing: IndexMap<String, u32>,
}

impl SizeBindings {
    pub fn table(&self, kind: SizeKind) -> &IndexMap<String, u32> {
        match kind {
            SizeKind::BorderWidth => &self.border.width,
            SizeKind::BorderRadius => &self.border.radius,
            SizeKind::Spacing => &self.spacing,
        }
    }

    pub fn table_mut(&mut self, kind: SizeKind) -> &mut IndexMap<String, u32> {
        match kind {
            SizeKind::BorderWidth => &mut self.border.width,
            SizeKind::BorderRadius => &mut self.border.radius,
            SizeKind::Spacing => &mut self.spacing,
        }
    }

    /// Every binding as `(kind, role name, dimension key)`
    pub fn iter(&self) -> impl Iterator<Item = (SizeKind, &str, u32)> + '_ {
        SizeKind::ALL.iter().flat_map(move |kind| {
            self.table(*kind)
                .iter()
                .map(move |(name, key)| (*kind, name.as_str(), *key))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_keys_round_trip_through_json() {
        let mut primitives = SizePrimitives::default();
        primitives.dimension.insert(100, 4.0);
        primitives.dimension.insert(1900, 9999.0);

        let json = serde_json::to_string(&primitives).unwrap();
        let back: SizePrimitives = serde_json::from_str(&json).unwrap();
        assert_eq!(back.dimension(100), Some(4.0));
        assert_eq!(back.dimension(1900), Some(9999.0));
        assert_eq!(back.dimension(125), None);
    }

    #[test]
    fn iter_walks_every_table_in_order() {
        let mut bindings = SizeBindings::default();
        bindings.border.width.insert("xs".into(), 25);
        bindings.border.radius.insert("pill".into(), 1900);
        bindings.spacing.insert("md".into(), 500);

        let all: Vec<_> = bindings.iter().collect();
        assert_eq!(
            all,
            vec![
                (SizeKind::BorderWidth, "xs", 25),
                (SizeKind::BorderRadius, "pill", 1900),
                (SizeKind::Spacing, "md", 500),
            ]
        );
    }
}

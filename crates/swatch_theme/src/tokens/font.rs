//! Typography primitives and font role tokens

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Typographic use-cases a theme binds fonts for
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontRole {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Body,
    BodyShort,
    BodyLong,
    Caption,
    Hyperlink,
    HyperlinkHover,
    Label,
    LabelLong,
}

impl FontRole {
    pub const ALL: [FontRole; 14] = [
        FontRole::H1,
        FontRole::H2,
        FontRole::H3,
        FontRole::H4,
        FontRole::H5,
        FontRole::H6,
        FontRole::Body,
        FontRole::BodyShort,
        FontRole::BodyLong,
        FontRole::Caption,
        FontRole::Hyperlink,
        FontRole::HyperlinkHover,
        FontRole::Label,
        FontRole::LabelLong,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::Body => "body",
            Self::BodyShort => "bodyShort",
            Self::BodyLong => "bodyLong",
            Self::Caption => "caption",
            Self::Hyperlink => "hyperlink",
            Self::HyperlinkHover => "hyperlinkHover",
            Self::Label => "label",
            Self::LabelLong => "labelLong",
        }
    }

    pub fn is_heading(self) -> bool {
        matches!(
            self,
            Self::H1 | Self::H2 | Self::H3 | Self::H4 | Self::H5 | Self::H6
        )
    }
}

impl Display for FontRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-role font attributes, each backed by its own primitive table
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontAttribute {
    Family,
    Size,
    Height,
    Weight,
    Spacing,
    ParagraphSpacing,
}

impl FontAttribute {
    pub const ALL: [FontAttribute; 6] = [
        FontAttribute::Family,
        FontAttribute::Size,
        FontAttribute::Height,
        FontAttribute::Weight,
        FontAttribute::Spacing,
        FontAttribute::ParagraphSpacing,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Size => "size",
            Self::Height => "height",
            Self::Weight => "weight",
            Self::Spacing => "spacing",
            Self::ParagraphSpacing => "paragraphSpacing",
        }
    }
}

impl Display for FontAttribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Font lookup tables of the primitive store
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontTables {
    #[serde(default)]
    pub family: IndexMap<String, String>,
    #[serde(default)]
    pub size: IndexMap<String, f32>,
    #[serde(default)]
    pub height: IndexMap<String, f32>,
    #[serde(default)]
    pub weight: IndexMap<String, f32>,
    #[serde(default)]
    pub spacing: IndexMap<String, f32>,
    #[serde(default)]
    pub paragraph_spacing: IndexMap<String, f32>,
}

impl FontTables {
    /// Look up a family name
    pub fn family(&self, key: &str) -> Option<&str> {
        self.family.get(key).map(String::as_str)
    }

    /// Look up a numeric attribute. `Family` is not numeric and yields `None`.
    pub fn number(&self, attribute: FontAttribute, key: &str) -> Option<f32> {
        let table = match attribute {
            FontAttribute::Family => return None,
            FontAttribute::Size => &self.size,
            FontAttribute::Height => &self.height,
            FontAttribute::Weight => &self.weight,
            FontAttribute::Spacing => &self.spacing,
            FontAttribute::ParagraphSpacing => &self.paragraph_spacing,
        };
        table.get(key).copied()
    }

    pub fn contains(&self, attribute: FontAttribute, key: &str) -> bool {
        match attribute {
            FontAttribute::Family => self.family.contains_key(key),
            _ => self.number(attribute, key).is_some(),
        }
    }
}

/// One value per font role
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontRoles<T> {
    pub h1: T,
    pub h2: T,
    pub h3: T,
    pub h4: T,
    pub h5: T,
    pub h6: T,
    pub body: T,
    pub body_short: T,
    pub body_long: T,
    pub caption: T,
    pub hyperlink: T,
    pub hyperlink_hover: T,
    pub label: T,
    pub label_long: T,
}

impl<T> FontRoles<T> {
    /// Builds the set by calling `f` for every role
    pub fn from_fn(mut f: impl FnMut(FontRole) -> T) -> Self {
        Self {
            h1: f(FontRole::H1),
            h2: f(FontRole::H2),
            h3: f(FontRole::H3),
            h4: f(FontRole::H4),
            h5: f(FontRole::H5),
            h6: f(FontRole::H6),
            body: f(FontRole::Body),
            body_short: f(FontRole::BodyShort),
            body_long: f(FontRole::BodyLong),
            caption: f(FontRole::Caption),
            hyperlink: f(FontRole::Hyperlink),
            hyperlink_hover: f(FontRole::HyperlinkHover),
            label: f(FontRole::Label),
            label_long: f(FontRole::LabelLong),
        }
    }

    pub fn get(&self, role: FontRole) -> &T {
        match role {
            FontRole::H1 => &self.h1,
            FontRole::H2 => &self.h2,
            FontRole::H3 => &self.h3,
            FontRole::H4 => &self.h4,
            FontRole::H5 => &self.h5,
            FontRole::H6 => &self.h6,
            FontRole::Body => &self.body,
            FontRole::BodyShort => &self.body_short,
            FontRole::BodyLong => &self.body_long,
            FontRole::Caption => &self.caption,
            FontRole::Hyperlink => &self.hyperlink,
            FontRole::HyperlinkHover => &self.hyperlink_hover,
            FontRole::Label => &self.label,
            FontRole::LabelLong => &self.label_long,
        }
    }

    pub fn get_mut(&mut self, role: FontRole) -> &mut T {
        match role {
            FontRole::H1 => &mut self.h1,
            FontRole::H2 => &mut self.h2,
            FontRole::H3 => &mut self.h3,
            FontRole::H4 => &mut self.h4,
            FontRole::H5 => &mut self.h5,
            FontRole::H6 => &mut self.h6,
            FontRole::Body => &mut self.body,
            FontRole::BodyShort => &mut self.body_short,
            FontRole::BodyLong => &mut self.body_long,
            FontRole::Caption => &mut self.caption,
            FontRole::Hyperlink => &mut self.hyperlink,
            FontRole::HyperlinkHover => &mut self.hyperlink_hover,
            FontRole::Label => &mut self.label,
            FontRole::LabelLong => &mut self.label_long,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FontRole, &T)> + '_ {
        FontRole::ALL.iter().map(move |role| (*role, self.get(*role)))
    }
}

/// Role -> font table key bindings, one table per attribute
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontBindings {
    pub family: FontRoles<String>,
    pub size: FontRoles<String>,
    pub height: FontRoles<String>,
    pub weight: FontRoles<String>,
    pub spacing: FontRoles<String>,
    pub paragraph_spacing: FontRoles<String>,
}

impl FontBindings {
    pub fn attribute(&self, attribute: FontAttribute) -> &FontRoles<String> {
        match attribute {
            FontAttribute::Family => &self.family,
            FontAttribute::Size => &self.size,
            FontAttribute::Height => &self.height,
            FontAttribute::Weight => &self.weight,
            FontAttribute::Spacing => &self.spacing,
            FontAttribute::ParagraphSpacing => &self.paragraph_spacing,
        }
    }

    pub fn attribute_mut(&mut self, attribute: FontAttribute) -> &mut FontRoles<String> {
        match attribute {
            FontAttribute::Family => &mut self.family,
            FontAttribute::Size => &mut self.size,
            FontAttribute::Height => &mut self.height,
            FontAttribute::Weight => &mut self.weight,
            FontAttribute::Spacing => &mut self.spacing,
            FontAttribute::ParagraphSpacing => &mut self.paragraph_spacing,
        }
    }

    /// The table key bound for `role` under `attribute`
    pub fn key(&self, attribute: FontAttribute, role: FontRole) -> &str {
        self.attribute(attribute).get(role)
    }
}

//! Saved themes with one current selection

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::theme::Theme;

/// An ordered set of identified themes plus the current selection
///
/// Invariants: ids are unique, the collection is never empty, and the
/// selection always points at a theme in the collection. Deserialization
/// checks all three.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredCollection", into = "StoredCollection")]
pub struct ThemeCollection {
    themes: Vec<Theme>,
    current: usize,
}

/// Persistence form: the current theme is stored by id
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCollection {
    themes: Vec<Theme>,
    current: String,
}

fn theme_id(theme: &Theme) -> Result<&str, ThemeError> {
    theme.id.as_deref().ok_or(ThemeError::MissingId)
}

impl TryFrom<StoredCollection> for ThemeCollection {
    type Error = ThemeError;

    fn try_from(stored: StoredCollection) -> Result<Self, Self::Error> {
        let mut themes = stored.themes.into_iter();
        let first = themes.next().ok_or(ThemeError::EmptyCollection)?;
        let mut collection = Self::new(first)?;
        for theme in themes {
            collection.add(theme)?;
        }
        collection.select(&stored.current)?;
        Ok(collection)
    }
}

impl From<ThemeCollection> for StoredCollection {
    fn from(collection: ThemeCollection) -> Self {
        Self {
            current: collection.current_id().to_string(),
            themes: collection.themes,
        }
    }
}

impl ThemeCollection {
    /// Start a collection with `default` selected
    pub fn new(default: Theme) -> Result<Self, ThemeError> {
        theme_id(&default)?;
        Ok(Self {
            themes: vec![default],
            current: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().filter_map(|theme| theme.id.as_deref())
    }

    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes
            .iter()
            .find(|theme| theme.id.as_deref() == Some(id))
    }

    fn position(&self, id: &str) -> Result<usize, ThemeError> {
        self.themes
            .iter()
            .position(|theme| theme.id.as_deref() == Some(id))
            .ok_or_else(|| ThemeError::ThemeNotFound(id.to_string()))
    }

    pub fn current_id(&self) -> &str {
        self.current().id.as_deref().unwrap_or_default()
    }

    /// The selected theme
    pub fn current(&self) -> &Theme {
        &self.themes[self.current]
    }

    /// Add a theme; its id must be new
    pub fn add(&mut self, theme: Theme) -> Result<(), ThemeError> {
        let id = theme_id(&theme)?;
        if self.get(id).is_some() {
            return Err(ThemeError::DuplicateTheme(id.to_string()));
        }
        tracing::debug!("ThemeCollection::add - {}", id);
        self.themes.push(theme);
        Ok(())
    }

    /// Replace the stored theme with the same id
    pub fn update(&mut self, theme: Theme) -> Result<(), ThemeError> {
        let index = self.position(theme_id(&theme)?)?;
        self.themes[index] = theme;
        Ok(())
    }

    /// Remove a theme, selecting a neighbour if it was current
    pub fn remove(&mut self, id: &str) -> Result<Theme, ThemeError> {
        let index = self.position(id)?;
        if self.themes.len() == 1 {
            return Err(ThemeError::LastTheme);
        }

        let removed = self.themes.remove(index);
        if index < self.current {
            self.current -= 1;
        } else if index == self.current {
            self.current = index.min(self.themes.len() - 1);
            tracing::debug!(
                "ThemeCollection::remove - {} was current, selected {}",
                id,
                self.current_id()
            );
        }
        Ok(removed)
    }

    /// Make `id` the current theme
    pub fn select(&mut self, id: &str) -> Result<&Theme, ThemeError> {
        self.current = self.position(id)?;
        Ok(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::ThemePreset;

    fn collection() -> ThemeCollection {
        let mut themes = ThemeCollection::new(ThemePreset::Ocean.theme()).unwrap();
        themes.add(ThemePreset::Ember.theme()).unwrap();
        themes
    }

    #[test]
    fn new_selects_the_default() {
        let themes = ThemeCollection::new(ThemePreset::Ocean.theme()).unwrap();
        assert_eq!(themes.current_id(), "ocean");
        assert_eq!(themes.len(), 1);
    }

    #[test]
    fn themes_need_an_id() {
        let mut anonymous = Theme::default();
        anonymous.id = None;
        assert!(matches!(
            ThemeCollection::new(anonymous.clone()),
            Err(ThemeError::MissingId)
        ));
        assert!(matches!(
            collection().add(anonymous),
            Err(ThemeError::MissingId)
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut themes = collection();
        assert!(matches!(
            themes.add(ThemePreset::Ember.theme()),
            Err(ThemeError::DuplicateTheme(id)) if id == "ember"
        ));
    }

    #[test]
    fn select_and_update() {
        let mut themes = collection();
        themes.select("ember").unwrap();
        assert_eq!(themes.current().id.as_deref(), Some("ember"));

        let mut edited = ThemePreset::Ember.theme();
        edited.color.accent = "violet".into();
        themes.update(edited).unwrap();
        assert_eq!(themes.current().color.accent, "violet");

        assert!(matches!(
            themes.select("forest"),
            Err(ThemeError::ThemeNotFound(_))
        ));
        assert!(matches!(
            themes.update(Theme::default().with_id("forest")),
            Err(ThemeError::ThemeNotFound(_))
        ));
    }

    #[test]
    fn removing_current_selects_another() {
        let mut themes = collection();
        themes.select("ember").unwrap();
        let removed = themes.remove("ember").unwrap();
        assert_eq!(removed.id.as_deref(), Some("ember"));
        assert_eq!(themes.current_id(), "ocean");
    }

    #[test]
    fn removing_other_keeps_selection() {
        let mut themes = collection();
        themes.remove("ember").unwrap();
        assert_eq!(themes.current_id(), "ocean");
        assert_eq!(themes.ids().collect::<Vec<_>>(), vec!["ocean"]);
    }

    #[test]
    fn last_theme_cannot_be_removed() {
        let mut themes = ThemeCollection::new(ThemePreset::Ocean.theme()).unwrap();
        assert!(matches!(themes.remove("ocean"), Err(ThemeError::LastTheme)));
    }

    #[test]
    fn removing_earlier_theme_keeps_current_selected() {
        let mut themes = collection();
        themes.select("ember").unwrap();
        themes.remove("ocean").unwrap();
        assert_eq!(themes.current_id(), "ember");
    }

    #[test]
    fn stored_selection_must_exist() {
        let json = serde_json::json!({
            "themes": [ThemePreset::Ocean.theme()],
            "current": "forest"
        });
        assert!(serde_json::from_value::<ThemeCollection>(json).is_err());
    }

    #[test]
    fn collection_round_trips_through_json() {
        let mut themes = collection();
        themes.select("ember").unwrap();
        let json = serde_json::to_string(&themes).unwrap();
        assert!(json.contains(r#""current":"ember""#));
        let back: ThemeCollection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, themes);
    }
}

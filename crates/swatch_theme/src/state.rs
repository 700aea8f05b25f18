//! Store-and-notify holder of the active theme
//!
//! ThemeStore owns the single current theme and display mode for an
//! application. Edits are merged in call order; every commit bumps a
//! generation counter that keys the resolved-theme cache, so readers get a
//! shared [`ResolvedTheme`] until the next change.
//!
//! The store is an ordinary value: create one per application (or per test)
//! and share it behind an `Arc` if several threads need it.

use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::error::ThemeError;
use crate::merge::{try_merge, PartialTheme};
use crate::resolve::{resolve_theme_with, ResolveOptions, ResolvedTheme};
use crate::theme::Theme;
use crate::tokens::Mode;
use crate::validate::{validate, Issue};

/// A change delivered to subscribers
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThemeEvent {
    /// The theme was edited or replaced
    ThemeChanged { generation: u64 },
    /// The display mode changed
    ModeChanged { mode: Mode },
}

/// Handle returned by [`ThemeStore::subscribe`]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct SubscriptionId(u64);

type Callback = Arc<dyn Fn(&ThemeEvent) + Send + Sync>;

/// Application-owned theme state
pub struct ThemeStore {
    /// The current full theme
    theme: RwLock<Theme>,

    /// Current display mode
    mode: RwLock<Mode>,

    /// Options used by `resolved()`
    options: ResolveOptions,

    /// Bumped on every theme commit
    generation: AtomicU64,

    /// Resolved theme per mode, tagged with the generation it was built from
    resolved: Mutex<FxHashMap<Mode, (u64, Arc<ResolvedTheme>)>>,

    subscribers: RwLock<Vec<(SubscriptionId, Callback)>>,
    next_subscription: AtomicU64,
}

impl ThemeStore {
    pub fn new(theme: Theme, mode: Mode) -> Self {
        Self::with_options(theme, mode, ResolveOptions::default())
    }

    pub fn with_options(theme: Theme, mode: Mode, options: ResolveOptions) -> Self {
        Self {
            theme: RwLock::new(theme),
            mode: RwLock::new(mode),
            options,
            generation: AtomicU64::new(0),
            resolved: Mutex::new(FxHashMap::default()),
            subscribers: RwLock::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
        }
    }

    // ========== Theme ==========

    /// A copy of the current theme
    pub fn theme(&self) -> Theme {
        self.theme
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Access the current theme without cloning
    pub fn with_theme<R>(&self, f: impl FnOnce(&Theme) -> R) -> R {
        f(&self.theme.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Number of commits since the store was created
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Merge a partial edit into the current theme
    ///
    /// Returns `Ok(false)` when the edit changes nothing. A fragment that does
    /// not fit the theme shape leaves the theme untouched.
    pub fn apply(&self, partial: &PartialTheme) -> Result<bool, ThemeError> {
        let generation = {
            let mut theme = self.theme.write().unwrap_or_else(PoisonError::into_inner);
            let merged = try_merge(partial, &theme)?;
            if merged == *theme {
                tracing::trace!("ThemeStore::apply - no change");
                return Ok(false);
            }
            *theme = merged;
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };

        tracing::debug!("ThemeStore::apply - committed generation {}", generation);
        self.notify(&ThemeEvent::ThemeChanged { generation });
        Ok(true)
    }

    /// Swap in another theme wholesale
    pub fn replace(&self, theme: Theme) {
        let generation = {
            let mut current = self.theme.write().unwrap_or_else(PoisonError::into_inner);
            tracing::debug!(
                "ThemeStore::replace - switching from {:?} to {:?}",
                current.id,
                theme.id
            );
            *current = theme;
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };
        self.notify(&ThemeEvent::ThemeChanged { generation });
    }

    /// Validate the current theme
    pub fn validate(&self) -> Vec<Issue> {
        self.with_theme(validate)
    }

    // ========== Mode ==========

    pub fn mode(&self) -> Mode {
        *self.mode.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_mode(&self, mode: Mode) {
        {
            let mut current = self.mode.write().unwrap_or_else(PoisonError::into_inner);
            if *current == mode {
                return;
            }
            tracing::debug!(
                "ThemeStore::set_mode - switching from {} to {}",
                *current,
                mode
            );
            *current = mode;
        }
        self.notify(&ThemeEvent::ModeChanged { mode });
    }

    /// Flip between light and dark, returning the new mode
    pub fn toggle_mode(&self) -> Mode {
        let mode = {
            let mut current = self.mode.write().unwrap_or_else(PoisonError::into_inner);
            *current = current.toggle();
            *current
        };
        tracing::debug!("ThemeStore::toggle_mode - now {}", mode);
        self.notify(&ThemeEvent::ModeChanged { mode });
        mode
    }

    // ========== Resolution ==========

    /// The current theme resolved for the current mode
    ///
    /// Cached per mode until the next commit.
    pub fn resolved(&self) -> Arc<ResolvedTheme> {
        self.resolved_for(self.mode())
    }

    /// The current theme resolved for `mode`
    pub fn resolved_for(&self, mode: Mode) -> Arc<ResolvedTheme> {
        let theme = self.theme.read().unwrap_or_else(PoisonError::into_inner);
        let generation = self.generation();

        let mut cache = self.resolved.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((built, resolved)) = cache.get(&mode) {
            if *built == generation {
                return Arc::clone(resolved);
            }
        }

        tracing::trace!(
            "ThemeStore::resolved_for - resolving generation {} for {}",
            generation,
            mode
        );
        let resolved = Arc::new(resolve_theme_with(mode, &theme, self.options));
        cache.insert(mode, (generation, Arc::clone(&resolved)));
        resolved
    }

    // ========== Subscribers ==========

    /// Register a callback for every subsequent change
    pub fn subscribe(
        &self,
        callback: impl Fn(&ThemeEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::SeqCst));
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(callback)));
        id
    }

    /// Remove a callback; returns false if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Call subscribers in registration order, outside of any lock
    fn notify(&self, event: &ThemeEvent) {
        let callbacks: Vec<Callback> = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in callbacks {
            callback(event);
        }
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default(), Mode::default())
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode())
            .field("generation", &self.generation())
            .field("options", &self.options)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

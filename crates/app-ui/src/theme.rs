//! Theme provider for Discovery Shell
//!
//! Two themes are supported, light and dark. The active theme is mirrored
//! onto a global presentation scope (the root class list) so visual
//! collaborators can branch on it.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{RootClassScope, ThemeName, ThemeStore};
//!
//! let scope = RootClassScope::new();
//! let mut store = ThemeStore::new(ThemeName::Light, Box::new(scope.clone()));
//!
//! assert!(store.set_theme(ThemeName::Dark));
//! assert!(!store.set_theme(ThemeName::Dark));
//! assert!(scope.has_class("dark"));
//! ```

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

// =============================================================================
// Theme Name
// =============================================================================

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeName {
    /// Get the color scheme name (also the root class)
    pub fn color_scheme(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }

    /// Check if this is the dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeName::Dark)
    }

    /// Get both themes
    pub fn all() -> [ThemeName; 2] {
        [ThemeName::Light, ThemeName::Dark]
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

// =============================================================================
// Presentation Scope
// =============================================================================

/// Global presentation marker that reflects the active theme
#[cfg_attr(test, mockall::automock)]
pub trait ThemeScope: Send + Sync {
    /// Mark the scope with `theme`; applying the same theme twice is harmless
    fn apply(&mut self, theme: ThemeName);
}

/// Root class list, the way a document root carries `light` or `dark`
///
/// Clones share the same class list, so a renderer can keep a clone while
/// the store owns another.
#[derive(Debug, Clone, Default)]
pub struct RootClassScope {
    classes: Arc<RwLock<BTreeSet<String>>>,
}

impl RootClassScope {
    /// Create an empty class list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class unrelated to theming
    pub fn add_class(&self, class: impl Into<String>) {
        self.classes.write().insert(class.into());
    }

    /// Check whether a class is present
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.read().contains(class)
    }

    /// Current classes, sorted
    pub fn classes(&self) -> Vec<String> {
        self.classes.read().iter().cloned().collect()
    }

    /// The theme currently marked on the root, if any
    pub fn active_theme(&self) -> Option<ThemeName> {
        let classes = self.classes.read();
        ThemeName::all()
            .into_iter()
            .find(|theme| classes.contains(theme.color_scheme()))
    }
}

impl ThemeScope for RootClassScope {
    fn apply(&mut self, theme: ThemeName) {
        let mut classes = self.classes.write();
        for name in ThemeName::all() {
            classes.remove(name.color_scheme());
        }
        classes.insert(theme.color_scheme().to_string());
    }
}

/// Scope that ignores theme changes, for headless use
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScope;

impl ThemeScope for NoopScope {
    fn apply(&mut self, _theme: ThemeName) {}
}

// =============================================================================
// Theme Store
// =============================================================================

/// Owner of the theme preference
pub struct ThemeStore {
    theme: ThemeName,
    scope: Box<dyn ThemeScope>,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ThemeName::default(), Box::new(NoopScope))
    }
}

impl ThemeStore {
    /// Create a store and mark the scope with the initial theme
    pub fn new(initial: ThemeName, mut scope: Box<dyn ThemeScope>) -> Self {
        scope.apply(initial);
        Self {
            theme: initial,
            scope,
        }
    }

    /// Set the current theme
    ///
    /// Returns `false`, without touching the scope, if `theme` is already
    /// active.
    pub fn set_theme(&mut self, theme: ThemeName) -> bool {
        if self.theme == theme {
            return false;
        }
        tracing::debug!(from = %self.theme, to = %theme, "Theme changed");
        self.theme = theme;
        self.scope.apply(theme);
        true
    }

    /// Get the current theme
    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    /// Check if the dark theme is active
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    // ==========================================================================
    // Theme Name Tests
    // ==========================================================================

    #[test]
    fn test_theme_name_default() {
        assert_eq!(ThemeName::default(), ThemeName::Light);
    }

    #[test]
    fn test_theme_name_from_str() {
        assert_eq!("light".parse::<ThemeName>(), Ok(ThemeName::Light));
        assert_eq!("DARK".parse::<ThemeName>(), Ok(ThemeName::Dark));
        assert!("dim".parse::<ThemeName>().is_err());
    }

    #[test]
    fn test_theme_name_display() {
        assert_eq!(ThemeName::Dark.to_string(), "Dark");
        assert_eq!(ThemeName::Dark.color_scheme(), "dark");
    }

    #[test]
    fn test_theme_name_serialization() {
        let json = serde_json::to_string(&ThemeName::Dark).unwrap();
        assert_eq!(json, "\"dark\"");

        let deserialized: ThemeName = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, ThemeName::Dark);
    }

    // ==========================================================================
    // Scope Tests
    // ==========================================================================

    #[test]
    fn test_root_class_scope_swaps_theme_class() {
        let mut scope = RootClassScope::new();
        scope.add_class("font-sans");

        scope.apply(ThemeName::Light);
        assert_eq!(scope.classes(), vec!["font-sans", "light"]);

        scope.apply(ThemeName::Dark);
        assert_eq!(scope.classes(), vec!["dark", "font-sans"]);
        assert_eq!(scope.active_theme(), Some(ThemeName::Dark));
    }

    #[test]
    fn test_root_class_scope_apply_is_idempotent() {
        let mut scope = RootClassScope::new();
        scope.apply(ThemeName::Dark);
        scope.apply(ThemeName::Dark);
        assert_eq!(scope.classes(), vec!["dark"]);
    }

    #[test]
    fn test_root_class_scope_clones_share_state() {
        let scope = RootClassScope::new();
        let mut writer = scope.clone();
        writer.apply(ThemeName::Light);
        assert!(scope.has_class("light"));
    }

    // ==========================================================================
    // Theme Store Tests
    // ==========================================================================

    #[test]
    fn test_store_applies_initial_theme() {
        let mut scope = MockThemeScope::new();
        scope
            .expect_apply()
            .with(eq(ThemeName::Light))
            .times(1)
            .return_const(());

        let store = ThemeStore::new(ThemeName::Light, Box::new(scope));
        assert_eq!(store.theme(), ThemeName::Light);
    }

    #[test]
    fn test_set_theme_applies_once_per_change() {
        let mut scope = MockThemeScope::new();
        scope
            .expect_apply()
            .with(eq(ThemeName::Light))
            .times(1)
            .return_const(());
        scope
            .expect_apply()
            .with(eq(ThemeName::Dark))
            .times(1)
            .return_const(());

        let mut store = ThemeStore::new(ThemeName::Light, Box::new(scope));
        assert!(store.set_theme(ThemeName::Dark));
        assert!(!store.set_theme(ThemeName::Dark));
        assert!(store.is_dark());
    }

    #[test]
    fn test_set_same_theme_is_noop() {
        let scope = RootClassScope::new();
        let mut store = ThemeStore::new(ThemeName::Light, Box::new(scope.clone()));

        assert!(!store.set_theme(ThemeName::Light));
        assert_eq!(store.theme(), ThemeName::Light);
        assert_eq!(scope.classes(), vec!["light"]);
    }

    #[test]
    fn test_set_theme_round_trip_updates_scope() {
        let scope = RootClassScope::new();
        let mut store = ThemeStore::new(ThemeName::Light, Box::new(scope.clone()));

        store.set_theme(ThemeName::Dark);
        assert_eq!(scope.active_theme(), Some(ThemeName::Dark));
        store.set_theme(ThemeName::Light);
        assert_eq!(scope.active_theme(), Some(ThemeName::Light));
        assert!(!scope.has_class("dark"));
    }

    #[test]
    fn test_default_store() {
        let store = ThemeStore::default();
        assert_eq!(store.theme(), ThemeName::Light);
        assert!(!store.is_dark());
    }
}

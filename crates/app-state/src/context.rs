//! Shell provider context
//!
//! Stores are handed to views explicitly through a [`ShellContext`] instead of
//! living in globals. Reading a store that was never provided is a wiring bug
//! and returns [`ContextError::MissingProvider`] rather than a default.

use app_ui::navigation::NavigationStore;
use app_ui::theme::{ThemeScope, ThemeStore};
use std::sync::Arc;

use crate::config::ShellConfig;
use crate::navigation::NavigationHandle;
use crate::theme::ThemeHandle;

/// Context errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    /// A store was read before it was provided
    #[error("{0} store was used before it was provided")]
    MissingProvider(&'static str),
}

/// Result type for context operations
pub type Result<T> = std::result::Result<T, ContextError>;

/// Container for the shell's stores
#[derive(Debug, Clone, Default)]
pub struct ShellContext {
    navigation: Option<NavigationHandle>,
    theme: Option<ThemeHandle>,
}

impl ShellContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fully wired context from config
    ///
    /// The theme is mirrored onto `scope`.
    pub fn from_config(config: &ShellConfig, scope: Box<dyn ThemeScope>) -> Self {
        let routes = Arc::new(config.routes.clone());
        let navigation = NavigationStore::new(routes, config.root_view.clone())
            .with_fallback_title(config.fallback_title.clone());
        let theme = ThemeStore::new(config.default_theme, scope);

        tracing::info!(
            root = %config.root_view,
            theme = %config.default_theme,
            routes = config.routes.len(),
            "Shell context initialized"
        );

        Self::new()
            .with_navigation(NavigationHandle::new(navigation))
            .with_theme(ThemeHandle::new(theme))
    }

    /// Provide the navigation store
    pub fn with_navigation(mut self, navigation: NavigationHandle) -> Self {
        self.provide_navigation(navigation);
        self
    }

    /// Provide the theme store
    pub fn with_theme(mut self, theme: ThemeHandle) -> Self {
        self.provide_theme(theme);
        self
    }

    /// Provide (or replace) the navigation store
    pub fn provide_navigation(&mut self, navigation: NavigationHandle) {
        self.navigation = Some(navigation);
    }

    /// Provide (or replace) the theme store
    pub fn provide_theme(&mut self, theme: ThemeHandle) {
        self.theme = Some(theme);
    }

    /// Get the navigation store
    pub fn navigation(&self) -> Result<&NavigationHandle> {
        self.navigation.as_ref().ok_or_else(|| missing("Navigation"))
    }

    /// Get the theme store
    pub fn theme(&self) -> Result<&ThemeHandle> {
        self.theme.as_ref().ok_or_else(|| missing("Theme"))
    }
}

fn missing(store: &'static str) -> ContextError {
    tracing::error!(store, "Store read before it was provided");
    ContextError::MissingProvider(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_ui::theme::{NoopScope, RootClassScope, ThemeName};

    #[test]
    fn test_empty_context_fails_loudly() {
        let context = ShellContext::new();
        assert_eq!(
            context.navigation().unwrap_err(),
            ContextError::MissingProvider("Navigation")
        );
        assert_eq!(
            context.theme().unwrap_err(),
            ContextError::MissingProvider("Theme")
        );
    }

    #[test]
    fn test_missing_provider_message() {
        let err = ShellContext::new().theme().unwrap_err();
        assert_eq!(err.to_string(), "Theme store was used before it was provided");
    }

    #[test]
    fn test_partial_context() {
        let context = ShellContext::new().with_theme(ThemeHandle::new(ThemeStore::default()));
        assert!(context.theme().is_ok());
        assert!(context.navigation().is_err());
    }

    #[test]
    fn test_from_default_config() {
        let scope = RootClassScope::new();
        let context = ShellContext::from_config(&ShellConfig::default(), Box::new(scope.clone()));

        let nav = context.navigation().unwrap();
        assert_eq!(nav.current_view(), "profile");
        assert_eq!(nav.view_title(), "Discovery");

        let theme = context.theme().unwrap();
        assert_eq!(theme.theme(), ThemeName::Light);
        assert!(scope.has_class("light"));
    }

    #[test]
    fn test_from_config_uses_fallback_title() {
        let config = ShellConfig::from_json_str(r#"{ "fallbackTitle": "Vista" }"#).unwrap();
        let context = ShellContext::from_config(&config, Box::new(NoopScope));

        let nav = context.navigation().unwrap();
        nav.navigate("notifications");
        assert_eq!(nav.view_title(), "Vista");
    }

    #[test]
    fn test_context_clones_share_stores() {
        let context = ShellContext::from_config(&ShellConfig::default(), Box::new(NoopScope));
        let view_context = context.clone();

        view_context.navigation().unwrap().navigate("learn");
        view_context.theme().unwrap().set_theme(ThemeName::Dark);

        assert_eq!(context.navigation().unwrap().current_view(), "learn");
        assert!(context.theme().unwrap().is_dark());
    }
}

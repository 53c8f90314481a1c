//! Shared theme state
//!
//! [`ThemeHandle`] wraps a [`ThemeStore`] and publishes the active theme to
//! subscribers whenever it changes.

use app_ui::theme::{ThemeName, ThemeStore};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::watch;

/// Cloneable handle to the theme store
#[derive(Clone)]
pub struct ThemeHandle {
    store: Arc<RwLock<ThemeStore>>,
    theme_tx: Arc<watch::Sender<ThemeName>>,
}

impl std::fmt::Debug for ThemeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeHandle")
            .field("theme", &self.theme())
            .finish()
    }
}

impl ThemeHandle {
    /// Wrap a store
    pub fn new(store: ThemeStore) -> Self {
        let (theme_tx, _) = watch::channel(store.theme());
        Self {
            store: Arc::new(RwLock::new(store)),
            theme_tx: Arc::new(theme_tx),
        }
    }

    /// Set the current theme (returns true if it changed)
    pub fn set_theme(&self, theme: ThemeName) -> bool {
        let changed = self.store.write().set_theme(theme);
        if changed {
            self.theme_tx.send_replace(theme);
        }
        changed
    }

    /// Get the current theme
    pub fn theme(&self) -> ThemeName {
        self.store.read().theme()
    }

    /// Check if the dark theme is active
    pub fn is_dark(&self) -> bool {
        self.theme().is_dark()
    }

    /// Subscribe to theme changes
    pub fn subscribe(&self) -> watch::Receiver<ThemeName> {
        self.theme_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_ui::theme::RootClassScope;

    #[test]
    fn test_set_theme_notifies_once() {
        let scope = RootClassScope::new();
        let handle = ThemeHandle::new(ThemeStore::new(ThemeName::Light, Box::new(scope.clone())));
        let mut rx = handle.subscribe();

        assert!(handle.set_theme(ThemeName::Dark));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), ThemeName::Dark);

        assert!(!handle.set_theme(ThemeName::Dark));
        assert!(!rx.has_changed().unwrap());
        assert_eq!(handle.theme(), ThemeName::Dark);
        assert!(scope.has_class("dark"));
    }

    #[test]
    fn test_clones_share_theme() {
        let handle = ThemeHandle::new(ThemeStore::default());
        let other = handle.clone();
        other.set_theme(ThemeName::Dark);
        assert!(handle.is_dark());
    }

    #[tokio::test]
    async fn test_subscriber_wakes_on_change() {
        let handle = ThemeHandle::new(ThemeStore::default());
        let mut rx = handle.subscribe();

        let writer = handle.clone();
        let task = tokio::spawn(async move {
            rx.changed().await.unwrap();
            let theme = *rx.borrow();
            theme
        });

        writer.set_theme(ThemeName::Dark);
        assert_eq!(task.await.unwrap(), ThemeName::Dark);
    }
}

//! Bottom navigation bar items
//!
//! Each tab is a top-level section. Selecting a tab resets the navigation
//! history to that section's view.

use serde::{Deserialize, Serialize};

use crate::routes::{IconRef, RouteId};

/// Main navigation tabs, in bar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTab {
    /// Notifications tab
    Notifications,
    /// Cart tab
    Cart,
    /// Discovery tab (center)
    #[default]
    Discovery,
    /// Delete tab
    Delete,
    /// Settings tab
    Settings,
}

impl NavigationTab {
    /// Get the view this tab resets to
    pub fn route_id(&self) -> RouteId {
        RouteId::from(self.route_str())
    }

    /// Get icon for this tab
    pub fn icon(&self) -> IconRef {
        match self {
            NavigationTab::Notifications => IconRef::Bell,
            NavigationTab::Cart => IconRef::Bag,
            NavigationTab::Discovery => IconRef::ProfileBrain,
            NavigationTab::Delete => IconRef::Trash,
            NavigationTab::Settings => IconRef::Settings,
        }
    }

    /// Get label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            NavigationTab::Notifications => "Notifications",
            NavigationTab::Cart => "Cart",
            NavigationTab::Discovery => "Discovery",
            NavigationTab::Delete => "Delete",
            NavigationTab::Settings => "Settings",
        }
    }

    /// Whether the label is drawn under the icon while the tab is active
    pub fn shows_label_when_active(&self) -> bool {
        matches!(self, NavigationTab::Discovery)
    }

    /// Check if this tab is highlighted for the given current view
    pub fn is_active(&self, current_view: &str) -> bool {
        self.route_str() == current_view
    }

    /// Find the tab that owns a view id
    pub fn from_route(route: &str) -> Option<NavigationTab> {
        Self::all().into_iter().find(|tab| tab.route_str() == route)
    }

    /// Get all tabs in order
    pub fn all() -> [NavigationTab; 5] {
        [
            NavigationTab::Notifications,
            NavigationTab::Cart,
            NavigationTab::Discovery,
            NavigationTab::Delete,
            NavigationTab::Settings,
        ]
    }

    fn route_str(&self) -> &'static str {
        match self {
            NavigationTab::Notifications => "notifications",
            NavigationTab::Cart => "cart",
            NavigationTab::Discovery => "profile",
            NavigationTab::Delete => "delete",
            NavigationTab::Settings => "settings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_order() {
        let labels: Vec<&str> = NavigationTab::all().iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            vec!["Notifications", "Cart", "Discovery", "Delete", "Settings"]
        );
    }

    #[test]
    fn test_discovery_is_default_and_center() {
        assert_eq!(NavigationTab::default(), NavigationTab::Discovery);
        assert_eq!(NavigationTab::all()[2], NavigationTab::Discovery);
        assert_eq!(NavigationTab::Discovery.route_id(), "profile");
    }

    #[test]
    fn test_from_route() {
        assert_eq!(NavigationTab::from_route("profile"), Some(NavigationTab::Discovery));
        assert_eq!(NavigationTab::from_route("cart"), Some(NavigationTab::Cart));
        assert_eq!(NavigationTab::from_route("chat"), None);
    }

    #[test]
    fn test_is_active() {
        assert!(NavigationTab::Settings.is_active("settings"));
        assert!(!NavigationTab::Settings.is_active("theme"));
    }

    #[test]
    fn test_only_discovery_shows_label() {
        let with_label: Vec<NavigationTab> = NavigationTab::all()
            .into_iter()
            .filter(|t| t.shows_label_when_active())
            .collect();
        assert_eq!(with_label, vec![NavigationTab::Discovery]);
    }

    #[test]
    fn test_tab_icons() {
        assert_eq!(NavigationTab::Notifications.icon(), IconRef::Bell);
        assert_eq!(NavigationTab::Cart.icon(), IconRef::Bag);
    }

    #[test]
    fn test_tab_serialization() {
        let json = serde_json::to_string(&NavigationTab::Discovery).unwrap();
        assert_eq!(json, "\"discovery\"");
    }
}

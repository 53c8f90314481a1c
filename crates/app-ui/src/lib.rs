//! Navigation and theming core for Discovery Shell
//!
//! This crate holds the state the shell's views read from: which view is on
//! screen, how the user got there, and which theme is active. Rendering is
//! left to the presentation layer.
//!
//! # Modules
//!
//! - [`routes`] - Route table: titles, parents and icons of every view
//! - [`navigation`] - History stack, breadcrumbs and navigation operations
//! - [`tabs`] - Bottom navigation bar items
//! - [`theme`] - Light/dark theme store and presentation scope
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use app_ui::navigation::NavigationStore;
//! use app_ui::routes::default_routes;
//!
//! let mut nav = NavigationStore::new(Arc::new(default_routes()), "profile");
//! nav.navigate("chat");
//! assert_eq!(nav.view_title(), "Chat");
//!
//! let trail = nav.breadcrumbs();
//! assert_eq!(trail.len(), 2);
//! nav.activate(&trail[0]);
//! assert_eq!(nav.current_view().as_str(), "profile");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod navigation;
pub mod routes;
pub mod tabs;
pub mod theme;

// Re-export commonly used types
pub use navigation::{
    Breadcrumb, BreadcrumbTrail, History, NavigationStore, Transition, DEFAULT_FALLBACK_TITLE,
};

pub use routes::{
    default_routes, IconRef, RouteConfig, RouteId, RouteTable, RouteTableBuilder,
    RouteTableError, DEFAULT_ROOT_VIEW, MAX_ROUTE_DEPTH,
};

pub use tabs::NavigationTab;

pub use theme::{NoopScope, RootClassScope, ThemeName, ThemeScope, ThemeStore};

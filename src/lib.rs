//! Discovery Shell
//!
//! State core for a mobile-styled shell: a bottom navigation bar, a
//! breadcrumb-driven navigation history and a light/dark theme. Views read
//! derived state from a [`ShellContext`] and send navigation requests back
//! through its handles.
//!
//! # Example
//!
//! ```rust
//! use discovery_shell::{RootClassScope, ShellConfig, ShellContext, ThemeName};
//!
//! let scope = RootClassScope::new();
//! let context = ShellContext::from_config(&ShellConfig::default(), Box::new(scope.clone()));
//!
//! let nav = context.navigation().unwrap();
//! nav.navigate("consulting");
//! assert_eq!(nav.view_title(), "Consulting");
//!
//! context.theme().unwrap().set_theme(ThemeName::Dark);
//! assert!(scope.has_class("dark"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_state::{
    ConfigError, ContextError, NavigationHandle, NavigationSnapshot, ShellConfig, ShellContext,
    ThemeHandle,
};
pub use app_ui::{
    default_routes, Breadcrumb, BreadcrumbTrail, IconRef, NavigationStore, NavigationTab,
    NoopScope, RootClassScope, RouteConfig, RouteId, RouteTable, RouteTableError, ThemeName,
    ThemeScope, ThemeStore, Transition,
};

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install a global tracing subscriber
///
/// `RUST_LOG` takes precedence over `default_filter`. Returns false if a
/// subscriber was already installed.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber).is_ok()
}

//! Application state for Discovery Shell
//!
//! This crate wires the navigation and theme stores into shareable handles,
//! publishes their changes to subscribers, and loads the shell configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod context;
pub mod navigation;
pub mod theme;

pub use config::{ConfigError, ShellConfig};
pub use context::{ContextError, ShellContext};
pub use navigation::{NavigationHandle, NavigationSnapshot};
pub use theme::ThemeHandle;

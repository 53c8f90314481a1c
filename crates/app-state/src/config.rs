//! Shell configuration
//!
//! Settings supplied once at process start: the view the shell opens on, the
//! initial theme, the title used for unknown views, and the route table.
//! Every field has a default, so an empty JSON object is a valid config.

use app_ui::navigation::DEFAULT_FALLBACK_TITLE;
use app_ui::routes::{default_routes, RouteId, RouteTable, DEFAULT_ROOT_VIEW};
use app_ui::theme::ThemeName;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config could not be parsed (includes invalid route tables)
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Root view is not in the route table
    #[error("Root view '{0}' is not defined in the route table")]
    UnknownRoot(RouteId),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    /// View the history starts on
    #[serde(default = "default_root_view")]
    pub root_view: RouteId,

    /// Theme applied at startup
    #[serde(default)]
    pub default_theme: ThemeName,

    /// Title for views missing from the route table
    #[serde(default = "default_fallback_title")]
    pub fallback_title: String,

    /// Route table
    #[serde(default = "default_routes")]
    pub routes: RouteTable,
}

fn default_root_view() -> RouteId {
    RouteId::from(DEFAULT_ROOT_VIEW)
}

fn default_fallback_title() -> String {
    DEFAULT_FALLBACK_TITLE.to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            root_view: default_root_view(),
            default_theme: ThemeName::default(),
            fallback_title: default_fallback_title(),
            routes: default_routes(),
        }
    }
}

impl ShellConfig {
    /// Parse and validate a config from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ShellConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading shell config");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check that the root view exists in the route table
    pub fn validate(&self) -> Result<()> {
        if !self.routes.contains(self.root_view.as_str()) {
            return Err(ConfigError::UnknownRoot(self.root_view.clone()));
        }
        Ok(())
    }

    /// Use a different route table
    pub fn with_routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    /// Start on a different view
    pub fn with_root_view(mut self, root: impl Into<RouteId>) -> Self {
        self.root_view = root.into();
        self
    }

    /// Start with a different theme
    pub fn with_theme(mut self, theme: ThemeName) -> Self {
        self.default_theme = theme;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.root_view, "profile");
        assert_eq!(config.default_theme, ThemeName::Light);
        assert_eq!(config.fallback_title, "View");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = ShellConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_json_overrides() {
        let json = r#"{
            "rootView": "home",
            "defaultTheme": "dark",
            "fallbackTitle": "Untitled",
            "routes": {
                "home": { "title": "Home" },
                "detail": { "title": "Detail", "parent": "home" }
            }
        }"#;
        let config = ShellConfig::from_json_str(json).unwrap();
        assert_eq!(config.root_view, "home");
        assert_eq!(config.default_theme, ThemeName::Dark);
        assert_eq!(config.fallback_title, "Untitled");
        assert_eq!(config.routes.len(), 2);
    }

    #[test]
    fn test_unknown_root_rejected() {
        let result = ShellConfig::from_json_str(r#"{ "rootView": "nowhere" }"#);
        assert!(matches!(result, Err(ConfigError::UnknownRoot(_))));
    }

    #[test]
    fn test_invalid_routes_rejected() {
        let json = r#"{
            "routes": {
                "a": { "title": "A", "parent": "b" },
                "b": { "title": "B", "parent": "a" }
            }
        }"#;
        assert!(matches!(
            ShellConfig::from_json_str(json),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_theme_rejected() {
        let result = ShellConfig::from_json_str(r#"{ "defaultTheme": "dim" }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "defaultTheme": "dark" }}"#).unwrap();

        let config = ShellConfig::from_path(file.path()).unwrap();
        assert_eq!(config.default_theme, ThemeName::Dark);
        assert_eq!(config.root_view, "profile");
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = ShellConfig::from_path(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_builders() {
        let config = ShellConfig::default()
            .with_root_view("settings")
            .with_theme(ThemeName::Dark);
        assert_eq!(config.root_view, "settings");
        assert!(config.validate().is_ok());
    }
}

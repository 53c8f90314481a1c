//! Route table for Discovery Shell
//!
//! This module holds the static view metadata that the navigation core reads:
//! - Route identifiers
//! - Per-route title, parent and symbolic icon
//! - Parent-chain validation (every chain must reach a root)
//! - The default table shipped with the shell

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

/// Maximum number of nodes allowed on any parent chain, root included
pub const MAX_ROUTE_DEPTH: usize = 16;

/// View the shell opens on
pub const DEFAULT_ROOT_VIEW: &str = "profile";

/// Route table errors
#[derive(Debug, thiserror::Error)]
pub enum RouteTableError {
    /// A parent chain loops back on itself
    #[error("Route parent chain starting at '{route}' contains a cycle")]
    Cycle {
        /// Route whose chain was being walked
        route: RouteId,
    },

    /// A parent chain is longer than [`MAX_ROUTE_DEPTH`]
    #[error("Route parent chain starting at '{route}' exceeds {max} levels")]
    TooDeep {
        /// Route whose chain was being walked
        route: RouteId,
        /// Configured maximum
        max: usize,
    },

    /// A route names a parent that is not in the table
    #[error("Route '{route}' has unknown parent '{parent}'")]
    UnknownParent {
        /// The child route
        route: RouteId,
        /// The missing parent
        parent: RouteId,
    },

    /// JSON could not be parsed into a table
    #[error("Failed to parse route table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for route table operations
pub type Result<T> = std::result::Result<T, RouteTableError>;

// =============================================================================
// Route Identifiers
// =============================================================================

/// Opaque identifier of a navigable view
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(String);

impl RouteId {
    /// Create a route id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RouteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for RouteId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RouteId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RouteId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Icons
// =============================================================================

/// Symbolic icon name, resolved to artwork by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconRef {
    /// Discovery brain
    ProfileBrain,
    /// Gear
    Settings,
    /// Open book
    Learn,
    /// Trash can
    Trash,
    /// Credit card
    Payment,
    /// Wallet
    Wallet,
    /// Shopping cart
    Cart,
    /// Notification bell
    Bell,
    /// Shopping bag
    Bag,
}

impl IconRef {
    /// Get the icon name used by the presentation layer
    pub fn name(&self) -> &'static str {
        match self {
            IconRef::ProfileBrain => "profile-brain",
            IconRef::Settings => "settings",
            IconRef::Learn => "learn",
            IconRef::Trash => "trash",
            IconRef::Payment => "payment",
            IconRef::Wallet => "wallet",
            IconRef::Cart => "cart",
            IconRef::Bell => "bell",
            IconRef::Bag => "bag",
        }
    }
}

// =============================================================================
// Route Configuration
// =============================================================================

/// Static metadata for one view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Display title
    pub title: String,
    /// Parent view, `None` for a root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<RouteId>,
    /// Icon shown in breadcrumbs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRef>,
}

impl RouteConfig {
    /// A top-level view
    pub fn root(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            parent: None,
            icon: None,
        }
    }

    /// A view nested under `parent`
    pub fn child(title: impl Into<String>, parent: impl Into<RouteId>) -> Self {
        Self {
            title: title.into(),
            parent: Some(parent.into()),
            icon: None,
        }
    }

    /// Attach an icon
    pub fn with_icon(mut self, icon: IconRef) -> Self {
        self.icon = Some(icon);
        self
    }
}

// =============================================================================
// Route Table
// =============================================================================

/// Mapping from route id to its metadata
///
/// Every parent chain is checked at construction, so walking toward the root
/// always terminates within [`MAX_ROUTE_DEPTH`] steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "HashMap<RouteId, RouteConfig>",
    into = "HashMap<RouteId, RouteConfig>"
)]
pub struct RouteTable {
    routes: HashMap<RouteId, RouteConfig>,
}

impl RouteTable {
    /// Build a table, validating every parent chain
    pub fn new(routes: HashMap<RouteId, RouteConfig>) -> Result<Self> {
        validate(&routes)?;
        Ok(Self { routes })
    }

    /// Start building a table
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// Parse a table from a JSON object of `{ id: { title, parent?, icon? } }`
    pub fn from_json(json: &str) -> Result<Self> {
        let routes: HashMap<RouteId, RouteConfig> = serde_json::from_str(json)?;
        Self::new(routes)
    }

    /// Get the metadata for a route
    pub fn get(&self, id: &str) -> Option<&RouteConfig> {
        self.routes.get(id)
    }

    /// Check whether a route is defined
    pub fn contains(&self, id: &str) -> bool {
        self.routes.contains_key(id)
    }

    /// Get a route's title
    pub fn title(&self, id: &str) -> Option<&str> {
        self.get(id).map(|r| r.title.as_str())
    }

    /// Get a route's icon
    pub fn icon(&self, id: &str) -> Option<IconRef> {
        self.get(id).and_then(|r| r.icon)
    }

    /// Get a route's parent
    pub fn parent(&self, id: &str) -> Option<&RouteId> {
        self.get(id).and_then(|r| r.parent.as_ref())
    }

    /// Check whether a route is defined and has no parent
    pub fn is_root(&self, id: &str) -> bool {
        self.get(id).is_some_and(|r| r.parent.is_none())
    }

    /// All top-level routes, sorted by id
    pub fn roots(&self) -> Vec<&RouteId> {
        let mut roots: Vec<&RouteId> = self
            .routes
            .iter()
            .filter(|(_, r)| r.parent.is_none())
            .map(|(id, _)| id)
            .collect();
        roots.sort();
        roots
    }

    /// Direct children of a route, sorted by id
    pub fn children(&self, id: &str) -> Vec<&RouteId> {
        let mut children: Vec<&RouteId> = self
            .routes
            .iter()
            .filter(|(_, r)| r.parent.as_ref().is_some_and(|p| p == id))
            .map(|(child, _)| child)
            .collect();
        children.sort();
        children
    }

    /// Ids from the root down to `id`
    ///
    /// Unknown ids produce an empty list.
    pub fn ancestry(&self, id: &str) -> Vec<RouteId> {
        let mut chain = Vec::new();
        let mut current = self.routes.get_key_value(id);

        while let Some((route_id, config)) = current {
            chain.push(route_id.clone());
            current = config
                .parent
                .as_ref()
                .and_then(|parent| self.routes.get_key_value(parent.as_str()));
        }

        chain.reverse();
        chain
    }

    /// Number of routes on the path from `id` to its root, inclusive
    pub fn route_depth(&self, id: &str) -> usize {
        self.ancestry(id).len()
    }

    /// Number of routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate over all routes
    pub fn iter(&self) -> impl Iterator<Item = (&RouteId, &RouteConfig)> {
        self.routes.iter()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        default_routes()
    }
}

impl TryFrom<HashMap<RouteId, RouteConfig>> for RouteTable {
    type Error = RouteTableError;

    fn try_from(routes: HashMap<RouteId, RouteConfig>) -> Result<Self> {
        Self::new(routes)
    }
}

impl From<RouteTable> for HashMap<RouteId, RouteConfig> {
    fn from(table: RouteTable) -> Self {
        table.routes
    }
}

/// Builder for [`RouteTable`]
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: HashMap<RouteId, RouteConfig>,
}

impl RouteTableBuilder {
    /// Add (or replace) a route
    pub fn route(mut self, id: impl Into<RouteId>, config: RouteConfig) -> Self {
        self.routes.insert(id.into(), config);
        self
    }

    /// Validate and build the table
    pub fn build(self) -> Result<RouteTable> {
        RouteTable::new(self.routes)
    }
}

fn validate(routes: &HashMap<RouteId, RouteConfig>) -> Result<()> {
    // Sorted so the reported error does not depend on hash order
    let mut ids: Vec<&RouteId> = routes.keys().collect();
    ids.sort();

    for start in ids {
        let mut chain = vec![start];
        let mut current = start;

        while let Some(parent) = routes.get(current).and_then(|r| r.parent.as_ref()) {
            if !routes.contains_key(parent) {
                return Err(RouteTableError::UnknownParent {
                    route: current.clone(),
                    parent: parent.clone(),
                });
            }
            if chain.contains(&parent) {
                return Err(RouteTableError::Cycle {
                    route: start.clone(),
                });
            }
            chain.push(parent);
            if chain.len() > MAX_ROUTE_DEPTH {
                return Err(RouteTableError::TooDeep {
                    route: start.clone(),
                    max: MAX_ROUTE_DEPTH,
                });
            }
            current = parent;
        }
    }

    Ok(())
}

// =============================================================================
// Default Table
// =============================================================================

/// The route table the shell ships with
pub fn default_routes() -> RouteTable {
    let entries = [
        // Bottom bar sections
        ("profile", RouteConfig::root("Discovery").with_icon(IconRef::ProfileBrain)),
        ("settings", RouteConfig::root("Settings").with_icon(IconRef::Settings)),
        ("learn", RouteConfig::root("Learn").with_icon(IconRef::Learn)),
        ("delete", RouteConfig::root("Delete").with_icon(IconRef::Trash)),
        ("wallet", RouteConfig::root("Wallet").with_icon(IconRef::Wallet)),
        // Discovery
        ("chat", RouteConfig::child("Chat", "profile")),
        ("consulting", RouteConfig::child("Consulting", "profile")),
        ("blog", RouteConfig::child("Blog", "profile")),
        // Wallet
        ("cart", RouteConfig::child("Shopping Cart", "wallet").with_icon(IconRef::Cart)),
        // Settings
        ("user-profile", RouteConfig::child("Profile", "settings")),
        ("theme", RouteConfig::child("Theme", "settings")),
        (
            "payment-methods",
            RouteConfig::child("Payment Methods", "settings").with_icon(IconRef::Payment),
        ),
    ];

    // Two levels, no cycles: checked by test_default_routes_are_valid
    RouteTable {
        routes: entries
            .into_iter()
            .map(|(id, config)| (RouteId::from(id), config))
            .collect(),
    }
}

// =============================================================================
// Tests
// =============================================================================

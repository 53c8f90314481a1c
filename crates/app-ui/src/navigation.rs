//! Navigation system for Discovery Shell
//!
//! This module provides the stack-based navigation core:
//! - History stack management (push, pop, reset, jump back)
//! - Derived current view and title
//! - Breadcrumb trails built from the route table
//! - Bottom bar tab selection

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::routes::{IconRef, RouteId, RouteTable};
use crate::tabs::NavigationTab;

/// Title used for views that are missing from the route table
pub const DEFAULT_FALLBACK_TITLE: &str = "View";

// =============================================================================
// History
// =============================================================================

/// Stack of visited views, bottom to top
///
/// Never empty: the top entry is the current view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    entries: Vec<RouteId>,
}

impl History {
    /// Create a history holding a single root view
    pub fn new(root: RouteId) -> Self {
        Self {
            entries: vec![root],
        }
    }

    /// Push a view unless it is already on top (returns true if pushed)
    pub fn push(&mut self, route: RouteId) -> bool {
        if *self.current() == route {
            return false;
        }
        self.entries.push(route);
        true
    }

    /// Pop the top view (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Replace the whole stack with a single view
    pub fn reset(&mut self, route: RouteId) {
        self.entries = vec![route];
    }

    /// Truncate to the most recent occurrence of `route`
    ///
    /// Returns the new depth, or `None` if `route` is not in the stack.
    pub fn truncate_to_last(&mut self, route: &str) -> Option<usize> {
        let index = self.entries.iter().rposition(|entry| entry == route)?;
        self.entries.truncate(index + 1);
        Some(self.entries.len())
    }

    /// Get the current (top) view
    pub fn current(&self) -> &RouteId {
        // `entries` is created non-empty and `pop` keeps one entry
        &self.entries[self.entries.len() - 1]
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Get all entries
    pub fn entries(&self) -> &[RouteId] {
        &self.entries
    }
}

// =============================================================================
// Breadcrumbs
// =============================================================================

/// One element of a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Route title
    pub label: String,
    /// Route icon, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRef>,
    /// Route this crumb stands for
    pub route: RouteId,
    /// Where activating this crumb jumps back to (`None` on the current view)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_activate: Option<RouteId>,
}

impl Breadcrumb {
    /// Check if the crumb can be activated
    pub fn is_navigable(&self) -> bool {
        self.on_activate.is_some()
    }
}

/// Root-to-current trail of breadcrumbs
pub type BreadcrumbTrail = Vec<Breadcrumb>;

// =============================================================================
// Navigation Store
// =============================================================================

/// Effect of a navigation operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    /// A view was pushed
    Pushed,
    /// The top view was popped
    Popped,
    /// History was replaced by a single view
    Reset,
    /// History was cut back to an earlier entry
    Truncated,
    /// Nothing changed
    Unchanged,
}

impl Transition {
    /// Check if the operation changed the history
    pub fn is_change(&self) -> bool {
        !matches!(self, Transition::Unchanged)
    }
}

/// Owner of the navigation history
///
/// Unknown route ids are accepted everywhere: they become views with the
/// fallback title and no breadcrumbs.
#[derive(Debug, Clone)]
pub struct NavigationStore {
    routes: Arc<RouteTable>,
    history: History,
    fallback_title: String,
}

impl NavigationStore {
    /// Create a store positioned at `root`
    pub fn new(routes: Arc<RouteTable>, root: impl Into<RouteId>) -> Self {
        let root = root.into();
        if !routes.contains(root.as_str()) {
            tracing::warn!(route = %root, "Starting navigation at a route missing from the table");
        }
        Self {
            routes,
            history: History::new(root),
            fallback_title: DEFAULT_FALLBACK_TITLE.to_string(),
        }
    }

    /// Override the title shown for unknown views
    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = title.into();
        self
    }

    /// Navigate to a view, pushing it onto the history
    ///
    /// Navigating to the current view is a no-op.
    pub fn navigate(&mut self, route: impl Into<RouteId>) -> Transition {
        let route = route.into();
        self.warn_if_unknown(&route);

        let transition = if self.history.push(route) {
            Transition::Pushed
        } else {
            Transition::Unchanged
        };
        self.trace("navigate", transition);
        transition
    }

    /// Go back one view; a no-op at the root
    pub fn go_back(&mut self) -> Transition {
        let transition = if self.history.pop() {
            Transition::Popped
        } else {
            Transition::Unchanged
        };
        self.trace("go_back", transition);
        transition
    }

    /// Replace the whole history with a single view
    pub fn reset_to(&mut self, route: impl Into<RouteId>) -> Transition {
        let route = route.into();
        self.warn_if_unknown(&route);

        let transition = if self.history.entries() == std::slice::from_ref(&route) {
            Transition::Unchanged
        } else {
            self.history.reset(route);
            Transition::Reset
        };
        self.trace("reset_to", transition);
        transition
    }

    /// Switch to a bottom bar section, discarding sub-navigation
    pub fn select_tab(&mut self, tab: NavigationTab) -> Transition {
        self.reset_to(tab.route_id())
    }

    /// Jump back to the most recent occurrence of `route` in the history
    ///
    /// Everything above that occurrence is discarded. Routes that are not in
    /// the history leave it unchanged.
    pub fn jump_to(&mut self, route: &str) -> Transition {
        let before = self.history.depth();
        let transition = match self.history.truncate_to_last(route) {
            Some(depth) if depth < before => Transition::Truncated,
            _ => Transition::Unchanged,
        };
        self.trace("jump_to", transition);
        transition
    }

    /// Activate a breadcrumb
    pub fn activate(&mut self, crumb: &Breadcrumb) -> Transition {
        match &crumb.on_activate {
            Some(target) => self.jump_to(target.as_str()),
            None => Transition::Unchanged,
        }
    }

    /// Breadcrumb trail from the root down to the current view
    pub fn breadcrumbs(&self) -> BreadcrumbTrail {
        let current = self.current_view();
        let ancestry = self.routes.ancestry(current.as_str());
        let last = ancestry.len().saturating_sub(1);

        ancestry
            .into_iter()
            .enumerate()
            .filter_map(|(index, route)| {
                let config = self.routes.get(route.as_str())?;
                Some(Breadcrumb {
                    label: config.title.clone(),
                    icon: config.icon,
                    on_activate: (index != last).then(|| route.clone()),
                    route,
                })
            })
            .collect()
    }

    /// Get the current view
    pub fn current_view(&self) -> &RouteId {
        self.history.current()
    }

    /// Get the current view's title, or the fallback title
    pub fn view_title(&self) -> &str {
        self.routes
            .title(self.current_view().as_str())
            .unwrap_or(self.fallback_title.as_str())
    }

    /// Check if the current view is nested under another view
    pub fn is_subview(&self) -> bool {
        self.routes.parent(self.current_view().as_str()).is_some()
    }

    /// Get the bottom bar tab for the current view, if it has one
    pub fn active_tab(&self) -> Option<NavigationTab> {
        NavigationTab::from_route(self.current_view().as_str())
    }

    /// Get the history stack
    pub fn history(&self) -> &[RouteId] {
        self.history.entries()
    }

    /// Get history depth
    pub fn depth(&self) -> usize {
        self.history.depth()
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    /// Get the route table
    pub fn routes(&self) -> &Arc<RouteTable> {
        &self.routes
    }

    /// Get the fallback title
    pub fn fallback_title(&self) -> &str {
        &self.fallback_title
    }

    fn warn_if_unknown(&self, route: &RouteId) {
        if !self.routes.contains(route.as_str()) {
            tracing::warn!(route = %route, "Navigating to a route missing from the table");
        }
    }

    fn trace(&self, operation: &'static str, transition: Transition) {
        tracing::debug!(
            operation,
            ?transition,
            current = %self.current_view(),
            depth = self.depth(),
            "Navigation"
        );
    }
}

// =============================================================================
// Tests
// =============================================================================

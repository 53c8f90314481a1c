//! Shared navigation state
//!
//! [`NavigationHandle`] wraps a [`NavigationStore`] so the many views that read
//! navigation state and the few that change it can share one store. Every
//! change publishes a fresh [`NavigationSnapshot`] to subscribers.

use app_ui::navigation::{Breadcrumb, BreadcrumbTrail, NavigationStore, Transition};
use app_ui::routes::RouteId;
use app_ui::tabs::NavigationTab;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;

/// Everything a view needs to render the current navigation position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSnapshot {
    /// View on top of the history
    pub current_view: RouteId,
    /// Title of the current view
    pub view_title: String,
    /// Root-to-current breadcrumb trail
    pub breadcrumbs: BreadcrumbTrail,
    /// Full history, bottom to top
    pub history: Vec<RouteId>,
    /// Whether a back action would do anything
    pub can_go_back: bool,
    /// Bottom bar tab to highlight
    pub active_tab: Option<NavigationTab>,
}

impl NavigationSnapshot {
    /// Capture the derived state of a store
    pub fn capture(store: &NavigationStore) -> Self {
        Self {
            current_view: store.current_view().clone(),
            view_title: store.view_title().to_string(),
            breadcrumbs: store.breadcrumbs(),
            history: store.history().to_vec(),
            can_go_back: store.can_go_back(),
            active_tab: store.active_tab(),
        }
    }
}

/// Cloneable handle to the navigation store
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use app_state::navigation::NavigationHandle;
/// use app_ui::navigation::NavigationStore;
/// use app_ui::routes::default_routes;
///
/// let nav = NavigationHandle::new(NavigationStore::new(Arc::new(default_routes()), "profile"));
/// let rx = nav.subscribe();
///
/// nav.navigate("blog");
/// assert_eq!(rx.borrow().view_title, "Blog");
/// ```
#[derive(Clone)]
pub struct NavigationHandle {
    store: Arc<RwLock<NavigationStore>>,
    snapshot_tx: Arc<watch::Sender<NavigationSnapshot>>,
}

impl std::fmt::Debug for NavigationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationHandle")
            .field("store", &*self.store.read())
            .finish()
    }
}

impl NavigationHandle {
    /// Wrap a store
    pub fn new(store: NavigationStore) -> Self {
        let (snapshot_tx, _) = watch::channel(NavigationSnapshot::capture(&store));
        Self {
            store: Arc::new(RwLock::new(store)),
            snapshot_tx: Arc::new(snapshot_tx),
        }
    }

    /// Navigate to a view
    pub fn navigate(&self, route: impl Into<RouteId>) -> Transition {
        self.update(|store| store.navigate(route))
    }

    /// Go back one view
    pub fn go_back(&self) -> Transition {
        self.update(NavigationStore::go_back)
    }

    /// Replace the history with a single view
    pub fn reset_to(&self, route: impl Into<RouteId>) -> Transition {
        self.update(|store| store.reset_to(route))
    }

    /// Switch to a bottom bar section
    pub fn select_tab(&self, tab: NavigationTab) -> Transition {
        self.update(|store| store.select_tab(tab))
    }

    /// Jump back to the most recent occurrence of a view
    pub fn jump_to(&self, route: &str) -> Transition {
        self.update(|store| store.jump_to(route))
    }

    /// Activate a breadcrumb
    pub fn activate(&self, crumb: &Breadcrumb) -> Transition {
        self.update(|store| store.activate(crumb))
    }

    /// Get the current view
    pub fn current_view(&self) -> RouteId {
        self.store.read().current_view().clone()
    }

    /// Get the current view's title
    pub fn view_title(&self) -> String {
        self.store.read().view_title().to_string()
    }

    /// Get the breadcrumb trail
    pub fn breadcrumbs(&self) -> BreadcrumbTrail {
        self.store.read().breadcrumbs()
    }

    /// Get the history stack
    pub fn history(&self) -> Vec<RouteId> {
        self.store.read().history().to_vec()
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.store.read().can_go_back()
    }

    /// Get the latest published snapshot
    pub fn snapshot(&self) -> NavigationSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Subscribe to navigation changes
    pub fn subscribe(&self) -> watch::Receiver<NavigationSnapshot> {
        self.snapshot_tx.subscribe()
    }

    fn update(&self, op: impl FnOnce(&mut NavigationStore) -> Transition) -> Transition {
        let mut store = self.store.write();
        let transition = op(&mut *store);

        if transition.is_change() {
            let snapshot = NavigationSnapshot::capture(&*store);
            drop(store);
            // Published even with no receivers so `snapshot()` stays current
            self.snapshot_tx.send_replace(snapshot);
        }

        transition
    }
}

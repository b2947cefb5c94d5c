//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::activity_list::ActivityList;
use crate::models::Activity;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Every activity, in display order
    pub activities: ActivityList,
}

impl AppState {
    pub fn new(activities: ActivityList) -> Self {
        Self { activities }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Append an activity to the end of the list
pub fn store_add_activity(store: &AppStore, activity: Activity) {
    store.activities().write().push(activity);
}

/// Remove the activity at `index`; out-of-range indices are ignored
pub fn store_remove_activity(store: &AppStore, index: usize) {
    if store.activities().write().remove_at(index).is_none() {
        log::debug!("delete ignored, no activity at index {}", index);
    }
}

/// Number of activities
pub fn store_activity_count(store: &AppStore) -> usize {
    store.activities().with(ActivityList::len)
}

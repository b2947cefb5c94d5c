//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::models::Activity;
use crate::store::{store_activity_count, store_add_activity, store_remove_activity, AppStore};

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Activity list store
    pub store: AppStore,
    /// Startup configuration
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        Self { store, config }
    }

    /// Append a new activity
    pub fn add_activity(&self, activity: Activity) {
        log::info!("adding activity {:?} ({})", activity.activity, activity.kind);
        store_add_activity(&self.store, activity);
    }

    /// Delete the activity currently shown at `index`
    pub fn remove_activity(&self, index: usize) {
        log::info!("deleting activity at index {}", index);
        store_remove_activity(&self.store, index);
    }

    /// Number of activities (tracked)
    pub fn activity_count(&self) -> usize {
        store_activity_count(&self.store)
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

//! Activity List App
//!
//! Root component: restores the saved list, provides context, and writes
//! the list back to storage whenever it changes.

use leptos::prelude::*;
use reactive_stores::Store;
use web_kv_store::{KeyValueStore, LocalStore, MemoryStore};

use crate::components::{ActivityForm, ActivityListView};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::persistence::{persist_on_change, ActivityRepository};
use crate::store::AppState;

/// Browser local storage, or a session-only store when the browser refuses
fn open_storage() -> Box<dyn KeyValueStore> {
    match LocalStore::open() {
        Ok(storage) => Box::new(storage),
        Err(err) => {
            log::warn!("local storage unavailable ({}), activities will not survive a reload", err);
            Box::new(MemoryStore::new())
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let repository = ActivityRepository::new(open_storage(), config.storage_key);
    let store = Store::new(AppState::new(repository.load()));

    // Provide context to all children
    provide_context(AppContext::new(store, config));

    // Persist after every change to the list
    persist_on_change(store, repository);

    view! {
        <main class="activity-app">
            <h1>"Todo List"</h1>
            <ActivityForm />
            <ActivityListView />
        </main>
    }
}

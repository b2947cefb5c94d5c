//! Activity Persistence
//!
//! Loads and saves the activity list under a single storage key.
//! Reading never fails: missing or unreadable data restores as empty.

use leptos::prelude::*;
use serde_json::Value;
use web_kv_store::{load_json, save_json, KeyValueStore, StoreResult};

use crate::activity_list::ActivityList;
use crate::models::Activity;
use crate::store::{AppStateStoreFields, AppStore};

/// Owner of the persisted activity list
pub struct ActivityRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ActivityRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Restore the saved list.
    ///
    /// Data that is absent or not a JSON array gives an empty list. Each
    /// record is decoded on its own: records that do not decode or that break
    /// the activity invariants are dropped, the rest keep their order.
    pub fn load(&self) -> ActivityList {
        match load_json::<Vec<Value>, _>(&self.store, &self.key) {
            Ok(Some(saved)) => {
                let total = saved.len();
                let kept: Vec<Activity> = saved
                    .into_iter()
                    .filter_map(|record| serde_json::from_value::<Activity>(record).ok())
                    .filter(Activity::is_valid)
                    .collect();
                if kept.len() < total {
                    log::warn!(
                        "dropped {} invalid saved activities from {:?}",
                        total - kept.len(),
                        self.key
                    );
                }
                log::info!("restored {} activities from {:?}", kept.len(), self.key);
                kept.into()
            }
            Ok(None) => {
                log::debug!("no saved activities under {:?}", self.key);
                ActivityList::new()
            }
            Err(err) => {
                log::warn!("ignoring saved activities under {:?}: {}", self.key, err);
                ActivityList::new()
            }
        }
    }

    /// Write the whole list, replacing what was stored
    pub fn save(&self, activities: &ActivityList) -> StoreResult<()> {
        save_json(&self.store, &self.key, activities)?;
        log::debug!("saved {} activities to {:?}", activities.len(), self.key);
        Ok(())
    }
}

/// Write the list back through `repository` whenever the store's
/// activities change (and once on creation). Write failures are logged.
pub fn persist_on_change<S: KeyValueStore + 'static>(store: AppStore, repository: ActivityRepository<S>) {
    Effect::new(move |_| {
        if let Err(err) = store.activities().with(|activities| repository.save(activities)) {
            log::warn!("could not save activities: {}", err);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityType;
    use crate::store::{store_add_activity, store_remove_activity, AppState};
    use any_spawner::Executor;
    use reactive_stores::Store;
    use web_kv_store::MemoryStore;

    const KEY: &str = "todos";

    fn make_activity(name: &str, price: f64, kind: ActivityType) -> Activity {
        Activity {
            activity: name.to_string(),
            price,
            kind,
            booking_required: price > 10.0,
            accessibility: 0.3,
        }
    }

    #[test]
    fn test_load_absent_is_empty() {
        let repo = ActivityRepository::new(MemoryStore::new(), KEY);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        for raw in ["not json", "{\"activity\":\"x\"}", "[{\"activity\":", ""] {
            let repo = ActivityRepository::new(MemoryStore::with_entry(KEY, raw), KEY);
            assert!(repo.load().is_empty(), "{raw:?} should restore as empty");
        }
    }

    #[test]
    fn test_save_then_load_preserves_order_and_fields() {
        let store = MemoryStore::new();
        let repo = ActivityRepository::new(store.clone(), KEY);

        let list: ActivityList = vec![
            make_activity("Bake bread", 12.0, ActivityType::Cooking),
            make_activity("Run", 0.0, ActivityType::Recreational),
            make_activity("Fix shelf", 3.25, ActivityType::Diy),
        ]
        .into();
        repo.save(&list).unwrap();

        let reopened = ActivityRepository::new(store, KEY);
        assert_eq!(reopened.load(), list);
    }

    #[test]
    fn test_save_writes_json_array_under_key() {
        let store = MemoryStore::new();
        let repo = ActivityRepository::new(store.clone(), KEY);
        repo.save(&ActivityList::from(vec![make_activity("Run", 0.0, ActivityType::Recreational)])).unwrap();

        let raw = store.get(KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["type"], "recreational");
        assert_eq!(json[0]["bookingRequired"], false);
    }

    #[test]
    fn test_save_empty_list_overwrites() {
        let store = MemoryStore::new();
        let repo = ActivityRepository::new(store.clone(), KEY);
        repo.save(&ActivityList::from(vec![make_activity("Run", 0.0, ActivityType::Recreational)])).unwrap();
        repo.save(&ActivityList::new()).unwrap();

        assert_eq!(store.get(KEY).unwrap().as_deref(), Some("[]"));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_load_drops_invalid_records() {
        let raw = r#"[
            {"activity":"Keep","price":1,"type":"music","bookingRequired":true,"accessibility":0.9},
            {"activity":"   ","price":1,"type":"music","bookingRequired":false,"accessibility":0.5},
            {"activity":"Negative","price":-4,"type":"social","bookingRequired":false,"accessibility":0.5},
            {"activity":"Also keep","price":0,"type":"busywork"}
        ]"#;
        let repo = ActivityRepository::new(MemoryStore::with_entry(KEY, raw), KEY);

        let loaded = repo.load();
        let names: Vec<&str> = loaded.iter().map(|a| a.activity.as_str()).collect();
        assert_eq!(names, vec!["Keep", "Also keep"]);
        assert_eq!(loaded.as_slice()[1].accessibility, 0.5);
    }

    #[test]
    fn test_load_keeps_records_beside_undecodable_ones() {
        let raw = r#"[
            {"activity":"Keep","price":1,"type":"music","bookingRequired":true,"accessibility":0.9},
            {"activity":"Legacy","price":2,"type":"sports","bookingRequired":false,"accessibility":0.5},
            {"activity":"No price","price":null,"type":"social"},
            7,
            {"activity":"Also keep","price":0,"type":"busywork"}
        ]"#;
        let store = MemoryStore::with_entry(KEY, raw);
        let repo = ActivityRepository::new(store.clone(), KEY);

        let loaded = repo.load();
        let names: Vec<&str> = loaded.iter().map(|a| a.activity.as_str()).collect();
        assert_eq!(names, vec!["Keep", "Also keep"]);

        // writing back what was restored keeps the good records
        repo.save(&loaded).unwrap();
        assert_eq!(ActivityRepository::new(store, KEY).load(), loaded);
    }

    fn stored_list(storage: &MemoryStore) -> ActivityList {
        let raw = storage.get(KEY).unwrap().expect("list was written");
        serde_json::from_str(&raw).unwrap()
    }

    #[tokio::test]
    async fn test_list_written_back_after_each_change() {
        _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        tokio::task::LocalSet::new()
            .run_until(async {
                let storage = MemoryStore::new();
                let store = Store::new(AppState::default());
                persist_on_change(store, ActivityRepository::new(storage.clone(), KEY));

                Executor::tick().await;
                assert!(stored_list(&storage).is_empty());

                store_add_activity(&store, make_activity("Run", 0.0, ActivityType::Recreational));
                Executor::tick().await;
                assert_eq!(stored_list(&storage), store.activities().get_untracked());

                store_add_activity(&store, make_activity("Bake", 12.0, ActivityType::Cooking));
                store_add_activity(&store, make_activity("Sing", 5.0, ActivityType::Music));
                Executor::tick().await;
                assert_eq!(stored_list(&storage).len(), 3);

                store_remove_activity(&store, 1);
                Executor::tick().await;
                let names: Vec<String> =
                    stored_list(&storage).iter().map(|a| a.activity.clone()).collect();
                assert_eq!(names, vec!["Run", "Sing"]);
                assert_eq!(stored_list(&storage), store.activities().get_untracked());
            })
            .await;
    }
}

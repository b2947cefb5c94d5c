//! Activity List View Component
//!
//! Item count followed by one card per activity.

use leptos::prelude::*;

use crate::components::ActivityCard;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Count line and activity cards
#[component]
pub fn ActivityListView() -> impl IntoView {
    let ctx = use_app_context();
    let on_delete = Callback::new(move |index: usize| ctx.remove_activity(index));

    // Rebuilt on every change so each card carries its current index
    let cards = move || {
        ctx.store.activities().with(|activities| {
            activities
                .iter()
                .cloned()
                .enumerate()
                .map(|(index, activity)| view! { <ActivityCard index=index activity=activity on_delete=on_delete /> })
                .collect_view()
        })
    };

    view! {
        <p class="item-count">"Todo items: " <strong>{move || ctx.activity_count()}</strong></p>
        <ul class="activity-list">{cards}</ul>
    }
}

//! Activity Card Component
//!
//! One list entry showing every field of an activity plus a delete button.

use leptos::prelude::*;

use crate::models::Activity;

/// Price as shown on a card, e.g. "RM 12.5"
pub fn format_price(price: f64) -> String {
    format!("RM {}", price)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[component]
pub fn ActivityCard(
    /// Current position in the list
    index: usize,
    activity: Activity,
    #[prop(into)] on_delete: Callback<usize>,
) -> impl IntoView {
    let Activity {
        activity: name,
        price,
        kind,
        booking_required,
        accessibility,
    } = activity;

    view! {
        <li class="activity-card">
            <div class="activity-fields">
                <span><strong>"Activity:"</strong> " " {name}</span>
                <span><strong>"Price:"</strong> " " {format_price(price)}</span>
                <span><strong>"Type:"</strong> " " {kind.label()}</span>
                <span><strong>"Booking Required:"</strong> " " {yes_no(booking_required)}</span>
                <span><strong>"Accessibility:"</strong> " " {accessibility.to_string()}</span>
            </div>
            <button class="delete-btn" on:click=move |_| on_delete.run(index)>
                "Delete"
            </button>
        </li>
    }
}

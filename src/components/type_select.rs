//! Type Select Component
//!
//! Activity type dropdown with a non-selectable placeholder.

use leptos::prelude::*;

use crate::models::{ActivityType, ACTIVITY_TYPES};

/// Placeholder shown until a type is picked; its value never parses as a type
pub const TYPE_PLACEHOLDER: (&str, &str) = ("", "Select Type");

/// Type dropdown for activities
#[component]
pub fn TypeSelect(
    #[prop(into)] selected: Signal<Option<ActivityType>>,
    #[prop(into)] invalid: Signal<bool>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    let (placeholder_value, placeholder_label) = TYPE_PLACEHOLDER;
    view! {
        <select
            class=move || if invalid.get() { "field-input invalid" } else { "field-input" }
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            <option
                value=placeholder_value
                disabled=true
                prop:selected=move || selected.get().is_none()
            >
                {placeholder_label}
            </option>
            {ACTIVITY_TYPES.iter().map(|kind| {
                let kind = *kind;
                view! {
                    <option
                        value=kind.as_str()
                        prop:selected=move || selected.get() == Some(kind)
                    >
                        {kind.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

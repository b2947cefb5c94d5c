//! Activity Form Component
//!
//! Form for adding activities. Errors show under each field after a failed
//! submit; a banner confirms each successful one for a few seconds.

use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::TypeSelect;
use crate::context::use_app_context;
use crate::form::{FieldChange, FormDraft};

fn input_class(invalid: bool) -> &'static str {
    if invalid {
        "field-input invalid"
    } else {
        "field-input"
    }
}

fn price_hint(raw: &str) -> &'static str {
    if raw.trim().is_empty() {
        "Price is required"
    } else {
        "Price must be a number of 0 or more"
    }
}

/// Form for creating new activities
#[component]
pub fn ActivityForm() -> impl IntoView {
    let ctx = use_app_context();

    let draft = RwSignal::new(FormDraft::default());
    // Pending banner timer; dropping it cancels the callback
    let banner_timer = StoredValue::new_local(None::<Timeout>);
    on_cleanup(move || {
        banner_timer.try_update_value(|timer| timer.take());
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(outcome) = draft.try_update(FormDraft::submit) else {
            return;
        };
        match outcome {
            Ok(activity) => {
                ctx.add_activity(activity);
                let token = draft.with_untracked(|d| d.banner_token);
                let timeout = Timeout::new(ctx.config.success_banner_millis(), move || {
                    draft.try_update(|d| d.dismiss_success(token));
                });
                banner_timer.set_value(Some(timeout));
            }
            Err(errors) => log::debug!("submit rejected: {:?}", errors),
        }
    };

    let edit = move |change: FieldChange| draft.update(|d| d.apply(change));

    view! {
        <form class="activity-form" on:submit=on_submit>
            <div class="field">
                <input
                    type="text"
                    placeholder="Activity"
                    class=move || input_class(draft.with(|d| d.errors.activity))
                    prop:value=move || draft.with(|d| d.activity.clone())
                    on:input=move |ev| edit(FieldChange::Activity(event_target_value(&ev)))
                />
                <Show when=move || draft.with(|d| d.errors.activity)>
                    <p class="field-error">"Activity is required"</p>
                </Show>
            </div>

            <div class="field">
                <input
                    type="number"
                    min="0"
                    step="any"
                    placeholder="Price"
                    class=move || input_class(draft.with(|d| d.errors.price))
                    prop:value=move || draft.with(|d| d.price.clone())
                    on:input=move |ev| edit(FieldChange::Price(event_target_value(&ev)))
                />
                <Show when=move || draft.with(|d| d.errors.price)>
                    <p class="field-error">{move || draft.with(|d| price_hint(&d.price))}</p>
                </Show>
            </div>

            <div class="field">
                <TypeSelect
                    selected=Signal::derive(move || draft.with(|d| d.kind))
                    invalid=Signal::derive(move || draft.with(|d| d.errors.kind))
                    on_change=move |value: String| edit(FieldChange::Type(value))
                />
                <Show when=move || draft.with(|d| d.errors.kind)>
                    <p class="field-error">"Type is required"</p>
                </Show>
            </div>

            <label class="checkbox-row">
                <input
                    type="checkbox"
                    prop:checked=move || draft.with(|d| d.booking_required)
                    on:change=move |ev| edit(FieldChange::BookingRequired(event_target_checked(&ev)))
                />
                "Booking Required"
            </label>

            <label class="slider-row">
                "Accessibility:"
                <input
                    type="range"
                    min="0"
                    max="1"
                    step="0.1"
                    prop:value=move || draft.with(|d| d.accessibility.to_string())
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                            edit(FieldChange::Accessibility(value));
                        }
                    }
                />
                <span class="slider-value">{move || draft.with(|d| d.accessibility.to_string())}</span>
            </label>

            <button type="submit">"Add"</button>

            <Show when=move || draft.with(|d| d.success)>
                <p class="success-message">"Todo item added successfully!"</p>
            </Show>
        </form>
    }
}

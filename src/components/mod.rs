//! UI Components
//!
//! Leptos components for the activity form and list.

mod activity_form;
mod type_select;
mod activity_card;
mod activity_list_view;

pub use activity_form::ActivityForm;
pub use type_select::TypeSelect;
pub use activity_card::ActivityCard;
pub use activity_list_view::ActivityListView;

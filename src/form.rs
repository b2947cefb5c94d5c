//! Activity Form State
//!
//! Draft held by the form while the user types. Validation only runs on
//! submit; editing a validated field clears its error flag straight away.

use crate::models::{Activity, ActivityType, DEFAULT_ACCESSIBILITY};

/// Per-field validation flags (`true` = show the error)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub activity: bool,
    pub price: bool,
    pub kind: bool,
}

impl FieldErrors {
    pub fn any(&self) -> bool {
        self.activity || self.price || self.kind
    }
}

/// A single edit coming from one of the form inputs
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    Activity(String),
    /// Raw number-input text, `""` when empty
    Price(String),
    /// Raw select value, `""` for the placeholder
    Type(String),
    BookingRequired(bool),
    Accessibility(f64),
}

/// In-progress form input
#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft {
    pub activity: String,
    pub price: String,
    pub kind: Option<ActivityType>,
    pub booking_required: bool,
    pub accessibility: f64,
    pub errors: FieldErrors,
    /// Success banner visible
    pub success: bool,
    /// Bumped on every successful submit; a banner timer only clears the
    /// banner raised by the submit it was started for
    pub banner_token: u32,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self {
            activity: String::new(),
            price: String::new(),
            kind: None,
            booking_required: false,
            accessibility: DEFAULT_ACCESSIBILITY,
            errors: FieldErrors::default(),
            success: false,
            banner_token: 0,
        }
    }
}

impl FormDraft {
    /// Apply one input edit
    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::Activity(value) => {
                self.activity = value;
                self.errors.activity = false;
            }
            FieldChange::Price(value) => {
                self.price = value;
                self.errors.price = false;
            }
            FieldChange::Type(value) => {
                self.kind = value.parse().ok();
                self.errors.kind = false;
            }
            FieldChange::BookingRequired(checked) => self.booking_required = checked,
            FieldChange::Accessibility(value) => self.accessibility = snap_accessibility(value),
        }
    }

    /// Current validity of the three required fields
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            activity: self.activity.trim().is_empty(),
            price: parse_price(&self.price).is_none(),
            kind: self.kind.is_none(),
        }
    }

    /// Validate and, when everything is filled in, turn the draft into a record.
    ///
    /// Always overwrites `errors`. On success the draft is reset to defaults
    /// with the success banner raised; on failure the typed input is kept.
    pub fn submit(&mut self) -> Result<Activity, FieldErrors> {
        self.errors = self.validate();

        match (parse_price(&self.price), self.kind) {
            (Some(price), Some(kind)) if !self.errors.any() => {
                let activity = Activity {
                    activity: self.activity.trim().to_string(),
                    price,
                    kind,
                    booking_required: self.booking_required,
                    accessibility: self.accessibility,
                };
                *self = Self {
                    success: true,
                    banner_token: self.banner_token.wrapping_add(1),
                    ..Self::default()
                };
                Ok(activity)
            }
            _ => Err(self.errors),
        }
    }

    /// Hide the success banner raised by the submit that produced `token`.
    /// Stale tokens from earlier submits leave a newer banner up.
    pub fn dismiss_success(&mut self, token: u32) {
        if token == self.banner_token {
            self.success = false;
        }
    }
}

/// Parse number-input text into a price. `None` for empty text, anything
/// that is not a number, and negative values. Zero is a valid price.
pub fn parse_price(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
        // "-0" parses to negative zero
        .map(|price| if price == 0.0 { 0.0 } else { price })
}

/// Clamp into [0, 1] and round to one decimal
pub fn snap_accessibility(value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_ACCESSIBILITY;
    }
    (value.clamp(0.0, 1.0) * 10.0).round() / 10.0
}

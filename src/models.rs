//! Frontend Models
//!
//! The persisted activity record and its type enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Accessibility assigned when none is given
pub const DEFAULT_ACCESSIBILITY: f64 = 0.5;

/// Activity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Education,
    Recreational,
    Social,
    Diy,
    Charity,
    Cooking,
    Relaxation,
    Music,
    Busywork,
}

/// Every type, in select-box order
pub const ACTIVITY_TYPES: [ActivityType; 9] = [
    ActivityType::Education,
    ActivityType::Recreational,
    ActivityType::Social,
    ActivityType::Diy,
    ActivityType::Charity,
    ActivityType::Cooking,
    ActivityType::Relaxation,
    ActivityType::Music,
    ActivityType::Busywork,
];

impl ActivityType {
    /// Wire value (also the `<option>` value)
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Education => "education",
            ActivityType::Recreational => "recreational",
            ActivityType::Social => "social",
            ActivityType::Diy => "diy",
            ActivityType::Charity => "charity",
            ActivityType::Cooking => "cooking",
            ActivityType::Relaxation => "relaxation",
            ActivityType::Music => "music",
            ActivityType::Busywork => "busywork",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Education => "Education",
            ActivityType::Recreational => "Recreational",
            ActivityType::Social => "Social",
            ActivityType::Diy => "DIY",
            ActivityType::Charity => "Charity",
            ActivityType::Cooking => "Cooking",
            ActivityType::Relaxation => "Relaxation",
            ActivityType::Music => "Music",
            ActivityType::Busywork => "Busywork",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown activity type: {0:?}")]
pub struct ParseActivityTypeError(pub String);

impl FromStr for ActivityType {
    type Err = ParseActivityTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ACTIVITY_TYPES
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseActivityTypeError(s.to_string()))
    }
}

/// One persisted activity (stored under the "todos" key)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub activity: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    #[serde(rename = "bookingRequired", default)]
    pub booking_required: bool,
    #[serde(default = "default_accessibility")]
    pub accessibility: f64,
}

fn default_accessibility() -> f64 {
    DEFAULT_ACCESSIBILITY
}

impl Activity {
    /// Whether the record satisfies the invariants every stored activity must hold
    pub fn is_valid(&self) -> bool {
        !self.activity.trim().is_empty() && self.price.is_finite() && self.price >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run() -> Activity {
        Activity {
            activity: "Run".to_string(),
            price: 0.0,
            kind: ActivityType::Recreational,
            booking_required: false,
            accessibility: 0.5,
        }
    }

    #[test]
    fn test_activity_type_parse() {
        assert_eq!("diy".parse::<ActivityType>(), Ok(ActivityType::Diy));
        assert_eq!(ActivityType::Diy.label(), "DIY");
        assert!("".parse::<ActivityType>().is_err());
        assert!("Music".parse::<ActivityType>().is_err());
    }

    #[test]
    fn test_every_type_round_trips_through_as_str() {
        for kind in ACTIVITY_TYPES {
            assert_eq!(kind.as_str().parse::<ActivityType>(), Ok(kind));
        }
    }

    #[test]
    fn test_activity_json_keys() {
        let json = serde_json::to_value(run()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "activity": "Run",
                "price": 0.0,
                "type": "recreational",
                "bookingRequired": false,
                "accessibility": 0.5
            })
        );
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let parsed: Activity =
            serde_json::from_str(r#"{"activity":"Bake","price":12.5,"type":"cooking"}"#).unwrap();
        assert!(!parsed.booking_required);
        assert_eq!(parsed.accessibility, DEFAULT_ACCESSIBILITY);
        assert_eq!(parsed.kind, ActivityType::Cooking);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let parsed = serde_json::from_str::<Activity>(r#"{"activity":"x","price":1,"type":"sports"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_is_valid() {
        assert!(run().is_valid());
        assert!(!Activity { activity: "  ".into(), ..run() }.is_valid());
        assert!(!Activity { price: -1.0, ..run() }.is_valid());
    }
}

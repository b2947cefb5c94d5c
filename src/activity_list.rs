//! Activity List
//!
//! Ordered collection of activities. Insertion order is display order and
//! records are addressed by position.

use serde::{Deserialize, Serialize};

use crate::models::Activity;

/// Ordered activities; serializes as a plain JSON array
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityList(Vec<Activity>);

impl ActivityList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the end
    pub fn push(&mut self, activity: Activity) {
        self.0.push(activity);
    }

    /// Remove the activity at `index`; later activities shift down by one.
    /// Out-of-range indices leave the list untouched.
    pub fn remove_at(&mut self, index: usize) -> Option<Activity> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Activity] {
        &self.0
    }
}

impl From<Vec<Activity>> for ActivityList {
    fn from(activities: Vec<Activity>) -> Self {
        Self(activities)
    }
}

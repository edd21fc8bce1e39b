// ABOUTME: Participant models describing who can contribute to a cookout
// ABOUTME: ParticipantStatus, insertion-ordered Pantry, and Participant with resolved defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    limits::{DEFAULT_MAX_ITEMS_PER_PERSON, PARTICIPANT_MAX_ITEMS_CEILING},
    status,
};

/// Invitation status of a participant
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParticipantStatus {
    /// Invitee accepted the cookout
    Accepted,
    /// Invitee has not answered yet
    Pending,
    /// Any other stored status (e.g. declined)
    Other(String),
}

impl ParticipantStatus {
    /// Parse a stored status; only an empty value defaults to pending
    ///
    /// Matching is exact, so `" pending "` is kept as `Other`.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "" | status::PENDING => Self::Pending,
            status::ACCEPTED => Self::Accepted,
            other => Self::Other(other.to_owned()),
        }
    }

    /// String form as stored
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Accepted => status::ACCEPTED,
            Self::Pending => status::PENDING,
            Self::Other(other) => other,
        }
    }

    /// Whether the participant has not confirmed yet
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl From<String> for ParticipantStatus {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl From<ParticipantStatus> for String {
    fn from(value: ParticipantStatus) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for ParticipantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pantry contents of a participant
///
/// Entries keep their insertion order and exact duplicates are dropped. The
/// insertion order is the canonical iteration order used when the planner
/// reports which pantry entry matched an ingredient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Pantry {
    items: Vec<String>,
}

impl Pantry {
    /// Create an empty pantry
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add an item unless the exact same name is already present
    pub fn insert(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if self.items.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Iterate over items in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Number of distinct items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the pantry holds nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Pantry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut pantry = Self::new();
        for item in iter {
            pantry.insert(item);
        }
        pantry
    }
}

impl From<Vec<String>> for Pantry {
    fn from(items: Vec<String>) -> Self {
        items.into_iter().collect()
    }
}

impl From<Pantry> for Vec<String> {
    fn from(pantry: Pantry) -> Self {
        pantry.items
    }
}

/// One invitee's ability to contribute ingredients
///
/// All defaults are resolved at construction: `can_bring` starts `true` and
/// `max_items` starts at [`DEFAULT_MAX_ITEMS_PER_PERSON`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Username, unique within a planning request
    pub username: String,
    /// Invitation status
    pub status: ParticipantStatus,
    /// Whether the participant is willing to bring anything
    pub can_bring: bool,
    /// Maximum number of items the participant can be assigned
    pub max_items: u32,
    /// Pantry contents in insertion order
    pub pantry: Pantry,
}

impl Participant {
    /// Create a participant with default capacity
    pub fn new(username: impl Into<String>, status: ParticipantStatus, pantry: Pantry) -> Self {
        Self {
            username: username.into(),
            status,
            can_bring: true,
            max_items: DEFAULT_MAX_ITEMS_PER_PERSON,
            pantry,
        }
    }

    /// Set capacity, clamped to `[0, PARTICIPANT_MAX_ITEMS_CEILING]`
    #[must_use]
    pub fn with_max_items(mut self, max_items: i64) -> Self {
        self.max_items = clamp_max_items(max_items, PARTICIPANT_MAX_ITEMS_CEILING);
        self
    }

    /// Set whether the participant can bring anything
    #[must_use]
    pub const fn with_can_bring(mut self, can_bring: bool) -> Self {
        self.can_bring = can_bring;
        self
    }

    /// Eligible participants can bring and have non-zero capacity
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        self.can_bring && self.max_items > 0
    }
}

/// Clamp a caller-supplied item count into `[0, ceiling]`
#[must_use]
pub fn clamp_max_items(value: i64, ceiling: u32) -> u32 {
    u32::try_from(value.clamp(0, i64::from(ceiling))).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!(
            ParticipantStatus::from_str_lossy("accepted"),
            ParticipantStatus::Accepted
        );
        assert_eq!(ParticipantStatus::from_str_lossy(""), ParticipantStatus::Pending);
        assert_eq!(
            ParticipantStatus::from_str_lossy("declined"),
            ParticipantStatus::Other("declined".into())
        );
        let json = serde_json::to_string(&ParticipantStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }

    #[test]
    fn test_status_matching_is_exact() {
        let padded = ParticipantStatus::from_str_lossy(" pending ");
        assert_eq!(padded, ParticipantStatus::Other(" pending ".into()));
        assert!(!padded.is_pending());

        assert_eq!(
            ParticipantStatus::from_str_lossy("Accepted"),
            ParticipantStatus::Other("Accepted".into())
        );
        assert_eq!(
            ParticipantStatus::from_str_lossy("  "),
            ParticipantStatus::Other("  ".into())
        );
    }

    #[test]
    fn test_pantry_keeps_insertion_order_without_duplicates() {
        let pantry: Pantry = ["salt", "flour", "salt", "butter"].into_iter().collect();
        assert_eq!(pantry.iter().collect::<Vec<_>>(), vec!["salt", "flour", "butter"]);
        assert_eq!(pantry.len(), 3);
    }

    #[test]
    fn test_capacity_clamping() {
        let base = Participant::new("alice", ParticipantStatus::Accepted, Pantry::new());
        assert_eq!(base.max_items, DEFAULT_MAX_ITEMS_PER_PERSON);
        assert_eq!(base.clone().with_max_items(-4).max_items, 0);
        assert_eq!(base.clone().with_max_items(500).max_items, 50);
        assert_eq!(base.with_max_items(7).max_items, 7);
    }

    #[test]
    fn test_eligibility() {
        let p = Participant::new("bob", ParticipantStatus::Pending, Pantry::new());
        assert!(p.is_eligible());
        assert!(!p.clone().with_can_bring(false).is_eligible());
        assert!(!p.with_max_items(0).is_eligible());
    }
}

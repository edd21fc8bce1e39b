// ABOUTME: Storage abstraction for invitations, coverage rows, participants, and pantries
// ABOUTME: Includes an in-memory store loaded from a JSON snapshot for the server and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use cookout_core::constants::status;
use cookout_core::errors::{AppError, AppResult};
use cookout_core::models::{ParticipantStatus, RecipeSlots};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use tracing::{debug, info};

/// A cookout invitation and its recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    /// Invitation identifier
    pub invitation_id: i64,
    /// Host who created the cookout
    pub creator_username: String,
    /// Recipe identifier
    pub recipe_id: i64,
    /// Recipe ingredient slots; `None` when the recipe row is missing
    #[serde(default)]
    pub recipe: Option<RecipeSlots>,
}

/// Participant row as stored, before constraints are applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    /// Participant username; may be empty in bad data
    pub username: String,
    /// Raw invitation status
    #[serde(default)]
    pub status: Option<String>,
}

impl ParticipantRecord {
    /// Parsed status, treating a missing or empty value as pending
    #[must_use]
    pub fn status(&self) -> ParticipantStatus {
        ParticipantStatus::from_str_lossy(self.status.as_deref().unwrap_or_default())
    }
}

/// Invitee row in a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitationParticipant {
    /// Invitation the row belongs to
    pub invitation_id: i64,
    /// Invitee username
    pub username: String,
    /// Raw invitation status
    #[serde(default)]
    pub status: Option<String>,
}

/// Ingredient the host already provides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorIngredient {
    /// Invitation the row belongs to
    pub invitation_id: i64,
    /// Required-ingredient index
    pub ingredient_index: usize,
}

/// Ingredient an invitee offered to bring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantIngredient {
    /// Invitation the row belongs to
    pub invitation_id: i64,
    /// Invitee who offered it
    #[serde(default)]
    pub username: String,
    /// Required-ingredient index
    pub ingredient_index: usize,
    /// Only confirmed offers count as coverage
    #[serde(default)]
    pub confirmed: bool,
}

/// Pantry row joining a user to a food name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PantryEntry {
    /// Pantry owner
    pub username: String,
    /// Food name as stored
    pub food_name: String,
}

/// Serializable dump of everything the in-memory store serves
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CookoutSnapshot {
    /// Invitations with their recipes
    #[serde(default)]
    pub invitations: Vec<Invitation>,
    /// Invitees across all invitations
    #[serde(default)]
    pub participants: Vec<InvitationParticipant>,
    /// Host-provided ingredients
    #[serde(default)]
    pub creator_ingredients: Vec<CreatorIngredient>,
    /// Invitee-offered ingredients
    #[serde(default)]
    pub participant_ingredients: Vec<ParticipantIngredient>,
    /// Pantry rows
    #[serde(default)]
    pub pantry: Vec<PantryEntry>,
}

/// Read access to cookout data
#[async_trait]
pub trait CookoutStore: Send + Sync {
    /// Fetch an invitation with its recipe
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    async fn get_invitation(&self, invitation_id: i64) -> AppResult<Option<Invitation>>;

    /// Required-ingredient indices the host already provides
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    async fn creator_ingredient_indices(&self, invitation_id: i64) -> AppResult<Vec<usize>>;

    /// Required-ingredient indices invitees have confirmed
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    async fn confirmed_participant_indices(&self, invitation_id: i64) -> AppResult<Vec<usize>>;

    /// Invitees of an invitation, optionally restricted to accepted ones
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    async fn list_participants(
        &self,
        invitation_id: i64,
        accepted_only: bool,
    ) -> AppResult<Vec<ParticipantRecord>>;

    /// Pantry food names for each username, in stored order
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    async fn pantry_items(&self, usernames: &[String]) -> AppResult<HashMap<String, Vec<String>>>;
}

/// Store serving a fixed snapshot from memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCookoutStore {
    snapshot: CookoutSnapshot,
}

impl InMemoryCookoutStore {
    /// Wrap a snapshot
    #[must_use]
    pub const fn new(snapshot: CookoutSnapshot) -> Self {
        Self { snapshot }
    }

    /// Parse a snapshot from JSON text
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON does not match the snapshot shape
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let snapshot: CookoutSnapshot = serde_json::from_str(json)?;
        Ok(Self::new(snapshot))
    }

    /// Load a snapshot from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub async fn load(path: &Path) -> AppResult<Self> {
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::database(format!(
                "Failed to read cookout snapshot {}: {e}",
                path.display()
            ))
            .with_source(e)
        })?;
        let store = Self::from_json_str(&json)?;

        info!(
            path = %path.display(),
            invitations = store.snapshot.invitations.len(),
            participants = store.snapshot.participants.len(),
            pantry_rows = store.snapshot.pantry.len(),
            "Loaded cookout snapshot"
        );
        Ok(store)
    }

    /// Snapshot being served
    #[must_use]
    pub const fn snapshot(&self) -> &CookoutSnapshot {
        &self.snapshot
    }
}

#[async_trait]
impl CookoutStore for InMemoryCookoutStore {
    async fn get_invitation(&self, invitation_id: i64) -> AppResult<Option<Invitation>> {
        Ok(self
            .snapshot
            .invitations
            .iter()
            .find(|invitation| invitation.invitation_id == invitation_id)
            .cloned())
    }

    async fn creator_ingredient_indices(&self, invitation_id: i64) -> AppResult<Vec<usize>> {
        Ok(self
            .snapshot
            .creator_ingredients
            .iter()
            .filter(|row| row.invitation_id == invitation_id)
            .map(|row| row.ingredient_index)
            .collect())
    }

    async fn confirmed_participant_indices(&self, invitation_id: i64) -> AppResult<Vec<usize>> {
        Ok(self
            .snapshot
            .participant_ingredients
            .iter()
            .filter(|row| row.invitation_id == invitation_id && row.confirmed)
            .map(|row| row.ingredient_index)
            .collect())
    }

    async fn list_participants(
        &self,
        invitation_id: i64,
        accepted_only: bool,
    ) -> AppResult<Vec<ParticipantRecord>> {
        Ok(self
            .snapshot
            .participants
            .iter()
            .filter(|row| row.invitation_id == invitation_id)
            .filter(|row| !accepted_only || row.status.as_deref() == Some(status::ACCEPTED))
            .map(|row| ParticipantRecord {
                username: row.username.clone(),
                status: row.status.clone(),
            })
            .collect())
    }

    async fn pantry_items(&self, usernames: &[String]) -> AppResult<HashMap<String, Vec<String>>> {
        let wanted: BTreeSet<&str> = usernames.iter().map(String::as_str).collect();
        let mut pantries: HashMap<String, Vec<String>> = HashMap::new();

        for entry in &self.snapshot.pantry {
            if entry.username.is_empty() || entry.food_name.is_empty() {
                continue;
            }
            if wanted.contains(entry.username.as_str()) {
                pantries
                    .entry(entry.username.clone())
                    .or_default()
                    .push(entry.food_name.clone());
            }
        }

        debug!(
            requested = usernames.len(),
            found = pantries.len(),
            "Loaded pantry items"
        );
        Ok(pantries)
    }
}

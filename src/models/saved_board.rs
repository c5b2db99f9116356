//! Saved style cards.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of a style card name.
pub const MAX_NAME_LEN: usize = 80;

/// A style board persisted by the user as a named card.
///
/// The rendered composite image is produced and uploaded elsewhere; the card
/// only keeps its reference.
///
/// # Validation
///
/// - Name must be non-empty, max 80 characters
/// - At least one item ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedBoard {
    /// Unique card ID (UUID v4)
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Display name (e.g., "My Style Board")
    pub name: String,
    /// Board item IDs in board order
    pub item_ids: Vec<String>,
    /// Reference to the rendered composite image
    pub image_url: String,
    /// When the card was saved
    pub created: DateTime<Utc>,
}

impl SavedBoard {
    /// Creates a new card with a fresh ID and the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or too long, or if there are no
    /// item IDs.
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        item_ids: Vec<String>,
        image_url: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        Self::validate_name(&name)?;

        if item_ids.is_empty() {
            anyhow::bail!("A style card needs at least one item");
        }

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            name,
            item_ids,
            image_url: image_url.into(),
            created: Utc::now(),
        })
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            anyhow::bail!("Style card name cannot be empty");
        }

        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            anyhow::bail!(
                "Style card name exceeds maximum length of {MAX_NAME_LEN} characters (got {len})"
            );
        }

        Ok(())
    }
}

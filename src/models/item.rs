//! Wardrobe item data model.

use crate::models::CategoryRole;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single piece of clothing in a user's wardrobe.
///
/// Items are owned by the wardrobe store. The composer only ever reads them.
///
/// # Validation
///
/// - ID must be non-empty
/// - Name must be non-empty
/// - Category is free text and may be empty (it classifies as an accessory)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardrobeItem {
    /// Opaque identifier, stable for the item's lifetime
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Free-text label (e.g., "Blue Oxford Shirt")
    pub name: String,
    /// Free-text category (e.g., "Tops", "jeans", "sneaker")
    #[serde(default)]
    pub category: String,
    /// Raw photo reference
    pub image_url: String,
    /// Background-removed variant of the photo, when available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub masked_url: Option<String>,
    /// Free-form tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// When the item was added; older wardrobe files may lack it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl WardrobeItem {
    /// Creates a new item with validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID or name is empty.
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() {
            anyhow::bail!("Item ID cannot be empty");
        }
        if name.trim().is_empty() {
            anyhow::bail!("Item name cannot be empty");
        }

        Ok(Self {
            id,
            user_id: user_id.into(),
            name,
            category: category.into(),
            image_url: image_url.into(),
            masked_url: None,
            tags: Vec::new(),
            created: Some(Utc::now()),
        })
    }

    /// Sets the background-removed image reference.
    pub fn with_masked_url(mut self, masked_url: impl Into<String>) -> Self {
        self.masked_url = Some(masked_url.into());
        self
    }

    /// Replaces the item's tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Overrides the creation timestamp.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Layout role of this item, derived from its category.
    pub fn role(&self) -> CategoryRole {
        CategoryRole::classify(&self.category)
    }

    /// Image to display: the masked variant when present, else the raw photo.
    pub fn image_ref(&self) -> &str {
        self.masked_url.as_deref().unwrap_or(&self.image_url)
    }
}

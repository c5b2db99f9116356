//! Board session: one open style board over a wardrobe snapshot.

use crate::models::{BoardLayout, CollageLayout, ShuffleState, WardrobeItem};
use crate::services::layout::{assign_collage, assign_layout};
use crate::services::shuffle::{shuffle_board, RandomSource};
use serde::Serialize;
use tracing::debug;

/// Everything the save action needs from a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavePayload {
    /// Card name
    pub name: String,
    /// Current board item IDs, in board order
    pub item_ids: Vec<String>,
    /// Reference to the rendered composite image
    pub image_ref: String,
}

/// An open style board.
///
/// The session owns a snapshot of the user's wardrobe, passed in explicitly
/// when the board is opened, plus the transient [`ShuffleState`]. Nothing
/// here performs I/O.
#[derive(Debug, Clone)]
pub struct BoardSession {
    wardrobe: Vec<WardrobeItem>,
    state: ShuffleState,
    dropped_ids: Vec<String>,
}

impl BoardSession {
    /// Opens a board for the given selection of item IDs.
    ///
    /// IDs are resolved against the wardrobe in selection order. IDs that
    /// match no wardrobe item are dropped and remembered in
    /// [`dropped_ids`](Self::dropped_ids).
    pub fn open(selection: &[String], wardrobe: Vec<WardrobeItem>) -> Self {
        let mut items = Vec::with_capacity(selection.len());
        let mut dropped_ids = Vec::new();

        for id in selection {
            match wardrobe.iter().find(|item| &item.id == id) {
                Some(item) => items.push(item.clone()),
                None => dropped_ids.push(id.clone()),
            }
        }

        debug!(
            requested = selection.len(),
            resolved = items.len(),
            dropped = dropped_ids.len(),
            "opened board"
        );

        Self {
            wardrobe,
            state: ShuffleState::new(items),
            dropped_ids,
        }
    }

    /// Items currently on the board.
    pub fn items(&self) -> &[WardrobeItem] {
        &self.state.items
    }

    /// IDs currently on the board, in board order.
    pub fn item_ids(&self) -> Vec<String> {
        self.state.item_ids()
    }

    /// Selection IDs that did not resolve to a wardrobe item.
    pub fn dropped_ids(&self) -> &[String] {
        &self.dropped_ids
    }

    /// Shuffle state (items and locks).
    pub fn state(&self) -> &ShuffleState {
        &self.state
    }

    /// Flips the lock on `id` and returns whether it is now locked.
    pub fn toggle_lock(&mut self, id: &str) -> bool {
        self.state.toggle_lock(id)
    }

    /// Returns true if `id` is locked.
    pub fn is_locked(&self, id: &str) -> bool {
        self.state.locked.is_locked(id)
    }

    /// Replaces every unlocked item with a random same-role alternative.
    pub fn shuffle<S: RandomSource + ?Sized>(&mut self, rng: &mut S) {
        self.state.items = shuffle_board(&self.state.items, &self.state.locked, &self.wardrobe, rng);
    }

    /// Lays out the current items.
    pub fn layout(&self) -> BoardLayout {
        assign_layout(&self.state.items)
    }

    /// Arranges the current items for the saved card image.
    pub fn collage(&self) -> CollageLayout {
        assign_collage(&self.state.items)
    }

    /// Builds the save action payload from the current board.
    pub fn save_payload(&self, name: impl Into<String>, image_ref: impl Into<String>) -> SavePayload {
        SavePayload {
            name: name.into(),
            item_ids: self.item_ids(),
            image_ref: image_ref.into(),
        }
    }
}

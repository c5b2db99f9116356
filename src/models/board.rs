//! Style board state: column layout output and the lock-aware shuffle state.

use crate::models::WardrobeItem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Items assigned to the visual slots of a style board.
///
/// The main piece is the featured center item. Side items are split between
/// the left and right columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Featured center item, absent only for an empty board
    pub main_piece: Option<WardrobeItem>,
    /// Left column, top to bottom
    pub left: Vec<WardrobeItem>,
    /// Right column, top to bottom
    pub right: Vec<WardrobeItem>,
}

impl BoardLayout {
    /// Total number of items placed on the board.
    pub fn len(&self) -> usize {
        usize::from(self.main_piece.is_some()) + self.left.len() + self.right.len()
    }

    /// Returns true if nothing is placed on the board.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Two-column arrangement used for the saved style card image.
///
/// Unlike [`BoardLayout`] there is no featured center piece, and the card
/// shows at most one top, one bottom and one pair of footwear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollageLayout {
    /// Top then bottom
    pub left: Vec<WardrobeItem>,
    /// Accessories then footwear
    pub right: Vec<WardrobeItem>,
}

impl CollageLayout {
    /// Number of items shown on the card.
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Returns true if the card shows nothing.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Returns true if an item with `id` appears on the card.
    pub fn contains(&self, id: &str) -> bool {
        self.left.iter().chain(&self.right).any(|item| item.id == id)
    }
}

/// Set of item IDs pinned against shuffling.
///
/// Ordered so listings and JSON output are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockSet(BTreeSet<String>);

impl LockSet {
    /// Creates an empty lock set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the lock on `id` and returns whether it is now locked.
    ///
    /// IDs are not checked against the board: locking an absent ID has no
    /// visible effect until an item with that ID appears.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.0.remove(id) {
            false
        } else {
            self.0.insert(id.to_string());
            true
        }
    }

    /// Locks `id` (no-op if already locked).
    pub fn lock(&mut self, id: impl Into<String>) {
        self.0.insert(id.into());
    }

    /// Returns true if `id` is locked.
    pub fn is_locked(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Number of locked IDs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is locked.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates locked IDs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for LockSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Session-scoped state of an open board: the items currently shown plus the
/// locked IDs.
///
/// Created when a board is opened and discarded when it closes. Never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShuffleState {
    /// Items on the board, in board order
    pub items: Vec<WardrobeItem>,
    /// Locked item IDs
    pub locked: LockSet,
}

impl ShuffleState {
    /// Creates a state with no locks.
    pub fn new(items: Vec<WardrobeItem>) -> Self {
        Self {
            items,
            locked: LockSet::new(),
        }
    }

    /// Flips the lock on `id`; see [`LockSet::toggle`].
    pub fn toggle_lock(&mut self, id: &str) -> bool {
        self.locked.toggle(id)
    }

    /// IDs of the items on the board, in board order.
    pub fn item_ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }
}

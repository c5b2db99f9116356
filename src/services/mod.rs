//! Service layer for business logic.
//!
//! This module contains the outfit composer (layout and shuffle), the board
//! session that ties them together, and the file-backed stores it reads from
//! and saves to.

pub mod layout;
pub mod saved_boards;
pub mod session;
pub mod shuffle;
pub mod storage;
pub mod wardrobe;

// Re-export commonly used types and functions
pub use layout::{assign_collage, assign_layout};
pub use saved_boards::{JsonSavedBoardStore, SavedBoardStore};
pub use session::{BoardSession, SavePayload};
pub use shuffle::{seeded_rng, shuffle_board, RandomSource};
pub use wardrobe::{JsonWardrobeStore, WardrobeStore};

//! Data models for wardrobe items, layout roles, and style boards.
//!
//! This module contains the core data structures used throughout the application.
//! Models are independent of storage and CLI concerns.

pub mod board;
pub mod item;
pub mod role;
pub mod saved_board;

// Re-export all model types
pub use board::{BoardLayout, CollageLayout, LockSet, ShuffleState};
pub use item::WardrobeItem;
pub use role::CategoryRole;
pub use saved_board::SavedBoard;

//! Parsing of board selections from navigation parameters and assistant replies.

pub mod selection;

// Re-export commonly used functions
pub use selection::{extract_board_tag, parse_id_list, ReplySelection};

//! StyleBoard Library
//!
//! This library provides the outfit composer behind a wardrobe styling
//! assistant: classifying free-text categories into board roles, laying
//! items out on a style board, and shuffling unlocked items with same-role
//! alternatives.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod parser;
pub mod services;

//! CLI command handlers

pub mod normalize;
pub mod summarize;
pub mod verify;

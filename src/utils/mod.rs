//! Utility modules for the static site generator.

pub mod git;
pub mod log;
pub mod slug;

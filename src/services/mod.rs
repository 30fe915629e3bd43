//! Core services for discovery, filtering, execution and assertions

pub mod assert;
pub mod discover;
pub mod exec;
pub mod filter;
pub mod fixtures;
pub mod runner;

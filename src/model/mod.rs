//! Data models for roster.
//!
//! This module defines the core data structures:
//!
//! - [`User`]: The sole entity, a directory record
//! - [`seed_users`]: The fixed record set loaded at process start

mod user;

pub use user::{User, seed_users};

//! # Roster - A minimal GraphQL user directory service
//!
//! Roster exposes a small, hard-coded user directory through a GraphQL API.
//! The store is seeded at startup, lives in memory for the lifetime of the
//! process, and resets on every restart. There is no persistence and no
//! authentication; the service exists to demonstrate a schema, its
//! resolvers, and the HTTP wiring around them.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the GraphQL server (landing page on GET /)
//! roster serve --port 4000
//!
//! # Execute a query without starting the server
//! roster query '{ getUsers { id name } }'
//!
//! # Execute a mutation
//! roster mutate 'createUser(name: "Test User", age: 40, isMarried: true) { id }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, and HTTP server
//! - [`model`]: Data models (User)
//! - [`store`]: In-memory user store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles the optional `.roster.yml` configuration file.
pub mod config;

/// Error types and result aliases.
///
/// Defines `RosterError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers, and HTTP server.
///
/// Provides the async-graphql schema and the axum transport around it.
pub mod graphql;

/// Data models.
///
/// Includes the `User` entity and the seed record set.
pub mod model;

/// In-memory storage layer.
///
/// Holds the authoritative user sequence for the process lifetime.
pub mod store;

pub mod logging;

//! # Catalog - in-memory GraphQL demo service
//!
//! A bookstore (authors and books) and a countries/continents dataset,
//! served through a single GraphQL endpoint.
//!
//! Catalog provides:
//! - An explicit, lock-guarded in-memory store seeded at startup
//! - Relationship resolvers over the store (book → author, author → books, ...)
//! - Transport-independent query and mutation engines
//! - An async-graphql schema wiring the engines together
//! - An axum server exposing the schema, GraphiQL and a static page client

pub mod model;
pub mod graph;
pub mod storage;
pub mod query;
pub mod schema;
pub mod server;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use model::{Author, Book, Continent, Country, EntityKind, Id};
pub use graph::GraphStats;
pub use storage::MemoryStore;
pub use query::{MutationEngine, QueryEngine};
pub use schema::{build_schema, CatalogSchema};

/// Result type alias for Catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Catalog operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid port {0:?}: expected an integer between 0 and 65535")]
    InvalidPort(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown entity: {0}")]
    UnknownEntity(String),
}

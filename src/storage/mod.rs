//! Storage Layer - in-memory entity store
//!
//! The store owns four ordered collections:
//! - authors(id, name)
//! - books(id, name, author_id)
//! - continents(id, name, code)
//! - countries(id, name, code, capital, continent_code)
//!
//! Nothing is persisted; every process starts from the seed dataset.

pub mod memory;
pub mod seed;

pub use memory::{MemoryStore, Tables};

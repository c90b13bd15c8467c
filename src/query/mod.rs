pub mod engine;
pub mod mutation;

pub use engine::QueryEngine;
pub use mutation::{AuthorPatch, BookPatch, MutationEngine};

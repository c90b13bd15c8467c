//! GraphQL schema - binds the query/mutation engines to async-graphql
//!
//! - `root`: the `Query` and `Mutation` entry points
//! - `types`: relationship fields on the entity types
//!
//! The store travels in the schema data as `Arc<MemoryStore>`; resolvers
//! fetch it with [`store`] and delegate to [`QueryEngine`](crate::QueryEngine)
//! or [`MutationEngine`](crate::MutationEngine).

pub mod root;
pub mod types;

use std::sync::Arc;
use async_graphql::extensions::Tracing;
use async_graphql::{Context, EmptySubscription, Request, Response, Schema, Variables};
use crate::storage::MemoryStore;

pub use root::{MutationRoot, QueryRoot};

/// The catalog schema type
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over a shared store
pub fn build_schema(store: Arc<MemoryStore>) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .extension(Tracing)
        .finish()
}

/// Execute one document with optional JSON variables, without any transport
pub async fn execute(
    schema: &CatalogSchema,
    document: &str,
    variables: Option<serde_json::Value>,
) -> Response {
    let mut request = Request::new(document);
    if let Some(variables) = variables {
        request = request.variables(Variables::from_json(variables));
    }
    schema.execute(request).await
}

pub(crate) fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a MemoryStore> {
    Ok(ctx.data::<Arc<MemoryStore>>()?.as_ref())
}

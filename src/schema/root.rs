//! Query and Mutation entry points

use async_graphql::{Context, Object, Result};
use crate::model::{Author, Book, Continent, Country, Id};
use crate::query::{AuthorPatch, BookPatch, MutationEngine, QueryEngine};
use super::store;

/// Read-only entry point
#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Single book by id
    async fn book(&self, ctx: &Context<'_>, id: Id) -> Result<Option<Book>> {
        Ok(QueryEngine::new(store(ctx)?).get_book(id))
    }

    /// List of all books
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        Ok(QueryEngine::new(store(ctx)?).list_books())
    }

    /// Single author by id
    async fn author(&self, ctx: &Context<'_>, id: Id) -> Result<Option<Author>> {
        Ok(QueryEngine::new(store(ctx)?).get_author(id))
    }

    /// List of all authors
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        Ok(QueryEngine::new(store(ctx)?).list_authors())
    }

    /// Single continent by code, e.g. "AF"
    async fn continent(&self, ctx: &Context<'_>, code: String) -> Result<Option<Continent>> {
        Ok(QueryEngine::new(store(ctx)?).get_continent(&code))
    }

    /// List of all continents
    async fn continents(&self, ctx: &Context<'_>) -> Result<Vec<Continent>> {
        Ok(QueryEngine::new(store(ctx)?).list_continents())
    }

    /// Single country by code, e.g. "KE"
    async fn country(&self, ctx: &Context<'_>, code: String) -> Result<Option<Country>> {
        Ok(QueryEngine::new(store(ctx)?).get_country(&code))
    }

    /// List of all countries
    async fn countries(&self, ctx: &Context<'_>) -> Result<Vec<Country>> {
        Ok(QueryEngine::new(store(ctx)?).list_countries())
    }
}

/// Write entry point
#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a book. The author id is not checked.
    async fn add_book(&self, ctx: &Context<'_>, name: String, author_id: Id) -> Result<Book> {
        Ok(MutationEngine::new(store(ctx)?).add_book(name, author_id))
    }

    /// Update the supplied fields of a book; null if the id matches no book
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: Id,
        name: Option<String>,
        author_id: Option<Id>,
    ) -> Result<Option<Book>> {
        let patch = BookPatch { name, author_id };
        Ok(MutationEngine::new(store(ctx)?).update_book(id, patch))
    }

    /// Add an author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Result<Author> {
        Ok(MutationEngine::new(store(ctx)?).add_author(name))
    }

    /// Update the supplied fields of an author; null if the id matches no author
    async fn update_author(
        &self,
        ctx: &Context<'_>,
        id: Id,
        name: Option<String>,
    ) -> Result<Option<Author>> {
        Ok(MutationEngine::new(store(ctx)?).update_author(id, AuthorPatch { name }))
    }
}

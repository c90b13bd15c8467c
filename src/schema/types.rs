//! Relationship fields, resolved lazily when a query selects them

use async_graphql::{ComplexObject, Context, Result};
use crate::model::{Author, Book, Continent, Country};
use crate::query::QueryEngine;
use super::store;

#[ComplexObject]
impl Author {
    /// Books written by this author, in insertion order
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        Ok(QueryEngine::new(store(ctx)?).books_of_author(self))
    }
}

#[ComplexObject]
impl Book {
    /// Author of this book; null if the author id matches no author
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        Ok(QueryEngine::new(store(ctx)?).author_of_book(self))
    }
}

#[ComplexObject]
impl Continent {
    /// Countries on this continent, in insertion order
    async fn countries(&self, ctx: &Context<'_>) -> Result<Vec<Country>> {
        Ok(QueryEngine::new(store(ctx)?).countries_of_continent(self))
    }
}

#[ComplexObject]
impl Country {
    /// Continent of this country; null if the continent code matches none
    async fn continent(&self, ctx: &Context<'_>) -> Result<Option<Continent>> {
        Ok(QueryEngine::new(store(ctx)?).continent_of_country(self))
    }
}

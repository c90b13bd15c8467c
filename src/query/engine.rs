//! Query engine implementation
//!
//! Provides the read-only operations:
//! - Lookup by id (books, authors) or by code (continents, countries)
//! - List-all in insertion order
//! - Relationship traversal for a single record
//!
//! A lookup that matches nothing returns `None`; it is never an error.

use crate::graph;
use crate::model::{Author, Book, Continent, Country, Id};
use crate::storage::MemoryStore;
use crate::GraphStats;

/// Query engine over the entity store
pub struct QueryEngine<'a> {
    store: &'a MemoryStore,
}

impl<'a> QueryEngine<'a> {
    /// Create a new query engine
    pub fn new(store: &'a MemoryStore) -> Self {
        Self { store }
    }

    /// Single book by id
    pub fn get_book(&self, id: Id) -> Option<Book> {
        self.store
            .read(|t| t.books.iter().find(|b| b.id == id).cloned())
    }

    /// All books in insertion order
    pub fn list_books(&self) -> Vec<Book> {
        self.store.read(|t| t.books.clone())
    }

    /// Single author by id
    pub fn get_author(&self, id: Id) -> Option<Author> {
        self.store
            .read(|t| t.authors.iter().find(|a| a.id == id).cloned())
    }

    /// All authors in insertion order
    pub fn list_authors(&self) -> Vec<Author> {
        self.store.read(|t| t.authors.clone())
    }

    /// Single continent by code
    pub fn get_continent(&self, code: &str) -> Option<Continent> {
        self.store
            .read(|t| t.continents.iter().find(|c| c.code == code).cloned())
    }

    /// All continents in insertion order
    pub fn list_continents(&self) -> Vec<Continent> {
        self.store.read(|t| t.continents.clone())
    }

    /// Single country by code
    pub fn get_country(&self, code: &str) -> Option<Country> {
        self.store
            .read(|t| t.countries.iter().find(|c| c.code == code).cloned())
    }

    /// All countries in insertion order
    pub fn list_countries(&self) -> Vec<Country> {
        self.store.read(|t| t.countries.clone())
    }

    /// Books written by `author`
    pub fn books_of_author(&self, author: &Author) -> Vec<Book> {
        self.store.read(|t| {
            graph::books_of_author(&t.books, author)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    /// Author of `book`, if its author id resolves
    pub fn author_of_book(&self, book: &Book) -> Option<Author> {
        self.store
            .read(|t| graph::author_of_book(&t.authors, book).cloned())
    }

    /// Countries on `continent`
    pub fn countries_of_continent(&self, continent: &Continent) -> Vec<Country> {
        self.store.read(|t| {
            graph::countries_of_continent(&t.countries, continent)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    /// Continent of `country`, if its continent code resolves
    pub fn continent_of_country(&self, country: &Country) -> Option<Continent> {
        self.store
            .read(|t| graph::continent_of_country(&t.continents, country).cloned())
    }

    /// Collection sizes and dangling-reference counts
    pub fn stats(&self) -> GraphStats {
        self.store.read(GraphStats::collect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rowling_books_in_seed_order() {
        let store = MemoryStore::seeded();
        let engine = QueryEngine::new(&store);

        let rowling = engine.get_author(1).unwrap();
        assert_eq!(rowling.name, "J. K. Rowling");

        let titles: Vec<_> = engine
            .books_of_author(&rowling)
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Harry Potter and the Chamber of Secrets",
                "Harry Potter and the Prisoner of Azkaban",
                "Harry Potter and the Goblet of Fire",
            ]
        );
    }

    #[test]
    fn test_author_books_match_book_list() {
        let store = MemoryStore::seeded();
        let engine = QueryEngine::new(&store);
        let all_books = engine.list_books();

        for author in engine.list_authors() {
            let matching = engine
                .list_authors()
                .iter()
                .filter(|a| a.id == author.id)
                .count();
            assert_eq!(matching, 1);

            let expected: Vec<_> = all_books
                .iter()
                .filter(|b| b.author_id == author.id)
                .cloned()
                .collect();
            assert_eq!(engine.books_of_author(&author), expected);
        }
    }

    #[test]
    fn test_missing_lookups_are_none() {
        let store = MemoryStore::seeded();
        let engine = QueryEngine::new(&store);

        assert!(engine.get_book(999).is_none());
        assert!(engine.get_author(0).is_none());
        assert!(engine.get_continent("XX").is_none());
        assert!(engine.get_country("XX").is_none());
    }

    #[test]
    fn test_africa_has_six_countries_in_seed_order() {
        let store = MemoryStore::seeded();
        let engine = QueryEngine::new(&store);

        let continents = engine.list_continents();
        assert_eq!(continents.len(), 7);
        assert!(continents.iter().any(|c| c.name == "Africa" && c.code == "AF"));

        let africa = engine.get_continent("AF").unwrap();
        let names: Vec<_> = engine
            .countries_of_continent(&africa)
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(
            names,
            vec!["Egypt", "Ghana", "Kenya", "Morocco", "Nigeria", "South Africa"]
        );
    }

    #[test]
    fn test_country_continent_and_nullable_capital() {
        let store = MemoryStore::seeded();
        let engine = QueryEngine::new(&store);

        let antarctica = engine.get_country("AQ").unwrap();
        assert!(antarctica.capital.is_none());
        assert_eq!(
            engine.continent_of_country(&antarctica).map(|c| c.code),
            Some("AN".to_string())
        );
    }

    #[test]
    fn test_stats_on_seed() {
        let store = MemoryStore::seeded();
        let stats = QueryEngine::new(&store).stats();

        assert_eq!(stats.authors, 3);
        assert_eq!(stats.books, 8);
        assert_eq!(stats.dangling_books, 0);
        assert_eq!(stats.dangling_countries, 0);
    }
}

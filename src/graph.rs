//! Relationship resolvers - computed edges between entities
//!
//! Every relationship is a linear scan over the opposite collection:
//! - forward lookups (book → author, country → continent) take the first match
//! - reverse lookups (author → books, continent → countries) keep every match
//!   in insertion order
//!
//! A reference that matches nothing yields `None` or an empty list, never an
//! error.

use crate::model::{Author, Book, Continent, Country};
use crate::storage::Tables;

/// All books whose `author_id` is the author's id, in insertion order.
pub fn books_of_author<'a>(books: &'a [Book], author: &Author) -> Vec<&'a Book> {
    books.iter().filter(|book| book.author_id == author.id).collect()
}

/// The first author whose id is the book's `author_id`.
pub fn author_of_book<'a>(authors: &'a [Author], book: &Book) -> Option<&'a Author> {
    authors.iter().find(|author| author.id == book.author_id)
}

/// All countries whose `continent_code` is the continent's code, in insertion order.
pub fn countries_of_continent<'a>(countries: &'a [Country], continent: &Continent) -> Vec<&'a Country> {
    countries
        .iter()
        .filter(|country| country.continent_code == continent.code)
        .collect()
}

/// The first continent whose code is the country's `continent_code`.
pub fn continent_of_country<'a>(continents: &'a [Continent], country: &Country) -> Option<&'a Continent> {
    continents
        .iter()
        .find(|continent| continent.code == country.continent_code)
}

/// Statistics about the entity graph
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct GraphStats {
    pub authors: usize,
    pub books: usize,
    pub continents: usize,
    pub countries: usize,
    /// Books whose author id matches no author
    pub dangling_books: usize,
    /// Countries whose continent code matches no continent
    pub dangling_countries: usize,
}

impl GraphStats {
    /// Compute statistics over one consistent snapshot of the tables
    pub fn collect(tables: &Tables) -> Self {
        let dangling_books = tables
            .books
            .iter()
            .filter(|book| author_of_book(&tables.authors, book).is_none())
            .count();
        let dangling_countries = tables
            .countries
            .iter()
            .filter(|country| continent_of_country(&tables.continents, country).is_none())
            .count();

        Self {
            authors: tables.authors.len(),
            books: tables.books.len(),
            continents: tables.continents.len(),
            countries: tables.countries.len(),
            dangling_books,
            dangling_countries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_books() -> Vec<Book> {
        vec![
            Book::new(1, "First", 1),
            Book::new(2, "Second", 2),
            Book::new(3, "Third", 1),
        ]
    }

    #[test]
    fn test_books_of_author_keeps_insertion_order() {
        let books = sample_books();
        let author = Author::new(1, "Someone");

        let names: Vec<_> = books_of_author(&books, &author)
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(names, vec!["First", "Third"]);
    }

    #[test]
    fn test_books_of_unknown_author_is_empty() {
        let books = sample_books();
        assert!(books_of_author(&books, &Author::new(42, "Nobody")).is_empty());
    }

    #[test]
    fn test_author_of_book_with_dangling_id() {
        let authors = vec![Author::new(1, "Someone")];
        assert_eq!(
            author_of_book(&authors, &Book::new(1, "Known", 1)).map(|a| a.name.as_str()),
            Some("Someone")
        );
        assert!(author_of_book(&authors, &Book::new(2, "Orphan", 7)).is_none());
    }

    #[test]
    fn test_continent_country_links() {
        let continents = vec![Continent::new(1, "Africa", "AF"), Continent::new(2, "Europe", "EU")];
        let countries = vec![
            Country::new(1, "Kenya", "KE", Some("Nairobi"), "AF"),
            Country::new(2, "France", "FR", Some("Paris"), "EU"),
            Country::new(3, "Ghana", "GH", Some("Accra"), "AF"),
            Country::new(4, "Atlantis", "AT", None, "XX"),
        ];

        let african: Vec<_> = countries_of_continent(&countries, &continents[0])
            .iter()
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(african, vec!["KE", "GH"]);

        assert_eq!(
            continent_of_country(&continents, &countries[1]).map(|c| c.code.as_str()),
            Some("EU")
        );
        assert!(continent_of_country(&continents, &countries[3]).is_none());
    }

    #[test]
    fn test_stats_count_dangling_references() {
        let mut tables = Tables::default();
        tables.authors.push(Author::new(1, "Someone"));
        tables.books = sample_books();
        tables.countries.push(Country::new(1, "Atlantis", "AT", None, "XX"));

        let stats = GraphStats::collect(&tables);
        assert_eq!(stats.books, 3);
        assert_eq!(stats.dangling_books, 1);
        assert_eq!(stats.dangling_countries, 1);
    }
}

//! Lock-guarded in-memory storage

use parking_lot::RwLock;
use crate::model::{Author, Book, Continent, Country, Id};
use super::seed;

/// The four collections plus the id sequences for the appendable ones.
///
/// Ids come from a per-collection monotonic sequence that starts one past
/// the largest id present at construction, so they never depend on the
/// current collection length.
#[derive(Debug, Clone)]
pub struct Tables {
    pub authors: Vec<Author>,
    pub books: Vec<Book>,
    pub continents: Vec<Continent>,
    pub countries: Vec<Country>,
    next_author_id: Id,
    next_book_id: Id,
}

impl Default for Tables {
    fn default() -> Self {
        Self::from_records(Vec::new(), Vec::new(), Vec::new(), Vec::new())
    }
}

impl Tables {
    /// Build tables from existing records, deriving the id sequences
    pub fn from_records(
        authors: Vec<Author>,
        books: Vec<Book>,
        continents: Vec<Continent>,
        countries: Vec<Country>,
    ) -> Self {
        let next_author_id = authors.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let next_book_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;

        Self {
            authors,
            books,
            continents,
            countries,
            next_author_id,
            next_book_id,
        }
    }

    /// Append a new author with the next author id
    pub fn insert_author(&mut self, name: String) -> Author {
        let author = Author {
            id: self.next_author_id,
            name,
        };
        self.next_author_id += 1;
        self.authors.push(author.clone());
        author
    }

    /// Append a new book with the next book id
    pub fn insert_book(&mut self, name: String, author_id: Id) -> Book {
        let book = Book {
            id: self.next_book_id,
            name,
            author_id,
        };
        self.next_book_id += 1;
        self.books.push(book.clone());
        book
    }

    pub fn author_mut(&mut self, id: Id) -> Option<&mut Author> {
        self.authors.iter_mut().find(|a| a.id == id)
    }

    pub fn book_mut(&mut self, id: Id) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }
}

/// In-memory store shared by the schema, the server and the CLI.
///
/// One reader/writer lock guards all four collections. Readers see a
/// consistent snapshot; a mutation holds the write lock for its whole
/// read-modify-write. Callers must not hold the lock across an `.await`,
/// which the closure-scoped accessors enforce.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create a store holding the bundled seed dataset
    pub fn seeded() -> Self {
        Self::from_tables(seed::tables())
    }

    /// Create a store with empty collections (for testing)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_tables(tables: Tables) -> Self {
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Run `f` against a shared view of the tables
    pub fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> R {
        let guard = self.tables.read();
        f(&guard)
    }

    /// Run `f` against an exclusive view of the tables
    pub fn write<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> R {
        let mut guard = self.tables.write();
        f(&mut guard)
    }

    /// Clone the current contents of every collection
    pub fn snapshot(&self) -> Tables {
        self.read(Tables::clone)
    }
}

//! Mutation engine - create and partial-update for authors and books
//!
//! Each operation runs under the store's write lock, so the lookup and the
//! overwrite happen atomically with respect to readers.
//!
//! Partial updates only touch fields that are present in the patch. Presence
//! is explicit: `Some(String::new())` sets an empty name, `None` leaves the
//! field alone.

use crate::model::{Author, Book, Id};
use crate::storage::MemoryStore;

/// Fields of a book that an update may overwrite
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub name: Option<String>,
    pub author_id: Option<Id>,
}

/// Fields of an author that an update may overwrite
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorPatch {
    pub name: Option<String>,
}

/// Mutation engine over the entity store
pub struct MutationEngine<'a> {
    store: &'a MemoryStore,
}

impl<'a> MutationEngine<'a> {
    /// Create a new mutation engine
    pub fn new(store: &'a MemoryStore) -> Self {
        Self { store }
    }

    /// Append a book. `author_id` is stored as given, even if it resolves to no author.
    pub fn add_book(&self, name: String, author_id: Id) -> Book {
        let book = self.store.write(|t| t.insert_book(name, author_id));
        tracing::debug!(id = book.id, author_id, "added book");
        book
    }

    /// Overwrite the supplied fields of book `id`.
    ///
    /// Returns `None` and leaves the collection untouched if no book has that id.
    pub fn update_book(&self, id: Id, patch: BookPatch) -> Option<Book> {
        let updated = self.store.write(|t| {
            let book = t.book_mut(id)?;
            if let Some(name) = patch.name {
                book.name = name;
            }
            if let Some(author_id) = patch.author_id {
                book.author_id = author_id;
            }
            Some(book.clone())
        });

        match &updated {
            Some(_) => tracing::debug!(id, "updated book"),
            None => tracing::debug!(id, "update skipped: no such book"),
        }
        updated
    }

    /// Append an author
    pub fn add_author(&self, name: String) -> Author {
        let author = self.store.write(|t| t.insert_author(name));
        tracing::debug!(id = author.id, "added author");
        author
    }

    /// Overwrite the supplied fields of author `id`.
    ///
    /// Returns `None` and leaves the collection untouched if no author has that id.
    pub fn update_author(&self, id: Id, patch: AuthorPatch) -> Option<Author> {
        let updated = self.store.write(|t| {
            let author = t.author_mut(id)?;
            if let Some(name) = patch.name {
                author.name = name;
            }
            Some(author.clone())
        });

        match &updated {
            Some(_) => tracing::debug!(id, "updated author"),
            None => tracing::debug!(id, "update skipped: no such author"),
        }
        updated
    }
}

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::error::{CatalogError, CatalogResult};
use super::models::{Book, BookId, NewBook};

/// Authoritative in-memory collection of books.
///
/// Records are kept in insertion order alongside a name index. Both live
/// behind one lock so the duplicate check and the write form a single
/// critical section.
#[derive(Debug, Default)]
pub struct BookStore {
    inner: RwLock<Shelf>,
}

#[derive(Debug)]
struct Shelf {
    books: Vec<Book>,
    by_name: HashMap<String, BookId>,
    next_id: BookId,
}

impl Default for Shelf {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            by_name: HashMap::new(),
            next_id: 1,
        }
    }
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `candidate` under a fresh id unless its name is taken.
    pub fn insert(&self, candidate: NewBook) -> CatalogResult<Book> {
        let mut shelf = self.write();

        if shelf.by_name.contains_key(&candidate.name) {
            return Err(CatalogError::Conflict {
                name: candidate.name,
            });
        }

        let id = shelf.next_id;
        shelf.next_id += 1;

        let book = candidate.into_book(id);
        shelf.by_name.insert(book.name.clone(), id);
        shelf.books.push(book.clone());

        Ok(book)
    }

    /// Every stored book in insertion order.
    pub fn list_all(&self) -> Vec<Book> {
        self.read().books.clone()
    }

    /// Number of stored books, without copying them.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.read().books.len()
    }

    // A writer never leaves the shelf half-updated: every check runs before
    // the first mutation, so a poisoned guard still holds consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Shelf> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Shelf> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

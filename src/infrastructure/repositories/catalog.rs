//! In-memory catalog repository

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::{Book, BookCopy};
use crate::domain::ports::CatalogRepository;
use crate::domain::services::book_search;
use crate::domain::value_objects::{BookId, CopyId};
use crate::error::{LibraryError, LibraryResult};

use super::store::KeyedStore;

#[derive(Debug, Default)]
struct Catalog {
    books: KeyedStore<BookId, Book>,
    copies: KeyedStore<CopyId, BookCopy>,
}

/// Books and copies behind a single lock
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    inner: Mutex<Catalog>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from seed lists; later duplicates replace earlier ones
    pub fn with_data(books: Vec<Book>, copies: Vec<BookCopy>) -> Self {
        let mut catalog = Catalog::default();
        for book in books {
            catalog.books.upsert(book.id().clone(), book);
        }
        for copy in copies {
            catalog.copies.upsert(copy.id().clone(), copy);
        }
        Self {
            inner: Mutex::new(catalog),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Catalog> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn books(&self) -> Vec<Book> {
        self.lock().books.values().to_vec()
    }

    fn find_book(&self, id: &BookId) -> Option<Book> {
        self.lock().books.get(id).cloned()
    }

    fn search_by_title(&self, term: &str) -> Vec<Book> {
        book_search::search_by_title(self.lock().books.values(), term)
    }

    fn search_by_author(&self, term: &str) -> Vec<Book> {
        book_search::search_by_author(self.lock().books.values(), term)
    }

    fn copies(&self) -> Vec<BookCopy> {
        self.lock().copies.values().to_vec()
    }

    fn find_copy(&self, id: &CopyId) -> Option<BookCopy> {
        self.lock().copies.get(id).cloned()
    }

    fn find_available_copies(&self, book_id: &BookId) -> Vec<BookCopy> {
        book_search::find_available_copies(self.lock().copies.values(), book_id)
    }

    fn count_available_copies(&self, book_id: &BookId) -> usize {
        book_search::count_available_copies(self.lock().copies.values(), book_id)
    }

    fn save_book(&self, book: Book) {
        self.lock().books.upsert(book.id().clone(), book);
    }

    fn save_copy(&self, copy: BookCopy) {
        self.lock().copies.upsert(copy.id().clone(), copy);
    }

    fn remove_book(&self, id: &BookId) -> Option<Book> {
        self.lock().books.remove(id)
    }

    fn remove_copy(&self, id: &CopyId) -> Option<BookCopy> {
        self.lock().copies.remove(id)
    }

    fn checkout_first_available(&self, book_id: &BookId) -> LibraryResult<Option<BookCopy>> {
        let mut catalog = self.lock();
        let Some(copy) = book_search::find_available_copies(catalog.copies.values(), book_id)
            .into_iter()
            .next()
        else {
            return Ok(None);
        };
        let borrowed = copy.borrow()?;
        catalog.copies.upsert(borrowed.id().clone(), borrowed.clone());
        Ok(Some(borrowed))
    }

    fn return_copy(&self, id: &CopyId) -> LibraryResult<BookCopy> {
        let mut catalog = self.lock();
        let copy = catalog
            .copies
            .get(id)
            .ok_or_else(|| LibraryError::CopyNotFound { id: id.to_string() })?;
        let returned = copy.return_copy()?;
        catalog.copies.upsert(id.clone(), returned.clone());
        Ok(returned)
    }
}

//! CatalogRepository port - books and their physical copies
//!
//! Implementations keep catalog order: every list returned here is in the
//! order records were first inserted, which is also the tie-break used when
//! picking "the first available copy".

use crate::domain::entities::{Book, BookCopy};
use crate::domain::value_objects::{BookId, CopyId};
use crate::error::LibraryResult;

pub trait CatalogRepository: Send + Sync {
    fn books(&self) -> Vec<Book>;

    fn find_book(&self, id: &BookId) -> Option<Book>;

    /// Case-insensitive substring match on the title
    fn search_by_title(&self, term: &str) -> Vec<Book>;

    /// Case-insensitive substring match on the author
    fn search_by_author(&self, term: &str) -> Vec<Book>;

    fn copies(&self) -> Vec<BookCopy>;

    fn find_copy(&self, id: &CopyId) -> Option<BookCopy>;

    fn find_available_copies(&self, book_id: &BookId) -> Vec<BookCopy>;

    fn count_available_copies(&self, book_id: &BookId) -> usize;

    /// Insert or replace a book by id
    fn save_book(&self, book: Book);

    /// Insert or replace a copy by id
    fn save_copy(&self, copy: BookCopy);

    fn remove_book(&self, id: &BookId) -> Option<Book>;

    fn remove_copy(&self, id: &CopyId) -> Option<BookCopy>;

    /// Mark the first available copy of `book_id` as borrowed.
    ///
    /// Lookup and transition happen under one lock. `Ok(None)` when no copy
    /// is available.
    fn checkout_first_available(&self, book_id: &BookId) -> LibraryResult<Option<BookCopy>>;

    /// Mark a borrowed copy as available again
    fn return_copy(&self, id: &CopyId) -> LibraryResult<BookCopy>;
}

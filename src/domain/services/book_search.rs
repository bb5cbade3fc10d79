//! Book search service
//!
//! Pure functions over catalog slices. Results keep input order; an empty
//! result is an ordinary outcome, not an error.

use crate::domain::entities::{Book, BookCopy};
use crate::domain::value_objects::BookId;

/// Books whose title contains `term`, ignoring case
pub fn search_by_title(books: &[Book], term: &str) -> Vec<Book> {
    let needle = term.to_lowercase();
    books
        .iter()
        .filter(|book| book.title().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Books whose author contains `term`, ignoring case
pub fn search_by_author(books: &[Book], term: &str) -> Vec<Book> {
    let needle = term.to_lowercase();
    books
        .iter()
        .filter(|book| book.author().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

fn available_copies<'a>(
    copies: &'a [BookCopy],
    book_id: &'a BookId,
) -> impl Iterator<Item = &'a BookCopy> + 'a {
    copies
        .iter()
        .filter(move |copy| copy.book_id() == book_id && copy.is_available())
}

/// Available copies of one book, in list order
pub fn find_available_copies(copies: &[BookCopy], book_id: &BookId) -> Vec<BookCopy> {
    available_copies(copies, book_id).cloned().collect()
}

pub fn count_available_copies(copies: &[BookCopy], book_id: &BookId) -> usize {
    available_copies(copies, book_id).count()
}

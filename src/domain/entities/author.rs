//! Author entity
//!
//! Identity plus two value objects. Publishing returns a new snapshot with
//! the same id.

use crate::domain::value_objects::{AuthorId, AuthorName, BookCount};
use crate::error::LibraryResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    id: AuthorId,
    name: AuthorName,
    book_count: BookCount,
}

impl Author {
    pub fn new(id: AuthorId, name: AuthorName, book_count: BookCount) -> Self {
        Self {
            id,
            name,
            book_count,
        }
    }

    /// A brand new author with a generated id and no books
    pub fn create(first_name: &str, last_name: &str) -> LibraryResult<Self> {
        Ok(Self::new(
            AuthorId::generate(),
            AuthorName::new(first_name, last_name)?,
            BookCount::ZERO,
        ))
    }

    pub fn id(&self) -> &AuthorId {
        &self.id
    }

    pub fn name(&self) -> &AuthorName {
        &self.name
    }

    pub fn book_count(&self) -> BookCount {
        self.book_count
    }

    pub fn publish_book(&self) -> Self {
        Self {
            book_count: self.book_count.increment(),
            ..self.clone()
        }
    }

    pub fn publish_books(&self, count: i64) -> LibraryResult<Self> {
        Ok(Self {
            book_count: self.book_count.add(count)?,
            ..self.clone()
        })
    }
}

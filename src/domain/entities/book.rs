//! Catalog entities: book metadata and physical copies

use serde::Serialize;

use crate::domain::value_objects::{BookId, CopyId, CopyStatus};
use crate::error::{LibraryError, LibraryResult};

/// A catalog title. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    isbn: String,
}

impl Book {
    /// Create a book; title and author must not be blank
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> LibraryResult<Self> {
        let title = title.into();
        let author = author.into();
        if title.trim().is_empty() {
            return Err(LibraryError::BlankField { field: "title" });
        }
        if author.trim().is_empty() {
            return Err(LibraryError::BlankField { field: "author" });
        }
        Ok(Self {
            id,
            title,
            author,
            isbn: isbn.into(),
        })
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }
}

/// One physical copy of a book.
///
/// `borrow` and `return_copy` produce a new value; the only legal transitions
/// are available -> borrowed -> available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookCopy {
    id: CopyId,
    book_id: BookId,
    status: CopyStatus,
}

impl BookCopy {
    /// A new copy, on the shelf
    pub fn new(id: CopyId, book_id: BookId) -> Self {
        Self::with_status(id, book_id, CopyStatus::Available)
    }

    pub fn with_status(id: CopyId, book_id: BookId, status: CopyStatus) -> Self {
        Self {
            id,
            book_id,
            status,
        }
    }

    pub fn id(&self) -> &CopyId {
        &self.id
    }

    pub fn book_id(&self) -> &BookId {
        &self.book_id
    }

    pub fn status(&self) -> CopyStatus {
        self.status
    }

    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }

    pub fn borrow(&self) -> LibraryResult<Self> {
        if self.status.is_borrowed() {
            return Err(LibraryError::CopyAlreadyBorrowed {
                id: self.id.to_string(),
            });
        }
        Ok(Self {
            status: CopyStatus::Borrowed,
            ..self.clone()
        })
    }

    pub fn return_copy(&self) -> LibraryResult<Self> {
        if self.status.is_available() {
            return Err(LibraryError::CopyNotBorrowed {
                id: self.id.to_string(),
            });
        }
        Ok(Self {
            status: CopyStatus::Available,
            ..self.clone()
        })
    }
}

//! Author Use Case

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::Author;
use crate::domain::ports::AuthorRepository;
use crate::domain::services::{can_receive_award, classify, is_prolific};
use crate::domain::value_objects::{AuthorId, ProductivityLevel};
use crate::error::{LibraryError, LibraryResult};

use super::result::{AuthorClassification, ProductivityStatistics};

pub struct AuthorService {
    repository: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(repository: Arc<dyn AuthorRepository>) -> Self {
        Self { repository }
    }

    /// Register a new author with zero books; full names are unique
    pub fn create_author(&self, first_name: &str, last_name: &str) -> LibraryResult<Author> {
        let author = Author::create(first_name, last_name)?;
        if self
            .repository
            .find_by_full_name(author.name().first_name(), author.name().last_name())
            .is_some()
        {
            return Err(LibraryError::AuthorAlreadyExists {
                name: author.name().full_name(),
            });
        }
        info!(author = %author.id(), name = %author.name(), "author created");
        Ok(self.repository.save(author))
    }

    pub fn find_author(&self, id: &AuthorId) -> LibraryResult<Author> {
        self.repository
            .find_by_id(id)
            .ok_or_else(|| LibraryError::AuthorNotFound { id: id.to_string() })
    }

    pub fn publish_book(&self, id: &AuthorId) -> LibraryResult<Author> {
        let author = self.find_author(id)?.publish_book();
        Ok(self.repository.save(author))
    }

    pub fn publish_books(&self, id: &AuthorId, count: i64) -> LibraryResult<Author> {
        let author = self.find_author(id)?.publish_books(count)?;
        info!(author = %id, books = %author.book_count(), "books published");
        Ok(self.repository.save(author))
    }

    pub fn classification(&self, id: &AuthorId) -> LibraryResult<AuthorClassification> {
        let author = self.find_author(id)?;
        Ok(AuthorClassification {
            level: classify(author.book_count()),
            is_prolific: is_prolific(author.book_count()),
            can_receive_award: can_receive_award(&author),
            author,
        })
    }

    pub fn authors_at_level(&self, level: ProductivityLevel) -> Vec<Author> {
        self.repository.find_by_level(level)
    }

    pub fn statistics(&self) -> ProductivityStatistics {
        ProductivityStatistics {
            by_level: ProductivityLevel::ALL
                .iter()
                .map(|&level| (level, self.repository.count_by_level(level)))
                .collect(),
            prolific_authors: self.repository.find_prolific(),
            total_authors: self.repository.find_all().len(),
        }
    }

    /// The `limit` authors with most books, ties in insertion order
    pub fn top_authors(&self, limit: usize) -> Vec<Author> {
        self.repository.find_top_by_book_count(limit)
    }

    pub fn remove_author(&self, id: &AuthorId) -> LibraryResult<Author> {
        let removed = self
            .repository
            .delete_by_id(id)
            .ok_or_else(|| LibraryError::AuthorNotFound { id: id.to_string() })?;
        info!(author = %id, "author removed");
        Ok(removed)
    }
}

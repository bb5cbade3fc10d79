//! AuthorRepository port

use crate::domain::entities::Author;
use crate::domain::value_objects::{AuthorId, ProductivityLevel};

pub trait AuthorRepository: Send + Sync {
    /// Insert or replace by id, returning the stored author
    fn save(&self, author: Author) -> Author;

    fn find_by_id(&self, id: &AuthorId) -> Option<Author>;

    fn find_all(&self) -> Vec<Author>;

    fn delete_by_id(&self, id: &AuthorId) -> Option<Author>;

    fn find_prolific(&self) -> Vec<Author>;

    fn find_by_level(&self, level: ProductivityLevel) -> Vec<Author>;

    fn find_by_full_name(&self, first_name: &str, last_name: &str) -> Option<Author>;

    fn count_by_level(&self, level: ProductivityLevel) -> usize;

    /// Highest book counts first; ties keep insertion order
    fn find_top_by_book_count(&self, limit: usize) -> Vec<Author>;
}

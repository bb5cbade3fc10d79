//! Book count value object
//!
//! Number of books an author has published. Never negative.

use serde::{Deserialize, Serialize};

use crate::error::{LibraryError, LibraryResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookCount(u64);

impl BookCount {
    pub const ZERO: BookCount = BookCount(0);

    /// Create a count, rejecting negative values
    pub fn new(value: i64) -> LibraryResult<Self> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| LibraryError::NegativeBookCount { value })
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// One more book
    pub fn increment(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Add (or with a negative argument, subtract) books.
    ///
    /// Fails when the result would be negative.
    pub fn add(&self, books: i64) -> LibraryResult<Self> {
        let current = i64::try_from(self.0).unwrap_or(i64::MAX);
        Self::new(current.saturating_add(books))
    }
}

impl From<u64> for BookCount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for BookCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

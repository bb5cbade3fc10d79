//! Author classification service
//!
//! A step function over the book count:
//!
//! | books   | level       |
//! |---------|-------------|
//! | 0       | Aspiring    |
//! | 1-5     | Beginner    |
//! | 6-10    | Developing  |
//! | 11-100  | Established |
//! | 101+    | Prolific    |

use crate::domain::entities::Author;
use crate::domain::value_objects::{BookCount, ProductivityLevel};

/// Book count above which an author is prolific
pub const PROLIFIC_THRESHOLD: u64 = 100;

pub fn classify(count: BookCount) -> ProductivityLevel {
    match count.value() {
        0 => ProductivityLevel::Aspiring,
        1..=5 => ProductivityLevel::Beginner,
        6..=10 => ProductivityLevel::Developing,
        11..=PROLIFIC_THRESHOLD => ProductivityLevel::Established,
        _ => ProductivityLevel::Prolific,
    }
}

pub fn is_prolific(count: BookCount) -> bool {
    count.value() > PROLIFIC_THRESHOLD
}

/// Prolific authors with a non-blank first name.
///
/// `AuthorName` already rejects blank names, so the name check never fails
/// for a constructed author; it is kept so the rule reads in full.
pub fn can_receive_award(author: &Author) -> bool {
    is_prolific(author.book_count()) && !author.name().first_name().trim().is_empty()
}

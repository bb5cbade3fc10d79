//! Domain Services
//!
//! Pure business logic over domain entities. No I/O, no hidden clock: every
//! function takes what it needs as arguments.

pub mod book_search;
pub mod classification;
pub mod lending;
pub mod membership;
pub mod orders;

pub use classification::{can_receive_award, classify, is_prolific, PROLIFIC_THRESHOLD};
pub use lending::BookLoanInfo;

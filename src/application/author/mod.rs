//! Author Module
//!
//! Author bookkeeping and productivity reporting.
//!
//! - `result` - report types (`AuthorClassification`, `ProductivityStatistics`)
//! - `use_case` - `AuthorService`

mod result;
mod use_case;

pub use result::{AuthorClassification, ProductivityStatistics};
pub use use_case::AuthorService;

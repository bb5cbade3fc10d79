//! Clock port
//!
//! Loans and overdue checks read the current time through this trait so
//! tests can pin it.

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

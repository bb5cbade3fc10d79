//! Loan entity
//!
//! A loan ties one copy to one member for [`Loan::PERIOD_DAYS`] days. It is
//! active until a return time is recorded; returning twice is an error.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::domain::value_objects::{CopyId, LoanId, UserId};
use crate::error::{LibraryError, LibraryResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Loan {
    id: LoanId,
    member_id: UserId,
    copy_id: CopyId,
    borrowed_at: DateTime<Utc>,
    due_date: DateTime<Utc>,
    returned_at: Option<DateTime<Utc>>,
}

impl Loan {
    /// Length of every loan
    pub const PERIOD_DAYS: i64 = 14;

    /// Open a loan at `borrowed_at`, due [`Self::PERIOD_DAYS`] later
    pub fn open(id: LoanId, member_id: UserId, copy_id: CopyId, borrowed_at: DateTime<Utc>) -> Self {
        Self {
            id,
            member_id,
            copy_id,
            borrowed_at,
            due_date: borrowed_at + Duration::days(Self::PERIOD_DAYS),
            returned_at: None,
        }
    }

    /// Rebuild a loan from stored fields (seed data)
    pub fn restore(
        id: LoanId,
        member_id: UserId,
        copy_id: CopyId,
        borrowed_at: DateTime<Utc>,
        returned_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            returned_at,
            ..Self::open(id, member_id, copy_id, borrowed_at)
        }
    }

    pub fn id(&self) -> &LoanId {
        &self.id
    }

    pub fn member_id(&self) -> &UserId {
        &self.member_id
    }

    pub fn copy_id(&self) -> &CopyId {
        &self.copy_id
    }

    pub fn borrowed_at(&self) -> DateTime<Utc> {
        self.borrowed_at
    }

    pub fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    pub fn returned_at(&self) -> Option<DateTime<Utc>> {
        self.returned_at
    }

    pub fn is_active(&self) -> bool {
        self.returned_at.is_none()
    }

    /// Active and strictly past its due date at `now`
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active() && now > self.due_date
    }

    /// Close the loan at `returned_at`
    pub fn return_book(&self, returned_at: DateTime<Utc>) -> LibraryResult<Self> {
        if !self.is_active() {
            return Err(LibraryError::LoanAlreadyReturned {
                id: self.id.to_string(),
            });
        }
        Ok(Self {
            returned_at: Some(returned_at),
            ..self.clone()
        })
    }
}

//! LoanRepository port - the lending ledger

use chrono::{DateTime, Utc};

use crate::domain::entities::Loan;
use crate::domain::value_objects::{LoanId, UserId};
use crate::error::LibraryResult;

pub trait LoanRepository: Send + Sync {
    fn all(&self) -> Vec<Loan>;

    fn find(&self, id: &LoanId) -> Option<Loan>;

    /// Every loan of one member, returned or not, in ledger order
    fn find_by_member(&self, member_id: &UserId) -> Vec<Loan>;

    /// Append a new loan or replace an existing one by id
    fn save(&self, loan: Loan);

    fn remove(&self, id: &LoanId) -> Option<Loan>;

    /// Record the return of an active loan.
    ///
    /// Lookup, the already-returned check and the write happen under one
    /// lock, so at most one caller closes a given loan.
    fn close(&self, id: &LoanId, returned_at: DateTime<Utc>) -> LibraryResult<Loan>;
}

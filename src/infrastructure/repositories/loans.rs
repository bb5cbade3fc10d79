//! In-memory loan ledger

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use crate::domain::entities::Loan;
use crate::domain::ports::LoanRepository;
use crate::domain::value_objects::{LoanId, UserId};
use crate::error::{LibraryError, LibraryResult};

use super::store::KeyedStore;

#[derive(Debug, Default)]
pub struct InMemoryLoans {
    inner: Mutex<KeyedStore<LoanId, Loan>>,
}

impl InMemoryLoans {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(loans: Vec<Loan>) -> Self {
        let mut store = KeyedStore::new();
        for loan in loans {
            store.upsert(loan.id().clone(), loan);
        }
        Self {
            inner: Mutex::new(store),
        }
    }

    fn lock(&self) -> MutexGuard<'_, KeyedStore<LoanId, Loan>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LoanRepository for InMemoryLoans {
    fn all(&self) -> Vec<Loan> {
        self.lock().values().to_vec()
    }

    fn find(&self, id: &LoanId) -> Option<Loan> {
        self.lock().get(id).cloned()
    }

    fn find_by_member(&self, member_id: &UserId) -> Vec<Loan> {
        self.lock()
            .values()
            .iter()
            .filter(|loan| loan.member_id() == member_id)
            .cloned()
            .collect()
    }

    fn save(&self, loan: Loan) {
        self.lock().upsert(loan.id().clone(), loan);
    }

    fn remove(&self, id: &LoanId) -> Option<Loan> {
        self.lock().remove(id)
    }

    fn close(&self, id: &LoanId, returned_at: DateTime<Utc>) -> LibraryResult<Loan> {
        let mut store = self.lock();
        let loan = store
            .get(id)
            .ok_or_else(|| LibraryError::LoanNotFound { id: id.to_string() })?;
        let closed = loan.return_book(returned_at)?;
        store.upsert(id.clone(), closed.clone());
        Ok(closed)
    }
}

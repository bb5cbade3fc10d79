//! Lending views over the loan ledger
//!
//! All functions filter by member id and keep ledger order. `now` is passed
//! in so the overdue check stays pure.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Book, BookCopy, Loan};
use crate::domain::value_objects::{BookId, CopyId, UserId};

/// A borrowed book with the copy and loan that hold it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookLoanInfo {
    pub book: Book,
    pub copy: BookCopy,
    pub loan: Loan,
}

pub fn active_loans(loans: &[Loan], member_id: &UserId) -> Vec<Loan> {
    loans
        .iter()
        .filter(|loan| loan.member_id() == member_id && loan.is_active())
        .cloned()
        .collect()
}

pub fn overdue_loans(loans: &[Loan], member_id: &UserId, now: DateTime<Utc>) -> Vec<Loan> {
    loans
        .iter()
        .filter(|loan| loan.member_id() == member_id && loan.is_overdue_at(now))
        .cloned()
        .collect()
}

pub fn has_overdue_books(loans: &[Loan], member_id: &UserId, now: DateTime<Utc>) -> bool {
    loans
        .iter()
        .any(|loan| loan.member_id() == member_id && loan.is_overdue_at(now))
}

/// Join a member's active loans to their copy and book.
///
/// Loans whose copy or book cannot be resolved are dropped.
pub fn join_borrowed_books<C, B>(active: Vec<Loan>, find_copy: C, find_book: B) -> Vec<BookLoanInfo>
where
    C: Fn(&CopyId) -> Option<BookCopy>,
    B: Fn(&BookId) -> Option<Book>,
{
    active
        .into_iter()
        .filter_map(|loan| {
            let copy = find_copy(loan.copy_id())?;
            let book = find_book(copy.book_id())?;
            Some(BookLoanInfo { book, copy, loan })
        })
        .collect()
}

/// Slice form of [`join_borrowed_books`]
pub fn borrowed_books(
    loans: &[Loan],
    copies: &[BookCopy],
    books: &[Book],
    member_id: &UserId,
) -> Vec<BookLoanInfo> {
    join_borrowed_books(
        active_loans(loans, member_id),
        |copy_id| copies.iter().find(|c| c.id() == copy_id).cloned(),
        |book_id| books.iter().find(|b| b.id() == book_id).cloned(),
    )
}

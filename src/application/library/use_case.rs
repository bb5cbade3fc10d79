//! Library Use Case
//!
//! Login, search, borrow, return, block/unblock and loan reporting.
//!
//! Expected negative outcomes (wrong password, no copy left, overdue block)
//! come back as `None`. Broken preconditions (non-librarian caller, unknown
//! member, double return) come back as `LibraryError`.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::{Book, Loan, User};
use crate::domain::ports::{CatalogRepository, Clock, LoanRepository, MemberRepository};
use crate::domain::services::lending::{self, BookLoanInfo};
use crate::domain::services::membership;
use crate::domain::value_objects::{BookId, LoanId, UserId};
use crate::error::{LibraryError, LibraryResult};
use crate::infrastructure::LibrarySeed;

pub struct LibraryService {
    catalog: Arc<dyn CatalogRepository>,
    members: Arc<dyn MemberRepository>,
    loans: Arc<dyn LoanRepository>,
    clock: Arc<dyn Clock>,
}

impl LibraryService {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        members: Arc<dyn MemberRepository>,
        loans: Arc<dyn LoanRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            catalog,
            members,
            loans,
            clock,
        }
    }

    /// Build a service over fresh in-memory stores holding `seed`
    pub fn from_seed(seed: LibrarySeed, clock: Arc<dyn Clock>) -> Self {
        let repos = seed.into_repositories();
        Self::new(repos.catalog, repos.members, repos.loans, clock)
    }

    pub fn login(&self, email: &str, password: &str) -> Option<User> {
        membership::authenticate(
            &self.members.users(),
            &self.members.credentials(),
            email,
            password,
        )
    }

    pub fn search_books_by_title(&self, term: &str) -> Vec<Book> {
        self.catalog.search_by_title(term)
    }

    pub fn search_books_by_author(&self, term: &str) -> Vec<Book> {
        self.catalog.search_by_author(term)
    }

    /// Borrow the first available copy of `book_id` for `member`.
    ///
    /// The member is re-read from the membership store, so a block applied
    /// after login takes effect. Returns `Ok(None)` when the member cannot
    /// borrow, holds an overdue loan, or no copy is available.
    pub fn borrow_book(&self, member: &User, book_id: &BookId) -> LibraryResult<Option<Loan>> {
        let Some(current) = self.members.find_by_id(member.id()) else {
            debug!(member = %member.id(), "borrow rejected: unknown member");
            return Ok(None);
        };
        if !membership::can_borrow(&current) {
            debug!(member = %current.id(), status = %current.status(), "borrow rejected: cannot borrow");
            return Ok(None);
        }

        let now = self.clock.now();
        let held = self.loans.find_by_member(current.id());
        if lending::has_overdue_books(&held, current.id(), now) {
            debug!(member = %current.id(), "borrow rejected: overdue loans");
            return Ok(None);
        }

        let Some(copy) = self.catalog.checkout_first_available(book_id)? else {
            debug!(member = %current.id(), book = %book_id, "borrow rejected: no available copy");
            return Ok(None);
        };

        let loan = Loan::open(LoanId::generate(), current.id().clone(), copy.id().clone(), now);
        self.loans.save(loan.clone());
        info!(
            member = %current.id(),
            copy = %copy.id(),
            loan = %loan.id(),
            due = %loan.due_date(),
            "book borrowed"
        );
        Ok(Some(loan))
    }

    /// Close an active loan and put its copy back on the shelf.
    ///
    /// The ledger closes the loan atomically first, so a concurrent second
    /// return fails before touching the catalog. If the copy cannot be
    /// returned the loan is reopened.
    pub fn return_book(&self, loan_id: &LoanId) -> LibraryResult<Loan> {
        let returned = self.loans.close(loan_id, self.clock.now())?;
        if let Err(err) = self.catalog.return_copy(returned.copy_id()) {
            self.loans.save(Loan::restore(
                returned.id().clone(),
                returned.member_id().clone(),
                returned.copy_id().clone(),
                returned.borrowed_at(),
                None,
            ));
            return Err(err);
        }
        info!(loan = %loan_id, copy = %returned.copy_id(), "book returned");
        Ok(returned)
    }

    pub fn block_member(&self, librarian: &User, member_id: &UserId) -> LibraryResult<User> {
        Self::require_librarian(librarian, "block members")?;
        let blocked = self.find_member(member_id)?.block();
        self.members.save(blocked.clone());
        info!(member = %member_id, by = %librarian.id(), "member blocked");
        Ok(blocked)
    }

    pub fn unblock_member(&self, librarian: &User, member_id: &UserId) -> LibraryResult<User> {
        Self::require_librarian(librarian, "unblock members")?;
        let unblocked = self.find_member(member_id)?.unblock();
        self.members.save(unblocked.clone());
        info!(member = %member_id, by = %librarian.id(), "member unblocked");
        Ok(unblocked)
    }

    /// Active loans of `member_id` joined with their copy and book
    pub fn list_borrowed_books(
        &self,
        librarian: &User,
        member_id: &UserId,
    ) -> LibraryResult<Vec<BookLoanInfo>> {
        Self::require_librarian(librarian, "list borrowed books")?;
        let member = self.find_member(member_id)?;
        let active = lending::active_loans(&self.loans.find_by_member(member.id()), member.id());
        Ok(lending::join_borrowed_books(
            active,
            |id| self.catalog.find_copy(id),
            |id| self.catalog.find_book(id),
        ))
    }

    pub fn active_loans(&self, member_id: &UserId) -> Vec<Loan> {
        lending::active_loans(&self.loans.find_by_member(member_id), member_id)
    }

    pub fn overdue_loans(&self, member_id: &UserId) -> Vec<Loan> {
        lending::overdue_loans(
            &self.loans.find_by_member(member_id),
            member_id,
            self.clock.now(),
        )
    }

    pub fn count_available_copies(&self, book_id: &BookId) -> usize {
        self.catalog.count_available_copies(book_id)
    }

    pub fn users(&self) -> Vec<User> {
        self.members.users()
    }

    pub fn books(&self) -> Vec<Book> {
        self.catalog.books()
    }

    fn require_librarian(caller: &User, action: &'static str) -> LibraryResult<()> {
        if membership::is_librarian(caller) {
            Ok(())
        } else {
            Err(LibraryError::Unauthorized { action })
        }
    }

    fn find_member(&self, id: &UserId) -> LibraryResult<User> {
        self.members
            .find_by_id(id)
            .ok_or_else(|| LibraryError::MemberNotFound { id: id.to_string() })
    }
}

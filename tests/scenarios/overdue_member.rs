//! Scenario: Overdue loans block new borrowing
//!
//! Steps:
//! 1. Bob borrows Clean Code
//! 2. Fourteen days pass; the loan is due but not overdue
//! 3. One more day; Bob is refused Design Patterns
//! 4. Bob returns Clean Code and can borrow again

use chrono::Duration;

use crate::common::*;

use athenaeum::domain::entities::Loan;
use athenaeum::domain::value_objects::{BookId, LoanId};

#[test]
fn scenario_overdue_blocks_until_returned() {
    let (library, clock) = library(LIBRARY_SEED);
    let bob = library.login("bob@email.com", "password123").unwrap();
    let clean_code = BookId::new("B001").unwrap();
    let patterns = BookId::new("B002").unwrap();

    // Step 1
    let loan = library.borrow_book(&bob, &clean_code).unwrap().unwrap();
    assert_eq!(loan.due_date(), start() + Duration::days(Loan::PERIOD_DAYS));

    // Step 2
    clock.advance(Duration::days(Loan::PERIOD_DAYS));
    assert!(library.overdue_loans(bob.id()).is_empty());

    // Step 3
    clock.advance(Duration::days(1));
    assert_eq!(library.overdue_loans(bob.id()).len(), 1);
    assert!(library.borrow_book(&bob, &patterns).unwrap().is_none());

    // Step 4
    let returned = library.return_book(loan.id()).unwrap();
    assert!(!returned.is_active());
    assert!(library.return_book(loan.id()).is_err());
    assert!(library.borrow_book(&bob, &patterns).unwrap().is_some());
}

#[test]
fn scenario_seeded_overdue_loan() {
    let (library, _) = library(&overdue_seed());
    let bob = library.login("bob@email.com", "password123").unwrap();
    let carol = library.login("carol@email.com", "carolpass").unwrap();
    let patterns = BookId::new("B002").unwrap();

    assert_eq!(library.count_available_copies(&patterns), 1);
    assert!(library.borrow_book(&bob, &patterns).unwrap().is_none());

    // Other members are unaffected
    assert!(library.borrow_book(&carol, &patterns).unwrap().is_some());

    library.return_book(&LoanId::new("LN-OLD").unwrap()).unwrap();
    assert!(library.borrow_book(&bob, &patterns).unwrap().is_some());
}

//! Scenario: One copy, two readers, one block
//!
//! Steps:
//! 1. Bob borrows the only copy of Clean Code
//! 2. Carol asks for the same book and is turned away
//! 3. Alice (librarian) blocks Bob
//! 4. Bob asks for Design Patterns, which is on the shelf, and is refused
//! 5. Bob's loan is returned, Carol gets Clean Code

use crate::common::*;

use athenaeum::domain::value_objects::{BookId, CopyStatus, MemberStatus};
use athenaeum::LibraryError;

#[test]
fn scenario_single_copy_then_block() {
    let (library, _) = library(LIBRARY_SEED);
    let clean_code = BookId::new("B001").unwrap();
    let patterns = BookId::new("B002").unwrap();

    let alice = library.login("alice@library.com", "admin123").unwrap();
    let bob = library.login("bob@email.com", "password123").unwrap();
    let carol = library.login("carol@email.com", "carolpass").unwrap();

    // Step 1
    let loan = library
        .borrow_book(&bob, &clean_code)
        .unwrap()
        .expect("Step 1: Bob should get the only copy");
    assert_eq!(loan.copy_id().as_str(), "C001");
    assert_eq!(library.count_available_copies(&clean_code), 0);

    // Step 2
    assert!(
        library.borrow_book(&carol, &clean_code).unwrap().is_none(),
        "Step 2: no copy left for Carol"
    );

    // Step 3
    let blocked = library.block_member(&alice, bob.id()).unwrap();
    assert_eq!(blocked.status(), MemberStatus::Blocked);

    // Step 4
    assert_eq!(library.count_available_copies(&patterns), 2);
    assert!(
        library.borrow_book(&bob, &patterns).unwrap().is_none(),
        "Step 4: blocked member must be refused even with copies on the shelf"
    );
    assert_eq!(library.count_available_copies(&patterns), 2);

    // Step 5
    library.return_book(loan.id()).unwrap();
    let carols = library.borrow_book(&carol, &clean_code).unwrap().unwrap();
    assert_eq!(carols.copy_id().as_str(), "C001");

    let report = library.list_borrowed_books(&alice, carol.id()).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].book.title(), "Clean Code");
    assert_eq!(report[0].copy.status(), CopyStatus::Borrowed);
    assert!(library.list_borrowed_books(&alice, bob.id()).unwrap().is_empty());
}

#[test]
fn scenario_member_cannot_moderate() {
    let (library, _) = library(LIBRARY_SEED);
    let bob = library.login("bob@email.com", "password123").unwrap();
    let carol = library.login("carol@email.com", "carolpass").unwrap();

    let err = library.block_member(&bob, carol.id()).unwrap_err();
    assert!(matches!(err, LibraryError::Unauthorized { .. }));

    // Carol is untouched and can still borrow
    let book = BookId::new("B002").unwrap();
    assert!(library.borrow_book(&carol, &book).unwrap().is_some());
}

#[test]
fn scenario_search_then_borrow() {
    let (library, _) = library(LIBRARY_SEED);
    let bob = library.login("bob@email.com", "password123").unwrap();

    let hits = library.search_books_by_title("PATTERNS");
    assert_eq!(hits.len(), 1);

    let first = library.borrow_book(&bob, hits[0].id()).unwrap().unwrap();
    let second = library.borrow_book(&bob, hits[0].id()).unwrap().unwrap();
    assert_eq!(first.copy_id().as_str(), "C002");
    assert_eq!(second.copy_id().as_str(), "C003");
    assert_eq!(library.active_loans(bob.id()).len(), 2);
}

//! Property tests for the lending workflow.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use athenaeum::domain::value_objects::BookId;
use athenaeum::infrastructure::FixedClock;
use athenaeum::{LibraryService, LibrarySeed};

/// `copies` copies of one book, a librarian, and `members` members; every
/// password is "secret1"
fn seed(copies: usize, members: usize) -> String {
    let mut out = String::from(
        "[[books]]\nid = \"B1\"\ntitle = \"Dune\"\nauthor = \"Frank Herbert\"\n\
         \n[[users]]\nid = \"L0\"\nname = \"Librarian\"\nemail = \"desk@library.com\"\nrole = \"librarian\"\n\
         \n[[credentials]]\nemail = \"desk@library.com\"\npassword = \"secret1\"\n",
    );
    for c in 0..copies {
        out += &format!("\n[[copies]]\nid = \"C{c}\"\nbook = \"B1\"\n");
    }
    for m in 0..members {
        out += &format!(
            "\n[[users]]\nid = \"M{m}\"\nname = \"Member {m}\"\nemail = \"m{m}@email.com\"\n\
             \n[[credentials]]\nemail = \"m{m}@email.com\"\npassword = \"secret1\"\n"
        );
    }
    out
}

fn library(copies: usize, members: usize) -> LibraryService {
    let seed = LibrarySeed::parse(&seed(copies, members), Path::new("prop.toml")).unwrap();
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap());
    LibraryService::from_seed(seed, Arc::new(clock))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: borrows succeed exactly while copies remain, and no copy is
    /// handed out twice.
    #[test]
    fn property_copies_never_double_lent(
        copies in 0usize..5,
        requests in proptest::collection::vec(0usize..4, 0..12),
    ) {
        let library = library(copies, 4);
        let book = BookId::new("B1").unwrap();
        let mut lent = HashSet::new();

        for member in requests {
            let user = library
                .login(&format!("m{member}@email.com"), "secret1")
                .unwrap();
            let before = library.count_available_copies(&book);
            match library.borrow_book(&user, &book).unwrap() {
                Some(loan) => {
                    prop_assert!(before > 0);
                    prop_assert!(lent.insert(loan.copy_id().clone()));
                    prop_assert_eq!(library.count_available_copies(&book), before - 1);
                }
                None => prop_assert_eq!(before, 0),
            }
        }
        prop_assert_eq!(lent.len() + library.count_available_copies(&book), copies);
    }

    /// PROPERTY: a blocked member is refused no matter how many copies exist.
    #[test]
    fn property_blocked_member_always_refused(copies in 0usize..6) {
        let library = library(copies, 1);
        let librarian = library.login("desk@library.com", "secret1").unwrap();
        let member = library.login("m0@email.com", "secret1").unwrap();
        let book = BookId::new("B1").unwrap();

        library.block_member(&librarian, member.id()).unwrap();
        prop_assert!(library.borrow_book(&member, &book).unwrap().is_none());
        prop_assert_eq!(library.count_available_copies(&book), copies);
    }
}

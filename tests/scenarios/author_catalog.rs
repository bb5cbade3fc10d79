//! Scenario: Tracking author productivity
//!
//! Steps:
//! 1. Register three authors
//! 2. Publish books at different rates
//! 3. Read per-author classification, statistics and the top list

use std::sync::Arc;

use athenaeum::domain::value_objects::ProductivityLevel;
use athenaeum::infrastructure::InMemoryAuthors;
use athenaeum::AuthorService;

#[test]
fn scenario_author_productivity_report() {
    let service = AuthorService::new(Arc::new(InMemoryAuthors::new()));

    // Step 1
    let asimov = service.create_author("Isaac", "Asimov").unwrap();
    let herbert = service.create_author("Frank", "Herbert").unwrap();
    let newcomer = service.create_author("Nova", "Quill").unwrap();
    assert!(service.create_author("Isaac", "Asimov").is_err());

    // Step 2
    service.publish_books(asimov.id(), 500).unwrap();
    service.publish_books(herbert.id(), 30).unwrap();
    service.publish_book(newcomer.id()).unwrap();

    // Step 3
    let report = service.classification(asimov.id()).unwrap();
    assert_eq!(report.level, ProductivityLevel::Prolific);
    assert!(report.can_receive_award);

    let report = service.classification(herbert.id()).unwrap();
    assert_eq!(report.level, ProductivityLevel::Established);
    assert!(!report.can_receive_award);

    let stats = service.statistics();
    assert_eq!(stats.total_authors, 3);
    assert_eq!(stats.count(ProductivityLevel::Beginner), 1);
    assert_eq!(stats.prolific_authors.len(), 1);

    let top: Vec<_> = service
        .top_authors(2)
        .iter()
        .map(|a| a.name().full_name())
        .collect();
    assert_eq!(top, ["Isaac Asimov", "Frank Herbert"]);

    service.remove_author(newcomer.id()).unwrap();
    assert_eq!(service.statistics().total_authors, 2);
}

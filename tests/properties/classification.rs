//! Property tests for productivity classification.

use proptest::prelude::*;

use athenaeum::domain::value_objects::{BookCount, ProductivityLevel};
use athenaeum::{classify, is_prolific};

fn expected(n: u64) -> ProductivityLevel {
    match n {
        0 => ProductivityLevel::Aspiring,
        1..=5 => ProductivityLevel::Beginner,
        6..=10 => ProductivityLevel::Developing,
        11..=100 => ProductivityLevel::Established,
        _ => ProductivityLevel::Prolific,
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: classify matches the step table for every count.
    #[test]
    fn property_classify_is_step_function(n in 0u64..=100_000) {
        prop_assert_eq!(classify(BookCount::from(n)), expected(n));
    }

    /// PROPERTY: prolific means strictly more than 100 books.
    #[test]
    fn property_prolific_iff_over_hundred(n in 0u64..=10_000) {
        prop_assert_eq!(is_prolific(BookCount::from(n)), n > 100);
    }

    /// PROPERTY: classification never goes down as the count grows.
    #[test]
    fn property_classify_monotonic(a in 0u64..=1_000, b in 0u64..=1_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify(BookCount::from(lo)) <= classify(BookCount::from(hi)));
    }

    /// PROPERTY: negative counts are rejected, non-negative ones accepted.
    #[test]
    fn property_book_count_sign(n in any::<i64>()) {
        prop_assert_eq!(BookCount::new(n).is_ok(), n >= 0);
    }
}

#[test]
fn boundary_values() {
    let cases = [
        (0, ProductivityLevel::Aspiring),
        (1, ProductivityLevel::Beginner),
        (5, ProductivityLevel::Beginner),
        (6, ProductivityLevel::Developing),
        (10, ProductivityLevel::Developing),
        (11, ProductivityLevel::Established),
        (100, ProductivityLevel::Established),
        (101, ProductivityLevel::Prolific),
    ];
    for (n, level) in cases {
        assert_eq!(classify(BookCount::from(n)), level, "count {n}");
    }
}

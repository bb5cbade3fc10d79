//! Productivity level of an author, derived from their book count

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductivityLevel {
    /// No books yet
    Aspiring,
    /// 1 to 5 books
    Beginner,
    /// 6 to 10 books
    Developing,
    /// 11 to 100 books
    Established,
    /// More than 100 books
    Prolific,
}

impl ProductivityLevel {
    /// All levels in ascending order
    pub const ALL: [ProductivityLevel; 5] = [
        ProductivityLevel::Aspiring,
        ProductivityLevel::Beginner,
        ProductivityLevel::Developing,
        ProductivityLevel::Established,
        ProductivityLevel::Prolific,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductivityLevel::Aspiring => "Aspiring",
            ProductivityLevel::Beginner => "Beginner",
            ProductivityLevel::Developing => "Developing",
            ProductivityLevel::Established => "Established",
            ProductivityLevel::Prolific => "Prolific",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProductivityLevel::Aspiring => "Just starting their writing journey",
            ProductivityLevel::Beginner => "Getting their first books published",
            ProductivityLevel::Developing => "Building their reputation and skills",
            ProductivityLevel::Established => "Well-known author with consistent output",
            ProductivityLevel::Prolific => "Exceptionally productive and influential author",
        }
    }
}

impl std::fmt::Display for ProductivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

//! Copy status value object - whether a physical copy is on the shelf

use serde::{Deserialize, Serialize};

/// Availability of a single book copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CopyStatus {
    /// On the shelf, can be lent
    #[default]
    Available,
    /// Out on loan
    Borrowed,
}

impl CopyStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, CopyStatus::Available)
    }

    pub fn is_borrowed(&self) -> bool {
        matches!(self, CopyStatus::Borrowed)
    }
}

impl std::fmt::Display for CopyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CopyStatus::Available => write!(f, "available"),
            CopyStatus::Borrowed => write!(f, "borrowed"),
        }
    }
}

//! Error types for Athenaeum
//!
//! Precondition violations are fatal for the current operation and surface
//! as a `LibraryError`. Expected negative outcomes (bad credentials, no copy
//! left to lend) are modelled as `Option` by the callers instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Athenaeum operations
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Main error type for Athenaeum operations
#[derive(Error, Debug)]
pub enum LibraryError {
    /// A required text field is empty or whitespace
    #[error("{field} cannot be empty")]
    BlankField { field: &'static str },

    /// Email address without an '@'
    #[error("invalid email '{email}'")]
    InvalidEmail { email: String },

    /// Password shorter than the minimum length
    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    /// Book count would drop below zero
    #[error("book count cannot be negative (got {value})")]
    NegativeBookCount { value: i64 },

    /// Caller lacks the role required for an action
    #[error("only librarians can {action}")]
    Unauthorized { action: &'static str },

    /// Member lookup by id failed
    #[error("member not found: {id}")]
    MemberNotFound { id: String },

    /// Author lookup by id failed
    #[error("author not found: {id}")]
    AuthorNotFound { id: String },

    /// An author with the same full name already exists
    #[error("author already exists: {name}")]
    AuthorAlreadyExists { name: String },

    /// Loan lookup by id failed
    #[error("loan not found: {id}")]
    LoanNotFound { id: String },

    /// Loan has a recorded return time already
    #[error("loan {id} already returned")]
    LoanAlreadyReturned { id: String },

    /// Copy lookup by id failed
    #[error("book copy not found: {id}")]
    CopyNotFound { id: String },

    /// Borrow of a copy that is already out
    #[error("book copy {id} is already borrowed")]
    CopyAlreadyBorrowed { id: String },

    /// Return of a copy that is not out
    #[error("book copy {id} is not borrowed")]
    CopyNotBorrowed { id: String },

    /// Deposit or withdrawal of zero
    #[error("{operation} amount must be positive")]
    NonPositiveAmount { operation: &'static str },

    /// Withdrawal larger than the balance
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: String, requested: String },

    /// Deposit that would push the balance past the largest amount
    #[error("balance overflow: balance {balance}, deposit {deposit}")]
    BalanceOverflow { balance: String, deposit: String },

    /// Same identifier used twice in one seed collection
    #[error("duplicate {kind} id '{id}' in {file}")]
    DuplicateId {
        kind: &'static str,
        id: String,
        file: PathBuf,
    },

    /// Seed record referring to an identifier that does not exist
    #[error("{kind} '{id}' references unknown {target} '{reference}' in {file}")]
    DanglingReference {
        kind: &'static str,
        id: String,
        target: &'static str,
        reference: String,
        file: PathBuf,
    },

    /// Seed loans and copy statuses disagree about who holds a copy
    #[error("{kind} '{id}' {problem} in {file}")]
    InconsistentLoan {
        kind: &'static str,
        id: String,
        problem: String,
        file: PathBuf,
    },

    /// Invalid TOML in a config or seed file
    #[error("invalid TOML in {file}: {message}")]
    InvalidToml { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

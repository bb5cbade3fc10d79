//! Domain Entities
//!
//! Immutable snapshots with a stable identity. State changes produce a new
//! snapshot that replaces the old one in its repository.
//! - `Book` / `BookCopy` - catalog titles and physical copies
//! - `User` - members and librarians
//! - `Loan` - lending records
//! - `Author` - author with a book count
//! - `BankAccount` / `AccountHistory` - immutable ledger
//! - `Order` - customer order with products

mod account;
mod author;
mod book;
mod loan;
mod order;
mod user;

pub use account::{AccountHistory, BankAccount, Transaction, TransactionKind};
pub use author::Author;
pub use book::{Book, BookCopy};
pub use loan::Loan;
pub use order::{Customer, Order, Product};
pub use user::User;

//! TOML seed loader
//!
//! Reads books, copies, users, credentials and loans from a TOML file and
//! validates them through the domain constructors. File order is kept, since
//! it is the tie-break order for every query. Loan timestamps are quoted
//! RFC 3339 strings.
//!
//! ```toml
//! [[books]]
//! id = "B001"
//! title = "Clean Code"
//! author = "Robert Martin"
//! isbn = "978-0132350884"
//!
//! [[copies]]
//! id = "C001"
//! book = "B001"
//!
//! [[users]]
//! id = "M001"
//! name = "Bob Reader"
//! email = "bob@email.com"
//! role = "member"
//!
//! [[credentials]]
//! email = "bob@email.com"
//! password = "password123"
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::entities::{Book, BookCopy, Loan, User};
use crate::domain::value_objects::{
    BookId, CopyId, CopyStatus, Credentials, LoanId, MemberStatus, UserId, UserRole,
};
use crate::error::{LibraryError, LibraryResult};

use super::repositories::{InMemoryCatalog, InMemoryLoans, InMemoryMembers};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlSeed {
    #[serde(default)]
    books: Vec<TomlBook>,
    #[serde(default)]
    copies: Vec<TomlCopy>,
    #[serde(default)]
    users: Vec<TomlUser>,
    #[serde(default)]
    credentials: Vec<TomlCredentials>,
    #[serde(default)]
    loans: Vec<TomlLoan>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlBook {
    id: String,
    title: String,
    author: String,
    #[serde(default)]
    isbn: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlCopy {
    id: String,
    book: String,
    #[serde(default)]
    status: CopyStatus,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlUser {
    id: String,
    name: String,
    email: String,
    #[serde(default)]
    role: UserRole,
    #[serde(default)]
    status: MemberStatus,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlCredentials {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlLoan {
    id: String,
    member: String,
    copy: String,
    borrowed_at: DateTime<Utc>,
    #[serde(default)]
    returned_at: Option<DateTime<Utc>>,
}

/// Validated seed data, ready to build repositories from
#[derive(Debug, Clone, Default)]
pub struct LibrarySeed {
    pub books: Vec<Book>,
    pub copies: Vec<BookCopy>,
    pub users: Vec<User>,
    pub credentials: Vec<Credentials>,
    pub loans: Vec<Loan>,
}

/// The three library stores built from one seed
pub struct SeededRepositories {
    pub catalog: Arc<InMemoryCatalog>,
    pub members: Arc<InMemoryMembers>,
    pub loans: Arc<InMemoryLoans>,
}

impl LibrarySeed {
    /// Read and validate a seed file
    pub fn load(path: &Path) -> LibraryResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Parse seed TOML; `origin` only labels errors
    pub fn parse(content: &str, origin: &Path) -> LibraryResult<Self> {
        let raw: TomlSeed = toml::from_str(content).map_err(|e| LibraryError::InvalidToml {
            file: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        SeedBuilder::new(origin).build(raw)
    }

    pub fn into_repositories(self) -> SeededRepositories {
        SeededRepositories {
            catalog: Arc::new(InMemoryCatalog::with_data(self.books, self.copies)),
            members: Arc::new(InMemoryMembers::with_data(self.users, self.credentials)),
            loans: Arc::new(InMemoryLoans::with_data(self.loans)),
        }
    }
}

struct SeedBuilder {
    file: PathBuf,
}

impl SeedBuilder {
    fn new(file: &Path) -> Self {
        Self {
            file: file.to_path_buf(),
        }
    }

    fn unique(&self, seen: &mut HashSet<String>, kind: &'static str, id: &str) -> LibraryResult<()> {
        if seen.insert(id.to_string()) {
            Ok(())
        } else {
            Err(LibraryError::DuplicateId {
                kind,
                id: id.to_string(),
                file: self.file.clone(),
            })
        }
    }

    fn dangling(&self, kind: &'static str, id: &str, target: &'static str, reference: &str) -> LibraryError {
        LibraryError::DanglingReference {
            kind,
            id: id.to_string(),
            target,
            reference: reference.to_string(),
            file: self.file.clone(),
        }
    }

    fn inconsistent(&self, kind: &'static str, id: &str, problem: String) -> LibraryError {
        LibraryError::InconsistentLoan {
            kind,
            id: id.to_string(),
            problem,
            file: self.file.clone(),
        }
    }

    fn build(&self, raw: TomlSeed) -> LibraryResult<LibrarySeed> {
        let mut book_ids = HashSet::new();
        let mut books = Vec::with_capacity(raw.books.len());
        for b in raw.books {
            self.unique(&mut book_ids, "book", &b.id)?;
            books.push(Book::new(BookId::new(b.id)?, b.title, b.author, b.isbn)?);
        }

        let mut copy_ids = HashSet::new();
        let mut copies = Vec::with_capacity(raw.copies.len());
        for c in raw.copies {
            self.unique(&mut copy_ids, "copy", &c.id)?;
            if !book_ids.contains(&c.book) {
                return Err(self.dangling("copy", &c.id, "book", &c.book));
            }
            copies.push(BookCopy::with_status(
                CopyId::new(c.id)?,
                BookId::new(c.book)?,
                c.status,
            ));
        }

        let mut user_ids = HashSet::new();
        let mut users = Vec::with_capacity(raw.users.len());
        for u in raw.users {
            self.unique(&mut user_ids, "user", &u.id)?;
            users.push(User::new(UserId::new(u.id)?, u.name, u.email, u.role, u.status)?);
        }

        let mut emails = HashSet::new();
        let mut credentials = Vec::with_capacity(raw.credentials.len());
        for c in raw.credentials {
            self.unique(&mut emails, "credentials", &c.email)?;
            credentials.push(Credentials::new(c.email, &c.password)?);
        }

        let mut loan_ids = HashSet::new();
        let mut held = HashSet::new();
        let mut loans = Vec::with_capacity(raw.loans.len());
        for l in raw.loans {
            self.unique(&mut loan_ids, "loan", &l.id)?;
            if !user_ids.contains(&l.member) {
                return Err(self.dangling("loan", &l.id, "member", &l.member));
            }
            if !copy_ids.contains(&l.copy) {
                return Err(self.dangling("loan", &l.id, "copy", &l.copy));
            }
            if l.returned_at.is_none() {
                let borrowed = copies
                    .iter()
                    .any(|c| c.id().as_str() == l.copy && c.status() == CopyStatus::Borrowed);
                if !borrowed {
                    return Err(self.inconsistent(
                        "loan",
                        &l.id,
                        format!("is active but copy '{}' is not borrowed", l.copy),
                    ));
                }
                if !held.insert(l.copy.clone()) {
                    return Err(self.inconsistent(
                        "loan",
                        &l.id,
                        format!("is a second active loan on copy '{}'", l.copy),
                    ));
                }
            }
            loans.push(Loan::restore(
                LoanId::new(l.id)?,
                UserId::new(l.member)?,
                CopyId::new(l.copy)?,
                l.borrowed_at,
                l.returned_at,
            ));
        }

        // A borrowed copy must be accounted for by exactly one active loan
        if let Some(orphan) = copies
            .iter()
            .find(|c| c.status() == CopyStatus::Borrowed && !held.contains(c.id().as_str()))
        {
            return Err(self.inconsistent(
                "copy",
                orphan.id().as_str(),
                "is borrowed but has no active loan".to_string(),
            ));
        }

        Ok(LibrarySeed {
            books,
            copies,
            users,
            credentials,
            loans,
        })
    }
}

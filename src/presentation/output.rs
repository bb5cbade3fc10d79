//! Output Rendering
//!
//! Every result renders to a `String`: human text, or NDJSON (one JSON
//! object per line, each tagged with an `event`).

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::config::OutputFormat;
use crate::domain::entities::{Book, Loan, User};
use crate::domain::services::BookLoanInfo;
use crate::domain::value_objects::ProductivityLevel;

/// Renders command results in the configured format
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    pub format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn classification(&self, count: u64, level: ProductivityLevel, prolific: bool) -> String {
        if self.is_json() {
            return line(json!({
                "event": "classify",
                "count": count,
                "level": level,
                "prolific": prolific,
            }));
        }
        format!("{count} books: {level} ({})\n", level.description())
    }

    /// Books with their available copy counts
    pub fn books(&self, books: &[(Book, usize)]) -> String {
        if self.is_json() {
            return books
                .iter()
                .map(|(book, available)| {
                    line(json!({
                        "event": "book",
                        "id": book.id(),
                        "title": book.title(),
                        "author": book.author(),
                        "isbn": book.isbn(),
                        "available": available,
                    }))
                })
                .collect();
        }
        if books.is_empty() {
            return "no books found\n".to_string();
        }
        books
            .iter()
            .map(|(book, available)| {
                format!(
                    "{}  {} by {}  [{} available]\n",
                    book.id(),
                    book.title(),
                    book.author(),
                    available
                )
            })
            .collect()
    }

    pub fn login(&self, user: Option<&User>) -> String {
        match (self.is_json(), user) {
            (true, Some(user)) => line(json!({
                "event": "login",
                "success": true,
                "id": user.id(),
                "name": user.name(),
                "role": user.role(),
                "status": user.status(),
            })),
            (true, None) => line(json!({ "event": "login", "success": false })),
            (false, Some(user)) => format!(
                "logged in as {} <{}> ({}, {})\n",
                user.name(),
                user.email(),
                user.role(),
                user.status()
            ),
            (false, None) => "login failed\n".to_string(),
        }
    }

    pub fn borrow(&self, loan: Option<&Loan>) -> String {
        match (self.is_json(), loan) {
            (true, Some(loan)) => line(json!({
                "event": "borrow",
                "borrowed": true,
                "loan": loan.id(),
                "copy": loan.copy_id(),
                "due": loan.due_date(),
            })),
            (true, None) => line(json!({ "event": "borrow", "borrowed": false })),
            (false, Some(loan)) => format!(
                "borrowed copy {} (loan {}), due {}\n",
                loan.copy_id(),
                loan.id(),
                day(loan.due_date())
            ),
            (false, None) => "not borrowed\n".to_string(),
        }
    }

    pub fn returned(&self, loan: &Loan) -> String {
        if self.is_json() {
            return line(json!({
                "event": "return",
                "loan": loan.id(),
                "copy": loan.copy_id(),
                "returned_at": loan.returned_at(),
            }));
        }
        format!("returned copy {} (loan {})\n", loan.copy_id(), loan.id())
    }

    /// A member's borrowed books; `now` marks overdue ones
    pub fn borrowed_books(&self, infos: &[BookLoanInfo], now: DateTime<Utc>) -> String {
        if self.is_json() {
            return infos
                .iter()
                .map(|info| {
                    line(json!({
                        "event": "loan",
                        "loan": info.loan.id(),
                        "copy": info.copy.id(),
                        "book": info.book.id(),
                        "title": info.book.title(),
                        "due": info.loan.due_date(),
                        "overdue": info.loan.is_overdue_at(now),
                    }))
                })
                .collect();
        }
        if infos.is_empty() {
            return "no borrowed books\n".to_string();
        }
        infos
            .iter()
            .map(|info| {
                let flag = if info.loan.is_overdue_at(now) {
                    "  OVERDUE"
                } else {
                    ""
                };
                format!(
                    "{}  {}  due {}{}\n",
                    info.copy.id(),
                    info.book.title(),
                    day(info.loan.due_date()),
                    flag
                )
            })
            .collect()
    }

    pub fn member(&self, user: &User) -> String {
        if self.is_json() {
            return line(json!({
                "event": "member",
                "id": user.id(),
                "name": user.name(),
                "status": user.status(),
            }));
        }
        format!("member {} ({}) is now {}\n", user.id(), user.name(), user.status())
    }
}

fn line(value: serde_json::Value) -> String {
    let mut out = value.to_string();
    out.push('\n');
    out
}

fn day(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

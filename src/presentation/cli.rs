//! CLI Argument Parsing
//!
//! Global flags (--config, --seed, --json, --verbose) are inherited by all
//! subcommands. Every command loads the seed, runs one operation and exits.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Athenaeum - a small library lending desk
#[derive(Parser, Debug)]
#[command(name = "athenaeum")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./athenaeum.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed TOML with books, copies, users, credentials and loans
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// One JSON object per line instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Email and password of the acting user
#[derive(Args, Debug, Clone)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify an author by number of published books
    Classify {
        /// Number of books (negative counts are rejected)
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },

    /// Search the catalog (case-insensitive substring)
    Search {
        #[arg(long, conflicts_with = "author", required_unless_present = "author")]
        title: Option<String>,

        #[arg(long)]
        author: Option<String>,
    },

    /// Check a set of credentials
    Login {
        #[command(flatten)]
        login: LoginArgs,
    },

    /// Borrow the first available copy of a book
    Borrow {
        #[command(flatten)]
        login: LoginArgs,

        /// Book id
        #[arg(long)]
        book: String,
    },

    /// Return a loan
    Return {
        /// Loan id
        #[arg(long)]
        loan: String,
    },

    /// List a member's borrowed books (librarians only)
    Loans {
        #[command(flatten)]
        login: LoginArgs,

        /// Member id
        #[arg(long)]
        member: String,
    },

    /// Block a member (librarians only)
    Block {
        #[command(flatten)]
        login: LoginArgs,

        #[arg(long)]
        member: String,
    },

    /// Unblock a member (librarians only)
    Unblock {
        #[command(flatten)]
        login: LoginArgs,

        #[arg(long)]
        member: String,
    },
}

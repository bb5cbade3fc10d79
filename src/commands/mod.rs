//! Command handlers
//!
//! Each handler runs one operation and returns the rendered output.

mod classify;
mod library;

use std::path::Path;

use anyhow::{Context, Result};

use athenaeum::presentation::{create_library_service, Commands, Renderer};
use athenaeum::LibraryService;

pub fn run(command: Commands, seed: Option<&Path>, renderer: Renderer) -> Result<String> {
    match command {
        Commands::Classify { count } => classify::cmd_classify(count, &renderer),
        Commands::Search { title, author } => library::cmd_search(
            &open(seed)?,
            title.as_deref(),
            author.as_deref(),
            &renderer,
        ),
        Commands::Login { login } => library::cmd_login(&open(seed)?, &login, &renderer),
        Commands::Borrow { login, book } => {
            library::cmd_borrow(&open(seed)?, &login, &book, &renderer)
        }
        Commands::Return { loan } => library::cmd_return(&open(seed)?, &loan, &renderer),
        Commands::Loans { login, member } => {
            library::cmd_loans(&open(seed)?, &login, &member, &renderer)
        }
        Commands::Block { login, member } => {
            library::cmd_block(&open(seed)?, &login, &member, true, &renderer)
        }
        Commands::Unblock { login, member } => {
            library::cmd_block(&open(seed)?, &login, &member, false, &renderer)
        }
    }
}

fn open(seed: Option<&Path>) -> Result<LibraryService> {
    let seed = seed.context("no seed file: pass --seed or set seed.path in athenaeum.toml")?;
    create_library_service(seed).with_context(|| format!("failed to load seed {}", seed.display()))
}

//! Library command handlers
//!
//! Commands acting on behalf of a user log in first; bad credentials are an
//! error here, except for `login` itself which just reports the outcome.

use anyhow::{anyhow, Result};
use chrono::Utc;

use athenaeum::domain::entities::User;
use athenaeum::domain::value_objects::{BookId, LoanId, UserId};
use athenaeum::presentation::{LoginArgs, Renderer};
use athenaeum::LibraryService;

fn session(library: &LibraryService, login: &LoginArgs) -> Result<User> {
    library
        .login(&login.email, &login.password)
        .ok_or_else(|| anyhow!("invalid email or password for {}", login.email))
}

pub fn cmd_search(
    library: &LibraryService,
    title: Option<&str>,
    author: Option<&str>,
    renderer: &Renderer,
) -> Result<String> {
    let books = match (title, author) {
        (Some(title), _) => library.search_books_by_title(title),
        (None, Some(author)) => library.search_books_by_author(author),
        (None, None) => Vec::new(),
    };
    let with_counts: Vec<_> = books
        .into_iter()
        .map(|book| {
            let available = library.count_available_copies(book.id());
            (book, available)
        })
        .collect();
    Ok(renderer.books(&with_counts))
}

pub fn cmd_login(library: &LibraryService, login: &LoginArgs, renderer: &Renderer) -> Result<String> {
    let user = library.login(&login.email, &login.password);
    Ok(renderer.login(user.as_ref()))
}

pub fn cmd_borrow(
    library: &LibraryService,
    login: &LoginArgs,
    book: &str,
    renderer: &Renderer,
) -> Result<String> {
    let member = session(library, login)?;
    let loan = library.borrow_book(&member, &BookId::new(book)?)?;
    Ok(renderer.borrow(loan.as_ref()))
}

pub fn cmd_return(library: &LibraryService, loan: &str, renderer: &Renderer) -> Result<String> {
    let returned = library.return_book(&LoanId::new(loan)?)?;
    Ok(renderer.returned(&returned))
}

pub fn cmd_loans(
    library: &LibraryService,
    login: &LoginArgs,
    member: &str,
    renderer: &Renderer,
) -> Result<String> {
    let librarian = session(library, login)?;
    let infos = library.list_borrowed_books(&librarian, &UserId::new(member)?)?;
    Ok(renderer.borrowed_books(&infos, Utc::now()))
}

pub fn cmd_block(
    library: &LibraryService,
    login: &LoginArgs,
    member: &str,
    block: bool,
    renderer: &Renderer,
) -> Result<String> {
    let librarian = session(library, login)?;
    let member = UserId::new(member)?;
    let user = if block {
        library.block_member(&librarian, &member)?
    } else {
        library.unblock_member(&librarian, &member)?
    };
    Ok(renderer.member(&user))
}

//! Library Module
//!
//! Orchestrates the lending workflow over the catalog, membership and loan
//! stores.
//!
//! ## Usage
//!
//! ```ignore
//! use athenaeum::application::library::LibraryService;
//!
//! let library = LibraryService::from_seed(seed, Arc::new(SystemClock));
//! let bob = library.login("bob@email.com", "password123");
//! ```

mod use_case;

pub use use_case::LibraryService;

//! Jobseek - a job-search bar for the terminal
//!
//! Renders the classic job-board search header as a TUI widget: two
//! autocomplete text inputs (keyword and location), a Search button, and
//! four multi-select filter dropdowns (Experience, Job Type, Salary,
//! Education) whose option panels open one at a time.
//!
//! All state is local and in-memory. Triggering Search does not run a
//! query; it emits a [`SearchRequest`] on a channel supplied by the caller,
//! which is the integration point for whatever actually executes searches.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::mpsc;
//! use std::time::Duration;
//! use jobseek::tui::app::App;
//!
//! fn main() -> jobseek::Result<()> {
//!     let (tx, rx) = mpsc::channel();
//!     let mut app = App::new(tx);
//!
//!     jobseek::tui::run(&mut app, Duration::from_millis(50))?;
//!
//!     for request in rx.try_iter() {
//!         println!("searched for: {}", request.query.keyword);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod filters;
pub mod logging;
pub mod query;
pub mod suggest;
pub mod tui;

// Re-export main types
pub use error::{JobSeekError, Result};
pub use filters::{FilterCategory, SelectionStore};
pub use query::{SearchQuery, SearchRequest};
pub use suggest::{filter_candidates, FieldState, KEYWORD_CANDIDATES, LOCATION_CANDIDATES};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

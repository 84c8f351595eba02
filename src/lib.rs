//! # Custom Search Engine Client
//!
//! A Rust client for the Google Programmable Search Engine JSON API:
//! build a query from typed parameters, issue a single HTTP request, and
//! map the JSON response into typed results.
//!
//! This library is organized into several modules:
//! - `flags`: named bit-set types for the large `lr` (language) and `cr`
//!   (country) enumerations, with their wire-format encoder
//! - `engine`: the HTTP client and request builder
//! - `result`: JSON-to-struct response mapping
//! - `error`: the error taxonomy shared by all of the above
//!
//! ```no_run
//! use cse_client::{Language, Search, SearchRequest};
//!
//! #[tokio::main]
//! async fn main() -> cse_client::Result<()> {
//!     let search = Search::new("your-api-key");
//!     let request = SearchRequest::new("rust programming")
//!         .language(Language::from_flags([("english", true)])?);
//!
//!     for result in search.search(&request).await? {
//!         println!("{}: {}", result.title, result.link);
//!     }
//!     Ok(())
//! }
//! ```

// Re-export commonly used types at the crate root
pub use error::{CseError, Result};

pub mod error;

pub mod flags {
    pub mod bitfield;
    pub mod country;
    pub mod language;
}

pub mod engine;
pub mod result;

// Public API exports
pub use engine::{Search, SearchRequest};
pub use flags::bitfield::{FlagDescriptor, FlagSet, FlagTable};
pub use flags::country::CountryCode;
pub use flags::language::Language;
pub use result::SearchResult;

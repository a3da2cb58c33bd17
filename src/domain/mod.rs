//! Domain layer for samlookup.
//!
//! This module contains the core domain types, independent of the HTTP client
//! and of any rendering concerns.
//!
//! # Organization
//!
//! - [`entity`]: Entity record and result page models
//! - [`error`]: Error types and result aliases
//! - [`query`]: Search query sanitization
//!
//! # Examples
//!
//! ```
//! use samlookup::domain::{EntityRecord, SearchQuery};
//!
//! let query = SearchQuery::sanitize("http://acme.com");
//! assert_eq!(query.as_str(), "acme.com");
//!
//! let record: EntityRecord = serde_json::from_str("{}").unwrap();
//! assert!(!record.is_selectable());
//! ```

pub mod entity;
pub mod error;
pub mod query;

pub use entity::{EntityRecord, Page};
pub use error::{Result, SamLookupError};
pub use query::SearchQuery;

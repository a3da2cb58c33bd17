//! Client for the entity search endpoint.
//!
//! # Architecture
//!
//! - `messages`: request ids, request URLs and outcome classification
//! - `backend`: the [`SearchBackend`] seam
//! - `http`: reqwest implementation of the seam

pub mod backend;
pub mod http;
pub mod messages;

pub use backend::SearchBackend;
pub use http::HttpBackend;
pub use messages::{RawResponse, RequestId, SearchOutcome, SearchRequest};

//! Search backend abstraction.
//!
//! This module defines the [`SearchBackend`] trait that sits between the
//! application runtime and the network. The runtime only ever sees a
//! [`SearchOutcome`]; how the request is carried is up to the implementation.
//!
//! # Implementations
//!
//! - [`crate::client::HttpBackend`]: talks to the search endpoint over HTTP
//!
//! Tests provide their own in-memory implementations returning canned
//! [`RawResponse`](crate::client::RawResponse) values.

use crate::client::messages::{SearchOutcome, SearchRequest};
use std::future::Future;

/// Carries one [`SearchRequest`] to the search service.
///
/// Implementations never fail: transport problems are reported as
/// [`SearchOutcome::Transport`] so the caller can put them in the error slot
/// like any other failed search.
///
/// # Examples
///
/// ```
/// use samlookup::client::{RawResponse, SearchBackend, SearchOutcome, SearchRequest};
///
/// struct Offline;
///
/// impl SearchBackend for Offline {
///     async fn fetch(&self, _request: &SearchRequest) -> SearchOutcome {
///         SearchOutcome::classify(&RawResponse {
///             status: 503,
///             status_text: "Service Unavailable".to_string(),
///             body: String::new(),
///         })
///     }
/// }
/// ```
pub trait SearchBackend: Send + Sync {
    /// Performs the request and classifies the response.
    fn fetch(&self, request: &SearchRequest) -> impl Future<Output = SearchOutcome> + Send;
}

impl<T: SearchBackend> SearchBackend for &T {
    fn fetch(&self, request: &SearchRequest) -> impl Future<Output = SearchOutcome> + Send {
        (**self).fetch(request)
    }
}

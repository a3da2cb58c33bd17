//! Request and response types for the entity search endpoint.
//!
//! Every dispatch is an explicit [`SearchRequest`] value with its own
//! [`RequestId`]. Completions come back as a [`SearchOutcome`] tagged with the
//! id of the request that produced them, so the application layer can tell a
//! current response from a stale one.

use crate::domain::error::{Result, SamLookupError};
use crate::domain::entity::null_as_default;
use crate::domain::{EntityRecord, Page, SearchQuery};
use reqwest::Url;
use serde::Deserialize;

/// Path of the entity search endpoint, relative to the backend origin.
pub const ENTITIES_PATH: &str = "/api/entity-information/v3/entities";

/// Sections requested for every entity.
pub const INCLUDE_SECTIONS: &str = "samToolsData,entityRegistration,coreData";

/// Only active registrations are searched.
pub const REGISTRATION_STATUS: &str = "A";

/// Registration purposes: all awards, and federal assistance awards only.
pub const PURPOSE_OF_REGISTRATION_CODE: &str = "Z2~Z5";

/// Shown when a failed response carries no error messages.
const APPLICATION_ERROR_FALLBACK: &str = "The search could not be completed.";

/// Shown when a 200 response body cannot be parsed.
const MALFORMED_MESSAGE: &str = "The search service returned a response that could not be read.";

/// Shown when the request never completed.
const TRANSPORT_MESSAGE: &str = "The search service could not be reached. Please try again later.";

/// Identifier of one dispatched request.
///
/// Ids are handed out in increasing order by the application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One search request: first page when `page` is `None`, otherwise the
/// zero-based page index to append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub id: RequestId,
    pub query: SearchQuery,
    pub page: Option<u32>,
}

impl SearchRequest {
    /// Query parameters in transmission order.
    ///
    /// `entityEFTIndicator` is always sent with an empty value.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("samToolsSearch", self.query.as_str().to_string()),
            ("includeSections", INCLUDE_SECTIONS.to_string()),
            ("registrationStatus", REGISTRATION_STATUS.to_string()),
            ("purposeOfRegistrationCode", PURPOSE_OF_REGISTRATION_CODE.to_string()),
            ("entityEFTIndicator", String::new()),
        ];
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }

    /// Builds the full request URL against a backend origin.
    ///
    /// # Errors
    ///
    /// Returns [`SamLookupError::Request`] if the endpoint path cannot be
    /// joined onto `base` (for example a `data:` URL).
    pub fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base
            .join(ENTITIES_PATH)
            .map_err(|e| SamLookupError::Request(format!("invalid endpoint url: {e}")))?;

        url.set_query(None);
        url.query_pairs_mut().extend_pairs(self.query_pairs());
        Ok(url)
    }
}

/// An HTTP response as seen by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

/// The JSON envelope of the search endpoint.
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    success: bool,
    #[serde(rename = "totalRecords", default, deserialize_with = "null_as_default")]
    total_records: i64,
    #[serde(rename = "entityData", default, deserialize_with = "null_as_default")]
    entity_data: Vec<EntityRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    errors: Vec<String>,
}

/// Terminal state of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// HTTP 200 with `success: true`.
    Success(Page),

    /// HTTP 200 with `success: false`; carries the first reported error.
    ApplicationError { message: String },

    /// HTTP 404.
    NotFound { status_text: String },

    /// Any other non-200 status.
    UnhandledStatus { status: u16, status_text: String },

    /// HTTP 200 whose body is not the expected JSON.
    Malformed { detail: String },

    /// The request never produced a response.
    Transport { detail: String },
}

impl SearchOutcome {
    /// Classifies a completed HTTP response.
    #[must_use]
    pub fn classify(raw: &RawResponse) -> Self {
        match raw.status {
            200 => Self::from_body(&raw.body),
            404 => Self::NotFound {
                status_text: raw.status_text.clone(),
            },
            status => Self::UnhandledStatus {
                status,
                status_text: raw.status_text.clone(),
            },
        }
    }

    /// Wraps a transport failure.
    #[must_use]
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport {
            detail: detail.into(),
        }
    }

    fn from_body(body: &str) -> Self {
        let envelope: SearchEnvelope = match serde_json::from_str(body) {
            Ok(envelope) => envelope,
            Err(e) => {
                return Self::Malformed {
                    detail: e.to_string(),
                }
            }
        };

        if envelope.success {
            Self::Success(Page {
                records: envelope.entity_data,
                total_records: envelope.total_records,
            })
        } else {
            let message = envelope
                .errors
                .into_iter()
                .next()
                .unwrap_or_else(|| APPLICATION_ERROR_FALLBACK.to_string());
            Self::ApplicationError { message }
        }
    }

    /// Text for the error slot, or `None` on success.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Success(_) => None,
            Self::ApplicationError { message } => Some(message.clone()),
            Self::NotFound { status_text } => Some(status_text.clone()),
            Self::UnhandledStatus {
                status,
                status_text,
            } => Some(format!("{status} {status_text}").trim_end().to_string()),
            Self::Malformed { .. } => Some(MALFORMED_MESSAGE.to_string()),
            Self::Transport { .. } => Some(TRANSPORT_MESSAGE.to_string()),
        }
    }

    /// Short label used in log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::ApplicationError { .. } => "application_error",
            Self::NotFound { .. } => "not_found",
            Self::UnhandledStatus { .. } => "unhandled_status",
            Self::Malformed { .. } => "malformed",
            Self::Transport { .. } => "transport",
        }
    }
}

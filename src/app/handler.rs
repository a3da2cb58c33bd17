//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! search completions, translating them into state changes and action
//! sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the runtime (a user gesture or a completed fetch)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! Completions are matched against the request the state is waiting for.
//! Anything else is stale and dropped without touching the view.

use crate::app::{Action, AppState};
use crate::client::{RequestId, SearchOutcome};
use crate::domain::error::Result;

/// Events triggered by the user or by a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search form was submitted with raw, unsanitized text.
    SubmitSearch { query: String },

    /// The "show more" control was pressed.
    ShowMore,

    /// A request finished.
    ResponseReceived {
        /// Id of the request this outcome belongs to.
        request: RequestId,
        outcome: SearchOutcome,
    },
}

impl Event {
    /// Variant name, for span fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SubmitSearch { .. } => "submit_search",
            Self::ShowMore => "show_more",
            Self::ResponseReceived { .. } => "response_received",
        }
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to the view context
/// * `event` - Event to process
///
/// # Returns
///
/// `(changed, actions)`: whether the view needs re-rendering, and the side
/// effects to perform in order.
///
/// # Errors
///
/// None of the current events fail; the `Result` leaves room for events that
/// do I/O-bound validation.
///
/// # Example
///
/// ```rust
/// use samlookup::app::{handle_event, AppState, Event};
/// use chrono::NaiveDate;
///
/// let mut state = AppState::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
/// let (changed, actions) = handle_event(&mut state, &Event::ShowMore)?;
/// assert!(!changed && actions.is_empty());
/// # Ok::<(), samlookup::SamLookupError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    match event {
        Event::SubmitSearch { query } => {
            let request = state.begin_search(query);
            if request.query.is_blank() {
                tracing::warn!(raw = %query, "query is blank after sanitization");
            }
            tracing::debug!(
                request_id = %request.id,
                query = %request.query,
                "search submitted"
            );
            Ok((true, vec![Action::Fetch(request)]))
        }
        Event::ShowMore => {
            let Some(request) = state.begin_next_page() else {
                tracing::debug!(phase = ?state.phase, "show more ignored");
                return Ok((false, vec![]));
            };
            tracing::debug!(
                request_id = %request.id,
                page = ?request.page,
                "next page requested"
            );
            Ok((true, vec![Action::Fetch(request)]))
        }
        Event::ResponseReceived { request, outcome } => {
            if !state.is_current(*request) {
                tracing::debug!(
                    request_id = %request,
                    awaited = ?state.phase.pending(),
                    outcome = outcome.kind(),
                    "dropping stale response"
                );
                return Ok((false, vec![]));
            }

            state.apply_outcome(outcome);
            tracing::debug!(
                request_id = %request,
                outcome = outcome.kind(),
                rendered = state.rendered_count(),
                "response applied"
            );
            Ok((true, vec![]))
        }
    }
}

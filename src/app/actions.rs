//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. It
//! never performs I/O itself; the runtime carries out each action and feeds the
//! result back as a new event.
//!
//! # Example
//!
//! ```rust
//! use samlookup::app::{handle_event, Action, AppState, Event};
//! use chrono::NaiveDate;
//!
//! let mut state = AppState::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
//! let (_, actions) = handle_event(&mut state, &Event::SubmitSearch { query: "acme".into() })?;
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! # Ok::<(), samlookup::SamLookupError>(())
//! ```

use crate::client::SearchRequest;

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Sends the request to the search backend.
    ///
    /// The runtime must answer with [`crate::app::Event::ResponseReceived`]
    /// carrying `request.id`.
    Fetch(SearchRequest),
}

//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the injected view context. It owns every
//! piece of state the page would otherwise keep in the DOM: the list entries,
//! the visibility of each status element, the contents of the error slot and
//! the "show more" control. It is the single source of truth the renderers
//! read from.
//!
//! # State Components
//!
//! - **Entries**: rendered list items, appended in server order
//! - **Visibility**: results box, no-results indicator, error slot
//! - **Phase**: the request being awaited, if any (see [`LoadPhase`])
//! - **Show more**: armed with the next page index, or disarmed
//!
//! # Example
//!
//! ```rust
//! use samlookup::app::AppState;
//! use chrono::NaiveDate;
//!
//! let mut state = AppState::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
//! let request = state.begin_search("https://acme.com");
//! assert_eq!(request.query.as_str(), "acme.com");
//! assert!(state.compute_viewmodel().loading_visible);
//! ```

use super::modes::{LoadPhase, ShowMore};
use crate::client::{RequestId, SearchOutcome, SearchRequest};
use crate::domain::{Page, SearchQuery};
use crate::ui::records::render_record;
use crate::ui::viewmodel::{ResultItem, ShowMoreInfo, UIViewModel};
use chrono::NaiveDate;

/// Number of records the backend returns per page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// The view context.
///
/// Mutated only by [`crate::app::handle_event`]. View models are computed
/// on demand from a snapshot.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Sanitized query of the current search. Reused for every page.
    pub query: SearchQuery,

    /// Rendered entries. Cleared by a new search, otherwise only appended to.
    pub items: Vec<ResultItem>,

    /// Whether the results box is shown.
    pub results_visible: bool,

    /// Whether the "no results" indicator is shown.
    pub no_results_visible: bool,

    /// Text of the error slot; hidden when `None`.
    pub error_message: Option<String>,

    pub show_more: ShowMore,

    pub phase: LoadPhase,

    /// Reference date for expiry badges.
    pub today: NaiveDate,

    next_request_id: u64,
}

impl AppState {
    /// Creates an idle view context with every element hidden.
    ///
    /// # Parameters
    ///
    /// * `today` - Date expiry badges are computed against
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            query: SearchQuery::default(),
            items: Vec::new(),
            results_visible: false,
            no_results_visible: false,
            error_message: None,
            show_more: ShowMore::Disarmed,
            phase: LoadPhase::Idle,
            today,
            next_request_id: 0,
        }
    }

    fn allocate_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        RequestId(self.next_request_id)
    }

    /// Resets the view for a new search and returns the first-page request.
    ///
    /// Clears the list and the error slot, hides "no results" and "show more",
    /// shows the results box and the loading indicator. Any request still in
    /// flight is superseded.
    pub fn begin_search(&mut self, raw_query: &str) -> SearchRequest {
        self.query = SearchQuery::sanitize(raw_query);
        self.items.clear();
        self.error_message = None;
        self.no_results_visible = false;
        self.show_more = ShowMore::Disarmed;
        self.results_visible = true;

        let id = self.allocate_request_id();
        if let Some(superseded) = self.phase.pending() {
            tracing::debug!(
                superseded = %superseded,
                request_id = %id,
                "superseding in-flight request"
            );
        }
        self.phase = LoadPhase::Loading(id);

        SearchRequest {
            id,
            query: self.query.clone(),
            page: None,
        }
    }

    /// Returns the next-page request if "show more" is armed and nothing is in
    /// flight. The list is kept; only the loading indicator is shown.
    pub fn begin_next_page(&mut self) -> Option<SearchRequest> {
        if self.phase.pending().is_some() {
            return None;
        }
        let page = self.show_more.next_page()?;

        let id = self.allocate_request_id();
        self.phase = LoadPhase::Loading(id);

        Some(SearchRequest {
            id,
            query: self.query.clone(),
            page: Some(page),
        })
    }

    /// Whether a completion for `id` is the one being awaited.
    #[must_use]
    pub fn is_current(&self, id: RequestId) -> bool {
        self.phase.pending() == Some(id)
    }

    /// Applies the outcome of the awaited request.
    ///
    /// Callers check [`is_current`](Self::is_current) first; stale outcomes
    /// must not reach this method.
    pub fn apply_outcome(&mut self, outcome: &SearchOutcome) {
        self.no_results_visible = false;

        if let SearchOutcome::Success(page) = outcome {
            self.phase = LoadPhase::Loaded;
            self.append_page(page);
            return;
        }

        match outcome {
            SearchOutcome::Malformed { detail } | SearchOutcome::Transport { detail } => {
                tracing::warn!(kind = outcome.kind(), detail = %detail, "search failed");
            }
            _ => tracing::debug!(kind = outcome.kind(), "search returned an error"),
        }

        self.phase = LoadPhase::Failed;
        self.results_visible = false;
        self.show_more = ShowMore::Disarmed;
        self.error_message = outcome.error_message();
    }

    fn append_page(&mut self, page: &Page) {
        let today = self.today;
        self.items
            .extend(page.records.iter().map(|record| render_record(record, today)));

        tracing::debug!(
            appended = page.records.len(),
            rendered = self.items.len(),
            total_records = page.total_records,
            "page rendered"
        );

        self.update_pagination(page.total_records);
    }

    /// Number of entries currently in the list.
    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.items.len()
    }

    /// Shows, arms, or hides "show more" from the entries rendered so far.
    ///
    /// With nothing rendered the results box is hidden and "no results" is
    /// shown. With records left, the control is armed with
    /// `floor(rendered / 10)` and labelled with the size of the next page.
    pub fn update_pagination(&mut self, total_records: i64) {
        let rendered = i64::try_from(self.items.len()).unwrap_or(i64::MAX);
        let remaining = total_records.saturating_sub(rendered);

        if rendered == 0 {
            self.results_visible = false;
            self.show_more = ShowMore::Disarmed;
            self.no_results_visible = true;
        } else if remaining > 0 {
            let next_count = remaining.min(DEFAULT_PAGE_SIZE);
            let next_page = u32::try_from(rendered / DEFAULT_PAGE_SIZE).unwrap_or(u32::MAX);
            self.show_more = ShowMore::Armed {
                next_page,
                label: format!("Next {next_count} results ({remaining} remaining)"),
            };
        } else {
            self.show_more = ShowMore::Disarmed;
        }
    }

    /// Computes a renderable view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let show_more = match &self.show_more {
            ShowMore::Armed { label, .. } => Some(ShowMoreInfo {
                label: label.clone(),
            }),
            ShowMore::Disarmed => None,
        };

        UIViewModel {
            results_visible: self.results_visible,
            loading_visible: self.phase.pending().is_some(),
            items: self.items.clone(),
            error: self.error_message.clone(),
            show_more,
            no_results_visible: self.no_results_visible,
        }
    }
}

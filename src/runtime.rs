//! Event loop driving the view context against a search backend.
//!
//! [`Runtime`] plays the part of the browser: it feeds user gestures to
//! [`handle_event`], performs every [`Action`] it gets back and returns each
//! completion to the handler as [`Event::ResponseReceived`]. Fetches are
//! awaited one at a time.

use crate::app::{handle_event, Action, AppState, Event};
use crate::client::SearchBackend;
use crate::domain::error::Result;
use std::collections::VecDeque;
use tracing::Instrument;

/// How many pages [`Runtime::load`] should fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLimit {
    /// The first page plus up to `n - 1` presses of "show more".
    Pages(u32),
    /// Keep pressing "show more" until it disarms.
    All,
}

impl Default for PageLimit {
    fn default() -> Self {
        Self::Pages(1)
    }
}

/// Owns the view context and the backend its fetches go to.
///
/// The binary runs it over [`HttpBackend`](crate::client::HttpBackend); tests
/// use in-memory backends.
pub struct Runtime<B> {
    backend: B,
    state: AppState,
}

impl<B: SearchBackend> Runtime<B> {
    /// Wraps `state`, usually fresh from [`initialize`](crate::initialize).
    pub const fn new(backend: B, state: AppState) -> Self {
        Self { backend, state }
    }

    /// The current view context, for rendering.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Consumes the runtime, keeping the final view context.
    #[must_use]
    pub fn into_state(self) -> AppState {
        self.state
    }

    /// Processes `event` and every event its actions produce.
    ///
    /// Returns whether the view changed.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub async fn dispatch(&mut self, event: Event) -> Result<bool> {
        let mut queue = VecDeque::from([event]);
        let mut changed = false;

        while let Some(event) = queue.pop_front() {
            let (event_changed, actions) = handle_event(&mut self.state, &event)?;
            changed |= event_changed;

            for action in actions {
                match action {
                    Action::Fetch(request) => {
                        let outcome = self.backend.fetch(&request).await;
                        queue.push_back(Event::ResponseReceived {
                            request: request.id,
                            outcome,
                        });
                    }
                }
            }
        }

        Ok(changed)
    }

    /// Submits `query` and loads pages up to `limit`.
    ///
    /// Stops early when "show more" disarms, a page fails, or a page adds no
    /// entries.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`dispatch`](Self::dispatch).
    pub async fn load(&mut self, query: &str, limit: PageLimit) -> Result<()> {
        let span = tracing::info_span!("load", limit = ?limit);
        self.load_pages(query, limit).instrument(span).await
    }

    async fn load_pages(&mut self, query: &str, limit: PageLimit) -> Result<()> {
        self.dispatch(Event::SubmitSearch {
            query: query.to_string(),
        })
        .await?;

        let mut loaded: u32 = 1;
        loop {
            let wanted = match limit {
                PageLimit::Pages(n) => loaded < n,
                PageLimit::All => true,
            };
            if !wanted || self.state.show_more.next_page().is_none() {
                break;
            }

            let before = self.state.rendered_count();
            self.dispatch(Event::ShowMore).await?;
            loaded += 1;

            if self.state.error_message.is_some() {
                break;
            }
            if self.state.rendered_count() == before {
                tracing::warn!(
                    rendered = before,
                    "next page added no entries; stopping pagination"
                );
                break;
            }
        }

        tracing::info!(
            pages = loaded,
            rendered = self.state.rendered_count(),
            failed = self.state.error_message.is_some(),
            "search finished"
        );
        Ok(())
    }
}

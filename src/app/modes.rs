//! Load phase and "show more" state machine types.
//!
//! The view context moves through a small state machine per request:
//!
//! ```text
//! Idle ──submit──▶ Loading(id) ──outcome──▶ Loaded | Failed
//!                      ▲                        │
//!                      └──────show more─────────┘  (Loaded only, when armed)
//! ```
//!
//! A new submission may enter `Loading` from any phase; the previous id is
//! simply forgotten, which is what turns its eventual completion into a stale
//! one.

use crate::client::RequestId;

/// Where the view context is in its request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// Waiting for the completion of this request.
    Loading(RequestId),

    /// Last request succeeded; entries are on screen.
    Loaded,

    /// Last request ended in an error shown in the error slot.
    Failed,
}

impl LoadPhase {
    /// The id of the request being awaited, if any.
    #[must_use]
    pub const fn pending(self) -> Option<RequestId> {
        match self {
            Self::Loading(id) => Some(id),
            _ => None,
        }
    }
}

/// The "show more" control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShowMore {
    /// Hidden; pressing it does nothing.
    #[default]
    Disarmed,

    /// Visible with `label`; pressing it requests `next_page`.
    Armed { next_page: u32, label: String },
}

impl ShowMore {
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        match self {
            Self::Armed { next_page, .. } => Some(*next_page),
            Self::Disarmed => None,
        }
    }
}

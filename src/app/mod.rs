//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the runtime and the client/ui layers. It
//! implements the event-driven state machine behind the results page.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Fetch
//!                           ↑                                        ↓
//!                           └─────────── ResponseReceived ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and stale-response filtering
//! - [`modes`]: Load phase and "show more" state types
//! - [`state`]: The view context and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{LoadPhase, ShowMore};
pub use state::{AppState, DEFAULT_PAGE_SIZE};

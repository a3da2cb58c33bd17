//! Rendering layer.
//!
//! Transforms the view context into markup through a view model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → HTML | text
//! ```
//!
//! # Modules
//!
//! - [`records`]: Pure mapping of an entity record onto a list entry
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: HTML element writers
//! - [`text`]: Plain-text writer
//! - [`helpers`]: Escaping and shared markup constants

pub mod components;
pub mod helpers;
pub mod records;
pub mod renderer;
pub mod text;
pub mod viewmodel;

pub use records::render_record;
pub use renderer::{render, render_viewmodel, OutputFormat};
pub use viewmodel::{
    Badge, BadgeTone, DescriptionLine, ItemKind, ResultItem, ShowMoreInfo, UIViewModel,
};

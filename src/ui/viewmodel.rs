//! View model types representing renderable UI state.
//!
//! View models are computed from the view context via
//! `AppState::compute_viewmodel()` and consumed by the renderers. They contain
//! no business logic, only display-ready data: which elements are visible, the
//! list entries built so far and the text of the error and "show more" slots.
//!
//! # Example
//!
//! ```rust
//! use samlookup::ui::viewmodel::{Badge, BadgeTone, ItemKind, ResultItem};
//!
//! let item = ResultItem {
//!     kind: ItemKind::Disabled,
//!     title: "ACME WIDGETS, INC.".to_string(),
//!     badges: vec![Badge::new(BadgeTone::Black, "NOT COMPLIANT")],
//!     lines: vec![],
//! };
//! assert!(!item.is_selectable());
//! ```

/// Complete view model for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UIViewModel {
    /// Whether the results box (`results-box`) is shown.
    pub results_visible: bool,

    /// Whether the loading indicator (`loading-box`) is shown.
    pub loading_visible: bool,

    /// Entries of `results-list`, in the order they were appended.
    pub items: Vec<ResultItem>,

    /// Content of the error slot (`error-message`), shown when `Some`.
    pub error: Option<String>,

    /// The "show more" control, shown when `Some`.
    pub show_more: Option<ShowMoreInfo>,

    /// Whether the "no results" indicator (`no-results`) is shown.
    pub no_results_visible: bool,
}

/// Label of an armed "show more" control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowMoreInfo {
    /// `Next {n} results ({remaining} remaining)`.
    pub label: String,
}

/// One entry of the results list.
///
/// Built once from an entity record and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub kind: ItemKind,

    /// Legal business name.
    pub title: String,

    /// Status labels attached to the header, in display order.
    pub badges: Vec<Badge>,

    /// Description lines below the header, in display order.
    pub lines: Vec<DescriptionLine>,
}

impl ResultItem {
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        matches!(self.kind, ItemKind::Selectable { .. })
    }

    /// The download link, if the entry is selectable.
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Selectable { href } => Some(href),
            ItemKind::Disabled => None,
        }
    }
}

/// Whether an entry links to its summary PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// Anchor opening `href` in a new browsing context.
    Selectable { href: String },

    /// Static, greyed-out entry.
    Disabled,
}

/// A colored status label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub tone: BadgeTone,
    pub text: String,
}

impl Badge {
    #[must_use]
    pub fn new(tone: BadgeTone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }
}

/// Badge colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    /// Passing compliance status on a selectable entry.
    Blue,
    /// Registration expiring soon.
    Orange,
    /// Failing check on a disabled entry.
    Black,
}

impl BadgeTone {
    /// Color class name used in markup.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Black => "black",
        }
    }
}

/// A description line below the entry header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionLine {
    /// "Doing business as" name, shown in parentheses.
    Dba(String),

    /// Website with scheme and trailing slash removed, lower-cased.
    Website(String),

    /// Condensed address followed by the SAM and optional CAGE identifiers.
    AddressAndCodes {
        address: String,
        uei_sam: String,
        cage_code: Option<String>,
    },
}

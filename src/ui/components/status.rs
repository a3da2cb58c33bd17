//! Loading, error and no-results components.

use crate::ui::helpers::{escape_html, visibility};
use std::fmt::{self, Write};

/// Text of the "no results" indicator.
pub const NO_RESULTS_TEXT: &str = "No results found.";

pub fn write_loading(out: &mut String, visible: bool) -> fmt::Result {
    write!(
        out,
        r#"<div id="loading-box" class="ui active centered inline loader"{}></div>"#,
        visibility(visible)
    )
}

/// The error slot. Its content is empty while hidden.
pub fn write_error(out: &mut String, message: Option<&str>) -> fmt::Result {
    write!(
        out,
        r#"<div id="error-message" class="ui negative message"{}>{}</div>"#,
        visibility(message.is_some()),
        message.map(escape_html).unwrap_or_default()
    )
}

pub fn write_no_results(out: &mut String, visible: bool) -> fmt::Result {
    write!(
        out,
        r#"<div id="no-results" class="ui message"{}>{NO_RESULTS_TEXT}</div>"#,
        visibility(visible)
    )
}

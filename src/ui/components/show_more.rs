//! "Show more" control component.

use crate::ui::helpers::{escape_html, visibility};
use crate::ui::viewmodel::ShowMoreInfo;
use std::fmt::{self, Write};

/// Writes the control. When disarmed it is hidden, its icon is hidden and its
/// text is empty.
pub fn write_show_more(out: &mut String, show_more: Option<&ShowMoreInfo>) -> fmt::Result {
    let armed = show_more.is_some();
    write!(
        out,
        r#"<div id="show-more" class="ui basic fluid button"{}>"#,
        visibility(armed)
    )?;
    write!(
        out,
        r#"<i id="show-more-icon" class="angle double down icon"{}></i>"#,
        visibility(armed)
    )?;
    write!(
        out,
        r#"<span id="show-more-text">{}</span></div>"#,
        show_more
            .map(|info| escape_html(&info.label))
            .unwrap_or_default()
    )
}

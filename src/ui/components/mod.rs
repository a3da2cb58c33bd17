//! HTML components of the results fragment.
//!
//! Each component writes one element (and its children) into a `String`.
//! Element ids are fixed so the fragment can be dropped into a page that
//! styles or scripts against them.
//!
//! # Components
//!
//! - [`item`]: one entry of the results list
//! - [`show_more`]: the "show more" control
//! - [`status`]: loading indicator, error slot, "no results" indicator
//!
//! # Layout
//!
//! ```text
//! loading-box
//! error-message
//! no-results
//! results-box
//!   results-list
//!     item*
//!   show-more
//!     show-more-icon
//!     show-more-text
//! ```

mod item;
mod show_more;
mod status;

pub use item::write_item;
pub use status::NO_RESULTS_TEXT;

use crate::ui::helpers::visibility;
use crate::ui::viewmodel::UIViewModel;
use std::fmt::{self, Write};

/// Writes the complete fragment for a view model.
pub fn write_page(out: &mut String, vm: &UIViewModel) -> fmt::Result {
    status::write_loading(out, vm.loading_visible)?;
    out.push('\n');
    status::write_error(out, vm.error.as_deref())?;
    out.push('\n');
    status::write_no_results(out, vm.no_results_visible)?;
    out.push('\n');

    writeln!(
        out,
        r#"<div id="results-box" class="ui segment"{}>"#,
        visibility(vm.results_visible)
    )?;
    out.push_str("<div id=\"results-list\" class=\"ui divided relaxed list\">\n");
    for item in &vm.items {
        write_item(out, item)?;
        out.push('\n');
    }
    out.push_str("</div>\n");
    show_more::write_show_more(out, vm.show_more.as_ref())?;
    out.push_str("\n</div>\n");
    Ok(())
}

//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the HTML components or the text
//!    writer, depending on [`OutputFormat`]

use crate::app::AppState;
use crate::domain::error::{Result, SamLookupError};
use crate::ui::viewmodel::UIViewModel;
use crate::ui::{components, text};
use serde::Deserialize;
use std::str::FromStr;

/// Output flavor of [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML fragment with the fixed element ids.
    #[default]
    Html,
    /// Human-readable text for terminals.
    Text,
}

impl FromStr for OutputFormat {
    type Err = SamLookupError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "text" | "txt" => Ok(Self::Text),
            other => Err(SamLookupError::Config(format!(
                "unknown output format {other:?} (expected html or text)"
            ))),
        }
    }
}

/// Renders the current view.
///
/// # Errors
///
/// Returns [`SamLookupError::Render`] if writing into the output buffer fails.
///
/// # Example
///
/// ```rust
/// use samlookup::app::AppState;
/// use samlookup::ui::{render, OutputFormat};
/// use chrono::NaiveDate;
///
/// let state = AppState::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
/// let html = render(&state, OutputFormat::Html)?;
/// assert!(html.contains(r#"id="results-list""#));
/// # Ok::<(), samlookup::SamLookupError>(())
/// ```
pub fn render(state: &AppState, format: OutputFormat) -> Result<String> {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, format)
}

/// Renders a pre-computed view model.
///
/// # Errors
///
/// Returns [`SamLookupError::Render`] if writing into the output buffer fails.
pub fn render_viewmodel(vm: &UIViewModel, format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    let written = match format {
        OutputFormat::Html => components::write_page(&mut out, vm),
        OutputFormat::Text => text::write_page(&mut out, vm),
    };
    written.map_err(|e| {
        SamLookupError::Render(format!("failed to render {format:?} output: {e}"))
    })?;

    tracing::debug!(format = ?format, items = vm.items.len(), bytes = out.len(), "view rendered");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SearchOutcome;
    use crate::domain::{EntityRecord, Page};
    use chrono::NaiveDate;

    fn state_with(outcome: &SearchOutcome) -> AppState {
        let mut state = AppState::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        state.begin_search("acme");
        state.apply_outcome(outcome);
        state
    }

    #[test]
    fn parses_output_formats() {
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn zero_results_fragment() {
        let html = render(
            &state_with(&SearchOutcome::Success(Page::default())),
            OutputFormat::Html,
        )
        .unwrap();

        assert!(html.contains(r#"<div id="results-box" class="ui segment" style="display:none">"#));
        assert!(html.contains(
            r#"<div id="no-results" class="ui message">No results found.</div>"#
        ));
        assert!(html.contains(
            r#"<div id="loading-box" class="ui active centered inline loader" style="display:none">"#
        ));
    }

    #[test]
    fn error_fragment_escapes_message() {
        let html = render(
            &state_with(&SearchOutcome::ApplicationError {
                message: "Bad <query>".to_string(),
            }),
            OutputFormat::Html,
        )
        .unwrap();

        assert!(html.contains(
            r#"<div id="error-message" class="ui negative message">Bad &lt;query&gt;</div>"#
        ));
        assert!(html.contains(r#"id="no-results" class="ui message" style="display:none""#));
    }

    #[test]
    fn record_text_is_escaped() {
        let mut record = EntityRecord::default();
        record.entity_registration.legal_business_name = "<script>alert(1)</script>".to_string();
        let html = render(
            &state_with(&SearchOutcome::Success(Page {
                records: vec![record],
                total_records: 1,
            })),
            OutputFormat::Html,
        )
        .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }
}

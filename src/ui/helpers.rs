//! Shared rendering utilities.
//!
//! Everything that ends up inside markup passes through [`escape_html`]. The
//! only literal entities emitted are the non-breaking spaces of the address
//! line separator.

/// Separator between the address, SAM and CAGE parts of the address line.
pub const CODE_GAP_HTML: &str = "&nbsp;&nbsp;&nbsp;&nbsp;";

/// Plain-text counterpart of [`CODE_GAP_HTML`].
pub const CODE_GAP_TEXT: &str = "    ";

/// Attribute that hides an element.
pub const HIDDEN_STYLE: &str = r#" style="display:none""#;

/// Escapes text for use in element content and double-quoted attributes.
///
/// # Example
///
/// ```rust
/// use samlookup::ui::helpers::escape_html;
///
/// assert_eq!(escape_html("AT&T <Labs>"), "AT&amp;T &lt;Labs&gt;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Returns [`HIDDEN_STYLE`] when `visible` is false, an empty string otherwise.
#[must_use]
pub const fn visibility(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        HIDDEN_STYLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">O'Brien & Sons</a>"#),
            "&lt;a href=&quot;x&quot;&gt;O&#39;Brien &amp; Sons&lt;/a&gt;"
        );
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(escape_html("Reston, VA USA"), "Reston, VA USA");
    }

    #[test]
    fn hidden_elements_get_display_none() {
        assert_eq!(visibility(false), r#" style="display:none""#);
        assert_eq!(visibility(true), "");
    }
}

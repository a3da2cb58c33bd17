//! List entry component.

use crate::ui::helpers::{escape_html, CODE_GAP_HTML};
use crate::ui::viewmodel::{Badge, DescriptionLine, ItemKind, ResultItem};
use std::fmt::{self, Write};

const DOWNLOAD_ICON_CLASS: &str = "large file download middle aligned icon";

/// Writes one entry of `results-list`.
///
/// Selectable entries are anchors opening the summary PDF in a new browsing
/// context. Disabled entries are plain blocks whose download icon keeps its
/// space but is invisible, so both kinds line up.
pub fn write_item(out: &mut String, item: &ResultItem) -> fmt::Result {
    match &item.kind {
        ItemKind::Selectable { href } => {
            write!(
                out,
                r#"<a class="item" href="{}" target="_blank" rel="noopener noreferrer">"#,
                escape_html(href)
            )?;
            write!(out, r#"<i class="{DOWNLOAD_ICON_CLASS}"></i>"#)?;
            write_content(out, item, "ui small header")?;
            out.push_str("</a>");
        }
        ItemKind::Disabled => {
            out.push_str(r#"<div class="disabled item">"#);
            write!(
                out,
                r#"<i class="{DOWNLOAD_ICON_CLASS}" style="visibility:hidden"></i>"#
            )?;
            write_content(out, item, "ui small disabled header")?;
            out.push_str("</div>");
        }
    }
    Ok(())
}

fn write_content(out: &mut String, item: &ResultItem, header_class: &str) -> fmt::Result {
    out.push_str(r#"<div class="content">"#);
    write!(
        out,
        r#"<div class="{header_class}">{}"#,
        escape_html(&item.title)
    )?;
    for badge in &item.badges {
        write_badge(out, badge)?;
    }
    out.push_str("</div>");

    for line in &item.lines {
        write_line(out, line)?;
    }
    out.push_str("</div>");
    Ok(())
}

fn write_badge(out: &mut String, badge: &Badge) -> fmt::Result {
    write!(
        out,
        r#"<div class="ui horizontal {} label">{}</div>"#,
        badge.tone.as_str(),
        escape_html(&badge.text)
    )
}

fn write_line(out: &mut String, line: &DescriptionLine) -> fmt::Result {
    match line {
        DescriptionLine::Dba(name) => write!(
            out,
            r#"<div class="description" style="padding-top: 0.2em;">({})</div>"#,
            escape_html(name)
        ),
        DescriptionLine::Website(site) => write!(
            out,
            r#"<div class="description" style="padding-top: 0.2em;">{}</div>"#,
            escape_html(site)
        ),
        DescriptionLine::AddressAndCodes {
            address,
            uei_sam,
            cage_code,
        } => {
            write!(
                out,
                r#"<div class="description" style="padding-top: 0.4em;">{}{CODE_GAP_HTML}SAM: {}"#,
                escape_html(address),
                escape_html(uei_sam)
            )?;
            if let Some(cage) = cage_code {
                write!(out, "{CODE_GAP_HTML}CAGE: {}", escape_html(cage))?;
            }
            out.push_str("</div>");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::BadgeTone;

    fn address() -> DescriptionLine {
        DescriptionLine::AddressAndCodes {
            address: "Reston, VA USA".to_string(),
            uei_sam: "ABCDEF123456".to_string(),
            cage_code: Some("1ABC2".to_string()),
        }
    }

    #[test]
    fn selectable_item_is_a_new_context_link() {
        let item = ResultItem {
            kind: ItemKind::Selectable {
                href: "http://host/summary?ueiSAM=A&x=1".to_string(),
            },
            title: "ACME".to_string(),
            badges: vec![Badge::new(BadgeTone::Blue, "COMPLIANT")],
            lines: vec![address()],
        };
        let mut out = String::new();
        write_item(&mut out, &item).unwrap();

        assert!(out.starts_with(
            r#"<a class="item" href="http://host/summary?ueiSAM=A&amp;x=1" target="_blank" rel="noopener noreferrer">"#
        ));
        assert!(out.contains(
            r#"<div class="ui small header">ACME<div class="ui horizontal blue label">COMPLIANT</div></div>"#
        ));
        assert!(out.ends_with("</div></a>"));
    }

    #[test]
    fn disabled_item_hides_icon_and_has_no_link() {
        let item = ResultItem {
            kind: ItemKind::Disabled,
            title: "ACME".to_string(),
            badges: vec![Badge::new(BadgeTone::Black, "NOT COMPLIANT")],
            lines: vec![address()],
        };
        let mut out = String::new();
        write_item(&mut out, &item).unwrap();

        assert!(out.starts_with(r#"<div class="disabled item"><i class="large file download middle aligned icon" style="visibility:hidden"></i>"#));
        assert!(out.contains(r#"<div class="ui small disabled header">ACME"#));
        assert!(out.contains(r#"<div class="ui horizontal black label">NOT COMPLIANT</div>"#));
        assert!(!out.contains("href"));
    }

    #[test]
    fn address_line_uses_wide_gaps() {
        let mut out = String::new();
        write_line(&mut out, &address()).unwrap();
        assert_eq!(
            out,
            r#"<div class="description" style="padding-top: 0.4em;">Reston, VA USA&nbsp;&nbsp;&nbsp;&nbsp;SAM: ABCDEF123456&nbsp;&nbsp;&nbsp;&nbsp;CAGE: 1ABC2</div>"#
        );
    }

    #[test]
    fn dba_line_is_parenthesized_and_escaped() {
        let mut out = String::new();
        write_line(&mut out, &DescriptionLine::Dba("A&B".to_string())).unwrap();
        assert_eq!(
            out,
            r#"<div class="description" style="padding-top: 0.2em;">(A&amp;B)</div>"#
        );
    }
}

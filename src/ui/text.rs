//! Plain-text rendering of the view model for terminals.

use crate::ui::components::NO_RESULTS_TEXT;
use crate::ui::helpers::CODE_GAP_TEXT;
use crate::ui::viewmodel::{DescriptionLine, ItemKind, ResultItem, UIViewModel};
use std::fmt::{self, Write};

const INDENT: &str = "    ";

/// Writes the visible parts of the view, one entry per block.
///
/// Selectable entries are marked `[+]` and followed by their download link;
/// disabled entries are marked `[-]`.
pub fn write_page(out: &mut String, vm: &UIViewModel) -> fmt::Result {
    if vm.loading_visible {
        writeln!(out, "Loading...")?;
    }
    if let Some(error) = &vm.error {
        writeln!(out, "Error: {error}")?;
    }
    if vm.no_results_visible {
        writeln!(out, "{NO_RESULTS_TEXT}")?;
    }
    if !vm.results_visible {
        return Ok(());
    }

    for item in &vm.items {
        write_item(out, item)?;
    }
    if let Some(show_more) = &vm.show_more {
        writeln!(out, "{}", show_more.label)?;
    }
    Ok(())
}

fn write_item(out: &mut String, item: &ResultItem) -> fmt::Result {
    let marker = if item.is_selectable() { "[+]" } else { "[-]" };
    write!(out, "{marker} {}", item.title)?;
    for badge in &item.badges {
        write!(out, "  [{}]", badge.text)?;
    }
    out.push('\n');

    for line in &item.lines {
        match line {
            DescriptionLine::Dba(name) => writeln!(out, "{INDENT}({name})")?,
            DescriptionLine::Website(site) => writeln!(out, "{INDENT}{site}")?,
            DescriptionLine::AddressAndCodes {
                address,
                uei_sam,
                cage_code,
            } => {
                write!(out, "{INDENT}{address}{CODE_GAP_TEXT}SAM: {uei_sam}")?;
                if let Some(cage) = cage_code {
                    write!(out, "{CODE_GAP_TEXT}CAGE: {cage}")?;
                }
                out.push('\n');
            }
        }
    }
    if let ItemKind::Selectable { href } = &item.kind {
        writeln!(out, "{INDENT}{href}")?;
    }
    Ok(())
}

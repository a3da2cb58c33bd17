//! Mapping of entity records onto list entries.
//!
//! [`render_record`] is pure: the same record and the same `today` always
//! produce the same [`ResultItem`]. The current date is passed in rather than
//! read from the clock so expiry badges can be tested.

use crate::domain::EntityRecord;
use crate::ui::viewmodel::{Badge, BadgeTone, DescriptionLine, ItemKind, ResultItem};
use chrono::{Days, NaiveDate};

/// Registrations expiring within this many days get a warning badge.
pub const WARN_IF_FEWER_THAN_DAYS: u64 = 30;

/// `Oct. 05, 2026`
const EXPIRATION_LABEL_FORMAT: &str = "%b. %d, %Y";

/// Builds the list entry for one record.
///
/// A record is selectable when the backend marked it so and supplied a
/// download link. Selectable entries carry the blue compliance badge and, when
/// the registration expires soon, an orange expiry badge. Disabled entries only
/// carry black badges for the checks that failed.
#[must_use]
pub fn render_record(record: &EntityRecord, today: NaiveDate) -> ResultItem {
    let kind = match (record.is_selectable(), record.entity_pdf()) {
        (true, Some(href)) => ItemKind::Selectable {
            href: href.to_string(),
        },
        (true, None) => {
            tracing::warn!(
                uei_sam = record.uei_sam(),
                "selectable record has no download link; rendering as disabled"
            );
            ItemKind::Disabled
        }
        (false, _) => ItemKind::Disabled,
    };

    let badges = match kind {
        ItemKind::Selectable { .. } => selectable_badges(record, today),
        ItemKind::Disabled => failing_check_badges(record),
    };

    ResultItem {
        kind,
        title: record.legal_business_name().to_string(),
        badges,
        lines: description_lines(record),
    }
}

fn selectable_badges(record: &EntityRecord, today: NaiveDate) -> Vec<Badge> {
    let mut badges = vec![Badge::new(
        BadgeTone::Blue,
        record.eight_eight_nine().status_text.clone(),
    )];
    if let Some(badge) = record
        .registration_expiration_date()
        .and_then(|valid_to| expiration_badge(valid_to, today))
    {
        badges.push(badge);
    }
    badges
}

// Mixed passing and failing labels confuse users, so only the reasons the
// entity cannot be selected are shown.
fn failing_check_badges(record: &EntityRecord) -> Vec<Badge> {
    let mut badges = Vec::new();
    let eight_eight_nine = record.eight_eight_nine();
    if !eight_eight_nine.is_compliant {
        badges.push(Badge::new(
            BadgeTone::Black,
            eight_eight_nine.status_text.clone(),
        ));
    }
    let exclusions = record.exclusions();
    if exclusions.has_exclusions {
        badges.push(Badge::new(BadgeTone::Black, exclusions.status_text.clone()));
    }
    badges
}

fn description_lines(record: &EntityRecord) -> Vec<DescriptionLine> {
    let mut lines = Vec::with_capacity(3);
    if let Some(dba) = record.dba_name() {
        lines.push(DescriptionLine::Dba(dba.to_string()));
    }
    if let Some(url) = record.entity_url() {
        lines.push(DescriptionLine::Website(display_website(url)));
    }
    lines.push(DescriptionLine::AddressAndCodes {
        address: condensed_address(
            record.city(),
            record.state_or_province_code(),
            record.country_code(),
        ),
        uei_sam: record.uei_sam().to_string(),
        cage_code: record.cage_code().map(str::to_string),
    });
    lines
}

/// Orange badge for a registration that expires before `today` plus
/// [`WARN_IF_FEWER_THAN_DAYS`].
#[must_use]
pub fn expiration_badge(valid_to: NaiveDate, today: NaiveDate) -> Option<Badge> {
    let warn_before = today.checked_add_days(Days::new(WARN_IF_FEWER_THAN_DAYS))?;
    (valid_to < warn_before).then(|| {
        Badge::new(
            BadgeTone::Orange,
            format!(
                "Expiring registration: {}",
                valid_to.format(EXPIRATION_LABEL_FORMAT)
            ),
        )
    })
}

/// `"{city}, {state} {country}"`, or `"{city}, {country}"` without a state.
///
/// # Example
///
/// ```rust
/// use samlookup::ui::records::condensed_address;
///
/// assert_eq!(condensed_address("Reston", Some("VA"), "USA"), "Reston, VA USA");
/// assert_eq!(condensed_address("Reston", None, "USA"), "Reston, USA");
/// ```
#[must_use]
pub fn condensed_address(city: &str, state: Option<&str>, country: &str) -> String {
    match state.filter(|s| !s.is_empty()) {
        Some(state) => format!("{city}, {state} {country}"),
        None => format!("{city}, {country}"),
    }
}

/// Strips a leading `http://` or `https://` and one trailing `/`, then
/// lower-cases.
#[must_use]
pub fn display_website(url: &str) -> String {
    let without_scheme = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .unwrap_or(url);
    let trimmed = without_scheme.strip_suffix('/').unwrap_or(without_scheme);
    trimmed.to_lowercase()
}

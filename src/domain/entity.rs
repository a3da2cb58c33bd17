//! Entity record and result page models.
//!
//! These types mirror the JSON returned by the entity search endpoint. Only the
//! sections the renderer consumes are modelled; unknown fields are ignored. The
//! accessor methods flatten the nested wire shape into the attributes the list
//! entries are built from.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Date format used by `registrationExpirationDate`.
const EXPIRATION_DATE_FORMAT: &str = "%Y-%m-%d";

/// Reads an explicit `null` as the type's default, like a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One registered entity as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub entity_registration: EntityRegistration,
    #[serde(default, deserialize_with = "null_as_default")]
    pub core_data: CoreData,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sam_tools_data: SamToolsData,
}

/// The `entityRegistration` section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRegistration {
    #[serde(default, deserialize_with = "null_as_default")]
    pub legal_business_name: String,
    #[serde(default)]
    pub dba_name: Option<String>,
    #[serde(rename = "ueiSAM", default, deserialize_with = "null_as_default")]
    pub uei_sam: String,
    #[serde(default)]
    pub cage_code: Option<String>,
    #[serde(default)]
    pub registration_expiration_date: Option<String>,
}

/// The `coreData` section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub entity_information: EntityInformation,
    #[serde(default, deserialize_with = "null_as_default")]
    pub physical_address: PhysicalAddress,
}

/// The `coreData.entityInformation` section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityInformation {
    #[serde(rename = "entityURL", default)]
    pub entity_url: Option<String>,
}

/// The `coreData.physicalAddress` section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalAddress {
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default)]
    pub state_or_province_code: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country_code: String,
}

/// The derived `samToolsData` section attached by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamToolsData {
    /// True only when the entity passes the compliance, exclusion and
    /// registration checks.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_selectable: bool,
    #[serde(default)]
    pub pdf_links: Option<PdfLinks>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub eight_eight_nine: EightEightNine,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exclusions: Exclusions,
    #[serde(default)]
    pub registration: Option<RegistrationStatus>,
}

/// Download links for a selectable entity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PdfLinks {
    #[serde(rename = "entityPDF", default)]
    pub entity_pdf: Option<String>,
}

/// Section 889 compliance status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EightEightNine {
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_compliant: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status_text: String,
    #[serde(default)]
    pub elaborated_status_text: Option<String>,
    /// `"DEC 2019"` or `"OCT 2020"` depending on which FAR parts were answered.
    #[serde(default)]
    pub far_provision_date: Option<String>,
    /// FAR provision id to the representation text the entity submitted.
    #[serde(default)]
    pub far_text: Option<std::collections::BTreeMap<String, Option<String>>>,
}

/// Exclusion status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exclusions {
    #[serde(alias = "has_exclusions", default, deserialize_with = "null_as_default")]
    pub has_exclusions: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status_text: String,
}

/// Registration status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStatus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status_text: String,
}

/// Treats `None` and `Some("")` alike.
fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl EntityRecord {
    #[must_use]
    pub fn legal_business_name(&self) -> &str {
        &self.entity_registration.legal_business_name
    }

    /// The "doing business as" name, if present and non-empty.
    #[must_use]
    pub fn dba_name(&self) -> Option<&str> {
        non_empty(self.entity_registration.dba_name.as_ref())
    }

    /// The entity website, if present and non-empty.
    #[must_use]
    pub fn entity_url(&self) -> Option<&str> {
        non_empty(self.core_data.entity_information.entity_url.as_ref())
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.core_data.physical_address.city
    }

    /// State or province code, if present and non-empty.
    #[must_use]
    pub fn state_or_province_code(&self) -> Option<&str> {
        non_empty(self.core_data.physical_address.state_or_province_code.as_ref())
    }

    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.core_data.physical_address.country_code
    }

    #[must_use]
    pub fn uei_sam(&self) -> &str {
        &self.entity_registration.uei_sam
    }

    /// CAGE code. Shown whenever it is non-null, even if empty.
    #[must_use]
    pub fn cage_code(&self) -> Option<&str> {
        self.entity_registration.cage_code.as_deref()
    }

    /// Parsed registration expiration date.
    ///
    /// Returns `None` when the field is missing or not a `YYYY-MM-DD` date.
    #[must_use]
    pub fn registration_expiration_date(&self) -> Option<NaiveDate> {
        let raw = self.entity_registration.registration_expiration_date.as_deref()?;
        NaiveDate::parse_from_str(raw.trim(), EXPIRATION_DATE_FORMAT).ok()
    }

    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        self.sam_tools_data.is_selectable
    }

    /// The summary PDF download URL, if the backend supplied one.
    #[must_use]
    pub fn entity_pdf(&self) -> Option<&str> {
        non_empty(
            self.sam_tools_data
                .pdf_links
                .as_ref()
                .and_then(|links| links.entity_pdf.as_ref()),
        )
    }

    #[must_use]
    pub const fn eight_eight_nine(&self) -> &EightEightNine {
        &self.sam_tools_data.eight_eight_nine
    }

    #[must_use]
    pub const fn exclusions(&self) -> &Exclusions {
        &self.sam_tools_data.exclusions
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    /// Records in server order.
    pub records: Vec<EntityRecord>,

    /// Count across all pages.
    pub total_records: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "entityRegistration": {
                "legalBusinessName": "ACME WIDGETS, INC.",
                "dbaName": "",
                "ueiSAM": "ABCDEF123456",
                "cageCode": null,
                "registrationExpirationDate": "2026-11-01",
                "registrationStatus": "Active"
            },
            "coreData": {
                "entityInformation": { "entityURL": "https://www.acme.com/" },
                "physicalAddress": {
                    "city": "Reston",
                    "stateOrProvinceCode": "VA",
                    "countryCode": "USA"
                }
            },
            "samToolsData": {
                "isSelectable": true,
                "pdfLinks": { "entityPDF": "http://localhost/api/file-download/summary?ueiSAM=ABCDEF123456" },
                "eightEightNine": {
                    "isCompliant": true,
                    "statusText": "COMPLIANT",
                    "farProvisionDate": "OCT 2020"
                },
                "exclusions": { "hasExclusions": false, "statusText": "No" },
                "registration": { "isActive": true, "statusText": "Active" }
            }
        }"#
    }

    #[test]
    fn deserializes_nested_wire_shape() {
        let record: EntityRecord = serde_json::from_str(sample_json()).unwrap();

        assert_eq!(record.legal_business_name(), "ACME WIDGETS, INC.");
        assert_eq!(record.uei_sam(), "ABCDEF123456");
        assert_eq!(record.city(), "Reston");
        assert_eq!(record.state_or_province_code(), Some("VA"));
        assert_eq!(record.country_code(), "USA");
        assert_eq!(record.entity_url(), Some("https://www.acme.com/"));
        assert!(record.is_selectable());
        assert!(record.eight_eight_nine().is_compliant);
        assert_eq!(
            record.eight_eight_nine().far_provision_date.as_deref(),
            Some("OCT 2020")
        );
        assert!(record.entity_pdf().is_some());
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let record: EntityRecord = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(record.dba_name(), None);
        assert_eq!(record.cage_code(), None);
    }

    #[test]
    fn accepts_snake_case_exclusion_flag() {
        let exclusions: Exclusions =
            serde_json::from_str(r#"{ "has_exclusions": true, "statusText": "Yes" }"#).unwrap();
        assert!(exclusions.has_exclusions);
        assert_eq!(exclusions.status_text, "Yes");
    }

    #[test]
    fn parses_expiration_date() {
        let record: EntityRecord = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(
            record.registration_expiration_date(),
            NaiveDate::from_ymd_opt(2026, 11, 1)
        );
    }

    #[test]
    fn unparseable_expiration_date_is_none() {
        let mut record = EntityRecord::default();
        record.entity_registration.registration_expiration_date = Some("soon".to_string());
        assert_eq!(record.registration_expiration_date(), None);
    }

    #[test]
    fn null_fields_read_as_absent() {
        let record: EntityRecord = serde_json::from_str(
            r#"{
                "entityRegistration": { "legalBusinessName": "NULL CITY LLC", "ueiSAM": null },
                "coreData": {
                    "entityInformation": null,
                    "physicalAddress": { "city": null, "countryCode": "USA" }
                },
                "samToolsData": {
                    "isSelectable": null,
                    "eightEightNine": { "isCompliant": false, "statusText": null },
                    "exclusions": null
                }
            }"#,
        )
        .unwrap();

        assert_eq!(record.legal_business_name(), "NULL CITY LLC");
        assert_eq!(record.uei_sam(), "");
        assert_eq!(record.city(), "");
        assert_eq!(record.country_code(), "USA");
        assert_eq!(record.entity_url(), None);
        assert!(!record.is_selectable());
        assert_eq!(record.eight_eight_nine().status_text, "");
        assert!(!record.exclusions().has_exclusions);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let record: EntityRecord = serde_json::from_str("{}").unwrap();
        assert!(!record.is_selectable());
        assert_eq!(record.legal_business_name(), "");
        assert_eq!(record.entity_pdf(), None);
    }
}

// src/process/filter.rs
use csv::StringRecord;

use crate::config::Config;
use crate::process::row::{is_missing, EstablishmentRow, REGION_INDEX};

/// One surviving row, projected to the nine output fields. Built once per
/// row that passes every filter stage, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredRecord {
    pub identifier: String,
    pub region: String,
    pub activity_code: String,
    pub municipality_code: String,
    pub address: String,
    pub email: String,
    pub phones: [String; 3],
}

impl FilteredRecord {
    fn from_row(row: &EstablishmentRow) -> Self {
        Self {
            // base id + branch code + check digit, no separator
            identifier: format!("{}{}{}", row.base_id, row.branch_code, row.check_digit),
            region: row.region.clone(),
            activity_code: row.activity_code.clone(),
            municipality_code: row.municipality_code.clone(),
            address: compose_address(row),
            email: row.email.clone(),
            phones: [
                compose_phone(&row.area_code_1, &row.phone_1),
                compose_phone(&row.area_code_2, &row.phone_2),
                compose_phone(&row.area_code_3, &row.phone_3),
            ],
        }
    }
}

/// Filter one chunk of raw records down to the rows matching region, status
/// and activity code, deriving the composite output fields for each.
///
/// A chunk whose rows never reach the required columns (activity code and
/// region) is malformed for this extraction and contributes zero records
/// rather than failing the run.
pub fn filter_chunk(records: &[StringRecord], config: &Config) -> Vec<FilteredRecord> {
    let required_width = config.activity_code_index.max(REGION_INDEX) + 1;
    if !records.iter().any(|r| r.len() >= required_width) {
        return Vec::new();
    }

    let mut kept = Vec::new();
    for record in records {
        let row = EstablishmentRow::from_record(record, config.activity_code_index);
        if row.region != config.target_region || row.status != config.active_status_code {
            continue;
        }
        if !config.accepted_activity_codes.contains(&row.activity_code) {
            continue;
        }
        kept.push(FilteredRecord::from_row(&row));
    }
    kept
}

/// `"{type} {street}, {number}"`, then `", {complement}"` when present,
/// then `" - {district} - CEP: {postal}"`.
fn compose_address(row: &EstablishmentRow) -> String {
    let mut address = format!("{} {}, {}", row.street_type, row.street, row.number);
    if !is_missing(&row.complement) {
        address.push_str(", ");
        address.push_str(&row.complement);
    }
    address.push_str(&format!(" - {} - CEP: {}", row.district, row.postal_code));
    address
}

/// Area code and number concatenated with no separator, or empty when
/// either half is absent. Each slot stands on its own.
fn compose_phone(area_code: &str, number: &str) -> String {
    if area_code.is_empty() || is_missing(number) {
        return String::new();
    }
    format!("{}{}", area_code, number)
}

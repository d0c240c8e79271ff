// src/process/row.rs
use csv::StringRecord;

/// Placeholder the upstream export tooling leaves in optional fields.
const MISSING_PLACEHOLDER: &str = "nan";

/// Trim whitespace + strip outer quotes if present. Applied to every text
/// field at ingestion so quoting is handled once, identically, everywhere.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

/// True when an optional field carries no usable value.
pub fn is_missing(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case(MISSING_PLACEHOLDER)
}

/// Positional index of the region (UF) column.
pub const REGION_INDEX: usize = 19;

/// One establishment record with the consumed positional columns lifted
/// into named fields. Indices outside this subset are ignored; rows shorter
/// than an index read as empty, never as an out-of-bounds failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EstablishmentRow {
    pub base_id: String,
    pub branch_code: String,
    pub check_digit: String,
    pub status: String,
    pub activity_code: String,
    pub street_type: String,
    pub street: String,
    pub number: String,
    pub complement: String,
    pub district: String,
    pub postal_code: String,
    pub region: String,
    pub municipality_code: String,
    pub area_code_1: String,
    pub phone_1: String,
    pub area_code_2: String,
    pub phone_2: String,
    pub area_code_3: String,
    pub phone_3: String,
    pub email: String,
}

impl EstablishmentRow {
    /// Map a raw positional record into named fields, normalizing each one.
    pub fn from_record(record: &StringRecord, activity_code_index: usize) -> Self {
        let field = |index: usize| normalize(record.get(index).unwrap_or(""));
        Self {
            base_id: field(0),
            branch_code: field(1),
            check_digit: field(2),
            status: field(5),
            activity_code: field(activity_code_index),
            street_type: field(13),
            street: field(14),
            number: field(15),
            complement: field(16),
            district: field(17),
            postal_code: field(18),
            region: field(REGION_INDEX),
            municipality_code: field(20),
            area_code_1: field(21),
            phone_1: field(22),
            area_code_2: field(23),
            phone_2: field(24),
            area_code_3: field(25),
            phone_3: field(26),
            email: field(27),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_quotes_and_whitespace() {
        assert_eq!(normalize("  \"02\"  "), "02");
        assert_eq!(normalize("\"6920601\""), "6920601");
        assert_eq!(normalize("  MG "), "MG");
        assert_eq!(normalize(""), "");
        // lone quote is not a quoted value
        assert_eq!(normalize("\""), "\"");
    }

    #[test]
    fn normalize_keeps_leading_zeros() {
        assert_eq!(normalize("\"0001\""), "0001");
    }

    #[test]
    fn is_missing_covers_empty_and_placeholder() {
        assert!(is_missing(""));
        assert!(is_missing("nan"));
        assert!(is_missing("NaN"));
        assert!(!is_missing("AP 2"));
        assert!(!is_missing("0"));
    }

    #[test]
    fn short_record_reads_as_empty_fields() {
        let record = StringRecord::from(vec!["12345678", "0001", "95"]);
        let row = EstablishmentRow::from_record(&record, 11);
        assert_eq!(row.base_id, "12345678");
        assert_eq!(row.branch_code, "0001");
        assert_eq!(row.check_digit, "95");
        assert_eq!(row.status, "");
        assert_eq!(row.activity_code, "");
        assert_eq!(row.region, "");
        assert_eq!(row.email, "");
    }

    #[test]
    fn maps_positional_columns() {
        let mut fields = vec![String::new(); 28];
        fields[0] = "11222333".into();
        fields[1] = "0001".into();
        fields[2] = "81".into();
        fields[5] = "\"02\"".into();
        fields[11] = "\"6920601\"".into();
        fields[19] = "MG".into();
        fields[20] = "3106200".into();
        fields[27] = "contato@example.com".into();

        let record = StringRecord::from(fields);
        let row = EstablishmentRow::from_record(&record, 11);
        assert_eq!(row.base_id, "11222333");
        assert_eq!(row.status, "02");
        assert_eq!(row.activity_code, "6920601");
        assert_eq!(row.region, "MG");
        assert_eq!(row.municipality_code, "3106200");
        assert_eq!(row.email, "contato@example.com");
    }

    #[test]
    fn activity_code_index_is_configurable() {
        let mut fields = vec![String::new(); 28];
        fields[12] = "7020400".into();
        let record = StringRecord::from(fields);
        let row = EstablishmentRow::from_record(&record, 12);
        assert_eq!(row.activity_code, "7020400");
    }
}

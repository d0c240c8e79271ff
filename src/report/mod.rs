// src/report/mod.rs
pub mod export;

use crate::process::FilteredRecord;
use crate::reference::MunicipalityLookup;

/// Canonical header of the final report, in output column order.
pub const HEADERS: [&str; 9] = [
    "CNPJ",
    "UF",
    "cnae_principal",
    "municipio",
    "Endereco",
    "email",
    "Telefone1",
    "Telefone2",
    "Telefone3",
];

/// The final enriched table: aggregated records joined against the
/// municipality lookup and projected to the canonical column order.
#[derive(Debug, Default)]
pub struct ReportTable {
    rows: Vec<[String; 9]>,
}

impl ReportTable {
    /// Build the table from the aggregated records. Left join on the
    /// municipality code: every record appears exactly once, in its
    /// original order; a code with no match gets an empty name. The raw
    /// code column is dropped in favor of the resolved name.
    pub fn build(records: Vec<FilteredRecord>, municipalities: &MunicipalityLookup) -> Self {
        let rows = records
            .into_iter()
            .map(|record| {
                let municipality = municipalities
                    .get(&record.municipality_code)
                    .cloned()
                    .unwrap_or_default();
                let [phone1, phone2, phone3] = record.phones;
                [
                    record.identifier,
                    record.region,
                    record.activity_code,
                    municipality,
                    record.address,
                    record.email,
                    phone1,
                    phone2,
                    phone3,
                ]
            })
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[[String; 9]] {
        &self.rows
    }

    /// Split into pages of at most `max_rows` rows, preserving order. An
    /// empty table still yields one empty page so the export writes a sheet
    /// with the header instead of an ambiguous zero-sheet workbook.
    pub fn pages(&self, max_rows: usize) -> Vec<&[[String; 9]]> {
        if self.rows.is_empty() {
            vec![&self.rows[..]]
        } else {
            self.rows.chunks(max_rows.max(1)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(identifier: &str, municipality_code: &str) -> FilteredRecord {
        FilteredRecord {
            identifier: identifier.to_string(),
            region: "MG".to_string(),
            activity_code: "6920601".to_string(),
            municipality_code: municipality_code.to_string(),
            address: "RUA A, 10 - CENTRO - CEP: 30000000".to_string(),
            email: "contato@example.com".to_string(),
            phones: [
                "31999999999".to_string(),
                String::new(),
                String::new(),
            ],
        }
    }

    fn lookup() -> MunicipalityLookup {
        [("3106200".to_string(), "BELO HORIZONTE".to_string())]
            .into_iter()
            .collect()
    }

    #[test]
    fn joins_municipality_names() {
        let table = ReportTable::build(vec![record("111", "3106200")], &lookup());
        assert_eq!(table.rows()[0][3], "BELO HORIZONTE");
    }

    #[test]
    fn unmatched_code_yields_empty_name_not_an_error() {
        let table = ReportTable::build(vec![record("111", "9999999")], &lookup());
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0][3], "");
    }

    #[test]
    fn every_record_appears_exactly_once_in_order() {
        let records = vec![
            record("111", "3106200"),
            record("222", "9999999"),
            record("333", "3106200"),
        ];
        let table = ReportTable::build(records, &lookup());

        let identifiers: Vec<&str> = table.rows().iter().map(|r| r[0].as_str()).collect();
        assert_eq!(identifiers, vec!["111", "222", "333"]);
    }

    #[test]
    fn columns_land_in_canonical_order() {
        let table = ReportTable::build(vec![record("111", "3106200")], &lookup());
        let row = &table.rows()[0];
        assert_eq!(row[0], "111");
        assert_eq!(row[1], "MG");
        assert_eq!(row[2], "6920601");
        assert_eq!(row[3], "BELO HORIZONTE");
        assert_eq!(row[4], "RUA A, 10 - CENTRO - CEP: 30000000");
        assert_eq!(row[5], "contato@example.com");
        assert_eq!(row[6], "31999999999");
        assert_eq!(row[7], "");
        assert_eq!(row[8], "");
    }

    #[test]
    fn pagination_counts() {
        let records: Vec<FilteredRecord> =
            (0..10).map(|i| record(&i.to_string(), "3106200")).collect();
        let table = ReportTable::build(records, &lookup());

        let pages = table.pages(4);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].len(), 4);
        assert_eq!(pages[1].len(), 4);
        assert_eq!(pages[2].len(), 2);
    }

    #[test]
    fn pages_concatenate_back_to_the_table() {
        let records: Vec<FilteredRecord> =
            (0..7).map(|i| record(&i.to_string(), "3106200")).collect();
        let table = ReportTable::build(records, &lookup());

        let rejoined: Vec<&[String; 9]> = table.pages(3).into_iter().flatten().collect();
        let original: Vec<&[String; 9]> = table.rows().iter().collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_page() {
        let records: Vec<FilteredRecord> =
            (0..6).map(|i| record(&i.to_string(), "3106200")).collect();
        let table = ReportTable::build(records, &lookup());
        assert_eq!(table.pages(3).len(), 2);
    }

    #[test]
    fn empty_table_yields_one_empty_page() {
        let table = ReportTable::build(Vec::new(), &lookup());
        let pages = table.pages(5);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
    }
}

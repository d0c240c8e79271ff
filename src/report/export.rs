// src/report/export.rs
use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;
use tracing::info;

use super::{ReportTable, HEADERS};

/// Write the report as a single workbook with one sheet per page, named
/// `Parte_1`, `Parte_2`, … Each sheet holds the bold header row plus at
/// most `max_rows_per_sheet` data rows. Nothing touches the disk until the
/// table is fully assembled, so an interrupted run never leaves a
/// truncated workbook behind.
pub fn write_workbook(table: &ReportTable, path: &Path, max_rows_per_sheet: usize) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    for (index, page) in table.pages(max_rows_per_sheet).into_iter().enumerate() {
        let sheet_name = format!("Parte_{}", index + 1);
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&sheet_name)
            .with_context(|| format!("invalid sheet name `{}`", sheet_name))?;

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }
        for (row_index, row) in page.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                worksheet.write_string(row_index as u32 + 1, col as u16, value)?;
            }
        }

        info!(sheet = %sheet_name, rows = page.len(), "saved sheet");
    }

    workbook
        .save(path)
        .with_context(|| format!("cannot write workbook `{}`", path.display()))?;
    Ok(())
}

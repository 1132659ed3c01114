// Excel catalog import (xlsx, xls, xlsb, ods)
//
// One-way conversion: the first worksheet's first row becomes the header,
// everything below it becomes catalog rows.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader, Sheets};

use exosift_engine::model::{Catalog, Cell};

/// Import the first sheet of an Excel workbook as a catalog.
pub fn import(path: &Path) -> Result<Catalog, String> {
    let mut workbook: Sheets<_> =
        open_workbook_auto(path).map_err(|e| format!("Failed to open Excel file: {}", e))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let first = sheet_names
        .first()
        .ok_or_else(|| "Excel file contains no sheets".to_string())?;

    let range = workbook
        .worksheet_range(first)
        .map_err(|e| format!("Failed to read sheet '{}': {}", first, e))?;

    let mut rows = range.rows();
    let header_row = rows
        .next()
        .ok_or_else(|| format!("sheet '{}' has no header row", first))?;

    let mut catalog = Catalog::new(header_row.iter().map(header_text).collect());
    for row in rows {
        catalog.push_row(row.iter().map(cell_from_data).collect());
    }

    Ok(catalog)
}

fn header_text(data: &Data) -> String {
    match data {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        Data::Float(n) => format!("{n}"),
        Data::Int(n) => format!("{n}"),
        Data::Bool(b) => format!("{b}"),
        Data::Error(e) => format!("#{:?}", e),
        Data::DateTime(dt) => format!("{}", dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) if s.is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(n) => Cell::Number(*n),
        Data::Int(n) => Cell::Number(*n as f64),
        Data::Bool(b) => Cell::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        // Error cells carry nothing the scorer can use
        Data::Error(_) => Cell::Empty,
        // Keep the raw serial; catalogs don't put dates in scored columns
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use tempfile::tempdir;

    fn write_workbook(path: &Path) {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let headers = ["toi", "orbper", "trandur", "trandept", "tmag"];
        for (col, header) in headers.iter().enumerate() {
            worksheet.write(0, col as u16, *header).unwrap();
        }

        worksheet.write(1, 0, "101.01").unwrap();
        worksheet.write(1, 1, 5.1).unwrap();
        worksheet.write(1, 2, 2.3).unwrap();
        worksheet.write(1, 3, 1200).unwrap();
        worksheet.write(1, 4, 9.8).unwrap();

        // Sparse second row: depth and magnitude left blank
        worksheet.write(2, 0, "102.01").unwrap();
        worksheet.write(2, 1, 45.0).unwrap();
        worksheet.write(2, 2, 14.2).unwrap();

        workbook.save(path).unwrap();
    }

    #[test]
    fn test_import_first_sheet() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.xlsx");
        write_workbook(&path);

        let catalog = import(&path).unwrap();
        assert_eq!(
            catalog.columns,
            &["toi", "orbper", "trandur", "trandept", "tmag"]
        );
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.rows[0][0], Cell::Text("101.01".into()));
        assert_eq!(catalog.rows[0][1], Cell::Number(5.1));
        assert_eq!(catalog.rows[0][3], Cell::Number(1200.0));
    }

    #[test]
    fn test_sparse_cells_import_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.xlsx");
        write_workbook(&path);

        let catalog = import(&path).unwrap();
        assert_eq!(catalog.rows[1][3], Cell::Empty);
        assert_eq!(catalog.rows[1][4], Cell::Empty);
    }

    #[test]
    fn test_unreadable_workbook_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("not-excel.xlsx");
        std::fs::write(&path, "this is not a zip archive").unwrap();

        assert!(import(&path).is_err());
    }
}

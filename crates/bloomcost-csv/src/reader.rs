//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use bloomcost_core::{CellValue, Worksheet};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a worksheet
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Worksheet> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a worksheet
    ///
    /// The whole file lands in the grid as-is; header handling is the
    /// loader's job, not the format's.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Worksheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut worksheet = Worksheet::new("Sheet1");

        for result in csv_reader.records() {
            let record = result?;
            let row: Vec<CellValue> = record
                .iter()
                .map(|field| {
                    if options.auto_detect_types {
                        Self::detect_type(field)
                    } else {
                        CellValue::string(field)
                    }
                })
                .collect();
            worksheet.push_row(row);
        }

        Ok(worksheet)
    }

    /// Detect the type of a field value
    fn detect_type(field: &str) -> CellValue {
        let trimmed = field.trim();

        if trimmed.is_empty() {
            return CellValue::Empty;
        }

        match trimmed.to_lowercase().as_str() {
            "true" | "yes" => return CellValue::Boolean(true),
            "false" | "no" => return CellValue::Boolean(false),
            _ => {}
        }

        if let Ok(n) = trimmed.parse::<f64>() {
            return CellValue::Number(n);
        }

        CellValue::string(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_with_type_detection() {
        let data = "PRODUCT,LENGTH,FRESH\nROSES,40,true\nALSTRO,35.5,no\n";
        let ws = CsvReader::read(data.as_bytes(), &CsvReadOptions::default()).unwrap();

        assert_eq!(ws.n_rows(), 3);
        assert_eq!(ws.cell_at(0, 0).as_string(), Some("PRODUCT"));
        assert_eq!(ws.cell_at(1, 1).as_number(), Some(40.0));
        assert_eq!(ws.cell_at(2, 1).as_number(), Some(35.5));
        assert_eq!(ws.cell_at(1, 2), &CellValue::Boolean(true));
        assert_eq!(ws.cell_at(2, 2), &CellValue::Boolean(false));
    }

    #[test]
    fn test_read_without_type_detection() {
        let data = "A,B\n1,2\n";
        let options = CsvReadOptions {
            auto_detect_types: false,
            ..Default::default()
        };
        let ws = CsvReader::read(data.as_bytes(), &options).unwrap();
        assert_eq!(ws.cell_at(1, 0).as_string(), Some("1"));
    }

    #[test]
    fn test_empty_fields_become_empty_cells() {
        let data = "A,,C\n";
        let ws = CsvReader::read(data.as_bytes(), &CsvReadOptions::default()).unwrap();
        assert!(ws.cell_at(0, 1).is_empty());
    }

    #[test]
    fn test_ragged_rows_are_tolerated() {
        let data = "A,B,C\nX\n";
        let ws = CsvReader::read(data.as_bytes(), &CsvReadOptions::default()).unwrap();
        assert_eq!(ws.n_rows(), 2);
        assert!(ws.cell_at(1, 2).is_empty());
    }
}

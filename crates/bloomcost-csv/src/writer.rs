//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};
use bloomcost_core::Worksheet;

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a worksheet to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        worksheet: &Worksheet,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(worksheet, file, options)
    }

    /// Write a worksheet to a writer
    pub fn write<W: Write>(
        worksheet: &Worksheet,
        writer: W,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
            LineTerminator::CR => csv::Terminator::Any(b'\r'),
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .from_writer(writer);

        // Pad every record to the grid width so rows stay rectangular
        let width = worksheet.n_cols();
        for row in worksheet.rows() {
            let mut record: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            record.resize(width, String::new());
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::CsvReader;
    use crate::options::CsvReadOptions;
    use bloomcost_core::CellValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_then_read_back() {
        let mut ws = Worksheet::new("Sheet1");
        ws.push_row(["PRODUCT", "BUNCH_PER_BOX", "PRICE_CLIENTE"]);
        ws.push_row([
            CellValue::String("ROSES 40CM".into()),
            CellValue::Number(10.0),
            CellValue::Number(3.40),
        ]);

        let options = CsvWriteOptions {
            line_terminator: LineTerminator::LF,
            ..Default::default()
        };
        let mut buf = Vec::new();
        CsvWriter::write(&ws, &mut buf, &options).unwrap();

        let back = CsvReader::read(buf.as_slice(), &CsvReadOptions::default()).unwrap();
        assert_eq!(back.cell_at(0, 0).as_string(), Some("PRODUCT"));
        assert_eq!(back.cell_at(1, 1).as_number(), Some(10.0));
        assert_eq!(back.cell_at(1, 2).as_number(), Some(3.40));
    }

    #[test]
    fn test_write_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut ws = Worksheet::new("Sheet1");
        ws.push_row(["A", "B"]);
        ws.push_row([CellValue::Number(1.0), CellValue::Number(2.0)]);

        CsvWriter::write_file(&ws, &path, &CsvWriteOptions::default()).unwrap();
        let back = CsvReader::read_file(&path, &CsvReadOptions::default()).unwrap();

        assert_eq!(back.n_rows(), 2);
        assert_eq!(back.cell_at(1, 0).as_number(), Some(1.0));
    }

    #[test]
    fn test_fields_with_delimiters_are_quoted() {
        let mut ws = Worksheet::new("Sheet1");
        ws.push_row(["ROSES, RED", "plain"]);

        let mut buf = Vec::new();
        CsvWriter::write(
            &ws,
            &mut buf,
            &CsvWriteOptions {
                line_terminator: LineTerminator::LF,
                ..Default::default()
            },
        )
        .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "\"ROSES, RED\",plain\n");
    }
}

//! # bloomcost
//!
//! A Rust library for pricing flower products from spreadsheet data.
//!
//! Bloomcost reads a product catalog workbook (XLSX or CSV), locates the
//! product table inside the selected sheet, and runs every row through the
//! landed-cost pipeline: Miami freight by box volume and duty, an optional
//! wet-pack surcharge, US domestic freight by packed-box cube, and a
//! margin-derived client price.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bloomcost::prelude::*;
//!
//! let workbook = Workbook::open("HEINENS.xlsx").unwrap();
//!
//! let params = CostParams {
//!     margin_percent: 20,
//!     ..Default::default()
//! };
//! let run = workbook.price_sheet_by_name("EASTER 2026", &params).unwrap();
//!
//! for priced in &run.rows {
//!     println!("{}: {:.2}", priced.row.product, priced.costs.client_price);
//! }
//! ```

pub mod export;
pub mod pricing;
pub mod prelude;

// Re-export pricing types
pub use pricing::{PricedRow, PricingRun, PricingStats, RowFailure, WorkbookPricingExt};

// Re-export export types
pub use export::{client_sheet, write_client_file, CLIENT_COLUMNS};

// Re-export core types
pub use bloomcost_core::{
    normalize_label, normalize_labels, CellValue, CostParams, Error, ErrorKind, Result, Workbook,
    Worksheet, MARGIN_STEP, MAX_COLS, MAX_ROWS, MAX_SHEET_NAME_LEN,
};

// Re-export the calculators
pub use bloomcost_calc::{
    bouquet_price, client_price, freight_size, markup_from_margin, price_row, round2, total_cost,
    us_freight, wet_pack, FreightInput, FreightSize, ProductRow, ProductTable, RowCosts, UsFreight,
    WetPack, HEADER_MARKER, WET_PACK_CUBE,
};

// Re-export I/O types
pub use bloomcost_csv::{CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};
pub use bloomcost_xlsx::{XlsxError, XlsxReader, XlsxWriter};

use std::path::Path;

/// Extension trait for Workbook to add file I/O
pub trait WorkbookExt {
    /// Open a workbook from a file
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook>;

    /// Save the workbook to a file
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl WorkbookExt for Workbook {
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("xlsx") | Some("xlsm") => {
                XlsxReader::read_file(path).map_err(|e| Error::other(e.to_string()))
            }
            Some("csv") => {
                let worksheet = CsvReader::read_file(path, &CsvReadOptions::default())
                    .map_err(|e| Error::other(e.to_string()))?;

                let mut workbook = Workbook::empty();
                workbook.add_existing_worksheet(worksheet)?;
                Ok(workbook)
            }
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("xlsx") => {
                XlsxWriter::write_file(self, path).map_err(|e| Error::other(e.to_string()))
            }
            Some("csv") => {
                if let Some(sheet) = self.worksheet(0) {
                    CsvWriter::write_file(sheet, path, &CsvWriteOptions::default())
                        .map_err(|e| Error::other(e.to_string()))
                } else {
                    Err(Error::other("No worksheets to save"))
                }
            }
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }
}

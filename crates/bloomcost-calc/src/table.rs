//! Product-table loader
//!
//! Raw catalog sheets carry a stray index column, a few banner rows above
//! the real header, and messy multi-line labels. The loader turns that
//! into a clean table: find the header row by its marker, promote it,
//! normalize the labels, and bind the columns the pipeline needs.

use bloomcost_core::{normalize_label, CellValue, Error, Result, Worksheet};

/// Literal that marks the header row in the first (kept) column
pub const HEADER_MARKER: &str = "PRODUCT";

/// Canonical column labels after normalization
pub const COL_PRODUCT: &str = "PRODUCT";
pub const COL_FARM: &str = "FARM";
pub const COL_LENGTH: &str = "LENGTH";
pub const COL_WIDTH: &str = "WIDTH";
pub const COL_HEIGHT: &str = "HEIGHT";
pub const COL_FARM_PRICE: &str = "FARM_PRICE";
pub const COL_STEM_BUNCH: &str = "STEM_BUNCH";
pub const COL_BUNCH_PER_BOX: &str = "BUNCH_PER_BOX";
pub const COL_UNITS: &str = "UNITS";
pub const COL_EXTRAS: &str = "EXTRAS";
pub const COL_BOX_TOTAL: &str = "BOX_TOTAL";

/// Columns every product sheet must provide beyond PRODUCT and FARM,
/// which the loader itself guarantees
const REQUIRED_COLUMNS: [&str; 6] = [
    COL_LENGTH,
    COL_WIDTH,
    COL_HEIGHT,
    COL_FARM_PRICE,
    COL_STEM_BUNCH,
    COL_BUNCH_PER_BOX,
];

/// One product row's raw fields, parsed and validated
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    /// Product name
    pub product: String,
    /// Farm name (upper-cased by the loader)
    pub farm: String,
    /// Box length in cm
    pub length: f64,
    /// Box width in cm
    pub width: f64,
    /// Box height in cm
    pub height: f64,
    /// Farm price per stem
    pub farm_price: f64,
    /// Stems per bunch
    pub stem_bunch: f64,
    /// Bunches per box
    pub bunch_per_box: f64,
    /// Extras buffer per box
    pub extras: f64,
    /// Total sellable units across the boxed quantity
    pub box_total: f64,
}

/// A clean product table: normalized column labels plus contiguous data rows
#[derive(Debug, Clone)]
pub struct ProductTable {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl ProductTable {
    /// Build a product table from a raw worksheet.
    ///
    /// Drops the first column, locates the header row by [`HEADER_MARKER`],
    /// promotes and normalizes the labels, renumbers the data rows from
    /// zero, and upper-cases the FARM column's text.
    pub fn from_worksheet(sheet: &Worksheet) -> Result<Self> {
        // The marker is sought in the first cell that survives the
        // index-column drop, i.e. raw column 1.
        let header_row = sheet
            .rows()
            .position(|row| row.get(1).and_then(|c| c.as_string()) == Some(HEADER_MARKER))
            .ok_or_else(|| Error::HeaderRowNotFound {
                sheet: sheet.name().to_string(),
                marker: HEADER_MARKER,
            })?;

        let width = sheet.n_cols();
        let header = sheet.row(header_row).unwrap_or(&[]);
        let columns: Vec<String> = (1..width)
            .map(|col| {
                let raw = header.get(col).map(|c| c.to_string()).unwrap_or_default();
                normalize_label(&raw)
            })
            .collect();

        let mut rows: Vec<Vec<CellValue>> = sheet
            .rows()
            .skip(header_row + 1)
            .map(|row| {
                (1..width)
                    .map(|col| row.get(col).cloned().unwrap_or(CellValue::Empty))
                    .collect()
            })
            .collect();

        let farm_idx = columns
            .iter()
            .position(|c| c == COL_FARM)
            .ok_or_else(|| Error::MissingColumn(COL_FARM.to_string()))?;
        for cells in &mut rows {
            if let Some(CellValue::String(s)) = cells.get_mut(farm_idx) {
                *s = s.to_uppercase();
            }
        }

        Ok(Self { columns, rows })
    }

    /// Normalized column labels, in sheet order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of data rows
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Find a column by its canonical label
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }

    /// Find a column or fail with a structure error
    pub fn require_column(&self, label: &str) -> Result<usize> {
        self.column_index(label)
            .ok_or_else(|| Error::MissingColumn(label.to_string()))
    }

    /// Check that every column the pipeline reads is present.
    ///
    /// BOX_TOTAL may be absent if UNITS is there to derive it from.
    pub fn check_required_columns(&self) -> Result<()> {
        for label in REQUIRED_COLUMNS {
            self.require_column(label)?;
        }
        if self.column_index(COL_BOX_TOTAL).is_none() && self.column_index(COL_UNITS).is_none() {
            return Err(Error::MissingColumn(COL_BOX_TOTAL.to_string()));
        }
        Ok(())
    }

    /// Get a cell; positions outside the table read as empty
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(EMPTY)
    }

    /// A row with no meaningful content (trailing spacer rows in sheets)
    pub fn is_blank_row(&self, row: usize) -> bool {
        match self.rows.get(row) {
            Some(cells) => cells.iter().all(|c| match c {
                CellValue::Empty => true,
                CellValue::String(s) => s.trim().is_empty(),
                _ => false,
            }),
            None => true,
        }
    }

    /// Parse one data row into its raw pricing fields.
    ///
    /// `extras_default` fills in when the sheet has no usable EXTRAS cell;
    /// a missing BOX_TOTAL falls back to UNITS x BUNCH_PER_BOX.
    pub fn product_row(&self, row: usize, extras_default: f64) -> Result<ProductRow> {
        let product_idx = self.require_column(COL_PRODUCT)?;
        let farm_idx = self.require_column(COL_FARM)?;

        let product = self.cell(row, product_idx).to_string();
        let farm = self.cell(row, farm_idx).to_string();

        let length = self.numeric(row, COL_LENGTH)?;
        let width = self.numeric(row, COL_WIDTH)?;
        let height = self.numeric(row, COL_HEIGHT)?;
        let farm_price = self.numeric(row, COL_FARM_PRICE)?;
        let stem_bunch = self.numeric(row, COL_STEM_BUNCH)?;

        let bunch_per_box = self.numeric(row, COL_BUNCH_PER_BOX)?;
        if bunch_per_box <= 0.0 {
            return Err(Error::InvalidDivisor {
                row,
                column: COL_BUNCH_PER_BOX.to_string(),
                value: bunch_per_box,
            });
        }

        let extras = match self.column_index(COL_EXTRAS) {
            Some(col) if !self.cell(row, col).is_empty() => self.numeric(row, COL_EXTRAS)?,
            _ => extras_default,
        };

        let box_total = match self.column_index(COL_BOX_TOTAL) {
            Some(col) if !self.cell(row, col).is_empty() => self.numeric(row, COL_BOX_TOTAL)?,
            _ => {
                // Sheets without a box total carry per-row unit counts
                self.require_column(COL_UNITS)
                    .map_err(|_| Error::MissingColumn(COL_BOX_TOTAL.to_string()))?;
                self.numeric(row, COL_UNITS)? * bunch_per_box
            }
        };
        if box_total <= 0.0 {
            return Err(Error::InvalidDivisor {
                row,
                column: COL_BOX_TOTAL.to_string(),
                value: box_total,
            });
        }

        Ok(ProductRow {
            product,
            farm,
            length,
            width,
            height,
            farm_price,
            stem_bunch,
            bunch_per_box,
            extras,
            box_total,
        })
    }

    /// Read a cell as a number, accepting numeric text
    fn numeric(&self, row: usize, label: &str) -> Result<f64> {
        let col = self.require_column(label)?;
        let cell = self.cell(row, col);

        if let Some(n) = cell.as_number() {
            return Ok(n);
        }
        if let Some(s) = cell.as_string() {
            if let Ok(n) = s.trim().parse::<f64>() {
                return Ok(n);
            }
        }

        Err(Error::NonNumericCell {
            row,
            column: label.to_string(),
            value: cell.to_string(),
        })
    }
}

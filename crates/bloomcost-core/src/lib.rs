//! # bloomcost-core
//!
//! Core data structures for the bloomcost pricing library.
//!
//! This crate provides the fundamental types used throughout bloomcost:
//! - [`CellValue`] - Represents cell values (numbers, strings, booleans)
//! - [`Worksheet`], [`Workbook`] - The spreadsheet document structures
//! - [`CostParams`] - The user-tunable pricing constants
//! - [`normalize_label`] - Column-label canonicalization
//!
//! ## Example
//!
//! ```rust
//! use bloomcost_core::{Workbook, CellValue};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.set_cell_value_at(0, 0, "PRODUCT").unwrap();
//! sheet.set_cell_value_at(1, 0, CellValue::string("ROSES 40CM")).unwrap();
//! sheet.set_cell_value_at(1, 1, CellValue::Number(2.5)).unwrap();
//! ```

pub mod cell;
pub mod error;
pub mod normalize;
pub mod params;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::CellValue;
pub use error::{Error, ErrorKind, Result};
pub use normalize::{normalize_label, normalize_labels};
pub use params::{CostParams, MARGIN_STEP};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet
pub const MAX_ROWS: usize = 1_048_576;

/// Maximum number of columns in a worksheet
pub const MAX_COLS: usize = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;

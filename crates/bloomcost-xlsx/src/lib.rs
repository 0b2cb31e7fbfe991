//! # bloomcost-xlsx
//!
//! XLSX (Office Open XML) reader and writer for bloomcost.
//!
//! Values only: shared strings, inline strings, numbers and booleans.
//! Styles, formulas and the rest of the OOXML surface are out of scope
//! for pricing catalogs.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{XlsxError, XlsxResult};
pub use reader::XlsxReader;
pub use writer::XlsxWriter;

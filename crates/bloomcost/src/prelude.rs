//! Prelude module - common imports for bloomcost users
//!
//! ```rust
//! use bloomcost::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellValue,

    // Configuration
    CostParams,

    // I/O types
    CsvReader,
    CsvWriter,

    // Error types
    Error,
    ErrorKind,

    // Pricing types
    PricedRow,
    PricingRun,
    PricingStats,

    // Table types
    ProductRow,
    ProductTable,

    Result,
    RowCosts,
    RowFailure,

    // Main types
    Workbook,
    WorkbookExt,
    WorkbookPricingExt,
    Worksheet,

    XlsxReader,
    XlsxWriter,
};

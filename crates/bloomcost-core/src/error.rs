//! Error types for bloomcost-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of pricing errors.
///
/// Structure errors are fatal for the sheet they occur in (no partial table
/// is produced). Validation errors withhold a single row's derived columns.
/// Computation errors abort a single row's arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The sheet does not match the expected layout
    Structure,
    /// A row-level input value is unusable
    Validation,
    /// Arithmetic that cannot proceed (division by zero)
    Computation,
}

/// Errors that can occur in bloomcost-core and the calculation pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(usize, usize),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(usize, usize),

    /// Sheet index out of bounds
    #[error("Sheet index {0} out of bounds (count: {1})")]
    SheetOutOfBounds(usize, usize),

    /// Sheet not found by name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// No header row found in the sheet
    #[error("No header row with {marker:?} in the first column of sheet {sheet:?}")]
    HeaderRowNotFound {
        sheet: String,
        marker: &'static str,
    },

    /// Required column missing after normalization
    #[error("Required column {0} is missing")]
    MissingColumn(String),

    /// A cell that must be numeric holds something else
    #[error("Row {row}, column {column}: expected a number, got {value:?}")]
    NonNumericCell {
        row: usize,
        column: String,
        value: String,
    },

    /// A divisor field is zero or negative
    #[error("Row {row}, column {column}: {value} is not a valid divisor")]
    InvalidDivisor {
        row: usize,
        column: String,
        value: f64,
    },

    /// Division by zero inside a calculator
    #[error("Division by zero computing {0}")]
    DivisionByZero(&'static str),

    /// Margin percent outside the accepted range or step
    #[error("Margin percent {0} is out of range (0-100 in steps of {step})", step = crate::MARGIN_STEP)]
    InvalidMarginPercent(u8),

    /// A cost parameter that must be positive is not
    #[error("Cost parameter {name} must be positive, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Classify this error per the structure/validation/computation taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::RowOutOfBounds(..)
            | Error::ColumnOutOfBounds(..)
            | Error::SheetOutOfBounds(..)
            | Error::SheetNotFound(_)
            | Error::InvalidSheetName(_)
            | Error::DuplicateSheetName(_)
            | Error::HeaderRowNotFound { .. }
            | Error::MissingColumn(_)
            | Error::Other(_) => ErrorKind::Structure,

            Error::NonNumericCell { .. }
            | Error::InvalidDivisor { .. }
            | Error::InvalidMarginPercent(_)
            | Error::InvalidParameter { .. } => ErrorKind::Validation,

            Error::DivisionByZero(_) => ErrorKind::Computation,
        }
    }
}

//! # bloomcost-calc
//!
//! The calculation pipeline for bloomcost: product-table loading and the
//! chained cost transforms that turn raw box data into a client price.
//!
//! Every calculator here is a pure function of a row's raw fields and one
//! [`CostParams`](bloomcost_core::CostParams) value. There is no shared
//! mutable table: each stage returns a typed result, and the wet-pack cube
//! flows into the US-freight stage as an explicit argument.
//!
//! ## Pipeline order
//!
//! 1. [`table::ProductTable`] - locate the header, bind columns, parse rows
//! 2. [`freight::freight_size`] - box volume, box price, duty, per-unit freight
//! 3. [`wetpack::wet_pack`] - converted dimensions, cube, wet-pack surcharge
//! 4. [`usfreight::us_freight`] - fuel, per-box and per-unit US freight
//! 5. [`cost::price_row`] - total cost and margin-derived client price

pub mod cost;
pub mod freight;
pub mod money;
pub mod table;
pub mod usfreight;
pub mod wetpack;

pub use cost::{bouquet_price, client_price, markup_from_margin, price_row, total_cost, RowCosts};
pub use freight::{freight_size, FreightInput, FreightSize};
pub use money::round2;
pub use table::{ProductRow, ProductTable, HEADER_MARKER};
pub use usfreight::{us_freight, UsFreight};
pub use wetpack::{wet_pack, WetPack, WET_PACK_CUBE};

// Re-export the shared error types
pub use bloomcost_core::{Error, ErrorKind, Result};

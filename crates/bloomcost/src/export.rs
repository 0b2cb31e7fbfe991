//! Client-facing export
//!
//! Client files carry exactly three columns: product, bunch-per-box and
//! client price. Cost internals (duty, cube, freight components, total
//! cost) stay out of anything a client sees.

use std::path::Path;

use crate::pricing::PricingRun;
use crate::WorkbookExt;
use bloomcost_core::{CellValue, Result, Workbook, Worksheet};

/// The only columns a client export contains
pub const CLIENT_COLUMNS: [&str; 3] = ["PRODUCT", "BUNCH_PER_BOX", "PRICE_CLIENTE"];

/// Build the client-facing sheet from a pricing run.
///
/// `selection` limits the export to the given table indices; `None` takes
/// every priced row. Withheld rows are never exported.
pub fn client_sheet(run: &PricingRun, selection: Option<&[usize]>) -> Worksheet {
    let mut ws = Worksheet::new("SELECCION");
    ws.push_row(CLIENT_COLUMNS);

    for priced in &run.rows {
        if let Some(indices) = selection {
            if !indices.contains(&priced.index) {
                continue;
            }
        }
        ws.push_row([
            CellValue::string(priced.row.product.clone()),
            CellValue::Number(priced.row.bunch_per_box),
            CellValue::Number(priced.costs.client_price),
        ]);
    }

    ws
}

/// Write the client export to a CSV or XLSX file, by extension
pub fn write_client_file<P: AsRef<Path>>(
    run: &PricingRun,
    selection: Option<&[usize]>,
    path: P,
) -> Result<()> {
    let sheet = client_sheet(run, selection);
    let mut workbook = Workbook::empty();
    workbook.add_existing_worksheet(sheet)?;
    workbook.save(path)
}

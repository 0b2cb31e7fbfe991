//! Sheet pricing engine
//!
//! A pricing run is a pure function of (workbook, sheet, parameters):
//! callers rerun it after any parameter or selection change and replace
//! their previous result wholesale. Rows that fail validation are withheld
//! with their error; they never show up as zeroed or stale prices.

use bloomcost_calc::{price_row, ProductRow, ProductTable, RowCosts};
use bloomcost_core::{CostParams, Error, Result, Workbook, Worksheet};

/// One successfully priced row
#[derive(Debug, Clone)]
pub struct PricedRow {
    /// Position in the loaded product table (0-based)
    pub index: usize,
    /// The parsed raw fields
    pub row: ProductRow,
    /// Every derived column
    pub costs: RowCosts,
}

/// One withheld row, with the error that withheld it
#[derive(Debug)]
pub struct RowFailure {
    /// Position in the loaded product table (0-based)
    pub index: usize,
    /// Why the row's derived columns were withheld
    pub error: Error,
}

/// Statistics from a pricing run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingStats {
    /// Data rows considered (blank spacer rows excluded)
    pub rows_total: usize,
    /// Rows with a full set of derived columns
    pub rows_priced: usize,
    /// Rows withheld by validation or computation errors
    pub rows_withheld: usize,
}

/// The result of pricing one sheet
#[derive(Debug)]
pub struct PricingRun {
    /// Name of the sheet the table came from
    pub sheet: String,
    /// Priced rows, in table order
    pub rows: Vec<PricedRow>,
    /// Withheld rows, in table order
    pub failures: Vec<RowFailure>,
    /// Run statistics
    pub stats: PricingStats,
}

impl PricingRun {
    /// Keep only the rows at the given table indices
    pub fn select(&self, indices: &[usize]) -> Vec<&PricedRow> {
        self.rows
            .iter()
            .filter(|r| indices.contains(&r.index))
            .collect()
    }
}

/// Extension trait for Workbook to add pricing methods
pub trait WorkbookPricingExt {
    /// Price the product table in the sheet at `sheet_index`
    fn price_sheet(&self, sheet_index: usize, params: &CostParams) -> Result<PricingRun>;

    /// Price the product table in the named sheet
    fn price_sheet_by_name(&self, name: &str, params: &CostParams) -> Result<PricingRun>;
}

impl WorkbookPricingExt for Workbook {
    fn price_sheet(&self, sheet_index: usize, params: &CostParams) -> Result<PricingRun> {
        let sheet = self
            .worksheet(sheet_index)
            .ok_or(Error::SheetOutOfBounds(sheet_index, self.sheet_count()))?;
        price_worksheet(sheet, params)
    }

    fn price_sheet_by_name(&self, name: &str, params: &CostParams) -> Result<PricingRun> {
        let sheet = self
            .worksheet_by_name(name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))?;
        price_worksheet(sheet, params)
    }
}

/// Price every data row of one worksheet, in fixed pipeline order
fn price_worksheet(sheet: &Worksheet, params: &CostParams) -> Result<PricingRun> {
    // Bad parameters fail the whole run before any row is touched
    params.validate()?;

    let table = ProductTable::from_worksheet(sheet)?;
    table.check_required_columns()?;

    let mut rows = Vec::new();
    let mut failures = Vec::new();
    let mut rows_total = 0;

    for index in 0..table.n_rows() {
        if table.is_blank_row(index) {
            continue;
        }
        rows_total += 1;

        let outcome = table
            .product_row(index, params.extras_default)
            .and_then(|row| price_row(&row, params).map(|costs| (row, costs)));

        match outcome {
            Ok((row, costs)) => rows.push(PricedRow { index, row, costs }),
            Err(error) => {
                log::warn!("Row {} of {:?} withheld: {}", index, sheet.name(), error);
                failures.push(RowFailure { index, error });
            }
        }
    }

    let stats = PricingStats {
        rows_total,
        rows_priced: rows.len(),
        rows_withheld: failures.len(),
    };

    Ok(PricingRun {
        sheet: sheet.name().to_string(),
        rows,
        failures,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloomcost_core::{CellValue, ErrorKind};
    use pretty_assertions::assert_eq;

    fn catalog() -> Workbook {
        let mut wb = Workbook::empty();
        let idx = wb.add_worksheet_with_name("EASTER 2026").unwrap();
        let ws = wb.worksheet_mut(idx).unwrap();

        ws.push_row(["", "HEINEN'S PROGRAM"]);
        ws.push_row([
            CellValue::Number(1.0),
            "PRODUCT".into(),
            "FARM".into(),
            "LENGTH".into(),
            "WIDTH".into(),
            "HEIGHT".into(),
            "FARM PRICE".into(),
            "STEM BUNCH".into(),
            "BUNCH PER BOX".into(),
            "UNITS".into(),
            "EXTRAS".into(),
        ]);
        ws.push_row([
            CellValue::Number(2.0),
            "ROSES 40CM".into(),
            "santa maria".into(),
            CellValue::Number(40.0),
            CellValue::Number(30.0),
            CellValue::Number(20.0),
            CellValue::Number(0.25),
            CellValue::Number(10.0),
            CellValue::Number(10.0),
            CellValue::Number(10.0),
            CellValue::Number(1.0),
        ]);
        ws.push_row([
            CellValue::Number(3.0),
            "BAD ROW".into(),
            "el rosal".into(),
            CellValue::String("forty".into()),
            CellValue::Number(30.0),
            CellValue::Number(20.0),
            CellValue::Number(0.25),
            CellValue::Number(10.0),
            CellValue::Number(10.0),
            CellValue::Number(10.0),
            CellValue::Number(1.0),
        ]);
        wb
    }

    #[test]
    fn test_priced_and_withheld_rows() {
        let run = catalog()
            .price_sheet_by_name("EASTER 2026", &CostParams::default())
            .unwrap();

        assert_eq!(run.sheet, "EASTER 2026");
        assert_eq!(
            run.stats,
            PricingStats {
                rows_total: 2,
                rows_priced: 1,
                rows_withheld: 1,
            }
        );

        let priced = &run.rows[0];
        assert_eq!(priced.index, 0);
        assert_eq!(priced.row.product, "ROSES 40CM");
        assert_eq!(priced.costs.total_cost, 2.89);
        assert_eq!(priced.costs.client_price, 3.40);

        let failure = &run.failures[0];
        assert_eq!(failure.index, 1);
        assert_eq!(failure.error.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_sheet_without_marker_fails_whole_run() {
        let mut wb = Workbook::empty();
        wb.add_worksheet_with_name("NOTES").unwrap();
        wb.worksheet_mut(0).unwrap().push_row(["", "nothing here"]);

        let err = wb.price_sheet(0, &CostParams::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
    }

    #[test]
    fn test_unknown_sheet_name() {
        let err = catalog()
            .price_sheet_by_name("VDAY", &CostParams::default())
            .unwrap_err();
        assert!(matches!(err, Error::SheetNotFound(_)));
    }

    #[test]
    fn test_invalid_params_fail_before_any_row() {
        let params = CostParams {
            margin_percent: 33,
            ..Default::default()
        };
        assert!(matches!(
            catalog().price_sheet(0, &params),
            Err(Error::InvalidMarginPercent(33))
        ));
    }

    #[test]
    fn test_rerun_with_same_inputs_is_identical() {
        let wb = catalog();
        let params = CostParams::default();

        let a = wb.price_sheet(0, &params).unwrap();
        let b = wb.price_sheet(0, &params).unwrap();

        assert_eq!(a.rows.len(), b.rows.len());
        for (x, y) in a.rows.iter().zip(&b.rows) {
            assert_eq!(x.costs, y.costs);
            assert_eq!(x.row, y.row);
        }
    }

    #[test]
    fn test_select_subset() {
        let run = catalog()
            .price_sheet(0, &CostParams::default())
            .unwrap();

        assert_eq!(run.select(&[0]).len(), 1);
        assert!(run.select(&[1]).is_empty()); // withheld row can't be selected
        assert!(run.select(&[]).is_empty());
    }
}

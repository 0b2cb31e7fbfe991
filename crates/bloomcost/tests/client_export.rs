//! End-to-end tests for the client export (price -> select -> export file)

use bloomcost::prelude::*;
use bloomcost::{client_sheet, write_client_file, CLIENT_COLUMNS};

fn priced_run() -> PricingRun {
    let mut wb = Workbook::empty();
    let idx = wb.add_worksheet_with_name("VDAY").unwrap();
    let ws = wb.worksheet_mut(idx).unwrap();

    ws.push_row([
        "",
        "PRODUCT",
        "FARM",
        "LENGTH",
        "WIDTH",
        "HEIGHT",
        "FARM PRICE",
        "STEM BUNCH",
        "BUNCH PER BOX",
        "UNITS",
        "EXTRAS",
    ]);
    for (product, farm_price, bunch) in [
        ("ROSES 40CM", 0.25, 10.0),
        ("POMS ASSORTED", 0.30, 12.0),
        ("ALSTRO SELECT", 0.28, 12.0),
    ] {
        ws.push_row([
            CellValue::Number(1.0),
            CellValue::string(product),
            CellValue::string("FARM A"),
            CellValue::Number(40.0),
            CellValue::Number(30.0),
            CellValue::Number(20.0),
            CellValue::Number(farm_price),
            CellValue::Number(10.0),
            CellValue::Number(bunch),
            CellValue::Number(10.0),
            CellValue::Number(1.0),
        ]);
    }

    wb.price_sheet_by_name("VDAY", &CostParams::default()).unwrap()
}

#[test]
fn export_carries_exactly_the_client_columns() {
    let run = priced_run();
    let sheet = client_sheet(&run, None);

    assert_eq!(sheet.n_rows(), 4); // header + 3 products
    assert_eq!(sheet.n_cols(), CLIENT_COLUMNS.len());

    for (col, label) in CLIENT_COLUMNS.iter().enumerate() {
        assert_eq!(sheet.cell_at(0, col).as_string(), Some(*label));
    }

    // Cost internals are not present anywhere in the export
    for row in sheet.rows() {
        for cell in row {
            if let Some(s) = cell.as_string() {
                assert!(!s.contains("COSTO"));
                assert!(!s.contains("DUTY"));
                assert!(!s.contains("CUBE"));
            }
        }
    }
}

#[test]
fn csv_export_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("productos_seleccionados.csv");

    let run = priced_run();
    write_client_file(&run, Some(&[0, 2]), &path).unwrap();

    let back = CsvReader::read_file(&path, &Default::default()).unwrap();
    assert_eq!(back.n_rows(), 3); // header + 2 selected
    assert_eq!(back.cell_at(1, 0).as_string(), Some("ROSES 40CM"));
    assert_eq!(back.cell_at(2, 0).as_string(), Some("ALSTRO SELECT"));

    // The exported price equals the run's derived client price
    assert_eq!(
        back.cell_at(1, 2).as_number(),
        Some(run.rows[0].costs.client_price)
    );
}

#[test]
fn xlsx_export_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("productos_seleccionados.xlsx");

    let run = priced_run();
    write_client_file(&run, None, &path).unwrap();

    let back = Workbook::open(&path).unwrap();
    let sheet = back.worksheet(0).unwrap();

    assert_eq!(sheet.n_rows(), 4);
    assert_eq!(sheet.cell_at(0, 2).as_string(), Some("PRICE_CLIENTE"));
    assert_eq!(
        sheet.cell_at(1, 2).as_number(),
        Some(run.rows[0].costs.client_price)
    );
    assert_eq!(
        sheet.cell_at(1, 1).as_number(),
        Some(run.rows[0].row.bunch_per_box)
    );
}

#[test]
fn selection_of_nothing_exports_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");

    write_client_file(&priced_run(), Some(&[]), &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("PRODUCT"));
}

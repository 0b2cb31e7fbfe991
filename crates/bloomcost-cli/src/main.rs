//! Bloomcost CLI - price flower-product catalogs from the command line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use bloomcost::prelude::*;
use bloomcost::{write_client_file, ProductTable};

#[derive(Parser)]
#[command(name = "bloomcost")]
#[command(
    author,
    version,
    about = "Landed cost and client pricing for flower-product catalogs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a catalog sheet and export or print the client view
    Price {
        /// Input workbook (xlsx, csv)
        input: PathBuf,

        /// Sheet to price: name or 0-based index (default: 0)
        #[arg(short, long)]
        sheet: Option<String>,

        /// JSON file with cost parameters (missing fields use defaults)
        #[arg(short, long)]
        params: Option<PathBuf>,

        /// Margin percent override (0-100, steps of 5)
        #[arg(short, long)]
        margin: Option<u8>,

        /// Pin the packed-box cube to the wet-pack override
        #[arg(long)]
        wet_pack: bool,

        /// Export only these table row indices (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        rows: Option<Vec<usize>>,

        /// Output file (csv or xlsx); omit to print to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the full cost breakdown instead of the client view
        #[arg(long)]
        breakdown: bool,
    },

    /// List all sheets in a workbook
    Sheets {
        /// Input workbook
        input: PathBuf,
    },

    /// Show information about a workbook
    Info {
        /// Input workbook
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Price {
            input,
            sheet,
            params,
            margin,
            wet_pack,
            rows,
            output,
            breakdown,
        } => price(
            &input,
            sheet.as_deref(),
            params.as_deref(),
            margin,
            wet_pack,
            rows.as_deref(),
            output.as_deref(),
            breakdown,
        ),
        Commands::Sheets { input } => list_sheets(&input),
        Commands::Info { input } => show_info(&input),
    }
}

/// Load parameters from an optional JSON file, then apply flag overrides
fn load_params(
    params_file: Option<&Path>,
    margin: Option<u8>,
    wet_pack: bool,
) -> Result<CostParams> {
    let mut params = match params_file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read '{}'", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid parameter file '{}'", path.display()))?
        }
        None => CostParams::default(),
    };

    if let Some(m) = margin {
        params.margin_percent = m;
    }
    if wet_pack {
        params.wet_pack_enabled = true;
    }

    Ok(params)
}

fn price(
    input: &Path,
    sheet: Option<&str>,
    params_file: Option<&Path>,
    margin: Option<u8>,
    wet_pack: bool,
    rows: Option<&[usize]>,
    output: Option<&Path>,
    breakdown: bool,
) -> Result<()> {
    let params = load_params(params_file, margin, wet_pack)?;

    let workbook =
        Workbook::open(input).with_context(|| format!("Failed to open '{}'", input.display()))?;

    // A sheet argument that parses as a number is an index, else a name
    let run = match sheet {
        Some(s) => match s.parse::<usize>() {
            Ok(idx) => workbook.price_sheet(idx, &params),
            Err(_) => workbook.price_sheet_by_name(s, &params),
        },
        None => workbook.price_sheet(0, &params),
    }
    .with_context(|| format!("Failed to price '{}'", input.display()))?;

    eprintln!(
        "Priced {} of {} rows in sheet \"{}\" ({} withheld)",
        run.stats.rows_priced, run.stats.rows_total, run.sheet, run.stats.rows_withheld
    );
    for failure in &run.failures {
        eprintln!("  row {}: {}", failure.index, failure.error);
    }

    if let Some(output_path) = output {
        write_client_file(&run, rows, output_path)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!("Wrote '{}'", output_path.display());
        return Ok(());
    }

    if breakdown {
        print_breakdown(&run, rows);
    } else {
        print_client_view(&run, rows);
    }

    Ok(())
}

fn selected<'a>(run: &'a PricingRun, rows: Option<&[usize]>) -> Vec<&'a PricedRow> {
    match rows {
        Some(indices) => run.select(indices),
        None => run.rows.iter().collect(),
    }
}

fn print_client_view(run: &PricingRun, rows: Option<&[usize]>) {
    println!("PRODUCT\tBUNCH_PER_BOX\tPRICE_CLIENTE");
    for priced in selected(run, rows) {
        println!(
            "{}\t{}\t{:.2}",
            priced.row.product, priced.row.bunch_per_box, priced.costs.client_price
        );
    }
}

fn print_breakdown(run: &PricingRun, rows: Option<&[usize]>) {
    println!(
        "PRODUCT\tBOUQUET\tFREIGHT\tCUBE\tWET_PACK\tUS_FREIGHT\tCOSTO_TOTAL\tPRICE_CLIENTE"
    );
    for priced in selected(run, rows) {
        let c = &priced.costs;
        println!(
            "{}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}",
            priced.row.product,
            c.bouquet_price,
            c.freight_price,
            c.cube,
            c.wet_pack_price,
            c.us_freight_price,
            c.total_cost,
            c.client_price
        );
    }
}

fn list_sheets(input: &Path) -> Result<()> {
    let workbook =
        Workbook::open(input).with_context(|| format!("Failed to open '{}'", input.display()))?;

    for (i, name) in workbook.sheet_names().iter().enumerate() {
        println!("{}\t{}", i, name);
    }

    Ok(())
}

fn show_info(input: &Path) -> Result<()> {
    let workbook =
        Workbook::open(input).with_context(|| format!("Failed to open '{}'", input.display()))?;

    println!("File: {}", input.display());
    println!("Sheets: {}", workbook.sheet_count());

    for (i, sheet) in workbook.worksheets().enumerate() {
        println!();
        println!("  Sheet {}: \"{}\"", i, sheet.name());
        println!("    Size: {} rows x {} columns", sheet.n_rows(), sheet.n_cols());

        match ProductTable::from_worksheet(sheet) {
            Ok(table) => println!("    Products: {}", table.n_rows()),
            Err(e) => println!("    Products: none ({})", e),
        }
    }

    Ok(())
}

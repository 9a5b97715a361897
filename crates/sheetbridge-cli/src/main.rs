//! sheetbridge CLI - inspect and write spreadsheets with any backend

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use log::{info, warn};
use sheetbridge::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheetbridge")]
#[command(author, version, about = "Read and write xls, xlsx and ods spreadsheets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all sheets in a spreadsheet
    Sheets {
        /// Input spreadsheet file (xls, xlsx, ods)
        input: PathBuf,
    },

    /// Show backend, sheets and their sizes
    Info {
        /// Input spreadsheet file
        input: PathBuf,

        /// Backend to read with (xls, excel, ods; default: detected)
        #[arg(short, long)]
        backend: Option<Backend>,
    },

    /// Print every row of a spreadsheet, tab separated
    Dump {
        /// Input spreadsheet file
        input: PathBuf,

        /// Only dump this sheet
        #[arg(short, long)]
        sheet: Option<String>,

        /// Backend to read with (xls, excel, ods; default: detected)
        #[arg(short, long)]
        backend: Option<Backend>,
    },

    /// Write the Heroes demo sheet to a new file
    Heroes {
        /// Output file (xlsx, ods)
        output: PathBuf,

        /// Backend to write with (default: detected)
        #[arg(short, long)]
        backend: Option<Backend>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sheets { input } => list_sheets(&input),
        Commands::Info { input, backend } => show_info(&input, backend),
        Commands::Dump {
            input,
            sheet,
            backend,
        } => dump(&input, sheet.as_deref(), backend),
        Commands::Heroes { output, backend } => heroes(&output, backend),
    }
}

fn open(input: &Path, backend: Option<Backend>) -> Result<Box<dyn Spreadsheet>> {
    let book = match backend {
        Some(backend) => sheetbridge::open_with(input, backend),
        None => sheetbridge::open(input),
    };
    book.with_context(|| format!("Failed to open '{}'", input.display()))
}

fn list_sheets(input: &Path) -> Result<()> {
    let book = open(input, None)?;
    for (i, name) in book.sheet_names()?.iter().enumerate() {
        println!("{}\t{}", i, name);
    }
    Ok(())
}

fn show_info(input: &Path, backend: Option<Backend>) -> Result<()> {
    let book = open(input, backend)?;

    println!("File: {}", input.display());
    println!("Backend: {}", book.backend());
    println!("Sheets: {}", book.sheet_count()?);

    for (i, sheet) in book.sheets()?.iter().enumerate() {
        println!();
        println!("  Sheet {}: \"{}\"", i, sheet.name());
        let rows = sheet.row_count()?;
        if rows == 0 {
            println!("    Used range: empty");
        } else {
            println!(
                "    Used range: {} rows x {} columns",
                rows,
                sheet.column_count()?
            );
        }
    }

    Ok(())
}

fn dump(input: &Path, only: Option<&str>, backend: Option<Backend>) -> Result<()> {
    let book = open(input, backend)?;
    let sheets = match only {
        Some(name) => vec![book.sheet(name)?],
        None => book.sheets()?,
    };

    for sheet in sheets {
        let rows = sheet.row_count()?;
        info!(
            "reading {} sheet {}: rows = {}, columns = {}",
            input.display(),
            sheet.name(),
            rows,
            sheet.column_count()?
        );
        println!("# {}", sheet.name());
        for row in 0..rows {
            match sheet.row_values(row) {
                Ok(values) => {
                    let cells: Vec<String> = values.iter().map(ToString::to_string).collect();
                    println!("{}", cells.join("\t"));
                }
                Err(e) => warn!("error while reading row {} of {}: {}", row, input.display(), e),
            }
        }
    }

    Ok(())
}

fn heroes(output: &Path, backend: Option<Backend>) -> Result<()> {
    if output.exists() {
        bail!("'{}' already exists", output.display());
    }
    let mut book = match backend {
        Some(backend) => sheetbridge::create_with(output, backend),
        None => sheetbridge::create(output),
    }
    .with_context(|| format!("Failed to create '{}'", output.display()))?;

    let mut sheet = book.add_sheet("Heroes")?;
    let header: Vec<CellValue> = ["Hero", "Origin", "Release Date", "Rarity", "HP"]
        .into_iter()
        .map(CellValue::from)
        .collect();
    let header_format = CellFormat::new(Font::arial().with_bold(true)).with_background(Color::Green);
    sheet.set_row_at(0, 0, &header, Some(&header_format))?;

    let released = NaiveDate::from_ymd_opt(2017, 2, 2).and_then(|d| d.and_hms_opt(0, 0, 0));
    sheet.set_row(
        1,
        &[
            CellValue::from("Ike"),
            CellValue::from("Fire Emblem: Path of Radiance"),
            CellValue::from(released),
            CellValue::from(5),
            CellValue::from(18),
        ],
    )?;

    match sheet.auto_size_all() {
        Err(Error::Unsupported { feature, backend }) => {
            warn!("skipping {} on the {} backend", feature, backend)
        }
        other => other?,
    }

    book.write()
        .with_context(|| format!("Failed to write '{}'", output.display()))?;
    book.close()?;
    info!(
        "{} has been created with the {} backend",
        output.display(),
        book.backend()
    );
    Ok(())
}

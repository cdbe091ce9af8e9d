use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::Serialize;

use campusnav::campus::{self, Campus, FileFormat};
use campusnav::service::response::{
    BuildingSummary, ErrorResponse, NavigateResponse, ScanResponse, SearchResponse,
};
use campusnav::{NavigationService, ServiceError};

#[derive(Debug, thiserror::Error)]
#[error("{0}: {1}")]
struct CampusLoadError(PathBuf, #[source] campus::LoadError);

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Auto,
    Xml,
    XmlGz,
    XmlBz2,
}

impl From<Format> for FileFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Auto => FileFormat::Unknown,
            Format::Xml => FileFormat::Xml,
            Format::XmlGz => FileFormat::XmlGz,
            Format::XmlBz2 => FileFormat::XmlBz2,
        }
    }
}

#[derive(Parser)]
struct Cli {
    /// The path to the campus dataset; the built-in demo campus is used if absent
    #[arg(long, global = true)]
    campus: Option<PathBuf>,

    /// Format of the campus dataset
    #[arg(long, global = true, value_enum, default_value_t = Format::Auto)]
    format: Format,

    /// Treat paths marked as one-way as traversable in one direction only
    #[arg(long, global = true)]
    oneway: bool,

    /// Increase logging verbosity (may be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all buildings
    Buildings,

    /// Find the shortest route between two buildings
    Navigate {
        /// Name of the starting building
        start: String,

        /// Name of the destination building
        end: String,
    },

    /// Resolve a scanned QR identifier to a building
    Scan {
        /// The scanned QR identifier
        qr_id: String,
    },

    /// Find a building by name
    Search {
        /// Name of the building
        name: String,
    },
}

pub fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let campus = match cli.campus {
        Some(ref path) => load_campus(path, cli.format.into(), cli.oneway)?,
        None => campus::demo(),
    };
    let service = NavigationService::new(campus);

    let result = match cli.command {
        Command::Buildings => {
            let listing: Vec<BuildingSummary> = service
                .list_buildings()
                .iter()
                .map(BuildingSummary::from)
                .collect();
            Ok(print_json(&listing))
        }

        Command::Navigate { start, end } => service
            .navigate(&start, &end)
            .map(|n| print_json(&NavigateResponse::from(&n))),

        Command::Scan { qr_id } => service
            .resolve_qr(&qr_id)
            .map(|l| print_json(&ScanResponse::from(l))),

        Command::Search { name } => service
            .find_building(&name)
            .map(|l| print_json(&SearchResponse::from(l))),
    };

    match result {
        Ok(printed) => {
            printed?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            print_error(&e)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = colog::default_builder();
    builder.filter_level(level);
    builder.init();
}

fn load_campus<P: AsRef<Path>>(
    path: P,
    file_format: FileFormat,
    respect_oneway: bool,
) -> Result<Campus, CampusLoadError> {
    let options = campus::Options {
        file_format,
        respect_oneway,
    };
    campus::load_from_file(&options, path.as_ref())
        .map_err(|e| CampusLoadError(PathBuf::from(path.as_ref()), e))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_error(e: &ServiceError) -> Result<(), serde_json::Error> {
    print_json(&ErrorResponse::from(e))
}

mod app;
mod catalog;
mod config;
mod data;
mod error;
mod ui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use app::{OutputFormat, Query, TechJobsApp};
use catalog::JobCatalog;
use config::CatalogConfig;

#[derive(Parser)]
#[command(name = "techjobs")]
#[command(about = "List and search tech job listings from a CSV file")]
#[command(version)]
struct Cli {
    /// Job data CSV (defaults to $TECHJOBS_DATA, then resources/job_data.csv)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the values of a column, or every job with `all`
    List {
        /// Column name or menu key (employer, location, position-type, core-competency, all)
        column: String,
    },
    /// Find jobs containing a term (case-insensitive)
    Search {
        term: String,
        /// Column to search; every column when omitted or `all`
        #[arg(long = "in")]
        column: Option<String>,
    },
    /// Show the columns of the data file
    Columns,
}

impl From<Commands> for Query {
    fn from(cmd: Commands) -> Self {
        match cmd {
            Commands::List { column } => Query::List { column },
            Commands::Search { term, column } => Query::Search { term, column },
            Commands::Columns => Query::Columns,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = CatalogConfig::resolve(cli.data);
    log::debug!("Using job data file {}", config.data_file.display());

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let app = TechJobsApp::new(JobCatalog::from_config(&config), format);

    let output = app.run(&cli.command.into())?;
    log::debug!(
        "Catalog loaded={} after {} read(s)",
        app.catalog.is_loaded(),
        app.catalog.load_attempts()
    );
    print!("{output}");
    Ok(())
}

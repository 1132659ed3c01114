// Exosift CLI - headless transit-catalog triage
// Score and label survey catalogs, inspect column resolution, serve the API.

mod exit_codes;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exosift_engine::classify::Thresholds;
use exosift_engine::model::Role;
use exosift_engine::resolve::{self, Overrides};
use exosift_engine::summary::{summarize, ClassSummary};
use exosift_io::{load_catalog, run_pipeline_with, PipelineError};

use exit_codes::{pipeline_exit_code, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "exosift")]
#[command(about = "Transit-survey catalog triage (scoring + classification)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score and label a catalog file
    #[command(after_help = "\
Examples:
  exosift run candidates.csv
  exosift run candidates.csv --json
  exosift run catalog.xlsx --output scored.csv
  exosift run survey.tsv --map tmag=TESS_MAG --map orbper=Period_days")]
    Run {
        /// Input catalog (CSV/TSV or Excel)
        file: String,

        /// Write the augmented catalog as CSV
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,

        /// Manual column override, `role=column`. Repeatable.
        /// Roles: id, orbper, trandur, trandept, tmag
        #[arg(long, value_name = "ROLE=COLUMN")]
        map: Vec<String>,
    },

    /// Show which catalog columns resolve to which roles
    #[command(after_help = "\
Examples:
  exosift columns candidates.csv
  exosift columns catalog.xlsx --json
  exosift columns survey.csv --map trandept=Depth_ppm")]
    Columns {
        /// Input catalog (CSV/TSV or Excel)
        file: String,

        /// Print the role mapping as JSON
        #[arg(long)]
        json: bool,

        /// Manual column override, `role=column`. Repeatable.
        #[arg(long, value_name = "ROLE=COLUMN")]
        map: Vec<String>,
    },

    /// Start the HTTP API
    Serve {
        /// Listen address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Listen port (0 picks an ephemeral port)
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Run {
            file,
            output,
            json,
            map,
        } => cmd_run(&file, output.as_deref(), json, &map),
        Commands::Columns { file, json, map } => cmd_columns(&file, json, &map),
        Commands::Serve { host, port } => cmd_serve(&host, port),
    };

    ExitCode::from(code)
}

fn cmd_run(file: &str, output: Option<&Path>, json: bool, map: &[String]) -> u8 {
    let overrides = match parse_overrides(map) {
        Ok(overrides) => overrides,
        Err(msg) => {
            eprintln!("error: {msg}");
            return EXIT_USAGE;
        }
    };

    let catalog = match run_pipeline_with(file, &overrides, &Thresholds::default()) {
        Ok(catalog) => catalog,
        Err(err) => return report_pipeline_error(&err),
    };

    let summary = summarize(&catalog);

    if let Some(path) = output {
        if let Err(msg) = exosift_io::csv::export(&catalog, path) {
            eprintln!("error: {msg}");
            return EXIT_ERROR;
        }
    }

    if json {
        print_json_report(file, &summary);
    } else {
        println!("{}: {} rows", file, summary.total_rows);
        let mut counts: Vec<(&String, &usize)> = summary.class_counts.iter().collect();
        counts.sort();
        for (label, count) in counts {
            println!("  {label}: {count}");
        }
    }

    EXIT_SUCCESS
}

fn print_json_report(file: &str, summary: &ClassSummary) {
    let report = serde_json::json!({
        "file": file,
        "run_at": chrono::Utc::now().to_rfc3339(),
        "engine_version": env!("CARGO_PKG_VERSION"),
        "total_rows": summary.total_rows,
        "class_counts": summary.class_counts,
    });
    if let Ok(out) = serde_json::to_string_pretty(&report) {
        println!("{out}");
    }
}

fn cmd_columns(file: &str, json: bool, map: &[String]) -> u8 {
    let overrides = match parse_overrides(map) {
        Ok(overrides) => overrides,
        Err(msg) => {
            eprintln!("error: {msg}");
            return EXIT_USAGE;
        }
    };

    let catalog = match load_catalog(file) {
        Ok(catalog) => catalog,
        Err(err) => return report_pipeline_error(&err),
    };

    let roles = match resolve::resolve(&catalog.columns, &overrides) {
        Ok(roles) => roles,
        Err(err) => return report_pipeline_error(&PipelineError::Resolve(err)),
    };

    if json {
        if let Ok(out) = serde_json::to_string_pretty(&roles) {
            println!("{out}");
        }
    } else {
        println!("id       -> {}", roles.id.as_deref().unwrap_or("(unresolved)"));
        println!("orbper   -> {}", roles.orbper);
        println!("trandur  -> {}", roles.trandur);
        println!("trandept -> {}", roles.trandept);
        println!("tmag     -> {}", roles.tmag);
    }

    EXIT_SUCCESS
}

fn cmd_serve(host: &str, port: u16) -> u8 {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let addr: SocketAddr = match format!("{host}:{port}").parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("error: invalid listen address {host}:{port}: {e}");
            return EXIT_USAGE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("error: failed to start runtime: {e}");
            return EXIT_ERROR;
        }
    };

    match runtime.block_on(exosift_server::serve(addr)) {
        Ok(()) => EXIT_SUCCESS,
        Err(msg) => {
            eprintln!("error: {msg}");
            EXIT_ERROR
        }
    }
}

/// Parse repeatable `--map role=column` specs into resolver overrides.
fn parse_overrides(specs: &[String]) -> Result<Overrides, String> {
    let mut overrides = Overrides::new();
    for spec in specs {
        let (role, column) = spec
            .split_once('=')
            .ok_or_else(|| format!("invalid --map '{spec}' (expected role=column)"))?;
        let role: Role = role.trim().parse()?;
        overrides.insert(role, column.trim().to_string());
    }
    Ok(overrides)
}

fn report_pipeline_error(err: &PipelineError) -> u8 {
    eprintln!("error: {err}");
    pipeline_exit_code(err)
}

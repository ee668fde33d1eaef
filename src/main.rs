use clap::{ArgAction, Parser};
use ctable::core::config::{self, CliOverrides, ResolvedConfig};
use ctable::core::record::{Record, parse_records, union_columns};
use ctable::core::state::App;
use ctable::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::error::Error;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ctable", about = "Browse a JSON list of records as a table")]
struct Args {
    /// JSON array of objects, or `-` to read it from stdin
    data: String,

    /// Column to show; repeat or separate with commas to set the order
    /// (defaults to every key, first-seen order)
    #[arg(short, long, value_name = "NAME", action = ArgAction::Append, value_delimiter = ',')]
    columns: Vec<String>,

    /// Keep cells in their record's row when other records lack the key
    #[arg(long)]
    align_missing: bool,

    /// How long to wait after Esc for the rest of a key sequence
    #[arg(long, value_name = "MS")]
    escape_timeout_ms: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Log file path (default: ~/.ctable/ctable.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(Some(record)) => match serde_json::to_string_pretty(&record) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => fail(&e),
        },
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => fail(e.as_ref()),
    }
}

fn fail(e: &dyn Error) -> ExitCode {
    log::error!("{e}");
    eprintln!("ctable: {e}");
    ExitCode::from(2)
}

fn run(args: Args) -> Result<Option<Record>, Box<dyn Error>> {
    let file_config = config::load_config()?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            escape_timeout_ms: args.escape_timeout_ms,
            align_missing: args.align_missing,
            log_level: args.log_level.clone(),
            log_file: args.log_file.clone(),
        },
    );
    init_logging(&resolved);

    log::info!("ctable starting up");
    if let Some(path) = config::config_path() {
        log::info!("Config file: {}", path.display());
    }
    log::debug!("Resolved config: {:?}", resolved);

    let (records, column_order) = load(&args, io::stdin())?;
    log::info!(
        "Loaded {} records, columns: {:?}",
        records.len(),
        column_order
    );

    // Real terminal size is applied when the session starts.
    let mut app = App::new(records, column_order, resolved.projection, 80, 24);
    Ok(tui::run(&mut app, &resolved)?)
}

/// Decode the payload argument (or `stdin` for `-`) and settle the column
/// order.
fn load(args: &Args, mut stdin: impl Read) -> Result<(Vec<Record>, Vec<String>), Box<dyn Error>> {
    let records = if args.data == "-" {
        let mut payload = String::new();
        stdin
            .read_to_string(&mut payload)
            .map_err(|e| format!("cannot read data from stdin: {e}"))?;
        parse_records(&payload)?
    } else {
        parse_records(&args.data)?
    };

    let column_order = if args.columns.is_empty() {
        union_columns(&records)
    } else {
        args.columns.clone()
    };
    Ok((records, column_order))
}

/// Initialize the file logger. Logging is best-effort: a file that can't be
/// created leaves the session unlogged.
fn init_logging(config: &ResolvedConfig) {
    let Some(path) = &config.log_file else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

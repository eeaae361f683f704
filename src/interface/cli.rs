use crate::domain::graph::{DEFAULT_MAX_ID, MAX_CONFIGURABLE_ID};
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::sector_scan::BreadthFirstSectorCounter;
use crate::infrastructure::text_input::read_input_text;
use crate::usecase::event::AppEvent;
use crate::usecase::solve::{solve_text, SolveConfig};
use crate::usecase::validate::validate_input_text;
use anyhow::{anyhow, Context, Result};
use std::env;
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::Solve {
            input,
            max_id,
            emit_events,
            verbose,
        } => {
            let text = read_input_text(input.as_deref()).await?;

            let (tx, rx) = mpsc::channel::<AppEvent>(1024);
            let (printer, sink) = if emit_events {
                (Some(spawn_ndjson_printer(rx)), Some(tx))
            } else {
                drop(rx);
                (None, None)
            };

            let config = SolveConfig { max_id };
            let counter = BreadthFirstSectorCounter;
            let res = solve_text(&text, &config, &counter, sink).await?;

            if let Some(handle) = printer {
                handle.await.ok();
            }

            // No header means no answer.
            let Some(stats) = res else {
                return Ok(());
            };

            println!("{}", stats.drives);

            if verbose {
                eprintln!(
                    "summary: records_parsed={} records_declared={} neighbors_missing={} lines_skipped={} edges_added={} edges_dropped={} inspections_out_of_range={} inspections_already_visited={} sectors={} drives={}",
                    stats.records_parsed,
                    stats.records_declared,
                    stats.neighbors_missing,
                    stats.lines_skipped,
                    stats.edges_added,
                    stats.edges_dropped,
                    stats.inspections_out_of_range,
                    stats.inspections_already_visited,
                    stats.sectors,
                    stats.drives
                );
            }

            Ok(())
        }

        Cli::Validate { input, max_id } => {
            let text = read_input_text(input.as_deref()).await?;
            let source = input.as_deref().unwrap_or("<stdin>");

            let summary = validate_input_text(&text, max_id)
                .with_context(|| format!("validating input: {source}"))?;

            eprintln!(
                "ok: input format validated (buildings={} inspections={})",
                summary.buildings, summary.inspections
            );
            Ok(())
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Cli {
    Solve {
        input: Option<String>,
        max_id: usize,
        emit_events: bool,
        verbose: bool,
    },
    Validate {
        input: Option<String>,
        max_id: usize,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> [--input <file>] [--max-id <n>] [--emit-events] [--verbose]
        // <bin> validate [--input <file>] [--max-id <n>]
        match args.get(1).map(String::as_str) {
            Some("validate") => Self::parse_validate(args),
            _ => Self::parse_solve(args),
        }
    }

    fn parse_solve(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut max_id = DEFAULT_MAX_ID;
        let mut emit_events = false;
        let mut verbose = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = Some(required_value(args, i, "--input")?);
                }
                "--max-id" => {
                    i += 1;
                    max_id = parse_max_id(args, i)?;
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "-v" | "--verbose" => {
                    verbose = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        Ok(Cli::Solve {
            input,
            max_id,
            emit_events,
            verbose,
        })
    }

    fn parse_validate(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut max_id = DEFAULT_MAX_ID;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = Some(required_value(args, i, "--input")?);
                }
                "--max-id" => {
                    i += 1;
                    max_id = parse_max_id(args, i)?;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        Ok(Cli::Validate { input, max_id })
    }
}

fn required_value(args: &[String], i: usize, flag: &str) -> Result<String> {
    args.get(i)
        .cloned()
        .ok_or_else(|| anyhow!(format!("missing value for {flag}\n\n{}", usage())))
}

fn parse_max_id(args: &[String], i: usize) -> Result<usize> {
    let raw = required_value(args, i, "--max-id")?;
    let max_id: usize = raw
        .parse()
        .with_context(|| format!("--max-id must be a non-negative integer: {raw}"))?;
    if max_id > MAX_CONFIGURABLE_ID {
        return Err(anyhow!(format!(
            "--max-id too large: {raw} (at most {MAX_CONFIGURABLE_ID})\n\n{}",
            usage()
        )));
    }
    Ok(max_id)
}

fn usage() -> &'static str {
    "Usage:\n  sector-drives [--input <file>] [--max-id <n>] [--emit-events] [--verbose]\n  sector-drives validate [--input <file>] [--max-id <n>]\n\nInput is read from stdin unless --input is given. The drive count is printed to stdout.\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stderr.\n  If --verbose is set, a one-line summary is written to stderr."
}

mod report;

use chrono::{Local, NaiveDate};
use pernr::{Context, parse_with};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let parsed = parse_args(std::env::args().skip(1), Local::now().date_naive(), io::stdout().is_terminal());
    let mut config = match parsed {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{}", help_text());
            return;
        }
        Ok(Command::Version) => {
            println!("pernr {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if config.inputs.is_empty() {
        config.inputs = match read_stdin_lines() {
            Ok(lines) if !lines.is_empty() => lines,
            Ok(_) => {
                eprintln!("error: no input provided\n\n{}", help_text());
                std::process::exit(2);
            }
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(2);
            }
        };
    }

    init_logger(config.verbose);

    let ctx = Context { reference_date: config.reference_date };
    let mut failed = 0usize;

    for input in &config.inputs {
        let result = parse_with(input, &ctx);
        if let Err(err) = &result {
            tracing::warn!(input = input.as_str(), error = %err, "rejected input");
            failed += 1;
        }
        report::print_result(input, &result, &ctx, config.full_year, config.color);
    }
    println!();

    if failed > 0 {
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pernr=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pernr=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr).with_target(false).compact())
        .init();
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(CliConfig),
    Help,
    Version,
}

#[derive(Debug, PartialEq, Eq)]
struct CliConfig {
    /// One entry per number to report on; empty means "read stdin".
    inputs: Vec<String>,
    reference_date: NaiveDate,
    full_year: bool,
    color: bool,
    verbose: bool,
}

/// Interpret command-line arguments (program name already skipped).
///
/// Every positional argument, every `--input` value and every argument after
/// `--` becomes its own input.
fn parse_args(args: impl Iterator<Item = String>, today: NaiveDate, color: bool) -> Result<Command, String> {
    let mut config = CliConfig { inputs: Vec::new(), reference_date: today, full_year: false, color, verbose: false };
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value_for = |name: &str| {
            inline.clone().or_else(|| args.next()).ok_or_else(|| format!("error: {name} expects a value"))
        };

        match flag.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-v" | "--verbose" => config.verbose = true,
            "--full-year" => config.full_year = true,
            "--color" => config.color = true,
            "--no-color" => config.color = false,
            "--reference" => config.reference_date = parse_reference(&value_for("--reference")?)?,
            "-i" | "--input" => config.inputs.push(value_for("--input")?),
            "--" => {
                config.inputs.extend(args.by_ref());
                break;
            }
            _ if arg.starts_with('-') && arg.len() > 1 => return Err(format!("error: unknown option '{arg}'")),
            _ => config.inputs.push(arg),
        }
    }

    config.inputs.retain(|input| !input.trim().is_empty());
    Ok(Command::Run(config))
}

/// One identity number per non-empty line.
fn read_stdin_lines() -> Result<Vec<String>, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer.lines().filter(|line| !line.trim().is_empty()).map(str::to_string).collect())
}

fn parse_reference(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("error: invalid --reference '{value}' (expected YYYY-MM-DD)"))
}

fn help_text() -> String {
    format!(
        "pernr {version}

Parse, validate and format Swedish personal identity numbers.

Usage:
  pernr [OPTIONS] [--] <number...>
  pernr [OPTIONS] --input <text> [--input <text>...]
  pernr [OPTIONS] < numbers.txt

Every argument is parsed and reported on its own. Without arguments, reads
one number per stdin line.

Options:
  -i, --input <text>         Text containing an identity number. Repeatable.
  --reference <date>         Reference date in YYYY-MM-DD used for century
                             inference and the -/+ delimiter. Default: today.
  --full-year                Highlight the YYYYMMDD-NNNN rendering.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -v, --verbose              Log century inference steps to stderr.
                             RUST_LOG overrides the filter.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Every input parsed.
  1  At least one input could not be parsed.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}

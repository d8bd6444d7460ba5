//! linesort command-line front end
//!
//! Reads one batch of lines from files or stdin, sorts it with the selected
//! variant and writes the result. When a numeric variant meets a line it cannot
//! parse, nothing is written and the offending line is reported.

use std::io::IsTerminal;
use std::process;
use clap::{Arg, ArgAction, Command};

use linesort::{
    config::{SortConfig, SortConfigBuilder, SortVariant},
    error::{SortError, SortResult},
    input::{read_batch, write_batch},
    sort_lines, EXIT_FAILURE, EXIT_SUCCESS,
};

fn main() {
    let result = run();
    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("linesort: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = build_cli().get_matches();
    let config = parse_config_from_matches(&matches)?;
    init_logging(config.debug);

    let batch = read_batch(&config)?;
    tracing::info!(
        variant = %config.variant,
        order = %config.order,
        lines = batch.len(),
        "sorting batch"
    );

    match sort_lines(&batch, config.variant, config.order) {
        Ok(sorted) => {
            write_batch(&config, &sorted)?;
            Ok(EXIT_SUCCESS)
        }
        Err(SortError::UnparseableLine { index }) => {
            eprintln!("linesort: {}", describe_unparseable(&batch, index, config.variant));
            Ok(EXIT_FAILURE)
        }
        Err(e) => Err(e),
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "linesort=debug" } else { "linesort=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

/// User-facing message for a line that defeated parsing (1-based line number)
fn describe_unparseable(batch: &[String], index: usize, variant: SortVariant) -> String {
    match batch.get(index) {
        Some(text) => format!("line {}: cannot parse {:?} as {}", index + 1, text, variant),
        None => format!("line {}: cannot parse as {}", index + 1, variant),
    }
}

fn build_cli() -> Command {
    Command::new("linesort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("linesort [OPTION]... [FILE]...")
        .about("Sort lines lexicographically or by their leading number")
        .long_about("Sort lines lexicographically or by their leading number.\n\nNumeric variants read the leading integer or decimal of every line using a fixed locale, so results never depend on regional settings. Blank lines are kept together at the start (or at the end with --reverse). A line without a parseable number aborts the sort and is reported.")

        // Input files
        .arg(Arg::new("files")
            .help("Input files to sort (use '-' or omit for stdin)")
            .num_args(0..)
            .value_name("FILE"))

        // Sort variants (mutually exclusive)
        .arg(Arg::new("integer")
            .short('i')
            .long("integer")
            .help("Compare the leading integer of each line")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("decimal-comma")
            .short('c')
            .long("decimal-comma")
            .help("Compare the leading decimal of each line, ',' as decimal separator")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("decimal-dot")
            .short('d')
            .long("decimal-dot")
            .help("Compare the leading decimal of each line, '.' as decimal separator")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("sort")
            .long("sort")
            .help("Sort according to WORD")
            .long_help("Sort according to WORD: lexicographic (text), integer (int) -i, decimal-comma (comma) -c, decimal-dot (dot) -d")
            .value_name("WORD")
            .value_parser(|word: &str| word.parse::<SortVariant>()))

        // Direction
        .arg(Arg::new("reverse")
            .short('r')
            .long("reverse")
            .help("Sort in descending order")
            .action(ArgAction::SetTrue))

        // I/O options
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .help("Write result to FILE instead of standard output")
            .value_name("FILE"))
        .arg(Arg::new("zero-terminated")
            .short('z')
            .long("zero-terminated")
            .help("Line delimiter is NUL, not newline")
            .action(ArgAction::SetTrue))

        .arg(Arg::new("debug")
            .long("debug")
            .help("Log sorting decisions to stderr")
            .action(ArgAction::SetTrue))
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &clap::ArgMatches) -> SortResult<SortConfig> {
    let mut selected = Vec::new();
    if matches.get_flag("integer") {
        selected.push(SortVariant::Integer);
    }
    if matches.get_flag("decimal-comma") {
        selected.push(SortVariant::DecimalComma);
    }
    if matches.get_flag("decimal-dot") {
        selected.push(SortVariant::DecimalDot);
    }
    if let Some(variant) = matches.get_one::<SortVariant>("sort") {
        selected.push(*variant);
    }
    selected.dedup();

    let variant = match selected.as_slice() {
        [] => SortVariant::Lexicographic,
        [only] => *only,
        [first, second, ..] => {
            return Err(SortError::conflicting_options(&format!(
                "cannot sort as both {first} and {second}"
            )))
        }
    };

    let mut builder = SortConfigBuilder::new().variant(variant);

    if matches.get_flag("reverse") {
        builder = builder.reverse();
    }
    if matches.get_flag("zero-terminated") {
        builder = builder.zero_terminated();
    }
    if matches.get_flag("debug") {
        builder = builder.debug();
    }
    if let Some(output) = matches.get_one::<String>("output") {
        builder = builder.output_file(output.clone());
    }

    let input_files: Vec<String> = matches
        .get_many::<String>("files")
        .unwrap_or_default()
        .cloned()
        .collect();

    builder.input_files(input_files).build()
}

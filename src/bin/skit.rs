//! Command-line interface for skitscript
//! This binary checks single identifiers and runs the way the parser would, and prints the
//! resulting value (normalized key, columns, flags) in a chosen format.
//!
//! Usage:
//!   skit identifier `<verbatim>` [--column `<n>`]                              - Validate an identifier
//!   skit run `<verbatim>` `<plain-text>` [--column `<n>`] [--bold] [--italic] [--code] - Validate a run
//!
//! Global options: --format `<text|json|yaml>`, --config `<path>`.
//! Set SKIT_LOG (e.g. `SKIT_LOG=skitscript=trace`) to see construction events on stderr.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use skitscript::skit::config::{Loader, SkitConfig};
use skitscript::skit::formats::{render, Format, Lexeme};
use skitscript::skit::lexical::RunRecord;
use skitscript::{Identifier, LexicalError, Run};

fn main() {
    init_tracing();

    let matches = Command::new("skit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting skitscript identifiers and runs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .global(true)
                .help("Output format (text, json, yaml); overrides the configured default"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Path to a TOML file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("identifier")
                .about("Validate and normalize an identifier")
                .arg(
                    Arg::new("verbatim")
                        .help("Identifier text exactly as written")
                        .required(true)
                        .index(1),
                )
                .arg(column_arg()),
        )
        .subcommand(
            Command::new("run")
                .about("Validate a run of formatted text")
                .arg(
                    Arg::new("verbatim")
                        .help("Run text including markup")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("plain-text")
                        .help("Run text with markup stripped")
                        .required(true)
                        .index(2),
                )
                .arg(column_arg())
                .arg(flag_arg("bold", "Run is displayed in bold"))
                .arg(flag_arg("italic", "Run is displayed in italics"))
                .arg(flag_arg("code", "Run is displayed in a mono-space font")),
        )
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    });

    let (lexeme, column) = match matches.subcommand() {
        Some(("identifier", identifier_matches)) => handle_identifier_command(identifier_matches),
        Some(("run", run_matches)) => handle_run_command(run_matches),
        _ => unreachable!(),
    };

    let lexeme = lexeme.unwrap_or_else(|e| report_lexical_error(&e, column));
    let output = render(&lexeme, config.output.format, config.output.pretty).unwrap_or_else(|e| {
        eprintln!("Error formatting output: {}", e);
        std::process::exit(1);
    });

    println!("{}", output.trim_end());
}

fn column_arg() -> Arg {
    Arg::new("column")
        .long("column")
        .short('n')
        .help("1-based column the text starts on")
        .value_parser(value_parser!(usize))
        .default_value("1")
}

fn flag_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help).action(ArgAction::SetTrue)
}

/// Only installs a subscriber when SKIT_LOG is set, so normal output stays clean
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("SKIT_LOG").is_ok() {
        let filter = EnvFilter::from_env("SKIT_LOG");
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    }
}

fn load_config(matches: &ArgMatches) -> Result<SkitConfig, Box<dyn std::error::Error>> {
    let mut loader = Loader::from_defaults();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        let format: Format = format.parse()?;
        loader = loader.with_format(format)?;
    }
    Ok(loader.build()?)
}

/// Handle the identifier command
fn handle_identifier_command(matches: &ArgMatches) -> (Result<Lexeme, LexicalError>, usize) {
    let column = column_of(matches);
    let verbatim = matches.get_one::<String>("verbatim").cloned();
    let lexeme = Identifier::from_parts(verbatim, column).map(Lexeme::from);
    (lexeme, column)
}

/// Handle the run command
fn handle_run_command(matches: &ArgMatches) -> (Result<Lexeme, LexicalError>, usize) {
    let column = column_of(matches);
    let record = RunRecord {
        bold: matches.get_flag("bold"),
        italic: matches.get_flag("italic"),
        code: matches.get_flag("code"),
        verbatim: matches.get_one::<String>("verbatim").cloned(),
        plain_text: matches.get_one::<String>("plain-text").cloned(),
        from_column: column,
    };
    (Run::from_parts(record).map(Lexeme::from), column)
}

fn column_of(matches: &ArgMatches) -> usize {
    matches.get_one::<usize>("column").copied().unwrap_or(1)
}

/// Print a parser-style diagnostic and exit
fn report_lexical_error(error: &LexicalError, column: usize) -> ! {
    if error.is_precondition() {
        eprintln!("Internal error: {}", error);
    } else {
        eprintln!("error at column {}: {}", column, error);
    }
    std::process::exit(1);
}

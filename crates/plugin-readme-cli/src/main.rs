//! plugin-readme - parse and validate plugin readme.txt files

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use plugin_readme_config::Config;
use plugin_readme_engine::{
    PulldownRenderer, ReadmeParser, ReadmeRecord, ValidationReport, validate,
};

#[derive(Parser)]
#[command(name = "plugin-readme")]
#[command(version, about = "Parse and validate plugin readme.txt files", long_about = None)]
#[command(after_help = "EXAMPLES:
    plugin-readme parse readme.txt --pretty    Print the parsed record as JSON
    plugin-readme validate readme.txt          List problems with the readme
    cat readme.txt | plugin-readme validate -  Validate from stdin")]
struct Cli {
    /// Config file to use instead of ~/.config/plugin-readme/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log parser decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a readme and print it as JSON
    Parse {
        /// Readme file, or `-` for stdin
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Check a readme for missing metadata and sections
    Validate {
        /// Readme file, or `-` for stdin
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;
    let parser = ReadmeParser::with_renderer(PulldownRenderer::new(config.render_options()));

    match cli.command {
        Command::Parse { path, pretty } => {
            let record = parse(&parser, path, &config)?;
            let json = if pretty || config.pretty {
                serde_json::to_string_pretty(&record)?
            } else {
                serde_json::to_string(&record)?
            };
            println!("{json}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate { path, json } => {
            let record = parse(&parser, path, &config)?;
            let report = validate(&record);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&record, &report);
            }
            Ok(if report.has_fatal_errors() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}

/// Loads the config file, falling back to defaults when there is none.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = path.map_or_else(Config::config_path, Path::to_path_buf);
    log::debug!("Config path: {}", config_path.display());

    let config = Config::load_from_path(&config_path)?;
    if config.is_none() {
        log::debug!("No config file found, using defaults");
    }
    Ok(config.unwrap_or_default())
}

fn parse(
    parser: &ReadmeParser,
    path: Option<PathBuf>,
    config: &Config,
) -> Result<ReadmeRecord> {
    let Some(path) = path.or_else(|| config.readme_path.clone()) else {
        bail!(
            "No readme path provided and no readme_path set in {}",
            Config::config_path().display()
        );
    };

    if path == Path::new("-") {
        let mut contents = String::new();
        io::stdin()
            .read_to_string(&mut contents)
            .context("Failed to read readme from stdin")?;
        return parser
            .parse_readme_contents(contents)
            .context("Failed to parse readme from stdin");
    }

    parser
        .parse_readme(&path)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_report(record: &ReadmeRecord, report: &ValidationReport) {
    let groups = [
        ("Fatal error", &report.fatal_errors),
        ("Warning", &report.warnings),
        ("Note", &report.notes),
    ];
    for (label, findings) in groups {
        for finding in findings {
            println!("{label}: {finding}");
        }
    }

    if report.is_clean() {
        println!("{} looks good", display_name(record));
    }
}

fn display_name(record: &ReadmeRecord) -> &str {
    if record.name.is_empty() {
        "readme"
    } else {
        &record.name
    }
}

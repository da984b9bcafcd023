use std::collections::BTreeMap;
use std::io::IsTerminal;
use std::path::Path;

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, info, warn};

use drs::formatting::{Identity, Render, Terminal};
use drs::generating::DrsGenerator;
use drs::language::{DrsKind, GenerationReport, ValidationReport};
use drs::output;
use drs::parsing::{self, Project};
use drs::problem::{concise_configuration_error, concise_loading_error};
use drs::regex::parse_assignment;
use drs::validating::DrsValidator;

const KINDS: [&str; 5] = ["directory", "file_name", "filename", "dataset_id", "dataset"];

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let project_arg = Arg::new("project")
        .required(true)
        .help("The project file (JSON, or YAML) holding the DRS specifications and vocabulary.");

    let kind_arg = Arg::new("kind")
        .required(true)
        .value_parser(KINDS)
        .help("Which kind of expression: directory, file_name, or dataset_id.");

    let matches = Command::new("drs")
        .version(VERSION)
        .propagate_version(true)
        .about("Validate and generate Data Reference Syntax expressions.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log what the engine is doing to standard error."),
        )
        .arg(
            Arg::new("raw-control-chars")
                .short('R')
                .long("raw-control-chars")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit ANSI escape codes for colour even if output is redirected to a pipe or file."),
        )
        .arg(
            Arg::new("pedantic")
                .long("pedantic")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Report every warning as an error."),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print the reports as JSON."),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Explain each issue in full."),
        )
        .subcommand(
            Command::new("validate")
                .about("Check expressions against the project's specifications")
                .arg(project_arg.clone())
                .arg(kind_arg.clone())
                .arg(
                    Arg::new("expressions")
                        .required(true)
                        .num_args(1..)
                        .allow_hyphen_values(true)
                        .help("The expressions to check. Use - to read them from standard input, one per line, unless the project file is read from there."),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Assemble an expression from a mapping or from a bag of words")
                .arg(project_arg)
                .arg(kind_arg)
                .arg(
                    Arg::new("mapping")
                        .short('m')
                        .long("mapping")
                        .action(ArgAction::Append)
                        .value_name("COLLECTION=TOKEN")
                        .help("Give the token for a collection. May be repeated."),
                )
                .arg(
                    Arg::new("words")
                        .num_args(0..)
                        .conflicts_with("mapping")
                        .help("Words to assemble into an expression, in any order."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let renderer: &dyn Render =
        if matches.get_flag("raw-control-chars") || std::io::stdout().is_terminal() {
            &Terminal
        } else {
            &Identity
        };

    let failed = match matches.subcommand() {
        Some(("validate", submatches)) => validate(submatches, renderer),
        Some(("generate", submatches)) => generate(submatches, renderer),
        Some(_) => {
            println!("No valid subcommand was used");
            true
        }
        None => {
            println!("usage: drs [COMMAND] ...");
            println!("Try '--help' for more information.");
            true
        }
    };

    if failed {
        std::process::exit(1);
    }
}

fn open_project(submatches: &ArgMatches, renderer: &dyn Render) -> Option<Project> {
    let filename = Path::new(
        submatches
            .get_one::<String>("project")
            .map(String::as_str)
            .unwrap_or("-"),
    );

    info!("Loading project file: {}", filename.display());

    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", concise_loading_error(&error, renderer));
            return None;
        }
    };

    match parsing::parse(filename, &content) {
        Ok(project) => Some(project),
        Err(error) => {
            eprintln!(
                "{}",
                concise_configuration_error(&error, filename, renderer)
            );
            None
        }
    }
}

/// Standard input can only be consumed once.
fn reads_stdin_twice(submatches: &ArgMatches) -> bool {
    let project = submatches
        .get_one::<String>("project")
        .map(String::as_str);
    let expressions: Vec<&str> = submatches
        .get_many::<String>("expressions")
        .map(|values| {
            values
                .map(String::as_str)
                .collect()
        })
        .unwrap_or_default();

    project == Some("-") && expressions == ["-"]
}

fn selected_kind(submatches: &ArgMatches) -> DrsKind {
    submatches
        .get_one::<String>("kind")
        .and_then(|kind| {
            kind.parse()
                .ok()
        })
        .unwrap_or(DrsKind::Directory)
}

/// Returns whether any expression failed.
fn validate(submatches: &ArgMatches, renderer: &dyn Render) -> bool {
    if reads_stdin_twice(submatches) {
        eprintln!("The project file and the expressions cannot both be read from standard input");
        return true;
    }

    let project = match open_project(submatches, renderer) {
        Some(project) => project,
        None => return true,
    };
    let kind = selected_kind(submatches);

    let mut expressions: Vec<String> = submatches
        .get_many::<String>("expressions")
        .map(|values| {
            values
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    if expressions == ["-"] {
        expressions = match std::io::read_to_string(std::io::stdin()) {
            Ok(input) => input
                .lines()
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            Err(error) => {
                eprintln!("Unable to read standard input: {}", error);
                return true;
            }
        };
    }

    let project_id = &project
        .specs
        .project_id;
    let validator = match DrsValidator::new(project_id, &project.specs, &project.vocabulary) {
        Ok(validator) => validator.pedantic(submatches.get_flag("pedantic")),
        Err(error) => {
            eprintln!("{}", error);
            return true;
        }
    };

    let mut reports: Vec<ValidationReport> = Vec::with_capacity(expressions.len());
    for expression in &expressions {
        match validator.validate(expression, kind) {
            Ok(report) => reports.push(report),
            Err(error) => {
                eprintln!("{}", error);
                return true;
            }
        }
    }

    debug!("Validated {} expression(s)", reports.len());

    let failed = reports
        .iter()
        .any(|report| !report.validated());

    if submatches.get_flag("json") {
        emit(output::json(&reports));
    } else {
        let specs = project
            .specs
            .specification(kind);
        for report in &reports {
            if let Some(specs) = specs {
                emit(output::validation_text(
                    report,
                    specs,
                    submatches.get_flag("verbose"),
                    renderer,
                ));
            }
        }
    }

    failed
}

/// Returns whether generation failed.
fn generate(submatches: &ArgMatches, renderer: &dyn Render) -> bool {
    let project = match open_project(submatches, renderer) {
        Some(project) => project,
        None => return true,
    };
    let kind = selected_kind(submatches);

    let project_id = &project
        .specs
        .project_id;
    let generator = match DrsGenerator::new(project_id, &project.specs, &project.vocabulary) {
        Ok(generator) => generator.pedantic(submatches.get_flag("pedantic")),
        Err(error) => {
            eprintln!("{}", error);
            return true;
        }
    };

    let result = match submatches.get_many::<String>("mapping") {
        Some(assignments) => {
            let mut mapping = BTreeMap::new();
            for assignment in assignments {
                match parse_assignment(assignment) {
                    Some((collection_id, token)) => {
                        mapping.insert(collection_id.to_string(), token.to_string());
                    }
                    None => {
                        warn!("Ignoring malformed assignment '{}'", assignment);
                    }
                }
            }
            generator.generate_from_mapping(&mapping, kind)
        }
        None => {
            let words: Vec<&str> = submatches
                .get_many::<String>("words")
                .map(|values| {
                    values
                        .map(String::as_str)
                        .collect()
                })
                .unwrap_or_default();
            generator.generate_from_bag_of_words(words.as_slice(), kind)
        }
    };

    let report: GenerationReport = match result {
        Ok(report) => report,
        Err(error) => {
            eprintln!("{}", error);
            return true;
        }
    };

    if submatches.get_flag("json") {
        emit(output::json(&[&report]));
    } else {
        emit(output::generation_text(
            &report,
            submatches.get_flag("verbose"),
            renderer,
        ));
    }

    !report.validated()
}

fn emit(result: Result<String, output::OutputError>) {
    match result {
        Ok(text) => println!("{}", text),
        Err(error) => eprintln!("{}", error),
    }
}

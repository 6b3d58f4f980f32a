use std::io::{stdin, stdout};
use std::process::ExitCode;

use clap::Parser as ClapParser;
use log::{debug, error, LevelFilter};

use monkey::environment::Environment;
use monkey::object::{inspect, Object};
use monkey::parser::Parser as MonkeyParser;
use monkey::{evaluator, repl};

#[derive(ClapParser, Debug)]
#[command(author, version, about = "Tree-walking interpreter for Monkey")]
struct Cli {
    /// Source file to run. Omit to start the REPL.
    file: Option<std::path::PathBuf>,

    /// Increase log verbosity (-v = Info, -vv = Debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn main() -> ExitCode {
    let args = Cli::parse();
    simple_logger::init_with_level(level_for(args.verbose).to_level().unwrap_or(log::Level::Warn))
        .expect("logger already initialized");

    match args.file {
        Some(path) => run_file(&path),
        None => {
            debug!("no file given, starting REPL");
            repl::start(stdin().lock(), stdout().lock()).expect("REPL I/O failure");
            ExitCode::SUCCESS
        }
    }
}

fn run_file(path: &std::path::Path) -> ExitCode {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            error!("could not read {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    };

    let mut parser = MonkeyParser::from_source(&source);
    let program = parser.parse_program();

    if !parser.errors.is_empty() {
        for err in &parser.errors {
            error!("{err}");
        }
        return ExitCode::FAILURE;
    }

    debug!("parsed {} top-level statement(s)", program.statements.len());

    let env = Environment::new();
    let result = evaluator::eval_program(&program, &env);
    println!("{}", inspect(&result));

    match result {
        Object::Error(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}

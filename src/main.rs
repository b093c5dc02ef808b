use std::process;
use std::str::FromStr;

use nonosolve::{
    solver::line::DynamicSolver, utils::time, Board, LocalReader, Outcome, ParseError,
    PlainFormat, ShellRenderer,
};
#[cfg(feature = "ini")]
use nonosolve::TomlFormat;

#[macro_use]
extern crate log;
#[macro_use]
extern crate clap;

use clap::{App, ArgGroup, ArgMatches};

fn main() {
    env_logger::init();

    let matches = App::new("nonosolve")
        .version(crate_version!())
        .about("Nonogram solver")
        .args_from_usage(
            "-p, --plain [PATH] 'path to a plain text puzzle: row clues, separator line, column clues'
             -t, --toml [PATH]  'path to a TOML-formatted puzzle'",
        )
        .group(
            ArgGroup::with_name("source")
                .required(true)
                .args(&["plain", "toml"]),
        )
        .arg_from_usage(
            "-w, --max-waves=[WAVES] 'Stop propagating after the specified number of row or column waves'",
        )
        .get_matches();

    let max_waves = parse_arg::<usize>(&matches, "max-waves");

    let board = read_board(&matches).unwrap_or_else(|err| {
        error!("Failed to read the puzzle: {}", err);
        eprintln!("Failed to read the puzzle: {}", err);
        process::exit(1);
    });
    info!("Board {}x{}", board.width(), board.height());

    let start = time::now();
    let outcome = nonosolve::run::<DynamicSolver>(board, max_waves);
    if let Some(start) = start {
        info!("Solved in {:?}", start.elapsed());
    }

    process::exit(report(&outcome));
}

fn read_board(matches: &ArgMatches<'_>) -> Result<Board, ParseError> {
    if let Some(path) = matches.value_of("plain") {
        return read_with::<PlainFormat>(path);
    }

    if let Some(path) = matches.value_of("toml") {
        return read_toml(path);
    }

    Err(ParseError("No valid source found".to_string()))
}

fn read_with<P>(path: &str) -> Result<Board, ParseError>
where
    P: LocalReader,
{
    let board_parser = P::read_local(path)?;
    Ok(board_parser.parse())
}

#[cfg(feature = "ini")]
fn read_toml(path: &str) -> Result<Board, ParseError> {
    read_with::<TomlFormat>(path)
}

#[cfg(not(feature = "ini"))]
fn read_toml(path: &str) -> Result<Board, ParseError> {
    Err(ParseError(format!(
        "Cannot read {}: no support for TOML puzzles (hint: add --features=ini)",
        path
    )))
}

/// Print the outcome and return the process exit code.
fn report(outcome: &Outcome) -> i32 {
    match outcome {
        Outcome::Solved(board) => {
            println!("{}", ShellRenderer::with_board(board).render());
            0
        }
        Outcome::Inconclusive(board) => {
            println!(
                "Cannot conclude: {:.1}% of cells solved with the line propagation",
                board.solution_rate() * 100.0
            );
            2
        }
        Outcome::Contradiction => {
            println!("The puzzle has no solution");
            3
        }
    }
}

fn parse_arg<T>(matches: &ArgMatches<'_>, name: &str) -> Option<T>
where
    T: FromStr,
{
    if matches.is_present(name) {
        let value = value_t!(matches, name, T).unwrap_or_else(|e| e.exit());
        return Some(value);
    }

    None
}

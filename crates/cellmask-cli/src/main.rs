//! Command-line sudoku solver.
//!
//! Reads a puzzle as 9 lines of digits (`0` = blank) from a file or from
//! standard input, solves it, and prints the solved grid. Validation
//! failures and unsolvable puzzles are reported on stderr with a nonzero
//! exit code.

use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use cellmask_core::{Board, BoardError, NoSolution};
use clap::Parser;

use self::parse::ParseError;

mod parse;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Puzzle file to solve; reads standard input when omitted.
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Parse(ParseError),
    #[display("invalid puzzle: {_0}")]
    Board(BoardError),
    #[display("{_0}")]
    Unsolvable(NoSolution),
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("cellmask: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let grid = match &args.file {
        Some(path) => {
            let file = File::open(path).map_err(ParseError::from)?;
            parse::read_grid(BufReader::new(file))?
        }
        None => parse::read_grid(io::stdin().lock())?,
    };

    let mut board = Board::from_grid(&grid)?;
    log::debug!("parsed puzzle:\n{board}");
    log::debug!("candidate masks:\n{}", board.mask_display());

    board.resolve()?;
    print!("{board}");
    Ok(())
}

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use word_search::movement::MoveSet;

#[derive(ValueEnum, Clone, Debug)]
pub enum Moves {
  /// Chess knight moves.
  Knight,
  /// The 8 surrounding cells, i.e. classic Boggle.
  King,
}

impl Moves {
  pub fn move_set(&self) -> MoveSet {
    match self {
      Moves::Knight => MoveSet::knight(),
      Moves::King => MoveSet::king(),
    }
  }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
  /// Word list to use as the dictionary, one word per line.
  pub wordlist: PathBuf,

  /// Puzzle layout file: grid lines, a blank line, then one "row col" start
  /// location per line. Defaults to the built-in MGWCC #243 puzzle.
  #[arg(long)]
  pub puzzle: Option<PathBuf>,

  #[arg(long, default_value = "knight")]
  pub moves: Moves,

  /// Only report words at least this long.
  #[arg(long, default_value_t = 6)]
  pub min_length: usize,
}

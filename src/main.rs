#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;

use std::{
  fs::{self, File},
  io::{BufRead, BufReader},
  path::Path,
};

use args::Args;
use clap::Parser;
use util::{
  error::{BoggleError, BoggleResult},
  time::time_fn,
};
use word_dict::trie::Trie;
use word_search::{puzzle::Puzzle, search::WordSearch};

/// Matt Gaffney's Weekly Crossword Contest #243 "Knight Moves", the puzzle
/// this program was written to solve. Six theme entries each hide a word
/// reachable by knight moves from their starting square.
const fn mgwcc_243() -> &'static str {
  "par...twa.aesir
   stop.goal.quote
   40yearoldvirgin
   ...ski.kai.yost
   .spcas...eid...
   thai.screwrings
   har..oral.scena
   east.momsa.etal
   dream.wail..hrs
   jackdaniel.bela
   ...ecu...garry.
   shin.era.ida...
   centerofgravity
   orsew.mail.oreo
   tatas.erg...ken

   2 11
   2 14
   5 3
   5 12
   12 2
   13 8"
}

fn read_word_list(path: &Path) -> BoggleResult<Trie> {
  let file = File::open(path)
    .map_err(|err| BoggleError::Config(format!("{}: {err}", path.display())))?;
  let words = BufReader::new(file)
    .lines()
    .collect::<Result<Vec<_>, _>>()?;
  Ok(Trie::from_words(words))
}

fn read_puzzle(path: Option<&Path>) -> BoggleResult<Puzzle> {
  let layout = match path {
    Some(path) => fs::read_to_string(path)
      .map_err(|err| BoggleError::Config(format!("{}: {err}", path.display())))?,
    None => mgwcc_243().to_owned(),
  };
  Puzzle::from_layout(&layout)
}

fn main() -> BoggleResult {
  let args = Args::parse();

  let trie = read_word_list(&args.wordlist)?;
  println!("[loaded {} words]", trie.word_count());

  let puzzle = read_puzzle(args.puzzle.as_deref())?;
  let moves = args.moves.move_set();
  let search = WordSearch::new(puzzle.board(), &moves, args.min_length);

  let (elapsed, _) = time_fn(|| {
    for &start in puzzle.starts() {
      println!("[start {start}]");
      search.search_from(start, &trie, |word| println!("{word}"));
      println!();
    }
  });
  println!("Took {}s", elapsed.as_secs_f32());

  Ok(())
}

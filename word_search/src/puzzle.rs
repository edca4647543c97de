use itertools::Itertools;
use util::{
  error::{BoggleError, BoggleResult},
  pos::Pos,
};

use crate::board::Board;

/// A board plus the list of cells to search from, parsed from one layout
/// string: the grid lines, a blank line, then one `row col` pair per line.
#[derive(Debug)]
pub struct Puzzle {
  board: Board,
  starts: Vec<Pos>,
}

impl Puzzle {
  pub fn from_layout(layout: &str) -> BoggleResult<Self> {
    let mut lines = layout
      .lines()
      .map(str::trim)
      .skip_while(|line| line.is_empty());
    let board_lines: Vec<_> = lines
      .by_ref()
      .take_while(|line| !line.is_empty())
      .collect();
    let board = Board::from_layout(&board_lines.join("\n"))?;

    let starts = lines
      .filter(|line| !line.is_empty())
      .map(|line| Self::parse_start(line, &board))
      .collect::<BoggleResult<Vec<_>>>()?;
    if starts.is_empty() {
      return Err(BoggleError::Parse("No start locations".to_owned()).into());
    }

    Ok(Self { board, starts })
  }

  fn parse_start(line: &str, board: &Board) -> BoggleResult<Pos> {
    let (row, col) = line
      .split_whitespace()
      .collect_tuple()
      .ok_or_else(|| BoggleError::Parse(format!("Expected \"row col\", got \"{line}\"")))?;
    let pos = Pos {
      x: col.parse()?,
      y: row.parse()?,
    };

    if board.letter(pos).is_none() {
      return Err(
        BoggleError::Parse(format!(
          "Start location {pos} is blocked or out of bounds"
        ))
        .into(),
      );
    }
    Ok(pos)
  }

  pub fn board(&self) -> &Board {
    &self.board
  }

  pub fn starts(&self) -> &[Pos] {
    &self.starts
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use util::pos::Pos;

  use super::Puzzle;

  #[gtest]
  fn test_board_and_starts() {
    let puzzle = Puzzle::from_layout(
      "c.t
       ..a
       t..

       0 0
       2 0",
    );

    assert_that!(puzzle, ok(anything()));
    let puzzle = puzzle.unwrap();
    expect_that!(puzzle.board().width(), eq(3));
    expect_that!(
      puzzle.starts().to_vec(),
      container_eq([Pos::zero(), Pos { x: 0, y: 2 }])
    );
  }

  #[gtest]
  fn test_no_start_locations() {
    let puzzle = Puzzle::from_layout(
      "c.t
       ..a",
    );
    expect_that!(puzzle, err(anything()));
  }

  #[gtest]
  fn test_start_on_blocked_cell() {
    let puzzle = Puzzle::from_layout(
      "c.t
       ..a

       0 1",
    );
    expect_that!(puzzle, err(anything()));
  }

  #[gtest]
  fn test_start_out_of_bounds() {
    let puzzle = Puzzle::from_layout(
      "c.t
       ..a

       5 5",
    );
    expect_that!(puzzle, err(anything()));
  }

  #[gtest]
  fn test_malformed_start_line() {
    let puzzle = Puzzle::from_layout(
      "c.t
       ..a

       0",
    );
    expect_that!(puzzle, err(anything()));

    let puzzle = Puzzle::from_layout(
      "c.t
       ..a

       zero zero",
    );
    expect_that!(puzzle, err(anything()));
  }
}

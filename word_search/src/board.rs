use std::fmt::Display;

use util::{
  error::{BoggleError, BoggleResult},
  grid::Grid,
  pos::Pos,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
  Letter(char),
  Blocked,
}

impl Tile {
  /// Letters (either case) become lowercase `Letter` tiles. Everything else
  /// is blocked: `.` by convention, but crossword grids also use digits for
  /// cells that can never be part of a word.
  fn from_char(c: char) -> Self {
    let c = c.to_ascii_lowercase();
    if c.is_ascii_lowercase() {
      Tile::Letter(c)
    } else {
      Tile::Blocked
    }
  }

  pub fn letter(&self) -> Option<char> {
    match self {
      Tile::Letter(c) => Some(*c),
      Tile::Blocked => None,
    }
  }
}

impl Display for Tile {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Tile::Letter(c) => *c,
        Tile::Blocked => '.',
      }
    )
  }
}

#[derive(Clone, Debug)]
pub struct Board {
  grid: Grid<Tile>,
}

impl Board {
  pub fn from_layout(layout: &str) -> BoggleResult<Self> {
    let (width, height, tiles) = layout.lines().try_fold(
      (None, 0u32, vec![]),
      |(width, height, mut tiles), line| -> BoggleResult<_> {
        let line = line.trim();
        tiles.extend(line.chars().map(Tile::from_char));
        if let Some(width) = width {
          if line.chars().count() != width {
            return Err(
              BoggleError::Parse(format!(
                "Board line lengths differ: {} vs {width}",
                line.chars().count()
              ))
              .into(),
            );
          }
        }

        Ok((Some(line.chars().count()), height + 1, tiles))
      },
    )?;

    let width = width.ok_or_else(|| BoggleError::Parse("Empty board string".to_owned()))? as u32;
    if width == 0 {
      return Err(BoggleError::Parse("Empty board string".to_owned()).into());
    }
    let grid = Grid::from_vec(tiles, width, height)?;

    Ok(Self { grid })
  }

  pub fn width(&self) -> u32 {
    self.grid.width()
  }

  pub fn height(&self) -> u32 {
    self.grid.height()
  }

  /// The letter at `pos`, or `None` if `pos` is out of bounds or blocked.
  pub fn letter(&self, pos: Pos) -> Option<char> {
    self.grid.get(pos).and_then(Tile::letter)
  }

  pub fn letter_positions(&self) -> impl Iterator<Item = Pos> + '_ {
    self
      .grid
      .positions()
      .filter(|&pos| self.letter(pos).is_some())
  }
}

impl Display for Board {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.grid)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use util::pos::Pos;

  use super::Board;

  #[gtest]
  fn test_empty_layout() {
    expect_that!(Board::from_layout(""), err(anything()));
  }

  #[gtest]
  fn test_ragged_layout() {
    let board = Board::from_layout(
      "abc
       de",
    );
    expect_that!(board, err(anything()));
  }

  #[gtest]
  fn test_letters_and_blocked() {
    let board = Board::from_layout(
      "a.c
       D4f",
    );

    assert_that!(board, ok(anything()));
    let board = board.unwrap();
    expect_that!(board.width(), eq(3));
    expect_that!(board.height(), eq(2));
    expect_that!(board.letter(Pos { x: 0, y: 0 }), some(eq('a')));
    expect_that!(board.letter(Pos { x: 1, y: 0 }), none());
    expect_that!(board.letter(Pos { x: 0, y: 1 }), some(eq('d')));
    expect_that!(board.letter(Pos { x: 1, y: 1 }), none());
    expect_that!(board.letter(Pos { x: 2, y: 1 }), some(eq('f')));
    expect_that!(board.letter(Pos { x: 3, y: 0 }), none());
    expect_that!(board.letter(Pos { x: 0, y: -1 }), none());
    expect_that!(board.letter_positions().count(), eq(4));
  }
}

use itertools::Itertools;
use util::pos::Diff;

/// The 8 knight moves, in the order they are tried during search.
const KNIGHT_DELTAS: [Diff; 8] = [
  Diff { x: 1, y: 2 },
  Diff { x: 2, y: 1 },
  Diff { x: 2, y: -1 },
  Diff { x: 1, y: -2 },
  Diff { x: -1, y: -2 },
  Diff { x: -2, y: -1 },
  Diff { x: -2, y: 1 },
  Diff { x: -1, y: 2 },
];

/// A finite set of single-step offsets defining which cells are adjacent for
/// word-path construction. The search algorithm is independent of the
/// concrete set.
#[derive(Clone, Debug)]
pub struct MoveSet {
  deltas: Vec<Diff>,
}

impl MoveSet {
  pub fn new(deltas: impl IntoIterator<Item = Diff>) -> Self {
    Self {
      deltas: deltas.into_iter().collect(),
    }
  }

  pub fn knight() -> Self {
    Self::new(KNIGHT_DELTAS)
  }

  /// The 8 king moves, i.e. classic Boggle adjacency.
  pub fn king() -> Self {
    Self::new(
      (-1..=1)
        .cartesian_product(-1..=1)
        .filter(|&(x, y)| (x, y) != (0, 0))
        .map(|(x, y)| Diff { x, y }),
    )
  }

  pub fn deltas(&self) -> &[Diff] {
    &self.deltas
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use util::pos::Diff;

  use super::MoveSet;

  #[gtest]
  fn test_knight_deltas() {
    let moves = MoveSet::knight();
    expect_that!(moves.deltas().len(), eq(8));
    for &Diff { x, y } in moves.deltas() {
      expect_that!(x.abs() + y.abs(), eq(3));
      expect_that!(x.abs(), any!(eq(1), eq(2)));
    }
  }

  #[gtest]
  fn test_king_deltas() {
    let moves = MoveSet::king();
    expect_that!(moves.deltas().len(), eq(8));
    for &Diff { x, y } in moves.deltas() {
      expect_that!(x, any!(eq(-1), eq(0), eq(1)));
      expect_that!(y, any!(eq(-1), eq(0), eq(1)));
      expect_true!(x != 0 || y != 0);
    }
  }

  #[gtest]
  fn test_custom_deltas() {
    let moves = MoveSet::new([Diff { x: 3, y: 0 }]);
    expect_that!(moves.deltas().to_vec(), container_eq([Diff { x: 3, y: 0 }]));
  }
}

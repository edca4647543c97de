use util::{grid::Grid, pos::Pos};
use word_dict::trie::{Trie, TrieNode};

use crate::{board::Board, movement::MoveSet};

/// Depth-first backtracking word search over a board, pruned by the trie: a
/// neighbor is only entered when its letter is a possible continuation of
/// some dictionary word. Without that check the search degenerates into
/// enumerating every simple path in the movement graph.
pub struct WordSearch<'a> {
  board: &'a Board,
  moves: &'a MoveSet,
  min_len: usize,
}

impl<'a> WordSearch<'a> {
  pub fn new(board: &'a Board, moves: &'a MoveSet, min_len: usize) -> Self {
    Self { board, moves, min_len }
  }

  /// Searches all paths out of `start`, calling `emit` once per found word,
  /// in depth-first order. Words found along multiple paths are emitted once
  /// per path. A start cell that is blocked, out of bounds, or whose letter
  /// begins no dictionary word emits nothing.
  pub fn search_from(&self, start: Pos, trie: &Trie, mut emit: impl FnMut(&str)) {
    let Some(letter) = self.board.letter(start) else {
      return;
    };
    let Some(node) = trie.root().child(letter) else {
      return;
    };

    let mut word = String::new();
    let mut visited = Grid::new(self.board.width(), self.board.height());
    self.visit(start, letter, node, &mut word, &mut visited, &mut emit);
  }

  fn visit<F: FnMut(&str)>(
    &self,
    pos: Pos,
    letter: char,
    node: &TrieNode,
    word: &mut String,
    visited: &mut Grid<bool>,
    emit: &mut F,
  ) {
    word.push(letter);
    if let Some(mark) = visited.get_mut(pos) {
      *mark = true;
    }

    if word.len() >= self.min_len && node.is_word() {
      emit(word);
    }

    for &delta in self.moves.deltas() {
      let next = pos + delta;
      if visited.get(next).is_none_or(|&mark| mark) {
        continue;
      }
      let Some(next_letter) = self.board.letter(next) else {
        continue;
      };
      if let Some(child) = node.child(next_letter) {
        self.visit(next, next_letter, child, word, visited, emit);
      }
    }

    if let Some(mark) = visited.get_mut(pos) {
      *mark = false;
    }
    word.pop();
  }
}

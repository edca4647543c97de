const ALPHABET_SIZE: usize = 26;

/// One dictionary state: the set of words sharing the prefix spelled by the
/// path from the root to this node.
#[derive(Debug)]
pub struct TrieNode {
  is_word: bool,
  children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
}

impl TrieNode {
  const NO_CHILD: Option<Box<TrieNode>> = None;

  fn new() -> Self {
    Self {
      is_word: false,
      children: [Self::NO_CHILD; ALPHABET_SIZE],
    }
  }

  fn slot(letter: char) -> Option<usize> {
    let letter = letter.to_ascii_lowercase();
    letter
      .is_ascii_lowercase()
      .then(|| letter as usize - 'a' as usize)
  }

  pub fn is_word(&self) -> bool {
    self.is_word
  }

  /// The child reached by one letter transition, or `None` if no dictionary
  /// word continues this prefix with `letter`. Letters are matched
  /// case-insensitively; any non-letter has no child.
  pub fn child(&self, letter: char) -> Option<&TrieNode> {
    Self::slot(letter).and_then(|idx| self.children[idx].as_deref())
  }

  fn child_or_insert(&mut self, idx: usize) -> &mut TrieNode {
    self.children[idx].get_or_insert_with(|| Box::new(TrieNode::new()))
  }

  fn collect_words(&self, prefix: &mut String, words: &mut Vec<String>) {
    if self.is_word {
      words.push(prefix.clone());
    }
    for (idx, child) in self.children.iter().enumerate() {
      if let Some(child) = child {
        prefix.push((b'a' + idx as u8) as char);
        child.collect_words(prefix, words);
        prefix.pop();
      }
    }
  }
}

#[derive(Debug)]
pub struct Trie {
  root: TrieNode,
  word_count: usize,
}

impl Trie {
  pub fn new() -> Self {
    Self { root: TrieNode::new(), word_count: 0 }
  }

  /// Builds a trie from raw word-list lines. Lines that do not begin with a
  /// letter (blank lines, numbers, punctuation) cannot contribute a word and
  /// are skipped.
  pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
    let mut trie = Self::new();
    for word in words {
      let word = word.as_ref();
      if word.starts_with(|c: char| c.is_ascii_alphabetic()) {
        trie.insert(word);
      }
    }
    trie
  }

  pub fn root(&self) -> &TrieNode {
    &self.root
  }

  /// Number of distinct words in the trie.
  pub fn word_count(&self) -> usize {
    self.word_count
  }

  /// Inserts one raw word. Letters are lowercased; the first non-letter
  /// (trailing newline, apostrophe, digit) ends the word there, and anything
  /// after it is ignored. Inserting an empty string marks the root.
  pub fn insert(&mut self, word: &str) {
    let mut node = &mut self.root;
    for letter in word.chars() {
      match TrieNode::slot(letter) {
        Some(idx) => node = node.child_or_insert(idx),
        None => break,
      }
    }
    if !node.is_word {
      node.is_word = true;
      self.word_count += 1;
    }
  }

  /// Exact membership test: every character of `word` must be a letter, and
  /// the node it walks to must be word-terminal.
  pub fn contains(&self, word: &str) -> bool {
    word
      .chars()
      .try_fold(&self.root, |node, letter| node.child(letter))
      .is_some_and(TrieNode::is_word)
  }

  /// All words in the trie, in lexicographic order.
  pub fn words(&self) -> Vec<String> {
    let mut words = Vec::with_capacity(self.word_count);
    self.root.collect_words(&mut String::new(), &mut words);
    words
  }
}

impl Default for Trie {
  fn default() -> Self {
    Self::new()
  }
}

use crate::wordlist::trie::trie::Trie;

/// Depth-first search for one way to split a text into dictionary words.
///
/// Positions are byte offsets into `text` and always fall on character
/// boundaries. With a memo each start position is explored at most once.
struct BreakSearch<'a, 't> {
    trie: &'a Trie,
    text: &'t str,
    memo: Option<Vec<Option<bool>>>,
}

impl<'a, 't> BreakSearch<'a, 't> {
    fn new(trie: &'a Trie, text: &'t str, memoize: bool) -> Self {
        BreakSearch {
            trie,
            text,
            memo: memoize.then(|| vec![None; text.len() + 1]),
        }
    }

    fn breakable(&mut self, start: usize) -> bool {
        if start == self.text.len() {
            return true;
        }
        if let Some(known) = self.memo.as_ref().and_then(|memo| memo[start]) {
            return known;
        }

        let (trie, text) = (self.trie, self.text);
        let mut node = &trie.root;
        let mut found = false;
        for (offset, c) in text[start..].char_indices() {
            node = match node.get_child(c) {
                Some(child) => child,
                None => break,
            };
            if node.is_word_end && self.breakable(start + offset + c.len_utf8()) {
                found = true;
                break;
            }
        }

        if let Some(memo) = self.memo.as_mut() {
            memo[start] = Some(found);
        }
        found
    }
}

impl Trie {
    /// Whether `text` can be split into zero or more words of the trie that
    /// cover it exactly. The empty text always can.
    ///
    /// Stops at the first split found. Results for each position are cached,
    /// so the work is at most quadratic in the length of `text`.
    pub fn can_segment(&self, text: &str) -> bool {
        BreakSearch::new(self, text, true).breakable(0)
    }

    /// Same answer as [`Trie::can_segment`] without the cache. Exponential on
    /// texts with many overlapping word prefixes.
    pub fn can_segment_unmemoized(&self, text: &str) -> bool {
        BreakSearch::new(self, text, false).breakable(0)
    }
}

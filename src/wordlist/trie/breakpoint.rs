use derive_new::new;
use typed_arena::Arena;

use crate::wordlist::trie::trie::Trie;

/// A word boundary in a text: the byte offset where the next word starts, and
/// every boundary reachable from here by consuming one more dictionary word.
///
/// A path from the root (always offset 0) to a node whose offset equals the
/// text length is one complete way of splitting the text.
#[derive(new, Debug, PartialEq, Eq)]
pub struct BreakPoint<'a> {
    pub position: usize,
    pub children: Vec<&'a BreakPoint<'a>>,
}

impl Trie {
    /// Every way to split `text` into words of the trie, each split given as
    /// slices of `text` in order. Splits come out in the order their
    /// boundaries are discovered; the empty text has exactly one, empty,
    /// split.
    pub fn segment_all<'t>(&self, text: &'t str) -> Vec<Vec<&'t str>> {
        let arena = Arena::new();
        let root = self.break_points(text, &arena);
        word_sequences(text, root)
    }

    /// Builds the tree of word boundaries for `text`, rooted at offset 0.
    ///
    /// Branches that run out of matching edges before the end of the text are
    /// kept; they simply never reach the text length.
    pub fn break_points<'a>(&self, text: &str, arena: &'a Arena<BreakPoint<'a>>) -> &'a BreakPoint<'a> {
        self.discover(text, 0, arena)
    }

    fn discover<'a>(&self, text: &str, position: usize, arena: &'a Arena<BreakPoint<'a>>) -> &'a BreakPoint<'a> {
        let mut children = vec![];
        let mut node = &self.root;
        for (offset, c) in text[position..].char_indices() {
            node = match node.get_child(c) {
                Some(child) => child,
                None => break,
            };
            if node.is_word_end {
                children.push(self.discover(text, position + offset + c.len_utf8(), arena));
            }
        }
        arena.alloc(BreakPoint::new(position, children))
    }
}

/// Turns every root-to-end path of a boundary tree into the slices of `text`
/// between consecutive boundaries.
pub fn word_sequences<'t>(text: &'t str, root: &BreakPoint<'_>) -> Vec<Vec<&'t str>> {
    fn walk<'t>(text: &'t str, node: &BreakPoint<'_>,
                path: &mut Vec<usize>, results: &mut Vec<Vec<&'t str>>) {
        path.push(node.position);
        if node.position == text.len() {
            results.push(path.windows(2)
                .map(|pair| &text[pair[0]..pair[1]])
                .collect());
        }
        for child in &node.children {
            walk(text, child, path, results);
        }
        path.pop();
    }

    let mut results = vec![];
    walk(text, root, &mut vec![], &mut results);
    results
}

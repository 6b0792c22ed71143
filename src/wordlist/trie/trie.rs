use std::collections::BTreeSet;
use std::fmt::{Debug, Formatter};

use crate::wordlist::trie::iterators::Words;
use crate::wordlist::trie::node::TrieNode;

/// A character prefix tree over a vocabulary of words.
///
/// Nodes are created the first time an edge is needed and never removed.
/// Insertion needs `&mut self`; every query takes `&self`, so a built trie can
/// be shared between threads for reading.
#[derive(Default, Clone)]
pub struct Trie {
    pub(crate) root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            root: Default::default(),
            len: 0,
        }
    }

    /// Adds `word`. Inserting a word that is already present changes nothing;
    /// the empty word marks the root itself.
    pub fn insert(&mut self, word: &str) {
        let end = word.chars()
            .fold(&mut self.root, |node, c| node.get_or_create_child(c));
        if !end.is_word_end {
            end.is_word_end = true;
            self.len += 1;
        }
    }

    pub fn add_all<'f, I>(&mut self, items: I)
        where I: IntoIterator<Item=&'f str> {
        items.into_iter().for_each(|x| self.insert(x));
    }

    pub fn contains(&self, word: &str) -> bool {
        self.root.get_node(word)
            .map(|x| x.is_word_end)
            .unwrap_or(false)
    }

    /// Every word starting with `prefix`, the prefix itself included when it is
    /// a word. Empty when no inserted word passes through `prefix`.
    pub fn words_with_prefix(&self, prefix: &str) -> BTreeSet<String> {
        self.iter_prefix(prefix).collect()
    }

    /// Lazy, sorted form of [`Trie::words_with_prefix`].
    pub fn iter_prefix(&self, prefix: &str) -> Words<'_> {
        Words::new(prefix, self.root.get_node(prefix))
    }

    pub fn iter(&self) -> Words<'_> {
        self.iter_prefix("")
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.root.traverse_prefix(&mut |_| count += 1);
        count
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'f> FromIterator<&'f str> for Trie {
    fn from_iter<I: IntoIterator<Item=&'f str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.add_all(iter);
        trie
    }
}

impl<'f> Extend<&'f str> for Trie {
    fn extend<I: IntoIterator<Item=&'f str>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}


#[cfg(test)]
mod tests {
    use maplit::btreeset;

    use crate::wordlist::trie::trie::Trie;

    #[test]
    fn empty_trie_has_nothing() {
        let trie = Trie::new();
        assert!(!trie.contains("foo"));
        assert!(!trie.contains(""));
        assert!(trie.is_empty());
        assert!(trie.words_with_prefix("").is_empty());
    }

    #[test]
    fn finds_words_in_trie() {
        let words = vec!["HELLO", "HELP", "GOODBYE", "GOOD"];
        let trie: Trie = words.iter().copied().collect();
        words.iter().for_each(|word| assert!(trie.contains(word)));
    }

    #[test]
    fn doesnt_find_words_not_in_trie() {
        let mut trie = Trie::new();
        trie.insert("foo");
        trie.insert("bar");
        assert!(trie.contains("foo"));
        assert!(trie.contains("bar"));
        for bad in ["foobar", "fo", "ar", "f", "baz"] {
            assert!(!trie.contains(bad), "{} should be absent", bad);
        }
    }

    #[test]
    fn inserting_twice_is_idempotent() {
        let mut once = Trie::new();
        once.insert("cat");
        let mut many = Trie::new();
        for _ in 0..5 {
            many.insert("cat");
        }
        assert_eq!(once.len(), 1);
        assert_eq!(many.len(), 1);
        assert_eq!(once.node_count(), many.node_count());
        for query in ["cat", "ca", "c", "cats", ""] {
            assert_eq!(once.contains(query), many.contains(query));
        }
    }

    #[test]
    fn prefix_of_a_word_is_not_a_word_until_inserted() {
        let mut trie = Trie::new();
        trie.insert("foobar");
        assert!(trie.contains("foobar"));
        assert!(!trie.contains("foo"));

        trie.insert("foo");
        assert!(trie.contains("foo"));
        assert!(trie.contains("foobar"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn empty_word_marks_the_root() {
        let mut trie = Trie::new();
        trie.insert("");
        assert!(trie.contains(""));
        assert!(!trie.contains("a"));
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.words_with_prefix(""), btreeset! {String::new()});
    }

    #[test]
    fn lists_words_with_prefix() {
        let trie: Trie = vec!["foobar", "foobie", "bar"].into_iter().collect();

        assert_eq!(trie.words_with_prefix("foo"),
                   btreeset! {"foobar".to_string(), "foobie".to_string()});
        assert!(trie.words_with_prefix("fx").is_empty());
        assert_eq!(trie.words_with_prefix("bar"), btreeset! {"bar".to_string()});
    }

    #[test]
    fn prefix_listing_is_sorted_and_includes_the_prefix() {
        let trie: Trie = vec!["card", "car", "cart", "care", "cat", "dog"].into_iter().collect();
        let listed: Vec<String> = trie.iter_prefix("car").collect();
        assert_eq!(listed, vec!["car", "card", "care", "cart"]);
    }

    #[test]
    fn iteration_order_follows_character_order() {
        let trie: Trie = vec!["zebra", "éclair", "Apple", "apple", "ab"].into_iter().collect();
        let all: Vec<String> = trie.iter().collect();
        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted);
        assert_eq!(all, vec!["Apple", "ab", "apple", "zebra", "éclair"]);
    }

    #[test]
    fn enumeration_never_returns_non_members() {
        let trie: Trie = vec!["in", "inn", "inner", "input", "i", "x"].into_iter().collect();
        for prefix in ["", "i", "in", "inn", "q"] {
            for word in trie.words_with_prefix(prefix) {
                assert!(word.starts_with(prefix));
                assert!(trie.contains(&word));
            }
        }
        assert_eq!(trie.words_with_prefix("").len(), trie.len());
    }

    #[test]
    fn debug_lists_words() {
        let trie: Trie = vec!["b", "a"].into_iter().collect();
        assert_eq!(format!("{:?}", trie), r#"{"a", "b"}"#);
    }
}

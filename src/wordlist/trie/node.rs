use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

/// One character edge deep in the tree. Children are kept in a `BTreeMap` so
/// that walking them always visits characters in sorted order.
#[derive(Default, Clone, PartialEq, Eq)]
pub(crate) struct TrieNode {
    pub(crate) children: BTreeMap<char, TrieNode>,
    pub(crate) is_word_end: bool,
}

impl TrieNode {
    pub(crate) fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub(crate) fn get_or_create_child(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_default()
    }

    /// Follows `path` one character at a time; `None` as soon as an edge is missing.
    pub(crate) fn get_node(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(self, |node, c| node.get_child(c))
    }

    pub(crate) fn traverse_prefix<F>(&self, f: &mut F)
        where F: FnMut(&TrieNode) {
        f(self);
        self.children.values()
            .for_each(|child| child.traverse_prefix(f));
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_word_end", &self.is_word_end)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use crate::wordlist::trie::node::TrieNode;

    #[test]
    fn creates_children_once() {
        let mut root = TrieNode::default();
        root.get_or_create_child('b').is_word_end = true;
        root.get_or_create_child('a');
        root.get_or_create_child('b');

        assert_eq!(root.children.keys().collect::<Vec<_>>(), vec![&'a', &'b']);
        assert!(root.get_child('b').unwrap().is_word_end);
        assert!(root.get_child('c').is_none());
    }

    #[test]
    fn get_node_distinguishes_missing_edges() {
        let mut root = TrieNode::default();
        root.get_or_create_child('f').get_or_create_child('o');

        assert!(root.get_node("fo").is_some());
        assert!(!root.get_node("fo").unwrap().is_word_end);
        assert!(root.get_node("fx").is_none());
        assert_eq!(root.get_node(""), Some(&root));
    }

    #[test]
    fn traverses_in_character_order() {
        let mut root = TrieNode::default();
        for c in ['z', 'é', 'a', 'M'] {
            root.get_or_create_child(c);
        }
        let mut visited = 0;
        root.traverse_prefix(&mut |_| visited += 1);
        assert_eq!(visited, 5);
        assert_eq!(root.children.keys().copied().collect::<String>(), "Mazé");
    }
}

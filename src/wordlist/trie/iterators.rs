use crate::wordlist::trie::node::TrieNode;

/// Depth-first walk over every complete word below a node, smallest first.
///
/// Uses an explicit stack instead of recursion, so deep dictionaries cannot
/// exhaust the call stack. Children are pushed in reverse character order and
/// a node is yielded before its descendants, which makes the output
/// lexicographically sorted.
#[derive(Debug)]
pub struct Words<'a> {
    stack: Vec<(String, &'a TrieNode)>,
}

impl<'a> Words<'a> {
    pub(crate) fn new(prefix: &str, start: Option<&'a TrieNode>) -> Words<'a> {
        Words {
            stack: start.map(|node| vec![(prefix.to_string(), node)]).unwrap_or_default(),
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.stack.pop() {
            for (c, child) in node.children.iter().rev() {
                let mut child_path = String::with_capacity(path.len() + c.len_utf8());
                child_path.push_str(&path);
                child_path.push(*c);
                self.stack.push((child_path, child));
            }
            if node.is_word_end {
                return Some(path);
            }
        }
        None
    }
}

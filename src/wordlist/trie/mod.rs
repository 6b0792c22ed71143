pub mod trie;
pub mod segment;
pub mod breakpoint;
pub mod iterators;

mod node;

pub mod trie;
pub mod wordlist;
pub mod error;

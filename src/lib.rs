pub mod alphabet;
pub mod wordlist;

pub use crate::wordlist::error::WordlistError;
pub use crate::wordlist::trie::breakpoint::BreakPoint;
pub use crate::wordlist::trie::trie::Trie;
pub use crate::wordlist::wordlist::{FileFormat, Wordlist};

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use log::{debug, info, warn};
use metrics::{counter, histogram};
use nom::bytes::complete::take_till;
use nom::character::complete::char;
use nom::multi::separated_list1;
use nom::IResult;
use rayon::prelude::*;
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::wordlist::error::WordlistError;
use crate::wordlist::trie::trie::Trie;

/// A dictionary loaded into a [`Trie`]. Loading is the only step that
/// mutates; once built the list is read-only and can be queried from many
/// threads at once.
pub struct Wordlist {
    trie: Trie,
}

/// How to pull one word out of each line of a word list file.
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    #[builder(default, setter(into))]
    delimiter: Option<char>,
    #[builder(default)]
    word_column: usize,
    #[builder(default, setter(into))]
    comment: Option<char>,
    #[builder(default)]
    uppercase: bool,
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::builder().build()
    }
}

fn split_columns(line: &str, delimiter: char) -> IResult<&str, Vec<&str>> {
    separated_list1(char(delimiter), take_till(move |c: char| c == delimiter))(line)
}

impl FileFormat {
    /// The word on `line`, or `None` for blank and comment lines.
    pub fn parse_line<'a>(&self, line: &'a str, line_number: usize) -> Result<Option<&'a str>, WordlistError> {
        let content = line.trim_start();
        if content.trim_end().is_empty() || self.comment.map_or(false, |c| content.starts_with(c)) {
            return Ok(None);
        }

        let columns = match self.delimiter {
            None => vec![line.trim()],
            Some(delimiter) => split_columns(line, delimiter)
                .map(|(_, columns)| columns)
                .map_err(|_| WordlistError::Malformed { line: line_number })?,
        };
        let column = self.word_column;
        let word = columns.get(column)
            .copied()
            .ok_or(WordlistError::MissingColumn { line: line_number, column })?
            .trim();

        Ok(if word.is_empty() { None } else { Some(word) })
    }

    /// Applies the same normalization to queries that dictionary words get.
    pub fn normalize(&self, word: &str) -> String {
        normalize(word, self.uppercase)
    }
}

impl Wordlist {
    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<Wordlist, WordlistError> {
        let path = path.as_ref();
        info!("Reading words from {:?}", path);

        let file = File::open(path).map_err(|source| WordlistError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), format)
    }

    /// Loads one word per line. Lines that are not valid UTF-8 are skipped and
    /// counted; any other read error stops the load.
    pub fn from_reader<R: BufRead>(reader: R, format: &FileFormat) -> Result<Wordlist, WordlistError> {
        let start = Instant::now();
        let mut trie = Trie::new();
        let mut count: usize = 0;
        let mut failures: usize = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line_number = idx + 1;
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    warn!("Line #{} - {}", line_number, e);
                    failures += 1;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            if let Some(word) = format.parse_line(&line, line_number)? {
                let word = format.normalize(word);
                trie.insert(&word);
                count += 1;
                if count % 100000 == 0 {
                    debug!("{} {}", count, word);
                }
            }
        }

        let elapsed = start.elapsed();
        info!("Read {} words ({} distinct, {} nodes) in {:.3}s [{} failures]",
              count, trie.len(), trie.node_count(), elapsed.as_secs_f64(), failures);
        counter!("wordlist.words_loaded", count as u64);
        counter!("wordlist.load_failures", failures as u64);
        histogram!("wordlist.load_seconds", elapsed.as_secs_f64());

        Ok(Wordlist { trie })
    }

    /// Builds from words that are already normalized.
    pub fn from_words<'f, I>(words: I) -> Wordlist
        where I: IntoIterator<Item=&'f str> {
        Wordlist { trie: words.into_iter().collect() }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    delegate! {
        to self.trie {
            pub fn contains(&self, word: &str) -> bool;
            pub fn words_with_prefix(&self, prefix: &str) -> BTreeSet<String>;
            pub fn can_segment(&self, text: &str) -> bool;
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
        }
    }

    pub fn segment_all<'t>(&self, text: &'t str) -> Vec<Vec<&'t str>> {
        self.trie.segment_all(text)
    }

    /// [`Wordlist::can_segment`] for each text, in parallel. Answers are in
    /// input order.
    pub fn can_segment_many<S>(&self, texts: &[S]) -> Vec<bool>
        where S: AsRef<str> + Sync {
        texts.par_iter()
            .map(|text| self.trie.can_segment(text.as_ref()))
            .collect()
    }

    /// [`Wordlist::segment_all`] for each text, in parallel. Answers are in
    /// input order.
    pub fn segment_all_many<'t, S>(&self, texts: &'t [S]) -> Vec<Vec<Vec<&'t str>>>
        where S: AsRef<str> + Sync {
        texts.par_iter()
            .map(|text| self.trie.segment_all(text.as_ref()))
            .collect()
    }
}

impl From<Trie> for Wordlist {
    fn from(trie: Trie) -> Self {
        Wordlist { trie }
    }
}

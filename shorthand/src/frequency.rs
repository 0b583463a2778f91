//! Occurrence counts of dictionary word chains in a corpus.
use std::path::Path;

use hashbrown::HashMap;
use itertools::Itertools;

use crate::constants::MAX_CHAIN_WORDS;
use crate::dictionary::Dictionary;
use crate::error::Error;
use crate::tokenizer::Tokenize;
use crate::types::{Frequency, Text};

/// Counts of every chain of one to three consecutive dictionary words.
///
/// Iteration yields texts in the order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    index: HashMap<Text, usize>,
    entries: Vec<(Text, Frequency)>,
}

impl FrequencyTable {
    /// An empty table.
    pub fn new() -> FrequencyTable {
        FrequencyTable::default()
    }

    /// Reads a corpus file and counts its chains.
    pub fn load_file<P: AsRef<Path>>(
        &mut self,
        dictionary: &Dictionary,
        path: P,
    ) -> Result<(), Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(Error::io(path))?;
        let before = self.len();
        self.add_text(dictionary, &text);
        log::info!(
            "{}: {} new texts ({} total)",
            path.display(),
            self.len() - before,
            self.len()
        );
        Ok(())
    }

    /// Counts the chains of `text`.
    ///
    /// Inside each sentence, a window holds the last (up to three) dictionary
    /// words; every suffix of the window is counted whenever a dictionary word
    /// enters it. Any other token, and every sentence boundary, empties the
    /// window.
    pub fn add_text(&mut self, dictionary: &Dictionary, text: &str) {
        let text = text.to_lowercase();

        for sentence in text.sentences() {
            let mut chain: Vec<&str> = Vec::with_capacity(MAX_CHAIN_WORDS);

            for word in sentence.words() {
                if !dictionary.contains(word) {
                    chain.clear();
                    continue;
                }

                if chain.len() == MAX_CHAIN_WORDS {
                    chain.remove(0);
                }
                chain.push(word);

                for start in 0..chain.len() {
                    self.increment(chain[start..].iter().join(" "));
                }
            }
        }
    }

    fn increment(&mut self, text: String) {
        match self.index.get(text.as_str()) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                log::trace!("new text: {}", text);
                let text = Text::from(text);
                self.index.insert(text.clone(), self.entries.len());
                self.entries.push((text, 1));
            }
        }
    }

    /// Occurrences of `text`; zero when it never occurred.
    #[inline(always)]
    pub fn get(&self, text: &str) -> Frequency {
        self.index.get(text).map(|&i| self.entries[i].1).unwrap_or(0)
    }

    /// Whether `text` occurred at all.
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains_key(text)
    }

    /// Number of distinct texts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Texts and their counts, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&Text, Frequency)> + '_ {
        self.entries.iter().map(|(text, freq)| (text, *freq))
    }

    /// Texts in first-seen order.
    pub fn texts(&self) -> impl Iterator<Item = &Text> + '_ {
        self.entries.iter().map(|(text, _)| text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn table(words: &[&str], text: &str) -> FrequencyTable {
        let dictionary = words.iter().copied().collect::<Dictionary>();
        let mut table = FrequencyTable::new();
        table.add_text(&dictionary, text);
        table
    }

    #[test]
    fn sentence_boundaries_reset_chains() {
        let table = table(&["the", "cat", "sat", "ran"], "the cat sat. the cat ran.");

        assert_eq!(table.get("the"), 2);
        assert_eq!(table.get("cat"), 2);
        assert_eq!(table.get("the cat"), 2);
        assert_eq!(table.get("cat sat"), 1);
        assert_eq!(table.get("cat ran"), 1);
        assert_eq!(table.get("the cat sat"), 1);
        assert_eq!(table.get("the cat ran"), 1);
        assert_eq!(table.get("sat the"), 0);
        assert_eq!(table.get("ran the"), 0);
        assert_eq!(table.get("sat the cat"), 0);
        assert_eq!(table.len(), 9);
    }

    #[test]
    fn window_holds_three_words() {
        let table = table(&["a", "b", "c", "d"], "a b c d");

        assert_eq!(table.get("a b c"), 1);
        assert_eq!(table.get("b c d"), 1);
        assert_eq!(table.get("c d"), 1);
        assert_eq!(table.get("a b c d"), 0);
    }

    #[test]
    fn unknown_words_break_chains() {
        let table = table(&["quick", "fox"], "Quick, brown fox!");

        assert_eq!(table.get("quick"), 1);
        assert_eq!(table.get("fox"), 1);
        assert_eq!(table.get("quick fox"), 0);
    }

    #[test]
    fn punctuation_inside_a_sentence_does_not_break_chains() {
        let table = table(&["quick", "fox"], "quick, fox");
        assert_eq!(table.get("quick fox"), 1);
    }

    #[test]
    fn apostrophes_and_dots_split_words() {
        let table = table(
            &["don", "t", "don't", "stop", "e", "g"],
            "Don't stop. Don't stop. e.g stop",
        );

        let counts = table
            .iter()
            .map(|(text, freq)| (text.as_str(), freq))
            .collect::<Vec<_>>();
        assert_eq!(
            counts,
            vec![
                ("don", 2),
                ("don t", 2),
                ("t", 2),
                ("don t stop", 2),
                ("t stop", 2),
                ("stop", 3),
                ("e", 1),
                ("e g", 1),
                ("g", 1),
                ("e g stop", 1),
                ("g stop", 1),
            ]
        );
        assert!(!table.contains("don't"));
    }

    #[test]
    fn first_seen_order() {
        let table = table(&["the", "cat"], "the cat");
        assert_eq!(
            table.texts().map(|x| x.as_str()).collect::<Vec<_>>(),
            vec!["the", "the cat", "cat"]
        );
    }

    #[test]
    fn counts_accumulate_across_files() {
        let dictionary = ["fox"].iter().copied().collect::<Dictionary>();
        let mut a = tempfile::NamedTempFile::new().unwrap();
        writeln!(a, "Fox.").unwrap();
        let mut b = tempfile::NamedTempFile::new().unwrap();
        writeln!(b, "fox fox").unwrap();

        let mut table = FrequencyTable::new();
        table.load_file(&dictionary, a.path()).unwrap();
        table.load_file(&dictionary, b.path()).unwrap();
        assert_eq!(table.get("fox"), 3);
        assert_eq!(table.get("fox fox"), 1);
    }
}

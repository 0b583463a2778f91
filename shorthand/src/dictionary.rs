//! The set of words that may take part in an expansion.
use std::io::BufRead;
use std::path::Path;

use hashbrown::HashSet;
use smol_str::SmolStr;

use crate::error::Error;

/// Lowercase words, unioned from any number of word lists.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<SmolStr>,
}

impl Dictionary {
    /// An empty dictionary.
    pub fn new() -> Dictionary {
        Dictionary::default()
    }

    /// Adds every line of a newline-separated word list.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, Error> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(Error::io(path))?;
        let added = self
            .load_reader(std::io::BufReader::new(file))
            .map_err(Error::io(path))?;
        log::info!("{}: {} new words", path.display(), added);
        Ok(added)
    }

    /// Adds every line read from `reader`, returning how many were new.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> std::io::Result<usize> {
        let before = self.words.len();
        for line in reader.lines() {
            self.insert(&line?);
        }
        Ok(self.words.len() - before)
    }

    /// Adds a single word, trimmed and lowercased. Blank input is ignored.
    pub fn insert(&mut self, word: &str) {
        let word = word.trim();
        if !word.is_empty() {
            self.words.insert(SmolStr::from(word.to_lowercase()));
        }
    }

    /// Whether `word` is a known word. `word` must already be lowercase.
    #[inline(always)]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word has been loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for Dictionary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        iter.into_iter().for_each(|word| dictionary.insert(word));
        dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn normalises_lines() {
        let mut dictionary = Dictionary::new();
        let added = dictionary
            .load_reader("  Quick\nbrown \n\n\tFOX\nquick\n".as_bytes())
            .unwrap();
        assert_eq!(added, 3);
        assert!(dictionary.contains("quick"));
        assert!(dictionary.contains("brown"));
        assert!(dictionary.contains("fox"));
        assert!(!dictionary.contains(""));
    }

    #[test]
    fn files_are_unioned() {
        let mut en = tempfile::NamedTempFile::new().unwrap();
        writeln!(en, "the\ncat").unwrap();
        let mut de = tempfile::NamedTempFile::new().unwrap();
        writeln!(de, "die\nkatze\nthe").unwrap();

        let mut dictionary = Dictionary::new();
        assert_eq!(dictionary.load_file(en.path()).unwrap(), 2);
        assert_eq!(dictionary.load_file(de.path()).unwrap(), 2);
        assert_eq!(dictionary.len(), 4);
    }

    #[test]
    fn missing_file() {
        let mut dictionary = Dictionary::new();
        match dictionary.load_file("/nonexistent/words") {
            Err(Error::Io { path, .. }) => assert_eq!(path, Path::new("/nonexistent/words")),
            other => panic!("unexpected {:?}", other),
        }
    }
}

//! The committed abbreviation → expansion mapping.
//!
//! On disk a model is a list of `abbreviation expansion...` lines. The
//! expansion may span several words. Blank lines are skipped and everything
//! after a `#` is a comment, so annotated report output can be loaded back
//! as a model.
//!
//! Entries keep insertion order: loaded lines first, in file order, then new
//! commits. Replacing an expansion keeps the entry's position.
use std::io::Write;
use std::path::Path;

use hashbrown::HashMap;
use itertools::Itertools;

use crate::error::Error;
use crate::types::{CompressedText, Score, Text};

/// Expansion → abbreviation lookup.
pub type ReverseModel = HashMap<Text, CompressedText>;

const COMMENT: char = '#';

/// Abbreviations and their expansions, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Model {
    index: HashMap<CompressedText, usize>,
    entries: Vec<(CompressedText, Text)>,
}

impl Model {
    /// An empty model.
    pub fn new() -> Model {
        Model::default()
    }

    /// Loads the entries of a model file, returning how many lines were read.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(Error::io(path))?;
        let count = self.load_str(&text)?;
        log::info!("{}: {} model entries", path.display(), count);
        Ok(count)
    }

    /// Loads model lines from `text`, returning how many entries were read.
    /// A later line for the same abbreviation replaces an earlier one.
    pub fn load_str(&mut self, text: &str) -> Result<usize, Error> {
        let mut count = 0;

        for (i, line) in text.lines().enumerate() {
            let content = line.split(COMMENT).next().unwrap_or_default().to_lowercase();
            let mut parts = content.split_whitespace();

            let abbreviation = match parts.next() {
                Some(v) => v,
                None => continue,
            };

            let expansion = parts.join(" ");
            if expansion.is_empty() {
                return Err(Error::ModelParse {
                    line: i + 1,
                    content: line.to_string(),
                });
            }

            self.insert(abbreviation.into(), expansion.into());
            count += 1;
        }

        Ok(count)
    }

    /// Maps `abbreviation` to `text`, returning the expansion it replaced.
    pub fn insert(&mut self, abbreviation: CompressedText, text: Text) -> Option<Text> {
        match self.index.get(&abbreviation) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, text)),
            None => {
                self.index.insert(abbreviation.clone(), self.entries.len());
                self.entries.push((abbreviation, text));
                None
            }
        }
    }

    /// The expansion of `abbreviation`.
    pub fn get(&self, abbreviation: &str) -> Option<&Text> {
        self.index.get(abbreviation).map(|&i| &self.entries[i].1)
    }

    /// Whether `abbreviation` is taken.
    #[inline(always)]
    pub fn contains(&self, abbreviation: &str) -> bool {
        self.index.contains_key(abbreviation)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the model has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&CompressedText, &Text)> + '_ {
        self.entries.iter().map(|(abbreviation, text)| (abbreviation, text))
    }

    /// Builds the expansion → abbreviation index. When two abbreviations
    /// share an expansion, the one inserted later wins.
    pub fn reverse(&self) -> ReverseModel {
        self.entries
            .iter()
            .map(|(abbreviation, text)| (text.clone(), abbreviation.clone()))
            .collect()
    }

    /// Writes one `abbreviation expansion` line per entry, ascending by
    /// `score`. Entries with equal scores stay in insertion order.
    pub fn write_sorted_by<W, F>(&self, writer: &mut W, score: F) -> std::io::Result<()>
    where
        W: Write,
        F: Fn(&str, &str) -> Score,
    {
        let sorted = self
            .entries
            .iter()
            .map(|(abbreviation, text)| {
                (score(abbreviation.as_str(), text.as_str()), abbreviation, text)
            })
            .sorted_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        for (_, abbreviation, text) in sorted {
            writeln!(writer, "{} {}", abbreviation, text)?;
        }

        Ok(())
    }
}

/// Two models are equal when they map the same abbreviations to the same
/// expansions, whatever their order.
impl PartialEq for Model {
    fn eq(&self, other: &Model) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(abbreviation, text)| other.get(abbreviation) == Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let mut model = Model::new();
        let err = model
            .load_str("t the\n\nQB  Quick   Brown\nx  \t  \nfx fox\n")
            .unwrap_err();
        match err {
            Error::ModelParse { line, content } => {
                assert_eq!(line, 4);
                assert_eq!(content, "x  \t  ");
            }
            e => panic!("unexpected {:?}", e),
        }

        let mut model = Model::new();
        let text = "t the\n\nQB  Quick   Brown\n\
                    fx fox # 12.3 (times: 4), fax 1.0 (times: 2)\n\
                    # note\n";
        let count = model.load_str(text).unwrap();
        assert_eq!(count, 3);
        assert_eq!(model.get("t").map(|x| x.as_str()), Some("the"));
        assert_eq!(model.get("qb").map(|x| x.as_str()), Some("quick brown"));
        assert_eq!(model.get("fx").map(|x| x.as_str()), Some("fox"));
    }

    #[test]
    fn abbreviation_only() {
        let mut model = Model::new();
        assert!(matches!(
            model.load_str("ab\n"),
            Err(Error::ModelParse { line: 1, .. })
        ));
        assert!(matches!(
            model.load_str("ab # comment only\n"),
            Err(Error::ModelParse { line: 1, .. })
        ));
    }

    #[test]
    fn insertion_order() {
        let mut model = Model::new();
        model.load_str("t the\nb brown\na and\n").unwrap();
        let replaced = model.insert("b".into(), "bird".into());
        assert_eq!(replaced.as_deref(), Some("brown"));
        model.insert("c".into(), "cat".into());

        assert_eq!(
            model.iter().map(|(a, t)| (a.as_str(), t.as_str())).collect::<Vec<_>>(),
            vec![("t", "the"), ("b", "bird"), ("a", "and"), ("c", "cat")]
        );

        let mut other = Model::new();
        other.load_str("c cat\na and\nb bird\nt the\n").unwrap();
        assert_eq!(model, other);
        other.insert("t".into(), "tea".into());
        assert_ne!(model, other);
    }

    #[test]
    fn reverse() {
        let mut model = Model::new();
        model.load_str("a and\nt the\nth the\n").unwrap();
        let reverse = model.reverse();
        assert_eq!(reverse.len(), 2);
        assert_eq!(reverse.get("and").map(|x| x.as_str()), Some("a"));
        assert_eq!(reverse.get("the").map(|x| x.as_str()), Some("th"));
    }

    #[test]
    fn write_sorted() {
        let mut model = Model::new();
        model.load_str("a and\nb brown\nc cat\n").unwrap();
        let mut out = vec![];
        model
            .write_sorted_by(&mut out, |_, text| match text {
                "brown" => Score(-1.0),
                _ => Score(3.0),
            })
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "b brown\na and\nc cat\n");
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            Model::new().load_file("/nonexistent/model.txt"),
            Err(Error::Io { .. })
        ));
    }
}

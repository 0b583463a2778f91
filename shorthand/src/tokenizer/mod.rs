//! Sentence and word segmentation of corpus text.
use unic_segment::WordBoundIndices;

pub use self::sentence::Sentences;
pub use self::word::Words;

mod sentence;
mod word;

/// Splits text into sentences and sentences into words.
pub trait Tokenize {
    /// Every segment between Unicode word boundaries, with its byte offset.
    fn word_bound_indices(&self) -> WordBoundIndices;
    /// Maximal runs of letters, digits and `_`.
    fn words(&self) -> Words;
    /// Sentences, split on terminal punctuation followed by whitespace or on
    /// blank lines.
    fn sentences(&self) -> Sentences;
}

impl Tokenize for str {
    fn word_bound_indices(&self) -> WordBoundIndices {
        WordBoundIndices::new(self)
    }

    fn words(&self) -> Words {
        Words::new(self)
    }

    fn sentences(&self) -> Sentences {
        Sentences::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic() {
        let msg = "the cat's (mat)";
        assert_eq!(
            msg.word_bound_indices().collect::<Vec<_>>(),
            vec![
                (0, "the"),
                (3, " "),
                (4, "cat's"),
                (9, " "),
                (10, "("),
                (11, "mat"),
                (14, ")"),
            ]
        );
        // segments keep the apostrophe, words do not
        assert_eq!(msg.words().collect::<Vec<_>>(), vec!["the", "cat", "s", "mat"]);
    }

    #[test]
    fn words_skip_punctuation() {
        let msg = "the cat, (sat) on 2 mats; \"quoted\"";
        assert_eq!(
            msg.words().collect::<Vec<_>>(),
            vec!["the", "cat", "sat", "on", "2", "mats", "quoted"]
        );
    }

    #[test]
    fn words_keep_diacritics() {
        assert_eq!(
            "grüße an björn".words().collect::<Vec<_>>(),
            vec!["grüße", "an", "björn"]
        );
    }

    #[test]
    fn sentences_then_words() {
        let text = "the cat sat. the cat ran.";
        let words = text
            .sentences()
            .map(|s| s.words().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        assert_eq!(words, vec![vec!["the", "cat", "sat"], vec!["the", "cat", "ran"]]);
    }
}

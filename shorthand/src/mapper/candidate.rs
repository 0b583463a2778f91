//! Candidate expansion for an abbreviation.
use serde::{Deserialize, Serialize};

use crate::types::{Frequency, Score, Text};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// A viable expansion for an abbreviation, with its ranking data
pub struct Candidate {
    /// the expansion
    pub text: Text,
    /// compression index of the pair
    pub score: Score,
    /// occurrences of the expansion in the corpus
    pub frequency: Frequency,
}

impl Candidate {
    /// creates a candidate
    pub fn new(text: Text, score: Score, frequency: Frequency) -> Candidate {
        Candidate {
            text,
            score,
            frequency,
        }
    }

    /// gets the expansion
    pub fn text(&self) -> &str {
        &self.text
    }

    /// gets the compression index
    pub fn score(&self) -> Score {
        self.score
    }

    /// gets the corpus frequency
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{} {:.1} (times: {})", self.text, self.score, self.frequency)
    }
}

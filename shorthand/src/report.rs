//! Summary of an abbreviation run.
use std::fmt;

use hashbrown::HashMap;
use itertools::Itertools;
use serde::Serialize;

use crate::error::Error;
use crate::mapper::{Candidate, TextMapper};
use crate::types::{CompressedText, Frequency, Score, Text};

/// An expansion together with every abbreviation that ranked it.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateUsage {
    /// the expansion
    pub text: Text,
    /// occurrences in the corpus
    pub frequency: Frequency,
    /// abbreviations listing it as a candidate, in search order
    pub abbreviations: Vec<CompressedText>,
}

impl fmt::Display for CandidateUsage {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "{} (freq: {}) [{}]",
            self.text,
            self.frequency,
            self.abbreviations.iter().join(", ")
        )
    }
}

/// One line of the model with its ranking data.
#[derive(Debug, Clone, Serialize)]
pub struct ModelEntry {
    /// the abbreviation
    pub abbreviation: CompressedText,
    /// what it expands to
    pub expansion: Text,
    /// compression index of the pair
    pub score: Score,
    /// occurrences of the expansion in the corpus
    pub frequency: Frequency,
    /// the other candidates of the abbreviation, best first
    pub alternatives: Vec<Candidate>,
}

impl fmt::Display for ModelEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "{} {} # {:.1} (times: {})",
            self.abbreviation, self.expansion, self.score, self.frequency
        )?;
        for alternative in &self.alternatives {
            write!(f, ", {}", alternative)?;
        }
        Ok(())
    }
}

/// Everything worth showing after a run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// distinct word chains in the corpus
    pub corpus_texts: usize,
    /// candidate expansions and the abbreviations competing for them
    pub usage: Vec<CandidateUsage>,
    /// the model, least valuable entries first
    pub entries: Vec<ModelEntry>,
    /// abbreviations left without an expansion
    pub unfulfilled: Vec<CompressedText>,
    /// entries added by this run
    pub new_entries: usize,
    /// savings of the model, each expansion counted once
    pub total_compression: Score,
}

impl Report {
    /// Builds the report of `mapper`'s current state.
    pub fn new(mapper: &TextMapper) -> Result<Report, Error> {
        let frequencies = mapper.frequencies();

        let mut usage: Vec<CandidateUsage> = vec![];
        let mut index: HashMap<&Text, usize> = HashMap::new();
        for (abbreviation, candidates) in mapper.candidates() {
            for candidate in candidates {
                let i = *index.entry(&candidate.text).or_insert_with(|| {
                    usage.push(CandidateUsage {
                        text: candidate.text.clone(),
                        frequency: candidate.frequency,
                        abbreviations: vec![],
                    });
                    usage.len() - 1
                });
                usage[i].abbreviations.push(abbreviation.clone());
            }
        }

        let entries = mapper
            .model()
            .iter()
            .map(|(abbreviation, expansion)| {
                let alternatives = mapper
                    .candidates()
                    .get(abbreviation)
                    .map(|candidates| {
                        candidates
                            .iter()
                            .filter(|c| &c.text != expansion)
                            .cloned()
                            .collect::<Vec<_>>()
                    })
                    .unwrap_or_default();

                ModelEntry {
                    abbreviation: abbreviation.clone(),
                    expansion: expansion.clone(),
                    score: mapper.compression_index(abbreviation, expansion),
                    frequency: frequencies.get(expansion),
                    alternatives,
                }
            })
            .sorted_by(|a, b| {
                a.score
                    .partial_cmp(&b.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .collect();

        Ok(Report {
            corpus_texts: frequencies.len(),
            usage,
            entries,
            unfulfilled: mapper.unfulfilled().to_vec(),
            new_entries: mapper.new_entries(),
            total_compression: mapper.total_compression_index()?,
        })
    }
}

//! Abbreviation search and assignment.
//!
//! [`TextMapper`] owns every table of a run: the dictionary, the corpus
//! frequencies, the model being extended and the candidates found for each
//! abbreviation. A run loads its inputs, calls [`TextMapper::compute`] to rank
//! candidates for every free abbreviation, then [`TextMapper::augment_model`]
//! to commit the best candidate of each.
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use hashbrown::{HashMap, HashSet};

use crate::abbreviation::Abbreviations;
use crate::config::{MappingConfig, ReverseIndexPolicy};
use crate::constants::MIN_FREQUENCY;
use crate::dictionary::Dictionary;
use crate::difficulty::difficulty;
use crate::error::Error;
use crate::frequency::FrequencyTable;
use crate::model::{Model, ReverseModel};
use crate::report::Report;
use crate::types::{CompressedText, Frequency, Score, Text};

pub use self::candidate::Candidate;

mod candidate;

/// Ranked candidates per abbreviation, best first.
pub type CandidateTable = BTreeMap<CompressedText, Vec<Candidate>>;

/// The state of one abbreviation computation.
#[derive(Debug)]
pub struct TextMapper {
    config: MappingConfig,
    dictionary: Dictionary,
    frequencies: FrequencyTable,
    model: Model,
    reverse_model: ReverseModel,
    mappings: CandidateTable,
    unfulfilled: Vec<CompressedText>,
    new_entries: usize,
}

impl TextMapper {
    /// Starts a run over `dictionary` with an empty model and corpus.
    pub fn new(config: MappingConfig, dictionary: Dictionary) -> TextMapper {
        TextMapper {
            config,
            dictionary,
            frequencies: FrequencyTable::new(),
            model: Model::new(),
            reverse_model: ReverseModel::new(),
            mappings: CandidateTable::new(),
            unfulfilled: vec![],
            new_entries: 0,
        }
    }

    /// Settings of this run.
    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    /// Known words.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Corpus counts gathered so far.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// The model, including anything committed by [`TextMapper::augment_model`].
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Candidates found by the last [`TextMapper::compute`].
    pub fn candidates(&self) -> &CandidateTable {
        &self.mappings
    }

    /// Abbreviations for which no expansion could be assigned.
    pub fn unfulfilled(&self) -> &[CompressedText] {
        &self.unfulfilled
    }

    /// Entries committed by the last [`TextMapper::augment_model`].
    pub fn new_entries(&self) -> usize {
        self.new_entries
    }

    /// Seeds the model from a previous run.
    pub fn load_model_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, Error> {
        let count = self.model.load_file(path)?;
        self.reverse_model = self.model.reverse();
        Ok(count)
    }

    /// Seeds the model from model lines.
    pub fn load_model_str(&mut self, text: &str) -> Result<usize, Error> {
        let count = self.model.load_str(text)?;
        self.reverse_model = self.model.reverse();
        Ok(count)
    }

    /// Counts the word chains of a corpus file.
    pub fn load_input_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        self.frequencies.load_file(&self.dictionary, path)
    }

    /// Counts the word chains of `text`.
    pub fn add_input_text(&mut self, text: &str) {
        self.frequencies.add_text(&self.dictionary, text);
    }

    /// Projected keystroke savings of expanding `abbreviation` into `text`
    /// everywhere `text` occurs in the corpus.
    pub fn compression_index(&self, abbreviation: &str, text: &str) -> Score {
        self.score(abbreviation, text, self.frequencies.get(text))
    }

    fn score(&self, abbreviation: &str, text: &str, frequency: Frequency) -> Score {
        if abbreviation == text {
            return Score::ZERO;
        }
        let length = abbreviation.chars().count() as f64;
        Score(frequency as f64 * (difficulty(text) - length - self.config.penalty))
    }

    /// Whether `text` may become the expansion of `abbreviation`.
    ///
    /// Both must be free, `text` must have occurred at least twice, start with
    /// the first letter of `abbreviation`, and contain its remaining letters
    /// in order, each after the previous match.
    pub fn is_viable(&self, abbreviation: &str, text: &str) -> bool {
        self.is_viable_with(abbreviation, text, self.frequencies.get(text))
    }

    fn is_viable_with(&self, abbreviation: &str, text: &str, frequency: Frequency) -> bool {
        let mut letters = abbreviation.chars();
        let first = match letters.next() {
            Some(v) => v,
            None => return false,
        };

        if !text.starts_with(first) || frequency < MIN_FREQUENCY {
            return false;
        }

        if self.model.contains(abbreviation) || self.reverse_model.contains_key(text) {
            return false;
        }

        let mut rest = &text[first.len_utf8()..];
        for ch in letters {
            match rest.find(ch) {
                Some(i) => rest = &rest[i + ch.len_utf8()..],
                None => return false,
            }
        }

        true
    }

    /// Ranks the viable expansions of `abbreviation`, best first, keeping
    /// at most `n_best`. Equal scores keep corpus order.
    pub fn find_candidates(&self, abbreviation: &str) -> Vec<Candidate> {
        let mut viable = self
            .frequencies
            .iter()
            .filter(|(text, frequency)| self.is_viable_with(abbreviation, text, *frequency))
            .map(|(text, frequency)| {
                Candidate::new(
                    text.clone(),
                    self.score(abbreviation, text, frequency),
                    frequency,
                )
            })
            .collect::<Vec<_>>();

        viable.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        viable.truncate(self.config.n_best);
        viable
    }

    /// Ranks candidates for every abbreviation not yet in the model.
    ///
    /// The expansion index is rebuilt from the model first; abbreviations
    /// without any viable expansion are recorded as unfulfilled.
    pub fn compute(&mut self) {
        self.reverse_model = self.model.reverse();
        self.mappings.clear();
        self.unfulfilled.clear();

        for abbreviation in Abbreviations::new() {
            if self.model.contains(&abbreviation) {
                continue;
            }

            let candidates = self.find_candidates(&abbreviation);
            if candidates.is_empty() {
                log::debug!("No words found for: {}", abbreviation);
                self.unfulfilled.push(abbreviation);
            } else {
                log::trace!("{}: {:?}", abbreviation, candidates);
                self.mappings.insert(abbreviation, candidates);
            }
        }

        log::info!(
            "{} abbreviations with candidates, {} without",
            self.mappings.len(),
            self.unfulfilled.len()
        );
    }

    /// Commits the best candidate of every abbreviation found by
    /// [`TextMapper::compute`], returning how many entries were added.
    ///
    /// Committing an abbreviation that is already taken, or an expansion the
    /// index already holds, is an error and leaves the model untouched.
    pub fn augment_model(&mut self) -> Result<usize, Error> {
        let live = self.config.reverse_index == ReverseIndexPolicy::Live;
        let mut taken: HashSet<&Text> = HashSet::new();
        let mut commits: Vec<(CompressedText, Text)> = vec![];
        let mut skipped: Vec<CompressedText> = vec![];

        for (abbreviation, candidates) in self.mappings.iter() {
            if self.model.contains(abbreviation) {
                return Err(Error::AbbreviationAssigned(abbreviation.clone()));
            }

            let choice = if live {
                candidates
                    .iter()
                    .find(|c| !self.reverse_model.contains_key(&c.text) && !taken.contains(&c.text))
            } else {
                candidates.first()
            };

            let candidate = match choice {
                Some(v) => v,
                None => {
                    log::debug!("All candidates taken for: {}", abbreviation);
                    skipped.push(abbreviation.clone());
                    continue;
                }
            };

            if self.reverse_model.contains_key(&candidate.text) {
                return Err(Error::ExpansionAssigned(candidate.text.clone()));
            }

            if live {
                taken.insert(&candidate.text);
            }
            commits.push((abbreviation.clone(), candidate.text.clone()));
        }

        self.new_entries = commits.len();
        for (abbreviation, text) in commits {
            log::debug!("{} {}", abbreviation, text);
            if live {
                self.reverse_model.insert(text.clone(), abbreviation.clone());
            }
            self.model.insert(abbreviation, text);
        }
        self.unfulfilled.extend(skipped);

        log::info!("{} new model entries", self.new_entries);
        Ok(self.new_entries)
    }

    /// Keeps, for every expansion in the model, the abbreviation with the
    /// highest compression index. Returns the kept entries in model order.
    pub fn resolved_model(&self) -> Result<Vec<(&CompressedText, &Text, Score)>, Error> {
        let mut order: Vec<&Text> = vec![];
        let mut best: HashMap<&Text, (&CompressedText, Score)> = HashMap::new();

        for (abbreviation, text) in self.model.iter() {
            let score = self.compression_index(abbreviation, text);
            match best.get(text) {
                Some((_, current)) if *current > score => continue,
                Some(_) => {}
                None => order.push(text),
            }
            best.insert(text, (abbreviation, score));
        }

        let mut seen = HashSet::new();
        let mut resolved = Vec::with_capacity(order.len());
        for text in order {
            let (abbreviation, score) = best[text];
            if !seen.insert(abbreviation) {
                return Err(Error::NotInjective(abbreviation.clone()));
            }
            resolved.push((abbreviation, text, score));
        }

        Ok(resolved)
    }

    /// Projected keystroke savings of the whole model, counting every
    /// expansion once under its best abbreviation.
    pub fn total_compression_index(&self) -> Result<Score, Error> {
        Ok(self
            .resolved_model()?
            .into_iter()
            .map(|(_, _, score)| score)
            .sum())
    }

    /// Summarises the run.
    pub fn report(&self) -> Result<Report, Error> {
        Report::new(self)
    }

    /// Writes the model, least valuable entries first.
    pub fn write_model<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        self.model
            .write_sorted_by(writer, |abbreviation, text| {
                self.compression_index(abbreviation, text)
            })
    }
}

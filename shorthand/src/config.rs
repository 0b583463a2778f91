//! Tunables of the abbreviation search.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_N_BEST, DEFAULT_PENALTY};
use crate::error::Error;

/// How the expansion → abbreviation index behaves while new abbreviations
/// are committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReverseIndexPolicy {
    /// The index is taken from the loaded model once, before the search.
    /// Several new abbreviations may then commit the same expansion; the
    /// total compression keeps the best of them.
    Snapshot,
    /// Every commit is added to the index. An abbreviation whose best
    /// candidate is already taken falls back to its next candidate.
    Live,
}

/// Search settings, loadable from JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Flat cost of having to remember one more abbreviation.
    pub penalty: f64,
    /// Candidates kept per abbreviation.
    pub n_best: usize,
    /// See [`ReverseIndexPolicy`].
    pub reverse_index: ReverseIndexPolicy,
}

impl MappingConfig {
    /// Penalty 0.2, four candidates, snapshot reverse index.
    pub const fn default() -> MappingConfig {
        MappingConfig {
            penalty: DEFAULT_PENALTY,
            n_best: DEFAULT_N_BEST,
            reverse_index: ReverseIndexPolicy::Snapshot,
        }
    }

    /// Reads a JSON config. Missing fields keep their defaults.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<MappingConfig, Error> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(Error::io(path))?;
        serde_json::from_reader(std::io::BufReader::new(file)).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for MappingConfig {
    fn default() -> Self {
        MappingConfig::default()
    }
}

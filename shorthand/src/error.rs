//! Error types for loading inputs and maintaining the model.

use std::path::PathBuf;

use crate::types::{CompressedText, Text};

/// Errors that can occur while loading inputs or committing abbreviations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A dictionary, model, corpus or config file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// file being read
        path: PathBuf,
        /// underlying error
        #[source]
        source: std::io::Error,
    },

    /// A config file is not a valid JSON mapping config
    #[error("Invalid config in {}: {source}", path.display())]
    Config {
        /// file being read
        path: PathBuf,
        /// underlying error
        #[source]
        source: serde_json::Error,
    },

    /// A model line has an abbreviation but no expansion
    #[error("Malformed model line {line}: {content:?} has no expansion")]
    ModelParse {
        /// 1-based line number
        line: usize,
        /// the offending line
        content: String,
    },

    /// An abbreviation was about to be committed a second time
    #[error("Abbreviation {0:?} is already assigned")]
    AbbreviationAssigned(CompressedText),

    /// An expansion already owned by a loaded abbreviation was about to be committed again
    #[error("Expansion {0:?} is already assigned")]
    ExpansionAssigned(Text),

    /// Resolving the model left one abbreviation in charge of several expansions
    #[error("Abbreviation {0:?} resolves to more than one expansion")]
    NotInjective(CompressedText),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Error {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}

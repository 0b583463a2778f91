/*! Abbreviation tables for text expanders.

Computes one- and two-letter abbreviations for the words and short phrases
that occur most often in a corpus, weighted by how much physical effort they
take to type. The result is a flat `abbreviation expansion` mapping that can
be fed to a text expander, and that can be extended by later runs without
disturbing the abbreviations already learned.

# Usage examples

```
use shorthand::config::MappingConfig;
use shorthand::dictionary::Dictionary;
use shorthand::mapper::TextMapper;

let dictionary: Dictionary = ["quick", "brown", "fox"].iter().copied().collect();
let mut mapper = TextMapper::new(MappingConfig::default(), dictionary);
mapper.add_input_text("The quick brown fox. The quick brown fox.");
mapper.compute();
mapper.augment_model().unwrap();

assert_eq!(mapper.model().get("qb").map(|x| x.as_str()), Some("quick brown fox"));
```

Further examples of how to drive the library can be found in
`shorthand-bin` in the same repository.
*/

#![warn(missing_docs)]
pub mod abbreviation;
pub mod config;
pub mod dictionary;
pub mod difficulty;
pub mod error;
pub mod frequency;
pub mod mapper;
pub mod model;
pub mod report;
pub mod tokenizer;
pub mod types;

pub(crate) mod constants;

pub use crate::error::Error;
pub use crate::mapper::TextMapper;

//! The space of abbreviations considered by the search.
//!
//! Every one-letter and two-letter lowercase string is a candidate, 702 in
//! all, visited as `a, aa, ab, .., az, b, ba, ..`.
use smol_str::SmolStr;

use crate::constants::{
    ABBREVIATION_ALPHABET, ABBREVIATION_FIRST as FIRST, ABBREVIATION_LAST as LAST,
};
use crate::types::CompressedText;

/// Number of abbreviations visited by [`Abbreviations`].
pub const ABBREVIATION_COUNT: usize = 26 + 26 * 26;

/// Iterator over every candidate abbreviation in search order.
#[derive(Debug, Clone)]
pub struct Abbreviations {
    first: u8,
    second: Option<u8>,
}

impl Abbreviations {
    /// Starts at `a`.
    pub fn new() -> Abbreviations {
        Abbreviations {
            first: FIRST,
            second: None,
        }
    }
}

impl Default for Abbreviations {
    fn default() -> Self {
        Abbreviations::new()
    }
}

impl Iterator for Abbreviations {
    type Item = CompressedText;

    fn next(&mut self) -> Option<CompressedText> {
        if self.first > LAST {
            return None;
        }

        let mut out = String::with_capacity(2);
        out.push(self.first as char);

        match self.second {
            None => self.second = Some(FIRST),
            Some(second) => {
                out.push(second as char);
                if second == LAST {
                    self.first += 1;
                    self.second = None;
                } else {
                    self.second = Some(second + 1);
                }
            }
        }

        Some(SmolStr::from(out))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let done = match self.second {
            _ if self.first > LAST => ABBREVIATION_COUNT,
            None => (self.first - FIRST) as usize * 27,
            Some(second) => {
                (self.first - FIRST) as usize * 27 + 1 + (second - FIRST) as usize
            }
        };
        let left = ABBREVIATION_COUNT - done;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Abbreviations {}

/// Whether `s` is one or two lowercase ASCII letters.
pub fn is_abbreviation(s: &str) -> bool {
    (1..=2).contains(&s.len()) && s.bytes().all(|b| ABBREVIATION_ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order() {
        let all = Abbreviations::new().collect::<Vec<_>>();
        let all = all.iter().map(|x| x.as_str()).collect::<Vec<_>>();
        assert_eq!(all.len(), ABBREVIATION_COUNT);
        assert_eq!(&all[..4], &["a", "aa", "ab", "ac"]);
        assert_eq!(&all[26..29], &["az", "b", "ba"]);
        assert_eq!(all.last(), Some(&"zz"));
    }

    #[test]
    fn exact_size() {
        let mut iter = Abbreviations::new();
        assert_eq!(iter.len(), ABBREVIATION_COUNT);
        iter.next();
        assert_eq!(iter.len(), ABBREVIATION_COUNT - 1);
        let rest = iter.nth(26);
        assert_eq!(rest.as_deref(), Some("b"));
        assert_eq!(iter.len(), ABBREVIATION_COUNT - 28);
        assert_eq!(iter.count(), ABBREVIATION_COUNT - 28);
    }

    #[test]
    fn sorted_and_unique() {
        let all = Abbreviations::new().collect::<Vec<_>>();
        let mut sorted = all.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(all, sorted);
    }

    #[test]
    fn all_valid() {
        assert!(Abbreviations::new().all(|x| is_abbreviation(&x)));
        assert!(!is_abbreviation(""));
        assert!(!is_abbreviation("abc"));
        assert!(!is_abbreviation("A"));
        assert!(!is_abbreviation("ä"));
    }
}

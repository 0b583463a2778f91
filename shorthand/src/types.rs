//! Value types shared by every stage of the computation.
use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul, Sub},
};

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A lowercase dictionary word, or up to three of them joined by single spaces.
pub type Text = SmolStr;

/// A one- or two-letter lowercase abbreviation.
pub type CompressedText = SmolStr;

/// Number of times a [`Text`] was seen in the corpus.
pub type Frequency = u32;

/// Projected keystroke savings of an abbreviation/expansion pair.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Score(pub f64);

impl Score {
    /// No savings at all.
    pub const ZERO: Self = Score(0.0);

    /// The raw score.
    #[inline(always)]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Add for Score {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Score(self.0 + rhs.0)
    }
}

impl Sub for Score {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Score(self.0 - rhs.0)
    }
}

impl Mul for Score {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Score(self.0 * rhs.0)
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Score>>(iter: I) -> Self {
        iter.fold(Score::ZERO, Add::add)
    }
}

//! Typing effort of a word under a fixed two-handed keyboard model.
//!
//! The model is purely additive: every character pays a flat baseline, keys
//! off the home row and diacritics cost extra, and typing two consecutive
//! characters with the same hand costs more than alternating hands. Hitting
//! the very same key twice is cheaper than alternating.

/// Characters typed with the left hand. Everything else counts as right hand.
pub const LEFT_HAND: &str = "qwertasdfgzxcvbäáé";
/// Characters that need a dead key or a modifier.
pub const SPECIAL: &str = "áéíóúäëüïößñ";
/// Characters on the row above the home row.
pub const TOP_ROW: &str = "qwertyuiopéúíó";
/// Characters on the row below the home row.
pub const BOTTOM_ROW: &str = "zxcvbnmä";

const SPECIAL_COST: f64 = 1.5;
const BASE_COST: f64 = 0.8;
const SAME_HAND_COST: f64 = 0.4;
const REPEAT_COST: f64 = -0.1;
const BOTTOM_ROW_COST: f64 = 0.3;
const TOP_ROW_COST: f64 = 0.1;

/// The hand a key is typed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    /// qwert, asdfg, zxcvb and the diacritics next to them
    Left,
    /// everything else
    Right,
}

impl Hand {
    /// Hand typing `ch`.
    #[inline(always)]
    pub fn of(ch: char) -> Hand {
        if LEFT_HAND.contains(ch) {
            Hand::Left
        } else {
            Hand::Right
        }
    }
}

/// Returns the effort of typing `word`.
///
/// Any string scores; the result grows with every character typed and is not
/// normalised by length.
pub fn difficulty(word: &str) -> f64 {
    let mut cost = 0.0;
    let mut last: Option<(char, Hand)> = None;

    for ch in word.chars() {
        if SPECIAL.contains(ch) {
            cost += SPECIAL_COST;
        }
        cost += BASE_COST;

        let hand = Hand::of(ch);
        match last {
            Some((last_ch, _)) if last_ch == ch => cost += REPEAT_COST,
            Some((_, last_hand)) if last_hand == hand => cost += SAME_HAND_COST,
            _ => {}
        }
        last = Some((ch, hand));

        if BOTTOM_ROW.contains(ch) {
            cost += BOTTOM_ROW_COST;
        } else if TOP_ROW.contains(ch) {
            cost += TOP_ROW_COST;
        }
    }

    cost
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn empty() {
        assert_close(difficulty(""), 0.0);
    }

    #[test]
    fn single_keys() {
        assert_close(difficulty("a"), 0.8);
        assert_close(difficulty("q"), 0.9);
        assert_close(difficulty("z"), 1.1);
        assert_close(difficulty("ä"), 2.6);
        assert_close(difficulty("é"), 2.4);
    }

    #[test]
    fn repeat_beats_alternation() {
        assert_close(difficulty("aa"), 1.5);
        assert_close(difficulty("as"), 2.0);
        assert!(difficulty("aa") < difficulty("as"));
    }

    #[test]
    fn alternating_hands() {
        // a (left), j (right), s (left): no same-hand cost
        assert_close(difficulty("ajs"), 2.4);
        // a, s, d: both transitions stay on the left hand
        assert_close(difficulty("asd"), 3.2);
    }

    #[test]
    fn words() {
        // q .9, u .9, i 1.3, c 1.1, k .8
        assert_close(difficulty("quick"), 5.0);
        // space counts as right hand, like any key not on the left
        assert_close(difficulty("k k"), 0.8 + 1.2 + 1.2);
    }

    #[test]
    fn hand_tracks_every_character() {
        assert_eq!(Hand::of('t'), Hand::Left);
        assert_eq!(Hand::of('y'), Hand::Right);
        assert_eq!(Hand::of('1'), Hand::Right);
        // the repeated key still moves the hand state along
        assert_close(difficulty("aas"), 0.8 + 0.7 + 1.2);
    }
}

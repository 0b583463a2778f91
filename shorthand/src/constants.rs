pub const MAX_CHAIN_WORDS: usize = 3;
pub const MIN_FREQUENCY: u32 = 2;
pub const DEFAULT_PENALTY: f64 = 0.2;
pub const DEFAULT_N_BEST: usize = 4;
pub const ABBREVIATION_FIRST: u8 = b'a';
pub const ABBREVIATION_LAST: u8 = b'z';
pub const ABBREVIATION_ALPHABET: std::ops::RangeInclusive<u8> = ABBREVIATION_FIRST..=ABBREVIATION_LAST;

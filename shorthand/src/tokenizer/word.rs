use unic_segment::WordBoundIndices;

/// Letters, digits and `_`.
#[inline(always)]
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Iterator over the maximal runs of word characters in a text.
///
/// Runs are read across the Unicode word segments of the text, so an
/// apostrophe or a dot inside a segment (`don't`, `e.g`, `3.14`) still ends
/// a word.
pub struct Words<'a> {
    text: &'a str,
    segments: WordBoundIndices<'a>,
    segment: Option<(usize, std::str::CharIndices<'a>)>,
    start: Option<usize>,
}

impl<'a> Words<'a> {
    /// Splits `text`.
    pub fn new(text: &'a str) -> Words<'a> {
        Words {
            text,
            segments: WordBoundIndices::new(text),
            segment: None,
            start: None,
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            if self.segment.is_none() {
                match self.segments.next() {
                    Some((offset, segment)) => {
                        self.segment = Some((offset, segment.char_indices()))
                    }
                    None => return self.start.take().map(|start| &self.text[start..]),
                }
            }

            let next = match &mut self.segment {
                Some((offset, chars)) => chars.next().map(|(i, ch)| (*offset + i, ch)),
                None => None,
            };

            match next {
                Some((at, ch)) if is_word_char(ch) => {
                    if self.start.is_none() {
                        self.start = Some(at);
                    }
                }
                Some((at, _)) => {
                    if let Some(start) = self.start.take() {
                        return Some(&self.text[start..at]);
                    }
                }
                None => self.segment = None,
            }
        }
    }
}

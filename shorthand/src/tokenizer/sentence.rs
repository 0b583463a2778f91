const TERMINALS: &[char] = &['.', '!', '?', ':'];
const PARAGRAPH_BREAK: &str = "\n\n";

/// Iterator over the sentences of a text.
///
/// A sentence ends after `.`, `!`, `?` or `:` when whitespace follows; the
/// whole whitespace run is dropped. A blank line (`\n\n`) ends a sentence
/// anywhere. Terminal punctuation stays with its sentence. Splitting a run of
/// blank lines can yield empty sentences.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    rest: Option<&'a str>,
}

impl<'a> Sentences<'a> {
    /// Splits `text`.
    pub fn new(text: &'a str) -> Sentences<'a> {
        Sentences { rest: Some(text) }
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        let mut after_terminal = false;

        for (i, ch) in rest.char_indices() {
            if after_terminal && ch.is_whitespace() {
                let end = rest[i..]
                    .find(|c: char| !c.is_whitespace())
                    .map(|n| i + n)
                    .unwrap_or_else(|| rest.len());
                self.rest = Some(&rest[end..]);
                return Some(&rest[..i]);
            }

            if rest[i..].starts_with(PARAGRAPH_BREAK) {
                self.rest = Some(&rest[i + PARAGRAPH_BREAK.len()..]);
                return Some(&rest[..i]);
            }

            after_terminal = TERMINALS.contains(&ch);
        }

        self.rest = None;
        Some(rest)
    }
}

use serde::Serialize;

/// An inclusive range of character code points, used to define the
/// set of characters a [`StringSyntax`](crate::StringSyntax) accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharRange {
    pub low: u32,
    pub high: u32,
}

impl CharRange {
    /// Check whether a character's code point falls inside this range
    pub fn contains(&self, c: char) -> bool {
        let code = c as u32;
        code >= self.low && code <= self.high
    }
}

/// Build an inclusive code-point range from its lowest and highest
/// characters, e.g. `char_range('0', '9')` for ASCII digits.
pub fn char_range(low: char, high: char) -> CharRange {
    CharRange {
        low: low as u32,
        high: high as u32,
    }
}

/// The character range covering the ASCII digits 0-9
pub(crate) const DIGITS: CharRange = CharRange { low: 48, high: 57 };

/// Scan the longest run of characters at `index` (a character offset)
/// drawn from the allowed ranges.
///
/// Returns the run if at least one character matched, an empty string if
/// the cursor sits at the end of the input (an empty run there can always
/// be extended by appending), and `None` if the character at `index` is
/// outside every allowed range.
pub(crate) fn scan_class_run(
    value: &str,
    index: usize,
    allowed_ranges: &[CharRange],
) -> Option<String> {
    let mut chars = value.chars().skip(index).peekable();
    let mut run = String::new();

    while let Some(&next) = chars.peek() {
        if !allowed_ranges.iter().any(|r| r.contains(next)) {
            break;
        }
        run.push(next);
        chars.next();
    }

    if !run.is_empty() {
        Some(run)
    } else if chars.peek().is_none() {
        Some(String::new())
    } else {
        None
    }
}

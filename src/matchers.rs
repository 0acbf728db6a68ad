use crate::errors::SyntaxError;
use crate::part::{Suggestion, SyntaxMatch};
use crate::range::{CharRange, DIGITS, scan_class_run};

/// Matches one fixed literal string, character by character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedStringSyntax {
    literal: String,
}

impl FixedStringSyntax {
    pub fn new(literal: impl Into<String>) -> Self {
        FixedStringSyntax {
            literal: literal.into(),
        }
    }

    /// Compare the literal against the input from `index`, one character
    /// per position, until either side runs out or a character differs.
    pub fn match_at(&self, value: &str, index: usize) -> Option<SyntaxMatch> {
        let mut input = value.chars().skip(index);
        let mut consumed = 0;

        for expected in self.literal.chars() {
            match input.next() {
                Some(next) if next == expected => consumed += 1,
                // Mismatch before either side was exhausted
                Some(_) => return None,
                // Input ended first: a valid prefix so far
                None => return Some(SyntaxMatch::partial(consumed)),
            }
        }

        Some(SyntaxMatch::full(consumed))
    }

    /// Always suggests the entire literal, regardless of how much of it
    /// is already present at `index`; the composer is responsible for
    /// aligning suggestions against already-typed text.
    pub fn suggestions(&self, _value: &str, _index: usize) -> Vec<Suggestion> {
        vec![Suggestion::concrete(self.literal.clone())]
    }
}

/// Matches the longest run of characters drawn from a set of allowed
/// code-point ranges. Any non-empty run is a full match; an empty run at
/// the end of the input is a partial match awaiting more characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringSyntax {
    allowed_ranges: Vec<CharRange>,
    template_label: String,
}

impl StringSyntax {
    pub fn new(allowed_ranges: Vec<CharRange>, template_label: impl Into<String>) -> Self {
        StringSyntax {
            allowed_ranges,
            template_label: template_label.into(),
        }
    }

    /// A `StringSyntax` preset over the ASCII digits, labelled "number"
    pub fn number() -> Self {
        StringSyntax::new(vec![DIGITS], "number")
    }

    pub fn match_at(&self, value: &str, index: usize) -> Option<SyntaxMatch> {
        let run = scan_class_run(value, index, &self.allowed_ranges)?;

        // Any non-empty run is already a complete string of this class;
        // empty space at the end of the input is a potential one.
        Some(if run.is_empty() {
            SyntaxMatch::partial(0)
        } else {
            SyntaxMatch::full(run.chars().count())
        })
    }

    pub fn suggestions(&self, value: &str, index: usize) -> Vec<Suggestion> {
        match scan_class_run(value, index, &self.allowed_ranges) {
            Some(run) if !run.is_empty() => vec![Suggestion::concrete(run)],
            _ => vec![Suggestion::template(&self.template_label)],
        }
    }
}

/// Matches exactly N consecutive digit characters.
///
/// A shorter digit run is a partial match awaiting the rest; a longer run
/// can never satisfy the exact width, so it is no match at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLengthNumberSyntax {
    required_length: usize,
}

impl FixedLengthNumberSyntax {
    pub fn new(required_length: usize) -> Result<Self, SyntaxError> {
        if required_length == 0 {
            return Err(SyntaxError::ZeroLengthNumber);
        }
        Ok(FixedLengthNumberSyntax { required_length })
    }

    pub fn match_at(&self, value: &str, index: usize) -> Option<SyntaxMatch> {
        let run = scan_class_run(value, index, &[DIGITS])?;
        let consumed = run.chars().count();

        if consumed == self.required_length {
            Some(SyntaxMatch::full(consumed))
        } else if consumed < self.required_length {
            Some(SyntaxMatch::partial(consumed))
        } else {
            // Too many digits - not a match
            None
        }
    }

    /// Suggests the typed digits right-padded with zeroes up to the
    /// required width, or a "{N-digit number}" template if none are
    /// present yet.
    pub fn suggestions(&self, value: &str, index: usize) -> Vec<Suggestion> {
        match scan_class_run(value, index, &[DIGITS]) {
            Some(run) if !run.is_empty() => {
                let padding = self.required_length.saturating_sub(run.chars().count());
                let extended = format!("{}{}", run, "0".repeat(padding));
                vec![Suggestion::concrete(extended)]
            }
            _ => vec![Suggestion::template(format!(
                "{}-digit number",
                self.required_length
            ))],
        }
    }
}

/// An alternation over a fixed set of literal strings (e.g. method names).
///
/// Options are sorted longest-first once at construction, stably, so that
/// when one option is a prefix of another (e.g. "PO" and "POST") the
/// longer, more specific option wins wherever both match fully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringOptionsSyntax {
    option_matchers: Vec<FixedStringSyntax>,
}

impl StringOptionsSyntax {
    pub fn new<I, S>(options: I) -> Result<Self, SyntaxError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(SyntaxError::EmptyOptions);
        }

        // Stable sort: longest first, original order kept between
        // options of equal length
        options.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        Ok(StringOptionsSyntax {
            option_matchers: options.into_iter().map(FixedStringSyntax::new).collect(),
        })
    }

    /// The first full match in longest-first branch order, else the first
    /// partial match, else no match.
    pub fn match_at(&self, value: &str, index: usize) -> Option<SyntaxMatch> {
        let matches: Vec<SyntaxMatch> = self
            .option_matchers
            .iter()
            .filter_map(|m| m.match_at(value, index))
            .collect();

        matches
            .iter()
            .copied()
            .find(SyntaxMatch::is_full)
            .or_else(|| matches.first().copied())
    }

    /// Concatenates the suggestions of every branch that still matches,
    /// in branch order. Overlapping branches can produce duplicate
    /// suggestions; these are deliberately not deduplicated.
    pub fn suggestions(&self, value: &str, index: usize) -> Vec<Suggestion> {
        self.option_matchers
            .iter()
            .filter(|m| m.match_at(value, index).is_some())
            .flat_map(|m| m.suggestions(value, index))
            .collect()
    }
}

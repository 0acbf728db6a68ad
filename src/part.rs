use serde::Serialize;

use crate::matchers::{
    FixedLengthNumberSyntax, FixedStringSyntax, StringOptionsSyntax, StringSyntax,
};

/// Whether a syntax part matched completely or is still awaiting input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// The end of the input was reached without breaking any rules, but
    /// the part is not complete; appending content could finish it.
    Partial,
    /// The part is completely present and valid as-is. Note that the
    /// exact end of the input should be at least a partial match for all
    /// syntax parts, since content can always be appended there.
    Full,
}

/// The outcome of matching one syntax part at a position in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyntaxMatch {
    pub kind: MatchKind,

    /// How many characters were matched successfully, counting from the
    /// queried index.
    pub consumed: usize,
}

impl SyntaxMatch {
    pub(crate) fn full(consumed: usize) -> Self {
        SyntaxMatch {
            kind: MatchKind::Full,
            consumed,
        }
    }

    pub(crate) fn partial(consumed: usize) -> Self {
        SyntaxMatch {
            kind: MatchKind::Partial,
            consumed,
        }
    }

    /// True for a full match
    pub fn is_full(&self) -> bool {
        self.kind == MatchKind::Full
    }
}

/// A suggestion for some content to insert.
///
/// Suggestions from adjacent parts may be concatenated by directly
/// concatenating their `show_as` and `value` strings, so each suggestion
/// must stand alone syntactically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// The text shown as the autocompleted example
    pub show_as: String,

    /// The text inserted if the suggestion is selected.
    ///
    /// `None` when the suggestion is a template (e.g. "{number}") for
    /// which no concrete value can be provided yet; the surface should
    /// prompt for input instead of inserting anything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Suggestion {
    pub(crate) fn concrete(text: impl Into<String>) -> Self {
        let text = text.into();
        Suggestion {
            show_as: text.clone(),
            value: Some(text),
        }
    }

    pub(crate) fn template(label: impl AsRef<str>) -> Self {
        Suggestion {
            show_as: format!("{{{}}}", label.as_ref()),
            value: None,
        }
    }
}

/// The closed set of syntax part kinds a grammar can be composed from.
///
/// Each variant wraps one matcher type; a composer can hold a sequence of
/// these and thread a single absolute cursor across them, calling
/// [`match_at`](SyntaxPart::match_at) and accumulating suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxPart {
    FixedString(FixedStringSyntax),
    String(StringSyntax),
    FixedLengthNumber(FixedLengthNumberSyntax),
    StringOptions(StringOptionsSyntax),
}

impl SyntaxPart {
    /// A part matching any run of ASCII digits, suggesting "{number}"
    pub fn number() -> Self {
        SyntaxPart::String(StringSyntax::number())
    }

    /// Check whether this part matches at `index`, or could match if more
    /// text were appended.
    ///
    /// Returns `None` if the input cannot match here at all, a full match
    /// if the part is completely present (consuming everything it can),
    /// and a partial match if the end of the input was reached without
    /// breaking any rules but without completing the part.
    pub fn match_at(&self, value: &str, index: usize) -> Option<SyntaxMatch> {
        match self {
            SyntaxPart::FixedString(part) => part.match_at(value, index),
            SyntaxPart::String(part) => part.match_at(value, index),
            SyntaxPart::FixedLengthNumber(part) => part.match_at(value, index),
            SyntaxPart::StringOptions(part) => part.match_at(value, index),
        }
    }

    /// Given a full or partial match at `index`, list the values that
    /// would make this part match fully.
    ///
    /// Don't call this without a match; the behaviour is undefined.
    pub fn suggestions(&self, value: &str, index: usize) -> Vec<Suggestion> {
        match self {
            SyntaxPart::FixedString(part) => part.suggestions(value, index),
            SyntaxPart::String(part) => part.suggestions(value, index),
            SyntaxPart::FixedLengthNumber(part) => part.suggestions(value, index),
            SyntaxPart::StringOptions(part) => part.suggestions(value, index),
        }
    }
}

impl From<FixedStringSyntax> for SyntaxPart {
    fn from(part: FixedStringSyntax) -> Self {
        SyntaxPart::FixedString(part)
    }
}

impl From<StringSyntax> for SyntaxPart {
    fn from(part: StringSyntax) -> Self {
        SyntaxPart::String(part)
    }
}

impl From<FixedLengthNumberSyntax> for SyntaxPart {
    fn from(part: FixedLengthNumberSyntax) -> Self {
        SyntaxPart::FixedLengthNumber(part)
    }
}

impl From<StringOptionsSyntax> for SyntaxPart {
    fn from(part: StringOptionsSyntax) -> Self {
        SyntaxPart::StringOptions(part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_preset_matches_digits() {
        let part = SyntaxPart::number();
        assert_eq!(part.match_at("12ab", 0), Some(SyntaxMatch::full(2)));
        assert_eq!(part.match_at("abc", 0), None);
    }

    #[test]
    fn test_dispatch_matches_wrapped_part() {
        let part: SyntaxPart = FixedStringSyntax::new("GET").into();
        assert_eq!(part.match_at("GET", 0), Some(SyntaxMatch::full(3)));
        assert_eq!(
            part.suggestions("GE", 0),
            vec![Suggestion::concrete("GET")]
        );
    }

    #[test]
    fn test_suggestion_serializes_for_the_autocomplete_surface() {
        let concrete = serde_json::to_value(Suggestion::concrete("GET")).unwrap();
        assert_eq!(concrete, serde_json::json!({ "showAs": "GET", "value": "GET" }));

        let template = serde_json::to_value(Suggestion::template("number")).unwrap();
        assert_eq!(template, serde_json::json!({ "showAs": "{number}" }));
    }
}

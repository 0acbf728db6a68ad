//! Incremental syntax matching and suggestion generation
//!
//! This crate provides the matching engine behind a typeahead filter bar:
//! a small family of composable matchers ("syntax parts") that decide
//! whether the text at a position in an input string is, or could become,
//! a valid instance of a grammar fragment, and that can produce concrete
//! autocomplete suggestions for completing it.
//!
//! # Matching
//!
//! Every part answers `match_at(value, index)` with one of three results:
//!
//! ```text
//! Some(Full { consumed })     The fragment is completely present
//! Some(Partial { consumed })  No rule broken yet, but input ran out
//! None                        The fragment cannot match here at all
//! ```
//!
//! The exact end of the input is a partial match for every part, since
//! more content can always be appended there. Matching is pure and only
//! looks at the input from `index` onwards; `index` and `consumed` are
//! both character offsets.
//!
//! # Suggestions
//!
//! After a non-absent match, `suggestions(value, index)` lists ways to
//! complete the fragment. A suggestion is either concrete (its `value`
//! can be inserted directly) or a template like `{number}` (no `value`;
//! the surface should prompt for input). Calling `suggestions` where
//! `match_at` returns `None` is a contract violation.
//!
//! # Parts
//!
//! - [`FixedStringSyntax`] - one literal string
//! - [`StringSyntax`] - a run of characters from allowed ranges, with
//!   [`StringSyntax::number`] as the digit-run preset
//! - [`FixedLengthNumberSyntax`] - exactly N digits
//! - [`StringOptionsSyntax`] - alternation over literals, longest first
//!
//! # Examples
//!
//! ```
//! use filter_syntax::{MatchKind, StringOptionsSyntax};
//!
//! let method = StringOptionsSyntax::new(["GET", "POST", "PATCH"]).unwrap();
//!
//! let matched = method.match_at("PATCH", 0).unwrap();
//! assert_eq!(matched.kind, MatchKind::Full);
//! assert_eq!(matched.consumed, 5);
//!
//! let partial = method.match_at("PA", 0).unwrap();
//! assert_eq!(partial.kind, MatchKind::Partial);
//!
//! let completions: Vec<_> = method
//!     .suggestions("P", 0)
//!     .into_iter()
//!     .map(|s| s.show_as)
//!     .collect();
//! assert_eq!(completions, vec!["PATCH", "POST"]);
//! ```

pub mod errors;
pub mod matchers;
pub mod part;
pub mod range;

pub use errors::SyntaxError;
pub use matchers::{
    FixedLengthNumberSyntax, FixedStringSyntax, StringOptionsSyntax, StringSyntax,
};
pub use part::{MatchKind, Suggestion, SyntaxMatch, SyntaxPart};
pub use range::{CharRange, char_range};

/*!
A single-line matcher for a small extended-regex subset.

## Supported syntax
- Literal characters and the wildcard `.`
- Shorthand classes `\d` (ASCII digit) and `\w` (word character, `[A-Za-z0-9_]`)
- Bracket classes `[abc]` and their negation `[^abc]`
- Start/end anchors `^` and `$`
- The quantifiers `+` (one or more, greedy) and `?` (zero or one)
- Parenthesized alternation `(cat|dog)`

Given one pattern and one line, the matcher answers a single yes/no
question: does the pattern match somewhere in the line (or, for anchored
patterns, at the line boundary)? It never reports match spans or capture
groups.
*/
//! ## Usage
//! ```
//! use mg_matcher::matcher::LineMatcher;
//!
//! let matcher = LineMatcher::builder("(cat|dog)s").build();
//! assert!(matcher.is_match("dogs"));
//! assert!(matcher.is_match("cows") == false);
//!
//! let matcher = LineMatcher::builder("a+b").case_insensitive(true).build();
//! assert!(matcher.is_match("xAAB"));
//! ```
/*!
## Matching model
The pattern is reinterpreted positionally by a recursive backtracking
engine; there is no compilation step and no cross-call state. `+` is greedy
with backtracking (the longest run is tried first), `?` prefers consuming
zero bytes. An unbalanced group like `(ab` is a non-match, never an error:
every outcome is a boolean.

Backtracking over nested quantifiers and alternations can combine
multiplicatively, so adversarial patterns have worst-case exponential
matching time. The engine does not bound or time out the search; callers
that accept untrusted patterns should impose their own limits.

## Crate features
*/
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]

pub mod matcher;

#[cfg(test)]
mod tests {
    use crate::matcher::{LineMatcher, MatchConfig};

    #[test]
    fn readme() {
        let matcher = LineMatcher::builder("(cat|dog)s").build();
        assert!(matcher.is_match("dogs"));
        assert!(matcher.is_match("cats"));
        assert!(matcher.is_match("cows") == false);

        let matcher = LineMatcher::builder("^log").build();
        assert!(matcher.is_match("log message"));
        assert!(matcher.is_match("message log") == false);

        let matcher = LineMatcher::with_config(
            "a+b",
            MatchConfig::builder().case_insensitive(true).build(),
        );
        assert!(matcher.is_match("xAAB"));
    }

    #[test]
    fn purity() {
        let matcher = LineMatcher::builder("a?b+c").build();
        for _ in 0..3 {
            assert!(matcher.is_match("zabbc"));
            assert!(matcher.is_match("zac") == false);
        }
    }
}

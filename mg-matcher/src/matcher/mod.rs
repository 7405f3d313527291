//! The line matcher and its configuration.
//!
//! [`LineMatcher`] inspects the pattern's shape once at build time and
//! routes each [`is_match`](LineMatcher::is_match) call either to a
//! byte-scan fast path (digit shorthand, bracket classes, anchors, plain
//! patterns) or to the general recursive engine.
use bon::bon;

pub use config::{MatchConfig, MatchConfigBuilder};

mod class;
mod config;
mod engine;
mod pattern;

use crate::matcher::{
    engine::Engine,
    pattern::{classify, Shape},
};

/// A compiled single-line matcher for an extended-regex subset pattern.
///
/// ## Example
/// ```
/// use mg_matcher::matcher::LineMatcher;
///
/// let matcher = LineMatcher::builder("a+b?c").build();
/// assert!(matcher.is_match("xxaaac"));
/// assert!(matcher.is_match("xc") == false);
/// ```
///
/// Matching is unanchored by default; bind it to the line boundaries with
/// `^`/`$`. The matcher borrows the pattern and holds no other state, so
/// it can be reused across any number of lines.
pub struct LineMatcher<'p> {
    pattern: &'p [u8],
    shape: Shape<'p>,
    engine: Engine,
    config: MatchConfig,
}

#[bon]
impl<'p> LineMatcher<'p> {
    #[builder]
    pub fn new(
        #[builder(start_fn)] pattern: &'p str,

        /// Match ASCII letters case-insensitively. See
        /// [`MatchConfigBuilder::case_insensitive`].
        #[builder(default = false)]
        case_insensitive: bool,

        /// Match metacharacter-free patterns as a contiguous substring
        /// instead of as a set of acceptable bytes. See
        /// [`MatchConfigBuilder::literal_substring`].
        #[builder(default = false)]
        literal_substring: bool,
    ) -> Self {
        Self::with_config(
            pattern,
            MatchConfig {
                case_insensitive,
                literal_substring,
            },
        )
    }
}

impl<'p> LineMatcher<'p> {
    /// Use [`LineMatcher::builder()`] if you don't have a [`MatchConfig`] at hand.
    pub fn with_config(pattern: &'p str, config: MatchConfig) -> Self {
        let pattern = pattern.as_bytes();
        Self {
            pattern,
            shape: classify(pattern),
            engine: Engine::new(config.case_insensitive),
            config,
        }
    }

    /// Whether the pattern matches somewhere in `haystack` (or at the line
    /// boundary, for `^`/`$` patterns).
    ///
    /// Total over arbitrary byte input: always terminates with a boolean,
    /// never panics and never errors. An unbalanced group is a non-match.
    pub fn is_match(&self, haystack: impl AsRef<[u8]>) -> bool {
        let line = haystack.as_ref();
        let fold = self.config.case_insensitive;
        match self.shape {
            Shape::Empty => true,
            Shape::AnyDigit => class::find_digit(line).is_some(),
            Shape::AnyOf(set) => class::find_in_set(line, set, fold).is_some(),
            Shape::NoneOf(set) => class::find_outside_set(line, set, fold).is_some(),
            Shape::Prefix(prefix) => class::starts_with(line, prefix, fold),
            Shape::Suffix(suffix) => class::ends_with(line, suffix, fold),
            Shape::Plain(pattern) => {
                if self.config.literal_substring {
                    class::find_substring(line, pattern, fold).is_some()
                } else {
                    class::find_in_set(line, pattern, fold).is_some()
                }
            }
            Shape::General => self.engine.match_pattern(line, self.pattern),
        }
    }
}

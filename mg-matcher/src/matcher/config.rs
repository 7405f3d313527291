use bon::Builder;

/// Match options shared by every pattern shape.
///
/// ```
/// use mg_matcher::matcher::{LineMatcher, MatchConfig};
///
/// let config = MatchConfig::builder().case_insensitive(true).build();
/// let matcher = LineMatcher::with_config("end$", config);
/// assert!(matcher.is_match("THE END"));
/// ```
#[derive(Builder, Clone, Copy, Debug)]
pub struct MatchConfig {
    /// Match ASCII letters case-insensitively.
    ///
    /// Folding is ASCII-only: the engine works on bytes and the pattern
    /// syntax has no Unicode-aware classes.
    #[builder(default = false)]
    pub(crate) case_insensitive: bool,

    /// Match a metacharacter-free pattern as a contiguous substring.
    ///
    /// By default such a pattern matches when the line contains *any one*
    /// of its bytes (`cat` matches `tac`), a quirk kept for compatibility.
    /// Enabling this replaces that check with a substring search.
    #[builder(default = false)]
    pub(crate) literal_substring: bool,
}

impl Default for MatchConfig {
    /// Use [`MatchConfigBuilder`] for more options.
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = MatchConfig::default();
        assert!(config.case_insensitive == false);
        assert!(config.literal_substring == false);
    }
}

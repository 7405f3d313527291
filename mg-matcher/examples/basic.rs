use mg_matcher::matcher::{LineMatcher, MatchConfig};

fn main() {
    let matcher = LineMatcher::builder("\\d").build();
    assert!(matcher.is_match("abc123"));

    let matcher = LineMatcher::builder("(cat|dog)s").build();
    assert!(matcher.is_match("dogs"));
    assert!(matcher.is_match("cows") == false);

    let matcher = LineMatcher::builder("ab?c").build();
    assert!(matcher.is_match("ac"));
    assert!(matcher.is_match("abc"));

    let matcher = LineMatcher::with_config(
        "hello",
        MatchConfig::builder()
            .case_insensitive(true)
            .literal_substring(true)
            .build(),
    );
    assert!(matcher.is_match("Why, HELLO there"));
    // Matching is unanchored by default; bind it with `^`/`$` when needed.
}

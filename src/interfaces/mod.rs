use crate::regexp_cache::InvalidRegexError;

/// Internal pattern matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns whether the given number (ASCII digits with an optional
    /// leading plus sign) matches the caller-supplied pattern as a whole.
    fn match_custom_pattern(&self, number: &str, pattern: &str) -> Result<bool, InvalidRegexError>;
}

//! Search query sanitization.
//!
//! The backend treats URL schemes and a handful of delimiter characters as
//! syntax, so user input is scrubbed before it is placed in `samToolsSearch`.

/// URL scheme prefixes removed wherever they appear in the input.
const SCHEMES: [&str; 2] = ["http://", "https://"];

/// Characters replaced by a single space each.
const DELIMITERS: [char; 7] = ['&', '|', '{', '}', '^', '\\', ':'];

/// A sanitized free-text search query.
///
/// Construct one with [`SearchQuery::sanitize`]; the inner string is exactly
/// what is transmitted as `samToolsSearch`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Sanitizes raw user input.
    ///
    /// Every occurrence of `http://` and `https://` is removed, then each of
    /// `& | { } ^ \ :` is replaced with a space. Nothing is trimmed, so the
    /// character count changes only by the removed schemes.
    ///
    /// # Examples
    ///
    /// ```
    /// use samlookup::domain::SearchQuery;
    ///
    /// let query = SearchQuery::sanitize("https://acme.com");
    /// assert_eq!(query.as_str(), "acme.com");
    ///
    /// let query = SearchQuery::sanitize("A&B|C");
    /// assert_eq!(query.as_str(), "A B C");
    /// ```
    #[must_use]
    pub fn sanitize(raw: &str) -> Self {
        let without_schemes = SCHEMES
            .iter()
            .fold(raw.to_string(), |acc, scheme| acc.replace(scheme, ""));

        let sanitized = without_schemes
            .chars()
            .map(|c| if DELIMITERS.contains(&c) { ' ' } else { c })
            .collect();

        Self(sanitized)
    }

    /// The sanitized query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if nothing but whitespace is left.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

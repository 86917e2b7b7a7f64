//! Product catalog search and rating helpers.

/// Number of newest reviews attached to each product in a listing.
pub const RECENT_REVIEW_LIMIT: i64 = 5;

/// A normalized catalog search term.
///
/// The raw `search` query parameter is trimmed; an empty or missing value
/// means "no filter" and the whole catalog is listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(Option<String>);

impl SearchQuery {
    pub fn new(raw: Option<&str>) -> Self {
        let term = raw.map(str::trim).filter(|t| !t.is_empty());
        Self(term.map(str::to_string))
    }

    /// The trimmed term, or `None` for an unfiltered listing.
    pub fn term(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// `ILIKE` pattern matching the term as a literal substring.
    ///
    /// `%`, `_` and the escape character itself are escaped with `\`, which is
    /// PostgreSQL's default `LIKE` escape.
    pub fn like_pattern(&self) -> Option<String> {
        self.term().map(|term| {
            let mut pattern = String::with_capacity(term.len() + 2);
            pattern.push('%');
            for c in term.chars() {
                if matches!(c, '%' | '_' | '\\') {
                    pattern.push('\\');
                }
                pattern.push(c);
            }
            pattern.push('%');
            pattern
        })
    }
}

/// Round an aggregated average rating to one decimal place.
///
/// `AVG()` over zero rows is `NULL`, which maps to `0.0`.
pub fn round_average(avg: Option<f64>) -> f64 {
    match avg {
        Some(value) if value.is_finite() => (value * 10.0).round() / 10.0,
        _ => 0.0,
    }
}

//! Track search request parsing and validation.
//!
//! Raw query-string values are collected into [`SearchParams`] and turned
//! into a [`SearchRequest`] before any database work happens. Everything the
//! repository layer receives has already been validated here.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Query parameter names
// ---------------------------------------------------------------------------

pub const PARAM_SEARCH: &str = "search";
pub const PARAM_LIMIT: &str = "limit";
pub const PARAM_OFFSET: &str = "offset";

/// Escape character used in `LIKE ... ESCAPE` clauses built from a term.
pub const LIKE_ESCAPE: char = '\\';

// ---------------------------------------------------------------------------
// Raw parameters
// ---------------------------------------------------------------------------

/// Unvalidated `search` / `limit` / `offset` values as sent by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub search: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl SearchParams {
    /// Collect parameters from decoded query-string pairs.
    ///
    /// When a key is repeated only its first value is kept. Unknown keys are
    /// ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                PARAM_SEARCH => &mut params.search,
                PARAM_LIMIT => &mut params.limit,
                PARAM_OFFSET => &mut params.offset,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }
}

// ---------------------------------------------------------------------------
// Validated request
// ---------------------------------------------------------------------------

/// Which slice of the ordered result set to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Every matching row.
    All,
    /// The first `limit` rows.
    Limit { limit: i64 },
    /// `limit` rows starting at position `offset`.
    LimitOffset { limit: i64, offset: i64 },
}

impl Page {
    /// Combine the parsed `limit` and `offset`.
    ///
    /// An offset without a limit selects the full result set.
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        match (limit, offset) {
            (None, _) => Page::All,
            (Some(limit), None) => Page::Limit { limit },
            (Some(limit), Some(offset)) => Page::LimitOffset { limit, offset },
        }
    }

    pub fn limit(&self) -> Option<i64> {
        match *self {
            Page::All => None,
            Page::Limit { limit } | Page::LimitOffset { limit, .. } => Some(limit),
        }
    }

    pub fn offset(&self) -> Option<i64> {
        match *self {
            Page::LimitOffset { offset, .. } => Some(offset),
            _ => None,
        }
    }
}

/// A validated track search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    term: String,
    page: Page,
}

impl SearchRequest {
    /// The non-empty search term, exactly as the client sent it.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn page(&self) -> Page {
        self.page
    }
}

impl TryFrom<SearchParams> for SearchRequest {
    type Error = CoreError;

    fn try_from(params: SearchParams) -> Result<Self, Self::Error> {
        let term = match params.search {
            None => return Err(CoreError::Validation("no search parameter".into())),
            Some(term) if term.is_empty() => {
                return Err(CoreError::Validation("empty search criteria".into()))
            }
            Some(term) => term,
        };

        // Both values are checked before either is used.
        let limit = parse_count(PARAM_LIMIT, params.limit.as_deref())?;
        let offset = parse_count(PARAM_OFFSET, params.offset.as_deref())?;

        Ok(Self {
            term,
            page: Page::new(limit, offset),
        })
    }
}

/// Parse an optional non-negative integer parameter.
///
/// Absent and empty values both mean "not supplied".
fn parse_count(name: &str, raw: Option<&str>) -> Result<Option<i64>, CoreError> {
    let raw = match raw {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };
    match raw.parse::<i64>() {
        Ok(n) if n >= 0 => Ok(Some(n)),
        _ => Err(CoreError::Validation(format!(
            "{name} must be a non-negative integer, got '{raw}'"
        ))),
    }
}

// ---------------------------------------------------------------------------
// LIKE helpers
// ---------------------------------------------------------------------------

/// Escape `%`, `_` and the escape character so a term matches literally
/// inside a `LIKE` pattern declared with `ESCAPE '\'`.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

//! Query-string building blocks shared by the operation modules.
//!
//! Optional parameters are modeled as `Option` fields: `None` is omitted
//! from the query string entirely, while any `Some` value is sent, including
//! `Some(0)` and `Some(false)`.

use std::fmt::Display;

/// Key/value pairs appended to a request URL.
pub(crate) type QueryPairs = Vec<(&'static str, String)>;

/// Appends `key=value` when the value is set.
pub(crate) fn push_param<T: Display>(query: &mut QueryPairs, key: &'static str, value: Option<&T>) {
    if let Some(value) = value {
        query.push((key, value.to_string()));
    }
}

/// The `n`/`offset` pagination window accepted by the list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    /// Number of results to return; most endpoints accept 1–100.
    pub n: Option<i64>,
    /// Zero-based offset into the result set.
    pub offset: Option<i64>,
}

impl Pagination {
    /// A window of the first `n` results.
    #[must_use]
    pub const fn first(n: i64) -> Self {
        Self {
            n: Some(n),
            offset: None,
        }
    }

    pub(crate) fn push_to(self, query: &mut QueryPairs) {
        push_param(query, "n", self.n.as_ref());
        push_param(query, "offset", self.offset.as_ref());
    }

    pub(crate) fn to_query(self) -> QueryPairs {
        let mut query = QueryPairs::new();
        self.push_to(&mut query);
        query
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unset_params_are_omitted() {
        assert!(Pagination::default().to_query().is_empty());
    }

    #[test]
    fn test_zero_is_a_sendable_value() {
        let query = Pagination {
            n: Some(0),
            offset: None,
        }
        .to_query();
        assert_eq!(query, vec![("n", "0".to_string())]);
    }

    #[test]
    fn test_push_param_formats_bools() {
        let mut query = QueryPairs::new();
        push_param(&mut query, "featured", Some(&false));
        push_param(&mut query, "fuzzy", None::<&bool>);
        assert_eq!(query, vec![("featured", "false".to_string())]);
    }

    #[test]
    fn test_first_helper() {
        assert_eq!(
            Pagination::first(60).to_query(),
            vec![("n", "60".to_string())]
        );
    }
}

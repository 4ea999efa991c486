//! Typed form of the generic query body.
//!
//! Callers describe a search as a loosely-typed JSON map with up to four
//! recognized keys (`match`, `wildcard`, `sort`, `size`). This module parses
//! that map into a `QueryRequest` up front, so a shape mismatch in a
//! recognized key surfaces as a `MalformedQueryError` instead of failing
//! deep inside query construction. Unrecognized keys are ignored; callers
//! may send extra metadata alongside the query.

use serde_json::Value;

use crate::errors::SearchError;

/// Result cap applied when the body carries no `size` key.
pub const DEFAULT_SIZE: usize = 10;

/// A single-field condition: exact value for matches, substring for wildcards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    pub field: String,
    pub value: String,
}

/// Sort direction. Only these two values are recognized in query bodies;
/// anything else is dropped without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// The wire representation of the direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// A single-field sort clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSort {
    pub field: String,
    pub order: SortOrder,
}

/// A parsed query body.
///
/// All conditions are AND-ed into a single boolean must query. Clauses keep
/// the order they appeared in the body (matches before wildcards); repeated
/// field names accumulate without dedup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryRequest {
    /// Exact-term conditions.
    pub matches: Vec<FieldValue>,
    /// Substring-pattern conditions, matched as `*value*`.
    pub wildcards: Vec<FieldValue>,
    /// Sort clauses, applied in order.
    pub sorts: Vec<FieldSort>,
    /// Result cap override.
    pub size: Option<usize>,
}

impl QueryRequest {
    /// Parse a generic query body.
    ///
    /// Recognized keys must have the expected shape or the whole body is
    /// rejected with `MalformedQueryError`. Within a well-shaped key the
    /// original leniencies hold: empty-string values are no-ops, unknown
    /// sort directions are dropped, and a non-numeric `size` is ignored.
    pub fn from_value(body: &Value) -> Result<Self, SearchError> {
        let map = body
            .as_object()
            .ok_or_else(|| SearchError::malformed_query("query body must be a JSON object"))?;

        let mut request = QueryRequest::default();
        for (key, value) in map {
            match key.as_str() {
                "match" => request.matches = parse_field_values(value, "match")?,
                "wildcard" => request.wildcards = parse_field_values(value, "wildcard")?,
                "sort" => request.sorts = parse_sorts(value)?,
                "size" => {
                    // Fractional sizes truncate; non-numeric sizes keep the default.
                    if let Some(n) = value.as_f64() {
                        request.size = Some(n as usize);
                    }
                }
                _ => {}
            }
        }

        Ok(request)
    }

    /// The effective result cap.
    pub fn size_or_default(&self) -> usize {
        self.size.unwrap_or(DEFAULT_SIZE)
    }
}

/// Parse a `match` or `wildcard` key: an array of objects mapping fields to
/// string values. Empty-string values are skipped.
fn parse_field_values(value: &Value, key: &str) -> Result<Vec<FieldValue>, SearchError> {
    let entries = value.as_array().ok_or_else(|| {
        SearchError::malformed_query(format!("'{}' must be an array of objects", key))
    })?;

    let mut conditions = Vec::new();
    for entry in entries {
        let fields = entry.as_object().ok_or_else(|| {
            SearchError::malformed_query(format!("'{}' entries must be objects", key))
        })?;
        for (field, field_value) in fields {
            let text = field_value.as_str().ok_or_else(|| {
                SearchError::malformed_query(format!(
                    "'{}' value for field '{}' must be a string",
                    key, field
                ))
            })?;
            if !text.is_empty() {
                conditions.push(FieldValue {
                    field: field.clone(),
                    value: text.to_string(),
                });
            }
        }
    }

    Ok(conditions)
}

/// Parse the `sort` key: an array of objects mapping fields to directions.
/// Directions other than "asc" and "desc" are dropped silently.
fn parse_sorts(value: &Value) -> Result<Vec<FieldSort>, SearchError> {
    let entries = value
        .as_array()
        .ok_or_else(|| SearchError::malformed_query("'sort' must be an array of objects"))?;

    let mut sorts = Vec::new();
    for entry in entries {
        let fields = entry
            .as_object()
            .ok_or_else(|| SearchError::malformed_query("'sort' entries must be objects"))?;
        for (field, direction) in fields {
            let direction = direction.as_str().ok_or_else(|| {
                SearchError::malformed_query(format!(
                    "'sort' direction for field '{}' must be a string",
                    field
                ))
            })?;
            let order = match direction {
                "asc" => SortOrder::Asc,
                "desc" => SortOrder::Desc,
                _ => continue,
            };
            sorts.push(FieldSort {
                field: field.clone(),
                order,
            });
        }
    }

    Ok(sorts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_body() {
        let body = json!({
            "match": [{ "status": "active" }],
            "wildcard": [{ "name": "jo" }],
            "sort": [{ "name.raw": "asc" }],
            "size": 3
        });

        let request = QueryRequest::from_value(&body).unwrap();

        assert_eq!(
            request.matches,
            vec![FieldValue {
                field: "status".to_string(),
                value: "active".to_string()
            }]
        );
        assert_eq!(
            request.wildcards,
            vec![FieldValue {
                field: "name".to_string(),
                value: "jo".to_string()
            }]
        );
        assert_eq!(
            request.sorts,
            vec![FieldSort {
                field: "name.raw".to_string(),
                order: SortOrder::Asc
            }]
        );
        assert_eq!(request.size_or_default(), 3);
    }

    #[test]
    fn test_empty_string_value_is_noop() {
        let body = json!({ "match": [{ "f": "" }] });

        let request = QueryRequest::from_value(&body).unwrap();
        assert!(request.matches.is_empty());
    }

    #[test]
    fn test_unknown_sort_direction_dropped() {
        let body = json!({ "sort": [{ "f": "up" }, { "g": "desc" }] });

        let request = QueryRequest::from_value(&body).unwrap();
        assert_eq!(request.sorts.len(), 1);
        assert_eq!(request.sorts[0].field, "g");
        assert_eq!(request.sorts[0].order, SortOrder::Desc);
    }

    #[test]
    fn test_empty_sort_direction_dropped() {
        let body = json!({ "sort": [{ "f": "" }] });

        let request = QueryRequest::from_value(&body).unwrap();
        assert!(request.sorts.is_empty());
    }

    #[test]
    fn test_fractional_size_truncates() {
        let body = json!({ "size": 5.0 });
        let request = QueryRequest::from_value(&body).unwrap();
        assert_eq!(request.size, Some(5));

        let body = json!({ "size": 5.9 });
        let request = QueryRequest::from_value(&body).unwrap();
        assert_eq!(request.size, Some(5));
    }

    #[test]
    fn test_missing_size_defaults_to_ten() {
        let body = json!({ "match": [{ "f": "v" }] });

        let request = QueryRequest::from_value(&body).unwrap();
        assert_eq!(request.size, None);
        assert_eq!(request.size_or_default(), DEFAULT_SIZE);
    }

    #[test]
    fn test_non_numeric_size_ignored() {
        let body = json!({ "size": "ten" });

        let request = QueryRequest::from_value(&body).unwrap();
        assert_eq!(request.size, None);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let body = json!({
            "match": [{ "f": "v" }],
            "trace_id": "abc-123",
            "requested_by": "ops"
        });

        let request = QueryRequest::from_value(&body).unwrap();
        assert_eq!(request.matches.len(), 1);
    }

    #[test]
    fn test_repeated_fields_accumulate() {
        let body = json!({ "match": [{ "f": "a" }, { "f": "b" }] });

        let request = QueryRequest::from_value(&body).unwrap();
        assert_eq!(request.matches.len(), 2);
        assert_eq!(request.matches[0].value, "a");
        assert_eq!(request.matches[1].value, "b");
    }

    #[test]
    fn test_non_object_body_rejected() {
        let body = json!(["match"]);

        let result = QueryRequest::from_value(&body);
        assert!(matches!(
            result,
            Err(SearchError::MalformedQueryError(_))
        ));
    }

    #[test]
    fn test_match_not_array_rejected() {
        let body = json!({ "match": { "f": "v" } });

        let result = QueryRequest::from_value(&body);
        assert!(matches!(
            result,
            Err(SearchError::MalformedQueryError(_))
        ));
    }

    #[test]
    fn test_match_non_string_value_rejected() {
        let body = json!({ "match": [{ "f": 42 }] });

        let result = QueryRequest::from_value(&body);
        assert!(matches!(
            result,
            Err(SearchError::MalformedQueryError(_))
        ));
    }

    #[test]
    fn test_sort_non_string_direction_rejected() {
        let body = json!({ "sort": [{ "f": 1 }] });

        let result = QueryRequest::from_value(&body);
        assert!(matches!(
            result,
            Err(SearchError::MalformedQueryError(_))
        ));
    }
}

//! OpenSearch query-body builders.
//!
//! This module translates structured requests into the JSON bodies the
//! engine expects. Type scoping is expressed as a `term` filter on the
//! stored `doc_type` field.

use serde_json::{json, Map, Value};

use crate::query::QueryRequest;

/// Build the body for an interpreted query.
///
/// Match conditions become `term` clauses and wildcard conditions become
/// `wildcard` clauses matching `*value*`, all AND-ed in a boolean must
/// query. Matches come first, then wildcards, each in input order. The sort
/// array is omitted when empty so the engine applies its default ordering.
pub fn build_query_body(request: &QueryRequest, doc_type: &str) -> Value {
    let must: Vec<Value> = request
        .matches
        .iter()
        .map(|condition| term_clause(&condition.field, &condition.value))
        .chain(
            request
                .wildcards
                .iter()
                .map(|condition| wildcard_clause(&condition.field, &condition.value)),
        )
        .collect();

    let mut body = json!({
        "query": {
            "bool": {
                "must": must,
                "filter": [type_filter(doc_type)]
            }
        },
        "size": request.size_or_default()
    });

    if !request.sorts.is_empty() {
        let sorts: Vec<Value> = request
            .sorts
            .iter()
            .map(|sort| sort_clause(&sort.field, sort.order.as_str()))
            .collect();
        body["sort"] = Value::Array(sorts);
    }

    body
}

/// Build the body for an identifier lookup.
///
/// Each identifier becomes a `match_phrase` should-clause on the `id`
/// field. The explicit `minimum_should_match` keeps the disjunction
/// mandatory next to the type filter, so an empty identifier collection
/// matches nothing rather than everything of that type.
pub fn build_ids_body(ids: &[i64], doc_type: &str, size: usize) -> Value {
    let should: Vec<Value> = ids
        .iter()
        .map(|id| json!({ "match_phrase": { "id": id } }))
        .collect();

    json!({
        "query": {
            "bool": {
                "should": should,
                "minimum_should_match": 1,
                "filter": [type_filter(doc_type)]
            }
        },
        "size": size
    })
}

/// Build the body for an exact-term fetch sorted ascending by `sort_field`.
pub fn build_term_sorted_body(field: &str, keyword: &str, sort_field: &str, limit: usize) -> Value {
    json!({
        "query": term_clause(field, keyword),
        "sort": [sort_clause(sort_field, "asc")],
        "from": 0,
        "size": limit
    })
}

/// Build the body for a delete-by-type operation.
pub fn build_delete_by_type_body(doc_type: &str) -> Value {
    json!({ "query": type_filter(doc_type) })
}

fn type_filter(doc_type: &str) -> Value {
    term_clause("doc_type", doc_type)
}

fn term_clause(field: &str, value: &str) -> Value {
    let mut inner = Map::new();
    inner.insert(field.to_string(), Value::String(value.to_string()));
    json!({ "term": inner })
}

fn wildcard_clause(field: &str, value: &str) -> Value {
    let mut inner = Map::new();
    inner.insert(field.to_string(), Value::String(format!("*{}*", value)));
    json!({ "wildcard": inner })
}

fn sort_clause(field: &str, order: &str) -> Value {
    let mut inner = Map::new();
    inner.insert(field.to_string(), json!({ "order": order }));
    Value::Object(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{FieldSort, FieldValue, SortOrder};

    #[test]
    fn test_build_query_body_full() {
        let request = QueryRequest {
            matches: vec![FieldValue {
                field: "status".to_string(),
                value: "active".to_string(),
            }],
            wildcards: vec![FieldValue {
                field: "name".to_string(),
                value: "jo".to_string(),
            }],
            sorts: vec![FieldSort {
                field: "name.raw".to_string(),
                order: SortOrder::Asc,
            }],
            size: Some(3),
        };

        let body = build_query_body(&request, "product");

        let must = body["query"]["bool"]["must"].as_array().unwrap();
        assert_eq!(must.len(), 2);
        assert_eq!(must[0]["term"]["status"], "active");
        assert_eq!(must[1]["wildcard"]["name"], "*jo*");

        let filter = body["query"]["bool"]["filter"].as_array().unwrap();
        assert_eq!(filter[0]["term"]["doc_type"], "product");

        let sort = body["sort"].as_array().unwrap();
        assert_eq!(sort[0]["name.raw"]["order"], "asc");

        assert_eq!(body["size"], 3);
    }

    #[test]
    fn test_build_query_body_wildcard_pattern() {
        let request = QueryRequest {
            wildcards: vec![FieldValue {
                field: "f".to_string(),
                value: "abc".to_string(),
            }],
            ..Default::default()
        };

        let body = build_query_body(&request, "t");

        let must = body["query"]["bool"]["must"].as_array().unwrap();
        assert_eq!(must[0]["wildcard"]["f"], "*abc*");
    }

    #[test]
    fn test_build_query_body_defaults() {
        let request = QueryRequest::default();

        let body = build_query_body(&request, "t");

        assert!(body["query"]["bool"]["must"].as_array().unwrap().is_empty());
        // No sort key at all: the engine's default ordering applies.
        assert!(body.get("sort").is_none());
        assert_eq!(body["size"], 10);
    }

    #[test]
    fn test_build_query_body_matches_precede_wildcards() {
        let request = QueryRequest {
            matches: vec![
                FieldValue {
                    field: "a".to_string(),
                    value: "1".to_string(),
                },
                FieldValue {
                    field: "b".to_string(),
                    value: "2".to_string(),
                },
            ],
            wildcards: vec![FieldValue {
                field: "c".to_string(),
                value: "3".to_string(),
            }],
            ..Default::default()
        };

        let body = build_query_body(&request, "t");

        let must = body["query"]["bool"]["must"].as_array().unwrap();
        assert_eq!(must.len(), 3);
        assert!(must[0]["term"]["a"].is_string());
        assert!(must[1]["term"]["b"].is_string());
        assert!(must[2]["wildcard"]["c"].is_string());
    }

    #[test]
    fn test_build_ids_body() {
        let body = build_ids_body(&[7, 8], "order", 20);

        let should = body["query"]["bool"]["should"].as_array().unwrap();
        assert_eq!(should.len(), 2);
        assert_eq!(should[0]["match_phrase"]["id"], 7);
        assert_eq!(should[1]["match_phrase"]["id"], 8);
        assert_eq!(body["query"]["bool"]["minimum_should_match"], 1);
        assert_eq!(body["size"], 20);
    }

    #[test]
    fn test_build_ids_body_empty_matches_nothing() {
        let body = build_ids_body(&[], "order", 10);

        // No should-clauses with a mandatory minimum: the query can never
        // be satisfied.
        assert!(body["query"]["bool"]["should"]
            .as_array()
            .unwrap()
            .is_empty());
        assert_eq!(body["query"]["bool"]["minimum_should_match"], 1);
    }

    #[test]
    fn test_build_term_sorted_body() {
        let body = build_term_sorted_body("user", "alice", "created_at", 5);

        assert_eq!(body["query"]["term"]["user"], "alice");
        assert_eq!(body["sort"][0]["created_at"]["order"], "asc");
        assert_eq!(body["from"], 0);
        assert_eq!(body["size"], 5);
    }

    #[test]
    fn test_build_delete_by_type_body() {
        let body = build_delete_by_type_body("order");

        assert_eq!(body["query"]["term"]["doc_type"], "order");
    }
}

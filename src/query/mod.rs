//! Generic query-body interpretation.
//!
//! Turns the loosely-typed map bodies callers send into a structured
//! `QueryRequest` that backends translate into engine queries.

mod request;

pub use request::{FieldSort, FieldValue, QueryRequest, SortOrder, DEFAULT_SIZE};

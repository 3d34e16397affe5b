//! GraphQL query construction.
//!
//! Every query and mutation is assembled from structured clauses; user text
//! only ever reaches the query as an escaped string literal.

mod builder;
mod catalog;
mod clause;
mod value;

pub use builder::{Entity, GraphQlQuery, Mutation, QueryBuilder};
pub use catalog::{
    DEFAULT_FLOW_GROUP_ORDER, DEFAULT_FLOW_ORDER, FLOW_FIELDS, FLOW_GROUP_FIELDS, NamedQuery,
};
pub use clause::{Comparison, OrderByClause, SortDirection, WhereClause, escape_like};
pub use value::GraphQlValue;

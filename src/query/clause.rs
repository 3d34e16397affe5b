use super::value::GraphQlValue;
use std::fmt;

/// Escapes the `LIKE` wildcards so the text only matches literally.
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// A comparison applied at the end of a filter path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// `_eq`
    Equals(GraphQlValue),
    /// `_ilike` with the text wrapped as a case-insensitive substring pattern.
    Contains(String),
    /// `_has_keys_any`
    HasAnyKey(String),
}

impl Comparison {
    fn operator(&self) -> &'static str {
        match self {
            Comparison::Equals(_) => "_eq",
            Comparison::Contains(_) => "_ilike",
            Comparison::HasAnyKey(_) => "_has_keys_any",
        }
    }

    fn into_value(self) -> GraphQlValue {
        match self {
            Comparison::Equals(value) => value,
            Comparison::Contains(text) => GraphQlValue::String(format!("%{}%", escape_like(&text))),
            Comparison::HasAnyKey(key) => GraphQlValue::String(key),
        }
    }
}

/// The `where:` argument of a query.
///
/// Filters sharing a path prefix are merged into one nested object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereClause {
    conditions: GraphQlValue,
}

impl Default for WhereClause {
    fn default() -> Self {
        Self {
            conditions: GraphQlValue::Object(Vec::new()),
        }
    }
}

impl WhereClause {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `comparison` on the field reached through `path`.
    pub fn add_filter(&mut self, path: &[&str], comparison: Comparison) {
        let operator = comparison.operator();
        let mut full_path = path.to_vec();
        full_path.push(operator);
        self.conditions.insert_path(&full_path, comparison.into_value());
    }

    pub fn with_filter(mut self, path: &[&str], comparison: Comparison) -> Self {
        self.add_filter(path, comparison);
        self
    }

    pub fn is_empty(&self) -> bool {
        matches!(&self.conditions, GraphQlValue::Object(fields) if fields.is_empty())
    }
}

impl fmt::Display for WhereClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "where: {}", self.conditions)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// The `order_by:` argument of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByClause {
    pub field: String,
    pub direction: SortDirection,
}

impl OrderByClause {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }
}

impl fmt::Display for OrderByClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = GraphQlValue::Enum(self.direction.as_str().to_string());
        let ordering = GraphQlValue::object([(self.field.as_str(), direction)]);
        write!(f, "order_by: {}", ordering)
    }
}

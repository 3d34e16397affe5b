use std::fmt;

/// A GraphQL input value, rendered in GraphQL literal syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphQlValue {
    String(String),
    Int(i64),
    Bool(bool),
    /// An unquoted enum value such as `desc`.
    Enum(String),
    List(Vec<GraphQlValue>),
    /// Object fields in insertion order.
    Object(Vec<(String, GraphQlValue)>),
}

impl GraphQlValue {
    pub fn string(value: impl Into<String>) -> Self {
        GraphQlValue::String(value.into())
    }

    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item = (K, GraphQlValue)>) -> Self {
        GraphQlValue::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Inserts `value` under the nested `path`, creating or merging objects on the way.
    ///
    /// Does nothing when `self` is not an object. An existing leaf at the end
    /// of `path` is replaced.
    pub(crate) fn insert_path(&mut self, path: &[&str], value: GraphQlValue) {
        let GraphQlValue::Object(fields) = self else {
            return;
        };
        let Some((head, rest)) = path.split_first() else {
            return;
        };

        let position = fields.iter().position(|(key, _)| key == head);
        if rest.is_empty() {
            match position {
                Some(idx) => fields[idx].1 = value,
                None => fields.push((head.to_string(), value)),
            }
            return;
        }

        let idx = position.unwrap_or_else(|| {
            fields.push((head.to_string(), GraphQlValue::Object(Vec::new())));
            fields.len() - 1
        });
        fields[idx].1.insert_path(rest, value);
    }
}

impl fmt::Display for GraphQlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // JSON string escapes are a subset of GraphQL's
            GraphQlValue::String(s) => {
                write!(f, "{}", serde_json::to_string(s).map_err(|_| fmt::Error)?)
            }
            GraphQlValue::Int(n) => write!(f, "{}", n),
            GraphQlValue::Bool(b) => write!(f, "{}", b),
            GraphQlValue::Enum(name) => write!(f, "{}", name),
            GraphQlValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            GraphQlValue::Object(fields) if fields.is_empty() => write!(f, "{{}}"),
            GraphQlValue::Object(fields) => {
                write!(f, "{{ ")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, " }}")
            }
        }
    }
}

impl From<&str> for GraphQlValue {
    fn from(value: &str) -> Self {
        GraphQlValue::String(value.to_string())
    }
}

impl From<String> for GraphQlValue {
    fn from(value: String) -> Self {
        GraphQlValue::String(value)
    }
}

impl From<bool> for GraphQlValue {
    fn from(value: bool) -> Self {
        GraphQlValue::Bool(value)
    }
}

impl From<i64> for GraphQlValue {
    fn from(value: i64) -> Self {
        GraphQlValue::Int(value)
    }
}

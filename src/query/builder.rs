use super::clause::{Comparison, OrderByClause, WhereClause};
use super::value::GraphQlValue;
use std::fmt::{self, Write};

/// Top-level collections that can be queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Flow,
    FlowGroup,
}

impl Entity {
    /// Field name of the collection, also the key of the records in the response.
    pub fn field(&self) -> &'static str {
        match self {
            Entity::Flow => "flow",
            Entity::FlowGroup => "flow_group",
        }
    }
}

/// A complete read query over one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphQlQuery {
    entity: Entity,
    where_clause: WhereClause,
    order_by: Option<OrderByClause>,
    fields: Vec<String>,
}

impl GraphQlQuery {
    pub fn builder(entity: Entity) -> QueryBuilder {
        QueryBuilder::new(entity)
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    /// Renders the query text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GraphQlQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut arguments = Vec::new();
        if !self.where_clause.is_empty() {
            arguments.push(self.where_clause.to_string());
        }
        if let Some(order_by) = &self.order_by {
            arguments.push(order_by.to_string());
        }

        writeln!(f, "{{")?;
        if arguments.is_empty() {
            writeln!(f, "  {} {{", self.entity.field())?;
        } else {
            writeln!(f, "  {}(", self.entity.field())?;
            for argument in &arguments {
                writeln!(f, "    {}", argument)?;
            }
            writeln!(f, "  ) {{")?;
        }
        for field in &self.fields {
            writeln!(f, "    {}", field)?;
        }
        writeln!(f, "  }}")?;
        write!(f, "}}")
    }
}

/// Assembles a [`GraphQlQuery`] from filters, ordering and a field list.
pub struct QueryBuilder {
    entity: Entity,
    where_clause: WhereClause,
    order_by: Option<OrderByClause>,
    fields: Vec<String>,
}

impl QueryBuilder {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            where_clause: WhereClause::new(),
            order_by: None,
            fields: Vec::new(),
        }
    }

    pub fn with_filter(mut self, path: &[&str], comparison: Comparison) -> Self {
        self.where_clause.add_filter(path, comparison);
        self
    }

    /// Adds a substring filter on the project name, skipped when the filter is blank.
    pub fn with_project_filter(self, path: &[&str], project: Option<&str>) -> Self {
        match project.map(str::trim).filter(|p| !p.is_empty()) {
            Some(project) => self.with_filter(path, Comparison::Contains(project.to_string())),
            None => self,
        }
    }

    /// Adds an exact match on the project name, skipped when the name is blank.
    pub fn with_project_name(self, path: &[&str], project: Option<&str>) -> Self {
        match project.map(str::trim).filter(|p| !p.is_empty()) {
            Some(project) => {
                self.with_filter(path, Comparison::Equals(GraphQlValue::string(project)))
            }
            None => self,
        }
    }

    pub fn with_order_by(mut self, order_by: Option<OrderByClause>) -> Self {
        self.order_by = order_by;
        self
    }

    /// Selection fields, injected verbatim.
    pub fn with_fields<S: AsRef<str>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.fields
            .extend(fields.into_iter().map(|field| field.as_ref().to_string()));
        self
    }

    pub fn build(self) -> GraphQlQuery {
        GraphQlQuery {
            entity: self.entity,
            where_clause: self.where_clause,
            order_by: self.order_by,
            fields: self.fields,
        }
    }
}

/// A mutation taking a single `input` object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    name: String,
    input: GraphQlValue,
    selection: Vec<String>,
}

impl Mutation {
    pub fn new(name: impl Into<String>, input: GraphQlValue) -> Self {
        Self {
            name: name.into(),
            input,
            selection: vec!["success".to_string()],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = write!(
            out,
            "mutation {{\n  {}(input: {}) {{\n",
            self.name, self.input
        );
        for field in &self.selection {
            let _ = writeln!(out, "    {}", field);
        }
        out.push_str("  }\n}");
        out
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

use super::{Column, ColumnId, Row};

use std::fmt;

/// A database table
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Uniquely identifies a table
    pub id: TableId,

    /// Name of the table
    pub name: String,

    /// Schema (namespace) qualifying the table name
    pub schema: String,

    /// The table's columns, in source order
    pub columns: Vec<Column>,

    /// The table's rows, in source order
    pub rows: Vec<Row>,
}

/// Uniquely identifies a table
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct TableId(pub usize);

impl Table {
    pub fn new(id: TableId, schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            schema: schema.into(),
            columns: vec![],
            rows: vec![],
        }
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        &self.columns[id.into().index]
    }

    /// Returns `<schema>.<name>`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }
}

impl From<&Table> for TableId {
    fn from(value: &Table) -> Self {
        value.id
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}

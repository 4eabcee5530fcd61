use super::{ColumnId, TableId};

use std::fmt;

/// A row of a table. Holds exactly one field per column of the owning table,
/// in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: RowId,
    pub fields: Vec<Field>,
}

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct RowId {
    pub table: TableId,
    pub index: usize,
}

/// A single value within a row.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The value, rendered as text by the data source.
    pub value: String,

    /// The row holding this field.
    pub row: RowId,

    /// The column this field holds a value for.
    pub column: ColumnId,
}

impl Row {
    pub fn field(&self, column: impl Into<ColumnId>) -> &Field {
        &self.fields[column.into().index]
    }
}

impl From<&Row> for RowId {
    fn from(value: &Row) -> Self {
        value.id
    }
}

impl fmt::Debug for RowId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "RowId({}/{})", self.table.0, self.index)
    }
}

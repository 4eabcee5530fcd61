use crate::Result;

use std::fmt::Debug;

/// A table as listed by a data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    pub schema: String,
    pub name: String,
}

/// A column as listed by a data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,

    /// Raw type name, e.g. `"nvarchar"`.
    pub data_type: String,
}

/// Supplies table, column and row metadata to the schema builder.
///
/// Implementations own their connection and any blocking I/O. Calls happen
/// in order: `tables` once, then `columns` and `rows` per table.
pub trait DataSource: Debug {
    /// Lists the base tables, in the order they should be generated.
    fn tables(&mut self) -> Result<Vec<TableInfo>>;

    /// Lists a table's columns in source order.
    fn columns(&mut self, table: &TableInfo) -> Result<Vec<ColumnInfo>>;

    /// Reads every row of a table. Each row holds one textual value per
    /// column, in the order of `columns`.
    fn rows(&mut self, table: &TableInfo, columns: &[ColumnInfo]) -> Result<Vec<Vec<String>>>;
}

impl TableInfo {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
        }
    }
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

impl<T: DataSource + ?Sized> DataSource for &mut T {
    fn tables(&mut self) -> Result<Vec<TableInfo>> {
        (**self).tables()
    }

    fn columns(&mut self, table: &TableInfo) -> Result<Vec<ColumnInfo>> {
        (**self).columns(table)
    }

    fn rows(&mut self, table: &TableInfo, columns: &[ColumnInfo]) -> Result<Vec<Vec<String>>> {
        (**self).rows(table, columns)
    }
}

impl<T: DataSource + ?Sized> DataSource for Box<T> {
    fn tables(&mut self) -> Result<Vec<TableInfo>> {
        (**self).tables()
    }

    fn columns(&mut self, table: &TableInfo) -> Result<Vec<ColumnInfo>> {
        (**self).columns(table)
    }

    fn rows(&mut self, table: &TableInfo, columns: &[ColumnInfo]) -> Result<Vec<Vec<String>>> {
        (**self).rows(table, columns)
    }
}

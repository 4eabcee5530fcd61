use super::{Schema, Table};

use std::collections::BTreeSet;

/// Read-only view of a [`Schema`] handed to output sinks.
///
/// Exposes the distinct schema names, the tables with their qualified
/// names, each table's `(column, type)` pairs and each row's
/// `(value, column)` pairs.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot<'a> {
    pub schemas: BTreeSet<&'a str>,
    pub tables: Vec<TableSnapshot<'a>>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableSnapshot<'a> {
    pub schema: &'a str,
    pub name: &'a str,
    pub qualified_name: String,
    pub columns: Vec<ColumnSnapshot<'a>>,
    pub rows: Vec<RowSnapshot<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColumnSnapshot<'a> {
    pub name: &'a str,
    pub data_type: &'a str,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RowSnapshot<'a> {
    pub fields: Vec<FieldSnapshot<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldSnapshot<'a> {
    pub value: &'a str,
    pub column: &'a str,
}

impl<'a> Snapshot<'a> {
    pub(super) fn new(schema: &'a Schema) -> Self {
        Self {
            schemas: schema.tables.iter().map(|t| t.schema.as_str()).collect(),
            tables: schema
                .tables
                .iter()
                .map(|table| TableSnapshot::new(schema, table))
                .collect(),
        }
    }

    /// Distinct schema names, sorted.
    pub fn schemas(&self) -> impl ExactSizeIterator<Item = &'a str> + '_ {
        self.schemas.iter().copied()
    }

    pub fn tables(&self) -> &[TableSnapshot<'a>] {
        &self.tables
    }
}

impl<'a> TableSnapshot<'a> {
    fn new(schema: &'a Schema, table: &'a Table) -> Self {
        Self {
            schema: &table.schema,
            name: &table.name,
            qualified_name: table.qualified_name(),
            columns: table
                .columns
                .iter()
                .map(|column| ColumnSnapshot {
                    name: &column.name,
                    data_type: &column.data_type,
                })
                .collect(),
            rows: table
                .rows
                .iter()
                .map(|row| RowSnapshot {
                    fields: row
                        .fields
                        .iter()
                        .map(|field| FieldSnapshot {
                            value: &field.value,
                            column: &schema.field_column(field).name,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

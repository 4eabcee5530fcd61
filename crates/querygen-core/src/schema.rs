mod builder;
pub use builder::Builder;

mod column;
pub use column::{Column, ColumnId};

mod row;
pub use row::{Field, Row, RowId};

mod snapshot;
pub use snapshot::{ColumnSnapshot, FieldSnapshot, RowSnapshot, Snapshot, TableSnapshot};

mod table;
pub use table::{Table, TableId};

mod ty;
pub use ty::{DataType, DataTypeGroup};

/// An in-memory snapshot of a database: tables, their columns and their rows.
///
/// The schema owns every table, column, row and field. Fields refer back to
/// their row and column through [`RowId`] and [`ColumnId`] handles, which are
/// resolved through the schema.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        self.tables.get(id.into().0).expect("invalid table ID")
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        self.table(id.table)
            .columns
            .get(id.index)
            .expect("invalid column ID")
    }

    pub fn row(&self, id: impl Into<RowId>) -> &Row {
        let id = id.into();
        self.table(id.table)
            .rows
            .get(id.index)
            .expect("invalid row ID")
    }

    /// Returns the column a field holds a value for.
    pub fn field_column(&self, field: &Field) -> &Column {
        self.column(field.column)
    }

    /// Finds a table by its `(schema, name)` identity.
    pub fn table_by_name(&self, schema: &str, name: &str) -> Option<&Table> {
        self.tables
            .iter()
            .find(|table| table.schema == schema && table.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Returns a read-only view suitable for handing to an output sink.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(self)
    }
}

use super::{Column, ColumnId, Field, Row, RowId, Schema, Table, TableId};
use crate::{driver::DataSource, Error, Result};

use indexmap::IndexMap;
use tracing::{debug, info};

/// Populates a [`Schema`].
///
/// The builder is the only way to mutate the model. It keeps every row as
/// wide as its table: a row must carry one value per column, and columns
/// cannot be added once a table has rows.
#[derive(Debug, Default)]
pub struct Builder {
    /// Maps `(schema, name)` to table identifiers
    table_lookup: IndexMap<(String, String), TableId>,

    /// Tables as they are built
    tables: Vec<Table>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty table. Fails if the `(schema, name)` pair is taken.
    pub fn table(&mut self, schema: &str, name: &str) -> Result<TableId> {
        let key = (schema.to_string(), name.to_string());

        if self.table_lookup.contains_key(&key) {
            return Err(Error::invalid_schema(format!(
                "duplicate table {schema}.{name}"
            )));
        }

        let id = TableId(self.tables.len());
        self.table_lookup.insert(key, id);
        self.tables.push(Table::new(id, schema, name));
        Ok(id)
    }

    /// Appends a column to a table that has no rows yet.
    pub fn column(&mut self, table: TableId, name: &str, data_type: &str) -> Result<ColumnId> {
        let table = self.table_mut(table)?;

        if !table.rows.is_empty() {
            return Err(Error::invalid_schema(format!(
                "cannot add column {name} to {}: table already has rows",
                table.qualified_name()
            )));
        }

        let id = ColumnId {
            table: table.id,
            index: table.columns.len(),
        };

        table.columns.push(Column {
            id,
            name: name.to_string(),
            data_type: data_type.to_string(),
        });

        Ok(id)
    }

    /// Appends a row. `values` must hold exactly one value per column, in
    /// column order.
    pub fn row<I>(&mut self, table: TableId, values: I) -> Result<RowId>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let table = self.table_mut(table)?;
        let values: Vec<String> = values.into_iter().map(Into::into).collect();

        if values.len() != table.columns.len() {
            return Err(Error::invalid_schema(format!(
                "row has {} fields, {} has {} columns",
                values.len(),
                table.qualified_name(),
                table.columns.len()
            )));
        }

        let id = RowId {
            table: table.id,
            index: table.rows.len(),
        };

        let fields = values
            .into_iter()
            .zip(&table.columns)
            .map(|(value, column)| Field {
                value,
                row: id,
                column: column.id,
            })
            .collect();

        table.rows.push(Row { id, fields });
        Ok(id)
    }

    /// Pulls tables, columns and rows from a data source.
    ///
    /// The first failure stops the load and is returned as-is. Tables that
    /// were fully read before the failure stay in the builder.
    pub fn load(&mut self, mut source: impl DataSource) -> Result<()> {
        let tables = source
            .tables()
            .map_err(|e| e.context(err!("listing tables")))?;

        debug!(count = tables.len(), "listed tables");

        for info in &tables {
            let columns = source.columns(info).map_err(|e| {
                e.context(err!("reading columns of {}.{}", info.schema, info.name))
            })?;

            let rows = source.rows(info, &columns).map_err(|e| {
                e.context(err!("reading rows of {}.{}", info.schema, info.name))
            })?;

            // A table is inserted only once every row fits its columns
            if let Some(row) = rows.iter().find(|row| row.len() != columns.len()) {
                return Err(Error::invalid_schema(format!(
                    "row has {} fields, {}.{} has {} columns",
                    row.len(),
                    info.schema,
                    info.name,
                    columns.len()
                ))
                .context(err!("reading rows of {}.{}", info.schema, info.name)));
            }

            let id = self.table(&info.schema, &info.name)?;

            for column in &columns {
                self.column(id, &column.name, &column.data_type)?;
            }

            for row in rows {
                self.row(id, row)?;
            }

            debug!(
                table = %format_args!("{}.{}", info.schema, info.name),
                columns = columns.len(),
                rows = self.tables[id.0].rows.len(),
                "loaded table"
            );
        }

        info!(tables = self.tables.len(), "schema loaded");
        Ok(())
    }

    pub fn num_tables(&self) -> usize {
        self.tables.len()
    }

    pub fn build(self) -> Schema {
        Schema {
            tables: self.tables,
        }
    }

    fn table_mut(&mut self, id: TableId) -> Result<&mut Table> {
        self.tables
            .get_mut(id.0)
            .ok_or_else(|| err!("invalid table ID {}", id.0))
    }
}

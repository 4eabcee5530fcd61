mod value;

use querygen_core::{
    driver::{ColumnInfo, DataSource, TableInfo},
    Error, Result,
};
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;
use url::Url;

/// Schema qualifier reported for every SQLite table.
pub const SCHEMA: &str = "main";

/// A [`DataSource`] reading a SQLite database.
#[derive(Debug)]
pub struct Sqlite {
    connection: Connection,
}

impl Sqlite {
    /// Opens a database from a `sqlite:` connection URL.
    ///
    /// `sqlite::memory:` opens a fresh in-memory database; any other path is
    /// opened as a file.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Self::in_memory()
        } else {
            Self::open(url.path())
        }
    }

    /// Opens an empty in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory().map_err(Error::data_source)?;
        Ok(Self { connection })
    }

    /// Opens the database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).map_err(Error::data_source)?;
        Ok(Self { connection })
    }

    pub fn from_connection(connection: Connection) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }
}

impl DataSource for Sqlite {
    fn tables(&mut self) -> Result<Vec<TableInfo>> {
        let mut stmt = self
            .connection
            .prepare(
                "SELECT name FROM sqlite_master \
                 WHERE type = 'table' AND substr(name, 1, 7) <> 'sqlite_' \
                 ORDER BY rowid",
            )
            .map_err(Error::data_source)?;

        let tables = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(Error::data_source)?
            .map(|name| Ok(TableInfo::new(SCHEMA, name.map_err(Error::data_source)?)))
            .collect::<Result<Vec<_>>>()?;

        debug!(tables = tables.len(), "listed sqlite tables");
        Ok(tables)
    }

    fn columns(&mut self, table: &TableInfo) -> Result<Vec<ColumnInfo>> {
        let sql = format!("PRAGMA table_info({})", quote(&table.name));
        let mut stmt = self.connection.prepare(&sql).map_err(Error::data_source)?;

        // Rows are (cid, name, type, notnull, dflt_value, pk)
        let columns = stmt
            .query_map([], |row| {
                let declared = row.get::<_, String>(2)?;
                Ok(ColumnInfo::new(
                    row.get::<_, String>(1)?,
                    type_name(&declared),
                ))
            })
            .map_err(Error::data_source)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(Error::data_source)?;

        Ok(columns)
    }

    fn rows(&mut self, table: &TableInfo, columns: &[ColumnInfo]) -> Result<Vec<Vec<String>>> {
        if columns.is_empty() {
            return Ok(vec![]);
        }

        let names = columns
            .iter()
            .map(|column| quote(&column.name))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("SELECT {names} FROM {}", quote(&table.name));

        let mut stmt = self.connection.prepare(&sql).map_err(Error::data_source)?;
        let mut rows = stmt.query([]).map_err(Error::data_source)?;
        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::data_source)? {
            let mut fields = Vec::with_capacity(columns.len());

            for index in 0..columns.len() {
                let value = row.get_ref(index).map_err(Error::data_source)?;
                fields.push(value::to_text(value));
            }

            ret.push(fields);
        }

        debug!(table = %table.name, rows = ret.len(), "read sqlite rows");
        Ok(ret)
    }
}

/// Reduces a declared column type to its bare lowercase name, e.g.
/// `VARCHAR(50)` to `varchar`.
fn type_name(declared: &str) -> String {
    let name = match declared.find('(') {
        Some(pos) => &declared[..pos],
        None => declared,
    };
    name.trim().to_lowercase()
}

/// Quotes an identifier with `"`, doubling embedded quotes.
fn quote(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

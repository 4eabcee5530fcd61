mod filter;
pub use filter::Filter;

mod ident;
pub use ident::Ident;

mod select_all;
pub use select_all::SelectAll;

mod select_columns;
pub use select_columns::SelectColumns;

pub use querygen_core::stmt::*;

use crate::Serializer;

/// A generated SQL statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    SelectAll(SelectAll),
    SelectColumns(SelectColumns),
    Filter(Filter),
}

impl Statement {
    /// Renders the statement as SQL text, terminated by `;`.
    pub fn to_sql(&self) -> String {
        Serializer::new().serialize(self)
    }

    /// Renders the label paired with this statement in a corpus.
    pub fn to_label(&self) -> String {
        Serializer::new().label(self)
    }

    /// The table the statement reads from.
    pub fn table(&self) -> &Ident {
        match self {
            Statement::SelectAll(stmt) => &stmt.table,
            Statement::SelectColumns(stmt) => &stmt.table,
            Statement::Filter(stmt) => &stmt.table,
        }
    }

    /// Number of columns the statement names explicitly. `SELECT *` names none.
    pub fn column_count(&self) -> usize {
        match self {
            Statement::SelectAll(_) => 0,
            Statement::SelectColumns(stmt) => stmt.columns.len(),
            Statement::Filter(_) => 1,
        }
    }

    pub fn is_select_all(&self) -> bool {
        matches!(self, Statement::SelectAll(_))
    }

    pub fn is_select_columns(&self) -> bool {
        matches!(self, Statement::SelectColumns(_))
    }

    pub fn is_filter(&self) -> bool {
        matches!(self, Statement::Filter(_))
    }

    pub fn as_select_columns(&self) -> Option<&SelectColumns> {
        match self {
            Statement::SelectColumns(stmt) => Some(stmt),
            _ => None,
        }
    }

    pub fn as_filter(&self) -> Option<&Filter> {
        match self {
            Statement::Filter(stmt) => Some(stmt),
            _ => None,
        }
    }
}

use super::{Delimited, Formatter, ToSql};

use crate::stmt;

/// Writes the corpus label of a statement instead of its SQL.
pub(super) struct Label<'a>(pub(super) &'a stmt::Statement);

impl ToSql for Label<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self.0 {
            stmt::Statement::SelectAll(stmt) => {
                let table = &stmt.table;

                fmt!(f, "select_all_" table);
            }
            stmt::Statement::SelectColumns(stmt) => {
                let table = &stmt.table;
                let columns = Delimited(&stmt.columns, "_");

                fmt!(f, "select_" table "_" columns);
            }
            stmt::Statement::Filter(_) => {
                fmt!(f, "filter_statement");
            }
        }
    }
}

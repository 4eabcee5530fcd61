use super::{Comma, Formatter, ToSql};

use crate::stmt;

impl ToSql for &stmt::Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::Statement::SelectAll(stmt) => stmt.to_sql(f),
            stmt::Statement::SelectColumns(stmt) => stmt.to_sql(f),
            stmt::Statement::Filter(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::SelectAll {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = &self.table;

        fmt!(f, "SELECT * FROM " table);
    }
}

impl ToSql for &stmt::SelectColumns {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = &self.table;
        let columns = Comma(&self.columns);

        fmt!(f, "SELECT " columns " FROM " table);
    }
}

impl ToSql for &stmt::Filter {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = &self.table;
        let column = &self.column;
        let value = &self.value;

        fmt!(
            f, "SELECT * FROM " table " WHERE " column " " self.op " " value
        );
    }
}

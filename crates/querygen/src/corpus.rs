use crate::Result;

use querygen_sql::Statement;
use std::{collections::BTreeMap, io::Write};

/// Generated statements, in generation order.
///
/// SQL text and labels are derived from the same statements, so the `i`-th
/// label always belongs to the `i`-th SQL line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Corpus {
    statements: Vec<Statement>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stmt: Statement) {
        self.statements.push(stmt);
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn into_statements(self) -> Vec<Statement> {
        self.statements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// SQL text of every statement.
    pub fn sql(&self) -> Vec<String> {
        self.statements.iter().map(Statement::to_sql).collect()
    }

    /// Label of every statement.
    pub fn labels(&self) -> Vec<String> {
        self.statements.iter().map(Statement::to_label).collect()
    }

    /// `(sql, label)` pairs in generation order.
    pub fn pairs(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.statements
            .iter()
            .map(|stmt| (stmt.to_sql(), stmt.to_label()))
    }

    /// Writes one statement per line.
    pub fn write_sql(&self, mut dst: impl Write) -> Result<()> {
        for stmt in &self.statements {
            writeln!(dst, "{}", stmt.to_sql())?;
        }
        dst.flush()?;
        Ok(())
    }

    /// Writes one label per line, in the same order as [`Corpus::write_sql`].
    pub fn write_labels(&self, mut dst: impl Write) -> Result<()> {
        for stmt in &self.statements {
            writeln!(dst, "{}", stmt.to_label())?;
        }
        dst.flush()?;
        Ok(())
    }

    /// Writes a human-readable listing grouped by table.
    ///
    /// Tables appear in name order under a `-- Table: <name> --` header.
    /// Within a table, statements are ordered by the number of columns they
    /// name; statements naming the same number keep generation order.
    pub fn write_report(&self, mut dst: impl Write) -> Result<()> {
        let mut tables: BTreeMap<&str, Vec<&Statement>> = BTreeMap::new();

        for stmt in &self.statements {
            tables.entry(stmt.table().as_str()).or_default().push(stmt);
        }

        let mut s = "";
        for (table, mut stmts) in tables {
            stmts.sort_by_key(|stmt| stmt.column_count());

            writeln!(dst, "{s}-- Table: {table} --")?;
            for stmt in stmts {
                writeln!(dst, "{}", stmt.to_sql())?;
            }
            s = "\n";
        }

        dst.flush()?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

impl IntoIterator for Corpus {
    type Item = Statement;
    type IntoIter = std::vec::IntoIter<Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.into_iter()
    }
}

impl Extend<Statement> for Corpus {
    fn extend<T: IntoIterator<Item = Statement>>(&mut self, iter: T) {
        self.statements.extend(iter);
    }
}

impl FromIterator<Statement> for Corpus {
    fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
        Self {
            statements: iter.into_iter().collect(),
        }
    }
}

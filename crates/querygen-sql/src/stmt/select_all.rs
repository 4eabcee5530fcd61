use super::*;

/// `SELECT * FROM <table>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectAll {
    /// Name of the table.
    pub table: Ident,
}

impl Statement {
    /// Selects every column of a table.
    pub fn select_all(table: impl Into<Ident>) -> Self {
        SelectAll {
            table: table.into(),
        }
        .into()
    }
}

impl From<SelectAll> for Statement {
    fn from(value: SelectAll) -> Self {
        Self::SelectAll(value)
    }
}

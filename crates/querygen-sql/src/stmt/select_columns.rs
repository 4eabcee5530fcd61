use super::*;

/// `SELECT <c1>, <c2>, ... FROM <table>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectColumns {
    /// Name of the table.
    pub table: Ident,

    /// Projected columns, in the order given. Never empty.
    pub columns: Vec<Ident>,
}

impl SelectColumns {
    /// Builds a projection. `columns` must not be empty: a projection of no
    /// columns is not a statement the model can hold. Use
    /// [`SelectColumns::try_new`] when the column list is not known to be
    /// non-empty.
    pub fn new<I>(table: impl Into<Ident>, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Ident>,
    {
        let columns: Vec<Ident> = columns.into_iter().map(Into::into).collect();
        debug_assert!(!columns.is_empty(), "a projection needs at least one column");

        Self {
            table: table.into(),
            columns,
        }
    }

    /// Builds a projection, or returns `None` if `columns` is empty.
    pub fn try_new<I>(table: impl Into<Ident>, columns: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Into<Ident>,
    {
        let columns: Vec<Ident> = columns.into_iter().map(Into::into).collect();

        if columns.is_empty() {
            return None;
        }

        Some(Self {
            table: table.into(),
            columns,
        })
    }
}

impl Statement {
    /// Selects the given columns of a table.
    ///
    /// Columns are neither reordered nor de-duplicated. `columns` must not
    /// be empty, as for [`SelectColumns::new`].
    pub fn select_columns<I>(table: impl Into<Ident>, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Ident>,
    {
        SelectColumns::new(table, columns).into()
    }
}

impl From<SelectColumns> for Statement {
    fn from(value: SelectColumns) -> Self {
        Self::SelectColumns(value)
    }
}

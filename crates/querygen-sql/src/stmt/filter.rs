use super::*;

/// `SELECT * FROM <table> WHERE <column> <op> <value>`
///
/// The value is written as-is: it is neither quoted nor escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub table: Ident,
    pub column: Ident,
    pub op: BinaryOp,
    pub value: String,
}

impl Statement {
    pub fn filter(
        table: impl Into<Ident>,
        column: impl Into<Ident>,
        op: BinaryOp,
        value: impl Into<String>,
    ) -> Self {
        Filter {
            table: table.into(),
            column: column.into(),
            op,
            value: value.into(),
        }
        .into()
    }
}

impl From<Filter> for Statement {
    fn from(value: Filter) -> Self {
        Self::Filter(value)
    }
}

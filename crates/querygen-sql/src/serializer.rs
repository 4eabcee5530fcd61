#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod label;
use label::Label;

// Fragment serializers
mod ident;
mod statement;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string or to its corpus label.
///
/// Identifiers and filter values are written verbatim. Nothing is quoted or
/// escaped, so the output is only as well-formed as the names fed in.
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// Terminate SQL statements with `;`
    terminate: bool,
}

struct Formatter<'a> {
    /// Where to write the serialized output
    dst: &'a mut String,
}

impl Serializer {
    pub fn new() -> Self {
        Self { terminate: true }
    }

    /// Omit the trailing `;`.
    pub fn unterminated(mut self) -> Self {
        self.terminate = false;
        self
    }

    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter { dst: &mut ret };

        ToSql::to_sql(stmt, &mut fmt);

        if self.terminate {
            ret.push(';');
        }

        ret
    }

    /// Renders the label for a statement.
    ///
    /// Labels tag training examples and are not unique: every filter
    /// statement shares the label `filter_statement`.
    pub fn label(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter { dst: &mut ret };

        Label(stmt).to_sql(&mut fmt);
        ret
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

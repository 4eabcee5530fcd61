use super::{Formatter, ToSql};

use crate::stmt::{BinaryOp, Ident};

impl ToSql for &Ident {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(&self.0);
    }
}

impl ToSql for BinaryOp {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self.as_str());
    }
}

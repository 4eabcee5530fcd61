use crate::schema::Schema;

use std::fmt::Write;

/// Renders a schema as a description, one entry per table.
///
/// Each entry's body lists the table's columns as `"name" : "type"` pairs.
/// [`parse`](super::parse) reads back the same table list as long as schema
/// and table names only use ASCII letters and `_`.
pub fn write(schema: &Schema) -> String {
    let mut dst = String::new();

    for table in &schema.tables {
        // Writing to a `String` cannot fail
        let _ = writeln!(dst, "\"{}\" : {{", table.qualified_name());

        if table.columns.is_empty() {
            dst.push_str("    \"columns\" : {}\n");
        } else {
            dst.push_str("    \"columns\" : {\n");

            let mut s = "";
            for column in &table.columns {
                let _ = write!(
                    dst,
                    "{s}        \"{}\" : \"{}\"",
                    column.name, column.data_type
                );
                s = ",\n";
            }

            dst.push_str("\n    }\n");
        }

        dst.push_str("}\n");
    }

    dst
}

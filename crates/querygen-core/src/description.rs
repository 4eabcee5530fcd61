//! The schema-description text format.
//!
//! A description is a sequence of entries, one per table:
//!
//! ```text
//! "sales.orders" : {
//!     "columns" : {
//!         "id" : "int",
//!         "placed" : "datetime"
//!     }
//! }
//! ```
//!
//! Keys are quoted `<schema>.<table>` names made of ASCII letters, `.` and
//! `_`. Whitespace between tokens is ignored. [`write`] renders a schema in
//! this format and [`parse`] reads the table list back.

mod parse;
pub use parse::{parse, parse_file, Abort, Parsed, State, Stop};

mod write;
pub use write::write;

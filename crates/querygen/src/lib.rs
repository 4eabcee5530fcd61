//! Generates SQL training corpora from a database schema.
//!
//! A [`Schema`] is walked table by table. Each table yields a `SELECT *`,
//! single-column and cumulative multi-column projections, and filter
//! statements built from sampled row values, chosen by the column's type.
//!
//! ```
//! use querygen::{Generator, Options, Schema};
//!
//! let mut builder = Schema::builder();
//! let orders = builder.table("sales", "orders").unwrap();
//! builder.column(orders, "id", "int").unwrap();
//! builder.column(orders, "total", "money").unwrap();
//! let schema = builder.build();
//!
//! let corpus = Generator::new(Options::default()).generate(&schema);
//! assert_eq!(corpus.sql()[3], "SELECT id, total FROM orders;");
//! assert_eq!(corpus.labels()[3], "select_orders_id_total");
//! ```

mod corpus;
pub use corpus::Corpus;

mod generator;
pub use generator::{generate, Generator};

mod options;
pub use options::{Options, DEFAULT_SAMPLE_LIMIT};

pub use querygen_core::{Error, Result, Schema};
pub use querygen_sql::Statement;

#[macro_use]
mod error;
pub use error::Error;

pub mod description;

pub mod driver;
pub use driver::DataSource;

pub mod schema;
pub use schema::Schema;

pub mod stmt;

/// A Result type alias that uses querygen's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

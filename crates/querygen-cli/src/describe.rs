use anyhow::{Context, Result};
use clap::Parser;
use querygen::Schema;
use querygen_core::description;
use querygen_driver_sqlite::Sqlite;

#[derive(Parser, Debug)]
pub struct DescribeCommand {
    /// Database connection URL, e.g. `sqlite:data.db`
    url: String,
}

impl DescribeCommand {
    pub(crate) fn run(self) -> Result<()> {
        let source = Sqlite::new(self.url.as_str())?;
        let mut builder = Schema::builder();
        builder.load(source).context("loading schema")?;

        print!("{}", description::write(&builder.build()));
        Ok(())
    }
}

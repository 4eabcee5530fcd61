use crate::Config;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use querygen::{Corpus, Generator, Schema};
use querygen_core::description;
use querygen_driver_sqlite::Sqlite;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::{info, warn};

pub const STATEMENTS_FILE: &str = "statements.sql";
pub const LABELS_FILE: &str = "labels.txt";
pub const REPORT_FILE: &str = "report.txt";
pub const SNAPSHOT_FILE: &str = "schema.json";
pub const DESCRIPTION_FILE: &str = "schema.desc";

#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Database connection URL, e.g. `sqlite:data.db`
    url: String,

    /// Directory to write output files to
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip filter statements
    #[arg(long)]
    no_filters: bool,

    /// Rows sampled per table for filters (0 samples every row)
    #[arg(long)]
    sample_limit: Option<usize>,

    /// Seed for row sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Use `schema.table` names in statements
    #[arg(long)]
    qualify: bool,

    /// Also write a report grouped by table
    #[arg(long)]
    report: bool,
}

impl GenerateCommand {
    pub(crate) fn run(self) -> Result<()> {
        let config = self.config()?;
        let out_dir = &config.out_dir;

        let source = Sqlite::new(self.url.as_str())?;
        let mut builder = Schema::builder();
        let loaded = builder.load(source);
        let schema = builder.build();

        fs::create_dir_all(out_dir)
            .with_context(|| format!("creating {}", out_dir.display()))?;

        // The snapshot is written even when loading failed part way
        write_file(&out_dir.join(SNAPSHOT_FILE), |dst| {
            serde_json::to_writer_pretty(&mut *dst, &schema.snapshot())?;
            writeln!(dst)?;
            Ok(())
        })?;
        write_file(&out_dir.join(DESCRIPTION_FILE), |dst| {
            dst.write_all(description::write(&schema).as_bytes())?;
            Ok(())
        })?;

        if let Err(err) = loaded {
            warn!(
                tables = schema.tables.len(),
                "schema load failed; wrote snapshot of tables read so far"
            );
            println!(
                "  {}",
                style(format!(
                    "Loaded {} table(s) before the failure; no statements generated",
                    schema.tables.len()
                ))
                .red()
                .bold()
            );
            return Err(err).context("loading schema");
        }

        let corpus = Generator::new(config.options()).generate(&schema);
        self.write_corpus(&config, &corpus)?;

        info!(
            tables = schema.tables.len(),
            statements = corpus.len(),
            out_dir = %out_dir.display(),
            "wrote corpus"
        );

        println!();
        println!(
            "  {} {}",
            style("✓").green().bold(),
            style(format!(
                "Generated {} statements from {} tables",
                corpus.len(),
                schema.tables.len()
            ))
            .dim()
        );
        println!();

        Ok(())
    }

    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(out_dir) = &self.out_dir {
            config = config.out_dir(out_dir);
        }
        if self.no_filters {
            config = config.filters(false);
        }
        if let Some(sample_limit) = self.sample_limit {
            config = config.sample_limit(sample_limit);
        }
        if let Some(seed) = self.seed {
            config = config.seed(seed);
        }
        if self.qualify {
            config = config.qualify_table_names(true);
        }
        if self.report {
            config = config.report(true);
        }

        Ok(config)
    }

    fn write_corpus(&self, config: &Config, corpus: &Corpus) -> Result<()> {
        let out_dir = &config.out_dir;

        write_file(&out_dir.join(STATEMENTS_FILE), |dst| {
            Ok(corpus.write_sql(dst)?)
        })?;
        write_file(&out_dir.join(LABELS_FILE), |dst| {
            Ok(corpus.write_labels(dst)?)
        })?;

        if config.report {
            write_file(&out_dir.join(REPORT_FILE), |dst| {
                Ok(corpus.write_report(dst)?)
            })?;
        }

        Ok(())
    }
}

fn write_file(
    path: &Path,
    f: impl FnOnce(&mut BufWriter<File>) -> Result<()>,
) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut dst = BufWriter::new(file);
    f(&mut dst).with_context(|| format!("writing {}", path.display()))?;
    dst.flush()
        .with_context(|| format!("writing {}", path.display()))?;

    println!(
        "  {} {}",
        style("✓").green().bold(),
        style(format!("Wrote {}", path.display())).dim()
    );
    Ok(())
}

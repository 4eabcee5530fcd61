use anyhow::{Context, Result};
use querygen::{Options, DEFAULT_SAMPLE_LIMIT};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration for the `generate` command.
///
/// Loaded from an optional TOML file; command-line flags are applied on top
/// with the setters.
///
/// ```toml
/// out_dir = "corpus"
/// filters = true
/// sample_limit = 100   # 0 reads every row
/// seed = 42
/// qualify_table_names = false
/// report = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory the output files are written to
    pub out_dir: PathBuf,

    /// Generate filter statements
    pub filters: bool,

    /// Rows sampled per table for filters; `0` samples every row
    pub sample_limit: usize,

    /// Seed for row sampling. Unseeded runs sample differently each time.
    pub seed: Option<u64>,

    /// Use `schema.table` in generated statements
    pub qualify_table_names: bool,

    /// Also write the grouped `report.txt`
    pub report: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            filters: true,
            sample_limit: DEFAULT_SAMPLE_LIMIT,
            seed: None,
            qualify_table_names: false,
            report: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        contents
            .parse()
            .with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    pub fn filters(mut self, filters: bool) -> Self {
        self.filters = filters;
        self
    }

    pub fn sample_limit(mut self, sample_limit: usize) -> Self {
        self.sample_limit = sample_limit;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn qualify_table_names(mut self, qualify: bool) -> Self {
        self.qualify_table_names = qualify;
        self
    }

    pub fn report(mut self, report: bool) -> Self {
        self.report = report;
        self
    }

    /// Generator options for this configuration.
    pub fn options(&self) -> Options {
        let sample_limit = match self.sample_limit {
            0 => None,
            limit => Some(limit),
        };

        let options = Options::new()
            .filters(self.filters)
            .sample_limit(sample_limit)
            .qualify_table_names(self.qualify_table_names);

        match self.seed {
            Some(seed) => options.seed(seed),
            None => options,
        }
    }
}

impl std::str::FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn zero_sample_limit_reads_every_row() {
        let options = Config::new().sample_limit(0).options();
        assert_eq!(options.sample_limit, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!("sample_lmit = 3".parse::<Config>().is_err());
    }
}

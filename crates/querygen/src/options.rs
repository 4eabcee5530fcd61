/// Rows sampled per table for filter generation, unless configured otherwise.
pub const DEFAULT_SAMPLE_LIMIT: usize = 100;

/// Controls what the [`Generator`](crate::Generator) emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Generate filter statements from row values
    pub filters: bool,

    /// Maximum number of rows sampled per table. `None` uses every row.
    pub sample_limit: Option<usize>,

    /// Seed for row sampling. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Write tables as `<schema>.<name>` instead of `<name>`
    pub qualify_table_names: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            filters: true,
            sample_limit: Some(DEFAULT_SAMPLE_LIMIT),
            seed: None,
            qualify_table_names: false,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable filter statements
    pub fn filters(mut self, filters: bool) -> Self {
        self.filters = filters;
        self
    }

    /// Set the per-table row sample limit
    pub fn sample_limit(mut self, limit: Option<usize>) -> Self {
        self.sample_limit = limit;
        self
    }

    /// Fix the sampling seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn qualify_table_names(mut self, qualify: bool) -> Self {
        self.qualify_table_names = qualify;
        self
    }
}

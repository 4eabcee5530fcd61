use crate::{Corpus, Options};

use querygen_core::schema::{Schema, Table};
use querygen_sql::Statement;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::{debug, info};

/// Turns a schema into a corpus of statements.
///
/// For every table, in schema order:
///
/// 1. one `SELECT *`;
/// 2. for every column, a projection of that column alone, followed (from
///    the second column on) by a projection of all columns up to and
///    including it. A table of `n` columns yields `2n - 1` projections;
/// 3. when filters are enabled, for every column whose type has comparison
///    operators, one filter per sampled row and operator.
#[derive(Debug)]
pub struct Generator {
    options: Options,
    rng: StdRng,
}

/// Generates a corpus with the default [`Options`].
pub fn generate(schema: &Schema) -> Corpus {
    Generator::new(Options::default()).generate(schema)
}

impl Generator {
    pub fn new(options: Options) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { options, rng }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn generate(&mut self, schema: &Schema) -> Corpus {
        let mut corpus = Corpus::new();
        self.generate_into(schema, &mut corpus);
        corpus
    }

    /// Appends the statements for `schema` to an existing corpus.
    pub fn generate_into(&mut self, schema: &Schema, corpus: &mut Corpus) {
        let start = corpus.len();

        for table in &schema.tables {
            self.generate_table(table, corpus);
        }

        info!(
            tables = schema.tables.len(),
            statements = corpus.len() - start,
            "generated statements"
        );
    }

    fn generate_table(&mut self, table: &Table, corpus: &mut Corpus) {
        let name = self.table_name(table);
        let start = corpus.len();

        corpus.push(Statement::select_all(name.as_str()));
        self.projections(&name, table, corpus);

        if self.options.filters {
            self.filters(&name, table, corpus);
        }

        debug!(
            table = %name,
            columns = table.columns.len(),
            statements = corpus.len() - start,
            "generated table"
        );
    }

    fn projections(&self, name: &str, table: &Table, corpus: &mut Corpus) {
        let mut prefix: Vec<&str> = vec![];

        for column in &table.columns {
            corpus.push(Statement::select_columns(name, [column.name.as_str()]));

            if !prefix.is_empty() {
                let columns = prefix.iter().copied().chain([column.name.as_str()]);
                corpus.push(Statement::select_columns(name, columns));
            }

            prefix.push(&column.name);
        }
    }

    fn filters(&mut self, name: &str, table: &Table, corpus: &mut Corpus) {
        let sample = self.sample(table);

        if sample.is_empty() {
            return;
        }

        for column in &table.columns {
            let (ty, group) = column.ty();
            let operators = group.operators();

            if operators.is_empty() {
                debug!(
                    table = %name,
                    column = %column.name,
                    data_type = %column.data_type,
                    "no filters for column type"
                );
                continue;
            }

            debug!(
                table = %name,
                column = %column.name,
                %ty,
                %group,
                rows = sample.len(),
                "generating filters"
            );

            for &index in &sample {
                let field = table.rows[index].field(column);

                for &op in operators {
                    corpus.push(Statement::filter(
                        name,
                        column.name.as_str(),
                        op,
                        field.value.as_str(),
                    ));
                }
            }
        }
    }

    /// Picks the rows filters are generated from: a shuffled permutation of
    /// all row indices, cut to the sample limit.
    fn sample(&mut self, table: &Table) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..table.rows.len()).collect();
        indices.shuffle(&mut self.rng);

        if let Some(limit) = self.options.sample_limit {
            indices.truncate(limit);
        }

        indices
    }

    fn table_name(&self, table: &Table) -> String {
        if self.options.qualify_table_names {
            table.qualified_name()
        } else {
            table.name.clone()
        }
    }
}

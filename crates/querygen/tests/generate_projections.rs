use pretty_assertions::assert_eq;
use querygen::{generate, Generator, Options, Schema, Statement};

fn schema_with_columns(tables: &[(&str, &[&str])]) -> Schema {
    let mut builder = Schema::builder();
    for (name, columns) in tables {
        let t = builder.table("dbo", name).unwrap();
        for column in *columns {
            builder.column(t, column, "int").unwrap();
        }
    }
    builder.build()
}

#[test]
fn three_columns_in_order() {
    let schema = schema_with_columns(&[("t", &["a", "b", "c"])]);
    let corpus = generate(&schema);

    assert_eq!(
        corpus.sql(),
        [
            "SELECT * FROM t;",
            "SELECT a FROM t;",
            "SELECT b FROM t;",
            "SELECT a, b FROM t;",
            "SELECT c FROM t;",
            "SELECT a, b, c FROM t;",
        ]
    );
    assert_eq!(
        corpus.labels(),
        [
            "select_all_t",
            "select_t_a",
            "select_t_b",
            "select_t_a_b",
            "select_t_c",
            "select_t_a_b_c",
        ]
    );
}

#[test]
fn two_n_minus_one_projections_per_table() {
    for n in 1..=8 {
        let columns: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
        let refs: Vec<&str> = columns.iter().map(String::as_str).collect();
        let schema = schema_with_columns(&[("t", &refs)]);
        let corpus = generate(&schema);

        let select_all = corpus.iter().filter(|s| s.is_select_all()).count();
        let projections = corpus.iter().filter(|s| s.is_select_columns()).count();

        assert_eq!(select_all, 1, "n={n}");
        assert_eq!(projections, 2 * n - 1, "n={n}");
    }
}

#[test]
fn cumulative_projection_sizes_grow_by_one() {
    let schema = schema_with_columns(&[("t", &["a", "b", "c", "d"])]);
    let corpus = generate(&schema);

    let sizes: Vec<usize> = corpus
        .iter()
        .filter_map(Statement::as_select_columns)
        .map(|s| s.columns.len())
        .collect();

    assert_eq!(sizes, [1, 1, 2, 1, 3, 1, 4]);
}

#[test]
fn tables_with_one_two_and_four_columns() {
    let schema = schema_with_columns(&[
        ("one", &["a"]),
        ("two", &["a", "b"]),
        ("four", &["a", "b", "c", "d"]),
    ]);
    let corpus = generate(&schema);

    let count = |table: &str, f: fn(&Statement) -> bool| {
        corpus
            .iter()
            .filter(|s| s.table() == table && f(s))
            .count()
    };

    assert_eq!(count("one", Statement::is_select_all), 1);
    assert_eq!(count("one", Statement::is_select_columns), 1);
    assert_eq!(count("two", Statement::is_select_all), 1);
    assert_eq!(count("two", Statement::is_select_columns), 3);
    assert_eq!(count("four", Statement::is_select_all), 1);
    assert_eq!(count("four", Statement::is_select_columns), 7);
    assert_eq!(corpus.len(), 14);
}

#[test]
fn tables_are_generated_in_schema_order() {
    let schema = schema_with_columns(&[("zeta", &["a"]), ("alpha", &["a"])]);
    let corpus = generate(&schema);

    let tables: Vec<&str> = corpus.iter().map(|s| s.table().as_str()).collect();
    assert_eq!(tables, ["zeta", "zeta", "alpha", "alpha"]);
}

#[test]
fn table_without_columns_only_selects_all() {
    let schema = schema_with_columns(&[("empty", &[])]);
    let corpus = generate(&schema);
    assert_eq!(corpus.sql(), ["SELECT * FROM empty;"]);
}

#[test]
fn empty_schema_generates_nothing() {
    assert!(generate(&Schema::default()).is_empty());
}

#[test]
fn sql_and_labels_stay_paired() {
    let schema = schema_with_columns(&[("orders", &["id", "total"]), ("items", &["sku"])]);
    let corpus = generate(&schema);

    let sql = corpus.sql();
    let labels = corpus.labels();
    assert_eq!(sql.len(), labels.len());

    for (stmt, (sql, label)) in corpus.iter().zip(sql.iter().zip(&labels)) {
        assert_eq!(*sql, stmt.to_sql());
        assert_eq!(*label, stmt.to_label());
        assert!(label.contains(stmt.table().as_str()));
        if let Some(select) = stmt.as_select_columns() {
            for column in &select.columns {
                assert!(sql.contains(column.as_str()));
                assert!(label.contains(column.as_str()));
            }
        }
    }

    let pairs: Vec<_> = corpus.pairs().collect();
    assert_eq!(pairs[3], (sql[3].clone(), labels[3].clone()));
}

#[test]
fn qualified_table_names() {
    let schema = schema_with_columns(&[("orders", &["id"])]);
    let corpus = Generator::new(Options::default().qualify_table_names(true)).generate(&schema);

    assert_eq!(
        corpus.sql(),
        ["SELECT * FROM dbo.orders;", "SELECT id FROM dbo.orders;"]
    );
    assert_eq!(corpus.labels()[0], "select_all_dbo.orders");
}

#[test]
fn generate_into_appends() {
    let schema = schema_with_columns(&[("t", &["a"])]);
    let mut generator = Generator::new(Options::default());

    let mut corpus = generator.generate(&schema);
    generator.generate_into(&schema, &mut corpus);

    assert_eq!(corpus.len(), 4);
    assert_eq!(corpus.statements()[0], corpus.statements()[2]);
}

use clap::Parser;
use pretty_assertions::assert_eq;
use querygen_cli::{Cli, Config};
use rusqlite::Connection;
use std::{
    fs,
    path::{Path, PathBuf},
};

struct TempDir(PathBuf);

impl TempDir {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "querygen-cli-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        Self(path)
    }

    fn path(&self) -> &Path {
        &self.0
    }

    fn read(&self, file: &str) -> String {
        fs::read_to_string(self.0.join(file)).unwrap()
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn database(dir: &TempDir) -> String {
    let path = dir.path().join("db.sqlite");
    let connection = Connection::open(&path).unwrap();
    connection
        .execute_batch(
            "CREATE TABLE orders (id int, note varchar);
             INSERT INTO orders VALUES (1, 'a');
             INSERT INTO orders VALUES (2, 'b');",
        )
        .unwrap();
    format!("sqlite:{}", path.display())
}

fn run(args: &[&str]) -> anyhow::Result<()> {
    Cli::parse_from(["querygen"].iter().chain(args)).run()
}

#[test]
fn generate_writes_every_output() {
    let dir = TempDir::new("generate");
    let url = database(&dir);
    let out = dir.path().join("out");
    let out_str = out.to_str().unwrap();

    run(&["generate", &url, "--out-dir", out_str, "--seed", "1", "--report"]).unwrap();

    let sql = dir.read("out/statements.sql");
    let labels = dir.read("out/labels.txt");

    // 1 select all, 3 projections, 2 rows * (6 + 2) filters
    assert_eq!(sql.lines().count(), 4 + 16);
    assert_eq!(labels.lines().count(), sql.lines().count());
    assert_eq!(
        sql.lines().take(4).collect::<Vec<_>>(),
        [
            "SELECT * FROM orders;",
            "SELECT id FROM orders;",
            "SELECT note FROM orders;",
            "SELECT id, note FROM orders;",
        ]
    );

    assert!(dir.read("out/report.txt").starts_with("-- Table: orders --\n"));
    assert_eq!(
        dir.read("out/schema.desc"),
        "\"main.orders\" : {\n    \"columns\" : {\n        \"id\" : \"int\",\n        \"note\" : \"varchar\"\n    }\n}\n"
    );

    let snapshot: serde_json::Value =
        serde_json::from_str(&dir.read("out/schema.json")).unwrap();
    assert_eq!(snapshot["schemas"], serde_json::json!(["main"]));
    assert_eq!(snapshot["tables"][0]["qualified_name"], "main.orders");
    assert_eq!(snapshot["tables"][0]["rows"].as_array().unwrap().len(), 2);
}

#[test]
fn config_file_and_flags() {
    let dir = TempDir::new("config");
    let url = database(&dir);
    let out = dir.path().join("out");

    let config_path = dir.path().join("querygen.toml");
    fs::write(
        &config_path,
        format!(
            "out_dir = {:?}\nfilters = false\nqualify_table_names = true\n",
            out.to_str().unwrap()
        ),
    )
    .unwrap();

    let config = Config::load(&config_path).unwrap();
    assert!(!config.filters);
    assert_eq!(config.out_dir, out);

    run(&["generate", &url, "--config", config_path.to_str().unwrap()]).unwrap();

    let sql = dir.read("out/statements.sql");
    assert_eq!(
        sql,
        "SELECT * FROM main.orders;\n\
         SELECT id FROM main.orders;\n\
         SELECT note FROM main.orders;\n\
         SELECT id, note FROM main.orders;\n"
    );
    assert!(!dir.path().join("out/report.txt").exists());
}

#[test]
fn bad_url_fails_before_writing() {
    let dir = TempDir::new("bad-url");
    let out = dir.path().join("out");

    let err = run(&["generate", "mysql://localhost/db", "--out-dir", out.to_str().unwrap()])
        .unwrap_err();

    assert!(err.to_string().contains("sqlite"));
    assert!(!out.exists());
}

#[test]
fn missing_config_file() {
    let err = Config::load("/nonexistent/querygen.toml").unwrap_err();
    assert!(err.to_string().starts_with("reading config"));
}

use querygen_core::description::{self, State, Stop};
use querygen_core::schema::{Schema, TableId};

#[test]
fn single_entry() {
    let parsed = description::parse(r#""sales.orders" : {}"#);

    assert!(parsed.is_complete());
    assert_eq!(parsed.tables.len(), 1);
    assert_eq!(parsed.tables[0].id, TableId(0));
    assert_eq!(parsed.tables[0].schema, "sales");
    assert_eq!(parsed.tables[0].name, "orders");
    assert!(parsed.tables[0].columns.is_empty());
}

#[test]
fn key_without_period_keeps_everything_as_schema() {
    let parsed = description::parse(r#""ordersonly" : {}"#);

    assert!(parsed.is_complete());
    assert_eq!(parsed.tables.len(), 1);
    assert_eq!(parsed.tables[0].schema, "ordersonly");
    assert_eq!(parsed.tables[0].name, "");
}

#[test]
fn splits_on_first_period_only() {
    let parsed = description::parse(r#""a.b.c" : {}"#);
    assert_eq!(parsed.tables[0].schema, "a");
    assert_eq!(parsed.tables[0].name, "b.c");
}

#[test]
fn underscores_are_key_characters() {
    let parsed = description::parse(r#""human_resources.job_candidate" : {}"#);
    assert_eq!(parsed.tables[0].schema, "human_resources");
    assert_eq!(parsed.tables[0].name, "job_candidate");
}

#[test]
fn multiple_entries_across_lines() {
    let input = r#"
"sales.orders" : {
    "columns" : {
        "id" : "int"
    }
}
"sales.customers" : {
}

    "person.address"    :     {   }
"#;
    let parsed = description::parse(input);

    assert!(parsed.is_complete());
    let names: Vec<_> = parsed
        .tables
        .iter()
        .map(|t| (t.schema.as_str(), t.name.as_str()))
        .collect();
    assert_eq!(
        names,
        [
            ("sales", "orders"),
            ("sales", "customers"),
            ("person", "address")
        ]
    );
    assert_eq!(parsed.tables[2].id, TableId(2));
}

#[test]
fn empty_input_is_complete() {
    let parsed = description::parse("");
    assert!(parsed.is_complete());
    assert!(parsed.tables.is_empty());

    let parsed = description::parse(" \n\t \n");
    assert!(parsed.is_complete());
}

#[test]
fn digit_in_key_aborts_and_keeps_earlier_tables() {
    let input = "\"sales.orders\" : {}\n\"sales.q1\" : {}\n\"sales.later\" : {}";
    let parsed = description::parse(input);

    assert_eq!(parsed.tables.len(), 1);
    assert_eq!(parsed.tables[0].name, "orders");

    let abort = parsed.abort().unwrap();
    assert_eq!(abort.ch, '1');
    assert_eq!(abort.state, State::Key);
    assert_eq!(abort.line, 2);
    assert_eq!(abort.column, 9);
    assert_eq!(abort.offset, input.find('1').unwrap());
}

#[test]
fn stray_character_at_top_level_aborts() {
    let parsed = description::parse(r#""a.b" : {} , "c.d" : {}"#);

    assert_eq!(parsed.tables.len(), 1);
    let abort = parsed.abort().unwrap();
    assert_eq!(abort.ch, ',');
    assert_eq!(abort.state, State::Start);
    assert_eq!(abort.offset, 11);
}

#[test]
fn whitespace_in_key_aborts() {
    let parsed = description::parse(r#""sales orders" : {}"#);

    assert!(parsed.tables.is_empty());
    assert_eq!(parsed.abort().unwrap().state, State::Key);
    assert_eq!(parsed.abort().unwrap().ch, ' ');
}

#[test]
fn closing_brace_at_top_level_aborts() {
    let parsed = description::parse("}");
    assert!(parsed.tables.is_empty());
    assert_eq!(parsed.abort().unwrap().state, State::Start);
}

#[test]
fn unterminated_body_is_truncated() {
    let parsed = description::parse(r#""a.b" : { "columns" : {"#);

    assert_eq!(parsed.tables.len(), 1);
    assert_eq!(
        parsed.stop,
        Stop::Truncated {
            state: State::Value,
            scope: 2
        }
    );
}

#[test]
fn unterminated_key_is_truncated() {
    let parsed = description::parse(r#""a.b"#);

    assert!(parsed.tables.is_empty());
    assert_eq!(
        parsed.stop,
        Stop::Truncated {
            state: State::Key,
            scope: 0
        }
    );
}

#[test]
fn key_without_body_is_truncated() {
    let parsed = description::parse(r#""a.b" :"#);

    assert_eq!(parsed.tables.len(), 1);
    assert_eq!(
        parsed.stop,
        Stop::Truncated {
            state: State::Start,
            scope: 0
        }
    );
}

#[test]
fn written_description_parses_back() {
    let mut builder = Schema::builder();
    let orders = builder.table("sales", "orders").unwrap();
    builder.column(orders, "id", "int").unwrap();
    builder.column(orders, "placed_at", "datetime").unwrap();
    builder.table("person", "address").unwrap();
    let schema = builder.build();

    let text = description::write(&schema);
    let parsed = description::parse(&text);

    assert!(parsed.is_complete());
    let tables: Vec<_> = parsed
        .tables
        .iter()
        .map(|t| t.qualified_name())
        .collect();
    assert_eq!(tables, ["sales.orders", "person.address"]);
}

#[test]
fn parsed_tables_become_a_schema() {
    let schema = description::parse(r#""a.b" : {} "c.d" : {}"#).into_schema();
    assert_eq!(schema.tables.len(), 2);
    assert_eq!(schema.table(TableId(1)).qualified_name(), "c.d");
}

#[test]
fn parse_file_reports_missing_file() {
    let err = description::parse_file("/definitely/not/here.desc").unwrap_err();
    assert!(err.to_string().starts_with("reading /definitely/not/here.desc"));
}

#[test]
fn column_bodies_are_skipped() {
    let parsed = description::parse(
        r#""sales.orders" : { "columns" : { "id" : "int", "total" : "money" } }"#,
    );

    assert!(parsed.is_complete());
    assert_eq!(parsed.tables.len(), 1);
    assert!(parsed.tables[0].columns.is_empty());
}

use querygen_sql::stmt::{BinaryOp, SelectColumns, Statement};
use querygen_sql::Serializer;

#[test]
fn select_all() {
    assert_eq!(
        Statement::select_all("orders").to_sql(),
        "SELECT * FROM orders;"
    );
}

#[test]
fn select_single_column() {
    assert_eq!(
        Statement::select_columns("orders", ["id"]).to_sql(),
        "SELECT id FROM orders;"
    );
}

#[test]
fn select_columns_keeps_order_and_duplicates() {
    let stmt = Statement::select_columns("orders", ["total", "id", "total"]);
    assert_eq!(stmt.to_sql(), "SELECT total, id, total FROM orders;");
}

#[test]
fn qualified_table_names_are_written_verbatim() {
    let stmt = Statement::select_columns("Sales.SalesOrderHeader", ["SalesOrderID"]);
    assert_eq!(
        stmt.to_sql(),
        "SELECT SalesOrderID FROM Sales.SalesOrderHeader;"
    );
}

#[test]
fn filter_every_operator() {
    let expected = [
        (BinaryOp::Eq, "SELECT * FROM orders WHERE id = 5;"),
        (BinaryOp::Ne, "SELECT * FROM orders WHERE id != 5;"),
        (BinaryOp::Gt, "SELECT * FROM orders WHERE id > 5;"),
        (BinaryOp::Lt, "SELECT * FROM orders WHERE id < 5;"),
        (BinaryOp::Ge, "SELECT * FROM orders WHERE id >= 5;"),
        (BinaryOp::Le, "SELECT * FROM orders WHERE id <= 5;"),
    ];

    for (op, sql) in expected {
        assert_eq!(Statement::filter("orders", "id", op, "5").to_sql(), sql);
    }
}

#[test]
fn filter_value_is_not_quoted_or_escaped() {
    let stmt = Statement::filter("people", "name", BinaryOp::Eq, "O'Brien");
    assert_eq!(stmt.to_sql(), "SELECT * FROM people WHERE name = O'Brien;");

    let stmt = Statement::filter("people", "name", BinaryOp::Ne, "");
    assert_eq!(stmt.to_sql(), "SELECT * FROM people WHERE name != ;");
}

#[test]
fn unterminated_serializer() {
    let stmt = Statement::select_all("orders");
    assert_eq!(
        Serializer::new().unterminated().serialize(&stmt),
        "SELECT * FROM orders"
    );
    assert_eq!(Serializer::default().serialize(&stmt), stmt.to_sql());
}

#[test]
#[cfg_attr(debug_assertions, should_panic(expected = "at least one column"))]
#[cfg_attr(not(debug_assertions), ignore)]
fn projection_without_columns_panics_in_debug() {
    SelectColumns::new("orders", Vec::<String>::new());
}

#[test]
fn try_new_rejects_empty_projection() {
    assert_eq!(SelectColumns::try_new("orders", Vec::<String>::new()), None);

    let select = SelectColumns::try_new("orders", ["id", "total"]).unwrap();
    assert_eq!(select.columns, ["id", "total"]);
    assert_eq!(
        Statement::from(select).to_sql(),
        "SELECT id, total FROM orders;"
    );
}

#[test]
fn accessors() {
    let stmt = Statement::select_columns("orders", ["a", "b"]);
    assert!(stmt.is_select_columns());
    assert_eq!(stmt.table(), "orders");
    assert_eq!(stmt.column_count(), 2);

    let stmt = Statement::filter("orders", "a", BinaryOp::Lt, "3");
    assert!(stmt.is_filter());
    assert_eq!(stmt.as_filter().unwrap().op, BinaryOp::Lt);
    assert_eq!(stmt.column_count(), 1);

    assert_eq!(Statement::select_all("orders").column_count(), 0);
}

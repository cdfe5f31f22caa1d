use navlink::{
    async_trait,
    driver::{Connection, Operation, QuerySql, Response},
    schema::{EntityDef, TableDef},
    stmt::{Type, Value},
    Db, Flavor, Result,
};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};
use std_util::{assert_err, assert_ok};

/// Records every executed command and reports a fixed row count.
#[derive(Debug, Clone)]
struct Recorder {
    executed: Arc<Mutex<Vec<QuerySql>>>,
    count: u64,
}

impl Recorder {
    fn new(count: u64) -> Recorder {
        Recorder {
            executed: Arc::default(),
            count,
        }
    }

    fn executed(&self) -> Vec<QuerySql> {
        self.executed.lock().unwrap().clone()
    }
}

#[async_trait]
impl Connection for Recorder {
    async fn exec(&self, op: Operation) -> Result<Response> {
        let Operation::QuerySql(query) = op;
        self.executed.lock().unwrap().push(query);
        Ok(Response::count(self.count))
    }
}

#[derive(Debug)]
struct Unreachable;

#[async_trait]
impl Connection for Unreachable {
    async fn exec(&self, _op: Operation) -> Result<Response> {
        Err(navlink::Error::driver_operation_failed(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}

fn db(flavor: Flavor, connection: impl Connection) -> Db {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    Db::builder()
        .register_table(
            TableDef::new("Customers")
                .column("id", Type::I64)
                .primary_key(["id"]),
        )
        .register_table(
            TableDef::new("Orders")
                .column("id", Type::I64)
                .nullable_column("customer_id", Type::I64)
                .primary_key(["id"])
                .foreign_key("fk_orders_customer", ["customer_id"], "Customers", ["id"]),
        )
        .register_entity(EntityDef::new("Customer", "Customers").collection("Orders", "Order"))
        .register_entity(EntityDef::new("Order", "Orders").navigation("Customer", "Customer"))
        .base_uri("http://localhost:8080/odata/svc")
        .flavor(flavor)
        .build(connection)
        .unwrap()
}

#[tokio::test]
async fn update_reference_prepared() {
    let recorder = Recorder::new(1);
    let db = db(Flavor::Mysql, recorder.clone());

    let count = assert_ok!(
        db.update_reference("Orders(5)/Customer/$ref", "Customers(7)", true)
            .await
    );

    assert_eq!(count, 1);
    assert_eq!(
        recorder.executed(),
        vec![QuerySql {
            sql: "UPDATE `Orders` SET `customer_id` = ? WHERE `Orders`.`id` = 5;".to_string(),
            params: vec![Value::I64(7)],
        }]
    );
}

#[tokio::test]
async fn update_reference_literal() {
    let recorder = Recorder::new(1);
    let db = db(Flavor::Postgresql, recorder.clone());

    assert_ok!(
        db.update_reference(
            "http://localhost:8080/odata/svc/Customers(1)/Orders/$ref",
            "http://localhost:8080/odata/svc/Orders(42)",
            false
        )
        .await
    );

    let executed = recorder.executed();
    assert_eq!(
        executed[0].sql,
        r#"UPDATE "Orders" SET "customer_id" = 1 WHERE "Orders"."id" = 42;"#
    );
    assert!(executed[0].params.is_empty());
}

#[tokio::test]
async fn delete_reference() {
    let recorder = Recorder::new(0);
    let db = db(Flavor::Sqlite, recorder.clone());

    // Zero rows is reported, not an error
    let count = assert_ok!(db.delete_reference("Customers(1)/Orders(42)/$ref").await);
    assert_eq!(count, 0);

    assert_eq!(
        recorder.executed()[0].sql,
        r#"UPDATE "Orders" SET "customer_id" = NULL WHERE "Orders"."id" = 42;"#
    );
}

#[tokio::test]
async fn translation_errors_are_not_executed() {
    let recorder = Recorder::new(1);
    let db = db(Flavor::Postgresql, recorder.clone());

    let err = assert_err!(
        db.update_reference("Orders(5)/Customer/$ref", "Orders(7)", true)
            .await
    );
    assert!(err.is_invalid_uri());
    assert!(err.to_string().starts_with("reference update on `Orders(5)/Customer/$ref`: "));

    let err = assert_err!(db.delete_reference("Customers(1)/$ref").await);
    assert!(err.is_invalid_path());

    // Without `$ref` the path addresses the related entity, not the link
    let err = assert_err!(
        db.update_reference("Orders(5)/Customer", "Customers(7)", true)
            .await
    );
    assert!(err.is_invalid_path());
    assert_eq!(
        err.to_string(),
        "invalid resource path: `Orders(5)/Customer` does not address a link; expected a trailing `$ref`"
    );

    let err = assert_err!(
        db.delete_reference("http://elsewhere/odata/svc/Customers(1)/Orders(42)/$ref")
            .await
    );
    assert!(err.is_invalid_uri());

    assert!(recorder.executed().is_empty());
}

#[tokio::test]
async fn driver_errors_propagate() {
    let db = db(Flavor::Postgresql, Unreachable);

    let err = assert_err!(db.delete_reference("Customers(1)/Orders(42)/$ref").await);
    assert!(err.is_driver_operation_failed());
}

#[tokio::test]
async fn clones_share_connection() {
    let recorder = Recorder::new(1);
    let db = db(Flavor::Postgresql, recorder.clone());
    let other = db.clone();

    let (a, b) = tokio::join!(
        db.update_reference("Orders(1)/Customer/$ref", "Customers(7)", true),
        other.update_reference("Orders(2)/Customer/$ref", "Customers(7)", true),
    );

    assert_ok!(a);
    assert_ok!(b);
    assert_eq!(recorder.executed().len(), 2);
}

#[test]
fn builder_normalizes_base_uri() {
    let db = db(Flavor::Postgresql, Recorder::new(1));
    assert_eq!(db.base_uri().as_str(), "http://localhost:8080/odata/svc/");
    assert_eq!(db.flavor(), Flavor::Postgresql);
}

#[test]
fn builder_rejects_bad_input() {
    let err = assert_err!(Db::builder()
        .base_uri("not a uri")
        .build(Recorder::new(1)));
    assert!(err.is_invalid_uri());

    let err = assert_err!(Db::builder()
        .register_entity(EntityDef::new("Customer", "Customers"))
        .build(Recorder::new(1)));
    assert!(err.is_invalid_schema());
}

#[test]
fn translate_and_serialize_without_executing() {
    let recorder = Recorder::new(1);
    let db = db(Flavor::Postgresql, recorder.clone());

    let command = assert_ok!(db.translate(
        "Orders(5)/Customer/$ref",
        Some("Customers(7)"),
        true,
        false
    ));

    assert_eq!(
        db.serialize(&command),
        r#"UPDATE "Orders" SET "customer_id" = $1 WHERE "Orders"."id" = 5;"#
    );
    assert!(recorder.executed().is_empty());
}

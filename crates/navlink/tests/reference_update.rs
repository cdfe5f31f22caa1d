use navlink::{
    reference::{apply_target, resolve_direction, walk, Keys},
    schema::{
        app::{EntitySetId, EntityTypeId, NavigationId},
        db::{ColumnId, Table},
        EntityDef, TableDef,
    },
    stmt::{Expr, Statement, Type, Update, Value},
    uri::{EntitySetSegment, NavigationSegment, ResourcePath, Segment},
    ForeignKeyDirection, ReferenceUpdate, ReferenceUpdateCommand, Result, Schema,
};
use navlink_sql::Serializer;
use pretty_assertions::assert_eq;
use std_util::{assert_err, assert_ok};
use url::Url;

fn schema() -> Schema {
    Schema::builder()
        .table(
            TableDef::new("Customers")
                .column("id", Type::I64)
                .column("name", Type::String)
                .primary_key(["id"]),
        )
        .table(
            TableDef::new("Orders")
                .column("id", Type::I64)
                .nullable_column("customer_id", Type::I64)
                .primary_key(["id"])
                .foreign_key("fk_orders_customer", ["customer_id"], "Customers", ["id"]),
        )
        .table(
            TableDef::new("Lines")
                .column("order_id", Type::I64)
                .column("line", Type::I32)
                .primary_key(["order_id", "line"]),
        )
        .table(
            TableDef::new("Shipments")
                .column("id", Type::I64)
                .nullable_column("line_order_id", Type::I64)
                .nullable_column("line_no", Type::I32)
                .primary_key(["id"])
                .foreign_key(
                    "fk_shipments_line",
                    ["line_order_id", "line_no"],
                    "Lines",
                    ["order_id", "line"],
                ),
        )
        .table(
            TableDef::new("Accounts")
                .column("code", Type::String)
                .nullable_column("owner_id", Type::I64)
                .unique_key("uq_accounts_code", ["code"])
                .foreign_key("fk_accounts_owner", ["owner_id"], "Customers", ["id"]),
        )
        .table(
            TableDef::new("Vendors")
                .column("vendor_id", Type::I64)
                .primary_key(["vendor_id"]),
        )
        .table(
            TableDef::new("Products")
                .column("id", Type::I64)
                .nullable_column("vendor_id", Type::I64)
                .primary_key(["id"])
                .foreign_key("fk_products_vendor", ["vendor_id"], "Vendors", ["vendor_id"]),
        )
        .table(
            TableDef::new("Employees")
                .column("id", Type::I64)
                .nullable_column("manager_id", Type::I64)
                .primary_key(["id"])
                .foreign_key("fk_employees_manager", ["manager_id"], "Employees", ["id"]),
        )
        .table(
            TableDef::new("Badges")
                .column("id", Type::I64)
                .nullable_column("holder_id", Type::I64)
                .primary_key(["id"])
                .foreign_key("fk_badges_holder", ["holder_id"], "Customers", ["id"]),
        )
        .table(
            TableDef::new("Notes")
                .column("id", Type::I64)
                .column("body", Type::String)
                .primary_key(["id"]),
        )
        .table(
            TableDef::new("Tags")
                .column("label", Type::String)
                .nullable_column("order_id", Type::I64)
                .foreign_key("fk_tags_order", ["order_id"], "Orders", ["id"]),
        )
        .entity(
            EntityDef::new("Customer", "Customers")
                .collection("Orders", "Order")
                .collection("Notes", "Note"),
        )
        .entity(EntityDef::new("Order", "Orders").navigation("Customer", "Customer"))
        .entity(EntityDef::new("Line", "Lines"))
        .entity(EntityDef::new("Shipment", "Shipments").navigation("Line", "Line"))
        .entity(EntityDef::new("Account", "Accounts").navigation("Owner", "Customer"))
        .entity(EntityDef::new("Vendor", "Vendors").property("vendor_id", "VendorID"))
        .entity(EntityDef::new("Product", "Products").navigation("Vendor", "Vendor"))
        .entity(
            EntityDef::new("Employee", "Employees")
                .navigation("Manager", "Employee")
                .collection("Reports", "Employee"),
        )
        .entity(
            EntityDef::new("Badge", "Badges")
                .property_type("holder_id", Type::String)
                .navigation("Holder", "Customer"),
        )
        .entity(EntityDef::new("Note", "Notes"))
        .entity(EntityDef::new("Tag", "Tags").navigation("Order", "Order"))
        .build()
        .unwrap()
}

fn base() -> Url {
    Url::parse("http://localhost:8080/svc/").unwrap()
}

fn translate(
    schema: &Schema,
    path: &str,
    target: Option<&str>,
    prepared: bool,
    delete: bool,
) -> Result<ReferenceUpdateCommand> {
    let path = ResourcePath::parse(&schema.app, path)?;
    ReferenceUpdate::new(schema, &path, &base()).translate(target, prepared, delete)
}

fn sql(schema: &Schema, command: &ReferenceUpdateCommand) -> String {
    Serializer::postgresql(&schema.db).serialize(&Statement::Update(command.stmt.clone()))
}

fn table<'a>(schema: &'a Schema, name: &str) -> &'a Table {
    schema.db.table_by_name(name).unwrap()
}

fn column(table: &Table, name: &str) -> ColumnId {
    table.column_by_name(name).unwrap().id
}

#[test]
fn single_valued_navigation_updates_origin() {
    let schema = schema();
    let command = assert_ok!(translate(
        &schema,
        "Orders(5)/Customer/$ref",
        Some("Customers(7)"),
        true,
        false
    ));

    let orders = table(&schema, "Orders");
    let mut expected = Update::new(orders.id);
    expected
        .assignments
        .set(column(orders, "customer_id"), Expr::arg(0));
    expected.filter = Some(Expr::eq(
        Expr::qualified_column(column(orders, "id")),
        5i64,
    ));

    assert_eq!(command.direction, ForeignKeyDirection::OriginOwnsFk);
    assert_eq!(command.stmt, expected);
    assert_eq!(command.params, Some(vec![Value::I64(7)]));
    assert_eq!(
        sql(&schema, &command),
        r#"UPDATE "Orders" SET "customer_id" = $1 WHERE "Orders"."id" = 5;"#
    );
}

#[test]
fn collection_navigation_delete_updates_navigated_table() {
    let schema = schema();
    let command = assert_ok!(translate(
        &schema,
        "Customers(1)/Orders(42)/$ref",
        None,
        false,
        true
    ));

    assert_eq!(command.direction, ForeignKeyDirection::ReferencedOwnsFk);
    assert_eq!(command.stmt.target, table(&schema, "Orders").id);
    assert_eq!(command.params, None);
    assert_eq!(
        sql(&schema, &command),
        r#"UPDATE "Orders" SET "customer_id" = NULL WHERE "Orders"."id" = 42;"#
    );
}

#[test]
fn collection_navigation_target_names_the_updated_row() {
    let schema = schema();
    let command = assert_ok!(translate(
        &schema,
        "Customers(1)/Orders/$ref",
        Some("Orders(42)"),
        false,
        false
    ));

    assert_eq!(
        sql(&schema, &command),
        r#"UPDATE "Orders" SET "customer_id" = 1 WHERE "Orders"."id" = 42;"#
    );
}

#[test]
fn self_referencing_foreign_key() {
    let schema = schema();

    let command = assert_ok!(translate(
        &schema,
        "Employees(1)/Manager/$ref",
        Some("Employees(2)"),
        false,
        false
    ));
    assert_eq!(
        sql(&schema, &command),
        r#"UPDATE "Employees" SET "manager_id" = 2 WHERE "Employees"."id" = 1;"#
    );

    // Adding employee 1 to the reports of employee 2 is the same link
    let command = assert_ok!(translate(
        &schema,
        "Employees(2)/Reports/$ref",
        Some("Employees(1)"),
        false,
        false
    ));
    assert_eq!(
        sql(&schema, &command),
        r#"UPDATE "Employees" SET "manager_id" = 2 WHERE "Employees"."id" = 1;"#
    );
}

#[test]
fn delete_assigns_null_to_every_column() {
    let schema = schema();

    for prepared in [false, true] {
        let command = assert_ok!(translate(
            &schema,
            "Shipments(3)/Line/$ref",
            None,
            prepared,
            true
        ));

        assert_eq!(command.stmt.assignments.len(), 2);

        if prepared {
            assert_eq!(command.params, Some(vec![Value::Null, Value::Null]));
        } else {
            assert!(command
                .stmt
                .assignments
                .exprs()
                .all(|expr| expr.is_value_null()));
        }
    }
}

#[test]
fn delete_ignores_target_values() {
    let schema = schema();

    let command = assert_ok!(translate(
        &schema,
        "Orders(5)/Customer/$ref",
        Some("Customers(7)"),
        true,
        true
    ));
    assert_eq!(command.params(), &[Value::Null]);
    assert_eq!(
        sql(&schema, &command),
        r#"UPDATE "Orders" SET "customer_id" = $1 WHERE "Orders"."id" = 5;"#
    );

    // Collection-valued: the target still picks the row to unlink
    let command = assert_ok!(translate(
        &schema,
        "Customers(1)/Orders/$ref",
        Some("Orders(42)"),
        false,
        true
    ));
    assert!(command
        .stmt
        .assignments
        .exprs()
        .all(|expr| expr.is_value_null()));
    assert_eq!(
        sql(&schema, &command),
        r#"UPDATE "Orders" SET "customer_id" = NULL WHERE "Orders"."id" = 42;"#
    );
}

#[test]
fn literal_mode_embeds_values() {
    let schema = schema();
    let command = assert_ok!(translate(
        &schema,
        "Orders(5)/Customer/$ref",
        Some("Customers(7)"),
        false,
        false
    ));

    assert!(!command.is_prepared());
    assert!(command.params().is_empty());
    assert_eq!(
        sql(&schema, &command),
        r#"UPDATE "Orders" SET "customer_id" = 7 WHERE "Orders"."id" = 5;"#
    );
}

#[test]
fn navigation_keys_used_without_target() {
    let schema = schema();
    let command = assert_ok!(translate(
        &schema,
        "Orders(5)/Customer(7)/$ref",
        None,
        false,
        false
    ));

    assert_eq!(
        sql(&schema, &command),
        r#"UPDATE "Orders" SET "customer_id" = 7 WHERE "Orders"."id" = 5;"#
    );
}

#[test]
fn target_replaces_navigation_keys() {
    let schema = schema();
    let command = assert_ok!(translate(
        &schema,
        "Orders(5)/Customer(7)/$ref",
        Some("Customers(9)"),
        true,
        false
    ));

    assert_eq!(command.params(), &[Value::I64(9)]);
}

#[test]
fn absolute_target_uri() {
    let schema = schema();
    let command = assert_ok!(translate(
        &schema,
        "Orders(5)/Customer/$ref",
        Some("http://localhost:8080/svc/Customers(7)"),
        true,
        false
    ));

    assert_eq!(command.params(), &[Value::I64(7)]);
}

#[test]
fn composite_foreign_key_in_key_order() {
    let schema = schema();
    let command = assert_ok!(translate(
        &schema,
        "Shipments(3)/Line/$ref",
        Some("Lines(line=2,order_id=42)"),
        true,
        false
    ));

    let shipments = table(&schema, "Shipments");
    let columns: Vec<_> = command.stmt.assignments.keys().collect();
    assert_eq!(
        columns,
        vec![
            column(shipments, "line_order_id"),
            column(shipments, "line_no")
        ]
    );

    // Assignment `i` is bound to parameter `i`
    for (i, expr) in command.stmt.assignments.exprs().enumerate() {
        assert_eq!(expr.as_arg().map(|arg| arg.position), Some(i));
    }

    assert_eq!(command.params(), &[Value::I64(42), Value::I32(2)]);
    assert_eq!(
        sql(&schema, &command),
        r#"UPDATE "Shipments" SET "line_order_id" = $1, "line_no" = $2 WHERE "Shipments"."id" = 3;"#
    );
}

#[test]
fn composite_key_predicate() {
    let schema = schema();
    let shipments = "Shipments(3)/Line(order_id=42,line=2)/$ref";

    let command = assert_ok!(translate(&schema, shipments, None, false, false));
    assert_eq!(
        sql(&schema, &command),
        r#"UPDATE "Shipments" SET "line_order_id" = 42, "line_no" = 2 WHERE "Shipments"."id" = 3;"#
    );
}

#[test]
fn unique_key_when_no_primary_key() {
    let schema = schema();
    let command = assert_ok!(translate(
        &schema,
        "Accounts('ACME')/Owner/$ref",
        Some("Customers(7)"),
        false,
        false
    ));

    assert_eq!(
        sql(&schema, &command),
        r#"UPDATE "Accounts" SET "owner_id" = 7 WHERE "Accounts"."code" = 'ACME';"#
    );
}

#[test]
fn key_predicates_use_property_names() {
    let schema = schema();
    let command = assert_ok!(translate(
        &schema,
        "Products(1)/Vendor/$ref",
        Some("Vendors(VendorID=3)"),
        false,
        false
    ));

    assert_eq!(
        sql(&schema, &command),
        r#"UPDATE "Products" SET "vendor_id" = 3 WHERE "Products"."id" = 1;"#
    );
}

#[test]
fn assigned_values_follow_update_property() {
    let schema = schema();

    // `Badge.holder_id` is exposed as a string, so its literal must be quoted
    // even though `Customer.id` is not
    let err = assert_err!(translate(
        &schema,
        "Badges(1)/Holder/$ref",
        Some("Customers(7)"),
        true,
        false
    ));
    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert literal 7 to I64");

    let command = assert_ok!(translate(
        &schema,
        "Badges(1)/Holder/$ref",
        Some("Customers('7')"),
        true,
        false
    ));
    assert_eq!(command.params(), &[Value::I64(7)]);

    // Nullability is also the update property's
    let command = assert_ok!(translate(
        &schema,
        "Badges(1)/Holder/$ref",
        Some("Customers(null)"),
        true,
        false
    ));
    assert_eq!(command.params(), &[Value::Null]);
}

#[test]
fn target_rekeys_the_matching_side() {
    let schema = schema();
    let base = base();

    let path = assert_ok!(ResourcePath::parse(&schema.app, "Orders(5)/Customer/$ref"));
    let mut resolved = assert_ok!(resolve_direction(&schema.db, assert_ok!(walk(&schema, &path))));
    assert_ok!(apply_target(&schema, &base, Some("Customers(7)"), &mut resolved));

    assert!(resolved.reference.keys.is_resolved());
    assert_eq!(resolved.reference.keys.get("id"), Some("7"));
    assert!(!resolved.update.keys.is_resolved());
    assert_eq!(resolved.update.keys.get("id"), Some("5"));

    let path = assert_ok!(ResourcePath::parse(&schema.app, "Customers(1)/Orders/$ref"));
    let mut resolved = assert_ok!(resolve_direction(&schema.db, assert_ok!(walk(&schema, &path))));
    assert_ok!(apply_target(&schema, &base, Some("Orders(42)"), &mut resolved));

    assert!(resolved.update.keys.is_resolved());
    assert_eq!(resolved.update.keys.get("id"), Some("42"));
    assert!(!resolved.reference.keys.is_resolved());

    // Without a target both sides keep the path's keys
    let mut resolved = assert_ok!(resolve_direction(&schema.db, assert_ok!(walk(&schema, &path))));
    assert_ok!(apply_target(&schema, &base, None, &mut resolved));
    assert!(!resolved.update.keys.is_resolved());
    assert!(!resolved.reference.keys.is_resolved());
}

#[test]
fn translation_is_idempotent() {
    let schema = schema();
    let path = assert_ok!(ResourcePath::parse(&schema.app, "Shipments(3)/Line/$ref"));
    let base = base();
    let update = ReferenceUpdate::new(&schema, &path, &base);

    let first = assert_ok!(update.translate(Some("Lines(order_id=42,line=2)"), true, false));
    let second = assert_ok!(update.translate(Some("Lines(order_id=42,line=2)"), true, false));

    assert_eq!(first, second);
}

#[test]
fn missing_foreign_key_is_schema_error() {
    let schema = schema();
    let err = assert_err!(translate(
        &schema,
        "Customers(1)/Notes/$ref",
        Some("Notes(2)"),
        false,
        false
    ));

    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: no foreign key from `Notes` to `Customers`"
    );
}

#[test]
fn table_without_row_key_is_schema_error() {
    let schema = schema();
    let err = assert_err!(translate(
        &schema,
        "Tags/Order/$ref",
        Some("Orders(5)"),
        false,
        false
    ));

    assert!(err.is_invalid_schema());
}

#[test]
fn unbound_update_key_is_schema_error() {
    let schema = schema();
    let err = assert_err!(translate(
        &schema,
        "Customers(1)/Orders/$ref",
        None,
        false,
        true
    ));

    assert!(err.is_invalid_schema());
}

#[test]
fn unbound_reference_key_is_schema_error() {
    let schema = schema();
    let err = assert_err!(translate(
        &schema,
        "Orders(5)/Customer/$ref",
        None,
        false,
        false
    ));

    assert!(err.is_invalid_schema());
}

#[test]
fn target_must_match_reference_type() {
    let schema = schema();

    let err = assert_err!(translate(
        &schema,
        "Orders(5)/Customer/$ref",
        Some("Orders(1)"),
        false,
        false
    ));
    assert!(err.is_invalid_uri());

    let err = assert_err!(translate(
        &schema,
        "Orders(5)/Customer/$ref",
        Some("Customers(1"),
        false,
        false
    ));
    assert!(err.is_invalid_uri());
}

#[test]
fn coercion_error_names_literal() {
    let schema = schema();

    let err = assert_err!(translate(
        &schema,
        "Orders(5)/Customer/$ref",
        Some("Customers('x')"),
        false,
        false
    ));
    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert literal 'x' to I64");

    let err = assert_err!(translate(
        &schema,
        "Orders(abc)/Customer/$ref",
        Some("Customers(7)"),
        false,
        false
    ));
    assert!(err.is_type_conversion());
    assert!(err.to_string().contains("abc"), "{err}");
}

#[test]
fn two_navigations_is_shape_error() {
    let schema = schema();
    let err = assert_err!(translate(
        &schema,
        "Customers(1)/Orders(42)/Customer/$ref",
        None,
        false,
        true
    ));

    assert!(err.is_invalid_path());
}

#[test]
fn shape_checked_before_schema_lookup() {
    let schema = schema();

    // Ids that resolve to nothing; a lookup would panic
    let entity_set = Segment::EntitySet(EntitySetSegment {
        entity_set: EntitySetId(99),
        entity_type: EntityTypeId(99),
        keys: vec![],
    });
    let navigation = Segment::Navigation(NavigationSegment {
        navigation: NavigationId {
            entity_type: EntityTypeId(99),
            index: 0,
        },
        target: EntityTypeId(98),
        collection: false,
        keys: vec![],
    });

    for segments in [
        vec![],
        vec![entity_set.clone()],
        vec![navigation.clone(), entity_set.clone()],
        vec![entity_set.clone(), navigation.clone(), navigation.clone()],
    ] {
        let path = ResourcePath {
            segments,
            reference: true,
        };

        let err = assert_err!(walk(&schema, &path));
        assert!(err.is_invalid_path(), "{err}");
    }
}

#[test]
fn direction_attaches_foreign_key_to_update_side() {
    let schema = schema();
    let path = assert_ok!(ResourcePath::parse(&schema.app, "Customers(1)/Orders(42)"));

    let walked = assert_ok!(walk(&schema, &path));
    assert!(walked.collection);

    let resolved = assert_ok!(resolve_direction(&schema.db, walked));
    assert_eq!(resolved.direction, ForeignKeyDirection::ReferencedOwnsFk);
    assert_eq!(resolved.update.table.name, "Orders");
    assert_eq!(resolved.reference.table.name, "Customers");
    assert_eq!(
        resolved.update.foreign_key.map(|fk| &fk.name[..]),
        Some("fk_orders_customer")
    );
    assert!(resolved.reference.foreign_key.is_none());
    assert!(matches!(resolved.update.keys, Keys::FromPath(ref keys) if keys.len() == 1));
}

#[test]
fn direction_follows_cardinality() {
    assert_eq!(
        ForeignKeyDirection::for_navigation(true),
        ForeignKeyDirection::ReferencedOwnsFk
    );
    assert_eq!(
        ForeignKeyDirection::for_navigation(false),
        ForeignKeyDirection::OriginOwnsFk
    );
    assert!(ForeignKeyDirection::ReferencedOwnsFk.is_collection());
}

use crate::{
    schema::db::{Column, ColumnId, ForeignKey, PrimaryKey, Table, TableId, UniqueKey},
    stmt, Error, Result,
};

use std::collections::HashMap;

/// Declares a table for [`Builder`](super::Builder).
///
/// ```
/// use navlink_core::{schema::TableDef, stmt::Type};
///
/// let orders = TableDef::new("Orders")
///     .column("id", Type::I64)
///     .nullable_column("customer_id", Type::I64)
///     .primary_key(["id"])
///     .foreign_key("fk_orders_customer", ["customer_id"], "Customers", ["id"]);
/// ```
#[derive(Debug, Clone)]
pub struct TableDef {
    pub(super) name: String,
    columns: Vec<(String, stmt::Type, bool)>,
    primary_key: Option<Vec<String>>,
    unique_keys: Vec<(String, Vec<String>)>,
    foreign_keys: Vec<ForeignKeyDef>,
}

#[derive(Debug, Clone)]
struct ForeignKeyDef {
    name: String,
    columns: Vec<String>,
    references: String,
    reference_columns: Vec<String>,
}

fn names<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

impl TableDef {
    pub fn new(name: impl Into<String>) -> TableDef {
        TableDef {
            name: name.into(),
            columns: vec![],
            primary_key: None,
            unique_keys: vec![],
            foreign_keys: vec![],
        }
    }

    pub fn column(mut self, name: impl Into<String>, ty: stmt::Type) -> Self {
        self.columns.push((name.into(), ty, false));
        self
    }

    pub fn nullable_column(mut self, name: impl Into<String>, ty: stmt::Type) -> Self {
        self.columns.push((name.into(), ty, true));
        self
    }

    pub fn primary_key<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_key = Some(names(columns));
        self
    }

    pub fn unique_key<I, S>(mut self, name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unique_keys.push((name.into(), names(columns)));
        self
    }

    pub fn foreign_key<I, S, J, T>(
        mut self,
        name: impl Into<String>,
        columns: I,
        references: impl Into<String>,
        reference_columns: J,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        J: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.foreign_keys.push(ForeignKeyDef {
            name: name.into(),
            columns: names(columns),
            references: references.into(),
            reference_columns: names(reference_columns),
        });
        self
    }

    pub(super) fn to_table(&self, id: TableId) -> Result<Table> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.columns.len());

        for (index, (name, ty, nullable)) in self.columns.iter().enumerate() {
            if columns.iter().any(|column| &column.name == name) {
                return Err(Error::invalid_schema(format!(
                    "duplicate column `{}.{}`",
                    self.name, name
                )));
            }

            columns.push(Column {
                id: ColumnId { table: id, index },
                name: name.clone(),
                ty: *ty,
                nullable: *nullable,
            });
        }

        let mut table = Table {
            id,
            name: self.name.clone(),
            columns,
            primary_key: None,
            unique_keys: vec![],
            foreign_keys: vec![],
        };

        if let Some(pk) = &self.primary_key {
            table.primary_key = Some(PrimaryKey {
                columns: resolve_columns(&table, pk)?,
            });
        }

        for (name, columns) in &self.unique_keys {
            let columns = resolve_columns(&table, columns)?;
            table.unique_keys.push(UniqueKey {
                name: name.clone(),
                columns,
            });
        }

        Ok(table)
    }

    pub(super) fn resolve_foreign_keys(
        &self,
        table: &Table,
        tables: &[Table],
        table_ids: &HashMap<&str, TableId>,
    ) -> Result<Vec<ForeignKey>> {
        self.foreign_keys
            .iter()
            .map(|def| {
                let Some(references) = table_ids.get(def.references.as_str()) else {
                    return Err(Error::invalid_schema(format!(
                        "foreign key `{}` references unknown table `{}`",
                        def.name, def.references
                    )));
                };

                if def.columns.is_empty() || def.columns.len() != def.reference_columns.len() {
                    return Err(Error::invalid_schema(format!(
                        "foreign key `{}` has {} source columns and {} referenced columns",
                        def.name,
                        def.columns.len(),
                        def.reference_columns.len()
                    )));
                }

                Ok(ForeignKey {
                    name: def.name.clone(),
                    columns: resolve_columns(table, &def.columns)?,
                    references: *references,
                    reference_columns: resolve_columns(
                        &tables[references.0],
                        &def.reference_columns,
                    )?,
                })
            })
            .collect()
    }
}

fn resolve_columns(table: &Table, names: &[String]) -> Result<Vec<ColumnId>> {
    names
        .iter()
        .map(|name| match table.column_by_name(name) {
            Some(column) => Ok(column.id),
            None => Err(Error::invalid_schema(format!(
                "unknown column `{}.{}`",
                table.name, name
            ))),
        })
        .collect()
}

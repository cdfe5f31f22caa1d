use crate::{
    schema::{
        app::{EntityType, EntityTypeId, NavigationId, NavigationProperty, Property},
        db,
    },
    stmt, Error, Result,
};

use std::collections::HashMap;

/// Declares an entity type, and the entity set exposing it, for
/// [`Builder`](super::Builder).
///
/// Every column of the backing table is exposed as a property named after the
/// column unless renamed with [`EntityDef::property`]. The entity key is the
/// table's primary key, or its first unique key.
#[derive(Debug, Clone)]
pub struct EntityDef {
    pub(super) name: String,
    table: String,
    entity_set: Option<String>,
    renames: HashMap<String, String>,
    types: HashMap<String, stmt::Type>,
    navigations: Vec<(String, String, bool)>,
}

impl EntityDef {
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> EntityDef {
        EntityDef {
            name: name.into(),
            table: table.into(),
            entity_set: None,
            renames: HashMap::new(),
            types: HashMap::new(),
            navigations: vec![],
        }
    }

    /// Names the entity set. Defaults to the table name.
    pub fn entity_set(mut self, name: impl Into<String>) -> Self {
        self.entity_set = Some(name.into());
        self
    }

    /// Exposes `column` under the property name `name`.
    pub fn property(mut self, column: impl Into<String>, name: impl Into<String>) -> Self {
        self.renames.insert(column.into(), name.into());
        self
    }

    /// Overrides the protocol type of the property backed by `column`.
    pub fn property_type(mut self, column: impl Into<String>, ty: stmt::Type) -> Self {
        self.types.insert(column.into(), ty);
        self
    }

    /// Adds a single-valued navigation to `target`.
    pub fn navigation(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.navigations.push((name.into(), target.into(), false));
        self
    }

    /// Adds a collection-valued navigation to `target`.
    pub fn collection(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.navigations.push((name.into(), target.into(), true));
        self
    }

    pub(super) fn entity_set_name(&self) -> &str {
        self.entity_set.as_deref().unwrap_or(&self.table)
    }

    pub(super) fn to_entity_type(
        &self,
        id: EntityTypeId,
        db: &db::Schema,
        entity_type_ids: &HashMap<&str, EntityTypeId>,
    ) -> Result<EntityType> {
        let Some(table) = db.table_by_name(&self.table) else {
            return Err(Error::invalid_schema(format!(
                "entity type `{}` is mapped to unknown table `{}`",
                self.name, self.table
            )));
        };

        for column in self.renames.keys().chain(self.types.keys()) {
            if table.column_by_name(column).is_none() {
                return Err(Error::invalid_schema(format!(
                    "entity type `{}` maps unknown column `{}.{}`",
                    self.name, table.name, column
                )));
            }
        }

        let properties: Vec<_> = table
            .columns
            .iter()
            .map(|column| Property {
                name: self
                    .renames
                    .get(&column.name)
                    .cloned()
                    .unwrap_or_else(|| column.name.clone()),
                ty: self.types.get(&column.name).copied().unwrap_or(column.ty),
                column: column.id,
                nullable: column.nullable,
            })
            .collect();

        // Properties are laid out in column order
        let key: Vec<usize> = table
            .row_key()
            .map(|columns| columns.iter().map(|column| column.index).collect())
            .unwrap_or_default();

        let navigations = self
            .navigations
            .iter()
            .enumerate()
            .map(|(index, (name, target, collection))| {
                let Some(target) = entity_type_ids.get(target.as_str()) else {
                    return Err(Error::invalid_schema(format!(
                        "navigation `{}.{}` targets unknown entity type `{}`",
                        self.name, name, target
                    )));
                };

                Ok(NavigationProperty {
                    id: NavigationId {
                        entity_type: id,
                        index,
                    },
                    name: name.clone(),
                    target: *target,
                    collection: *collection,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(EntityType {
            id,
            name: self.name.clone(),
            table: table.id,
            properties,
            key,
            navigations,
        })
    }
}

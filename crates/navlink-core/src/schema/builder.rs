mod entity;
pub use entity::EntityDef;

mod table;
pub use table::TableDef;

use super::{app, db, Schema};
use crate::Result;

use std::{collections::HashMap, sync::Arc};

/// Assembles a [`Schema`] from table and entity declarations.
///
/// Names are resolved to IDs at [`Builder::build`] time, after which the
/// result is verified.
#[derive(Debug, Default, Clone)]
pub struct Builder {
    tables: Vec<TableDef>,
    entities: Vec<EntityDef>,
}

impl Builder {
    pub fn table(&mut self, table: TableDef) -> &mut Self {
        self.tables.push(table);
        self
    }

    pub fn entity(&mut self, entity: EntityDef) -> &mut Self {
        self.entities.push(entity);
        self
    }

    pub fn build(&self) -> Result<Schema> {
        let db = self.build_db()?;
        let app = self.build_app(&db)?;

        let schema = Schema {
            app,
            db: Arc::new(db),
        };

        schema.verify()?;
        Ok(schema)
    }

    fn build_db(&self) -> Result<db::Schema> {
        let mut table_ids = HashMap::new();

        for (index, def) in self.tables.iter().enumerate() {
            if table_ids.insert(def.name.as_str(), db::TableId(index)).is_some() {
                return Err(crate::Error::invalid_schema(format!(
                    "duplicate table `{}`",
                    def.name
                )));
            }
        }

        // Columns and keys first; foreign keys need every table's columns.
        let mut tables = self
            .tables
            .iter()
            .enumerate()
            .map(|(index, def)| def.to_table(db::TableId(index)))
            .collect::<Result<Vec<_>>>()?;

        for (index, def) in self.tables.iter().enumerate() {
            let foreign_keys = def.resolve_foreign_keys(&tables[index], &tables, &table_ids)?;
            tables[index].foreign_keys = foreign_keys;
        }

        Ok(db::Schema { tables })
    }

    fn build_app(&self, db: &db::Schema) -> Result<app::Schema> {
        let mut entity_type_ids = HashMap::new();

        for (index, def) in self.entities.iter().enumerate() {
            if entity_type_ids
                .insert(def.name.as_str(), app::EntityTypeId(index))
                .is_some()
            {
                return Err(crate::Error::invalid_schema(format!(
                    "duplicate entity type `{}`",
                    def.name
                )));
            }
        }

        let mut schema = app::Schema::default();

        for (index, def) in self.entities.iter().enumerate() {
            let id = app::EntityTypeId(index);
            let entity_type = def.to_entity_type(id, db, &entity_type_ids)?;

            schema.entity_sets.push(app::EntitySet {
                id: app::EntitySetId(index),
                name: def.entity_set_name().to_string(),
                entity_type: id,
            });
            schema.entity_types.push(entity_type);
        }

        Ok(schema)
    }
}

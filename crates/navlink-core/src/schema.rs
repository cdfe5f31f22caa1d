pub mod app;

mod builder;
pub use builder::{Builder, EntityDef, TableDef};

pub mod db;

mod verify;

use app::EntityTypeId;
use db::{Table, TableId};
use std::sync::Arc;

/// The protocol model together with the relational catalog it is exposed
/// from.
#[derive(Debug)]
pub struct Schema {
    /// Protocol-level schema: entity sets, entity types, navigations
    pub app: app::Schema,

    /// Relational catalog
    pub db: Arc<db::Schema>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The table an entity type is stored in.
    pub fn table_for(&self, id: impl Into<EntityTypeId>) -> &Table {
        self.db.table(self.table_id_for(id))
    }

    pub fn table_id_for(&self, id: impl Into<EntityTypeId>) -> TableId {
        self.app.entity_type(id).table
    }
}

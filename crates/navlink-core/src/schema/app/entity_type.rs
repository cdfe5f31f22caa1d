use super::{NavigationId, NavigationProperty, Property};
use crate::schema::db::{ColumnId, TableId};

use std::fmt;

/// The protocol-level structural type of a table.
#[derive(Debug, Clone)]
pub struct EntityType {
    pub id: EntityTypeId,

    pub name: String,

    /// Table the entity type is stored in
    pub table: TableId,

    /// Structural properties, one per exposed column
    pub properties: Vec<Property>,

    /// Indices into `properties` forming the entity key
    pub key: Vec<usize>,

    pub navigations: Vec<NavigationProperty>,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct EntityTypeId(pub usize);

impl EntityType {
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.name == name)
    }

    /// The property exposing `column`, if the column is exposed at all.
    pub fn property_for_column(&self, column: ColumnId) -> Option<&Property> {
        self.properties
            .iter()
            .find(|property| property.column == column)
    }

    pub fn key_properties(&self) -> impl ExactSizeIterator<Item = &Property> + '_ {
        self.key.iter().map(|index| &self.properties[*index])
    }

    pub fn is_key_property(&self, name: &str) -> bool {
        self.key_properties().any(|property| property.name == name)
    }

    pub fn navigation(&self, id: NavigationId) -> &NavigationProperty {
        assert_eq!(id.entity_type, self.id);
        &self.navigations[id.index]
    }

    pub fn navigation_by_name(&self, name: &str) -> Option<&NavigationProperty> {
        self.navigations
            .iter()
            .find(|navigation| navigation.name == name)
    }
}

impl fmt::Debug for EntityTypeId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "EntityTypeId({})", self.0)
    }
}

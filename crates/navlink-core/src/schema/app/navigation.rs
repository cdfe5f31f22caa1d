use super::EntityTypeId;

use std::fmt;

/// A relationship field from one entity type to another.
#[derive(Debug, Clone)]
pub struct NavigationProperty {
    pub id: NavigationId,

    pub name: String,

    /// Entity type on the other end of the relationship
    pub target: EntityTypeId,

    /// `true` when the navigation yields a collection of entities
    pub collection: bool,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct NavigationId {
    pub entity_type: EntityTypeId,
    pub index: usize,
}

impl fmt::Debug for NavigationId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "NavigationId({}/{})", self.entity_type.0, self.index)
    }
}

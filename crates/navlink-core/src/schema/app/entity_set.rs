use super::EntityTypeId;

use std::fmt;

/// A named, addressable collection of entities of one type.
#[derive(Debug, Clone)]
pub struct EntitySet {
    pub id: EntitySetId,

    /// Name used in resource paths, e.g. `Customers`
    pub name: String,

    pub entity_type: EntityTypeId,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct EntitySetId(pub usize);

impl fmt::Debug for EntitySetId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "EntitySetId({})", self.0)
    }
}

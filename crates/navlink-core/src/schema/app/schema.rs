use super::{EntitySet, EntitySetId, EntityType, EntityTypeId};

#[derive(Debug, Default, Clone)]
pub struct Schema {
    pub entity_types: Vec<EntityType>,

    pub entity_sets: Vec<EntitySet>,
}

impl Schema {
    pub fn entity_type(&self, id: impl Into<EntityTypeId>) -> &EntityType {
        self.entity_types
            .get(id.into().0)
            .expect("invalid entity type ID")
    }

    pub fn entity_type_by_name(&self, name: &str) -> Option<&EntityType> {
        self.entity_types.iter().find(|ty| ty.name == name)
    }

    pub fn entity_set(&self, id: impl Into<EntitySetId>) -> &EntitySet {
        self.entity_sets
            .get(id.into().0)
            .expect("invalid entity set ID")
    }

    pub fn entity_set_by_name(&self, name: &str) -> Option<&EntitySet> {
        self.entity_sets.iter().find(|set| set.name == name)
    }
}

use crate::schema::app::{EntitySetId, EntityTypeId, NavigationId};

/// A parsed resource path.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourcePath {
    /// Segments in path order
    pub segments: Vec<Segment>,

    /// `true` when the path ended with `$ref`, addressing the link rather
    /// than the entity.
    pub reference: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    EntitySet(EntitySetSegment),
    Navigation(NavigationSegment),
}

/// Addresses an entity set, optionally narrowed to one entity by key.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySetSegment {
    pub entity_set: EntitySetId,

    /// Entity type of the set
    pub entity_type: EntityTypeId,

    pub keys: Vec<KeyPredicate>,
}

/// Follows a navigation property from the previous segment's entity type.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationSegment {
    pub navigation: NavigationId,

    /// Entity type the navigation leads to
    pub target: EntityTypeId,

    /// `true` when the navigation is collection-valued
    pub collection: bool,

    pub keys: Vec<KeyPredicate>,
}

/// A `name=value` pair from a key predicate, value kept as literal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPredicate {
    pub name: String,
    pub text: String,
}

impl KeyPredicate {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> KeyPredicate {
        KeyPredicate {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl Segment {
    pub fn keys(&self) -> &[KeyPredicate] {
        match self {
            Segment::EntitySet(segment) => &segment.keys,
            Segment::Navigation(segment) => &segment.keys,
        }
    }

    pub fn is_navigation(&self) -> bool {
        matches!(self, Segment::Navigation(_))
    }
}

impl ResourcePath {
    /// Number of navigation segments in the path.
    pub fn navigation_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| segment.is_navigation())
            .count()
    }
}

use super::ScopedTable;

use navlink_core::{
    uri::{ResourcePath, Segment},
    Error, Result, Schema,
};

/// Both sides of a one-hop resource path, before the foreign key is known.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    /// Side named by the entity-set segment
    pub origin: ScopedTable<'a>,

    /// Side reached through the navigation segment
    pub navigated: ScopedTable<'a>,

    /// `true` when the navigation is collection-valued
    pub collection: bool,
}

/// Resolves the two sides of `path`.
///
/// Only `EntitySet/Navigation` paths are accepted. The shape is checked
/// before the schema is consulted, so a rejected path never touches table
/// metadata.
pub fn walk<'a>(schema: &'a Schema, path: &ResourcePath) -> Result<Walk<'a>> {
    let (origin, navigation) = match &path.segments[..] {
        [Segment::EntitySet(origin), Segment::Navigation(navigation)] => (origin, navigation),
        [] => return Err(Error::invalid_path("resource path has no segments")),
        [Segment::EntitySet(_)] => {
            return Err(Error::invalid_path(
                "expected a navigation segment after the entity set",
            ))
        }
        [Segment::Navigation(_), ..] => {
            return Err(Error::invalid_path(
                "resource path must start with an entity set",
            ))
        }
        segments => {
            return Err(Error::invalid_path(format!(
                "expected exactly one navigation segment; found {}",
                segments.iter().filter(|segment| segment.is_navigation()).count()
            )))
        }
    };

    Ok(Walk {
        origin: ScopedTable::new(schema, origin.entity_type, &origin.keys),
        navigated: ScopedTable::new(schema, navigation.target, &navigation.keys),
        collection: navigation.collection,
    })
}

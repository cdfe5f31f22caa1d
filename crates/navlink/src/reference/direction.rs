use super::{ScopedTable, Walk};

use navlink_core::{schema::db, Error, Result};
use tracing::debug;

/// Which side of a navigation owns the foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeignKeyDirection {
    /// Collection-valued navigation. The navigated-to table holds the key
    /// and is updated; the origin is referenced.
    ReferencedOwnsFk,

    /// Single-valued navigation. The origin holds the key and is updated;
    /// the navigated-to table is referenced.
    OriginOwnsFk,
}

impl ForeignKeyDirection {
    pub fn for_navigation(collection: bool) -> ForeignKeyDirection {
        if collection {
            ForeignKeyDirection::ReferencedOwnsFk
        } else {
            ForeignKeyDirection::OriginOwnsFk
        }
    }

    pub fn is_collection(self) -> bool {
        matches!(self, ForeignKeyDirection::ReferencedOwnsFk)
    }
}

/// The two sides after role assignment.
#[derive(Debug, Clone)]
pub struct Resolved<'a> {
    pub direction: ForeignKeyDirection,

    /// Side whose row is mutated. Always carries the foreign key.
    pub update: ScopedTable<'a>,

    /// Side whose key values are written into the foreign key
    pub reference: ScopedTable<'a>,
}

/// Assigns the update and reference roles and attaches the foreign key to
/// the update side.
pub fn resolve_direction<'a>(db: &'a db::Schema, walk: Walk<'a>) -> Result<Resolved<'a>> {
    let Walk {
        origin,
        navigated,
        collection,
    } = walk;

    let direction = ForeignKeyDirection::for_navigation(collection);

    let (mut update, reference) = match direction {
        ForeignKeyDirection::ReferencedOwnsFk => (navigated, origin),
        ForeignKeyDirection::OriginOwnsFk => (origin, navigated),
    };

    let Some(foreign_key) = db.foreign_key(update.table.id, reference.table.id) else {
        return Err(Error::invalid_schema(format!(
            "no foreign key from `{}` to `{}`",
            update.table.name, reference.table.name
        )));
    };

    debug!(
        ?direction,
        update = %update.table.name,
        reference = %reference.table.name,
        foreign_key = %foreign_key.name,
        "resolved reference direction"
    );

    update.foreign_key = Some(foreign_key);

    Ok(Resolved {
        direction,
        update,
        reference,
    })
}

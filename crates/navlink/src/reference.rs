//! Translation of reference-link requests into relational updates.
//!
//! A request such as `PUT Orders(5)/Customer/$ref` with the body
//! `Customers(7)` changes which row the order points at. The link is stored
//! in a foreign key, so the request becomes an `UPDATE` of whichever table
//! owns that key:
//!
//! 1. [`walk`] resolves the two sides named by the path.
//! 2. [`resolve_direction`] finds the foreign key and decides which side is
//!    mutated.
//! 3. [`apply_target`] replaces the referenced side's keys with those of the
//!    explicit reference target, when one is given.
//! 4. [`assemble`] builds the assignments, the row predicate, and the
//!    parameter list.

mod assemble;
pub use assemble::{assemble, key_criteria, ReferenceUpdateCommand};

mod direction;
pub use direction::{resolve_direction, ForeignKeyDirection, Resolved};

mod scoped;
pub use scoped::{Keys, ScopedTable};

mod target;
pub use target::apply_target;

mod walk;
pub use walk::{walk, Walk};

use navlink_core::{uri::ResourcePath, Result, Schema};
use url::Url;

/// A reference-link request against a parsed resource path.
///
/// Translation is pure. It borrows the schema and the path and allocates a
/// fresh command on every call, so the same request may be translated any
/// number of times, from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceUpdate<'a> {
    schema: &'a Schema,

    path: &'a ResourcePath,

    /// Service root that reference targets are resolved against
    base: &'a Url,
}

impl<'a> ReferenceUpdate<'a> {
    pub fn new(schema: &'a Schema, path: &'a ResourcePath, base: &'a Url) -> ReferenceUpdate<'a> {
        ReferenceUpdate { schema, path, base }
    }

    /// Builds the update that links (or, with `delete`, unlinks) the two
    /// entities named by the path.
    ///
    /// `target` is the reference target URI from the request body. Delete
    /// requests carry none. With `prepared` set, assigned values are returned
    /// as a parameter list and the statement holds placeholders.
    pub fn translate(
        &self,
        target: Option<&str>,
        prepared: bool,
        delete: bool,
    ) -> Result<ReferenceUpdateCommand> {
        let walk = walk(self.schema, self.path)?;
        let mut resolved = resolve_direction(&self.schema.db, walk)?;
        apply_target(self.schema, self.base, target, &mut resolved)?;
        assemble(resolved, prepared, delete)
    }
}

use crate::{schema::db::ColumnId, stmt};

/// A structural property of an entity type.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Name used in resource paths and key predicates
    pub name: String,

    /// The protocol type. This decides the lexical form of literals, e.g.
    /// whether a key value is quoted.
    pub ty: stmt::Type,

    /// Column the property is stored in
    pub column: ColumnId,

    pub nullable: bool,
}

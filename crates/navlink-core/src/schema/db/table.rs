use super::{Column, ColumnId, ForeignKey, PrimaryKey, UniqueKey};

use std::fmt;

/// A database table
#[derive(Debug, Clone)]
pub struct Table {
    /// Uniquely identifies a table
    pub id: TableId,

    /// Name of the table
    pub name: String,

    /// The table's columns
    pub columns: Vec<Column>,

    pub primary_key: Option<PrimaryKey>,

    /// Unique keys in declaration order
    pub unique_keys: Vec<UniqueKey>,

    /// Foreign keys declared on this table, in declaration order
    pub foreign_keys: Vec<ForeignKey>,
}

/// Uniquely identifies a table
#[derive(PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct TableId(pub usize);

impl Table {
    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        assert_eq!(id.table, self.id, "column belongs to a different table");
        &self.columns[id.index]
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Columns identifying a single row: the primary key, or the first
    /// declared unique key when there is no primary key.
    pub fn row_key(&self) -> Option<&[ColumnId]> {
        match &self.primary_key {
            Some(pk) => Some(&pk.columns),
            None => self
                .unique_keys
                .first()
                .map(|unique| &unique.columns[..]),
        }
    }

    /// The first foreign key on this table referencing `to`.
    pub fn foreign_key_to(&self, to: TableId) -> Option<&ForeignKey> {
        self.foreign_keys.iter().find(|fk| fk.references == to)
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}

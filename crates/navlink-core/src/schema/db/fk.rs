use super::{ColumnId, TableId};

/// A foreign key declared on a table.
///
/// `columns[i]` on the owning table references `reference_columns[i]` on
/// `references`. Both lists have the same length and are kept in declaration
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    pub name: String,

    /// Source columns on the owning table
    pub columns: Vec<ColumnId>,

    /// Referenced table
    pub references: TableId,

    /// Referenced columns on `references`
    pub reference_columns: Vec<ColumnId>,
}

impl ForeignKey {
    /// Iterates (source, referenced) column pairs in key order.
    pub fn pairs(&self) -> impl ExactSizeIterator<Item = (ColumnId, ColumnId)> + '_ {
        self.columns
            .iter()
            .copied()
            .zip(self.reference_columns.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

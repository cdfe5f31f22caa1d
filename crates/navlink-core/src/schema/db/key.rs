use super::ColumnId;

#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryKey {
    /// Columns composing the primary key
    pub columns: Vec<ColumnId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UniqueKey {
    pub name: String,

    /// Columns composing the key
    pub columns: Vec<ColumnId>,
}

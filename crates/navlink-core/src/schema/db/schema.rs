use super::{Column, ColumnId, ForeignKey, Table, TableId};

/// Read-only relational catalog.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        self.table(id.table)
            .columns
            .get(id.index)
            .expect("invalid column ID")
    }

    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        self.tables.get(id.into().0).expect("invalid table ID")
    }

    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// The foreign key declared on `from` that references `to`, if any.
    pub fn foreign_key(&self, from: TableId, to: TableId) -> Option<&ForeignKey> {
        self.table(from).foreign_key_to(to)
    }
}

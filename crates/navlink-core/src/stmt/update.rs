use super::{Assignments, Expr, Statement};
use crate::schema::db::TableId;

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Table being updated
    pub target: TableId,

    /// Column assignments, in the order they are rendered
    pub assignments: Assignments,

    /// Which rows to update
    pub filter: Option<Expr>,
}

impl Update {
    pub fn new(target: TableId) -> Update {
        Update {
            target,
            assignments: Assignments::default(),
            filter: None,
        }
    }
}

impl From<Update> for Statement {
    fn from(src: Update) -> Statement {
        Statement::Update(src)
    }
}

use super::Expr;
use crate::schema::db::ColumnId;

use indexmap::IndexMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assignments {
    /// Map from the target table's column to the assignment for that column.
    /// Iteration follows insertion order.
    assignments: IndexMap<ColumnId, Assignment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Expression use for assignment
    pub expr: Expr,
}

impl Assignments {
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Sets `key` to `expr`, replacing any previous assignment while keeping
    /// the key's original position.
    pub fn set(&mut self, key: impl Into<ColumnId>, expr: impl Into<Expr>) {
        self.assignments
            .insert(key.into(), Assignment { expr: expr.into() });
    }

    pub fn keys(&self) -> impl Iterator<Item = ColumnId> + '_ {
        self.assignments.keys().copied()
    }

    pub fn exprs(&self) -> impl Iterator<Item = &Expr> + '_ {
        self.assignments.values().map(|assignment| &assignment.expr)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColumnId, &Assignment)> + '_ {
        self.assignments
            .iter()
            .map(|(column, assignment)| (*column, assignment))
    }
}

impl IntoIterator for Assignments {
    type Item = (ColumnId, Assignment);

    type IntoIter = indexmap::map::IntoIter<ColumnId, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.into_iter()
    }
}

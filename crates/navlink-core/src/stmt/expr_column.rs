use super::Expr;
use crate::schema::db::ColumnId;

/// References a table column.
///
/// When `qualified` is set the serializer prefixes the column with its table
/// name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExprColumn {
    pub column: ColumnId,

    pub qualified: bool,
}

impl Expr {
    pub fn column(column: impl Into<ColumnId>) -> Self {
        ExprColumn {
            column: column.into(),
            qualified: false,
        }
        .into()
    }

    pub fn qualified_column(column: impl Into<ColumnId>) -> Self {
        ExprColumn {
            column: column.into(),
            qualified: true,
        }
        .into()
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}

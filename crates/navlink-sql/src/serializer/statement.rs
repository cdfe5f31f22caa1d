use super::{Formatter, Ident, ToSql};

use navlink_core::stmt;

impl ToSql for &stmt::Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Update {
    fn to_sql(self, f: &mut Formatter<'_>) {
        assert!(
            !self.assignments.is_empty(),
            "UPDATE requires at least one assignment; stmt={self:#?}"
        );

        let table = f.serializer.table_name(self.target);
        let assignments = &self.assignments;
        let filter = self.filter.as_ref().map(|expr| (" WHERE ", expr));

        fmt!(f, "UPDATE " table " SET " assignments filter);
    }
}

impl ToSql for &stmt::Assignments {
    fn to_sql(self, f: &mut Formatter<'_>) {
        for (i, (column, assignment)) in self.iter().enumerate() {
            if i > 0 {
                f.dst.push_str(", ");
            }

            let column = f.serializer.schema.column(column);
            let expr = &assignment.expr;
            fmt!(f, Ident(&column.name) " = " expr);
        }
    }
}

use super::{Delimited, Formatter, Period, Placeholder, ToSql};

use navlink_core::stmt;

impl ToSql for &stmt::Expr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use stmt::Expr::*;

        match self {
            And(expr) => {
                fmt!(f, Delimited(&expr.operands, " AND "));
            }
            Arg(expr) => {
                fmt!(f, Placeholder(expr.position + 1));
            }
            BinaryOp(expr) if expr.rhs.is_value_null() => {
                // `= NULL` never matches a row
                let op = match expr.op {
                    stmt::BinaryOp::Eq => " IS NULL",
                    stmt::BinaryOp::Ne => " IS NOT NULL",
                };
                fmt!(f, expr.lhs op);
            }
            BinaryOp(expr) => {
                fmt!(f, expr.lhs " " expr.op " " expr.rhs);
            }
            Column(expr) => {
                let column = f.serializer.column_name(expr.column);

                if expr.qualified {
                    let table = f.serializer.table_name(expr.column.table);
                    fmt!(f, Period([table, column]));
                } else {
                    fmt!(f, column);
                }
            }
            Value(value) => value.to_sql(f),
        }
    }
}

impl ToSql for &stmt::BinaryOp {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(match self {
            stmt::BinaryOp::Eq => "=",
            stmt::BinaryOp::Ne => "<>",
        })
    }
}

use super::{Flavor, Formatter, ToSql};

use navlink_core::stmt;
use std::fmt::Write;

/// Values reaching the serializer are inlined as literals. Parameterized
/// values appear in the statement as `Expr::Arg` instead.
impl ToSql for &stmt::Value {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use stmt::Value::*;

        // Writing to a String is infallible
        let _ = match self {
            Null => write!(f.dst, "NULL"),
            Bool(v) => match f.serializer.flavor {
                Flavor::Sqlite => write!(f.dst, "{}", u8::from(*v)),
                _ => write!(f.dst, "{}", if *v { "TRUE" } else { "FALSE" }),
            },
            I8(v) => write!(f.dst, "{v}"),
            I16(v) => write!(f.dst, "{v}"),
            I32(v) => write!(f.dst, "{v}"),
            I64(v) => write!(f.dst, "{v}"),
            F32(v) => write!(f.dst, "{v:?}"),
            F64(v) => write!(f.dst, "{v:?}"),
            String(v) => {
                string_literal(v, f);
                Ok(())
            }
            Uuid(v) => {
                string_literal(&v.to_string(), f);
                Ok(())
            }
        };
    }
}

fn string_literal(src: &str, f: &mut Formatter<'_>) {
    f.dst.push('\'');
    for c in src.chars() {
        if c == '\'' {
            f.dst.push('\'');
        }
        // MySQL treats backslash as an escape character by default
        if c == '\\' && f.serializer.is_mysql() {
            f.dst.push('\\');
        }
        f.dst.push(c);
    }
    f.dst.push('\'');
}

use super::{Flavor, Formatter, ToSql};

/// A positional parameter marker. Positions are 1-based, as rendered.
pub(super) struct Placeholder(pub(super) usize);

impl ToSql for Placeholder {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match f.serializer.flavor {
            Flavor::Mysql => fmt!(f, "?"),
            Flavor::Postgresql => fmt!(f, "$" self.0),
            Flavor::Sqlite => fmt!(f, "?" self.0),
        }
    }
}

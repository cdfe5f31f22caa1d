use crate::stmt::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Run a SQL command
    QuerySql(QuerySql),
}

/// A serialized SQL command with its positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySql {
    pub sql: String,

    /// Values bound to the command's placeholders, in placeholder order.
    /// Empty when values are inlined.
    pub params: Vec<Value>,
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}

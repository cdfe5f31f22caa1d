use super::{ForeignKeyDirection, Resolved};

use navlink_core::{
    schema::db::{ColumnId, Table},
    stmt::{Expr, Update, Value},
    uri::literal::parse_literal,
    Error, Result,
};
use tracing::trace;

/// The relational form of a reference-link request.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceUpdateCommand {
    /// One assignment per foreign key column, in key order, and a filter on
    /// the updated row's key
    pub stmt: Update,

    /// Values bound to the statement's placeholders. `None` when values are
    /// inlined.
    pub params: Option<Vec<Value>>,

    pub direction: ForeignKeyDirection,
}

impl ReferenceUpdateCommand {
    pub fn params(&self) -> &[Value] {
        self.params.as_deref().unwrap_or_default()
    }

    pub fn is_prepared(&self) -> bool {
        self.params.is_some()
    }
}

/// Builds the update command from resolved sides.
pub fn assemble(
    resolved: Resolved<'_>,
    prepared: bool,
    delete: bool,
) -> Result<ReferenceUpdateCommand> {
    let Resolved {
        direction,
        update,
        reference,
    } = resolved;

    let Some(foreign_key) = update.foreign_key else {
        return Err(Error::invalid_schema(format!(
            "`{}` is the update target but carries no foreign key",
            update.table.name
        )));
    };

    let Some(key_columns) = update.table.row_key() else {
        return Err(Error::invalid_schema(format!(
            "table `{}` has neither a primary key nor a unique key",
            update.table.name
        )));
    };

    // Every key column of the updated row must be bound before anything is
    // assigned
    let key_values = key_columns
        .iter()
        .map(|column| update.key_value(*column, update.table.column(*column).ty))
        .collect::<Result<Vec<_>>>()?;

    let mut stmt = Update::new(update.table.id);
    let mut params = prepared.then(|| Vec::with_capacity(foreign_key.len()));

    for (i, (source, referenced)) in foreign_key.pairs().enumerate() {
        let column = update.table.column(source);
        let property = update.property_for(source);

        // The referenced row's key text, read with the lexical rules of the
        // updated table's property
        let value = if delete {
            Value::Null
        } else {
            parse_literal(&property, column.ty, reference.key_text(referenced)?)?
        };

        trace!(
            table = %update.table.name,
            column = %column.name,
            property = %property.name,
            %value,
            "assign foreign key column"
        );

        let expr = match &mut params {
            Some(params) => {
                params.push(value);
                Expr::arg(i)
            }
            None => Expr::Value(value),
        };

        stmt.assignments.set(source, expr);
    }

    stmt.filter = Some(key_criteria(update.table, key_columns, key_values));

    Ok(ReferenceUpdateCommand {
        stmt,
        params,
        direction,
    })
}

/// `table.k1 = v1 AND table.k2 = v2 ...`, values inlined.
pub fn key_criteria(table: &Table, key_columns: &[ColumnId], keys: Vec<Value>) -> Expr {
    assert_eq!(
        key_columns.len(),
        keys.len(),
        "one value per key column; table={}",
        table.name
    );

    let operands = key_columns
        .iter()
        .zip(keys)
        .map(|(column, value)| {
            debug_assert_eq!(column.table, table.id);
            Expr::eq(Expr::qualified_column(*column), value)
        })
        .collect();

    Expr::and_from_vec(operands)
}

use navlink_core::{
    schema::{
        app::{EntityType, EntityTypeId, Property},
        db::{ColumnId, ForeignKey, Table},
        Schema,
    },
    stmt::{Type, Value},
    uri::{literal::parse_literal, KeyPredicate},
    Error, Result,
};

use std::borrow::Cow;

/// One side of a relationship.
#[derive(Debug, Clone)]
pub struct ScopedTable<'a> {
    pub table: &'a Table,

    pub entity_type: &'a EntityType,

    /// Key predicates selecting the row on this side
    pub keys: Keys,

    /// Set on the side that owns the foreign key, which is the side updated
    pub foreign_key: Option<&'a ForeignKey>,
}

/// Key predicates, tagged with where they came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Keys {
    /// As written in the resource path. May be empty, e.g. `Orders(5)/Customer`.
    FromPath(Vec<KeyPredicate>),

    /// Taken from the explicit reference target.
    Resolved(Vec<KeyPredicate>),
}

impl<'a> ScopedTable<'a> {
    pub fn new(schema: &'a Schema, entity_type: EntityTypeId, keys: &[KeyPredicate]) -> Self {
        let entity_type = schema.app.entity_type(entity_type);

        ScopedTable {
            table: schema.db.table(entity_type.table),
            entity_type,
            keys: Keys::FromPath(keys.to_vec()),
            foreign_key: None,
        }
    }

    /// Coerces this side's key predicate for `column` to the native type `ty`.
    pub fn key_value(&self, column: ColumnId, ty: Type) -> Result<Value> {
        let property = self.property_for(column);
        parse_literal(&property, ty, self.key_text(column)?)
    }

    /// Raw literal text of the key predicate for `column`.
    ///
    /// The predicate is looked up by the name of the property exposing the
    /// column, or by the column name when no property exposes it.
    pub fn key_text(&self, column: ColumnId) -> Result<&str> {
        let property = self.property_for(column);

        self.keys.get(&property.name).ok_or_else(|| {
            Error::invalid_schema(format!(
                "no key value for `{}.{}` on `{}`",
                self.entity_type.name, property.name, self.table.name
            ))
        })
    }

    /// The property exposing `column`. Unexposed columns get a property named
    /// after the column.
    pub fn property_for(&self, column: ColumnId) -> Cow<'a, Property> {
        match self.entity_type.property_for_column(column) {
            Some(property) => Cow::Borrowed(property),
            None => {
                let column = self.table.column(column);
                Cow::Owned(Property {
                    name: column.name.clone(),
                    ty: column.ty,
                    column: column.id,
                    nullable: column.nullable,
                })
            }
        }
    }
}

impl Keys {
    pub fn predicates(&self) -> &[KeyPredicate] {
        match self {
            Keys::FromPath(keys) | Keys::Resolved(keys) => keys,
        }
    }

    /// Raw literal text of the predicate named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.predicates()
            .iter()
            .find(|key| key.name == name)
            .map(|key| &key.text[..])
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Keys::Resolved(_))
    }
}

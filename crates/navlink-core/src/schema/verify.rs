use super::Schema;
use crate::{Error, Result};

use std::collections::HashSet;

struct Verify<'a> {
    schema: &'a Schema,
}

impl Schema {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { schema: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        self.verify_entity_set_names_are_unique()?;
        self.verify_property_names_are_unique()?;
        self.verify_navigation_names_are_unique()?;
        self.verify_foreign_key_types_match()?;
        Ok(())
    }

    fn verify_entity_set_names_are_unique(&self) -> Result<()> {
        let mut names = HashSet::new();

        for entity_set in &self.schema.app.entity_sets {
            if !names.insert(entity_set.name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "duplicate entity set `{}`",
                    entity_set.name
                )));
            }
        }

        Ok(())
    }

    fn verify_property_names_are_unique(&self) -> Result<()> {
        for entity_type in &self.schema.app.entity_types {
            let mut names = HashSet::new();

            for property in &entity_type.properties {
                if !names.insert(property.name.as_str()) {
                    return Err(Error::invalid_schema(format!(
                        "duplicate property `{}.{}`",
                        entity_type.name, property.name
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify_navigation_names_are_unique(&self) -> Result<()> {
        for entity_type in &self.schema.app.entity_types {
            let mut names: HashSet<_> = entity_type
                .properties
                .iter()
                .map(|property| property.name.as_str())
                .collect();

            for navigation in &entity_type.navigations {
                if !names.insert(navigation.name.as_str()) {
                    return Err(Error::invalid_schema(format!(
                        "navigation `{}.{}` collides with another property",
                        entity_type.name, navigation.name
                    )));
                }
            }
        }

        Ok(())
    }

    /// A foreign key column must hold values of the referenced column's type.
    fn verify_foreign_key_types_match(&self) -> Result<()> {
        let db = &self.schema.db;

        for table in &db.tables {
            for fk in &table.foreign_keys {
                for (source, referenced) in fk.pairs() {
                    let source = db.column(source);
                    let referenced = db.column(referenced);

                    if source.ty != referenced.ty {
                        return Err(Error::invalid_schema(format!(
                            "foreign key `{}`: column `{}.{}` is {:?} but references `{}.{}` of type {:?}",
                            fk.name,
                            table.name,
                            source.name,
                            source.ty,
                            db.table(fk.references).name,
                            referenced.name,
                            referenced.ty
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

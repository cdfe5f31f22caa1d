use super::Db;

use navlink_core::{
    driver::Connection,
    schema::{self, EntityDef, TableDef},
    Error, Result, Schema,
};
use navlink_sql::Flavor;

use std::sync::Arc;
use url::Url;

const DEFAULT_BASE_URI: &str = "http://localhost/";

#[derive(Debug, Default)]
pub struct Builder {
    /// Schema builder
    core: schema::Builder,

    /// Service root, parsed at build time
    base_uri: Option<String>,

    flavor: Flavor,
}

impl Builder {
    pub fn register_table(&mut self, table: TableDef) -> &mut Self {
        self.core.table(table);
        self
    }

    pub fn register_entity(&mut self, entity: EntityDef) -> &mut Self {
        self.core.entity(entity);
        self
    }

    /// Sets the service root reference targets are resolved against.
    /// Defaults to `http://localhost/`.
    pub fn base_uri(&mut self, uri: impl Into<String>) -> &mut Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Sets the SQL dialect commands are rendered in.
    pub fn flavor(&mut self, flavor: Flavor) -> &mut Self {
        self.flavor = flavor;
        self
    }

    pub fn build_schema(&self) -> Result<Schema> {
        self.core.build()
    }

    pub fn build(&self, connection: impl Connection) -> Result<Db> {
        let schema = self.build_schema()?;
        let base = self.build_base_uri()?;

        Ok(Db {
            schema: Arc::new(schema),
            base,
            flavor: self.flavor,
            connection: Arc::new(connection),
        })
    }

    fn build_base_uri(&self) -> Result<Url> {
        let src = self.base_uri.as_deref().unwrap_or(DEFAULT_BASE_URI);
        let mut url = Url::parse(src).map_err(|err| Error::from(err).context("base uri"))?;

        if url.cannot_be_a_base() {
            return Err(Error::invalid_uri(format!(
                "base uri `{src}` cannot be a base"
            )));
        }

        // `Url::join` drops the last path segment unless the path ends in `/`
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        url.set_query(None);
        url.set_fragment(None);

        Ok(url)
    }
}

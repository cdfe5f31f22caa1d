mod builder;
pub use builder::Builder;

use crate::reference::{ReferenceUpdate, ReferenceUpdateCommand};

use navlink_core::{
    driver::{Connection, QuerySql},
    stmt::Statement,
    uri::ResourcePath,
    Error, Result, Schema,
};
use navlink_sql::{Flavor, Serializer};

use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// A handle for running reference-link updates against one service.
///
/// Cloning is cheap; clones share the schema and the connection.
#[derive(Clone, Debug)]
pub struct Db {
    schema: Arc<Schema>,

    /// Service root. Always ends with `/`.
    base: Url,

    flavor: Flavor,

    connection: Arc<dyn Connection>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn base_uri(&self) -> &Url {
        &self.base
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Links the entity addressed by `path` to `target`, returning the number
    /// of rows updated.
    ///
    /// ```text
    /// db.update_reference("Orders(5)/Customer/$ref", "Customers(7)", true)
    /// ```
    pub async fn update_reference(&self, path: &str, target: &str, prepared: bool) -> Result<u64> {
        let command = self.translate(path, Some(target), prepared, false)?;
        self.exec(path, command).await
    }

    /// Removes the link addressed by `path`, returning the number of rows
    /// updated.
    pub async fn delete_reference(&self, path: &str) -> Result<u64> {
        let command = self.translate(path, None, false, true)?;
        self.exec(path, command).await
    }

    /// Parses and translates a request without executing it.
    ///
    /// `path` must address a link, i.e. end with `$ref`.
    pub fn translate(
        &self,
        path: &str,
        target: Option<&str>,
        prepared: bool,
        delete: bool,
    ) -> Result<ReferenceUpdateCommand> {
        let path = self.service_path(path)?;
        let resource = ResourcePath::parse(&self.schema.app, path)?;

        if !resource.reference {
            return Err(Error::invalid_path(format!(
                "`{path}` does not address a link; expected a trailing `$ref`"
            )));
        }

        ReferenceUpdate::new(&self.schema, &resource, &self.base)
            .translate(target, prepared, delete)
            .map_err(|err| err.context(format!("reference update on `{path}`")))
    }

    /// Renders a translated command as SQL in this handle's flavor.
    pub fn serialize(&self, command: &ReferenceUpdateCommand) -> String {
        let stmt = Statement::Update(command.stmt.clone());
        Serializer::new(&self.schema.db, self.flavor).serialize(&stmt)
    }

    async fn exec(&self, path: &str, command: ReferenceUpdateCommand) -> Result<u64> {
        let sql = self.serialize(&command);
        let params = command.params.unwrap_or_default();

        debug!(%sql, params = params.len(), "executing reference update");

        let response = self
            .connection
            .exec(QuerySql { sql, params }.into())
            .await?;

        if response.count == 0 {
            warn!(path, "reference update matched no rows");
        }

        Ok(response.count)
    }

    /// Strips the service root from an absolute request URL. Relative paths
    /// are taken as relative to the service root.
    fn service_path<'p>(&self, path: &'p str) -> Result<&'p str> {
        match path.strip_prefix(self.base.as_str()) {
            Some(rest) => Ok(rest),
            None if Url::parse(path).is_ok() => Err(Error::invalid_uri(format!(
                "`{path}` is not under the service root `{}`",
                self.base
            ))),
            None => Ok(path),
        }
    }
}

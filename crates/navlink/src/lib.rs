mod db;
pub use db::{Builder, Db};

pub mod reference;
pub use reference::{ForeignKeyDirection, ReferenceUpdate, ReferenceUpdateCommand};

pub use navlink_core::{async_trait, driver, schema, stmt, uri, Error, Result, Schema};
pub use navlink_sql::Flavor;

mod operation;
pub use operation::{Operation, QuerySql};

mod response;
pub use response::Response;

use crate::async_trait;

use std::fmt::Debug;

/// The executor seam: something that can run a serialized command.
///
/// Implementations own connection management, transactions, and routing.
/// The translator never calls into a connection itself; the `Db` facade hands
/// it a fully serialized command together with its bound parameters.
#[async_trait]
pub trait Connection: Debug + Send + Sync + 'static {
    /// Execute a database operation
    async fn exec(&self, op: Operation) -> crate::Result<Response>;
}

mod column;
pub use column::{Column, ColumnId};

mod fk;
pub use fk::ForeignKey;

mod key;
pub use key::{PrimaryKey, UniqueKey};

mod schema;
pub use schema::Schema;

mod table;
pub use table::{Table, TableId};

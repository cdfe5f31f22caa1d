mod entity_set;
pub use entity_set::{EntitySet, EntitySetId};

mod entity_type;
pub use entity_type::{EntityType, EntityTypeId};

mod navigation;
pub use navigation::{NavigationId, NavigationProperty};

mod property;
pub use property::Property;

mod schema;
pub use schema::Schema;

pub mod serializer;
pub use serializer::{Flavor, Serializer};

//! Resource paths of the entity protocol.
//!
//! A request URL such as `Customers(1)/Orders(42)/$ref` is parsed against the
//! protocol model into an ordered list of typed [`Segment`]s. Key predicate
//! values are kept as raw literal text; [`literal::parse_literal`] coerces them
//! once the target column is known.

pub mod literal;

mod parser;
pub use parser::parse_reference;

mod path;
pub use path::{EntitySetSegment, KeyPredicate, NavigationSegment, ResourcePath, Segment};

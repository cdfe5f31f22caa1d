/// The native type of a column, as seen by the statement layer.
///
/// Protocol literals are coerced into a [`Value`](super::Value) of this type
/// before they are bound into a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// 32-bit floating point number
    F32,

    /// 64-bit floating point number
    F64,

    /// String type
    String,

    /// 128-bit universally unique identifier
    Uuid,
}

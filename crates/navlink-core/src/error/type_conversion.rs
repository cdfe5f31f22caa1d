use super::Error;
use crate::stmt::Type;

/// Error when a protocol literal cannot be coerced to a column's native type.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    literal: Box<str>,
    to_type: Type,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot convert literal {} to {:?}",
            self.literal, self.to_type
        )
    }
}

impl Error {
    /// Creates a type conversion error for the raw literal text `literal`.
    pub fn type_conversion(literal: impl Into<String>, to_type: Type) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            literal: literal.into().into(),
            to_type,
        }))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::TypeConversion(_)))
    }
}

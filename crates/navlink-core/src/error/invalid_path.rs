use super::Error;

/// Error when a resource path does not have the shape of a reference-link
/// request.
///
/// This occurs when:
/// - The path does not start with an entity-set segment
/// - The path has no navigation segment, or more than one
/// - Segments appear after the navigation segment
///
/// Raised before any catalog lookup happens.
#[derive(Debug)]
pub(super) struct InvalidPath {
    message: Box<str>,
}

impl std::error::Error for InvalidPath {}

impl core::fmt::Display for InvalidPath {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid resource path: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid resource path error.
    pub fn invalid_path(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidPath(InvalidPath {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid resource path error.
    pub fn is_invalid_path(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidPath(_)))
    }
}

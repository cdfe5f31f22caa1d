use super::Error;

/// Error when a request URL or reference target cannot be parsed.
#[derive(Debug)]
pub(super) struct InvalidUri {
    message: Box<str>,
}

impl std::error::Error for InvalidUri {}

impl core::fmt::Display for InvalidUri {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid uri: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid uri error.
    pub fn invalid_uri(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidUri(InvalidUri {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid uri error.
    pub fn is_invalid_uri(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidUri(_)))
    }
}

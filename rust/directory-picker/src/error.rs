/// Payload-free classification of a [`DirectoryPickerError`], for callers that
/// only need to branch on what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The picker was invoked through an unsupported capability.
    Unsupported,
    /// The user dismissed the picker without choosing a directory.
    Cancelled,
    /// The host refused the requested access.
    PermissionDenied,
    /// The options were rejected as malformed.
    InvalidConfiguration,
    /// Any other failure reported by the host.
    Host,
}

/// Errors surfaced through the failure channel of a directory picker
/// invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryPickerError {
    /// The capability is absent on this host and was invoked anyway.
    #[error("Directory picker is not supported by this host")]
    Unsupported,

    /// The interactive selection was dismissed without a selection.
    #[error("Directory selection was cancelled")]
    Cancelled,

    /// The host denied permission for the requested access mode.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The supplied options were malformed.
    #[error("Invalid directory picker options: {0}")]
    InvalidConfiguration(String),

    /// A failure the host reported that has no dedicated variant. Passed
    /// through untranslated.
    #[error("Host error ({name}): {message}")]
    Host {
        /// The host's name for the failure (e.g. a `DOMException` name).
        name: String,
        /// The host's message.
        message: String,
    },
}

impl DirectoryPickerError {
    /// Classify a failure reported by the host by its name.
    ///
    /// Names follow the `DOMException` / JS error naming used by browsers:
    ///
    /// | name | variant |
    /// |------|---------|
    /// | `AbortError` | [`Cancelled`](Self::Cancelled) |
    /// | `NotAllowedError`, `SecurityError` | [`PermissionDenied`](Self::PermissionDenied) |
    /// | `TypeError` | [`InvalidConfiguration`](Self::InvalidConfiguration) |
    /// | anything else | [`Host`](Self::Host) |
    pub fn from_host(name: &str, message: impl Into<String>) -> Self {
        match name {
            "AbortError" => Self::Cancelled,
            "NotAllowedError" | "SecurityError" => Self::PermissionDenied(message.into()),
            "TypeError" => Self::InvalidConfiguration(message.into()),
            _ => Self::Host {
                name: name.to_owned(),
                message: message.into(),
            },
        }
    }

    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unsupported => ErrorKind::Unsupported,
            Self::Cancelled => ErrorKind::Cancelled,
            Self::PermissionDenied(_) => ErrorKind::PermissionDenied,
            Self::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
            Self::Host { .. } => ErrorKind::Host,
        }
    }

    /// The host-style name of this error, the inverse of
    /// [`from_host`](Self::from_host) for the dedicated variants.
    pub fn name(&self) -> &str {
        match self {
            Self::Unsupported => "NotSupportedError",
            Self::Cancelled => "AbortError",
            Self::PermissionDenied(_) => "NotAllowedError",
            Self::InvalidConfiguration(_) => "TypeError",
            Self::Host { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_maps_dom_exception_names() {
        assert_eq!(
            DirectoryPickerError::from_host("AbortError", "The user aborted a request."),
            DirectoryPickerError::Cancelled
        );
        assert_eq!(
            DirectoryPickerError::from_host("NotAllowedError", "denied").kind(),
            ErrorKind::PermissionDenied
        );
        assert_eq!(
            DirectoryPickerError::from_host("SecurityError", "cross-origin frame").kind(),
            ErrorKind::PermissionDenied
        );
        assert_eq!(
            DirectoryPickerError::from_host("TypeError", "bad id"),
            DirectoryPickerError::InvalidConfiguration("bad id".into())
        );
    }

    #[test]
    fn it_passes_unknown_failures_through() {
        let error = DirectoryPickerError::from_host("InvalidStateError", "no user activation");

        assert_eq!(error.kind(), ErrorKind::Host);
        assert_eq!(error.name(), "InvalidStateError");
        assert_eq!(
            error.to_string(),
            "Host error (InvalidStateError): no user activation"
        );
    }

    #[test]
    fn it_round_trips_names_of_dedicated_variants() {
        for error in [
            DirectoryPickerError::Cancelled,
            DirectoryPickerError::PermissionDenied("x".into()),
            DirectoryPickerError::InvalidConfiguration("x".into()),
        ] {
            let kind = error.kind();
            assert_eq!(DirectoryPickerError::from_host(error.name(), "x").kind(), kind);
        }
    }
}

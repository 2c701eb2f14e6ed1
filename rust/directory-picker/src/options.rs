//! Options accepted by a directory picker.
//!
//! These mirror the `DirectoryPickerOptions` dictionary of the File System
//! Access API. Every field is optional; an absent field leaves the choice to
//! the host. With serde they take the same camelCase shape as the JS
//! dictionary:
//!
//! ```rust
//! use directory_picker::{DirectoryPickerOptions, PermissionMode, WellKnownDirectory};
//!
//! let options: DirectoryPickerOptions<()> = serde_json::from_str(
//!     r#"{ "id": "exports", "startIn": "documents", "mode": "readwrite" }"#,
//! ).unwrap();
//!
//! assert_eq!(options.mode, Some(PermissionMode::ReadWrite));
//! assert_eq!(options.id.as_ref().map(|id| id.as_str()), Some("exports"));
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::DirectoryPickerError;

/// Maximum number of characters in a [`PickerId`].
pub const PICKER_ID_MAX_LENGTH: usize = 32;

/// Identifier under which the host remembers the last directory picked, so
/// that a later picker with the same id starts there.
///
/// At most [`PICKER_ID_MAX_LENGTH`] characters, each ASCII alphanumeric, `_`
/// or `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PickerId(String);

impl PickerId {
    /// Validate and wrap an identifier.
    pub fn new(id: impl Into<String>) -> Result<Self, DirectoryPickerError> {
        let id = id.into();

        if id.len() > PICKER_ID_MAX_LENGTH {
            return Err(DirectoryPickerError::InvalidConfiguration(format!(
                "Picker id '{id}' is longer than {PICKER_ID_MAX_LENGTH} characters"
            )));
        }

        if let Some(invalid) = id
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        {
            return Err(DirectoryPickerError::InvalidConfiguration(format!(
                "Picker id '{id}' contains invalid character {invalid:?}"
            )));
        }

        Ok(Self(id))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PickerId {
    type Error = DirectoryPickerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PickerId {
    type Error = DirectoryPickerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for PickerId {
    type Err = DirectoryPickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<PickerId> for String {
    fn from(value: PickerId) -> Self {
        value.0
    }
}

impl AsRef<str> for PickerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PickerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Access the resulting handle is requested with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionMode {
    /// Read-only access (`"read"`).
    Read,
    /// Read and write access (`"readwrite"`).
    ReadWrite,
}

impl PermissionMode {
    /// The host's name for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::ReadWrite => "readwrite",
        }
    }
}

/// Well-known directories a picker can be asked to start in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WellKnownDirectory {
    #[allow(missing_docs)]
    Desktop,
    #[allow(missing_docs)]
    Documents,
    #[allow(missing_docs)]
    Downloads,
    #[allow(missing_docs)]
    Music,
    #[allow(missing_docs)]
    Pictures,
    #[allow(missing_docs)]
    Videos,
}

impl WellKnownDirectory {
    /// The host's name for this directory.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Documents => "documents",
            Self::Downloads => "downloads",
            Self::Music => "music",
            Self::Pictures => "pictures",
            Self::Videos => "videos",
        }
    }
}

/// Where a picker should start.
///
/// `H` is the host's handle type. A [`StartIn::Directory`] is a live host
/// object and is never serialized; attempting to do so is a serialization
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, bound = "")]
pub enum StartIn<H> {
    /// One of the host's well-known directories.
    WellKnown(WellKnownDirectory),
    /// A directory previously handed out by the host.
    #[serde(skip)]
    Directory(H),
}

impl<H> From<WellKnownDirectory> for StartIn<H> {
    fn from(value: WellKnownDirectory) -> Self {
        Self::WellKnown(value)
    }
}

/// Options for a single directory picker invocation.
///
/// `H` is the host's directory handle type; it only matters when starting in
/// a previously picked directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct DirectoryPickerOptions<H> {
    /// Identifier the host remembers the picked directory under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PickerId>,
    /// Suggested starting location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_in: Option<StartIn<H>>,
    /// Requested access for the resulting handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<PermissionMode>,
}

impl<H> Default for DirectoryPickerOptions<H> {
    fn default() -> Self {
        Self {
            id: None,
            start_in: None,
            mode: None,
        }
    }
}

impl<H> DirectoryPickerOptions<H> {
    /// Options with every field left to the host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the picked directory under `id`.
    pub fn with_id(mut self, id: PickerId) -> Self {
        self.id = Some(id);
        self
    }

    /// Request `mode` access for the resulting handle.
    pub fn with_mode(mut self, mode: PermissionMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Start in one of the host's well-known directories.
    pub fn starting_in(mut self, directory: WellKnownDirectory) -> Self {
        self.start_in = Some(StartIn::WellKnown(directory));
        self
    }

    /// Start in a directory previously handed out by the host.
    pub fn starting_in_directory(mut self, handle: H) -> Self {
        self.start_in = Some(StartIn::Directory(handle));
        self
    }

    /// Check the options at the host boundary.
    ///
    /// Only an id can be malformed, and [`PickerId`] refuses to hold one, so
    /// this succeeds for any value built through the public API.
    pub fn validate(&self) -> Result<(), DirectoryPickerError> {
        if let Some(id) = &self.id {
            PickerId::new(id.as_str())?;
        }
        Ok(())
    }

    /// Whether every field is left to the host.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.start_in.is_none() && self.mode.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_accepts_valid_ids() {
        for id in ["a", "project-exports", "under_score_42", "x".repeat(32).as_str()] {
            assert_eq!(PickerId::new(id).unwrap().as_str(), id);
        }
    }

    #[test]
    fn it_rejects_malformed_ids() {
        for id in ["has space", "slash/y", "émoji", "x".repeat(33).as_str()] {
            let error = PickerId::new(id).unwrap_err();
            assert!(
                matches!(error, DirectoryPickerError::InvalidConfiguration(_)),
                "{id} should be rejected, got {error:?}"
            );
        }
    }

    #[test]
    fn it_serializes_only_fields_that_are_set() -> anyhow::Result<()> {
        let empty = DirectoryPickerOptions::<()>::new();
        assert_eq!(serde_json::to_value(&empty)?, serde_json::json!({}));

        let options = DirectoryPickerOptions::<()>::new()
            .with_id(PickerId::new("exports")?)
            .starting_in(WellKnownDirectory::Downloads)
            .with_mode(PermissionMode::ReadWrite);

        assert_eq!(
            serde_json::to_value(&options)?,
            serde_json::json!({
                "id": "exports",
                "startIn": "downloads",
                "mode": "readwrite"
            })
        );
        Ok(())
    }

    #[test]
    fn it_refuses_to_deserialize_malformed_ids() {
        let result =
            serde_json::from_str::<DirectoryPickerOptions<()>>(r#"{ "id": "not valid!" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn it_refuses_to_serialize_a_live_directory() {
        let options = DirectoryPickerOptions::new().starting_in_directory("handle".to_string());
        assert!(serde_json::to_string(&options).is_err());
    }

    #[test]
    fn it_deserializes_missing_fields_as_host_defaults() -> anyhow::Result<()> {
        let options: DirectoryPickerOptions<String> = serde_json::from_str("{}")?;
        assert!(options.is_empty());
        assert!(options.validate().is_ok());
        Ok(())
    }

    #[test]
    fn it_uses_host_names_for_modes_and_directories() {
        assert_eq!(PermissionMode::ReadWrite.as_str(), "readwrite");
        assert_eq!(PermissionMode::Read.as_str(), "read");
        assert_eq!(WellKnownDirectory::Pictures.as_str(), "pictures");
    }
}

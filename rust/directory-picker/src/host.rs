//! The feature probe for the host the crate is compiled for.
//!
//! On `wasm32-unknown-unknown` the host is the JS global, and the probe looks
//! for `showDirectoryPicker` on it. Every other target has no directory
//! picker host, so the probe reports [`Capability::Unsupported`] and the
//! picker type is the uninhabited [`Unavailable`].

use std::convert::Infallible;

use async_trait::async_trait;
use tracing::debug;

use crate::{Capability, DirectoryPicker, DirectoryPickerError, DirectoryPickerOptions};

/// The picker type of the host the crate is compiled for.
#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
pub type HostDirectoryPicker = crate::web::WebDirectoryPicker;

/// The picker type of the host the crate is compiled for.
#[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
pub type HostDirectoryPicker = Unavailable;

/// A [`DirectoryPicker`] that can never be constructed.
///
/// Stands in for the picker on targets without a host picker, so that code
/// generic over [`HostDirectoryPicker`] compiles everywhere. A
/// `Capability<Unavailable>` is always [`Capability::Unsupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailable {}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl DirectoryPicker for Unavailable {
    type Handle = Infallible;

    async fn show_directory_picker(
        &self,
        _options: Option<DirectoryPickerOptions<Self::Handle>>,
    ) -> Result<Self::Handle, DirectoryPickerError> {
        match *self {}
    }
}

/// Probe the host for a directory picker.
///
/// Never fails: a host without a picker, or one whose picker cannot be read,
/// yields [`Capability::Unsupported`].
pub fn detect() -> Capability<HostDirectoryPicker> {
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    let capability = crate::web::WebDirectoryPicker::detect();

    #[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
    let capability = Capability::Unsupported;

    debug!(
        supported = capability.is_supported(),
        "Probed host for a directory picker"
    );

    capability
}

impl Capability<HostDirectoryPicker> {
    /// Probe the host for a directory picker. See [`detect`].
    pub fn detect() -> Self {
        detect()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test_log::test]
    fn it_reports_no_picker_without_a_host() {
        let capability = Capability::<HostDirectoryPicker>::detect();

        assert!(!capability.is_supported());
        assert_eq!(capability, Capability::<Unavailable>::Unsupported);
    }

    #[test_log::test(tokio::test)]
    async fn it_rejects_invocation_of_the_absent_picker() {
        let error = detect().show_directory_picker(None).await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Unsupported);
    }
}

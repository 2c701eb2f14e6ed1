use std::sync::Arc;

use async_trait::async_trait;

use crate::{ConditionalSend, ConditionalSync, DirectoryPickerError, DirectoryPickerOptions};

/// The call signature of a host's directory picker.
///
/// An invocation starts the host's directory selection flow, which may
/// involve user interaction the host owns. It settles exactly once: with one
/// freshly handed out [`Handle`](Self::Handle), or with a
/// [`DirectoryPickerError`]. Failures are only ever reported through the
/// returned future.
///
/// Passing `None` leaves every option to the host.
///
/// Invocations are independent. Implementations do not serialize,
/// deduplicate or cache them; concurrent use is whatever the host allows.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait DirectoryPicker: ConditionalSync {
    /// The opaque handle to a directory the host hands out.
    type Handle: ConditionalSend;

    /// Ask the host for a directory.
    async fn show_directory_picker(
        &self,
        options: Option<DirectoryPickerOptions<Self::Handle>>,
    ) -> Result<Self::Handle, DirectoryPickerError>;
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl<P> DirectoryPicker for Arc<P>
where
    P: DirectoryPicker + ?Sized,
{
    type Handle = P::Handle;

    async fn show_directory_picker(
        &self,
        options: Option<DirectoryPickerOptions<Self::Handle>>,
    ) -> Result<Self::Handle, DirectoryPickerError> {
        P::show_directory_picker(self, options).await
    }
}

#![warn(missing_docs)]

//! Typed, feature-detected access to a host's directory picker.
//!
//! Some hosts (browsers implementing the File System Access API) expose a
//! `showDirectoryPicker` function on their global object. Many do not. This
//! crate turns that optional member into a value: a [`Capability`] that is
//! either [`Supported`](Capability::Supported) with a [`DirectoryPicker`], or
//! [`Unsupported`](Capability::Unsupported).
//!
//! Probe the host once, at startup, and pass the capability to whatever needs
//! it. Code then matches on the variant, so the missing-picker branch is
//! checked by the compiler rather than remembered by convention:
//!
//! ```rust
//! use directory_picker::{Capability, DirectoryPicker, DirectoryPickerError, DirectoryPickerOptions, PermissionMode};
//!
//! async fn open_workspace<P: DirectoryPicker>(
//!     picker: &Capability<P>,
//! ) -> Result<Option<P::Handle>, DirectoryPickerError> {
//!     let Capability::Supported(picker) = picker else {
//!         // Fall back to e.g. an upload form.
//!         return Ok(None);
//!     };
//!
//!     let options = DirectoryPickerOptions::new().with_mode(PermissionMode::ReadWrite);
//!     match picker.show_directory_picker(Some(options)).await {
//!         Ok(handle) => Ok(Some(handle)),
//!         Err(DirectoryPickerError::Cancelled) => Ok(None),
//!         Err(error) => Err(error),
//!     }
//! }
//!
//! # async fn example() -> Result<(), DirectoryPickerError> {
//! let picker = Capability::detect();
//! let workspace = open_workspace(&picker).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Capability<P>`] | Outcome of probing the host |
//! | [`DirectoryPicker`] | The picker's call signature |
//! | [`DirectoryPickerOptions`] | Per-invocation options (`id`, `startIn`, `mode`) |
//! | [`DirectoryPickerError`] | Cancellation, refusal and other failures |
//! | [`HostDirectoryPicker`] | The picker type of the compiled-for host |
//!
//! The returned handle is the host's own type (a `FileSystemDirectoryHandle`
//! on the web) and is handed over without being inspected.

mod sync;
pub use sync::*;

mod error;
pub use error::*;

mod options;
pub use options::*;

mod picker;
pub use picker::*;

mod capability;
pub use capability::*;

mod host;
pub use host::*;

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
pub mod web;

#[cfg(any(test, feature = "helpers"))]
pub mod helpers;

use tracing::{debug, trace};

use crate::{DirectoryPicker, DirectoryPickerError, DirectoryPickerOptions, ErrorKind};

/// A host's directory picker, as found by a feature probe.
///
/// The host either exposes a picker or it does not, and that does not change
/// while the process runs. Probe once at startup (see
/// [`Capability::detect`](crate::Capability::detect)) and hand the result to
/// the code that needs it, rather than looking the picker up again at each
/// call site.
///
/// Matching on the variants is the intended way to branch between the picker
/// and a fallback:
///
/// ```rust
/// use directory_picker::{Capability, DirectoryPicker, DirectoryPickerError};
///
/// async fn choose<P: DirectoryPicker>(
///     picker: &Capability<P>,
/// ) -> Result<Option<P::Handle>, DirectoryPickerError> {
///     match picker {
///         Capability::Supported(picker) => picker.show_directory_picker(None).await.map(Some),
///         Capability::Unsupported => Ok(None),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability<P> {
    /// The host exposes a picker.
    Supported(P),
    /// The host has no picker.
    Unsupported,
}

impl<P> Capability<P> {
    /// Whether the host exposes a picker.
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported(_))
    }

    /// The picker, if the host exposes one.
    pub fn supported(&self) -> Option<&P> {
        match self {
            Self::Supported(picker) => Some(picker),
            Self::Unsupported => None,
        }
    }

    /// Consume the capability, yielding the picker if the host exposes one.
    pub fn into_supported(self) -> Option<P> {
        self.into()
    }

    /// Transform the picker, keeping the presence of the capability.
    pub fn map<Q, F>(self, f: F) -> Capability<Q>
    where
        F: FnOnce(P) -> Q,
    {
        match self {
            Self::Supported(picker) => Capability::Supported(f(picker)),
            Self::Unsupported => Capability::Unsupported,
        }
    }

    /// Borrow the picker in place.
    pub fn as_ref(&self) -> Capability<&P> {
        match self {
            Self::Supported(picker) => Capability::Supported(picker),
            Self::Unsupported => Capability::Unsupported,
        }
    }
}

impl<P> Capability<P>
where
    P: DirectoryPicker,
{
    /// Ask the host for a directory.
    ///
    /// On a [`Capability::Unsupported`] this settles with
    /// [`DirectoryPickerError::Unsupported`] without touching the host. Code
    /// with a fallback path should match on the capability instead.
    pub async fn show_directory_picker(
        &self,
        options: Option<DirectoryPickerOptions<P::Handle>>,
    ) -> Result<P::Handle, DirectoryPickerError> {
        let Self::Supported(picker) = self else {
            debug!("Directory picker invoked on a host without one");
            return Err(DirectoryPickerError::Unsupported);
        };

        trace!(
            defaults = options.as_ref().is_none_or(|options| options.is_empty()),
            "Showing directory picker"
        );

        let result = picker.show_directory_picker(options).await;

        match &result {
            Ok(_) => debug!("Directory picked"),
            Err(error) if error.kind() == ErrorKind::Cancelled => {
                debug!("Directory picker dismissed")
            }
            Err(error) => debug!(%error, "Directory picker failed"),
        }

        result
    }
}

impl<P> From<Option<P>> for Capability<P> {
    fn from(value: Option<P>) -> Self {
        match value {
            Some(picker) => Self::Supported(picker),
            None => Self::Unsupported,
        }
    }
}

impl<P> From<Capability<P>> for Option<P> {
    fn from(value: Capability<P>) -> Self {
        match value {
            Capability::Supported(picker) => Some(picker),
            Capability::Unsupported => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::ScriptedDirectoryPicker;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test;

    #[test]
    fn it_reports_presence() {
        let supported = Capability::Supported(ScriptedDirectoryPicker::<String>::new());
        let unsupported = Capability::<ScriptedDirectoryPicker<String>>::Unsupported;

        assert!(supported.is_supported());
        assert!(supported.supported().is_some());
        assert!(!unsupported.is_supported());
        assert!(unsupported.supported().is_none());
    }

    #[test]
    fn it_converts_to_and_from_option() {
        assert_eq!(Capability::from(Some(1)), Capability::Supported(1));
        assert_eq!(Capability::<u8>::from(None), Capability::Unsupported);
        assert_eq!(Capability::Supported(2).into_supported(), Some(2));
        assert_eq!(Capability::Supported(2).map(|n| n * 2), Capability::Supported(4));
        assert_eq!(
            Capability::<u8>::Unsupported.map(|n| n * 2),
            Capability::Unsupported
        );
    }

    #[cfg_attr(not(target_arch = "wasm32"), tokio::test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    async fn it_rejects_invocation_when_unsupported() {
        let capability = Capability::<ScriptedDirectoryPicker<String>>::Unsupported;

        let error = capability.show_directory_picker(None).await.unwrap_err();

        assert_eq!(error, DirectoryPickerError::Unsupported);
    }

    #[cfg_attr(not(target_arch = "wasm32"), tokio::test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    async fn it_delegates_to_a_supported_picker() {
        let capability =
            Capability::Supported(ScriptedDirectoryPicker::new().selecting("photos".to_string()));

        let handle = capability.show_directory_picker(None).await.unwrap();

        assert_eq!(handle, "photos");
        assert_eq!(capability.supported().unwrap().invocations(), 1);
    }

    #[cfg_attr(not(target_arch = "wasm32"), tokio::test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    async fn it_borrows_the_picker_in_place() {
        let capability =
            Capability::Supported(ScriptedDirectoryPicker::new().selecting("music".to_string()));

        let borrowed = capability.as_ref().into_supported().unwrap();
        let handle = borrowed.show_directory_picker(None).await.unwrap();

        assert_eq!(handle, "music");
    }
}

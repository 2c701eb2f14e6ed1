//! Web bindings for the host's `showDirectoryPicker`.
//!
//! Browsers that implement the File System Access API expose
//! `showDirectoryPicker` as an optional member of `Window`. Other browsers,
//! and workers, do not. [`WebDirectoryPicker::detect`] reads the member off
//! the JS global once and captures it, so later invocations never look it up
//! again.
//!
//! Example usage in JavaScript of the exported probe:
//!
//! ```ignore
//! // This is JavaScript code that uses the WASM bindings, not a Rust doctest
//! import { supportsDirectoryPicker } from "directory-picker";
//!
//! if (supportsDirectoryPicker()) {
//!   const directory = await window.showDirectoryPicker({ mode: "readwrite" });
//! }
//! ```

use async_trait::async_trait;
use js_sys::{Function, Object, Promise, Reflect};
use tracing::{trace, warn};
use wasm_bindgen::{JsCast, prelude::*};
use wasm_bindgen_futures::JsFuture;
use web_sys::{DomException, FileSystemDirectoryHandle};

use crate::{Capability, DirectoryPicker, DirectoryPickerError, DirectoryPickerOptions, StartIn};

/// The name of the optional member on the JS global.
pub const SHOW_DIRECTORY_PICKER: &str = "showDirectoryPicker";

#[wasm_bindgen(typescript_custom_section)]
const WINDOW_INTERFACE: &'static str = r#"
/**
 * Directories a picker can be asked to start in.
 */
type WellKnownDirectory = "desktop" | "documents" | "downloads" | "music" | "pictures" | "videos";

/**
 * Options accepted by `showDirectoryPicker`. Every field is optional.
 */
interface DirectoryPickerOptions {
  id?: string;
  startIn?: WellKnownDirectory | FileSystemHandle;
  mode?: "read" | "readwrite";
}

declare global {
  interface Window {
    /**
     * Optional: not every browser provides it. Check before calling, e.g.
     * with `supportsDirectoryPicker()`.
     */
    showDirectoryPicker?: (options?: DirectoryPickerOptions) => Promise<FileSystemDirectoryHandle>;
  }
}
"#;

impl From<DirectoryPickerError> for JsValue {
    fn from(value: DirectoryPickerError) -> Self {
        let error = js_sys::Error::new(&value.to_string());
        error.set_name(value.name());
        error.into()
    }
}

/// Whether the JS global exposes `showDirectoryPicker`.
#[wasm_bindgen(js_name = "supportsDirectoryPicker")]
pub fn supports_directory_picker() -> bool {
    WebDirectoryPicker::detect().is_supported()
}

/// The `showDirectoryPicker` of a JS global, captured together with the
/// global it is called on.
#[derive(Debug, Clone)]
pub struct WebDirectoryPicker {
    global: JsValue,
    show: Function,
}

impl WebDirectoryPicker {
    /// Probe the JS global for `showDirectoryPicker`.
    pub fn detect() -> Capability<Self> {
        Self::from_global(&js_sys::global()).into()
    }

    /// Capture `showDirectoryPicker` from `global`, if it is a function.
    ///
    /// Reading the member never fails: a getter that throws is treated the
    /// same as an absent member.
    pub fn from_global(global: &JsValue) -> Option<Self> {
        let member = match Reflect::get(global, &JsValue::from_str(SHOW_DIRECTORY_PICKER)) {
            Ok(member) => member,
            Err(error) => {
                warn!(?error, "Reading {SHOW_DIRECTORY_PICKER} threw");
                return None;
            }
        };

        let show = member.dyn_into::<Function>().ok()?;

        Some(Self {
            global: global.clone(),
            show,
        })
    }

    fn invoke(&self, options: Option<&Object>) -> Result<Promise, DirectoryPickerError> {
        let value = match options {
            None => self.show.call0(&self.global),
            Some(options) => self.show.call1(&self.global, options),
        }
        .map_err(error_from_js)?;

        Ok(Promise::resolve(&value))
    }
}

#[async_trait(?Send)]
impl DirectoryPicker for WebDirectoryPicker {
    type Handle = FileSystemDirectoryHandle;

    async fn show_directory_picker(
        &self,
        options: Option<DirectoryPickerOptions<Self::Handle>>,
    ) -> Result<Self::Handle, DirectoryPickerError> {
        let options = match options {
            Some(options) => {
                options.validate()?;
                Some(options_to_js(&options)?)
            }
            None => None,
        };

        let promise = self.invoke(options.as_ref())?;
        let value = JsFuture::from(promise).await.map_err(error_from_js)?;

        trace!("{SHOW_DIRECTORY_PICKER} settled");

        value
            .dyn_into::<FileSystemDirectoryHandle>()
            .map_err(|value| DirectoryPickerError::Host {
                name: "TypeError".into(),
                message: format!(
                    "{SHOW_DIRECTORY_PICKER} resolved to {value:?} instead of a FileSystemDirectoryHandle"
                ),
            })
    }
}

/// Build the JS options dictionary, with only the fields that are set.
fn options_to_js(
    options: &DirectoryPickerOptions<FileSystemDirectoryHandle>,
) -> Result<Object, DirectoryPickerError> {
    let object = Object::new();

    if let Some(id) = &options.id {
        set(&object, "id", &JsValue::from_str(id.as_str()))?;
    }

    match &options.start_in {
        Some(StartIn::WellKnown(directory)) => {
            set(&object, "startIn", &JsValue::from_str(directory.as_str()))?
        }
        Some(StartIn::Directory(handle)) => set(&object, "startIn", handle)?,
        None => (),
    }

    if let Some(mode) = &options.mode {
        set(&object, "mode", &JsValue::from_str(mode.as_str()))?;
    }

    Ok(object)
}

fn set(object: &Object, key: &str, value: &JsValue) -> Result<(), DirectoryPickerError> {
    Reflect::set(object, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(error_from_js)
}

/// Classify a thrown or rejected JS value by its `name`.
fn error_from_js(error: JsValue) -> DirectoryPickerError {
    if let Some(exception) = error.dyn_ref::<DomException>() {
        return DirectoryPickerError::from_host(&exception.name(), exception.message());
    }

    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        return DirectoryPickerError::from_host(
            &String::from(error.name()),
            String::from(error.message()),
        );
    }

    let message = error.as_string().unwrap_or_else(|| format!("{error:?}"));
    DirectoryPickerError::from_host("Error", message)
}

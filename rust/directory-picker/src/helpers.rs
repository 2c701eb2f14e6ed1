//! Testing utilities for code that consumes a [`Capability`](crate::Capability).
//!
//! [`ScriptedDirectoryPicker`] stands in for a host picker. It replays a
//! script of outcomes, one per invocation, and records the options each
//! invocation was made with.
//!
//! ```rust
//! # async fn example() -> Result<(), directory_picker::DirectoryPickerError> {
//! use directory_picker::{Capability, DirectoryPickerError, helpers::ScriptedDirectoryPicker};
//!
//! let picker = Capability::Supported(
//!     ScriptedDirectoryPicker::new()
//!         .selecting("projects".to_string())
//!         .cancelling(),
//! );
//!
//! assert_eq!(picker.show_directory_picker(None).await?, "projects");
//! assert_eq!(
//!     picker.show_directory_picker(None).await,
//!     Err(DirectoryPickerError::Cancelled)
//! );
//! # Ok(())
//! # }
//! ```

use std::collections::VecDeque;

use async_trait::async_trait;

use crate::{
    ConditionalSend, DirectoryPicker, DirectoryPickerError, DirectoryPickerOptions,
    PermissionMode, SharedCell,
};

/// What a scripted invocation settles with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<H> {
    /// The user picks `H`.
    Select(H),
    /// The user dismisses the picker.
    Cancel,
    /// The host settles with the given error.
    Fail(DirectoryPickerError),
}

#[derive(Debug)]
struct Script<H> {
    outcomes: VecDeque<Outcome<H>>,
    requests: Vec<Option<DirectoryPickerOptions<H>>>,
}

/// A [`DirectoryPicker`] that replays scripted outcomes.
///
/// When the script runs out, invocations settle with a
/// [`DirectoryPickerError::Host`] error named `InvalidStateError`.
#[derive(Debug)]
pub struct ScriptedDirectoryPicker<H> {
    script: SharedCell<Script<H>>,
    denied: Vec<PermissionMode>,
}

impl<H> Default for ScriptedDirectoryPicker<H> {
    fn default() -> Self {
        Self {
            script: SharedCell::new(Script {
                outcomes: VecDeque::new(),
                requests: Vec::new(),
            }),
            denied: Vec::new(),
        }
    }
}

impl<H> ScriptedDirectoryPicker<H> {
    /// A picker with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outcome to the script.
    pub fn then(self, outcome: Outcome<H>) -> Self {
        self.script.with(|script| script.outcomes.push_back(outcome));
        self
    }

    /// Append a selection of `handle` to the script.
    pub fn selecting(self, handle: H) -> Self {
        self.then(Outcome::Select(handle))
    }

    /// Append a dismissal to the script.
    pub fn cancelling(self) -> Self {
        self.then(Outcome::Cancel)
    }

    /// Append a host failure to the script.
    pub fn failing(self, error: DirectoryPickerError) -> Self {
        self.then(Outcome::Fail(error))
    }

    /// Refuse every request for `mode` access with
    /// [`DirectoryPickerError::PermissionDenied`], before consulting the
    /// script. Requests that leave the mode to the host are treated as
    /// [`PermissionMode::Read`].
    pub fn denying(mut self, mode: PermissionMode) -> Self {
        self.denied.push(mode);
        self
    }

    /// The number of invocations so far.
    pub fn invocations(&self) -> usize {
        self.script.with(|script| script.requests.len())
    }

    /// The number of scripted outcomes not yet replayed.
    pub fn remaining(&self) -> usize {
        self.script.with(|script| script.outcomes.len())
    }
}

impl<H> ScriptedDirectoryPicker<H>
where
    H: Clone,
{
    /// The options of every invocation so far, in order.
    pub fn requests(&self) -> Vec<Option<DirectoryPickerOptions<H>>> {
        self.script.with(|script| script.requests.clone())
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl<H> DirectoryPicker for ScriptedDirectoryPicker<H>
where
    H: Clone + ConditionalSend,
{
    type Handle = H;

    async fn show_directory_picker(
        &self,
        options: Option<DirectoryPickerOptions<H>>,
    ) -> Result<H, DirectoryPickerError> {
        if let Some(options) = &options {
            options.validate()?;
        }

        let mode = options
            .as_ref()
            .and_then(|options| options.mode)
            .unwrap_or(PermissionMode::Read);

        let denied = self.denied.contains(&mode);
        let outcome = self.script.with(|script| {
            script.requests.push(options);
            if denied {
                None
            } else {
                script.outcomes.pop_front()
            }
        });

        if denied {
            return Err(DirectoryPickerError::PermissionDenied(format!(
                "{} access was refused",
                mode.as_str()
            )));
        }

        match outcome {
            Some(Outcome::Select(handle)) => Ok(handle),
            Some(Outcome::Cancel) => Err(DirectoryPickerError::Cancelled),
            Some(Outcome::Fail(error)) => Err(error),
            None => Err(DirectoryPickerError::Host {
                name: "InvalidStateError".into(),
                message: "No scripted outcome left".into(),
            }),
        }
    }
}

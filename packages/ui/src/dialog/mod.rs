//! Modal dialogs: a pure sequencer plus the Dioxus context that drives it.

mod machine;
mod provider;
mod request;

pub use machine::{run_confirm, DialogId, DialogSequencer, DialogState, DialogTimings, Effect, TimerId};
pub use provider::{use_dialogs, DialogHost, DialogProvider, Dialogs};
pub use request::{CancelAction, ConfirmAction, DialogKind, DialogRequest, DialogView};

/// Anything that can put a dialog on screen.
pub trait DialogSink {
    fn show(&self, request: DialogRequest);
}

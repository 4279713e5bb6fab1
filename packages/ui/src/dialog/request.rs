use std::fmt;
use std::future::Future;
use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};

use super::machine::DialogId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Success,
    Warning,
    Error,
    Confirm,
}

impl DialogKind {
    pub fn default_title(self) -> &'static str {
        match self {
            DialogKind::Info => "Information",
            DialogKind::Success => "Success",
            DialogKind::Warning => "Warning",
            DialogKind::Error => "Error",
            DialogKind::Confirm => "Confirm",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            DialogKind::Info => "info",
            DialogKind::Success => "success",
            DialogKind::Warning => "warning",
            DialogKind::Error => "error",
            DialogKind::Confirm => "confirm",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            DialogKind::Info => "ℹ",
            DialogKind::Success => "✓",
            DialogKind::Warning => "!",
            DialogKind::Error => "✕",
            DialogKind::Confirm => "?",
        }
    }
}

/// Work run after the user confirms. Failures are logged, never shown.
///
/// The action runs on an app-level task and may outlive the page that built
/// it, so page state is updated through a [`crate::PageTask`].
pub type ConfirmAction = Box<dyn FnOnce() -> LocalBoxFuture<'static, anyhow::Result<()>>>;
pub type CancelAction = Box<dyn FnOnce()>;

/// Everything needed to put one dialog on screen.
///
/// Built with the kind constructors ([`DialogRequest::error`],
/// [`DialogRequest::confirm`], ...) and refined with the builder methods.
pub struct DialogRequest {
    pub kind: DialogKind,
    pub message: String,
    pub title: Option<String>,
    pub confirm_label: Option<String>,
    pub cancel_label: Option<String>,
    pub suppress_buttons: bool,
    pub auto_close: Option<Duration>,
    on_confirm: Option<ConfirmAction>,
    on_cancel: Option<CancelAction>,
}

impl DialogRequest {
    pub fn new(kind: DialogKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            title: None,
            confirm_label: None,
            cancel_label: None,
            suppress_buttons: false,
            auto_close: None,
            on_confirm: None,
            on_cancel: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(DialogKind::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(DialogKind::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DialogKind::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DialogKind::Error, message)
    }

    pub fn confirm<F, Fut>(message: impl Into<String>, on_confirm: F) -> Self
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = anyhow::Result<()>> + 'static,
    {
        Self::new(DialogKind::Confirm, message).on_confirm(on_confirm)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = Some(label.into());
        self
    }

    /// Also valid on non-confirm kinds: the OK button then runs the action.
    pub fn on_confirm<F, Fut>(mut self, action: F) -> Self
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = anyhow::Result<()>> + 'static,
    {
        self.on_confirm = Some(Box::new(move || action().boxed_local()));
        self
    }

    pub fn on_cancel(mut self, action: impl FnOnce() + 'static) -> Self {
        self.on_cancel = Some(Box::new(action));
        self
    }

    /// Hide every button and show a spinner instead. Such a dialog can only go
    /// away through `auto_close` or a newer dialog.
    pub fn suppress_buttons(mut self) -> Self {
        self.suppress_buttons = true;
        self
    }

    pub fn auto_close(mut self, after: Duration) -> Self {
        self.auto_close = Some(after);
        self
    }

    /// Whether a click outside the card or the close button may dismiss it.
    pub fn dismissable(&self) -> bool {
        !self.suppress_buttons && self.kind != DialogKind::Confirm
    }

    pub(crate) fn take_confirm(&mut self) -> Option<ConfirmAction> {
        self.on_confirm.take()
    }

    pub(crate) fn take_cancel(&mut self) -> Option<CancelAction> {
        self.on_cancel.take()
    }

    pub fn view(&self, id: DialogId) -> DialogView {
        let is_confirm = self.kind == DialogKind::Confirm;
        DialogView {
            id,
            kind: self.kind,
            title: self
                .title
                .clone()
                .unwrap_or_else(|| self.kind.default_title().to_string()),
            message: self.message.clone(),
            confirm_label: self.confirm_label.clone().unwrap_or_else(|| {
                if is_confirm { "Confirm" } else { "OK" }.to_string()
            }),
            cancel_label: is_confirm.then(|| {
                self.cancel_label
                    .clone()
                    .unwrap_or_else(|| "Cancel".to_string())
            }),
            show_buttons: !self.suppress_buttons,
            dismissable: self.dismissable(),
        }
    }
}

impl fmt::Debug for DialogRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogRequest")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("title", &self.title)
            .field("suppress_buttons", &self.suppress_buttons)
            .field("auto_close", &self.auto_close)
            .field("has_confirm", &self.on_confirm.is_some())
            .field("has_cancel", &self.on_cancel.is_some())
            .finish()
    }
}

/// Render snapshot of the active dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct DialogView {
    pub id: DialogId,
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    /// Only confirm dialogs have a second button.
    pub cancel_label: Option<String>,
    /// `false` means a spinner takes the place of the buttons.
    pub show_buttons: bool,
    /// Close button and outside click enabled.
    pub dismissable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_titles_and_labels() {
        let view = DialogRequest::error("boom").view(DialogId::default());
        assert_eq!(view.title, "Error");
        assert_eq!(view.confirm_label, "OK");
        assert_eq!(view.cancel_label, None);
        assert!(view.show_buttons);
        assert!(view.dismissable);

        let view = DialogRequest::confirm("sure?", || async { Ok(()) }).view(DialogId::default());
        assert_eq!(view.title, "Confirm");
        assert_eq!(view.confirm_label, "Confirm");
        assert_eq!(view.cancel_label.as_deref(), Some("Cancel"));
        assert!(!view.dismissable);
    }

    #[test]
    fn test_custom_labels() {
        let view = DialogRequest::confirm("Delete it?", || async { Ok(()) })
            .title("Delete film")
            .confirm_label("Delete")
            .cancel_label("Keep")
            .view(DialogId::default());
        assert_eq!(view.title, "Delete film");
        assert_eq!(view.confirm_label, "Delete");
        assert_eq!(view.cancel_label.as_deref(), Some("Keep"));
    }

    #[test]
    fn test_suppressed_buttons_are_not_dismissable() {
        let request = DialogRequest::info("Signing out...").suppress_buttons();
        assert!(!request.dismissable());
        let view = request.view(DialogId::default());
        assert!(!view.show_buttons);
        assert!(!view.dismissable);
    }

    #[test]
    fn test_confirm_action_on_success_kind() {
        let mut request = DialogRequest::success("Saved").on_confirm(|| async { Ok(()) });
        assert!(request.take_confirm().is_some());
        assert!(request.take_confirm().is_none());
    }
}

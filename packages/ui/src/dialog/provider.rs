use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;

use super::machine::{run_confirm, DialogSequencer, DialogTimings, Effect, TimerId};
use super::request::{DialogRequest, DialogView};
use super::DialogSink;
use crate::clock::{Clock, TimerClock};
use crate::views::ModalOverlay;

/// Handle to the app-wide dialog sequencer. Cheap to copy into closures.
#[derive(Clone, Copy, PartialEq)]
pub struct Dialogs {
    sequencer: Signal<DialogSequencer>,
}

impl Dialogs {
    pub fn show(&self, request: DialogRequest) {
        let mut sequencer = self.sequencer;
        let effects = sequencer.write().show(request);
        self.run(effects);
    }

    pub fn confirm(&self) {
        let mut sequencer = self.sequencer;
        let effects = sequencer.write().confirm();
        self.run(effects);
    }

    pub fn cancel(&self) {
        let mut sequencer = self.sequencer;
        let effects = sequencer.write().cancel();
        self.run(effects);
    }

    pub fn dismiss_outside(&self) {
        let mut sequencer = self.sequencer;
        let effects = sequencer.write().dismiss_outside();
        self.run(effects);
    }

    pub fn view(&self) -> Option<DialogView> {
        self.sequencer.read().view()
    }

    fn timer_fired(&self, timer: TimerId) {
        let mut sequencer = self.sequencer;
        let effects = sequencer.write().timer_fired(timer);
        self.run(effects);
    }

    // Tasks go to the root scope: the page that asked for a dialog may be
    // unmounted before its timers fire.
    fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Schedule { timer, after } => {
                    let dialogs = *self;
                    let _ = spawn_forever(async move {
                        TimerClock.sleep(after).await;
                        dialogs.timer_fired(timer);
                    });
                }
                Effect::RunConfirm(action) => {
                    let _ = spawn_forever(run_confirm(action));
                }
                Effect::RunCancel(action) => action(),
            }
        }
    }
}

impl DialogSink for Dialogs {
    fn show(&self, request: DialogRequest) {
        Dialogs::show(self, request);
    }
}

pub fn use_dialogs() -> Dialogs {
    use_context::<Dialogs>()
}

/// Installs the [`Dialogs`] context and renders the active dialog above
/// `children`.
#[component]
pub fn DialogProvider(
    #[props(default)] timings: DialogTimings,
    children: Element,
) -> Element {
    use_context_provider(|| Dialogs {
        sequencer: Signal::new(DialogSequencer::new(timings)),
    });

    rsx! {
        {children}
        DialogHost {}
    }
}

#[component]
pub fn DialogHost() -> Element {
    let dialogs = use_dialogs();
    let Some(view) = dialogs.view() else {
        return rsx! {};
    };
    let kind = view.kind.css_class();

    rsx! {
        ModalOverlay {
            on_close: move |_| dialogs.dismiss_outside(),
            div {
                class: "dialog dialog-{kind}",
                div {
                    class: "dialog-header",
                    span { class: "dialog-icon", "{view.kind.icon()}" }
                    h3 { class: "dialog-title", "{view.title}" }
                    if view.dismissable {
                        button {
                            class: "dialog-close",
                            "aria-label": "Close",
                            onclick: move |_| dialogs.cancel(),
                            "×"
                        }
                    }
                }
                p { class: "dialog-message", "{view.message}" }
                if view.show_buttons {
                    div {
                        class: "dialog-actions",
                        if let Some(cancel) = view.cancel_label.clone() {
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| dialogs.cancel(),
                                "{cancel}"
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| dialogs.confirm(),
                            "{view.confirm_label}"
                        }
                    }
                } else {
                    div { class: "dialog-spinner spinner" }
                }
            }
        }
    }
}

//! The dialog sequencer: at most one dialog on screen, transitions spaced out in
//! time.
//!
//! [`DialogSequencer`] is a plain state machine. Every input returns the
//! [`Effect`]s the driver must carry out: schedule a timer, run a confirm action
//! or run a cancel handler. It never sleeps or spawns anything itself, so the
//! whole timing behaviour can be exercised against a virtual clock.
//!
//! ```text
//! Idle ──show──▶ Active ──show──▶ Closing ──settle timer──▶ Active(next)
//!                  │  ▲                │
//!     confirm/cancel/  └── show replaces the pending request
//!     auto-close   │
//!                  ▼
//!                 Idle
//! ```
//!
//! Timer ids are never reused. A timer that fires after the dialog it belongs
//! to is gone matches nothing and is ignored.

use std::time::Duration;

use super::request::{CancelAction, ConfirmAction, DialogRequest, DialogView};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DialogId(pub(crate) u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialogTimings {
    /// Gap between force-dismissing one dialog and showing the next.
    pub settle: Duration,
    /// Gap between closing a dialog and running its confirm action.
    pub confirm_settle: Duration,
}

impl Default for DialogTimings {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(150),
            confirm_settle: Duration::from_millis(100),
        }
    }
}

impl From<&store::config::Timings> for DialogTimings {
    fn from(timings: &store::config::Timings) -> Self {
        Self {
            settle: timings.dialog_settle(),
            confirm_settle: timings.confirm_settle(),
        }
    }
}

pub enum Effect {
    /// Call [`DialogSequencer::timer_fired`] with `timer` once `after` has elapsed.
    Schedule { timer: TimerId, after: Duration },
    RunConfirm(ConfirmAction),
    RunCancel(CancelAction),
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::Schedule { timer, after } => f
                .debug_struct("Schedule")
                .field("timer", timer)
                .field("after", after)
                .finish(),
            Effect::RunConfirm(_) => f.write_str("RunConfirm"),
            Effect::RunCancel(_) => f.write_str("RunCancel"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogState {
    Idle,
    Active,
    Closing,
}

struct ActiveDialog {
    id: DialogId,
    request: DialogRequest,
    auto_close: Option<TimerId>,
}

enum Phase {
    Idle,
    Active(ActiveDialog),
    Closing { next: DialogRequest, settle: TimerId },
}

pub struct DialogSequencer {
    timings: DialogTimings,
    phase: Phase,
    pending_confirms: Vec<(TimerId, ConfirmAction)>,
    next_dialog: u64,
    next_timer: u64,
}

impl Default for DialogSequencer {
    fn default() -> Self {
        Self::new(DialogTimings::default())
    }
}

impl DialogSequencer {
    pub fn new(timings: DialogTimings) -> Self {
        Self {
            timings,
            phase: Phase::Idle,
            pending_confirms: Vec::new(),
            next_dialog: 0,
            next_timer: 0,
        }
    }

    pub fn state(&self) -> DialogState {
        match self.phase {
            Phase::Idle => DialogState::Idle,
            Phase::Active(_) => DialogState::Active,
            Phase::Closing { .. } => DialogState::Closing,
        }
    }

    pub fn view(&self) -> Option<DialogView> {
        match &self.phase {
            Phase::Active(active) => Some(active.request.view(active.id)),
            _ => None,
        }
    }

    /// Show `request`, replacing whatever is on screen.
    ///
    /// A visible dialog is dismissed without running any of its handlers and
    /// the new one appears after the settle gap. While already closing, the
    /// pending request is replaced: only the latest one is shown.
    pub fn show(&mut self, request: DialogRequest) -> Vec<Effect> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => self.activate(request),
            Phase::Active(current) => {
                tracing::debug!(dialog = ?current.id, "dismissing dialog for a newer one");
                let settle = self.timer();
                self.phase = Phase::Closing {
                    next: request,
                    settle,
                };
                vec![Effect::Schedule {
                    timer: settle,
                    after: self.timings.settle,
                }]
            }
            Phase::Closing { next, settle } => {
                tracing::debug!(superseded = ?next, "replacing pending dialog");
                self.phase = Phase::Closing {
                    next: request,
                    settle,
                };
                Vec::new()
            }
        }
    }

    /// Confirm (or OK) button. Closes at once; the confirm action runs after
    /// the confirm settle gap.
    pub fn confirm(&mut self) -> Vec<Effect> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Active(mut active) => {
                tracing::debug!(dialog = ?active.id, "dialog confirmed");
                match active.request.take_confirm() {
                    Some(action) => {
                        let timer = self.timer();
                        self.pending_confirms.push((timer, action));
                        vec![Effect::Schedule {
                            timer,
                            after: self.timings.confirm_settle,
                        }]
                    }
                    None => Vec::new(),
                }
            }
            other => {
                self.phase = other;
                Vec::new()
            }
        }
    }

    /// Cancel button, close button, or an accepted outside click.
    pub fn cancel(&mut self) -> Vec<Effect> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Active(mut active) => {
                tracing::debug!(dialog = ?active.id, "dialog cancelled");
                active
                    .request
                    .take_cancel()
                    .map(Effect::RunCancel)
                    .into_iter()
                    .collect()
            }
            other => {
                self.phase = other;
                Vec::new()
            }
        }
    }

    /// Click on the backdrop. Ignored for confirm dialogs and for dialogs
    /// without buttons.
    pub fn dismiss_outside(&mut self) -> Vec<Effect> {
        match &self.phase {
            Phase::Active(active) if active.request.dismissable() => self.cancel(),
            _ => Vec::new(),
        }
    }

    pub fn timer_fired(&mut self, timer: TimerId) -> Vec<Effect> {
        if let Some(pos) = self.pending_confirms.iter().position(|(t, _)| *t == timer) {
            let (_, action) = self.pending_confirms.remove(pos);
            return vec![Effect::RunConfirm(action)];
        }
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Active(active) if active.auto_close == Some(timer) => {
                tracing::debug!(dialog = ?active.id, "dialog auto-closed");
                Vec::new()
            }
            Phase::Closing { next, settle } if settle == timer => self.activate(next),
            other => {
                tracing::trace!(?timer, "stale dialog timer ignored");
                self.phase = other;
                Vec::new()
            }
        }
    }

    fn activate(&mut self, request: DialogRequest) -> Vec<Effect> {
        self.next_dialog += 1;
        let id = DialogId(self.next_dialog);
        let mut effects = Vec::new();
        let auto_close = request.auto_close.map(|after| {
            let timer = self.timer();
            effects.push(Effect::Schedule { timer, after });
            timer
        });
        tracing::debug!(dialog = ?id, kind = ?request.kind, "showing dialog");
        self.phase = Phase::Active(ActiveDialog {
            id,
            request,
            auto_close,
        });
        effects
    }

    fn timer(&mut self) -> TimerId {
        self.next_timer += 1;
        TimerId(self.next_timer)
    }
}

/// Await a confirm action, logging its failure.
pub async fn run_confirm(action: ConfirmAction) {
    if let Err(e) = action().await {
        tracing::error!("dialog action failed: {e:#}");
    }
}

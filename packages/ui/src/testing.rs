//! Recording fakes for the dialog, navigation and clock seams.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::clock::Clock;
use crate::dialog::{DialogId, DialogKind, DialogRequest, DialogSink};
use crate::navigation::{Destination, Navigate};

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Dialog {
        kind: DialogKind,
        message: String,
        buttons: bool,
        auto_close: Option<Duration>,
    },
    Slept(Duration),
    Navigated(Destination),
}

/// Records everything in call order. Sleeping returns immediately.
#[derive(Clone, Default)]
pub struct Recorder {
    events: Rc<RefCell<Vec<Event>>>,
    requests: Rc<RefCell<Vec<DialogRequest>>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Remove the most recent request of `kind`, handlers included.
    pub fn take_request(&self, kind: DialogKind) -> Option<DialogRequest> {
        let mut requests = self.requests.borrow_mut();
        let pos = requests.iter().rposition(|r| r.kind == kind)?;
        Some(requests.remove(pos))
    }
}

impl DialogSink for Recorder {
    fn show(&self, request: DialogRequest) {
        let view = request.view(DialogId::default());
        self.events.borrow_mut().push(Event::Dialog {
            kind: view.kind,
            message: view.message,
            buttons: view.show_buttons,
            auto_close: request.auto_close,
        });
        self.requests.borrow_mut().push(request);
    }
}

impl Navigate for Recorder {
    fn navigate(&self, to: Destination) {
        self.events.borrow_mut().push(Event::Navigated(to));
    }
}

impl Clock for Recorder {
    async fn sleep(&self, duration: Duration) {
        self.events.borrow_mut().push(Event::Slept(duration));
    }
}

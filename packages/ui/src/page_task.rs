//! Work that belongs to one page.
//!
//! Dialog confirm actions run on an app-level task and can outlive the page
//! that built them. Anything that touches page signals goes through a
//! [`PageTask`] instead: the action only sends a message, and the page's own
//! task does the work. Unmounting the page drops that task, so nothing writes
//! to the page after it is gone.

use std::future::Future;

use dioxus::prelude::*;
use futures::channel::mpsc::{self, UnboundedSender};
use futures::StreamExt;

pub struct PageTask<T> {
    tx: UnboundedSender<T>,
}

impl<T> Clone for PageTask<T> {
    fn clone(&self) -> Self {
        Self { tx: self.tx.clone() }
    }
}

impl<T> PageTask<T> {
    /// Queue `input` for the page. Returns `false` once the page has unmounted.
    pub fn send(&self, input: T) -> bool {
        self.tx.unbounded_send(input).is_ok()
    }
}

/// Spawn a task in the calling component that runs `work` for every input,
/// one at a time.
pub fn use_page_task<T, F, Fut>(work: F) -> PageTask<T>
where
    T: 'static,
    F: FnMut(T) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    use_hook(move || {
        let (tx, mut rx) = mpsc::unbounded::<T>();
        let mut work = work;
        spawn(async move {
            while let Some(input) = rx.next().await {
                work(input).await;
            }
        });
        PageTask { tx }
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use dioxus::dioxus_core::NoOpMutations;

    use super::*;
    use crate::clock::{Clock, TimerClock};
    use crate::dialog::{use_dialogs, DialogProvider, DialogRequest, DialogTimings};

    #[derive(Clone, Default)]
    struct Log(Rc<RefCell<Vec<&'static str>>>);

    impl Log {
        fn push(&self, entry: &'static str) {
            self.0.borrow_mut().push(entry);
        }

        fn entries(&self) -> Vec<&'static str> {
            self.0.borrow().clone()
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    async fn drive(dom: &mut VirtualDom, for_ms: u64) {
        let deadline = tokio::time::Instant::now() + ms(for_ms);
        while tokio::time::timeout_at(deadline, dom.wait_for_work()).await.is_ok() {
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    /// Confirms a long-running sync, then gets unmounted while it is in flight.
    #[component]
    fn SyncPage() -> Element {
        let log = use_context::<Log>();
        let dialogs = use_dialogs();
        let mut syncing = use_signal(|| false);

        let sync = use_page_task(move |()| {
            let log = log.clone();
            async move {
                syncing.set(true);
                log.push("started");
                TimerClock.sleep(ms(100)).await;
                syncing.set(false);
                log.push("finished");
            }
        });

        use_hook(move || {
            spawn(async move {
                dialogs.show(DialogRequest::confirm("Sync?", move || async move {
                    sync.send(());
                    Ok(())
                }));
                TimerClock.sleep(ms(20)).await;
                dialogs.confirm();
            })
        });

        rsx! {
            p { if syncing() { "Syncing..." } else { "Sync now" } }
        }
    }

    #[component]
    fn App() -> Element {
        let log = use_context::<Log>();
        let mut mounted = use_signal(|| true);

        use_hook(move || {
            spawn(async move {
                TimerClock.sleep(ms(60)).await;
                log.push("left page");
                mounted.set(false);
            })
        });

        rsx! {
            DialogProvider {
                timings: DialogTimings { settle: ms(10), confirm_settle: ms(10) },
                if mounted() {
                    SyncPage {}
                }
            }
        }
    }

    #[tokio::test]
    async fn test_leaving_page_mid_action_stops_its_work() {
        let log = Log::default();
        let mut dom = VirtualDom::new(App).with_root_context(log.clone());
        dom.rebuild_in_place();

        drive(&mut dom, 250).await;

        assert_eq!(log.entries(), vec!["started", "left page"]);
    }

    #[test]
    fn test_send_after_unmount_reports_closed() {
        let (tx, rx) = mpsc::unbounded::<()>();
        let task = PageTask { tx };
        assert!(task.send(()));
        drop(rx);
        assert!(!task.send(()));
    }
}

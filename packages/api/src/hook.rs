use std::cell::RefCell;
use std::rc::Rc;

type Listener = Rc<dyn Fn()>;

/// Observable fired whenever any request comes back 401.
///
/// The session store and the navigation layer subscribe independently; the
/// gateway itself knows neither.
#[derive(Clone, Default)]
pub struct UnauthorizedHook {
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl UnauthorizedHook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn emit(&self) {
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_emit_reaches_every_listener() {
        let hook = UnauthorizedHook::new();
        let count = Rc::new(Cell::new(0));
        for _ in 0..2 {
            let count = count.clone();
            hook.subscribe(move || count.set(count.get() + 1));
        }
        hook.emit();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_listener_may_subscribe_during_emit() {
        let hook = UnauthorizedHook::new();
        let inner = hook.clone();
        hook.subscribe(move || inner.subscribe(|| {}));
        hook.emit();
        hook.emit();
    }
}

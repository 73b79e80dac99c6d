use std::{cell::RefCell, rc::Rc};

/// Arms one-shot callbacks. Dropping the returned handle cancels the
/// callback if it has not fired yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Collapses bursts of [`Debouncer::trigger`] into a single callback run
/// once `delay_ms` elapsed without a new trigger.
pub struct Debouncer<S>
where
    S: Scheduler,
{
    scheduler: S,
    delay_ms: u32,
    callback: Rc<dyn Fn()>,
    pending: RefCell<Option<S::Handle>>,
}

impl<S> Debouncer<S>
where
    S: Scheduler,
{
    pub fn new<F>(scheduler: S, delay_ms: u32, callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self {
            scheduler,
            delay_ms,
            callback: Rc::new(callback),
            pending: RefCell::new(None),
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn trigger(&self) {
        let mut pending = self.pending.borrow_mut();
        // cancel before arming, only one timer may be pending
        pending.take();

        let callback = self.callback.clone();
        *pending = Some(
            self.scheduler
                .schedule(self.delay_ms, Box::new(move || callback())),
        );
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

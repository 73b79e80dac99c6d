use gloo_timers::callback::Timeout;
use kiosque_lib::debounce::Scheduler;

pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    // dropping a Timeout clears it
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

//! Timer seam used by the dialog driver and the auth flow.

use std::time::Duration;

/// Something that can wait. Production code uses [`TimerClock`]; tests record
/// the requested delays instead of sleeping.
#[allow(async_fn_in_trait)]
pub trait Clock {
    async fn sleep(&self, duration: Duration);
}

/// Real timers: `gloo-timers` in the browser, tokio everywhere else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimerClock;

impl Clock for TimerClock {
    async fn sleep(&self, duration: Duration) {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(duration).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(duration).await;
    }
}

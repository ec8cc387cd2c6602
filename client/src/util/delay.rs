//! Fire-and-forget delayed callbacks for simulated latency.
//!
//! SYSTEM CONTEXT
//! ==============
//! The copilot and rephrase tools stand in for remote calls with a fixed
//! timer. In the browser the callback runs on a local task after the delay;
//! outside the browser (SSR, native tests) it runs immediately so state
//! transitions stay observable without a timer runtime.

#[cfg(test)]
#[path = "delay_test.rs"]
mod delay_test;

use std::time::Duration;

/// Run `f` once `delay` has elapsed. Not cancellable.
pub fn run_after(delay: Duration, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        f();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay;
        f();
    }
}

//! Browser task helpers.
//!
//! Page handlers only fire after hydration, so on the server these are inert:
//! [`spawn`] drops the future and [`sleep`] returns at once.

use std::future::Future;
use std::time::Duration;

/// Run `fut` on the browser's microtask queue.
pub fn spawn(fut: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}

pub async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(feature = "hydrate"))]
    let _ = duration;
}

//! Timer utilities for animation frame loops.

/// Sleep for roughly `ms` milliseconds without blocking the UI runtime.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Frame delay used by the count-up animations (~60 fps).
pub const FRAME_MS: u64 = 16;

//! Timer wrapper.
//!
//! `setTimeout` wrapped as a future via `js_sys::Promise`, instead of
//! `gloo-timers`. The non-wasm variant resolves immediately so the session
//! logic that awaits it stays testable off-browser.

/// Suspends the calling task for `millis` milliseconds.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(millis: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis as i32);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(_millis: u32) {}

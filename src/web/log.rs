//! Console logging that also works off-wasm.
//!
//! On wasm the messages go to the browser console; on native targets they go
//! to stderr so tests exercising the session and guard paths do not hit the
//! wasm-bindgen import shims.

#[cfg(target_arch = "wasm32")]
pub fn console_log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_log(msg: &str) {
    eprintln!("{msg}");
}

#[cfg(target_arch = "wasm32")]
pub fn console_warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_warn(msg: &str) {
    eprintln!("{msg}");
}

//! Access to the browser window.
//!
//! Off wasm there is no window, and `web_sys` bindings panic when called, so
//! native builds (tests, tooling) always see `None`.

#[cfg(target_arch = "wasm32")]
pub fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> Option<web_sys::Window> {
    None
}

/// Macros for timestamped browser console logging.
///
/// On WASM these go through `gloo_console` with a `js_sys::Date` prefix;
/// elsewhere (tests, native tooling) they forward to `tracing`.
#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            gloo_console::info!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)*)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::info!($($arg)*);
        }
    }};
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            gloo_console::warn!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)*)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::warn!($($arg)*);
        }
    }};
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            gloo_console::error!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)*)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::error!($($arg)*);
        }
    }};
}

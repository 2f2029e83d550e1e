//! Console Logging Macros
//!
//! In WASM builds: messages go to the browser console via `web_sys::console`
//! In native builds (tests, tools): arguments are type-checked, nothing is printed
//!
//! Usage:
//! ```rust
//! use fetchdog_engine::engine_log;
//!
//! let mode = "chasing";
//! engine_log!("mode -> {}", mode);
//! ```

/// Log an informational line to the browser console
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            let msg = format!($($arg)*);
            $crate::__web_sys::console::log_1(&msg.into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Log a warning line to the browser console
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            let msg = format!($($arg)*);
            $crate::__web_sys::console::warn_1(&msg.into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - Embedded (`pico_w` feature): defmt
//! - Host tests: `println!`
//! - Host non-test: no-op
//!
//! Keep format strings to plain `{}` interpolation of primitives so the same
//! call site renders under both defmt and `core::fmt`.

/// Log at info level
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico_w")]
        defmt::info!($($arg)*);
        #[cfg(all(not(feature = "pico_w"), test))]
        std::println!("[INFO] {}", std::format!($($arg)*));
        #[cfg(all(not(feature = "pico_w"), not(test)))]
        let _ = ($($arg)*,);
    }};
}

/// Log at warn level
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico_w")]
        defmt::warn!($($arg)*);
        #[cfg(all(not(feature = "pico_w"), test))]
        std::println!("[WARN] {}", std::format!($($arg)*));
        #[cfg(all(not(feature = "pico_w"), not(test)))]
        let _ = ($($arg)*,);
    }};
}

/// Log at error level
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico_w")]
        defmt::error!($($arg)*);
        #[cfg(all(not(feature = "pico_w"), test))]
        std::println!("[ERROR] {}", std::format!($($arg)*));
        #[cfg(all(not(feature = "pico_w"), not(test)))]
        let _ = ($($arg)*,);
    }};
}

/// Log at debug level
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico_w")]
        defmt::debug!($($arg)*);
        #[cfg(all(not(feature = "pico_w"), test))]
        std::println!("[DEBUG] {}", std::format!($($arg)*));
        #[cfg(all(not(feature = "pico_w"), not(test)))]
        let _ = ($($arg)*,);
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_log_macros_expand() {
        log_info!("info {}", 1);
        log_warn!("warn {}", 2);
        log_error!("error {}", 3);
        log_debug!("debug {}", 4);
    }
}

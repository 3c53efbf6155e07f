//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - Embedded (`defmt` feature): forwards to defmt over RTT
//! - Host (`std` feature, e.g. SITL) and unit tests: `println!` with a level prefix
//! - Anything else: no-op, arguments are still type-checked
//!
//! With `defmt`, arguments must implement `defmt::Format`. Log primitive
//! values and `&str` (use `CommandError::reason()` rather than the error
//! itself).

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "defmt"), any(test, feature = "std")))]
        ::std::println!("[INFO] {}", ::std::format!($($arg)*));

        #[cfg(all(not(feature = "defmt"), not(any(test, feature = "std"))))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "defmt"), any(test, feature = "std")))]
        ::std::println!("[WARN] {}", ::std::format!($($arg)*));

        #[cfg(all(not(feature = "defmt"), not(any(test, feature = "std"))))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(feature = "defmt"), any(test, feature = "std")))]
        ::std::eprintln!("[ERROR] {}", ::std::format!($($arg)*));

        #[cfg(all(not(feature = "defmt"), not(any(test, feature = "std"))))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "defmt"), any(test, feature = "std")))]
        ::std::println!("[DEBUG] {}", ::std::format!($($arg)*));

        #[cfg(all(not(feature = "defmt"), not(any(test, feature = "std"))))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

/// Log trace message
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::trace!($($arg)*);

        #[cfg(all(not(feature = "defmt"), test))]
        ::std::println!("[TRACE] {}", ::std::format!($($arg)*));

        #[cfg(all(not(feature = "defmt"), not(test)))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

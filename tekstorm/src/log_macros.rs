//! Logging shims.
//!
//! These forward to the `log` crate when the `log` feature is enabled and
//! compile to nothing otherwise, so call sites never need a `cfg`.

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)+) => { log::trace!($($arg)+) };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}

#[cfg(feature = "log")]
macro_rules! debug {
    ($($arg:tt)+) => { log::debug!($($arg)+) };
}

#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)+) => { log::warn!($($arg)+) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}

// `warn` itself would clash with the builtin `#[warn]` attribute.
pub(crate) use {debug, log_warn, trace};

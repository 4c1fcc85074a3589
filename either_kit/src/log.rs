// Mirrors the log crate macros so call sites don't have to check the feature

#[cfg(feature = "logging")]
macro_rules! trace {
    ($($args:tt)+) => {
        _log::trace!($($args)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! trace {
    ($($args:tt)+) => {{
        let _ = format_args!($($args)+);
    }};
}

#[cfg(feature = "logging")]
macro_rules! debug {
    ($($args:tt)+) => {
        _log::debug!($($args)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! debug {
    ($($args:tt)+) => {{
        let _ = format_args!($($args)+);
    }};
}

// Optional logging. Expands to nothing unless `log` or `defmt` is enabled.
#![allow(unused_macros)]

#[cfg(feature = "log")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { ::log::debug!($($arg)*) };
}

#[cfg(all(feature = "defmt", not(feature = "log")))]
macro_rules! trace_debug {
    ($($arg:tt)*) => { ::defmt::debug!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! trace_warn {
    ($($arg:tt)*) => { ::log::warn!($($arg)*) };
}

#[cfg(all(feature = "defmt", not(feature = "log")))]
macro_rules! trace_warn {
    ($($arg:tt)*) => { ::defmt::warn!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! trace_warn {
    ($($arg:tt)*) => {};
}

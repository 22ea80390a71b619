//! Error type shared by every fallible driver operation.

use core::fmt;

/// Errors reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An operation was attempted before `Display::init` succeeded, or after
    /// a failed initialization left the driver faulted.
    NotInitialized,
    /// One or more frame transfers reported failure on the bus.
    BusFailure,
    /// A device index, digit index, or configuration value was outside its
    /// valid range. Nothing reached the bus.
    InvalidArgument,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotInitialized => write!(f, "display not initialized"),
            Error::BusFailure => write!(f, "bus write failed"),
            Error::InvalidArgument => write!(f, "index or configuration value out of range"),
        }
    }
}

//! Unified error type for menu-adjust.
//!
//! We avoid `alloc` - all error variants carry no data at all.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.

use core::fmt;

/// Top-level error type used across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Construction
    /// Minimum allowed value is higher than the maximum allowed.
    InvalidBounds,

    /// The initial value of an option selector is not among its options.
    ValueNotInOptions,

    /// Option labels were given but their count differs from the options.
    LabelCountMismatch,

    // Calendar
    /// Year/month/day do not form a real calendar date.
    InvalidDate,

    /// Hour/minute/second do not form a valid time of day.
    InvalidTime,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::InvalidBounds => "minimum allowed value is higher than the maximum allowed",
            Error::ValueNotInOptions => "value must be present in options",
            Error::LabelCountMismatch => "options and labels must be the same length",
            Error::InvalidDate => "not a valid calendar date",
            Error::InvalidTime => "not a valid time of day",
        };
        f.write_str(msg)
    }
}

/// Convenience alias used by fallible constructors.
pub type Result<T> = core::result::Result<T, Error>;

//! Unified error type for lcdmenu.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` when the `defmt` feature is enabled.

/// Top-level error type used across the crate.
///
/// Timeouts are not errors here: the polling primitives report them as
/// `None` so callers cannot forget to handle them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Menu navigation needs at least the UP/DOWN/SELECT trio.
    TooFewButtons,

    /// More buttons than the label layout can distribute
    /// ([`MAX_BUTTONS`](crate::config::MAX_BUTTONS)).
    TooManyButtons,

    /// Numeric field wider than the edit buffer or the display row.
    FieldTooWide,
}

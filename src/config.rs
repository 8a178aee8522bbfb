//! Compile-time constants and buffer capacities.
//!
//! All timing parameters and fixed buffer sizes live here so they can
//! be tuned in one place.

/// Debounce pause applied after a press or release is observed (ms).
pub const DEBOUNCE_MS: u32 = 100;

/// Poll timeout used as the blink tick during numeric entry (ms).
pub const BLINK_TICK_MS: u64 = 750;

/// How long a menu title screen is held before the list appears (ms).
/// Any button press skips the remainder.
pub const TITLE_HOLD_MS: u64 = 750;

/// Maximum number of physical buttons a label row can be split across.
/// Bounds the label slot vector in the menu flows.
pub const MAX_BUTTONS: usize = 16;

/// Widest supported display, in character cells. Bounds the row
/// buffers built by the layout engine (40x4 is the largest common
/// character LCD module).
pub const MAX_COLS: usize = 40;

/// Maximum width of a numeric entry field, in cells (sign + digits +
/// decimal point). A field must also fit the display width.
pub const MAX_FIELD: usize = 16;

/// Bound on a single menu entry's length, in characters. The page
/// renderer truncates to the display width as well, so this only caps
/// per-entry work on oversized input.
pub const MAX_ENTRY_CHARS: usize = 32;

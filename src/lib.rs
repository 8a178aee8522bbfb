//! Menu and input widgets for character LCDs.
//!
//! Renders paginated text menus, button-label hint rows, modal
//! messages, and digit-by-digit numeric entry screens on a fixed
//! `columns x rows` character display, driven by a handful of
//! debounced push-buttons.
//!
//! Hardware stays behind three seams: [`CharDisplay`] for the LCD,
//! [`ButtonSource`] for the keys (with a [`PinArray`] implementation
//! over `embedded_hal` input pins), and [`Clock`] for time. Everything
//! above those seams is pure logic, so the whole crate tests on the
//! host: `cargo test`.
//!
//! Flows are synchronous and busy-polling; there are no interrupts,
//! tasks or allocations anywhere in the render/poll path. Blocking
//! waits are bounded by wall-clock deadlines, and a timeout surfaces
//! as `None` from the poll primitives.

#![cfg_attr(not(test), no_std)]

pub mod buttons;
pub mod codec;
pub mod config;
pub mod display;
pub mod error;
pub mod layout;
pub mod menu;

pub use buttons::{wait_for_all_release, wait_for_press, Button, ButtonSource, Clock, PinArray};
pub use display::CharDisplay;
pub use error::Error;
pub use menu::{Menu, NavButtons};

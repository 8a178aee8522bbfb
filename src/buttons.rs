//! Push-button input: active-low GPIO wrappers and the debounced
//! blocking poller.
//!
//! Buttons are wired with internal pull-ups, so a pressed button reads
//! low. The poller busy-loops over every button and bounds each wait
//! with a deadline computed once at entry; there is no interrupt path.

use crate::config::DEBOUNCE_MS;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

/// Monotonic millisecond clock with a blocking delay.
///
/// [`DelayNs`] supplies the fixed debounce pauses; [`millis`] drives
/// the poll deadlines. The counter must be monotonic over any single
/// wait window.
///
/// [`millis`]: Clock::millis
pub trait Clock: DelayNs {
    /// Milliseconds since some fixed epoch (typically boot).
    fn millis(&mut self) -> u64;
}

/// Single push-button, active-low (pressed = pin reads low).
///
/// Caller must configure the pin as a pull-up input before wrapping it.
pub struct Button<P> {
    pin: P,
}

impl<P: InputPin> Button<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Returns true while the button is held.
    pub fn is_pressed(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }

    /// Returns true while the button is up.
    pub fn is_released(&mut self) -> bool {
        !self.is_pressed()
    }
}

/// Ordered set of logical buttons the poller scans.
///
/// Indices run 0..[`num_buttons`]; the menu flows derive the
/// UP/DOWN/SELECT roles from the count.
///
/// [`num_buttons`]: ButtonSource::num_buttons
pub trait ButtonSource {
    fn num_buttons(&self) -> u8;

    /// Returns true while button `index` is held.
    fn is_pressed(&mut self, index: u8) -> bool;
}

/// Button source over a fixed array of GPIO pins.
pub struct PinArray<P, const N: usize> {
    buttons: [Button<P>; N],
}

impl<P: InputPin, const N: usize> PinArray<P, N> {
    pub fn new(pins: [P; N]) -> Self {
        Self {
            buttons: pins.map(Button::new),
        }
    }
}

impl<P: InputPin, const N: usize> ButtonSource for PinArray<P, N> {
    fn num_buttons(&self) -> u8 {
        N as u8
    }

    fn is_pressed(&mut self, index: u8) -> bool {
        self.buttons
            .get_mut(index as usize)
            .is_some_and(Button::is_pressed)
    }
}

fn expired<C: Clock>(clock: &mut C, deadline: Option<u64>) -> bool {
    match deadline {
        Some(d) => clock.millis() >= d,
        None => false,
    }
}

fn all_released<B: ButtonSource>(buttons: &mut B) -> bool {
    let mut released = true;
    for i in 0..buttons.num_buttons() {
        if buttons.is_pressed(i) {
            released = false;
        }
    }
    released
}

/// Block until any button is pressed, or the deadline elapses.
///
/// With `wait_for_release`, first polls until every button reads
/// released, then applies the debounce pause. The deadline is
/// `millis() + max_wait_ms`, computed once at entry; `None` waits
/// forever and `Some(0)` times out on the first check. On a press the
/// lowest index within one scan wins; the debounce pause is applied
/// before returning. Timeout returns `None`.
pub fn wait_for_press<B: ButtonSource, C: Clock>(
    buttons: &mut B,
    clock: &mut C,
    wait_for_release: bool,
    max_wait_ms: Option<u64>,
) -> Option<u8> {
    let deadline = max_wait_ms.map(|w| clock.millis().saturating_add(w));

    if wait_for_release {
        loop {
            if expired(clock, deadline) {
                return None;
            }
            if all_released(buttons) {
                break;
            }
        }
        clock.delay_ms(DEBOUNCE_MS);
    }

    loop {
        for i in 0..buttons.num_buttons() {
            if buttons.is_pressed(i) {
                clock.delay_ms(DEBOUNCE_MS);
                #[cfg(feature = "defmt")]
                defmt::debug!("button {=u8} pressed", i);
                return Some(i);
            }
        }
        if expired(clock, deadline) {
            return None;
        }
    }
}

/// Block until every button reads released, or the deadline elapses.
///
/// The debounce pause is applied only if some button was observed
/// pressed; a timeout returns without it.
pub fn wait_for_all_release<B: ButtonSource, C: Clock>(
    buttons: &mut B,
    clock: &mut C,
    max_wait_ms: Option<u64>,
) {
    let deadline = max_wait_ms.map(|w| clock.millis().saturating_add(w));
    let mut any_pressed = false;

    loop {
        if expired(clock, deadline) {
            return;
        }
        if all_released(buttons) {
            break;
        }
        any_pressed = true;
    }

    if any_pressed {
        clock.delay_ms(DEBOUNCE_MS);
    }
}

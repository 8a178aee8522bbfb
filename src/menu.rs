//! Menu/dialog controller.
//!
//! Three synchronous interactive flows built from the layout engine,
//! the numeric codec and the debounced poller: paginated list
//! selection, modal acknowledgment message, and digit-by-digit
//! numeric entry. Each flow is entered and exited synchronously; the
//! only state that outlives a call is what is left on the display.

use crate::buttons::{self, ButtonSource, Clock};
use crate::codec;
use crate::config::{BLINK_TICK_MS, TITLE_HOLD_MS};
use crate::display::CharDisplay;
use crate::error::Error;
use crate::layout;

/// UP/DOWN/SELECT navigation roles, assigned to three contiguous
/// central button indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NavButtons {
    pub up: u8,
    pub down: u8,
    pub select: u8,
}

impl NavButtons {
    /// Derive the roles from the button count. Menu navigation needs
    /// at least the three roles.
    pub fn from_count(num_buttons: u8) -> Result<Self, Error> {
        if num_buttons < 3 {
            return Err(Error::TooFewButtons);
        }
        let up = (num_buttons - 3) / 2;
        Ok(Self {
            up,
            down: up + 1,
            select: up + 2,
        })
    }
}

/// Move the selection one entry up, wrapping to the last entry.
fn wrap_prev(selected: usize, count: usize) -> usize {
    if selected == 0 {
        count.saturating_sub(1)
    } else {
        selected - 1
    }
}

/// Move the selection one entry down, wrapping to the first entry.
fn wrap_next(selected: usize, count: usize) -> usize {
    if selected + 1 >= count {
        0
    } else {
        selected + 1
    }
}

/// Menu widget layer over a character display, a button set and a
/// clock.
///
/// The display is `cols x rows` cells; the bottom row is reserved for
/// button labels, the rows above it for content.
pub struct Menu<D, B, C> {
    display: D,
    buttons: B,
    clock: C,
    cols: u8,
    rows: u8,
}

impl<D, B, C> Menu<D, B, C>
where
    D: CharDisplay,
    B: ButtonSource,
    C: Clock,
{
    pub fn new(display: D, buttons: B, clock: C, cols: u8, rows: u8) -> Self {
        Self {
            display,
            buttons,
            clock,
            cols,
            rows,
        }
    }

    /// Bring up the display: init, backlight, clear, splash. Button
    /// pins are expected to be configured as pull-up inputs already.
    pub fn init(&mut self) {
        self.display.init();
        self.display.backlight();
        self.display.clear();
        self.display.write_str("MENU");
        #[cfg(feature = "defmt")]
        defmt::info!("menu: display ready");
    }

    /// Hand the hardware back.
    pub fn release(self) -> (D, B, C) {
        (self.display, self.buttons, self.clock)
    }

    // Rendering primitives, public for callers building custom
    // screens.

    /// Print `text` blank-padded to the full row width.
    pub fn print_row(&mut self, text: &str, row: u8) {
        let line = layout::padded_row(text, self.cols);
        self.display.set_cursor(0, row);
        self.display.write_str(&line);
    }

    /// Blank one row and leave the cursor at its start.
    pub fn clear_row(&mut self, row: u8) {
        self.print_row("", row);
        self.display.set_cursor(0, row);
    }

    /// Render one label per button slot into the bottom row.
    pub fn print_button_labels(&mut self, labels: &[Option<&str>]) {
        let line = layout::button_row(labels, self.cols);
        self.display.set_cursor(0, self.rows.saturating_sub(1));
        self.display.write_str(&line);
    }

    /// Center a shorter label subset among the full button slots and
    /// render it.
    pub fn print_partial_button_labels(&mut self, labels: &[&str]) -> Result<(), Error> {
        let slots = layout::partial_slots(labels, self.buttons.num_buttons() as usize)?;
        self.print_button_labels(&slots);
        Ok(())
    }

    /// Render the list rows around `selected`, the selected entry
    /// vertically centered and marked, out-of-range rows blank.
    pub fn print_menu_page(&mut self, entries: &[&str], selected: usize) {
        let visible = self.rows.saturating_sub(1) as usize;
        for row in 0..visible {
            let line = match layout::page_entry(row, selected, visible, entries.len()) {
                Some(idx) => layout::menu_row(entries[idx], idx == selected, self.cols),
                None => layout::blank_row(self.cols),
            };
            self.display.set_cursor(0, row as u8);
            self.display.write_str(&line);
        }
    }

    // Polling primitives.

    /// See [`buttons::wait_for_press`]. `None` is a timeout.
    pub fn wait_for_button_press(
        &mut self,
        wait_for_release: bool,
        max_wait_ms: Option<u64>,
    ) -> Option<u8> {
        buttons::wait_for_press(&mut self.buttons, &mut self.clock, wait_for_release, max_wait_ms)
    }

    /// See [`buttons::wait_for_all_release`].
    pub fn wait_for_all_button_release(&mut self, max_wait_ms: Option<u64>) {
        buttons::wait_for_all_release(&mut self.buttons, &mut self.clock, max_wait_ms)
    }

    // Interactive flows.

    /// Paginated list selection. Shows the optional title screen,
    /// then blocks until SELECT; returns the selected entry index.
    /// UP and DOWN wrap around the ends of the list.
    pub fn show_menu(&mut self, entries: &[&str], title: Option<&str>) -> Result<usize, Error> {
        let nav = NavButtons::from_count(self.buttons.num_buttons())?;
        let nav_slots =
            layout::partial_slots(&["UP", "DOWN", "SEL"], self.buttons.num_buttons() as usize)?;

        if let Some(title) = title {
            self.display.clear();
            self.print_row(title, 0);
            self.print_button_labels(&nav_slots);
            let _ = self.wait_for_button_press(true, Some(TITLE_HOLD_MS));
        }

        let mut selected = 0usize;
        loop {
            self.print_menu_page(entries, selected);
            self.print_button_labels(&nav_slots);
            match self.wait_for_button_press(true, None) {
                Some(b) if b == nav.up => selected = wrap_prev(selected, entries.len()),
                Some(b) if b == nav.down => selected = wrap_next(selected, entries.len()),
                Some(b) if b == nav.select => {
                    #[cfg(feature = "defmt")]
                    defmt::info!("menu: entry {=usize} selected", selected);
                    return Ok(selected);
                }
                _ => {}
            }
        }
    }

    /// Modal acknowledgment message. Blocks (with release-wait) until
    /// any press or the optional deadline; fire-and-forget, the press
    /// outcome is discarded.
    pub fn show_message(
        &mut self,
        text: &str,
        max_wait_ms: Option<u64>,
        button: Option<&str>,
    ) -> Result<(), Error> {
        self.display.clear();
        self.print_partial_button_labels(&[button.unwrap_or("OK")])?;
        self.display.set_cursor(0, 0);
        self.display.write_str(text);
        let _ = self.wait_for_button_press(true, max_wait_ms);
        Ok(())
    }

    /// Digit-by-digit integer entry. Returns the edited value once the
    /// cursor has been advanced past the last cell.
    pub fn ask_long(&mut self, default: i64, num_digits: u8, signed: bool) -> Result<i64, Error> {
        let mut buf = codec::encode_long(default, num_digits, signed)?;
        self.edit_field(&mut buf)?;
        let value = codec::decode_long(&buf);
        #[cfg(feature = "defmt")]
        defmt::info!("menu: entered {=i64}", value);
        Ok(value)
    }

    /// Digit-by-digit fixed-point entry. The decimal point cell is
    /// skipped automatically.
    pub fn ask_float(
        &mut self,
        default: f32,
        num_digits: u8,
        num_decimals: u8,
        signed: bool,
    ) -> Result<f32, Error> {
        let mut buf = codec::encode_float(default, num_digits, num_decimals, signed)?;
        self.edit_field(&mut buf)?;
        Ok(codec::decode_float(&buf))
    }

    /// Shared digit editor over an encoded field.
    ///
    /// The field is centered on the top row. The current cell blinks
    /// on the poll-timeout tick; `+`/`-` edit the cell (digits wrap
    /// 9->0 and 0->9, the sign cell is forced to `+`/`-`), NEXT
    /// commits and advances. The NEXT label switches to DONE at the
    /// last editable cell.
    fn edit_field(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        let num_buttons = self.buttons.num_buttons();
        if num_buttons < 3 {
            return Err(Error::TooFewButtons);
        }
        let width = buf.len();
        if width > self.cols as usize {
            return Err(Error::FieldTooWide);
        }

        let offset = layout::partial_offset(num_buttons as usize, 3) as u8;
        let (plus, minus, next) = (offset, offset + 1, offset + 2);

        self.display.clear();
        self.print_partial_button_labels(&["+", "-", "NEXT"])?;

        let col_offset = (self.cols as usize).saturating_sub(width) / 2;
        let mut line = layout::Row::new();
        for _ in 0..col_offset {
            let _ = line.push(' ');
        }
        for &cell in buf.iter() {
            let _ = line.push(cell as char);
        }
        self.print_row(line.as_str(), 0);

        let mut idx = 0;
        let mut blink = true;
        while idx < width {
            let c = buf[idx] as char;
            if c == '.' {
                idx += 1;
                continue;
            }

            self.display.set_cursor((col_offset + idx) as u8, 0);
            self.display.write_char(if blink { c } else { ' ' });
            blink = !blink;

            match self.wait_for_button_press(true, Some(BLINK_TICK_MS)) {
                Some(b) if b == plus => {
                    if c == '+' || c == '-' {
                        buf[idx] = b'+';
                        blink = true;
                    } else {
                        let digit = (c as u8 - b'0' + 1) % 10;
                        buf[idx] = b'0' + digit;
                    }
                }
                Some(b) if b == minus => {
                    if c == '+' || c == '-' {
                        buf[idx] = b'-';
                        blink = true;
                    } else {
                        let digit = c as u8 - b'0';
                        buf[idx] = b'0' + if digit == 0 { 9 } else { digit - 1 };
                    }
                }
                Some(b) if b == next => {
                    self.display.set_cursor((col_offset + idx) as u8, 0);
                    self.display.write_char(c);
                    blink = true;
                    idx += 1;
                    if idx + 1 >= width {
                        self.print_partial_button_labels(&["+", "-", "DONE"])?;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_roles_sit_on_central_indices() {
        let nav = NavButtons::from_count(3).unwrap();
        assert_eq!((nav.up, nav.down, nav.select), (0, 1, 2));

        let nav = NavButtons::from_count(5).unwrap();
        assert_eq!((nav.up, nav.down, nav.select), (1, 2, 3));

        let nav = NavButtons::from_count(16).unwrap();
        assert_eq!((nav.up, nav.down, nav.select), (6, 7, 8));
    }

    #[test]
    fn nav_roles_need_three_buttons() {
        assert_eq!(NavButtons::from_count(2).unwrap_err(), Error::TooFewButtons);
        assert_eq!(NavButtons::from_count(0).unwrap_err(), Error::TooFewButtons);
    }

    #[test]
    fn selection_wraps_both_directions() {
        assert_eq!(wrap_prev(0, 10), 9);
        assert_eq!(wrap_prev(5, 10), 4);
        assert_eq!(wrap_next(9, 10), 0);
        assert_eq!(wrap_next(5, 10), 6);
    }

    #[test]
    fn wrapping_tolerates_an_empty_list() {
        assert_eq!(wrap_prev(0, 0), 0);
        assert_eq!(wrap_next(0, 0), 0);
    }
}

//! Column-budget text layout.
//!
//! Pure row builders: every function returns a full display row as a
//! fixed-capacity string, so the algorithms test on the host without a
//! display. The controller positions the cursor and writes the built
//! row in one go.

use crate::config::{MAX_BUTTONS, MAX_COLS, MAX_ENTRY_CHARS};
use crate::error::Error;
use heapless::String;
use heapless::Vec;

/// One rendered display row.
pub type Row = String<MAX_COLS>;

/// Per-slot labels for a full button row. `None` renders blank.
pub type LabelSlots<'a> = Vec<Option<&'a str>, MAX_BUTTONS>;

/// Longest label a single button slot can hold without its segment
/// overflowing into a neighbour.
pub fn max_label_len(cols: u8, num_buttons: usize) -> usize {
    if num_buttons == 0 {
        return 0;
    }
    (cols as usize + 1).saturating_sub(num_buttons) / num_buttons
}

/// Leading blank slots that center `num_labels` labels among
/// `num_buttons` button positions.
pub fn partial_offset(num_buttons: usize, num_labels: usize) -> usize {
    num_buttons.saturating_sub(num_labels) / 2
}

/// Build the bottom-row label line: one segment per button, labels
/// centered within their segment.
///
/// Segment widths distribute `cols` across the buttons by recomputing
/// the next width as (cells left) / (buttons left), so integer
/// division remainders land on later segments instead of accumulating.
/// Labels longer than [`max_label_len`] truncate silently.
pub fn button_row(labels: &[Option<&str>], cols: u8) -> Row {
    let cols = (cols as usize).min(MAX_COLS);
    let num_buttons = labels.len();
    let mut row = Row::new();
    if num_buttons == 0 {
        for _ in 0..cols {
            let _ = row.push(' ');
        }
        return row;
    }

    let max_len = max_label_len(cols as u8, num_buttons);
    let slot_len = |i: usize| labels[i].map_or(0, |s| s.chars().count()).min(max_len);

    let mut width = cols / num_buttons;
    let mut label = 0;
    let mut len = slot_len(0);
    let mut pad = width.saturating_sub(len) / 2;
    let mut pos = 0;

    for col in 0..cols {
        let mut cell = ' ';
        if pos >= pad && pos < pad + len {
            if let Some(text) = labels[label] {
                cell = text.chars().nth(pos - pad).unwrap_or(' ');
            }
        }
        let _ = row.push(cell);

        pos += 1;
        if pos == width {
            pos = 0;
            label += 1;
            if label < num_buttons {
                width = (cols - (col + 1)) / (num_buttons - label);
                len = slot_len(label);
                pad = width.saturating_sub(len) / 2;
            }
        }
    }
    row
}

/// Expand a contiguous label subset into a full slot vector, centered
/// among `num_buttons` positions ([`partial_offset`] leading blanks).
pub fn partial_slots<'a>(
    labels: &[&'a str],
    num_buttons: usize,
) -> Result<LabelSlots<'a>, Error> {
    if num_buttons > MAX_BUTTONS {
        return Err(Error::TooManyButtons);
    }
    let offset = partial_offset(num_buttons, labels.len());
    let mut slots = LabelSlots::new();
    for i in 0..num_buttons {
        let slot = if i >= offset && i < offset + labels.len() {
            Some(labels[i - offset])
        } else {
            None
        };
        let _ = slots.push(slot);
    }
    Ok(slots)
}

/// One list row: selection marker, entry text truncated to the cell
/// budget, blank-padded to the full width.
pub fn menu_row(entry: &str, selected: bool, cols: u8) -> Row {
    let cols = (cols as usize).min(MAX_COLS);
    let mut row = Row::new();
    if cols == 0 {
        return row;
    }
    let _ = row.push(if selected { '>' } else { ' ' });
    for c in entry.chars().take((cols - 1).min(MAX_ENTRY_CHARS)) {
        let _ = row.push(c);
    }
    while row.len() < cols {
        let _ = row.push(' ');
    }
    row
}

/// Full-width row: text truncated to the display width, blank-padded.
pub fn padded_row(text: &str, cols: u8) -> Row {
    let cols = (cols as usize).min(MAX_COLS);
    let mut row = Row::new();
    for c in text.chars().take(cols) {
        let _ = row.push(c);
    }
    while row.len() < cols {
        let _ = row.push(' ');
    }
    row
}

/// All-blank row.
pub fn blank_row(cols: u8) -> Row {
    padded_row("", cols)
}

/// Entry index shown on display row `row`, with the selected entry
/// vertically centered among the visible rows. `None` when the slot
/// falls outside the list.
pub fn page_entry(
    row: usize,
    selected: usize,
    visible_rows: usize,
    num_entries: usize,
) -> Option<usize> {
    if visible_rows == 0 {
        return None;
    }
    let offset = (visible_rows - 1) / 2;
    let idx = row as isize + selected as isize - offset as isize;
    if idx >= 0 && (idx as usize) < num_entries {
        Some(idx as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_widths_push_remainder_to_later_slots() {
        // 16 cells over 3 buttons: 16/3=5, (16-5)/2=5, (16-10)/1=6
        let row = button_row(&[Some("UP"), Some("DOWN"), Some("SEL")], 16);
        assert_eq!(row.as_str(), " UP  DOWN  SEL  ");
    }

    #[test]
    fn labels_truncate_at_slot_budget() {
        // max label length for 3 buttons on 16 cells is (16-3+1)/3 = 4
        assert_eq!(max_label_len(16, 3), 4);
        let row = button_row(&[Some("LONGLABEL"), None, None], 16);
        assert_eq!(row.as_str(), "LONG            ");
    }

    #[test]
    fn absent_labels_render_blank() {
        let row = button_row(&[None, Some("GO"), None], 16);
        assert_eq!(row.as_str(), "      GO        ");
    }

    #[test]
    fn single_button_centers_across_full_width() {
        let row = button_row(&[Some("OK")], 16);
        // one segment of 16, label capped at (16-1+1)/1 = 16
        assert_eq!(row.as_str(), "       OK       ");
    }

    #[test]
    fn partial_slots_center_among_buttons() {
        let slots = partial_slots(&["OK"], 3).unwrap();
        assert_eq!(slots.as_slice(), &[None, Some("OK"), None]);

        let slots = partial_slots(&["+", "-", "NEXT"], 5).unwrap();
        assert_eq!(
            slots.as_slice(),
            &[None, Some("+"), Some("-"), Some("NEXT"), None]
        );
    }

    #[test]
    fn partial_slots_reject_oversized_button_sets() {
        assert_eq!(partial_slots(&["OK"], 17).unwrap_err(), Error::TooManyButtons);
    }

    #[test]
    fn menu_row_marks_selection_and_pads() {
        assert_eq!(menu_row("Alpha", true, 16).as_str(), ">Alpha          ");
        assert_eq!(menu_row("Alpha", false, 16).as_str(), " Alpha          ");
    }

    #[test]
    fn menu_row_truncates_to_cell_budget() {
        let row = menu_row("ABCDEFGHIJKLMNOPQRSTUVWXYZ", true, 16);
        assert_eq!(row.as_str(), ">ABCDEFGHIJKLMNO");
    }

    #[test]
    fn padded_row_fills_width() {
        assert_eq!(padded_row("HI", 8).as_str(), "HI      ");
        assert_eq!(blank_row(4).as_str(), "    ");
    }

    #[test]
    fn page_centers_selected_entry() {
        // 1 visible row: only the selected entry shows
        assert_eq!(page_entry(0, 5, 1, 10), Some(5));

        // 3 visible rows, selected=0: offsets {-1, 0, 1}
        assert_eq!(page_entry(0, 0, 3, 10), None);
        assert_eq!(page_entry(1, 0, 3, 10), Some(0));
        assert_eq!(page_entry(2, 0, 3, 10), Some(1));

        // selection in the middle of the list
        assert_eq!(page_entry(0, 5, 3, 10), Some(4));
        assert_eq!(page_entry(1, 5, 3, 10), Some(5));
        assert_eq!(page_entry(2, 5, 3, 10), Some(6));

        // tail of the list leaves trailing rows blank
        assert_eq!(page_entry(2, 9, 3, 10), None);
    }
}

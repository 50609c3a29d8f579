//! Switch matrix scanning
//!
//! Rows idle high and are pulled low one at a time. Columns are inputs with
//! pull-ups, so a closed switch on the active row reads low. One scan takes a
//! single snapshot: no debounce, no ghosting resolution.

use embedded_hal::digital::{InputPin, OutputPin};

/// Anything that can report the currently pressed key
pub trait KeySource {
    /// Scan once. Returns the key code or `None` when nothing is pressed.
    fn read(&mut self) -> Option<u8>;
}

/// Row-major scanner for a `ROWS` x `COLS` keypad
///
/// Key codes are `row * COLS + column`, so the matrix may hold at most 256
/// keys. Larger matrices fail to build.
pub struct KeypadScanner<R, C, const ROWS: usize, const COLS: usize> {
    rows: [R; ROWS],
    columns: [C; COLS],
}

impl<R, C, const ROWS: usize, const COLS: usize> KeypadScanner<R, C, ROWS, COLS>
where
    R: OutputPin,
    C: InputPin,
{
    const KEY_CODES_FIT: () = assert!(
        ROWS * COLS <= u8::MAX as usize + 1,
        "keypad matrix has more keys than u8 key codes"
    );

    /// Take ownership of the matrix lines and release every row
    pub fn new(rows: [R; ROWS], columns: [C; COLS]) -> Self {
        let () = Self::KEY_CODES_FIT;
        let mut scanner = Self { rows, columns };
        scanner.release_rows();
        scanner
    }

    /// Scan the whole matrix
    ///
    /// The first closed switch in row-then-column order wins. The active
    /// row stays low after a hit; after a miss every row is released.
    pub fn read(&mut self) -> Option<u8> {
        for row in 0..ROWS {
            self.drive_row(row);

            for column in 0..COLS {
                if self.column_is_low(column) {
                    return Some(Self::key_code(row, column));
                }
            }
        }

        self.release_rows();
        None
    }

    /// Release the matrix lines
    pub fn into_inner(self) -> ([R; ROWS], [C; COLS]) {
        (self.rows, self.columns)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn key_code(row: usize, column: usize) -> u8 {
        (row * COLS + column) as u8
    }

    /// Pull `active` low and every other row high
    fn drive_row(&mut self, active: usize) {
        for (index, row) in self.rows.iter_mut().enumerate() {
            let result = if index == active {
                row.set_low()
            } else {
                row.set_high()
            };
            if result.is_err() {
                log!("[keypad] failed to drive row {}", index);
            }
        }
    }

    fn release_rows(&mut self) {
        for (index, row) in self.rows.iter_mut().enumerate() {
            if row.set_high().is_err() {
                log!("[keypad] failed to release row {}", index);
            }
        }
    }

    fn column_is_low(&mut self, column: usize) -> bool {
        match self.columns[column].is_low() {
            Ok(is_low) => is_low,
            Err(_) => {
                log!("[keypad] failed to read column {}", column);
                false
            }
        }
    }
}

impl<R, C, const ROWS: usize, const COLS: usize> KeySource for KeypadScanner<R, C, ROWS, COLS>
where
    R: OutputPin,
    C: InputPin,
{
    fn read(&mut self) -> Option<u8> {
        KeypadScanner::read(self)
    }
}

//! Multiplexed rendering state machine
//!
//! Cycles one digit position per tick through the render text. Only one
//! digit is ever energized at an instant; at tick rates above a few hundred
//! hertz the eye integrates the eight positions into a steady display.
//!
//! A `.` in the text is a modifier, not a slot: it is folded into the digit
//! before it (dot bit OR'd in, digit position held) rather than occupying a
//! digit of its own, so `"8.8.8.8.8.8.8.8."` fills exactly eight positions
//! from sixteen symbols.

use crate::glyph;
use crate::text::RenderText;

/// Number of physical digit positions on the display.
pub const DIGIT_COUNT: u8 = 8;

/// One hardware write emitted per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitFrame {
    /// Segment pattern to drive
    pub segments: u8,
    /// Digit position (0-7) to energize
    pub digit: u8,
}

/// Rendering state: the text being shown, both cursors, and the tick
/// counter the sampling side uses as a software timer.
///
/// [`Renderer::tick`] is the whole per-tick transition; it touches nothing
/// but this state and returns the frame for the caller to apply, so the
/// machine is unit-testable without hardware.
#[derive(Debug, Clone)]
pub struct Renderer {
    text: RenderText,
    char_cursor: usize,
    digit_cursor: u8,
    ticks: u32,
}

impl Renderer {
    /// Create a renderer with an empty text. Renders blank frames until
    /// a text is loaded.
    pub const fn new() -> Self {
        Self {
            text: RenderText::new(),
            char_cursor: 0,
            digit_cursor: 0,
            ticks: 0,
        }
    }

    /// Replace the text and restart the display cycle from the beginning.
    ///
    /// Both cursors reset so no mid-cycle state leaks across a rewrite.
    pub fn load(&mut self, text: RenderText) {
        self.text = text;
        self.char_cursor = 0;
        self.digit_cursor = 0;
    }

    /// Advance the machine by one tick and return the frame to display.
    ///
    /// The symbol under the character cursor resolves to its glyph (digits
    /// and `-`; anything else, including `.` itself, renders blank). When
    /// the *next* symbol is a `.`, its bit is folded into this frame and
    /// the digit position is reused on the following tick; otherwise the
    /// digit cursor advances, wrapping after 7. Reaching the end of the
    /// text restarts the cycle with both cursors at 0.
    pub fn tick(&mut self) -> DigitFrame {
        let digit = self.digit_cursor;

        let mut segments = match self.text.get(self.char_cursor) {
            Some(symbol @ (b'0'..=b'9' | b'-')) => glyph::glyph_for(symbol),
            _ => glyph::BLANK,
        };

        if self.text.get(self.char_cursor + 1) == Some(b'.') {
            segments |= glyph::SEG_DOT;
        } else {
            self.digit_cursor = (self.digit_cursor + 1) % DIGIT_COUNT;
        }

        self.char_cursor += 1;
        if self.char_cursor >= self.text.len() {
            self.char_cursor = 0;
            self.digit_cursor = 0;
        }

        self.ticks = self.ticks.wrapping_add(1);

        DigitFrame { segments, digit }
    }

    /// Ticks elapsed since the counter was last reset.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Reset the tick counter (the sampling side restarts its software
    /// timer from here).
    pub fn set_ticks(&mut self, ticks: u32) {
        self.ticks = ticks;
    }

    /// Current character cursor.
    pub fn char_cursor(&self) -> usize {
        self.char_cursor
    }

    /// Current digit cursor.
    pub fn digit_cursor(&self) -> u8 {
        self.digit_cursor
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

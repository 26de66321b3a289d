//! Display output trait

use crate::glyph;
use crate::render::DigitFrame;

/// Trait for the multiplexed display outputs
///
/// Both operations are raw pin writes: `set_segments` drives the eight
/// shared segment lines, `select_digit` energizes exactly one of the
/// eight digit positions. Neither can fail; pin assignment is wiring,
/// not logic.
pub trait SegmentDisplay {
    /// Drive the segment lines to the given pattern (0 = all off).
    fn set_segments(&mut self, code: u8);

    /// Energize the digit position `index` (0-7) and de-energize the rest.
    fn select_digit(&mut self, index: u8);

    /// Apply one rendered frame.
    ///
    /// Blanks the segments *before* switching digits so the previous
    /// glyph cannot ghost onto the newly energized position.
    fn apply(&mut self, frame: DigitFrame) {
        self.set_segments(glyph::BLANK);
        self.select_digit(frame.digit);
        self.set_segments(frame.segments);
    }
}

//! GPIO-multiplexed 8-digit display
//!
//! Drives the display directly from sixteen GPIO lines: eight segment
//! lines shared across all digits and eight digit-select lines. The
//! wiring is common-anode, so segment lines are active-low while the
//! digit-select lines are active-high; both polarities are fixed by the
//! board and not configurable.

use embedded_hal::digital::OutputPin;
use octans_core::glyph;
use octans_core::render::DIGIT_COUNT;
use octans_core::traits::SegmentDisplay;

/// Number of segment lines (seven bars plus the dot).
const SEGMENT_COUNT: usize = 8;

/// GPIO multiplexed display
///
/// Generic over any `embedded-hal` output pin. Bit `n` of a glyph code
/// maps to `segment_pins[n]`; digit index `n` maps to `digit_pins[n]`.
pub struct MuxDisplay<P> {
    segment_pins: [P; SEGMENT_COUNT],
    digit_pins: [P; DIGIT_COUNT as usize],
}

impl<P: OutputPin> MuxDisplay<P> {
    /// Create the driver and put the display in its dark state:
    /// all segments released, no digit energized.
    pub fn new(segment_pins: [P; SEGMENT_COUNT], digit_pins: [P; DIGIT_COUNT as usize]) -> Self {
        let mut display = Self {
            segment_pins,
            digit_pins,
        };
        display.set_segments(glyph::BLANK);
        for pin in &mut display.digit_pins {
            let _ = pin.set_low();
        }
        display
    }

    /// Release the pins.
    pub fn release(self) -> ([P; SEGMENT_COUNT], [P; DIGIT_COUNT as usize]) {
        (self.segment_pins, self.digit_pins)
    }
}

// Pin write results are discarded: on every target this runs on the
// pins are infallible, and there is no recovery from a failed GPIO
// write in the middle of a frame anyway.
impl<P: OutputPin> SegmentDisplay for MuxDisplay<P> {
    fn set_segments(&mut self, code: u8) {
        for (bit, pin) in self.segment_pins.iter_mut().enumerate() {
            if code & (1 << bit) != 0 {
                // Active-low: a set bit sinks the segment line
                let _ = pin.set_low();
            } else {
                let _ = pin.set_high();
            }
        }
    }

    fn select_digit(&mut self, index: u8) {
        for (position, pin) in self.digit_pins.iter_mut().enumerate() {
            if position as u8 == index {
                let _ = pin.set_high();
            } else {
                let _ = pin.set_low();
            }
        }
    }
}

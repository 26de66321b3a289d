//! Sample pacing and display text formatting
//!
//! The foreground sampling side of the firmware: decides *when* the sensor
//! is read (a software timer counted in render ticks, no clock peripheral
//! needed) and turns readings and error codes into render text.

use crate::render::DIGIT_COUNT;
use crate::text::RenderText;
use crate::traits::Reading;

/// Software timer thresholds for the sampling loop, counted in render ticks.
#[derive(Debug, Clone, Copy)]
pub struct SamplePacer {
    /// Ticks between successful samples
    interval: u32,
    /// How many ticks early a failed sample is retried
    backoff: u32,
}

impl SamplePacer {
    /// Create a pacer. `backoff` must be no larger than `interval`.
    pub const fn new(interval: u32, backoff: u32) -> Self {
        Self { interval, backoff }
    }

    /// True once the tick counter has crossed the sample interval.
    pub fn due(&self, ticks: u32) -> bool {
        ticks >= self.interval
    }

    /// Counter preset at power-on: one tick below threshold, so the first
    /// sample replaces the lamp test almost immediately.
    pub const fn startup_ticks(&self) -> u32 {
        self.interval.saturating_sub(1)
    }

    /// Counter restart after a successful sample: the full interval ahead.
    pub const fn after_success(&self) -> u32 {
        0
    }

    /// Counter restart after a failed sample: only `backoff` ticks ahead,
    /// so failures retry well before the next regular sample would run.
    pub const fn after_failure(&self) -> u32 {
        self.interval.saturating_sub(self.backoff)
    }
}

/// The power-on test pattern: every segment of every digit lit,
/// `"8.8.8.8.8.8.8.8."`.
pub fn lamp_test() -> RenderText {
    let mut text = RenderText::new();
    for _ in 0..DIGIT_COUNT {
        let _ = text.push(b'8');
        let _ = text.push(b'.');
    }
    text
}

/// Format a reading as two concatenated five-symbol `NN.NN` fields,
/// temperature first: 23.5 degrees and 61.0 % become `"23.5061.00"`.
pub fn format_reading(reading: &Reading) -> RenderText {
    let mut text = RenderText::new();
    push_field(&mut text, reading.temperature_x10);
    push_field(&mut text, reading.humidity_x10);
    text
}

/// Format a sensor error code verbatim as signed decimal text.
pub fn format_error(code: i8) -> RenderText {
    let mut text = RenderText::new();
    let mut value = code as i16;
    if value < 0 {
        let _ = text.push(b'-');
        value = -value;
    }
    let mut started = false;
    for divisor in [100, 10, 1] {
        let digit = ((value / divisor) % 10) as u8;
        if digit != 0 || started || divisor == 1 {
            started = true;
            let _ = text.push(b'0' + digit);
        }
    }
    text
}

/// One fixed-width `NN.NN` field from a x10 fixed-point value.
///
/// Values at or above 100 wrap modulo 100; negative values render as
/// `-N.NN` with the magnitude clamped to 9.9. Either way the field is
/// exactly five symbols, so the two fields always land on the same
/// digit positions.
fn push_field(text: &mut RenderText, value_x10: i16) {
    if value_x10 < 0 {
        let magnitude = (-value_x10.max(-99)) as u8;
        let _ = text.push(b'-');
        let _ = text.push(b'0' + magnitude / 10);
        let _ = text.push(b'.');
        let _ = text.push(b'0' + magnitude % 10);
        let _ = text.push(b'0');
    } else {
        let int_part = ((value_x10 / 10) % 100) as u8;
        let frac = (value_x10 % 10) as u8;
        let _ = text.push(b'0' + int_part / 10);
        let _ = text.push(b'0' + int_part % 10);
        let _ = text.push(b'.');
        let _ = text.push(b'0' + frac);
        let _ = text.push(b'0');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Renderer;
    use crate::traits::SensorError;

    #[test]
    fn test_lamp_test_pattern() {
        assert_eq!(lamp_test().as_bytes(), b"8.8.8.8.8.8.8.8.");
    }

    #[test]
    fn test_format_reading() {
        let reading = Reading { temperature_x10: 235, humidity_x10: 610 };
        assert_eq!(format_reading(&reading).as_bytes(), b"23.5061.00");
    }

    #[test]
    fn test_format_reading_single_digit() {
        let reading = Reading { temperature_x10: 95, humidity_x10: 4 };
        assert_eq!(format_reading(&reading).as_bytes(), b"09.5000.40");
    }

    #[test]
    fn test_format_reading_negative_temperature() {
        let reading = Reading { temperature_x10: -53, humidity_x10: 610 };
        assert_eq!(format_reading(&reading).as_bytes(), b"-5.3061.00");

        // Below -9.9 the magnitude clamps; the field width never changes
        let reading = Reading { temperature_x10: -400, humidity_x10: 0 };
        assert_eq!(format_reading(&reading).as_bytes(), b"-9.9000.00");
    }

    #[test]
    fn test_format_reading_wraps_at_hundred() {
        let reading = Reading { temperature_x10: 1005, humidity_x10: 1000 };
        assert_eq!(format_reading(&reading).as_bytes(), b"00.5000.00");
    }

    #[test]
    fn test_format_error() {
        assert_eq!(format_error(-2).as_bytes(), b"-2");
        assert_eq!(format_error(-1).as_bytes(), b"-1");
        assert_eq!(format_error(-128).as_bytes(), b"-128");
        assert_eq!(format_error(7).as_bytes(), b"7");
        assert_eq!(format_error(0).as_bytes(), b"0");
    }

    #[test]
    fn test_error_codes_format_to_valid_text() {
        for error in [SensorError::Timeout, SensorError::ChecksumMismatch] {
            let text = format_error(error.code());
            assert!(!text.is_empty());
            assert_eq!(text.get(0), Some(b'-'));
        }
    }

    #[test]
    fn test_pacer_thresholds() {
        let pacer = SamplePacer::new(1000, 100);

        assert!(!pacer.due(0));
        assert!(!pacer.due(999));
        assert!(pacer.due(1000));
        assert!(pacer.due(1001));

        assert_eq!(pacer.startup_ticks(), 999);
        assert_eq!(pacer.after_success(), 0);
        assert_eq!(pacer.after_failure(), 900);
    }

    #[test]
    fn test_failure_retries_sooner_than_full_interval() {
        let pacer = SamplePacer::new(1000, 100);

        let ticks_to_due = |from: u32| {
            let mut ticks = from;
            let mut elapsed = 0u32;
            while !pacer.due(ticks) {
                ticks += 1;
                elapsed += 1;
            }
            elapsed
        };

        let retry = ticks_to_due(pacer.after_failure());
        let regular = ticks_to_due(pacer.after_success());
        assert!(retry < regular);
        assert_eq!(retry, 100);
        assert_eq!(regular, 1000);
    }

    #[test]
    fn test_sampling_handoff_restarts_cycle() {
        // The cooperative handoff: render a while, then rewrite the text
        // the way the sampling task does, and check the next frame starts
        // a fresh cycle.
        let pacer = SamplePacer::new(50, 10);
        let mut renderer = Renderer::new();

        renderer.load(lamp_test());
        renderer.set_ticks(pacer.startup_ticks());

        // One tick pushes the counter over the threshold
        let _ = renderer.tick();
        assert!(pacer.due(renderer.ticks()));

        // Failed sample: error text, short backoff
        renderer.load(format_error(SensorError::ChecksumMismatch.code()));
        renderer.set_ticks(pacer.after_failure());
        assert_eq!(renderer.char_cursor(), 0);
        assert_eq!(renderer.digit_cursor(), 0);

        // Due again after the backoff, not the full interval
        for _ in 0..10 {
            assert!(!pacer.due(renderer.ticks()));
            let _ = renderer.tick();
        }
        assert!(pacer.due(renderer.ticks()));

        // Successful sample: reading text, full interval ahead
        let reading = Reading { temperature_x10: 235, humidity_x10: 610 };
        renderer.load(format_reading(&reading));
        renderer.set_ticks(pacer.after_success());
        assert!(!pacer.due(renderer.ticks()));
        assert_eq!(renderer.char_cursor(), 0);
        assert_eq!(renderer.digit_cursor(), 0);
    }
}

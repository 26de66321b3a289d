//! DHT22 temperature/humidity sensor
//!
//! Single-wire protocol on an open-drain data line: the controller issues
//! a start pulse, the sensor answers with an 80/80 µs presence pulse and
//! then 40 data bits encoded by high-pulse width (~26 µs = 0, ~70 µs = 1).
//! The 5-byte frame carries humidity x10, sign-magnitude temperature x10,
//! and an additive checksum.

use embedded_hal::delay::DelayNs;
use octans_core::traits::{ClimateSensor, Reading, SensorError};

/// Single-wire bus abstraction for the sensor's data line.
///
/// The line is open-drain with an external pull-up: the controller either
/// actively pulls it low or releases it and listens.
pub trait DhtBus {
    /// Actively pull the line low.
    fn set_low(&mut self);

    /// Release the line; the pull-up raises it unless the sensor drives.
    fn release(&mut self);

    /// Sample the line level.
    fn is_high(&mut self) -> bool;
}

/// Start pulse width. The DHT22 wants at least 1 ms.
const START_PULSE_US: u32 = 1100;

/// Longest level transition we ever wait for.
const LEVEL_TIMEOUT_US: u32 = 200;

/// High-pulse width separating a 0 bit (~26 µs) from a 1 bit (~70 µs).
const BIT_THRESHOLD_US: u32 = 40;

/// DHT22 sensor on a single-wire bus
///
/// Every wait is bounded by [`LEVEL_TIMEOUT_US`], so a disconnected or
/// wedged sensor yields `Err(Timeout)` instead of hanging the caller.
pub struct Dht22<BUS, DELAY> {
    bus: BUS,
    delay: DELAY,
}

impl<BUS: DhtBus, DELAY: DelayNs> Dht22<BUS, DELAY> {
    /// Create a new sensor driver.
    pub fn new(bus: BUS, delay: DELAY) -> Self {
        Self { bus, delay }
    }

    /// Decode a 5-byte frame into a reading.
    ///
    /// Byte layout: humidity hi/lo, temperature hi/lo, checksum (low byte
    /// of the sum of the first four). The top bit of the temperature high
    /// byte marks below-zero values.
    pub fn decode_frame(frame: [u8; 5]) -> Result<Reading, SensorError> {
        let sum = frame[0]
            .wrapping_add(frame[1])
            .wrapping_add(frame[2])
            .wrapping_add(frame[3]);
        if sum != frame[4] {
            return Err(SensorError::ChecksumMismatch);
        }

        let humidity_x10 = u16::from_be_bytes([frame[0], frame[1]]) as i16;
        let magnitude = u16::from_be_bytes([frame[2] & 0x7f, frame[3]]) as i16;
        let temperature_x10 = if frame[2] & 0x80 != 0 {
            -magnitude
        } else {
            magnitude
        };

        Ok(Reading {
            temperature_x10,
            humidity_x10,
        })
    }

    /// Wait until the line reaches `level`, returning the microseconds
    /// spent waiting.
    fn wait_for_level(&mut self, level: bool, timeout_us: u32) -> Result<u32, SensorError> {
        let mut waited = 0;
        while self.bus.is_high() != level {
            if waited >= timeout_us {
                return Err(SensorError::Timeout);
            }
            self.delay.delay_us(1);
            waited += 1;
        }
        Ok(waited)
    }

    /// Run one bus transaction and collect the 40 raw bits.
    fn read_frame(&mut self) -> Result<[u8; 5], SensorError> {
        // Start pulse: hold the line low, then release and listen
        self.bus.set_low();
        self.delay.delay_us(START_PULSE_US);
        self.bus.release();

        // Presence response: ~80 µs low, ~80 µs high, then the first bit
        self.wait_for_level(false, LEVEL_TIMEOUT_US)?;
        self.wait_for_level(true, LEVEL_TIMEOUT_US)?;
        self.wait_for_level(false, LEVEL_TIMEOUT_US)?;

        let mut frame = [0u8; 5];
        for bit in 0..40 {
            // Each bit: ~50 µs low preamble, then a high whose width
            // encodes the value
            self.wait_for_level(true, LEVEL_TIMEOUT_US)?;
            let high_us = self.wait_for_level(false, LEVEL_TIMEOUT_US)?;
            if high_us > BIT_THRESHOLD_US {
                frame[bit / 8] |= 0x80 >> (bit % 8);
            }
        }

        Ok(frame)
    }
}

impl<BUS: DhtBus, DELAY: DelayNs> ClimateSensor for Dht22<BUS, DELAY> {
    fn read(&mut self) -> Result<Reading, SensorError> {
        let frame = self.read_frame()?;
        Self::decode_frame(frame)
    }
}

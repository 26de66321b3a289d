//! Temperature/humidity sensor trait

/// Errors that can occur reading the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// The sensor never answered within the protocol's timing limits
    Timeout,
    /// A frame arrived but its checksum did not match
    ChecksumMismatch,
}

impl SensorError {
    /// The small signed code the display renders verbatim.
    pub fn code(&self) -> i8 {
        match self {
            SensorError::Timeout => -1,
            SensorError::ChecksumMismatch => -2,
        }
    }
}

/// One combined sensor measurement.
///
/// Fixed-point values with 0.1 resolution: 23.5 °C is 235, 61.0 %RH is 610.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Temperature in 0.1 °C units
    pub temperature_x10: i16,
    /// Relative humidity in 0.1 %RH units
    pub humidity_x10: i16,
}

/// Trait for combined temperature/humidity sensors
///
/// Takes `&mut self` because the read is an active bus transaction.
/// Implementations must bound every wait internally: a read returns
/// `Err(Timeout)` rather than hanging, so a dead sensor can never stall
/// the caller forever.
pub trait ClimateSensor {
    /// Perform one measurement.
    fn read(&mut self) -> Result<Reading, SensorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct_and_negative() {
        let codes = [SensorError::Timeout.code(), SensorError::ChecksumMismatch.code()];
        assert!(codes.iter().all(|&c| c < 0));
        assert_ne!(codes[0], codes[1]);
    }
}

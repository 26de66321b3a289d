//! Hardware abstraction traits
//!
//! These traits define the interface between the rendering/sampling logic
//! and hardware-specific implementations.

pub mod display;
pub mod sensor;

pub use display::SegmentDisplay;
pub use sensor::{ClimateSensor, Reading, SensorError};

//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in octans-core:
//!
//! - GPIO-multiplexed 8-digit seven-segment display
//! - DHT22 single-wire temperature/humidity sensor

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod sensor;

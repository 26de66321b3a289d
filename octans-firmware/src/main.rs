//! Octans - temperature/humidity display firmware
//!
//! Main firmware binary for RP2040-based boards driving an eight-digit
//! multiplexed seven-segment display from a DHT22 sensor.
//!
//! Named after Octans, the octant constellation - a nod to the eight
//! digit positions the display cycles through faster than the eye can
//! follow.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Flex, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

use octans_core::sampler::lamp_test;
use octans_drivers::display::MuxDisplay;

use crate::tasks::sample::{DhtLine, PACER};

mod channels;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Octans firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Segment lines, shared across all digits, active-low (common anode).
    // Board wiring: GPIO2-GPIO9 = top, top-left, top-right, bottom-right,
    // middle, bottom-left, bottom, dot - matching glyph code bits 0-7.
    let segments = [
        Output::new(p.PIN_2, Level::High),
        Output::new(p.PIN_3, Level::High),
        Output::new(p.PIN_4, Level::High),
        Output::new(p.PIN_5, Level::High),
        Output::new(p.PIN_6, Level::High),
        Output::new(p.PIN_7, Level::High),
        Output::new(p.PIN_8, Level::High),
        Output::new(p.PIN_9, Level::High),
    ];

    // Digit select lines, active-high.
    // Board wiring: GPIO10-GPIO17 = digit positions 0-7, left to right.
    let digits = [
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_13, Level::Low),
        Output::new(p.PIN_14, Level::Low),
        Output::new(p.PIN_15, Level::Low),
        Output::new(p.PIN_16, Level::Low),
        Output::new(p.PIN_17, Level::Low),
    ];

    let display = MuxDisplay::new(segments, digits);
    info!("Display pins initialized");

    // DHT22 data line on GPIO22, open-drain against the board's pull-up
    let mut dht_pin = Flex::new(p.PIN_22);
    dht_pin.set_pull(Pull::Up);
    dht_pin.set_as_input();
    info!("Sensor pin initialized");

    // Lamp test until the first sample lands; the counter starts one
    // tick short of the threshold so that happens almost immediately
    channels::RENDERER.lock(|renderer| {
        let mut renderer = renderer.borrow_mut();
        renderer.load(lamp_test());
        renderer.set_ticks(PACER.startup_ticks());
    });

    spawner.spawn(tasks::render_task(display)).unwrap();
    spawner.spawn(tasks::sample_task(DhtLine(dht_pin))).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

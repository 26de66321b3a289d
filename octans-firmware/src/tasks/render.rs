//! Render tick task
//!
//! Advances the multiplexing state machine at a fixed cadence and applies
//! each frame to the display pins.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

use octans_core::traits::SegmentDisplay;
use octans_drivers::display::MuxDisplay;

use crate::channels::RENDERER;

/// Tick interval. At 1 kHz the sixteen-symbol lamp-test cycle refreshes
/// at around 60 Hz, comfortably above the flicker threshold across all
/// eight digits.
pub const TICK_INTERVAL: Duration = Duration::from_micros(1000);

/// Render task - one digit of the display per tick
#[embassy_executor::task]
pub async fn render_task(mut display: MuxDisplay<Output<'static>>) {
    info!("Render task started");

    let mut ticker = Ticker::every(TICK_INTERVAL);

    loop {
        ticker.next().await;

        // The whole state transition happens under the lock; the pin
        // writes happen outside it
        let frame = RENDERER.lock(|renderer| renderer.borrow_mut().tick());
        display.apply(frame);
    }
}

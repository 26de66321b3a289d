//! Sensor sampling task
//!
//! The cooperative foreground loop: watches the render tick counter as a
//! software timer, reads the DHT22 once the sample interval has elapsed,
//! and rewrites the render text with the new reading or the error code.

use defmt::*;
use embassy_rp::gpio::Flex;
use embassy_time::{Delay, Duration, Timer};

use octans_core::sampler::{format_error, format_reading, SamplePacer};
use octans_core::traits::ClimateSensor;
use octans_drivers::sensor::{Dht22, DhtBus};

use crate::channels::RENDERER;
use crate::tasks::render::TICK_INTERVAL;

/// Render ticks between successful samples: one second's worth at the
/// configured tick rate.
pub const SAMPLE_INTERVAL_TICKS: u32 =
    (Duration::from_secs(1).as_ticks() / TICK_INTERVAL.as_ticks()) as u32;

/// Render ticks before a failed sample is retried.
pub const RETRY_BACKOFF_TICKS: u32 = 100;

/// How often the loop polls the tick counter.
const POLL_INTERVAL_MS: u64 = 10;

/// Pacing shared between startup seeding in `main` and the loop here.
pub const PACER: SamplePacer = SamplePacer::new(SAMPLE_INTERVAL_TICKS, RETRY_BACKOFF_TICKS);

/// The DHT22 data line: open-drain emulated with a Flex pin and the
/// external pull-up.
pub struct DhtLine(pub Flex<'static>);

impl DhtBus for DhtLine {
    fn set_low(&mut self) {
        self.0.set_low();
        self.0.set_as_output();
    }

    fn release(&mut self) {
        self.0.set_as_input();
    }

    fn is_high(&mut self) -> bool {
        self.0.is_high()
    }
}

/// Sampling task - refreshes the displayed reading about once a second
#[embassy_executor::task]
pub async fn sample_task(line: DhtLine) {
    info!("Sample task started");

    let mut sensor = Dht22::new(line, Delay);

    loop {
        let due = RENDERER.lock(|renderer| PACER.due(renderer.borrow().ticks()));
        if !due {
            Timer::after_millis(POLL_INTERVAL_MS).await;
            continue;
        }

        // Read outside the lock: a slow or absent sensor must not stop
        // the tick task from keeping the display alive
        let result = sensor.read();

        RENDERER.lock(|renderer| {
            let mut renderer = renderer.borrow_mut();
            match result {
                Ok(reading) => {
                    trace!(
                        "sample: temperature {=i16} humidity {=i16} (x10)",
                        reading.temperature_x10,
                        reading.humidity_x10
                    );
                    renderer.load(format_reading(&reading));
                    renderer.set_ticks(PACER.after_success());
                }
                Err(error) => {
                    warn!("sensor read failed: {}", error);
                    renderer.load(format_error(error.code()));
                    renderer.set_ticks(PACER.after_failure());
                }
            }
        });
    }
}

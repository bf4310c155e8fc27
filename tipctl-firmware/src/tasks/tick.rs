//! System tick source

use defmt::*;
use embassy_time::{Duration, Ticker};
use tipctl_core::time::{TickCounter, TICK_HZ};

/// Shared tick counter read by the control loop
pub static TICKS: TickCounter = TickCounter::new();

/// Tick task - advances `TICKS` at `TICK_HZ`
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started ({} Hz)", TICK_HZ);

    let mut ticker = Ticker::every(Duration::from_hz(u64::from(TICK_HZ)));

    loop {
        ticker.next().await;
        TICKS.increment();
    }
}

//! Seven-segment multiplexing

use embassy_time::{Duration, Ticker};
use tipctl_hal_rp2040::SegmentMux;

use crate::board::MUX_PERIOD_US;
use crate::display;

/// Display mux task - lights one digit per period
#[embassy_executor::task]
pub async fn display_mux_task(mut mux: SegmentMux<'static>) {
    let mut ticker = Ticker::every(Duration::from_micros(MUX_PERIOD_US));

    loop {
        ticker.next().await;
        mux.scan(display::current());
    }
}

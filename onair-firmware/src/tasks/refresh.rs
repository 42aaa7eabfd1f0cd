//! Panel refresh task
//!
//! Scans the HUB75 panel continuously. New frames from the poller are
//! picked up between scans.

use defmt::*;
use embassy_futures::yield_now;
use embassy_time::Delay;

use onair_display::{MATRIX_HEIGHT, MATRIX_WIDTH};
use onair_drivers::matrix::Hub75;
use onair_hal_rp2040::RpOutput;

use crate::channels::FRAME;

/// Panel on the board's HUB75 connector
pub type SignPanel = Hub75<RpOutput<'static>, MATRIX_WIDTH, MATRIX_HEIGHT>;

/// Refresh task
#[embassy_executor::task]
pub async fn refresh_task(panel: &'static mut SignPanel) {
    info!("Refresh task started");

    let mut delay = Delay;
    let mut frames: u32 = 0;

    loop {
        if let Some(frame) = FRAME.try_take() {
            panel.present(&frame);
            frames = frames.wrapping_add(1);
            debug!("Presented frame {}", frames);
        }

        panel.refresh(&mut delay);
        yield_now().await;
    }
}

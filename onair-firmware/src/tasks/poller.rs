//! Input poll task
//!
//! Drives the poller: reads the switch about once per interval and
//! redraws the sign when the state changes. A failed read is logged
//! and retried on the next pass without waiting.

use defmt::*;
use embassy_futures::yield_now;
use embassy_time::{Instant, Timer};

use onair_core::poller::{PollOutcome, PollerRenderer, Tick};

use crate::input::SignInput;
use crate::surface::MatrixSurface;

/// Poller with the board's input and panel surface
pub type SignPoller = PollerRenderer<SignInput, MatrixSurface>;

/// Poller task
#[embassy_executor::task]
pub async fn poller_task(poller: &'static mut SignPoller) {
    info!("Poller task started, interval {}ms", poller.interval_ms());

    log_outcome(poller.start());

    loop {
        match poller.tick(Instant::now().as_millis()) {
            Tick::Wait(ms) => Timer::after_millis(ms).await,
            Tick::Polled(outcome) => {
                log_outcome(outcome);
                // Let the refresh task scan before the next pass
                yield_now().await;
            }
        }
    }
}

fn log_outcome(outcome: PollOutcome) {
    match outcome {
        PollOutcome::Read {
            level,
            state,
            rendered: true,
        } => {
            info!("On Air: {} ({} scene shown)", level, state);
        }
        PollOutcome::Read { level, .. } => {
            info!("On Air: {}", level);
        }
        PollOutcome::ReadFailed(e) => {
            warn!("Input read failed: {}, retrying", e);
        }
        PollOutcome::RenderFailed { level, error } => {
            error!("Render failed for input {}: {}", level, error);
        }
    }
}

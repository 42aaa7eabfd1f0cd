//! Inter-task communication channels
//!
//! Defines the static signals used between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use onair_display::MatrixFrame;

/// Latest finished frame for the panel (updated by the poller)
///
/// Only the newest frame matters; an untaken frame is overwritten.
pub static FRAME: Signal<CriticalSectionRawMutex, MatrixFrame> = Signal::new();

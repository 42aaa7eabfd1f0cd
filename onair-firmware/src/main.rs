//! On Air - Studio Indicator Sign Firmware
//!
//! Main firmware binary for RP2040 boards driving a 32x16 HUB75 panel.
//! Polls a switch about once a second and shows the matching scene:
//! the branding when off, "ON AIR" when the studio is live.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{AnyPin, Input};
use embassy_rp::Peri;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use onair_core::config::{InputMode, SignConfig, DEFAULT_INPUT_PIN};
use onair_core::poller::PollerRenderer;
use onair_core::scene::SceneSet;
use onair_display::MatrixFrame;
use onair_drivers::input::{ButtonInput, FixedInput};
use onair_drivers::matrix::{Hub75, Hub75Config, Hub75Pins};
use onair_hal_rp2040::RpInput;

use crate::board::panel_output;
use crate::input::SignInput;
use crate::surface::MatrixSurface;
use crate::tasks::{SignPanel, SignPoller};

mod board;
mod channels;
mod config;
mod input;
mod surface;
mod tasks;

// Static cells for task state (too large for the task futures)
static PANEL: StaticCell<SignPanel> = StaticCell::new();
static POLLER: StaticCell<SignPoller> = StaticCell::new();
static BACK_BUFFER: StaticCell<MatrixFrame> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("On Air firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();
    info!(
        "Config: poll every {}ms, input {}, brightness {}, depth {}",
        config.poll.interval_ms,
        config.input.mode,
        config.matrix.brightness,
        config.matrix.color_depth
    );

    // HUB75 connector (pin map in board.rs)
    let pins = Hub75Pins {
        r1: panel_output(p.PIN_0.into()),
        g1: panel_output(p.PIN_1.into()),
        b1: panel_output(p.PIN_2.into()),
        r2: panel_output(p.PIN_3.into()),
        g2: panel_output(p.PIN_4.into()),
        b2: panel_output(p.PIN_5.into()),
        address: [
            panel_output(p.PIN_6.into()),
            panel_output(p.PIN_7.into()),
            panel_output(p.PIN_8.into()),
        ],
        clk: panel_output(p.PIN_11.into()),
        lat: panel_output(p.PIN_12.into()),
        oe: panel_output(p.PIN_13.into()),
    };
    let panel = PANEL.init(Hub75::new(
        pins,
        Hub75Config {
            brightness: config.matrix.brightness,
            color_depth: config.matrix.color_depth,
            base_on_ns: board::BASE_ON_NS,
        },
    ));
    info!("HUB75 panel initialized");

    // Switch input
    let input = match config.input.mode {
        InputMode::Pin => {
            let gpio: Peri<'static, AnyPin> = match config.input.pin.pin {
                14 => p.PIN_14.into(),
                15 => p.PIN_15.into(),
                26 => p.PIN_26.into(),
                27 => p.PIN_27.into(),
                28 => p.PIN_28.into(),
                other => {
                    warn!(
                        "gpio{} is not an input on this board, using gpio{}",
                        other, DEFAULT_INPUT_PIN
                    );
                    p.PIN_14.into()
                }
            };
            let pin = Input::new(gpio, board::pull(config.input.pin.pull));
            SignInput::Button(ButtonInput::new(
                RpInput::new(pin),
                config.input.pin.inverted,
                config.input.samples,
            ))
        }
        InputMode::ForceOn => {
            warn!("Input forced on");
            SignInput::Fixed(FixedInput::new(true))
        }
        InputMode::ForceOff => {
            warn!("Input forced off");
            SignInput::Fixed(FixedInput::new(false))
        }
    };
    info!("Input initialized");

    let poller = POLLER.init(build_poller(input, &config));

    // Spawn tasks
    spawner.spawn(tasks::refresh_task(panel)).unwrap();
    spawner.spawn(tasks::poller_task(poller)).unwrap();

    info!("All tasks spawned, firmware running");
}

/// Assemble the poller from the configured scenes and interval
fn build_poller(input: SignInput, config: &SignConfig) -> SignPoller {
    let surface = MatrixSurface::new(BACK_BUFFER.init(MatrixFrame::new()));
    let scenes = SceneSet::from_config(&config.scenes);
    PollerRenderer::new(input, surface, scenes, config.poll.interval_ms.into())
}

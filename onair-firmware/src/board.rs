//! Board support for RP2040 HUB75 driver boards
//!
//! Pin map follows the Pimoroni Interstate 75:
//!
//! | Signal        | GPIO  |
//! |---------------|-------|
//! | R1 G1 B1      | 0 1 2 |
//! | R2 G2 B2      | 3 4 5 |
//! | A B C         | 6 7 8 |
//! | CLK LAT OE    | 11 12 13 |
//! | Switch inputs | 14 15 26 27 28 |

use embassy_rp::gpio::{AnyPin, Level, Output, Pull};
use embassy_rp::Peri;

use onair_core::config::InputPull;
use onair_hal_rp2040::RpOutput;

/// On-time of the least significant bit plane at full brightness
pub const BASE_ON_NS: u32 = 200;

/// Configure a GPIO as a panel output, initially low
pub fn panel_output(pin: Peri<'static, AnyPin>) -> RpOutput<'static> {
    RpOutput::new(Output::new(pin, Level::Low))
}

/// Map the configured input bias onto the RP2040 pad pull
pub fn pull(pull: InputPull) -> Pull {
    match pull {
        InputPull::None => Pull::None,
        InputPull::Up => Pull::Up,
        InputPull::Down => Pull::Down,
    }
}

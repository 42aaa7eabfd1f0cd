//! HUB75 RGB matrix driver
//!
//! Bit-banged driver for scan-multiplexed HUB75 panels (32x16 at 1/8 scan
//! on the sign). Each refresh shifts every row pair once per bit plane and
//! keeps it lit for a time proportional to the plane's weight (binary code
//! modulation), giving `color_depth` bits per channel.
//!
//! The driver scans from its own front buffer. [`Hub75::present`] swaps in
//! a finished frame between refreshes, so a scan never mixes two frames.

use embedded_graphics::pixelcolor::RgbColor;
use embedded_hal::delay::DelayNs;

use onair_display::FrameBuffer;
use onair_hal::OutputPin;

/// Number of row address lines (A, B, C)
pub const ADDRESS_LINES: usize = 3;

/// Pins of a HUB75 connector
pub struct Hub75Pins<P> {
    /// Upper half red
    pub r1: P,
    /// Upper half green
    pub g1: P,
    /// Upper half blue
    pub b1: P,
    /// Lower half red
    pub r2: P,
    /// Lower half green
    pub g2: P,
    /// Lower half blue
    pub b2: P,
    /// Row address, least significant first
    pub address: [P; ADDRESS_LINES],
    /// Shift clock
    pub clk: P,
    /// Latch
    pub lat: P,
    /// Output enable (active low)
    pub oe: P,
}

/// Panel timing and color settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hub75Config {
    /// Global brightness (0-255, 0 = dark)
    pub brightness: u8,
    /// Bits per channel shown (1-8)
    pub color_depth: u8,
    /// On-time of the least significant bit plane at full brightness
    pub base_on_ns: u32,
}

impl Default for Hub75Config {
    fn default() -> Self {
        Self {
            brightness: 255,
            color_depth: 4,
            base_on_ns: 250,
        }
    }
}

/// HUB75 panel of `W` x `H` pixels
pub struct Hub75<P, const W: usize, const H: usize> {
    pins: Hub75Pins<P>,
    front: FrameBuffer<W, H>,
    config: Hub75Config,
}

impl<P: OutputPin, const W: usize, const H: usize> Hub75<P, W, H> {
    /// Rows driven per address (upper and lower half share an address)
    const SCAN_ROWS: usize = H / 2;

    /// Create a new panel driver
    ///
    /// The panel starts blanked with an all-black front buffer.
    pub fn new(pins: Hub75Pins<P>, config: Hub75Config) -> Self {
        debug_assert!(Self::SCAN_ROWS <= 1 << ADDRESS_LINES);

        let mut panel = Self {
            pins,
            front: FrameBuffer::new(),
            config: Hub75Config {
                color_depth: config.color_depth.clamp(1, 8),
                ..config
            },
        };
        panel.pins.oe.set_high();
        panel.pins.clk.set_low();
        panel.pins.lat.set_low();
        panel
    }

    /// Replace the frame being scanned
    pub fn present(&mut self, frame: &FrameBuffer<W, H>) {
        self.front.clone_from(frame);
    }

    /// Frame currently being scanned
    pub fn front(&self) -> &FrameBuffer<W, H> {
        &self.front
    }

    /// Scan one complete frame
    ///
    /// Blocks for the whole scan; call it continuously to keep the
    /// panel lit.
    pub fn refresh<D: DelayNs>(&mut self, delay: &mut D) {
        let depth = self.config.color_depth;

        for plane in 0..depth {
            // Least significant shown bit first
            let bit = 8 - depth + plane;
            let on_ns = self.plane_on_ns(plane);

            for row in 0..Self::SCAN_ROWS {
                self.shift_row(row, bit);

                self.pins.oe.set_high();
                self.select_row(row);
                self.pins.lat.pulse();

                if on_ns > 0 {
                    self.pins.oe.set_low();
                    delay.delay_ns(on_ns);
                    self.pins.oe.set_high();
                }
            }
        }
    }

    /// On-time for a bit plane, scaled by brightness
    fn plane_on_ns(&self, plane: u8) -> u32 {
        let weighted = u64::from(self.config.base_on_ns) << plane;
        (weighted * u64::from(self.config.brightness) / 255) as u32
    }

    fn shift_row(&mut self, row: usize, bit: u8) {
        let upper = self.front.row(row);
        let lower = self.front.row(row + Self::SCAN_ROWS);

        for x in 0..W {
            let (u, l) = (upper[x], lower[x]);
            self.pins.r1.set_state(channel_bit(u.r(), bit));
            self.pins.g1.set_state(channel_bit(u.g(), bit));
            self.pins.b1.set_state(channel_bit(u.b(), bit));
            self.pins.r2.set_state(channel_bit(l.r(), bit));
            self.pins.g2.set_state(channel_bit(l.g(), bit));
            self.pins.b2.set_state(channel_bit(l.b(), bit));
            self.pins.clk.pulse();
        }
    }

    fn select_row(&mut self, row: usize) {
        for (i, pin) in self.pins.address.iter_mut().enumerate() {
            pin.set_state(row & (1 << i) != 0);
        }
    }
}

#[inline]
fn channel_bit(value: u8, bit: u8) -> bool {
    (value >> bit) & 1 != 0
}

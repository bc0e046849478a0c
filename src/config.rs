//! System configuration and constants
//!
//! Frame format, default timing, and the board parameters used by the
//! embedded binary. All timing is fixed at construction; there is no
//! runtime reconfiguration.

use crate::timing::{BitPeriod, ConfigError};

/// Default reference clock (100 MHz)
pub const DEFAULT_CLOCK_HZ: u32 = 100_000_000;

/// Default baud rate
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Data bits per frame
pub const DATA_WIDTH: u32 = 8;

/// Bit periods per frame: start + data + stop
pub const FRAME_BITS: u32 = 1 + DATA_WIDTH + 1;

/// Recommended minimum clock ticks per bit for reliable mid-bit sampling
pub const MIN_OVERSAMPLING: u32 = 5;

/// Bit period for the default clock and baud rate (868 ticks)
pub const DEFAULT_BIT_PERIOD: BitPeriod = match BitPeriod::new(DEFAULT_CLOCK_HZ, DEFAULT_BAUD_RATE) {
    Ok(period) => period,
    Err(_) => panic!("default UART timing is invalid"),
};

/// Baud rate of the bit-banged port on the board
pub const EMBEDDED_BAUD_RATE: u32 = 9_600;

/// Tick rate driving the bit-banged port (8x oversampling)
pub const EMBEDDED_TICK_HZ: u32 = EMBEDDED_BAUD_RATE * 8;

/// Bit period of the bit-banged port
pub const EMBEDDED_BIT_PERIOD: BitPeriod = match BitPeriod::new(EMBEDDED_TICK_HZ, EMBEDDED_BAUD_RATE) {
    Ok(period) => period,
    Err(_) => panic!("embedded UART timing is invalid"),
};

/// Depth of the bit-banged port's RX and TX byte queues
pub const BITBANG_QUEUE_DEPTH: usize = 16;

/// Pin assignments for the bit-banged port
pub mod pins {
    //! GPIO pin assignments matching the Nucleo-G474RE headers

    /// Serial output (idle high)
    pub const UART_TX: &str = "PA9";

    /// Serial input (pulled up)
    pub const UART_RX: &str = "PA10";

    /// Status LED
    pub const LED_STATUS: &str = "PA5";
}

/// UART timing configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UartConfig {
    /// Reference clock frequency in Hz (ticks per second)
    pub clock_hz: u32,
    /// Baud rate in bits per second
    pub baud_rate: u32,
}

impl UartConfig {
    /// Create a configuration
    #[must_use]
    pub const fn new(clock_hz: u32, baud_rate: u32) -> Self {
        Self { clock_hz, baud_rate }
    }

    /// Derive the bit period
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the baud rate is zero or faster
    /// than the clock.
    pub const fn bit_period(&self) -> Result<BitPeriod, ConfigError> {
        BitPeriod::new(self.clock_hz, self.baud_rate)
    }
}

impl Default for UartConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CLOCK_HZ, DEFAULT_BAUD_RATE)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for UartConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} Bd @ {} Hz", self.baud_rate, self.clock_hz);
    }
}

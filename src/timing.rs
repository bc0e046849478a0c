//! Bit-Timing Generator
//!
//! Derives the number of reference clock ticks that make up one serial
//! bit. Receiver and transmitter both count against the same
//! [`BitPeriod`], which is fixed once constructed.

use core::fmt;

use crate::config::{FRAME_BITS, MIN_OVERSAMPLING};

/// Invalid clock/baud combination
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Baud rate of zero
    ZeroBaudRate,
    /// Clock divisor of zero ticks
    ZeroTicks,
    /// Clock divided by baud rate truncates to zero ticks per bit
    ZeroBitPeriod {
        /// Reference clock in Hz
        clock_hz: u32,
        /// Requested baud rate
        baud_rate: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBaudRate => write!(f, "baud rate must be non-zero"),
            Self::ZeroTicks => write!(f, "bit period must be at least one tick"),
            Self::ZeroBitPeriod { clock_hz, baud_rate } => write!(
                f,
                "baud rate {baud_rate} is faster than the {clock_hz} Hz reference clock"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(feature = "embedded")]
impl defmt::Format for ConfigError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::ZeroBaudRate => defmt::write!(f, "ZeroBaudRate"),
            Self::ZeroTicks => defmt::write!(f, "ZeroTicks"),
            Self::ZeroBitPeriod { clock_hz, baud_rate } => {
                defmt::write!(f, "ZeroBitPeriod({} Hz / {} Bd)", clock_hz, baud_rate);
            }
        }
    }
}

/// Clock ticks per serial bit
///
/// Always at least one tick. Constructed through [`BitPeriod::new`] from
/// the reference clock and the baud rate (integer division, truncating).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitPeriod(u32);

impl BitPeriod {
    /// Derive the bit period from a reference clock and baud rate
    ///
    /// Usable in `const` context, so a bad constant configuration fails
    /// the build:
    ///
    /// ```
    /// use uart_core::timing::BitPeriod;
    ///
    /// const PERIOD: BitPeriod = match BitPeriod::new(100_000_000, 115_200) {
    ///     Ok(period) => period,
    ///     Err(_) => panic!("invalid UART timing"),
    /// };
    /// assert_eq!(PERIOD.ticks(), 868);
    /// ```
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroBaudRate`] for a zero baud rate and
    /// [`ConfigError::ZeroBitPeriod`] when the baud rate exceeds the clock.
    pub const fn new(clock_hz: u32, baud_rate: u32) -> Result<Self, ConfigError> {
        if baud_rate == 0 {
            return Err(ConfigError::ZeroBaudRate);
        }
        let ticks = clock_hz / baud_rate;
        if ticks == 0 {
            return Err(ConfigError::ZeroBitPeriod { clock_hz, baud_rate });
        }
        Ok(Self(ticks))
    }

    /// Use an already known clock divisor
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroTicks`] for a zero divisor.
    pub const fn from_ticks(ticks: u32) -> Result<Self, ConfigError> {
        if ticks == 0 {
            Err(ConfigError::ZeroTicks)
        } else {
            Ok(Self(ticks))
        }
    }

    /// Ticks per bit
    #[must_use]
    pub const fn ticks(self) -> u32 {
        self.0
    }

    /// Tick index within a bit window where the receiver samples the line
    #[must_use]
    pub const fn sample_point(self) -> u32 {
        self.0 / 2
    }

    /// Tick index of the last tick in a bit window
    #[must_use]
    pub const fn last_tick(self) -> u32 {
        self.0 - 1
    }

    /// Ticks in a complete 8-N-1 frame (start, data, stop)
    ///
    /// Wider than the period itself: ten periods of a large divisor do
    /// not fit in `u32`.
    #[must_use]
    pub const fn frame_ticks(self) -> u64 {
        self.0 as u64 * FRAME_BITS as u64
    }

    /// Whether mid-bit sampling has enough margin against edge jitter
    ///
    /// Advisory only: every period of one tick or more is functional.
    #[must_use]
    pub const fn is_reliable(self) -> bool {
        self.0 >= MIN_OVERSAMPLING
    }
}

impl fmt::Debug for BitPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitPeriod({} ticks)", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for BitPeriod {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} ticks/bit", self.0);
    }
}

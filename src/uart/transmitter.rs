//! UART Transmitter
//!
//! Accepts one byte through a valid/ready handshake and shifts it out
//! LSB first as an 8-N-1 frame. Every line level is held for exactly one
//! bit period; the frame from the first low tick spans ten periods.

use crate::config::DATA_WIDTH;
use crate::timing::BitPeriod;

/// Stop bit placeholder above the data byte in the shift register
const STOP_BIT: u16 = 1 << DATA_WIDTH;

/// Transmitter state machine state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TransmitterState {
    /// Line idle, ready to accept a byte
    #[default]
    WaitingForStart,
    /// Shifting a frame out
    Sending,
}

#[cfg(feature = "embedded")]
impl defmt::Format for TransmitterState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::WaitingForStart => defmt::write!(f, "READY"),
            Self::Sending => defmt::write!(f, "SENDING"),
        }
    }
}

/// Shift-out UART transmitter
#[derive(Clone, Debug)]
pub struct Transmitter {
    /// Ticks per bit
    period: BitPeriod,
    /// Current state
    state: TransmitterState,
    /// `{stop, data}`, shifted out LSB first
    shift: u16,
    /// Bits shifted out after the start bit (0..=9)
    bit_count: u32,
    /// Ticks left before the next bit
    baud_count: u32,
    /// Serial output level
    serial_out: bool,
    /// Ready for a new byte
    ready: bool,
}

impl Transmitter {
    /// Create an idle transmitter (line high, ready)
    #[must_use]
    pub const fn new(period: BitPeriod) -> Self {
        Self {
            period,
            state: TransmitterState::WaitingForStart,
            shift: 0,
            bit_count: 0,
            baud_count: 0,
            serial_out: true,
            ready: true,
        }
    }

    /// Advance one clock tick
    ///
    /// `data` is captured only when the transmitter is waiting and
    /// `valid` is set; the ready flag dropping is the acknowledgment.
    /// While a frame is in flight `valid` is ignored.
    pub fn step(&mut self, valid: bool, data: u8) {
        match self.state {
            TransmitterState::WaitingForStart => {
                self.serial_out = true;
                self.ready = true;

                if valid {
                    #[cfg(feature = "embedded")]
                    defmt::debug!("tx: byte {=u8:#x}", data);

                    self.shift = STOP_BIT | u16::from(data);
                    self.serial_out = false;
                    self.baud_count = self.period.last_tick();
                    self.bit_count = 0;
                    self.ready = false;
                    self.state = TransmitterState::Sending;
                }
            }

            TransmitterState::Sending => {
                if self.baud_count > 0 {
                    self.baud_count -= 1;
                    return;
                }

                self.baud_count = self.period.last_tick();
                if self.bit_count < DATA_WIDTH + 1 {
                    self.bit_count += 1;
                    self.serial_out = self.shift & 1 != 0;
                    self.shift >>= 1;
                } else {
                    // Stop bit has been held for a full period
                    self.state = TransmitterState::WaitingForStart;
                    self.ready = true;

                    #[cfg(feature = "embedded")]
                    defmt::trace!("tx: frame done");
                }
            }
        }
    }

    /// Return to the power-on state
    pub fn reset(&mut self) {
        *self = Self::new(self.period);
    }

    /// Get current state
    #[must_use]
    pub const fn state(&self) -> TransmitterState {
        self.state
    }

    /// Serial output level (`serialOut`)
    #[must_use]
    pub const fn serial_out(&self) -> bool {
        self.serial_out
    }

    /// Ready to accept a byte (`txReady`)
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Check if a frame is in flight
    #[must_use]
    pub const fn is_sending(&self) -> bool {
        matches!(self.state, TransmitterState::Sending)
    }

    /// Get the bit period
    #[must_use]
    pub const fn bit_period(&self) -> BitPeriod {
        self.period
    }
}

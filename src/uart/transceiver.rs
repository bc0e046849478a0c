//! Transceiver wiring
//!
//! Bundles a [`Receiver`] and a [`Transmitter`] behind the boundary
//! signals of the core. Both halves are stepped on every tick; they
//! never observe each other, so evaluation order is irrelevant.

use super::{Receiver, Transmitter};
use crate::config::UartConfig;
use crate::timing::{BitPeriod, ConfigError};

/// Signals driven into the core on one tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UartInputs {
    /// Incoming serial line (`serialIn`, idle high)
    pub serial_in: bool,
    /// Consumer picks up the received byte (`rxReady`)
    pub rx_ready: bool,
    /// Producer offers a byte (`txValid`)
    pub tx_valid: bool,
    /// Byte to transmit (`dataIn`)
    pub data_in: u8,
}

impl UartInputs {
    /// Inputs with an idle line and no handshakes
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            serial_in: true,
            rx_ready: false,
            tx_valid: false,
            data_in: 0,
        }
    }

    /// Set the serial input level
    #[must_use]
    pub const fn with_line(mut self, serial_in: bool) -> Self {
        self.serial_in = serial_in;
        self
    }

    /// Offer a byte to the transmitter
    #[must_use]
    pub const fn with_byte(mut self, data: u8) -> Self {
        self.tx_valid = true;
        self.data_in = data;
        self
    }

    /// Assert the receive pickup flag
    #[must_use]
    pub const fn with_rx_ready(mut self, ready: bool) -> Self {
        self.rx_ready = ready;
        self
    }
}

impl Default for UartInputs {
    fn default() -> Self {
        Self::idle()
    }
}

/// Signals driven out of the core after a tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UartOutputs {
    /// Outgoing serial line (`serialOut`, idle high)
    pub serial_out: bool,
    /// Transmitter accepts a byte (`txReady`)
    pub tx_ready: bool,
    /// Received byte awaits pickup (`rxValid`)
    pub rx_valid: bool,
    /// Last received byte (`dataOut`)
    pub data_out: u8,
}

#[cfg(feature = "embedded")]
impl defmt::Format for UartOutputs {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "tx={} txReady={} rxValid={} data={=u8:#x}",
            self.serial_out,
            self.tx_ready,
            self.rx_valid,
            self.data_out
        );
    }
}

/// Full-duplex UART core
#[derive(Clone, Debug)]
pub struct Transceiver {
    receiver: Receiver,
    transmitter: Transmitter,
}

impl Transceiver {
    /// Create a transceiver in the reset state
    #[must_use]
    pub const fn new(period: BitPeriod) -> Self {
        Self {
            receiver: Receiver::new(period),
            transmitter: Transmitter::new(period),
        }
    }

    /// Create a transceiver from a clock/baud configuration
    ///
    /// # Errors
    ///
    /// Rejects configurations whose bit period would be zero.
    pub fn from_config(config: &UartConfig) -> Result<Self, ConfigError> {
        config.bit_period().map(Self::new)
    }

    /// Advance both state machines by one tick
    pub fn step(&mut self, inputs: UartInputs) -> UartOutputs {
        self.receiver.step(inputs.serial_in, inputs.rx_ready);
        self.transmitter.step(inputs.tx_valid, inputs.data_in);
        self.outputs()
    }

    /// Current output signals
    #[must_use]
    pub const fn outputs(&self) -> UartOutputs {
        UartOutputs {
            serial_out: self.transmitter.serial_out(),
            tx_ready: self.transmitter.is_ready(),
            rx_valid: self.receiver.is_valid(),
            data_out: self.receiver.data(),
        }
    }

    /// Return both halves to the power-on state
    pub fn reset(&mut self) {
        self.receiver.reset();
        self.transmitter.reset();
    }

    /// Get the receive half
    #[must_use]
    pub const fn receiver(&self) -> &Receiver {
        &self.receiver
    }

    /// Get the transmit half
    #[must_use]
    pub const fn transmitter(&self) -> &Transmitter {
        &self.transmitter
    }

    /// Get the bit period
    #[must_use]
    pub const fn bit_period(&self) -> BitPeriod {
        self.transmitter.bit_period()
    }
}

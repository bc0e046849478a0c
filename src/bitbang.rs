//! Bit-banged UART
//!
//! Drives a [`Transceiver`] from two GPIO pins and bridges its
//! valid/ready handshakes to fixed-capacity byte queues. Call
//! [`BitBangUart::tick`] once per reference clock tick, e.g. from a
//! timer running at `baud_rate * oversampling`.

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use heapless::Deque;

use crate::config::BITBANG_QUEUE_DEPTH;
use crate::timing::BitPeriod;
use crate::uart::{Transceiver, UartInputs, UartOutputs};

/// UART on an input pin (RX) and an output pin (TX)
///
/// A full RX queue withholds `rx_ready`, so the receiver stalls exactly
/// as it would behind a slow consumer and misses frames until a byte is
/// read.
pub struct BitBangUart<RX, TX, const N: usize = BITBANG_QUEUE_DEPTH> {
    rx_pin: RX,
    tx_pin: TX,
    core: Transceiver,
    /// Outputs of the previous tick
    outputs: UartOutputs,
    tx_queue: Deque<u8, N>,
    rx_queue: Deque<u8, N>,
}

impl<RX, TX, E, const N: usize> BitBangUart<RX, TX, N>
where
    RX: InputPin<Error = E>,
    TX: OutputPin<Error = E>,
{
    /// Take ownership of the pins and drive the line idle
    ///
    /// # Errors
    ///
    /// Propagates the TX pin error.
    pub fn new(rx_pin: RX, mut tx_pin: TX, period: BitPeriod) -> Result<Self, E> {
        let core = Transceiver::new(period);
        let outputs = core.outputs();
        tx_pin.set_state(PinState::from(outputs.serial_out))?;

        Ok(Self {
            rx_pin,
            tx_pin,
            core,
            outputs,
            tx_queue: Deque::new(),
            rx_queue: Deque::new(),
        })
    }

    /// Advance the core by one tick
    ///
    /// # Errors
    ///
    /// Propagates RX or TX pin errors; the core is not stepped when the
    /// RX pin cannot be read.
    pub fn tick(&mut self) -> Result<(), E> {
        let serial_in = self.rx_pin.is_high()?;

        // Consumer side: acknowledge a valid byte only once it is queued
        let rx_ready =
            self.outputs.rx_valid && self.rx_queue.push_back(self.outputs.data_out).is_ok();

        // Producer side: offer the queue head while the transmitter is ready
        let offered = if self.outputs.tx_ready {
            self.tx_queue.front().copied()
        } else {
            None
        };

        let mut inputs = UartInputs::idle().with_line(serial_in).with_rx_ready(rx_ready);
        if let Some(byte) = offered {
            inputs = inputs.with_byte(byte);
        }

        self.outputs = self.core.step(inputs);

        // Ready dropping acknowledges the capture
        if offered.is_some() && !self.outputs.tx_ready {
            self.tx_queue.pop_front();
        }

        self.tx_pin.set_state(PinState::from(self.outputs.serial_out))
    }

    /// Queue a byte for transmission
    ///
    /// # Errors
    ///
    /// Returns the byte back when the TX queue is full.
    pub fn write(&mut self, byte: u8) -> Result<(), u8> {
        self.tx_queue.push_back(byte)
    }

    /// Take the oldest received byte
    pub fn read(&mut self) -> Option<u8> {
        self.rx_queue.pop_front()
    }

    /// Number of received bytes waiting in the RX queue
    #[must_use]
    pub fn rx_pending(&self) -> usize {
        self.rx_queue.len()
    }

    /// Nothing queued and no frame on the line
    #[must_use]
    pub fn is_tx_idle(&self) -> bool {
        self.tx_queue.is_empty() && !self.core.transmitter().is_sending()
    }

    /// Get the underlying core
    #[must_use]
    pub const fn core(&self) -> &Transceiver {
        &self.core
    }

    /// Give the pins back
    pub fn release(self) -> (RX, TX) {
        (self.rx_pin, self.tx_pin)
    }
}

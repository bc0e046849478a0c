//! UART Receiver
//!
//! Watches the serial input for the falling edge of a start bit, then
//! samples each data bit exactly once at the middle of its window.
//!
//! # Timing
//!
//! The tick on which the idle receiver first sees a low line is tick 0
//! of the start-bit window. Window `k` spans `P` ticks from
//! `t0 + k * P`; the start-bit window is consumed without sampling and
//! data windows are sampled at tick `P / 2`. The stop bit is not
//! checked: the byte is handed over at the last tick of the eighth data
//! window.
//!
//! Start detection is a single sample, so a one-tick low glitch on an
//! idle line starts a (garbage) frame.

use crate::config::DATA_WIDTH;
use crate::timing::BitPeriod;

/// Receiver state machine state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ReceiverState {
    /// Waiting for a start bit
    #[default]
    Idle,
    /// Counting through the bit windows of a frame
    Sampling,
    /// Byte complete, held until the consumer is ready
    AwaitingConsumer,
}

#[cfg(feature = "embedded")]
impl defmt::Format for ReceiverState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Idle => defmt::write!(f, "IDLE"),
            Self::Sampling => defmt::write!(f, "SAMPLING"),
            Self::AwaitingConsumer => defmt::write!(f, "AWAIT"),
        }
    }
}

/// Oversampling UART receiver
#[derive(Clone, Debug)]
pub struct Receiver {
    /// Ticks per bit
    period: BitPeriod,
    /// Current state
    state: ReceiverState,
    /// Bits sampled so far, newest at bit 7
    shift: u8,
    /// Completed data bits (0..8)
    bit_count: u32,
    /// Tick index within the current bit window
    sample_count: u32,
    /// Current window is the start bit
    in_start_bit: bool,
    /// Last fully received byte
    data: u8,
}

impl Receiver {
    /// Create a receiver in the idle state
    #[must_use]
    pub const fn new(period: BitPeriod) -> Self {
        Self {
            period,
            state: ReceiverState::Idle,
            shift: 0,
            bit_count: 0,
            sample_count: 0,
            in_start_bit: false,
            data: 0,
        }
    }

    /// Advance one clock tick
    ///
    /// `serial_in` is the line level on this tick, `ready` the
    /// consumer's pickup acknowledgment. A byte is transferred on a tick
    /// where [`is_valid`](Self::is_valid) was already true and `ready`
    /// is asserted.
    pub fn step(&mut self, serial_in: bool, ready: bool) {
        match self.state {
            ReceiverState::Idle => {
                self.sample_count = 0;
                self.bit_count = 0;
                self.shift = 0;

                if !serial_in {
                    #[cfg(feature = "embedded")]
                    defmt::trace!("rx: start bit");

                    self.state = ReceiverState::Sampling;
                    self.in_start_bit = true;
                    // The edge tick is tick 0 of the start-bit window
                    self.sample(serial_in);
                }
            }

            ReceiverState::Sampling => self.sample(serial_in),

            ReceiverState::AwaitingConsumer => {
                if ready {
                    self.state = ReceiverState::Idle;
                }
            }
        }
    }

    /// Process one tick of the current bit window
    fn sample(&mut self, serial_in: bool) {
        let tick = self.sample_count;

        if tick == self.period.sample_point() && !self.in_start_bit {
            self.shift = (self.shift >> 1) | (u8::from(serial_in) << 7);
        }

        if tick != self.period.last_tick() {
            self.sample_count = tick + 1;
            return;
        }

        // End of window
        self.sample_count = 0;
        if self.in_start_bit {
            self.in_start_bit = false;
            return;
        }

        self.bit_count += 1;
        if self.bit_count == DATA_WIDTH {
            self.bit_count = 0;
            self.data = self.shift;
            self.state = ReceiverState::AwaitingConsumer;

            #[cfg(feature = "embedded")]
            defmt::debug!("rx: byte {=u8:#x}", self.data);
        }
    }

    /// Return to the power-on state
    pub fn reset(&mut self) {
        *self = Self::new(self.period);
    }

    /// Get current state
    #[must_use]
    pub const fn state(&self) -> ReceiverState {
        self.state
    }

    /// Received byte is waiting for pickup (`rxValid`)
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self.state, ReceiverState::AwaitingConsumer)
    }

    /// Last fully received byte (`dataOut`)
    #[must_use]
    pub const fn data(&self) -> u8 {
        self.data
    }

    /// Data bits completed in the current frame
    #[must_use]
    pub const fn bits_received(&self) -> u32 {
        self.bit_count
    }

    /// Get the bit period
    #[must_use]
    pub const fn bit_period(&self) -> BitPeriod {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(ticks: u32) -> BitPeriod {
        BitPeriod::from_ticks(ticks).unwrap()
    }

    /// Feed one frame, one level per bit repeated `ticks` times
    fn feed_frame(rx: &mut Receiver, byte: u8, ticks: u32) {
        let bits = core::iter::once(false)
            .chain((0..8).map(|i| (byte >> i) & 1 != 0))
            .chain(core::iter::once(true));
        for bit in bits {
            for _ in 0..ticks {
                rx.step(bit, false);
            }
        }
    }

    #[test]
    fn idle_after_new() {
        let rx = Receiver::new(period(16));
        assert_eq!(rx.state(), ReceiverState::Idle);
        assert!(!rx.is_valid());
    }

    #[test]
    fn high_line_stays_idle() {
        let mut rx = Receiver::new(period(16));
        for _ in 0..1000 {
            rx.step(true, false);
        }
        assert_eq!(rx.state(), ReceiverState::Idle);
    }

    #[test]
    fn low_edge_starts_sampling() {
        let mut rx = Receiver::new(period(16));
        rx.step(false, false);
        assert_eq!(rx.state(), ReceiverState::Sampling);
    }

    #[test]
    fn receives_byte() {
        let mut rx = Receiver::new(period(16));
        feed_frame(&mut rx, 0xA5, 16);
        assert!(rx.is_valid());
        assert_eq!(rx.data(), 0xA5);
    }

    #[test]
    fn valid_at_end_of_last_data_bit() {
        let mut rx = Receiver::new(period(4));
        // Start + 8 data windows minus one tick
        for tick in 0..(9 * 4 - 1) {
            rx.step(tick >= 4, false);
            assert!(!rx.is_valid());
        }
        rx.step(true, false);
        assert!(rx.is_valid());
        assert_eq!(rx.data(), 0xFF);
    }

    #[test]
    fn single_tick_period() {
        let mut rx = Receiver::new(period(1));
        feed_frame(&mut rx, 0x3C, 1);
        assert!(rx.is_valid());
        assert_eq!(rx.data(), 0x3C);
    }

    #[test]
    fn holds_until_ready() {
        let mut rx = Receiver::new(period(8));
        feed_frame(&mut rx, 0x42, 8);
        for _ in 0..100 {
            rx.step(true, false);
            assert!(rx.is_valid());
        }
        rx.step(true, true);
        assert_eq!(rx.state(), ReceiverState::Idle);
        // Output register keeps the last byte
        assert_eq!(rx.data(), 0x42);
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut rx = Receiver::new(period(8));
        rx.step(false, false);
        rx.reset();
        assert_eq!(rx.state(), ReceiverState::Idle);
        assert_eq!(rx.bits_received(), 0);
    }
}

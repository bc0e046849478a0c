//! UART Transceiver Core
//!
//! A cycle-stepped asynchronous serial transceiver: 8 data bits, no
//! parity, one stop bit, at a baud rate derived from a fixed reference
//! clock. Everything is plain register state advanced by one `step`
//! call per clock tick, so the same core runs in a host simulation or
//! bit-banged from a timer interrupt on the target.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        DRIVER LAYER                          │
//! │   BitBangUart: GPIO pins + RX/TX byte queues                 │
//! ├──────────────────────────────────────────────────────────────┤
//! │                         UART CORE                            │
//! │   Transceiver ── Receiver (oversampling, mid-bit sample)     │
//! │               └─ Transmitter (shift-out, valid/ready)        │
//! ├──────────────────────────────────────────────────────────────┤
//! │                    BIT-TIMING GENERATOR                      │
//! │   BitPeriod = clock_hz / baud_rate                           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use uart_core::config::DEFAULT_BIT_PERIOD;
//! use uart_core::uart::{Transceiver, UartInputs};
//!
//! let mut uart = Transceiver::new(DEFAULT_BIT_PERIOD);
//! let out = uart.step(UartInputs::idle().with_byte(b'A'));
//! assert!(!out.serial_out); // start bit
//! assert!(!out.tx_ready);
//! ```

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Bit-Timing Generator
///
/// Ticks-per-bit derivation and configuration errors.
pub mod timing;

/// UART Core
///
/// Receiver, transmitter, and their combined signal interface.
pub mod uart;

/// Reference line encoder for simulation and tests
pub mod waveform;

/// GPIO driver with byte queues
pub mod bitbang;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types.

    pub use crate::bitbang::BitBangUart;
    pub use crate::config::{UartConfig, DEFAULT_BIT_PERIOD};
    pub use crate::timing::{BitPeriod, ConfigError};
    pub use crate::uart::{Transceiver, UartInputs, UartOutputs};
    pub use crate::waveform::FrameWaveform;
}

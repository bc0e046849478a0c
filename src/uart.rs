//! UART Transceiver Core
//!
//! Two independent state machines stepped once per reference clock
//! tick, plus the wiring that exposes them as one set of signals.
//! They share nothing but the [`BitPeriod`](crate::timing::BitPeriod).

pub mod receiver;
pub mod transmitter;
pub mod transceiver;

pub use receiver::{Receiver, ReceiverState};
pub use transceiver::{Transceiver, UartInputs, UartOutputs};
pub use transmitter::{Transmitter, TransmitterState};

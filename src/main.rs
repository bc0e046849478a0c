//! Bit-banged UART echo
//!
//! Runs the UART core on two GPIO pins of the STM32G474 and echoes
//! every received byte back. A ticker at `EMBEDDED_TICK_HZ` provides the
//! reference clock.

#![no_std]
#![no_main]

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_time::{Duration, Ticker, Timer};
use {defmt_rtt as _, panic_probe as _};

use uart_core::config::{EMBEDDED_BAUD_RATE, EMBEDDED_BIT_PERIOD, EMBEDDED_TICK_HZ};
use uart_core::prelude::*;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("UART core v{}", env!("CARGO_PKG_VERSION"));

    let p = embassy_stm32::init(embassy_stm32::Config::default());

    // PA10 = RX (pulled up to the idle level), PA9 = TX
    let rx = Input::new(p.PA10, Pull::Up);
    let tx = Output::new(p.PA9, Level::High, Speed::Low);
    let led = Output::new(p.PA5, Level::Low, Speed::Low);

    if !EMBEDDED_BIT_PERIOD.is_reliable() {
        warn!("bit period {} below recommended oversampling", EMBEDDED_BIT_PERIOD);
    }
    info!("bit-banged UART at {} Bd, {}", EMBEDDED_BAUD_RATE, EMBEDDED_BIT_PERIOD);

    spawner.spawn(heartbeat_task(led)).unwrap();
    spawner.spawn(uart_task(rx, tx)).unwrap();
}

/// Steps the UART once per tick and echoes received bytes
#[embassy_executor::task]
async fn uart_task(rx: Input<'static>, tx: Output<'static>) {
    let mut uart = BitBangUart::<_, _>::new(rx, tx, EMBEDDED_BIT_PERIOD).unwrap();
    let mut ticker = Ticker::every(Duration::from_hz(u64::from(EMBEDDED_TICK_HZ)));

    loop {
        uart.tick().unwrap();

        if let Some(byte) = uart.read() {
            if uart.write(byte).is_err() {
                warn!("tx queue full, dropped {=u8:#x}", byte);
            }
        }

        ticker.next().await;
    }
}

/// Heartbeat task - blinks LED to show system is running
#[embassy_executor::task]
async fn heartbeat_task(mut led: Output<'static>) {
    loop {
        led.set_high();
        Timer::after(Duration::from_millis(100)).await;
        led.set_low();
        Timer::after(Duration::from_millis(900)).await;
    }
}

//! Configuration and Constants Tests
//!
//! Tests to verify configuration values are valid and consistent.
//! Run with: cargo test --features std --test config_tests

use uart_core::config::*;
use uart_core::timing::ConfigError;

// =============================================================================
// Frame format
// =============================================================================

#[test]
fn frame_is_8n1() {
    assert_eq!(DATA_WIDTH, 8);
    assert_eq!(FRAME_BITS, 10);
}

#[test]
fn oversampling_recommendation() {
    assert_eq!(MIN_OVERSAMPLING, 5);
}

// =============================================================================
// Default timing
// =============================================================================

#[test]
fn default_bit_period() {
    assert_eq!(DEFAULT_BIT_PERIOD.ticks(), DEFAULT_CLOCK_HZ / DEFAULT_BAUD_RATE);
    assert_eq!(DEFAULT_BIT_PERIOD.ticks(), 868);
}

#[test]
fn default_config_matches_constants() {
    let config = UartConfig::default();
    assert_eq!(config.clock_hz, DEFAULT_CLOCK_HZ);
    assert_eq!(config.baud_rate, DEFAULT_BAUD_RATE);
    assert_eq!(config.bit_period(), Ok(DEFAULT_BIT_PERIOD));
}

#[test]
fn config_rejects_zero_baud() {
    let config = UartConfig::new(DEFAULT_CLOCK_HZ, 0);
    assert_eq!(config.bit_period(), Err(ConfigError::ZeroBaudRate));
}

#[test]
fn config_rejects_slow_clock() {
    let config = UartConfig::new(9_600, 115_200);
    assert!(matches!(
        config.bit_period(),
        Err(ConfigError::ZeroBitPeriod { .. })
    ));
}

// =============================================================================
// Embedded port
// =============================================================================

#[test]
fn embedded_tick_is_multiple_of_baud() {
    assert_eq!(EMBEDDED_TICK_HZ % EMBEDDED_BAUD_RATE, 0);
    assert_eq!(EMBEDDED_BIT_PERIOD.ticks(), EMBEDDED_TICK_HZ / EMBEDDED_BAUD_RATE);
}

#[test]
fn embedded_oversampling_reliable() {
    assert!(EMBEDDED_BIT_PERIOD.is_reliable());
}

#[test]
fn queue_depth_nonzero() {
    assert!(BITBANG_QUEUE_DEPTH > 0);
}

#[test]
fn pins_distinct() {
    assert_ne!(pins::UART_TX, pins::UART_RX);
    assert_ne!(pins::UART_TX, pins::LED_STATUS);
    assert_ne!(pins::UART_RX, pins::LED_STATUS);
}

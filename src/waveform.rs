//! Reference line encoder
//!
//! Produces the tick-by-tick line levels of an 8-N-1 frame, for driving
//! a receiver in simulation or checking a transmitter's output.

use crate::config::{DATA_WIDTH, FRAME_BITS};
use crate::timing::BitPeriod;

/// Line levels of one frame, one item per clock tick
#[derive(Clone, Debug)]
pub struct FrameWaveform {
    /// Frame bits, start at bit 0
    frame: u16,
    period: BitPeriod,
    tick: u64,
}

impl FrameWaveform {
    /// Waveform for `byte` at the given bit period
    #[must_use]
    pub const fn new(byte: u8, period: BitPeriod) -> Self {
        // start(0) | data << 1 | stop(1) << 9
        let frame = ((byte as u16) << 1) | (1 << (DATA_WIDTH + 1));
        Self {
            frame,
            period,
            tick: 0,
        }
    }

    /// Line level at `tick` ticks after the start of the frame
    ///
    /// Past the end of the frame the line is idle (high).
    #[must_use]
    pub const fn level_at(&self, tick: u64) -> bool {
        let bit = tick / self.period.ticks() as u64;
        if bit >= FRAME_BITS as u64 {
            true
        } else {
            (self.frame >> bit) & 1 != 0
        }
    }

    /// Total ticks in the frame
    #[must_use]
    pub const fn len_ticks(&self) -> u64 {
        self.period.frame_ticks()
    }
}

impl Iterator for FrameWaveform {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.tick >= self.len_ticks() {
            return None;
        }
        let level = self.level_at(self.tick);
        self.tick += 1;
        Some(level)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // A frame of a large period can outgrow a 32-bit usize
        match usize::try_from(self.len_ticks() - self.tick) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_length() {
        let period = BitPeriod::from_ticks(7).unwrap();
        assert_eq!(FrameWaveform::new(0x00, period).count(), 70);
    }

    #[test]
    fn start_and_stop_levels() {
        let period = BitPeriod::from_ticks(2).unwrap();
        let levels: Vec<bool> = FrameWaveform::new(0x00, period).collect();
        assert!(!levels[0] && !levels[1]);
        assert!(levels[18] && levels[19]);
    }

    #[test]
    fn data_lsb_first() {
        let period = BitPeriod::from_ticks(1).unwrap();
        let levels: Vec<bool> = FrameWaveform::new(0x01, period).collect();
        assert_eq!(
            levels,
            [false, true, false, false, false, false, false, false, false, true]
        );
    }

    #[test]
    fn idle_after_frame() {
        let period = BitPeriod::from_ticks(4).unwrap();
        let wave = FrameWaveform::new(0x00, period);
        assert!(wave.level_at(40));
        assert!(wave.level_at(1_000));
    }

    #[test]
    fn largest_period_does_not_overflow() {
        let period = BitPeriod::from_ticks(u32::MAX).unwrap();
        let mut wave = FrameWaveform::new(0xFF, period);
        assert_eq!(wave.len_ticks(), u64::from(u32::MAX) * 10);
        assert_eq!(wave.next(), Some(false));
        // Stop bit starts at nine periods
        assert!(!wave.level_at(u64::from(u32::MAX) - 1));
        assert!(wave.level_at(u64::from(u32::MAX) * 9));
        assert!(wave.level_at(u64::from(u32::MAX) * 10));
    }
}

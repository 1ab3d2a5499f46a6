//! The pulse widths of the WS2812 protocol, expressed in controller cycles.
//!
//! A profile only describes the wall-clock targets. It has to match the
//! clock the controller actually runs at; a mismatch can not be detected
//! and shows up as wrong colors or a strip that ignores the data.

use paste::paste;

/// Cycle counts of one protocol bit for a specific clock frequency.
///
/// Every bit starts with the line high. It goes low after [ZERO_HIGH](Self::ZERO_HIGH)
/// cycles for a `0` and after [ONE_HIGH](Self::ONE_HIGH) cycles for a `1`.
/// The next bit starts [PERIOD](Self::PERIOD) cycles after the current one,
/// independent of the value.
///
/// Every phase of a bit ends with work of the bit loop itself: toggling the
/// pin, testing the bit, advancing to the next one. [EDGE_OVERHEAD](Self::EDGE_OVERHEAD)
/// is the cost of that work in cycles, and is taken off each wait so the
/// edges land where the profile says. It depends on the `OutputPin`
/// implementation and the optimizer, so calibrate it per HAL with a logic
/// analyzer.
///
/// Required: `0 < ZERO_HIGH < ONE_HIGH < PERIOD`, and no phase shorter than
/// `EDGE_OVERHEAD`. The driver refuses to compile with a profile that
/// violates this.
pub trait TimingProfile {
    /// The controller clock, in Hz.
    const CLOCK_HZ: u32;
    /// High time of a `0` bit, in cycles.
    const ZERO_HIGH: u32;
    /// High time of a `1` bit, in cycles.
    const ONE_HIGH: u32;
    /// Length of a bit, in cycles.
    const PERIOD: u32;
    /// Cycles the bit loop spends around each edge, outside of the delay.
    const EDGE_OVERHEAD: u32 = 0;
    /// Minimum low time after a frame, in microseconds.
    const RESET_US: u32 = 50;

    /// Low time after a frame, in cycles.
    fn reset_cycles() -> u32 {
        cycles_per_us(Self::CLOCK_HZ) * Self::RESET_US
    }

    /// How long sending `count` LEDs takes, reset hold included.
    fn frame_duration_us(count: usize) -> u32 {
        let bit_cycles = u64::from(Self::PERIOD)
            .saturating_mul(24)
            .saturating_mul(count as u64);
        let bits_us = bit_cycles.saturating_mul(1_000_000) / u64::from(Self::CLOCK_HZ);
        u32::try_from(bits_us)
            .unwrap_or(u32::MAX)
            .saturating_add(Self::RESET_US)
    }
}

pub(crate) const fn cycles_per_us(clock_hz: u32) -> u32 {
    clock_hz / 1_000_000
}

pub(crate) const fn is_valid(zero_high: u32, one_high: u32, period: u32, overhead: u32) -> bool {
    0 < zero_high
        && zero_high < one_high
        && one_high < period
        && overhead <= zero_high
        && overhead <= one_high - zero_high
        && overhead <= period - one_high
}

macro_rules! timing_profile {
    ($mhz:literal MHz: zero_high = $zero:literal, one_high = $one:literal, period = $period:literal) => {
        paste! {
            #[doc = concat!("Timing of a controller running at ", stringify!($mhz), " MHz.")]
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            pub struct [<ClockMhz $mhz>];

            impl TimingProfile for [<ClockMhz $mhz>] {
                const CLOCK_HZ: u32 = $mhz * 1_000_000;
                const ZERO_HIGH: u32 = $zero;
                const ONE_HIGH: u32 = $one;
                const PERIOD: u32 = $period;
            }

            const _: () = assert!(is_valid($zero, $one, $period, 0));
        }
    };
}

// 375ns / 875ns / 2125ns
timing_profile!(8 MHz: zero_high = 3, one_high = 7, period = 17);
// 375ns / 812ns / 1375ns
timing_profile!(16 MHz: zero_high = 6, one_high = 13, period = 22);
// 400ns / 850ns / 1300ns
timing_profile!(20 MHz: zero_high = 8, one_high = 17, period = 26);

#[cfg(any(
    all(feature = "clock-8mhz", feature = "clock-16mhz"),
    all(feature = "clock-8mhz", feature = "clock-20mhz"),
    all(feature = "clock-16mhz", feature = "clock-20mhz"),
))]
compile_error!("Only one of the `clock-8mhz`, `clock-16mhz` and `clock-20mhz` features may be enabled.");

/// The profile selected through the `clock-*` cargo feature.
#[cfg(feature = "clock-8mhz")]
pub type DefaultProfile = ClockMhz8;

/// The profile selected through the `clock-*` cargo feature.
#[cfg(feature = "clock-16mhz")]
pub type DefaultProfile = ClockMhz16;

/// The profile selected through the `clock-*` cargo feature.
#[cfg(feature = "clock-20mhz")]
pub type DefaultProfile = ClockMhz20;

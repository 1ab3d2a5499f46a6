use core::marker::PhantomData;

use embedded_hal::digital::{Error as _, ErrorKind, OutputPin};
use snafu::prelude::*;

use super::Ws2812;
use crate::{
    delay::CycleDelay,
    errors::{self, Ws2812InitError, Ws2812WriteError},
    timing::{self, TimingProfile},
    Color, LedStrip, Pixel,
};

impl<PIN, D, T> Ws2812<PIN, D, T>
where
    PIN: OutputPin,
    D: CycleDelay,
    T: TimingProfile,
{
    const TIMING_VALID: () = assert!(
        timing::is_valid(T::ZERO_HIGH, T::ONE_HIGH, T::PERIOD, T::EDGE_OVERHEAD),
        "Timing profile violates 0 < ZERO_HIGH < ONE_HIGH < PERIOD, or a phase is shorter than EDGE_OVERHEAD"
    );

    // Line high, until a `0` drops it.
    const LEAD: u32 = T::ZERO_HIGH - T::EDGE_OVERHEAD;
    // Until a `1` drops it.
    const MID: u32 = T::ONE_HIGH - T::ZERO_HIGH - T::EDGE_OVERHEAD;
    // Low for everybody.
    const TAIL: u32 = T::PERIOD - T::ONE_HIGH - T::EDGE_OVERHEAD;

    /// Initializes the driver and drives the data line low.
    ///
    /// IMPORTANT! `T` has to match the clock the controller actually runs
    /// at. This can not be checked; a wrong profile produces wrong colors
    /// or a strip that does not react at all.
    pub fn init(mut pin: PIN, delay: D) -> Result<Self, Ws2812InitError> {
        #[allow(clippy::let_unit_value)]
        let () = Self::TIMING_VALID;

        log::debug!("Initializing WS2812 bit-bang driver.");
        log::debug!("    Clock: {} Hz", T::CLOCK_HZ);
        log::debug!(
            "    Bit: {} ('0') or {} ('1') of {} cycles high",
            T::ZERO_HIGH,
            T::ONE_HIGH,
            T::PERIOD
        );
        log::debug!("    Edge overhead: {} cycles", T::EDGE_OVERHEAD);
        log::debug!("    Reset: {} us", T::RESET_US);

        pin.set_low()
            .map_err(|e| errors::IdleLevelSnafu { kind: e.kind() }.build())?;

        Ok(Self {
            pin,
            delay,
            _profile: PhantomData,
        })
    }

    /// Gives back the pin and the delay.
    pub fn release(self) -> (PIN, D) {
        (self.pin, self.delay)
    }

    /// Writes the first `count` colors to the LED strip.
    ///
    /// `count` may be smaller than the strip; the remaining LEDs keep
    /// what they show.
    pub fn write(&mut self, colors: &[Color], count: usize) -> Result<(), Ws2812WriteError> {
        ensure!(
            count <= colors.len(),
            errors::CountExceedsBufferSnafu {
                count,
                available: colors.len(),
            }
        );

        self.write_pixels(&colors[..count])
    }

    /// Writes a whole buffer to the LED strip.
    pub fn write_strip<const N: usize>(
        &mut self,
        strip: &LedStrip<N>,
    ) -> Result<(), Ws2812WriteError> {
        self.write_pixels(strip)
    }

    /// Writes pixels to the LED strip.
    ///
    /// Interrupts are disabled while the bits are sent. For a 20 MHz
    /// controller this takes about 31 us per LED; interrupt based code
    /// running next to this driver has to cope with that.
    ///
    /// The pixels are produced lazily between two bits, so the iterator
    /// must be cheap. Prefer writing from a prepared buffer.
    ///
    /// Once started, the frame is always sent to the end, followed by the
    /// reset hold. If the pin failed on the way, the first failure is
    /// returned afterwards.
    pub fn write_pixels<I>(&mut self, pixels: I) -> Result<(), Ws2812WriteError>
    where
        I: IntoIterator,
        I::Item: Pixel,
    {
        let pixels = pixels.into_iter();
        log::trace!("Writing {} LEDs.", pixels.size_hint().0);

        self.pin
            .set_low()
            .map_err(|e| errors::PinSnafu { kind: e.kind() }.build())?;

        let mut first_error = None;
        critical_section::with(|_| {
            for pixel in pixels {
                for byte in pixel.into_ws2812_bytes() {
                    self.send_byte(byte, &mut first_error);
                }
            }
        });

        // Latch
        self.delay.delay_cycles(T::reset_cycles());

        match first_error {
            None => Ok(()),
            Some(kind) => errors::PinSnafu { kind }.fail(),
        }
    }

    #[inline(always)]
    fn send_byte(&mut self, byte: u8, first_error: &mut Option<ErrorKind>) {
        for bit in (0..8).rev() {
            self.send_bit(byte & (1 << bit) != 0, first_error);
        }
    }

    #[inline(always)]
    fn send_bit(&mut self, bit: bool, first_error: &mut Option<ErrorKind>) {
        let mut check = |result: Result<(), PIN::Error>| {
            if let Err(e) = result {
                first_error.get_or_insert(e.kind());
            }
        };

        check(self.pin.set_high());
        self.delay.delay_cycles(Self::LEAD);
        if !bit {
            check(self.pin.set_low());
        }
        self.delay.delay_cycles(Self::MID);
        if bit {
            check(self.pin.set_low());
        }
        self.delay.delay_cycles(Self::TAIL);
    }
}

use core::marker::PhantomData;

use embedded_hal::delay::DelayNs;

use crate::timing::TimingProfile;

/// A busy-wait for a number of controller cycles.
///
/// Called from inside the bit loop with interrupts masked, so
/// implementations must not block on anything but the clock and should be
/// `#[inline(always)]`. Waiting slightly longer is tolerated by the strip,
/// waiting shorter is not.
pub trait CycleDelay {
    /// Spins for at least `cycles` controller cycles.
    fn delay_cycles(&mut self, cycles: u32);
}

impl<D> CycleDelay for &mut D
where
    D: CycleDelay + ?Sized,
{
    #[inline(always)]
    fn delay_cycles(&mut self, cycles: u32) {
        (**self).delay_cycles(cycles);
    }
}

/// Spins through [cortex_m::asm::delay].
#[cfg(feature = "cortex-m")]
#[cfg_attr(docsrs, doc(cfg(feature = "cortex-m")))]
#[derive(Clone, Copy, Debug, Default)]
pub struct CortexMDelay;

#[cfg(feature = "cortex-m")]
impl CycleDelay for CortexMDelay {
    #[inline(always)]
    fn delay_cycles(&mut self, cycles: u32) {
        if cycles > 0 {
            cortex_m::asm::delay(cycles);
        }
    }
}

/// Uses a nanosecond delay to wait for cycles of the clock given by `T`.
///
/// Only suitable if the wrapped delay is accurate to a few tens of
/// nanoseconds, which most timer based delays are not.
pub struct NsDelay<D, T> {
    delay: D,
    _profile: PhantomData<T>,
}

impl<D, T> NsDelay<D, T>
where
    T: TimingProfile,
{
    /// Wraps a nanosecond delay.
    pub fn new(delay: D) -> Self {
        Self {
            delay,
            _profile: PhantomData,
        }
    }

    /// Returns the wrapped delay.
    pub fn into_inner(self) -> D {
        self.delay
    }

    pub(crate) fn cycles_to_ns(cycles: u32) -> u32 {
        let ns = u64::from(cycles) * 1_000_000_000 / u64::from(T::CLOCK_HZ);
        ns.try_into().unwrap_or(u32::MAX)
    }
}

impl<D, T> CycleDelay for NsDelay<D, T>
where
    D: DelayNs,
    T: TimingProfile,
{
    #[inline(always)]
    fn delay_cycles(&mut self, cycles: u32) {
        self.delay.delay_ns(Self::cycles_to_ns(cycles));
    }
}

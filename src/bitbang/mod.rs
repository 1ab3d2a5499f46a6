use core::marker::PhantomData;

mod driver;

/// A WS2812 Neopixel LED Strip driver that bit-bangs a single GPIO pin
///
/// - `PIN` is the data line, already configured as a push-pull output.
/// - `D` busy-waits for a number of controller cycles.
/// - `T` is the [TimingProfile](crate::timing::TimingProfile) of the clock the
///   controller runs at.
pub struct Ws2812<PIN, D, T> {
    pin: PIN,
    delay: D,
    _profile: PhantomData<T>,
}

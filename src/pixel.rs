/// A pixel that can be rendered with this library.
pub trait Pixel {
    /// Return the three raw bytes that should be sent to the LED strip,
    /// in transmission order.
    ///
    /// IMPORTANT: Be aware that WS2812 strips are GRB encoded.
    fn into_ws2812_bytes(self) -> [u8; 3];
}

/// Raw RGB data.
impl Pixel for [u8; 3] {
    fn into_ws2812_bytes(self) -> [u8; 3] {
        let [red, green, blue] = self;
        [green, red, blue]
    }
}

/// Raw RGB data as a tuple.
impl Pixel for (u8, u8, u8) {
    fn into_ws2812_bytes(self) -> [u8; 3] {
        let (red, green, blue) = self;
        [green, red, blue]
    }
}

/// 8-bit Linear sRGB, which is the color space
/// most NeoPixel strips are in. This is also [Color](crate::Color).
///
/// Be aware that this differs from normal,
/// gamma-corrected sRGB. A conversion has to take place.
///
/// More info can be found in the documentation of the
/// [palette] crate.
impl Pixel for palette::LinSrgb<u8> {
    fn into_ws2812_bytes(self) -> [u8; 3] {
        [self.green, self.red, self.blue]
    }
}

impl<'a, P> Pixel for &'a P
where
    P: Pixel + Clone,
{
    fn into_ws2812_bytes(self) -> [u8; 3] {
        self.clone().into_ws2812_bytes()
    }
}

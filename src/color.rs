/// A single LED color.
///
/// The channels are raw 8-bit intensities, exactly what the LED receives.
/// This is linear sRGB; gamma-corrected sRGB values need a conversion first,
/// see the [palette] crate.
pub type Color = palette::LinSrgb<u8>;

/// Exclusive upper bound of the hue accepted by [hsv_to_color].
///
/// The color wheel has six sectors of 256 steps each.
pub const HUE_MAX: u16 = 6 * 256;

/// Converts hue/saturation/value into a [Color].
///
/// `hue` must be below [HUE_MAX], `saturation` and `value` at most 255.
/// Returns `None` for anything outside that range.
///
/// Integer only. The divisions truncate and happen in a fixed order,
/// so the result matches the reference hardware bit for bit.
pub fn hsv_to_color(hue: u16, saturation: u16, value: u16) -> Option<Color> {
    if hue >= HUE_MAX || saturation > 255 || value > 255 {
        return None;
    }

    // Fits in a u8, checked above.
    let value_u8 = value as u8;

    if saturation == 0 {
        return Some(Color::new(value_u8, value_u8, value_u8));
    }

    let value = u32::from(value);
    let saturation = u32::from(saturation);
    let sector = hue / 256;
    let rem = u32::from(hue % 256);

    // All of these are <= value, so the `as u8` casts never truncate.
    let max = value_u8;
    let min = ((value * (255 - saturation)) / 255) as u8;
    let inc = ((value * ((saturation * rem) / 255)) / 255) as u8;
    let dec = ((value * ((saturation * (255 - rem)) / 255)) / 255) as u8;

    let (red, green, blue) = match sector {
        0 => (max, inc, min),
        1 => (dec, max, min),
        2 => (min, max, inc),
        3 => (min, dec, max),
        4 => (inc, min, max),
        _ => (max, min, dec),
    };

    Some(Color::new(red, green, blue))
}

use core::ops::{Index, IndexMut};

use crate::color::{hsv_to_color, Color};

const BLACK: Color = Color::new(0, 0, 0);

/// The color buffer of a strip with `N` LEDs.
///
/// Position 0 is the LED closest to the controller.
///
/// All position arguments are checked; an out of range position panics.
#[derive(Clone, Debug, PartialEq)]
pub struct LedStrip<const N: usize> {
    colors: [Color; N],
}

impl<const N: usize> LedStrip<N> {
    /// Creates a new buffer with all LEDs off.
    pub const fn new() -> Self {
        Self { colors: [BLACK; N] }
    }

    /// The amount of LEDs that fit into this buffer
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Turns every LED off.
    pub fn clear(&mut self) {
        self.colors.fill(BLACK);
    }

    /// Stores a color verbatim.
    pub fn set_rgb(&mut self, position: usize, red: u8, green: u8, blue: u8) {
        self[position] = Color::new(red, green, blue);
    }

    /// Stores a color given as hue/saturation/value.
    ///
    /// See [hsv_to_color] for the accepted ranges. Input outside of them
    /// is dropped and leaves the LED untouched.
    pub fn set_hsv(&mut self, position: usize, hue: u16, saturation: u16, value: u16) {
        Self::check_position(position);

        match hsv_to_color(hue, saturation, value) {
            Some(color) => self.colors[position] = color,
            None => log::trace!(
                "Ignoring out of range HSV ({}, {}, {}) for LED {}",
                hue,
                saturation,
                value,
                position
            ),
        }
    }

    /// The color at `position`.
    pub fn get(&self, position: usize) -> Color {
        self[position]
    }

    /// All colors, in chain order.
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    /// All colors, mutably, in chain order.
    pub fn as_mut_slice(&mut self) -> &mut [Color] {
        &mut self.colors
    }

    /// Iterates over all colors in chain order.
    pub fn iter(&self) -> core::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    fn check_position(position: usize) {
        assert!(
            position < N,
            "LED position {} is out of range for a strip of {} LEDs",
            position,
            N
        );
    }
}

impl<const N: usize> Default for LedStrip<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Index<usize> for LedStrip<N> {
    type Output = Color;

    fn index(&self, position: usize) -> &Color {
        Self::check_position(position);
        &self.colors[position]
    }
}

impl<const N: usize> IndexMut<usize> for LedStrip<N> {
    fn index_mut(&mut self, position: usize) -> &mut Color {
        Self::check_position(position);
        &mut self.colors[position]
    }
}

impl<'a, const N: usize> IntoIterator for &'a LedStrip<N> {
    type Item = &'a Color;
    type IntoIter = core::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

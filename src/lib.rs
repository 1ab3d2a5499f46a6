#![no_std]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Bit-banging WS2812 driver
pub mod bitbang;
/// Busy-wait primitives used by the bit loop
pub mod delay;
/// Per-frequency pulse timings
pub mod timing;

mod color;
mod errors;
mod pixel;
mod strip;

pub use bitbang::Ws2812;
pub use color::{hsv_to_color, Color, HUE_MAX};
pub use errors::{Ws2812InitError, Ws2812WriteError};
pub use pixel::Pixel;
pub use strip::LedStrip;

use embedded_hal::digital::ErrorKind;
use snafu::prelude::*;

/// Errors of the [Ws2812::init](crate::Ws2812::init) function
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Ws2812InitError {
    /// The data pin could not be driven to its idle (low) level.
    #[snafu(display("unable to drive the data line low: {kind:?}"))]
    IdleLevel {
        /// What the pin reported.
        kind: ErrorKind,
    },
}

/// Errors of the [Ws2812](crate::Ws2812) write functions
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Ws2812WriteError {
    /// More colors were requested than the buffer holds.
    ///
    /// Nothing was sent.
    #[snafu(display("requested {count} colors, but only {available} are available"))]
    CountExceedsBuffer {
        /// The requested amount of colors.
        count: usize,
        /// The length of the supplied buffer.
        available: usize,
    },
    /// The data pin reported an error.
    ///
    /// A frame in progress is always sent to the end, so the strip may
    /// show garbage until the next successful write.
    #[snafu(display("the data pin failed: {kind:?}"))]
    Pin {
        /// What the pin reported first.
        kind: ErrorKind,
    },
}

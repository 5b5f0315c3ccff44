use thiserror::Error;

use crate::Region;

/// Error type for automatic cropping operations
///
/// Degenerate images (empty, tiny or uniform) are not errors: they produce
/// an uncropped result. Only arguments the caller can get wrong are reported.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AutocropError {
    /// The energy threshold is not a finite value in `[0, 1]`
    ///
    /// The threshold is a fraction of the peak edge energy of the image,
    /// so anything outside the unit interval has no meaning.
    #[error("Energy threshold {0} is outside the range [0, 1]")]
    InvalidThreshold(f32),

    /// The requested region does not lie within the image
    ///
    /// Energy can only be computed for pixels that exist in the buffer.
    #[error("Region {region:?} does not fit within a {width}x{height} image")]
    RegionOutOfBounds {
        /// The rejected region
        region: Region,
        /// Width of the image
        width: u32,
        /// Height of the image
        height: u32,
    },
}

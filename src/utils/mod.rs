//! Internal utility functions for imageops-autocrop.
//!
//! This module contains argument validation and numeric helpers shared by
//! the energy and bounds computations.

use image::Primitive;

use crate::error::AutocropError;
use crate::Region;

/// Scales an alpha sample to the `[0, 1]` fraction used to weight energy.
///
/// `max_value` is the fully opaque value of the subpixel type, looked up once
/// per image and passed in for every sample of the luminance plane.
#[inline]
pub fn normalize_alpha_with_max<S>(alpha: S, max_value: f32) -> f32
where
    S: Into<f32> + Primitive,
{
    alpha.into() / max_value
}

/// Validates that an energy threshold is a finite value in `[0, 1]`.
///
/// # Returns
///
/// The threshold itself if it is valid, otherwise an error
pub fn validate_threshold(threshold: f32) -> Result<f32, AutocropError> {
    if threshold.is_finite() && (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(AutocropError::InvalidThreshold(threshold))
    }
}

/// Validates that a region lies within an image of the given dimensions.
///
/// Empty regions are accepted as long as their corners are inside the image.
pub fn validate_region(region: Region, width: u32, height: u32) -> Result<(), AutocropError> {
    if region.fits_within(width, height) {
        Ok(())
    } else {
        Err(AutocropError::RegionOutOfBounds {
            region,
            width,
            height,
        })
    }
}

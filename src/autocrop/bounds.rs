use image::{imageops, Pixel};
use log::{debug, trace};

use crate::autocrop::boundary::{find_trim, Trim};
use crate::autocrop::config::AutocropConfig;
use crate::autocrop::energy::ComputeEnergy;
use crate::autocrop::region::Region;
use crate::error::AutocropError;
use crate::utils::validate_threshold;
use crate::Image;

/// Width of the image border whose pixels lack a full 3x3 neighborhood.
const KERNEL_BORDER: u32 = 1;

/// Trait providing energy-based automatic cropping
///
/// Borders whose edge energy never reaches `threshold` times the peak energy
/// of the image are trimmed away. The energy of every pixel is computed once
/// and summed into column and row projections; the columns decide the left
/// and right edges of the crop, the rows decide the top and bottom edges.
pub trait AutoCrop {
    /// Cropped image type
    type Output;

    /// Computes the crop bounds with the default [`AutocropConfig`].
    ///
    /// # Arguments
    ///
    /// * `threshold` - Fraction of the peak energy, in `[0, 1]`, below which
    ///   border columns and rows are cropped. `0.0` crops nothing, values
    ///   near `1.0` keep little more than the strongest edge.
    ///
    /// # Returns
    ///
    /// The retained region of the image. Images smaller than 3x3, and
    /// images without any edge energy, return their full bounds.
    ///
    /// # Errors
    ///
    /// * `AutocropError::InvalidThreshold` - `threshold` is not in `[0, 1]`
    ///
    /// # Examples
    ///
    /// ```
    /// use image::Rgba;
    /// use imageops_autocrop::{AutoCrop, Image, Region};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let image: Image<Rgba<u8>> = Image::from_fn(30, 30, |x, y| {
    ///     if (10..20).contains(&x) && (10..20).contains(&y) {
    ///         Rgba([228, 0, 140, 255])
    ///     } else {
    ///         Rgba([255, 255, 255, 255])
    ///     }
    /// });
    ///
    /// assert_eq!(image.bounds_for_threshold(0.01)?, Region::new(10, 10, 20, 20));
    /// # Ok(())
    /// # }
    /// ```
    fn bounds_for_threshold(&self, threshold: f32) -> Result<Region, AutocropError> {
        self.bounds_for_threshold_with(threshold, &AutocropConfig::default())
    }

    /// Computes the crop bounds with an explicit configuration.
    ///
    /// # Errors
    ///
    /// * `AutocropError::InvalidThreshold` - `threshold` is not in `[0, 1]`
    fn bounds_for_threshold_with(
        &self,
        threshold: f32,
        config: &AutocropConfig,
    ) -> Result<Region, AutocropError>;

    /// Copies the region returned by [`AutoCrop::bounds_for_threshold`] into
    /// a new image.
    ///
    /// # Errors
    ///
    /// * `AutocropError::InvalidThreshold` - `threshold` is not in `[0, 1]`
    fn crop_to_threshold(&self, threshold: f32) -> Result<Self::Output, AutocropError> {
        self.crop_to_threshold_with(threshold, &AutocropConfig::default())
    }

    /// Copies the region returned by [`AutoCrop::bounds_for_threshold_with`]
    /// into a new image.
    ///
    /// # Errors
    ///
    /// * `AutocropError::InvalidThreshold` - `threshold` is not in `[0, 1]`
    fn crop_to_threshold_with(
        &self,
        threshold: f32,
        config: &AutocropConfig,
    ) -> Result<Self::Output, AutocropError>;
}

impl<P> AutoCrop for Image<P>
where
    P: Pixel + 'static,
    f32: From<P::Subpixel>,
{
    type Output = Self;

    fn bounds_for_threshold_with(
        &self,
        threshold: f32,
        config: &AutocropConfig,
    ) -> Result<Region, AutocropError> {
        let threshold = validate_threshold(threshold)?;
        let (width, height) = self.dimensions();
        let bounds = Region::from_dimensions(width, height);
        let interior = bounds.inset(KERNEL_BORDER);

        if interior.is_empty() || threshold == 0.0 {
            debug!(
                "skipping autocrop of {}x{} image at threshold {}",
                width, height, threshold
            );
            return Ok(bounds);
        }

        let projections = self.energy_projections(interior, config)?;
        let margin = config.margin as usize;
        let horizontal = find_trim(&projections.columns, threshold, margin);
        let vertical = find_trim(&projections.rows, threshold, margin);
        trace!("column trim {:?}, row trim {:?}", horizontal, vertical);

        let crop = apply_trims(bounds, horizontal, vertical);
        debug!(
            "autocrop of {}x{} image at threshold {}: {:?}",
            width, height, threshold, crop
        );
        Ok(crop)
    }

    fn crop_to_threshold_with(
        &self,
        threshold: f32,
        config: &AutocropConfig,
    ) -> Result<Self::Output, AutocropError> {
        let crop = self.bounds_for_threshold_with(threshold, config)?;
        let (width, height) = crop.dimensions();
        Ok(imageops::crop_imm(self, crop.min_x, crop.min_y, width, height).to_image())
    }
}

/// Maps interior projection trims onto the edges of the full image.
///
/// A zero trim leaves that side untouched, border pixel included. It only
/// comes from a projection without usable energy or from a zero margin.
fn apply_trims(bounds: Region, horizontal: Trim, vertical: Trim) -> Region {
    let edge = |trim: usize| {
        if trim == 0 {
            0
        } else {
            KERNEL_BORDER + trim as u32
        }
    };

    Region::new(
        bounds.min_x + edge(horizontal.leading),
        bounds.min_y + edge(vertical.leading),
        bounds.max_x - edge(horizontal.trailing),
        bounds.max_y - edge(vertical.trailing),
    )
}

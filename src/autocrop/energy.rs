use image::{ImageBuffer, Luma, LumaA, Pixel, Primitive, Rgba};
#[cfg(not(feature = "rayon"))]
use itertools::iproduct;
use log::trace;

use crate::autocrop::config::AutocropConfig;
use crate::autocrop::region::Region;
use crate::error::AutocropError;
use crate::utils::{normalize_alpha_with_max, validate_region};
use crate::Image;

/// Per-column and per-row sums of edge energy over a region
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnergyProjections {
    /// Total energy of each column, one entry per column of the region
    pub columns: Vec<f32>,
    /// Total energy of each row, one entry per row of the region
    pub rows: Vec<f32>,
}

impl EnergyProjections {
    /// Total energy of the region.
    pub fn total(&self) -> f32 {
        self.columns.iter().sum()
    }
}

/// Trait providing the edge energy of image pixels
///
/// The energy of a pixel is the absolute response of a 3x3 Sobel-like kernel
/// over the luminance of its eight neighbors (the pixel itself is excluded),
/// scaled by the pixel's own alpha fraction:
///
/// ```text
/// horizontal = (NW + W + SW) - (NE + E + SE)
/// vertical   = (NW + N + NE) - (SW + S + SE)
/// energy     = (|horizontal| + |vertical|) * alpha / max_alpha
/// ```
///
/// Neighbors outside the image are clamped to the nearest edge pixel.
pub trait ComputeEnergy {
    /// Sums the energy of every pixel in `region` into column and row
    /// projections, evaluating each pixel once.
    ///
    /// # Arguments
    ///
    /// * `region` - Area of the image to evaluate
    /// * `config` - Luminance weights and alpha policy
    ///
    /// # Errors
    ///
    /// * `AutocropError::RegionOutOfBounds` - `region` does not fit the image
    ///
    /// # Examples
    ///
    /// ```
    /// use image::Rgba;
    /// use imageops_autocrop::{AutocropConfig, ComputeEnergy, Image, Region};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let image: Image<Rgba<u8>> = Image::from_pixel(8, 6, Rgba([20, 40, 60, 255]));
    /// let config = AutocropConfig::default();
    /// let projections = image.energy_projections(Region::new(1, 1, 7, 5), &config)?;
    /// assert_eq!(projections.columns.len(), 6);
    /// assert_eq!(projections.rows.len(), 4);
    /// assert_eq!(projections.total(), 0.0);
    /// # Ok(())
    /// # }
    /// ```
    fn energy_projections(
        &self,
        region: Region,
        config: &AutocropConfig,
    ) -> Result<EnergyProjections, AutocropError>;

    /// Computes the energy of every pixel in `region` as an image of the
    /// region's size, e.g. to visualize what the crop reacts to.
    ///
    /// # Errors
    ///
    /// * `AutocropError::RegionOutOfBounds` - `region` does not fit the image
    fn energy_map(
        &self,
        region: Region,
        config: &AutocropConfig,
    ) -> Result<Image<Luma<f32>>, AutocropError>;
}

impl<P> ComputeEnergy for Image<P>
where
    P: Pixel,
    f32: From<P::Subpixel>,
{
    fn energy_projections(
        &self,
        region: Region,
        config: &AutocropConfig,
    ) -> Result<EnergyProjections, AutocropError> {
        let (width, height) = self.dimensions();
        validate_region(region, width, height)?;

        if region.is_empty() {
            return Ok(EnergyProjections::default());
        }

        let plane = LuminancePlane::sample(self, region, config);
        let projections = plane.project();
        trace!(
            "energy projections over {:?}: total {}",
            region,
            projections.total()
        );
        Ok(projections)
    }

    fn energy_map(
        &self,
        region: Region,
        config: &AutocropConfig,
    ) -> Result<Image<Luma<f32>>, AutocropError> {
        let (width, height) = self.dimensions();
        validate_region(region, width, height)?;

        if region.is_empty() {
            return Ok(ImageBuffer::new(region.width(), region.height()));
        }

        let plane = LuminancePlane::sample(self, region, config);
        Ok(ImageBuffer::from_fn(region.width(), region.height(), |x, y| {
            Luma([plane.energy_at(plane.inner.min_x + x, plane.inner.min_y + y)])
        }))
    }
}

/// Luminance and alpha fraction of the region grown by the kernel radius
///
/// `inner` is the requested region in plane coordinates.
struct LuminancePlane {
    samples: Image<LumaA<f32>>,
    inner: Region,
}

impl LuminancePlane {
    fn sample<P>(image: &Image<P>, region: Region, config: &AutocropConfig) -> Self
    where
        P: Pixel,
        f32: From<P::Subpixel>,
    {
        let (width, height) = image.dimensions();
        let area = region.expand_within(1, width, height);
        let max_value = f32::from(<P::Subpixel as Primitive>::DEFAULT_MAX_VALUE);

        let samples = ImageBuffer::from_fn(area.width(), area.height(), |x, y| {
            let Rgba([red, green, blue, alpha]) =
                image.get_pixel(area.min_x + x, area.min_y + y).to_rgba();
            let luminance = config.sample_luminance(
                f32::from(red),
                f32::from(green),
                f32::from(blue),
                f32::from(alpha),
            );
            LumaA([luminance, normalize_alpha_with_max(alpha, max_value)])
        });

        let inner = Region::new(
            region.min_x - area.min_x,
            region.min_y - area.min_y,
            region.max_x - area.min_x,
            region.max_y - area.min_y,
        );

        Self { samples, inner }
    }

    /// Energy of the sample at plane coordinates `(x, y)`.
    #[inline]
    fn energy_at(&self, x: u32, y: u32) -> f32 {
        let (width, height) = self.samples.dimensions();
        let left = x.saturating_sub(1);
        let right = (x + 1).min(width - 1);
        let up = y.saturating_sub(1);
        let down = (y + 1).min(height - 1);
        let luminance = |x: u32, y: u32| self.samples.get_pixel(x, y)[0];

        let north_west = luminance(left, up);
        let north = luminance(x, up);
        let north_east = luminance(right, up);
        let west = luminance(left, y);
        let east = luminance(right, y);
        let south_west = luminance(left, down);
        let south = luminance(x, down);
        let south_east = luminance(right, down);

        let horizontal = (north_west + west + south_west) - (north_east + east + south_east);
        let vertical = (north_west + north + north_east) - (south_west + south + south_east);

        (horizontal.abs() + vertical.abs()) * self.samples.get_pixel(x, y)[1]
    }

    #[cfg(not(feature = "rayon"))]
    fn project(&self) -> EnergyProjections {
        let inner = self.inner;
        let mut columns = vec![0.0; inner.width() as usize];
        let mut rows = vec![0.0; inner.height() as usize];

        iproduct!(0..inner.height(), 0..inner.width()).for_each(|(row, column)| {
            let energy = self.energy_at(inner.min_x + column, inner.min_y + row);
            columns[column as usize] += energy;
            rows[row as usize] += energy;
        });

        EnergyProjections { columns, rows }
    }

    #[cfg(feature = "rayon")]
    fn project(&self) -> EnergyProjections {
        use rayon::prelude::*;

        let inner = self.inner;
        let width = inner.width() as usize;

        let (columns, row_totals) = (0..inner.height())
            .into_par_iter()
            .fold(
                || (vec![0.0f32; width], Vec::new()),
                |(mut columns, mut row_totals), row| {
                    let mut total = 0.0;
                    for (column, energy) in columns.iter_mut().enumerate() {
                        let value =
                            self.energy_at(inner.min_x + column as u32, inner.min_y + row);
                        *energy += value;
                        total += value;
                    }
                    row_totals.push((row, total));
                    (columns, row_totals)
                },
            )
            .reduce(
                || (vec![0.0f32; width], Vec::new()),
                |(mut columns, mut row_totals), (other_columns, other_rows)| {
                    columns
                        .iter_mut()
                        .zip(other_columns)
                        .for_each(|(energy, other)| *energy += other);
                    row_totals.extend(other_rows);
                    (columns, row_totals)
                },
            );

        let mut rows = vec![0.0; inner.height() as usize];
        for (row, total) in row_totals {
            rows[row as usize] = total;
        }

        EnergyProjections { columns, rows }
    }
}

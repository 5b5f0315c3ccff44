mod autocrop;
mod error;
#[cfg(test)]
mod test_utils;
mod utils;

use image::{ImageBuffer, Pixel};

pub use autocrop::boundary::{find_max_energy, find_trim, Trim};
pub use autocrop::bounds::AutoCrop;
pub use autocrop::config::{AlphaWeighting, AutocropConfig, LuminanceWeights, DEFAULT_MARGIN};
pub use autocrop::energy::{ComputeEnergy, EnergyProjections};
pub use autocrop::region::Region;
pub use error::AutocropError;

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

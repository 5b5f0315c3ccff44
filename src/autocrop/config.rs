/// Number of pixels the crop steps past a detected high-energy edge.
///
/// A step edge produces gradient energy on the last background pixel, so
/// cropping exactly at the detected position would keep a one pixel halo.
pub const DEFAULT_MARGIN: u32 = 1;

/// Perceptual weights applied to the red, green and blue channels when
/// reducing a pixel to a single luminance value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuminanceWeights {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl LuminanceWeights {
    /// ITU-R BT.709 coefficients (sRGB primaries)
    pub const REC_709: Self = Self::new(0.2126, 0.7152, 0.0722);

    /// ITU-R BT.601 coefficients
    pub const REC_601: Self = Self::new(0.299, 0.587, 0.114);

    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    #[inline]
    pub fn luminance(&self, red: f32, green: f32, blue: f32) -> f32 {
        self.red * red + self.green * green + self.blue * blue
    }
}

impl Default for LuminanceWeights {
    fn default() -> Self {
        Self::REC_709
    }
}

/// How opacity enters the energy computation
///
/// Under both policies the energy of a pixel is scaled by its own alpha
/// fraction, so fully transparent pixels never contribute energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphaWeighting {
    /// Alpha is added to the luminance of every sampled neighbor
    ///
    /// A transition between transparent and opaque pixels of the same color
    /// still registers as an edge.
    #[default]
    Additive,

    /// Luminance is computed from color alone
    ///
    /// Only color contrast between opaque pixels produces energy.
    Multiplicative,
}

/// Tuning parameters for energy computation and boundary search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutocropConfig {
    /// Safety margin in pixels, see [`DEFAULT_MARGIN`]
    pub margin: u32,
    /// Channel weights for luminance
    pub luminance_weights: LuminanceWeights,
    /// Opacity policy
    pub alpha_weighting: AlphaWeighting,
}

impl AutocropConfig {
    pub const fn new() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            luminance_weights: LuminanceWeights::REC_709,
            alpha_weighting: AlphaWeighting::Additive,
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_luminance_weights(mut self, luminance_weights: LuminanceWeights) -> Self {
        self.luminance_weights = luminance_weights;
        self
    }

    #[must_use]
    pub fn with_alpha_weighting(mut self, alpha_weighting: AlphaWeighting) -> Self {
        self.alpha_weighting = alpha_weighting;
        self
    }

    /// Luminance of one sample as seen by the edge kernel.
    ///
    /// `alpha` is in the same units as the color channels.
    #[inline]
    pub(crate) fn sample_luminance(&self, red: f32, green: f32, blue: f32, alpha: f32) -> f32 {
        let luminance = self.luminance_weights.luminance(red, green, blue);
        match self.alpha_weighting {
            AlphaWeighting::Additive => luminance + alpha,
            AlphaWeighting::Multiplicative => luminance,
        }
    }
}

impl Default for AutocropConfig {
    fn default() -> Self {
        Self::new()
    }
}

use imageproc::rect::Rect;

/// An axis-aligned rectangle of pixels
///
/// The minimum corner is inclusive and the maximum corner is exclusive, so a
/// region covering a whole `width` x `height` image is
/// `Region::new(0, 0, width, height)`. A region whose width or height is zero
/// is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// Left edge (inclusive)
    pub min_x: u32,
    /// Top edge (inclusive)
    pub min_y: u32,
    /// Right edge (exclusive)
    pub max_x: u32,
    /// Bottom edge (exclusive)
    pub max_y: u32,
}

impl Region {
    /// Creates a region from its inclusive minimum and exclusive maximum corners.
    pub const fn new(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates a region covering a whole image of the given dimensions.
    pub const fn from_dimensions(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn width(&self) -> u32 {
        self.max_x.saturating_sub(self.min_x)
    }

    pub const fn height(&self) -> u32 {
        self.max_y.saturating_sub(self.min_y)
    }

    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub const fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Returns `true` if `other` lies entirely within this region.
    ///
    /// An empty region is contained in every region.
    pub const fn contains(&self, other: &Self) -> bool {
        other.is_empty()
            || (other.min_x >= self.min_x
                && other.min_y >= self.min_y
                && other.max_x <= self.max_x
                && other.max_y <= self.max_y)
    }

    /// Returns `true` if every corner of the region lies within a
    /// `width` x `height` image. Unlike [`Region::contains`], an empty region
    /// positioned outside the image does not fit.
    pub const fn fits_within(&self, width: u32, height: u32) -> bool {
        self.min_x <= width && self.max_x <= width && self.min_y <= height && self.max_y <= height
    }

    /// Shrinks every edge of the region by `amount` pixels.
    ///
    /// When the region is too small to shrink, an empty region positioned at
    /// the original minimum corner is returned.
    pub fn inset(&self, amount: u32) -> Self {
        let shrunk = Self::new(
            self.min_x.saturating_add(amount),
            self.min_y.saturating_add(amount),
            self.max_x.saturating_sub(amount),
            self.max_y.saturating_sub(amount),
        );

        if shrunk.is_empty() {
            Self::new(self.min_x, self.min_y, self.min_x, self.min_y)
        } else {
            shrunk
        }
    }

    /// Grows every edge of the region by `amount` pixels, clamped to a
    /// `width` x `height` image.
    pub fn expand_within(&self, amount: u32, width: u32, height: u32) -> Self {
        Self::new(
            self.min_x.saturating_sub(amount),
            self.min_y.saturating_sub(amount),
            self.max_x.saturating_add(amount).min(width),
            self.max_y.saturating_add(amount).min(height),
        )
    }

    /// Converts the region into an `imageproc` rectangle, e.g. for drawing
    /// the crop outline onto a preview.
    ///
    /// Returns `None` for empty regions, which `Rect` cannot represent.
    pub fn to_rect(&self) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }

        let left = i32::try_from(self.min_x).ok()?;
        let top = i32::try_from(self.min_y).ok()?;
        Some(Rect::at(left, top).of_size(self.width(), self.height()))
    }
}

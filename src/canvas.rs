//! The shared canvas grid and its coordinates.

use rand::Rng;

use crate::color::Color;

/// A single cell coordinate on a [`Canvas`].
///
/// `(0, 0)` is the top-left corner; `x` grows rightward and `y` grows
/// downward, matching image conventions.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Column index.
    pub x: u32,
    /// Row index.
    pub y: u32,
}

impl Pixel {
    /// Create a pixel at `(x, y)`.
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The four 4-adjacent neighbor candidates (left, right, up, down).
    ///
    /// Coordinate arithmetic wraps at zero, which throws the wrapped
    /// candidate far outside any real canvas; bounds checks reject it.
    #[inline]
    #[must_use]
    pub const fn neighbors(self) -> [Self; 4] {
        [
            Self::new(self.x.wrapping_sub(1), self.y),
            Self::new(self.x.wrapping_add(1), self.y),
            Self::new(self.x, self.y.wrapping_sub(1)),
            Self::new(self.x, self.y.wrapping_add(1)),
        ]
    }

    /// Draw a uniformly random pixel on a `size`-by-`size` canvas.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, size: u32) -> Self {
        Self::new(rng.gen_range(0..size), rng.gen_range(0..size))
    }
}

impl std::fmt::Debug for Pixel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A fixed-size square grid of [`Color`] cells with row-major storage.
///
/// A freshly created canvas is entirely [`Color::WHITE`], the unclaimed
/// sentinel. The canvas itself is not synchronized; concurrent painters
/// share it behind a single mutex so that checking a cell and painting it
/// stay atomic together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    cells: Vec<Color>,
    size: u32,
}

impl Canvas {
    /// Create a blank canvas with `size * size` unclaimed cells.
    #[must_use]
    pub fn new(size: u32) -> Self {
        let cells = vec![Color::WHITE; (size as usize).saturating_mul(size as usize)];
        Self { cells, size }
    }

    /// Edge length in cells.
    #[inline]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub const fn cell_count(&self) -> u64 {
        (self.size as u64) * (self.size as u64)
    }

    /// Whether `pixel` lies on the canvas.
    #[inline]
    pub const fn in_bounds(&self, pixel: Pixel) -> bool {
        pixel.x < self.size && pixel.y < self.size
    }

    /// Flat index for a pixel, or `None` when out of bounds.
    #[inline]
    fn index(&self, pixel: Pixel) -> Option<usize> {
        if self.in_bounds(pixel) {
            Some(pixel.y as usize * self.size as usize + pixel.x as usize)
        } else {
            None
        }
    }

    /// The color at `pixel`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, pixel: Pixel) -> Option<Color> {
        self.index(pixel).map(|i| self.cells[i])
    }

    /// Paint `pixel` with `color`. Out-of-bounds paints are ignored.
    #[inline]
    pub fn set(&mut self, pixel: Pixel, color: Color) {
        if let Some(i) = self.index(pixel) {
            self.cells[i] = color;
        }
    }

    /// Whether `pixel` is on the canvas and still unclaimed.
    #[inline]
    pub fn is_open(&self, pixel: Pixel) -> bool {
        self.get(pixel) == Some(Color::WHITE)
    }

    /// Number of claimed (non-white) cells.
    #[must_use]
    pub fn claimed(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Color::WHITE).count()
    }

    /// Iterate over every `(pixel, color)` pair in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pixel, Color)> + '_ {
        let size = self.size as usize;
        self.cells.iter().enumerate().map(move |(i, &color)| {
            let pixel = Pixel::new((i % size) as u32, (i / size) as u32);
            (pixel, color)
        })
    }

    /// Render the canvas as an RGB image ready for PNG encoding.
    #[must_use]
    pub fn to_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.size, self.size, |x, y| {
            let color = self.get(Pixel::new(x, y)).unwrap_or(Color::WHITE);
            image::Rgb([color.r, color.g, color.b])
        })
    }
}

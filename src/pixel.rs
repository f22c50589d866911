use alloc::vec;
use alloc::vec::Vec;

/// Channels per sample. Graymaps are widened to three equal channels.
pub const CHANNELS: usize = 3;

/// One pixel: R, G, B.
pub type Sample = [u8; CHANNELS];

/// A `width × height` grid of 8-bit RGB samples in row-major order.
///
/// The sample count always equals `width * height`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    samples: Vec<Sample>,
}

impl PixelBuffer {
    /// A zero-filled buffer.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            samples: vec![[0; CHANNELS]; len],
        }
    }

    /// Wrap existing samples. Returns `None` if the length does not match.
    pub fn from_samples(width: u32, height: u32, samples: Vec<Sample>) -> Option<Self> {
        let len = (width as usize).checked_mul(height as usize)?;
        if samples.len() != len {
            return None;
        }
        Some(Self {
            width,
            height,
            samples,
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Sample) -> Self {
        let mut samples = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All samples, row-major.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [Sample] {
        &mut self.samples
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }

    /// One row of samples.
    ///
    /// # Panics
    /// If `y >= height`.
    pub fn row(&self, y: u32) -> &[Sample] {
        assert!(y < self.height, "row {y} out of bounds (height {})", self.height);
        let w = self.width as usize;
        let start = y as usize * w;
        &self.samples[start..start + w]
    }

    /// Sample at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Option<Sample> {
        self.index(x, y).map(|i| self.samples[i])
    }

    /// Sample at `(x, y)`.
    ///
    /// # Panics
    /// If the coordinate is outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Sample {
        match self.index(x, y) {
            Some(i) => self.samples[i],
            None => self.out_of_bounds(x, y),
        }
    }

    /// Mutable sample at `(x, y)`.
    ///
    /// # Panics
    /// If the coordinate is outside the buffer.
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut Sample {
        match self.index(x, y) {
            Some(i) => &mut self.samples[i],
            None => self.out_of_bounds(x, y),
        }
    }

    /// Single channel value at `(x, y)`.
    pub(crate) fn channel(&self, x: u32, y: u32, c: usize) -> u8 {
        self.pixel(x, y)[c]
    }

    pub(crate) fn set_channel(&mut self, x: u32, y: u32, c: usize, value: u8) {
        self.pixel_mut(x, y)[c] = value;
    }

    /// Size of the sample data in bytes.
    pub fn byte_len(&self) -> usize {
        self.samples.len() * CHANNELS
    }

    /// Samples as a flat `R, G, B, R, G, B, ...` byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        self.samples.as_flattened()
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    #[cold]
    fn out_of_bounds(&self, x: u32, y: u32) -> ! {
        panic!(
            "pixel ({x}, {y}) out of bounds for {}x{} buffer",
            self.width, self.height
        )
    }

    /// Samples as typed RGB pixels.
    #[cfg(feature = "rgb")]
    pub fn as_rgb(&self) -> &[rgb::RGB8] {
        use rgb::FromSlice as _;
        self.as_bytes().as_rgb()
    }

    /// Borrow as an [`imgref::ImgRef`] of RGB pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGB8> {
        imgref::ImgRef::new(self.as_rgb(), self.width as usize, self.height as usize)
    }
}

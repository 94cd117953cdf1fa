//! 8-bit single-channel images: a borrowed view used by the tracer and an
//! owned buffer produced by segmentation.
//!
//! Binary masks use 0 for background and 255 for foreground. Any non-zero value
//! counts as foreground and contributes its intensity to region moments.

/// Borrowed row-major 8-bit image.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Build a view after checking that `data` covers `h` rows of `stride` bytes.
    pub fn try_new(w: usize, h: usize, stride: usize, data: &'a [u8]) -> Result<Self, String> {
        let image = Self { w, h, stride, data };
        image.check_layout()?;
        Ok(image)
    }

    /// Tightly packed view (`stride == w`).
    pub fn packed(w: usize, h: usize, data: &'a [u8]) -> Result<Self, String> {
        Self::try_new(w, h, w, data)
    }

    /// Verify the declared dimensions against the backing buffer.
    pub fn check_layout(&self) -> Result<(), String> {
        if self.stride < self.w {
            return Err(format!(
                "Invalid image layout: stride {} is smaller than width {}",
                self.stride, self.w
            ));
        }
        let required = match self.h {
            0 => 0,
            h => (h - 1) * self.stride + self.w,
        };
        if self.data.len() < required {
            return Err(format!(
                "Invalid image layout: {}x{} (stride {}) needs {} bytes, buffer has {}",
                self.w,
                self.h,
                self.stride,
                required,
                self.data.len()
            ));
        }
        Ok(())
    }

    /// Panic on a malformed view. Tracing a mask whose dimensions disagree with
    /// its buffer is a caller bug.
    #[inline]
    pub(crate) fn assert_layout(&self) {
        if let Err(msg) = self.check_layout() {
            panic!("{msg}");
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

/// Owned 8-bit buffer with stride and borrowed view conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned buffer from raw row-major bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, String> {
        if data.len() != width * height {
            return Err(format!(
                "Buffer of {} bytes does not match {}x{} image",
                data.len(),
                width,
                height
            ));
        }
        Ok(Self {
            width,
            height,
            stride: width,
            data,
        })
    }

    /// Zero-filled (all background) buffer.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            stride: width,
            data: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.stride + x] = v;
    }

    /// Fill the half-open rectangle `[x0, x1) × [y0, y1)`, clipped to the image.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, v: u8) {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        for y in y0.min(y1)..y1 {
            let start = y * self.stride;
            self.data[start + x0.min(x1)..start + x1].fill(v);
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Borrow as a read-only `ImageU8` view.
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }
}

impl crate::image::traits::ImageView for GrayImageU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }
}

impl crate::image::traits::ImageViewMut for GrayImageU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let end = start + self.width;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_short_buffer() {
        let data = vec![0u8; 10];
        assert!(ImageU8::try_new(4, 3, 4, &data).is_err());
        assert!(ImageU8::try_new(4, 3, 3, &data).is_err());
        assert!(ImageU8::try_new(4, 2, 5, &data).is_ok());
    }

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut img = GrayImageU8::zeros(4, 4);
        img.fill_rect(2, 3, 10, 10, 255);
        assert_eq!(img.data().iter().filter(|&&v| v == 255).count(), 2);
        assert_eq!(img.get(3, 3), 255);
        assert_eq!(img.get(1, 3), 0);
    }
}

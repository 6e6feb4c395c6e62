/// Wrapping cursor over the downloaded images.
///
/// The index always stays in `0..len`. With no images every move is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance one image, wrapping to the first. Returns whether anything moved.
    pub fn next(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }

    /// Step back one image, wrapping to the last. Returns whether anything moved.
    pub fn previous(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.index = (self.index + self.len - 1) % self.len;
        true
    }
}

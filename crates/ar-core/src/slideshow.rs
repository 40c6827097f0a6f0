use crate::error::CoreError;

/// Fixed, non-empty ring of slides with a cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct Slideshow<T> {
    slides: Vec<T>,
    current: usize,
}

impl<T> Slideshow<T> {
    pub fn new(slides: Vec<T>) -> Result<Self, CoreError> {
        if slides.is_empty() {
            return Err(CoreError::EmptySlideshow);
        }
        Ok(Self { slides, current: 0 })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn current(&self) -> &T {
        &self.slides[self.current]
    }

    pub fn slides(&self) -> &[T] {
        &self.slides
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.slides.len();
        self.current
    }

    pub fn prev(&mut self) -> usize {
        let len = self.slides.len();
        self.current = (self.current + len - 1) % len;
        self.current
    }
}

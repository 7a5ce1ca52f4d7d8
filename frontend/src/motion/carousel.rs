/// Index into a ring of slides. Next and previous wrap around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    /// Out-of-range targets are ignored.
    pub fn go_to(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_wrap() {
        let carousel = Carousel::new(3);
        assert_eq!(carousel.prev().index(), 2);
        assert_eq!(carousel.next().next().next().index(), 0);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let carousel = Carousel::new(5).go_to(3);
        assert_eq!(carousel.index(), 3);
        assert_eq!(carousel.go_to(5).index(), 3);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let carousel = Carousel::new(0);
        assert_eq!(carousel.next(), carousel);
        assert_eq!(carousel.prev(), carousel);
    }
}

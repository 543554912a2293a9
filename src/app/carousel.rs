/// Number of cards shown in a home screen strip.
pub const CAROUSEL_LIMIT: usize = 5;

/// Active-card tracking for a horizontal strip.
///
/// The active index is always below `len`, or 0 for an empty strip. Moves
/// stop at either end instead of wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    active: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn next(&mut self) {
        self.select(self.active.saturating_add(1));
    }

    pub fn previous(&mut self) {
        self.select(self.active.saturating_sub(1));
    }

    /// Jumps to `index`, clamped to the last card.
    pub fn select(&mut self, index: usize) {
        self.active = index.min(self.len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strip_stays_at_zero() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.previous();
        carousel.select(3);
        assert_eq!(carousel.active(), 0);
        assert!(carousel.is_empty());
    }

    #[test]
    fn moves_clamp_at_both_ends() {
        let mut carousel = Carousel::new(3);
        carousel.previous();
        assert_eq!(carousel.active(), 0);

        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.active(), 2);
    }

    #[test]
    fn select_clamps_to_last_card() {
        let mut carousel = Carousel::new(CAROUSEL_LIMIT);
        carousel.select(1);
        assert_eq!(carousel.active(), 1);
        carousel.select(42);
        assert_eq!(carousel.active(), CAROUSEL_LIMIT - 1);
    }
}

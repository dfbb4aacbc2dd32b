use super::Vec2;

/// Axis-aligned rectangle: top-left `origin` plus `size`, in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::from_origin_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }

    /// True for zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }

    /// Same area with a non-negative size; a negative extent moves the origin.
    pub fn normalized(self) -> Self {
        let far = self.origin + self.size;
        Rect::new(
            self.origin.x.min(far.x),
            self.origin.y.min(far.y),
            self.size.x.abs(),
            self.size.y.abs(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 60.0);
    }

    #[test]
    fn normalizing_flips_negative_extents() {
        let rect = Rect::new(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
        assert_eq!(Rect::new(10.0, 10.0, -4.0, -3.0).normalized(), Rect::new(6.0, 7.0, 4.0, 3.0));
    }

    #[test]
    fn degenerate_rects_are_empty() {
        assert!(Rect::new(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(Rect::new(0.0, 0.0, 5.0, -1.0).is_empty());
        assert!(Rect::new(0.0, 0.0, f32::NAN, 1.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}

/// Drawable area in logical pixels, origin top-left, y down.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width and height floored at one pixel, safe to divide by in shaders
    /// while the window is minimised.
    #[inline]
    pub fn extent(self) -> [f32; 2] {
        [self.width.max(1.0), self.height.max(1.0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimised_extent_never_hits_zero() {
        assert_eq!(Viewport::new(0.0, 0.0).extent(), [1.0, 1.0]);
        assert_eq!(Viewport::new(800.0, 600.0).extent(), [800.0, 600.0]);
    }
}

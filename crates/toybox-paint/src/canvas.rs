use crate::brush::StrokePoint;

/// Append-only list of painted points, in draw order.
///
/// The only way to remove points is [`Canvas::clear`].
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    points: Vec<StrokePoint>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn points(&self) -> &[StrokePoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl Extend<StrokePoint> for Canvas {
    fn extend<I: IntoIterator<Item = StrokePoint>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush;
    use toybox_engine::coords::Vec2;
    use toybox_engine::paint::Color;

    #[test]
    fn grows_in_order_until_cleared() {
        let mut canvas = Canvas::new();
        let red = Color::rgb(255, 0, 0);
        brush::line(&mut canvas, Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), red);
        brush::circle(&mut canvas, Vec2::new(50.0, 50.0), 20.0, red);
        assert_eq!(canvas.len(), 3 + brush::CIRCLE_POINTS);
        assert_eq!(canvas.points()[1].pos, Vec2::new(1.0, 0.0));

        canvas.clear();
        assert!(canvas.is_empty());

        brush::line(&mut canvas, Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), red);
        assert_eq!(canvas.len(), 1);
    }
}

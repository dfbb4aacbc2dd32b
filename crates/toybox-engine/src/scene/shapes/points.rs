use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// One colored point of a batch.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub pos: Vec2,
    pub color: Color,
}

impl Point {
    #[inline]
    pub const fn new(pos: Vec2, color: Color) -> Self {
        Self { pos, color }
    }
}

/// Unconnected point batch, drawn as `size`-pixel squares anchored at each
/// point's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsCmd {
    pub points: Vec<Point>,
    pub size: f32,
}

impl DrawList {
    /// Records a point batch. Empty batches are dropped.
    pub fn push_points<I>(&mut self, z: ZIndex, size: f32, points: I)
    where
        I: IntoIterator<Item = Point>,
    {
        let points: Vec<Point> = points.into_iter().collect();
        if points.is_empty() {
            return;
        }
        self.push(z, DrawCmd::Points(PointsCmd { points, size }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_is_not_recorded() {
        let mut list = DrawList::new();
        list.push_points(ZIndex(0), 2.0, std::iter::empty());
        assert!(list.is_empty());
    }

    #[test]
    fn batch_keeps_insertion_order() {
        let mut list = DrawList::new();
        let c = Color::rgb(255, 0, 0);
        list.push_points(
            ZIndex(0),
            2.0,
            [Point::new(Vec2::new(1.0, 1.0), c), Point::new(Vec2::new(2.0, 2.0), c)],
        );

        let DrawCmd::Points(cmd) = &list.items()[0].cmd else {
            panic!("expected a point batch");
        };
        assert_eq!(cmd.points.len(), 2);
        assert_eq!(cmd.points[1].pos, Vec2::new(2.0, 2.0));
        assert_eq!(cmd.size, 2.0);
    }
}

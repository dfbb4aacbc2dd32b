//! Brush point generators.
//!
//! Every generator only appends to its target; nothing is ever removed or
//! reordered.

use std::f32::consts::TAU;

use rand::Rng;
use toybox_engine::coords::Vec2;
use toybox_engine::input::Key;
use toybox_engine::paint::Color;

/// Points in one circle stamp.
pub const CIRCLE_POINTS: usize = 60;

/// Points in one star stamp.
pub const STAR_POINTS: usize = 10;

/// A single painted point. The engine's point type, so the canvas can be
/// handed to the renderer without conversion.
pub use toybox_engine::scene::shapes::points::Point as StrokePoint;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum BrushMode {
    #[default]
    Pencil,
    Spray,
    Star,
    Circle,
}

impl BrushMode {
    /// Digits 1 to 4.
    pub fn from_key(key: Key) -> Option<BrushMode> {
        match key {
            Key::Digit1 => Some(BrushMode::Pencil),
            Key::Digit2 => Some(BrushMode::Spray),
            Key::Digit3 => Some(BrushMode::Star),
            Key::Digit4 => Some(BrushMode::Circle),
            _ => None,
        }
    }
}

/// Brush sizes, in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BrushParams {
    pub spray_radius: f32,
    pub spray_density: usize,
    pub star_size: f32,
    pub circle_radius: f32,
}

impl Default for BrushParams {
    fn default() -> Self {
        Self {
            spray_radius: 20.0,
            spray_density: 200,
            star_size: 15.0,
            circle_radius: 20.0,
        }
    }
}

/// Evenly spaced points from `from` to `to`, both inclusive.
///
/// The step count is the larger axis delta rounded up, so consecutive points
/// are at most one pixel apart on either axis. No movement yields one point.
pub fn line<E>(out: &mut E, from: Vec2, to: Vec2, color: Color)
where
    E: Extend<StrokePoint>,
{
    let delta = to - from;
    let steps = delta.x.abs().max(delta.y.abs()).ceil() as usize;

    if steps == 0 {
        out.extend(std::iter::once(StrokePoint::new(from, color)));
        return;
    }

    out.extend((0..=steps).map(|i| {
        let t = i as f32 / steps as f32;
        StrokePoint::new(from + delta * t, color)
    }));
}

/// `density` points scattered around `center` at a uniform random angle and
/// a uniform random distance in `[0, radius)`.
pub fn spray<E, R>(
    out: &mut E,
    center: Vec2,
    radius: f32,
    density: usize,
    color: Color,
    rng: &mut R,
) where
    E: Extend<StrokePoint>,
    R: Rng,
{
    out.extend((0..density).map(|_| {
        let angle = rng.gen_range(0.0..TAU);
        let distance = if radius > 0.0 { rng.gen_range(0.0..radius) } else { 0.0 };
        StrokePoint::new(center + Vec2::from_polar(angle, distance), color)
    }));
}

/// Ten points at 36° spacing, `size` away from `center`.
pub fn star<E>(out: &mut E, center: Vec2, size: f32, color: Color)
where
    E: Extend<StrokePoint>,
{
    ring(out, center, size, STAR_POINTS, color);
}

/// Sixty points at 6° spacing, `radius` away from `center`.
pub fn circle<E>(out: &mut E, center: Vec2, radius: f32, color: Color)
where
    E: Extend<StrokePoint>,
{
    ring(out, center, radius, CIRCLE_POINTS, color);
}

fn ring<E>(out: &mut E, center: Vec2, distance: f32, count: usize, color: Color)
where
    E: Extend<StrokePoint>,
{
    let step = TAU / count as f32;
    out.extend((0..count).map(|i| {
        let offset = Vec2::from_polar(step * i as f32, distance);
        StrokePoint::new(center + offset, color)
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const EPSILON: f32 = 1e-3;
    const INK: Color = Color::rgb(0, 0, 0);

    fn positions(points: &[StrokePoint]) -> Vec<(f32, f32)> {
        points.iter().map(|p| (p.pos.x, p.pos.y)).collect()
    }

    #[test]
    fn horizontal_line_hits_every_pixel() {
        let mut out = Vec::new();
        line(&mut out, Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), INK);
        assert_eq!(
            positions(&out),
            vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)]
        );
    }

    #[test]
    fn steep_line_has_no_gaps() {
        let mut out = Vec::new();
        let (from, to) = (Vec2::new(10.0, 10.0), Vec2::new(13.0, 47.5));
        line(&mut out, from, to, INK);

        assert_eq!(out.len(), 39);
        assert_eq!(out.first().map(|p| p.pos), Some(from));
        assert!((out[out.len() - 1].pos - to).length() < EPSILON);
        for pair in out.windows(2) {
            let d = pair[1].pos - pair[0].pos;
            assert!(d.x.abs() <= 1.0 + EPSILON && d.y.abs() <= 1.0 + EPSILON);
        }
    }

    #[test]
    fn zero_length_line_emits_one_point() {
        let mut out = Vec::new();
        line(&mut out, Vec2::new(7.0, 9.0), Vec2::new(7.0, 9.0), INK);
        assert_eq!(positions(&out), vec![(7.0, 9.0)]);
    }

    #[test]
    fn generators_only_append() {
        let mut out = vec![StrokePoint::new(Vec2::new(-1.0, -1.0), INK)];
        star(&mut out, Vec2::new(50.0, 50.0), 15.0, INK);
        assert_eq!(out.len(), 1 + STAR_POINTS);
        assert_eq!(out[0].pos, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn spray_stays_inside_radius() {
        let mut rng = StdRng::seed_from_u64(7);
        let center = Vec2::new(100.0, 100.0);
        let color = Color::rgb(255, 0, 0);
        let mut out = Vec::new();
        spray(&mut out, center, 20.0, 200, color, &mut rng);

        assert_eq!(out.len(), 200);
        assert!(out.iter().all(|p| p.pos.distance(center) < 20.0 + EPSILON));
        assert!(out.iter().all(|p| p.color == color));
    }

    #[test]
    fn spray_is_reproducible_with_seed() {
        let center = Vec2::new(30.0, 40.0);
        let mut a = Vec::new();
        let mut b = Vec::new();
        spray(&mut a, center, 20.0, 50, INK, &mut StdRng::seed_from_u64(42));
        spray(&mut b, center, 20.0, 50, INK, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn spray_with_zero_radius_collapses_to_center() {
        let mut out = Vec::new();
        let center = Vec2::new(5.0, 5.0);
        spray(&mut out, center, 0.0, 3, INK, &mut StdRng::seed_from_u64(1));
        assert!(out.iter().all(|p| p.pos.distance(center) < EPSILON));
    }

    #[test]
    fn star_is_a_decagon() {
        let center = Vec2::new(200.0, 150.0);
        let mut out = Vec::new();
        star(&mut out, center, 15.0, INK);

        assert_eq!(out.len(), 10);
        for (i, p) in out.iter().enumerate() {
            assert!((p.pos.distance(center) - 15.0).abs() < EPSILON);
            let expected = center + Vec2::from_polar((36.0f32 * i as f32).to_radians(), 15.0);
            assert!((p.pos - expected).length() < EPSILON);
        }
        assert!((out[0].pos - Vec2::new(215.0, 150.0)).length() < EPSILON);
    }

    #[test]
    fn circle_has_sixty_points_on_radius() {
        let center = Vec2::new(0.0, 0.0);
        let mut out = Vec::new();
        circle(&mut out, center, 20.0, INK);

        assert_eq!(out.len(), 60);
        assert!(out.iter().all(|p| (p.pos.length() - 20.0).abs() < EPSILON));
        let quarter = out[15].pos;
        assert!(quarter.x.abs() < EPSILON && (quarter.y - 20.0).abs() < EPSILON);
    }

    #[test]
    fn digits_select_brushes() {
        assert_eq!(BrushMode::from_key(Key::Digit1), Some(BrushMode::Pencil));
        assert_eq!(BrushMode::from_key(Key::Digit2), Some(BrushMode::Spray));
        assert_eq!(BrushMode::from_key(Key::Digit3), Some(BrushMode::Star));
        assert_eq!(BrushMode::from_key(Key::Digit4), Some(BrushMode::Circle));
        assert_eq!(BrushMode::from_key(Key::Digit5), None);
    }
}

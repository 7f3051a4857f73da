//! Axis-aligned collision geometry
//!
//! Every entity is a box centered on its position. Hitboxes are derived on
//! demand and never stored, so they can't drift from the entity they describe.

use glam::Vec2;

/// Axis-aligned bounds of a centered box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Hitbox {
    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }
}

/// Build the hitbox of a box of `size` centered at `pos`
#[inline]
pub fn hitbox(pos: Vec2, size: Vec2) -> Hitbox {
    let half = size * 0.5;
    Hitbox {
        left: pos.x - half.x,
        right: pos.x + half.x,
        top: pos.y - half.y,
        bottom: pos.y + half.y,
    }
}

/// Inclusive AABB test: touching edges count as a hit
#[inline]
pub fn overlaps(a: &Hitbox, b: &Hitbox) -> bool {
    a.left <= b.right && a.right >= b.left && a.top <= b.bottom && a.bottom >= b.top
}

/// Anything with a centered box
pub trait Collider {
    fn hitbox(&self) -> Hitbox;

    fn collides_with(&self, other: &impl Collider) -> bool
    where
        Self: Sized,
    {
        overlaps(&self.hitbox(), &other.hitbox())
    }
}

/// The play field. Entities receive it as their boundary context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Whether `x` keeps a box of width `w` fully inside horizontally
    #[inline]
    pub fn fits_x(&self, x: f32, w: f32) -> bool {
        let half = w * 0.5;
        half <= x && x <= self.width - half
    }

    /// Whether `y` keeps a box of height `h` fully inside vertically
    #[inline]
    pub fn fits_y(&self, y: f32, h: f32) -> bool {
        let half = h * 0.5;
        half <= y && y <= self.height - half
    }

    /// Clamp a box center so the box stays inside the field
    pub fn clamp(&self, pos: Vec2, size: Vec2) -> Vec2 {
        let half = size * 0.5;
        Vec2::new(
            pos.x.min(self.width - half.x).max(half.x),
            pos.y.min(self.height - half.y).max(half.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hitbox_extents() {
        let hb = hitbox(Vec2::new(320.0, 240.0), Vec2::new(32.0, 24.0));
        assert_eq!(hb.left, 304.0);
        assert_eq!(hb.right, 336.0);
        assert_eq!(hb.top, 228.0);
        assert_eq!(hb.bottom, 252.0);
    }

    #[test]
    fn test_touching_edges_collide() {
        let a = hitbox(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = hitbox(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(overlaps(&a, &b));

        let c = hitbox(Vec2::new(10.5, 0.0), Vec2::new(10.0, 10.0));
        assert!(!overlaps(&a, &c));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = hitbox(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = hitbox(Vec2::new(0.0, 30.0), Vec2::new(10.0, 10.0));
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_field_clamp() {
        let field = Field::new(640.0, 480.0);
        let size = Vec2::new(32.0, 32.0);
        assert_eq!(field.clamp(Vec2::new(-50.0, 900.0), size), Vec2::new(16.0, 464.0));
        assert_eq!(field.clamp(Vec2::new(100.0, 100.0), size), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_field_fits() {
        let field = Field::new(640.0, 480.0);
        assert!(field.fits_x(12.5, 25.0));
        assert!(!field.fits_x(12.4, 25.0));
        assert!(field.fits_y(480.0 - 12.5, 25.0));
        assert!(!field.fits_y(480.0 - 12.0, 25.0));
    }

    proptest! {
        #[test]
        fn prop_hitbox_is_centered(
            x in -1000.0f32..1000.0, y in -1000.0f32..1000.0,
            w in 0.0f32..200.0, h in 0.0f32..200.0,
        ) {
            let hb = hitbox(Vec2::new(x, y), Vec2::new(w, h));
            prop_assert!((hb.width() - w).abs() < 1e-3);
            prop_assert!((hb.height() - h).abs() < 1e-3);
            prop_assert!((hb.center() - Vec2::new(x, y)).length() < 1e-3);
        }

        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0, aw in 0.0f32..100.0, ah in 0.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0, bw in 0.0f32..100.0, bh in 0.0f32..100.0,
        ) {
            let a = hitbox(Vec2::new(ax, ay), Vec2::new(aw, ah));
            let b = hitbox(Vec2::new(bx, by), Vec2::new(bw, bh));
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }
    }
}

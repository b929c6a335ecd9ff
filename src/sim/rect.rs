//! Axis-aligned rectangle geometry
//!
//! Screen space is y-down with the origin at the top-left. Entities are
//! rects; the collision engine and the clamping rules are written against
//! the operations here.

/// An axis-aligned rectangle in screen units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    /// Move the rect so its right edge sits at `right`
    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.w;
    }

    /// True when `other` lies entirely inside `self` (shared edges count)
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// True when a point falls inside the rect
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }

    /// Overlap test; rects that merely touch do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Translate the rect so it lies inside `bounds`. A rect larger than
    /// the bounds on an axis is centered on that axis.
    #[must_use]
    pub fn clamped(&self, bounds: &Rect) -> Rect {
        let mut out = *self;
        out.x = if self.w > bounds.w {
            bounds.x + (bounds.w - self.w) / 2.0
        } else {
            self.x.clamp(bounds.x, bounds.right() - self.w)
        };
        out.y = if self.h > bounds.h {
            bounds.y + (bounds.h - self.h) / 2.0
        } else {
            self.y.clamp(bounds.y, bounds.bottom() - self.h)
        };
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_contains_full_and_partial() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains(&Rect::new(10.0, 10.0, 20.0, 20.0)));
        // Shared edges still count as inside
        assert!(outer.contains(&Rect::new(0.0, 0.0, 100.0, 100.0)));
        // Sticking out on the right
        assert!(!outer.contains(&Rect::new(90.0, 10.0, 20.0, 20.0)));
    }

    #[test]
    fn test_intersects_touching_edges_do_not_count() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_clamped_translates_inside() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let r = Rect::new(-5.0, 95.0, 10.0, 10.0).clamped(&bounds);
        assert_eq!(r, Rect::new(0.0, 90.0, 10.0, 10.0));
    }

    #[test]
    fn test_clamped_centers_oversized() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let r = Rect::new(0.0, 0.0, 200.0, 10.0).clamped(&bounds);
        assert_eq!(r.x, -50.0);
    }

    #[test]
    fn test_set_right() {
        let mut r = Rect::new(0.0, 0.0, 30.0, 10.0);
        r.set_right(100.0);
        assert_eq!(r.x, 70.0);
        assert_eq!(r.right(), 100.0);
    }

    proptest! {
        #[test]
        fn clamped_rect_always_inside(x in -2000.0f32..2000.0, y in -2000.0f32..2000.0) {
            let bounds = Rect::new(0.0, 0.0, 800.0, 600.0);
            let r = Rect::new(x, y, 48.0, 32.0).clamped(&bounds);
            prop_assert!(bounds.contains(&r));
        }
    }
}

//! Axis-aligned 2D rectangles.

use glam::{Mat4, Vec2, Vec3};

/// An axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Bottom-left corner.
    pub position: Vec2,

    /// Extent along x.
    pub width: f32,

    /// Extent along y.
    pub height: f32,
}

impl Default for Rect {
    fn default() -> Self {
        Rect {
            position: Vec2::ZERO,
            width: 1.0,
            height: 1.0,
        }
    }
}

impl Rect {
    /// Constructor.
    pub fn new(position: Vec2, width: f32, height: f32) -> Self {
        Rect { position, width, height }
    }

    /// Returns the x coordinate of the left edge.
    pub fn left(&self) -> f32 {
        self.position.x
    }

    /// Returns the x coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.position.x + self.width
    }

    /// Returns the y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.position.y
    }

    /// Returns the y coordinate of the top edge.
    pub fn top(&self) -> f32 {
        self.position.y + self.height
    }

    /// Returns the bottom-left corner, which is `position`.
    pub fn bottom_left(&self) -> Vec2 {
        self.position
    }

    /// Returns the bottom-right corner.
    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    /// Returns the top-left corner.
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.top())
    }

    /// Returns the top-right corner.
    pub fn top_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.top())
    }

    /// Returns the width and height as a vector.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Returns a copy moved so its center lies at `center`.
    pub fn centered(self, center: Vec2) -> Self {
        Rect {
            position: center - self.size() / 2.0,
            ..self
        }
    }

    /// Model matrix mapping the unit square onto this rectangle.
    pub fn model(&self) -> Mat4 {
        Mat4::from_translation(self.position.extend(0.0))
            * Mat4::from_scale(Vec3::new(self.width, self.height, 1.0))
    }

    /// View matrix; rectangles are drawn in world space.
    pub fn view(&self) -> Mat4 {
        Mat4::IDENTITY
    }

    /// Orthographic projection showing exactly this rectangle.
    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(self.left(), self.right(), self.bottom(), self.top(), -1.0, 1.0)
    }
}

/// Penetration along one axis, never positive.
fn overlap(low_far: f32, high_near: f32) -> f32 {
    (high_near - low_far).min(0.0)
}

/// Per-axis offset that moves `a` out of `b`.
///
/// Each component is zero when the rectangles are apart on that axis.
/// Adding the offset to `a.position` along either non-zero axis separates
/// them.
pub fn collision_offset(a: &Rect, b: &Rect) -> Vec2 {
    let x = if a.position.x < b.position.x {
        overlap(a.right(), b.left())
    } else {
        -overlap(b.right(), a.left())
    };
    let y = if a.position.y < b.position.y {
        overlap(a.top(), b.bottom())
    } else {
        -overlap(b.top(), a.bottom())
    };
    Vec2::new(x, y)
}

/// Returns `true` if the rectangles overlap on both axes.
pub fn collides(a: &Rect, b: &Rect) -> bool {
    let offset = collision_offset(a, b);
    offset.x != 0.0 && offset.y != 0.0
}

/// Per-axis offset that moves `inner` back inside `outer`.
pub fn containment_offset(outer: &Rect, inner: &Rect) -> Vec2 {
    let mut offset = Vec2::ZERO;

    let left = inner.left() - outer.left();
    if left < 0.0 {
        offset.x = -left;
    }
    let right = outer.right() - inner.right();
    if right < 0.0 {
        offset.x = right;
    }

    let bottom = inner.bottom() - outer.bottom();
    if bottom < 0.0 {
        offset.y = -bottom;
    }
    let top = outer.top() - inner.top();
    if top < 0.0 {
        offset.y = top;
    }

    offset
}

/// Returns `true` if `inner` lies entirely within `outer`.
pub fn contains(outer: &Rect, inner: &Rect) -> bool {
    containment_offset(outer, inner) == Vec2::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), w, h)
    }

    #[test]
    fn edges_and_corners() {
        let r = rect(1.0, 2.0, 3.0, 4.0);
        assert_eq!((1.0, 4.0, 2.0, 6.0), (r.left(), r.right(), r.bottom(), r.top()));
        assert_eq!(Vec2::new(1.0, 6.0), r.top_left());
        assert_eq!(Vec2::new(4.0, 2.0), r.bottom_right());
        assert_eq!(Vec2::new(4.0, 6.0), r.top_right());
        assert_eq!(r.position, r.bottom_left());
        assert_eq!(Rect::new(Vec2::ZERO, 1.0, 1.0), Rect::default());
    }

    #[test]
    fn centering() {
        let r = rect(0.0, 0.0, 4.0, 2.0).centered(Vec2::new(10.0, 10.0));
        assert_eq!(Vec2::new(8.0, 9.0), r.position);
    }

    #[test]
    fn overlapping_rects_push_apart() {
        let a = rect(0.0, 0.0, 2.0, 2.0);
        let b = rect(1.5, 1.0, 2.0, 2.0);
        assert_eq!(Vec2::new(-0.5, -1.0), collision_offset(&a, &b));
        assert_eq!(Vec2::new(0.5, 1.0), collision_offset(&b, &a));
        assert!(collides(&a, &b));
    }

    #[test]
    fn overlap_on_one_axis_is_not_a_collision() {
        let a = rect(0.0, 0.0, 2.0, 2.0);
        let b = rect(1.0, 5.0, 2.0, 2.0);
        assert_eq!(Vec2::new(-1.0, 0.0), collision_offset(&a, &b));
        assert!(!collides(&a, &b));
        assert!(!collides(&a, &rect(5.0, 5.0, 1.0, 1.0)));
    }

    #[test]
    fn containment() {
        let outer = rect(0.0, 0.0, 10.0, 10.0);
        assert!(contains(&outer, &rect(1.0, 1.0, 2.0, 2.0)));
        assert_eq!(Vec2::new(1.0, 0.0), containment_offset(&outer, &rect(-1.0, 3.0, 2.0, 2.0)));
        assert_eq!(Vec2::new(-2.0, -1.0), containment_offset(&outer, &rect(9.0, 9.0, 3.0, 2.0)));
        assert!(!contains(&outer, &rect(9.0, 9.0, 3.0, 2.0)));
    }

    #[test]
    fn model_maps_unit_square() {
        let r = rect(2.0, 3.0, 4.0, 5.0);
        let model = r.model();
        assert_eq!(Vec3::new(2.0, 3.0, 0.0), model.transform_point3(Vec3::ZERO));
        assert_eq!(Vec3::new(6.0, 8.0, 0.0), model.transform_point3(Vec3::new(1.0, 1.0, 0.0)));
        assert_eq!(Mat4::IDENTITY, r.view());
    }

    #[test]
    fn projection_maps_rect_to_clip_space() {
        let r = rect(0.0, 0.0, 800.0, 600.0);
        let projection = r.projection();
        let low = projection.project_point3(Vec3::new(0.0, 0.0, 0.0));
        let high = projection.project_point3(Vec3::new(800.0, 600.0, 0.0));
        assert!((low - Vec3::new(-1.0, -1.0, 0.0)).length() < 1e-5);
        assert!((high - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-5);
    }
}

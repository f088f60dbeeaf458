//! Viewport bounds in world space
//!
//! The scene camera is orthographic with a fixed number of pixels per world
//! unit, so the visible rectangle grows with the window.

use bevy::prelude::*;

use super::letter::WallSide;

/// World-space rectangle visible through the scene camera (on the z = 0 plane)
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ViewportBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for ViewportBounds {
    fn default() -> Self {
        Self {
            min: Vec2::new(-1.0, -1.0),
            max: Vec2::new(1.0, 1.0),
        }
    }
}

impl ViewportBounds {
    /// Bounds of an orthographic camera centred on `center` that maps
    /// `pixels_per_unit` logical pixels to one world unit.
    ///
    /// Returns `None` for a degenerate (minimised) window or scale.
    pub fn for_orthographic(window_size: Vec2, pixels_per_unit: f32, center: Vec2) -> Option<Self> {
        if window_size.x <= 0.0 || window_size.y <= 0.0 || pixels_per_unit <= 0.0 {
            return None;
        }
        let half = window_size / (2.0 * pixels_per_unit);
        Some(Self {
            min: center - half,
            max: center + half,
        })
    }

    /// Whether a position lies inside the bounds (edges count as inside)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Pull `point` inside the bounds, keeping `margin` clear of each edge.
    ///
    /// An axis narrower than twice the margin collapses to its centre.
    pub fn clamp_inside(&self, point: Vec3, margin: Vec2) -> Vec3 {
        let lo = self.min + margin;
        let hi = self.max - margin;
        let center = self.center();
        let clamp_axis = |v: f32, lo: f32, hi: f32, mid: f32| if lo > hi { mid } else { v.clamp(lo, hi) };
        Vec3::new(
            clamp_axis(point.x, lo.x, hi.x, center.x),
            clamp_axis(point.y, lo.y, hi.y, center.y),
            point.z,
        )
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Centre and half-extents of the wall collider on `side`.
    ///
    /// Walls are `thickness` thick, centred on the edge, and span the full
    /// length of that edge. The z half-extent is 0.5 so letters at z = 0 are
    /// always inside the wall's depth.
    pub fn wall_placement(&self, side: WallSide, thickness: f32) -> (Vec3, Vec3) {
        let center = self.center();
        let half_t = thickness * 0.5;
        match side {
            WallSide::Top => (
                Vec3::new(center.x, self.max.y, 0.0),
                Vec3::new(self.width() * 0.5, half_t, 0.5),
            ),
            WallSide::Bottom => (
                Vec3::new(center.x, self.min.y, 0.0),
                Vec3::new(self.width() * 0.5, half_t, 0.5),
            ),
            WallSide::Right => (
                Vec3::new(self.max.x, center.y, 0.0),
                Vec3::new(half_t, self.height() * 0.5, 0.5),
            ),
            WallSide::Left => (
                Vec3::new(self.min.x, center.y, 0.0),
                Vec3::new(half_t, self.height() * 0.5, 0.5),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthographic_bounds_follow_window_size() {
        let bounds = ViewportBounds::for_orthographic(Vec2::new(800.0, 600.0), 300.0, Vec2::ZERO)
            .unwrap();
        assert!((bounds.max.x - 800.0 / 600.0).abs() < 1e-6);
        assert!((bounds.max.y - 1.0).abs() < 1e-6);
        assert_eq!(bounds.min, -bounds.max);
    }

    #[test]
    fn test_degenerate_window_has_no_bounds() {
        assert!(ViewportBounds::for_orthographic(Vec2::new(0.0, 600.0), 300.0, Vec2::ZERO).is_none());
        assert!(ViewportBounds::for_orthographic(Vec2::new(800.0, 600.0), 0.0, Vec2::ZERO).is_none());
    }

    #[test]
    fn test_contains_is_inclusive_of_edges() {
        let bounds = ViewportBounds::default();
        assert!(bounds.contains(Vec2::new(1.0, -1.0)));
        assert!(!bounds.contains(Vec2::new(1.01, 0.0)));
        assert!(!bounds.contains(Vec2::new(0.0, -1.01)));
    }

    #[test]
    fn test_clamp_inside_keeps_margin_from_edges() {
        let bounds = ViewportBounds::for_orthographic(Vec2::new(1280.0, 720.0), 360.0, Vec2::ZERO)
            .unwrap();
        let margin = Vec2::new(0.1, 0.2);

        let inside = Vec3::new(0.8, 0.0, 0.0);
        assert_eq!(bounds.clamp_inside(inside, margin), inside);

        let clamped = bounds.clamp_inside(Vec3::new(2.0, -3.0, 0.0), margin);
        assert!((clamped.x - (bounds.max.x - 0.1)).abs() < 1e-6);
        assert!((clamped.y - (bounds.min.y + 0.2)).abs() < 1e-6);
        assert!(bounds.contains(clamped.truncate()));

        let narrow = ViewportBounds {
            min: Vec2::new(-0.05, -1.0),
            max: Vec2::new(0.05, 1.0),
        };
        assert_eq!(narrow.clamp_inside(Vec3::new(3.0, 0.0, 0.0), margin).x, 0.0);
    }

    #[test]
    fn test_wall_placement_hugs_edges() {
        let bounds = ViewportBounds {
            min: Vec2::new(-2.0, -1.0),
            max: Vec2::new(2.0, 1.0),
        };
        let (pos, half) = bounds.wall_placement(WallSide::Top, 0.02);
        assert_eq!(pos, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(half, Vec3::new(2.0, 0.01, 0.5));

        let (pos, half) = bounds.wall_placement(WallSide::Left, 0.02);
        assert_eq!(pos, Vec3::new(-2.0, 0.0, 0.0));
        assert_eq!(half, Vec3::new(0.01, 1.0, 0.5));
    }
}

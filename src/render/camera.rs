//! Perspective camera for the background scene.
//!
//! Fixed camera on +Z looking at the origin, Y up. Rotations use the
//! X-then-Y-then-Z Euler convention (`v' = Rx · Ry · Rz · v`).

use super::layout::Bounds;

/// Euler rotation in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Euler {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Euler {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotate `p` by this rotation.
    pub fn apply(&self, p: [f32; 3]) -> [f32; 3] {
        let [x, y, z] = p;

        let (sz, cz) = self.z.sin_cos();
        let (x, y) = (x * cz - y * sz, x * sz + y * cz);

        let (sy, cy) = self.y.sin_cos();
        let (x, z) = (x * cy + z * sy, -x * sy + z * cy);

        let (sx, cx) = self.x.sin_cos();
        let (y, z) = (y * cx - z * sx, y * sx + z * cx);

        [x, y, z]
    }

    /// Compose: apply `inner` first, then `self`.
    pub fn then_apply(&self, inner: &Euler, p: [f32; 3]) -> [f32; 3] {
        self.apply(inner.apply(p))
    }
}

/// A point after projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    /// Distance in front of the camera
    pub depth: f32,
    /// Pixels per world unit at this depth
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub distance: f32,
    pub fov_y_degrees: f32,
    pub near: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            distance: 12.0,
            fov_y_degrees: 60.0,
            near: 0.1,
        }
    }
}

impl Camera {
    /// Project a world-space point into `viewport`. `None` when the point
    /// is behind the near plane.
    pub fn project(&self, p: [f32; 3], viewport: Bounds) -> Option<Projected> {
        let depth = self.distance - p[2];
        if depth <= self.near || viewport.height <= 0.0 {
            return None;
        }
        let focal = 1.0 / (self.fov_y_degrees.to_radians() * 0.5).tan();
        let scale = focal * viewport.height * 0.5 / depth;
        let (cx, cy) = viewport.center();
        Some(Projected {
            x: cx + p[0] * scale,
            y: cy - p[1] * scale,
            depth,
            scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Bounds = Bounds::new(0.0, 0.0, 1200.0, 800.0);

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_origin_projects_to_center() {
        let p = Camera::default().project([0.0, 0.0, 0.0], VP).expect("visible");
        assert!(close(p.x, 600.0) && close(p.y, 400.0), "{:?}", p);
        assert!(close(p.depth, 12.0));
    }

    #[test]
    fn test_up_is_up_on_screen() {
        let p = Camera::default().project([0.0, 1.0, 0.0], VP).expect("visible");
        assert!(p.y < 400.0);
    }

    #[test]
    fn test_fov_edge_hits_viewport_edge() {
        // At depth d, the half-height of the view is d * tan(30°)
        let half = 12.0 * 30f32.to_radians().tan();
        let p = Camera::default().project([0.0, half, 0.0], VP).expect("visible");
        assert!(close(p.y, 0.0), "y = {}", p.y);
    }

    #[test]
    fn test_behind_camera_is_culled() {
        assert!(Camera::default().project([0.0, 0.0, 20.0], VP).is_none());
        assert!(Camera::default().project([0.0, 0.0, 11.95], VP).is_none());
    }

    #[test]
    fn test_rotation_about_y() {
        let r = Euler::new(0.0, std::f32::consts::FRAC_PI_2, 0.0).apply([1.0, 0.0, 0.0]);
        assert!(close(r[0], 0.0) && close(r[1], 0.0) && close(r[2], -1.0), "{:?}", r);
    }

    #[test]
    fn test_rotation_about_z() {
        let r = Euler::new(0.0, 0.0, std::f32::consts::FRAC_PI_2).apply([1.0, 0.0, 0.0]);
        assert!(close(r[0], 0.0) && close(r[1], 1.0), "{:?}", r);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let e = Euler::new(0.3, -1.1, 2.0);
        let r = e.apply([3.0, 4.0, 12.0]);
        let len = (r[0] * r[0] + r[1] * r[1] + r[2] * r[2]).sqrt();
        assert!(close(len, 13.0), "len = {}", len);
    }
}

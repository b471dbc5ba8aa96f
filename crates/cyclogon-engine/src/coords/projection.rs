use glam::Mat4;

/// Parallel projection of a world-space rectangle onto the full viewport.
///
/// Depth is fixed to `[-1, 1]` in world units, which keeps the `z = 0` plane
/// inside wgpu's `[0, 1]` clip range.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrthoProjection {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl OrthoProjection {
    const NEAR: f32 = -1.0;
    const FAR: f32 = 1.0;

    pub const fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self { left, right, bottom, top }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(self.left, self.right, self.bottom, self.top, Self::NEAR, Self::FAR)
    }

    /// Column-major matrix as uploaded to a uniform buffer.
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        self.matrix().to_cols_array_2d()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    fn project(proj: &OrthoProjection, p: Vec3) -> Vec4 {
        proj.matrix() * p.extend(1.0)
    }

    fn viewer() -> OrthoProjection {
        OrthoProjection::new(-20.0, 20.0, -1.0, 1.5)
    }

    fn close(a: Vec4, b: Vec4) -> bool {
        (a - b).abs().max_element() < 1e-6
    }

    #[test]
    fn corners_map_to_ndc_corners() {
        let proj = viewer();
        let bl = project(&proj, Vec3::new(-20.0, -1.0, 0.0));
        let tr = project(&proj, Vec3::new(20.0, 1.5, 0.0));
        assert!(close(bl, Vec4::new(-1.0, -1.0, 0.5, 1.0)), "{bl:?}");
        assert!(close(tr, Vec4::new(1.0, 1.0, 0.5, 1.0)), "{tr:?}");
    }

    #[test]
    fn curve_plane_stays_inside_depth_range() {
        let z = project(&viewer(), Vec3::ZERO).z;
        assert!((0.0..=1.0).contains(&z));
    }

    #[test]
    fn points_outside_rectangle_leave_ndc() {
        let far_right = project(&viewer(), Vec3::new(54.0, 0.0, 0.0));
        assert!(far_right.x > 1.0);
    }
}

//! Matrix helpers for the triangle pass.
//!
//! Matrices follow the GL conventions the shader expects: column-major,
//! right-handed, clip-space depth range `[-1, 1]` (the triangle sits at
//! `z = 0`, which lands inside wgpu's `[0, 1]` range as well).

use glam::Mat4;

/// Width over height, `1.0` for a degenerate (minimized) framebuffer.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}

/// `ortho(-aspect, aspect, -1, 1, 1, -1) * rotate_z(angle)`.
pub fn triangle_mvp(aspect: f32, angle: f32) -> Mat4 {
    let model = Mat4::from_rotation_z(angle);
    let projection = Mat4::orthographic_rh_gl(-aspect, aspect, -1.0, 1.0, 1.0, -1.0);
    projection * model
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec4};
    use std::f32::consts::FRAC_PI_2;

    fn project(m: Mat4, p: Vec2) -> Vec2 {
        let clip = m * Vec4::new(p.x, p.y, 0.0, 1.0);
        Vec2::new(clip.x / clip.w, clip.y / clip.w)
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn unit_aspect_without_rotation_is_identity_on_the_plane() {
        let m = triangle_mvp(1.0, 0.0);
        for p in [Vec2::new(-0.6, -0.4), Vec2::new(0.6, -0.4), Vec2::new(0.0, 0.6)] {
            assert!(approx(project(m, p), p), "{p:?}");
        }
    }

    #[test]
    fn aspect_compresses_x() {
        let m = triangle_mvp(2.0, 0.0);
        assert!(approx(project(m, Vec2::new(0.6, -0.4)), Vec2::new(0.3, -0.4)));
    }

    #[test]
    fn quarter_turn_maps_x_to_y() {
        let m = triangle_mvp(1.0, FRAC_PI_2);
        assert!(approx(project(m, Vec2::X), Vec2::Y));
        assert!(approx(project(m, Vec2::Y), -Vec2::X));
    }

    #[test]
    fn depth_stays_inside_clip_volume() {
        let clip = triangle_mvp(1.5, 0.3) * Vec4::new(0.6, -0.4, 0.0, 1.0);
        assert!((0.0..=1.0).contains(&(clip.z / clip.w)));
    }

    #[test]
    fn aspect_ratio_handles_zero_height() {
        assert_eq!(aspect_ratio(1024, 768), 1024.0 / 768.0);
        assert_eq!(aspect_ratio(640, 0), 1.0);
        assert_eq!(aspect_ratio(0, 480), 1.0);
    }
}

//! Free-look camera: position plus pitch/yaw, with a derived orthonormal
//! basis that primary-ray generation reads every frame.

use std::f32::consts::FRAC_PI_2;

use crate::algebra::Vec3;

const WORLD_UP: Vec3 = Vec3(0.0, 1.0, 0.0);
/// Pitch stops just short of +/- 90 degrees to avoid gimbal flip.
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub position: Vec3,
    /// Vertical rotation in radians, clamped to (-PITCH_LIMIT, PITCH_LIMIT).
    pub pitch: f32,
    /// Horizontal rotation in radians; accumulates unbounded, trig wraps it.
    pub yaw: f32,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Camera {
    /// Camera at `position` looking down -Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            pitch: 0.0,
            yaw: 0.0,
            forward: Vec3(0.0, 0.0, -1.0),
            right: Vec3(1.0, 0.0, 0.0),
            up: Vec3(0.0, 1.0, 0.0),
        }
    }

    /// Rebuild forward/right/up from pitch and yaw. Must run after every
    /// rotation before the basis is read.
    pub fn update_basis(&mut self) {
        self.forward = Vec3(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            -self.pitch.cos() * self.yaw.cos(),
        )
        .normalize();
        self.right = self.forward.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.forward).normalize();
    }

    /// Step along `direction` (usually one of the basis vectors, possibly
    /// negated) by `speed`.
    pub fn translate(&mut self, direction: Vec3, speed: f32) {
        self.position = self.position.add(direction.scale(speed));
    }

    pub fn rotate(&mut self, dpitch: f32, dyaw: f32) {
        self.pitch = (self.pitch + dpitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.yaw += dyaw;
        self.update_basis();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_orthonormal(cam: &Camera) {
        assert!((cam.forward.norm() - 1.0).abs() < 1e-5);
        assert!((cam.right.norm() - 1.0).abs() < 1e-5);
        assert!((cam.up.norm() - 1.0).abs() < 1e-5);
        assert!(cam.forward.dot(cam.right).abs() < 1e-5);
        assert!(cam.forward.dot(cam.up).abs() < 1e-5);
        assert!(cam.right.dot(cam.up).abs() < 1e-5);
    }

    #[test]
    fn starts_looking_down_negative_z() {
        let cam = Camera::new(Vec3(0.0, 2.0, 5.0));
        assert_eq!(cam.forward, Vec3(0.0, 0.0, -1.0));
        assert_eq!(cam.right, Vec3(1.0, 0.0, 0.0));
        assert_eq!(cam.up, Vec3(0.0, 1.0, 0.0));
        assert_orthonormal(&cam);
    }

    #[test]
    fn zero_rotation_keeps_the_basis() {
        let mut cam = Camera::new(Vec3::ZERO);
        cam.rotate(0.0, 0.0);
        assert!((cam.forward.0).abs() < 1e-6);
        assert!((cam.forward.1).abs() < 1e-6);
        assert!((cam.forward.2 + 1.0).abs() < 1e-6);
        assert_orthonormal(&cam);
    }

    #[test]
    fn pitch_is_clamped_under_extreme_input() {
        let mut cam = Camera::new(Vec3::ZERO);
        for _ in 0..1000 {
            cam.rotate(0.5, 0.0);
        }
        assert!(cam.pitch <= FRAC_PI_2 - 0.01 + 1e-6);
        for _ in 0..2000 {
            cam.rotate(-0.5, 0.0);
        }
        assert!(cam.pitch >= -(FRAC_PI_2 - 0.01) - 1e-6);
        assert_orthonormal(&cam);
    }

    #[test]
    fn basis_stays_orthonormal_after_arbitrary_rotations() {
        let mut cam = Camera::new(Vec3(1.0, -2.0, 3.0));
        let steps = [(0.3, -1.2), (-0.7, 4.0), (1.9, 0.01), (-0.2, -9.5)];
        for (dp, dy) in steps {
            cam.rotate(dp, dy);
            assert_orthonormal(&cam);
        }
    }

    #[test]
    fn yaw_quarter_turn_faces_positive_x() {
        let mut cam = Camera::new(Vec3::ZERO);
        cam.rotate(0.0, std::f32::consts::FRAC_PI_2);
        assert!((cam.forward.0 - 1.0).abs() < 1e-5);
        assert!(cam.forward.1.abs() < 1e-5);
        assert!(cam.forward.2.abs() < 1e-5);
    }

    #[test]
    fn translate_moves_along_direction() {
        let mut cam = Camera::new(Vec3::ZERO);
        cam.translate(cam.forward, 0.1);
        assert!((cam.position.2 + 0.1).abs() < 1e-6);
        cam.translate(cam.right, -0.5);
        assert!((cam.position.0 + 0.5).abs() < 1e-6);
    }
}

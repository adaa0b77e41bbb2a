//! src/sphere.rs
//! -------------
//! Implicit sphere with the analytic geometric intersection test.

use crate::{algebra::Vec3, material::Material};

#[derive(Clone, Copy, Debug)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    /// Cached `radius * radius`; kept consistent by the constructor.
    pub radius2: f32,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self { center, radius, radius2: radius * radius, material }
    }

    /// Intersect a ray (ro + t·rd), `rd` assumed unit length.
    /// Returns both roots (t0 <= t1); the caller picks.
    ///
    /// The `tca < 0` reject also discards some origin-inside-sphere rays.
    /// That quirk is part of the renderer's documented look; keep it.
    pub fn intersect(&self, ro: Vec3, rd: Vec3) -> Option<(f32, f32)> {
        let l = self.center.sub(ro);
        let tca = l.dot(rd);
        if tca < 0.0 {
            return None;
        }
        let d2 = l.dot(l) - tca * tca;
        if d2 > self.radius2 {
            return None;
        }
        let thc = (self.radius2 - d2).sqrt();
        Some((tca - thc, tca + thc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_material() -> Material {
        Material {
            surface_color: Vec3(1.0, 1.0, 1.0),
            emission_color: Vec3::ZERO,
            reflection: 0.0,
            transparency: 0.0,
        }
    }

    #[test]
    fn head_on_hit_yields_both_roots() {
        let s = Sphere::new(Vec3::ZERO, 1.0, plain_material());
        let (t0, t1) = s
            .intersect(Vec3(0.0, 0.0, 5.0), Vec3(0.0, 0.0, -1.0))
            .unwrap();
        assert_eq!(t0, 4.0);
        assert_eq!(t1, 6.0);
    }

    #[test]
    fn radius_changes_move_the_roots() {
        let s = Sphere::new(Vec3::ZERO, 1.5, plain_material());
        let (t0, t1) = s
            .intersect(Vec3(0.0, 0.0, 5.0), Vec3(0.0, 0.0, -1.0))
            .unwrap();
        assert!((t0 - 3.5).abs() < 1e-5);
        assert!((t1 - 6.5).abs() < 1e-5);
    }

    #[test]
    fn ray_pointing_away_misses() {
        let s = Sphere::new(Vec3(0.0, 0.0, -10.0), 1.0, plain_material());
        assert!(s.intersect(Vec3::ZERO, Vec3(0.0, 0.0, 1.0)).is_none());
    }

    #[test]
    fn grazing_distance_larger_than_radius_misses() {
        let s = Sphere::new(Vec3(0.0, 2.0, -5.0), 1.0, plain_material());
        assert!(s.intersect(Vec3::ZERO, Vec3(0.0, 0.0, -1.0)).is_none());
    }

    #[test]
    fn origin_inside_sphere_reports_one_negative_root() {
        let s = Sphere::new(Vec3::ZERO, 2.0, plain_material());
        let (t0, t1) = s
            .intersect(Vec3(0.0, 0.0, 1.0), Vec3(0.0, 0.0, -1.0))
            .unwrap();
        assert!(t0 < 0.0);
        assert!(t1 > 0.0);
    }

    #[test]
    fn constructor_caches_squared_radius() {
        let s = Sphere::new(Vec3::ZERO, 1.2, plain_material());
        assert_eq!(s.radius2, 1.2 * 1.2);
    }
}

use crate::{algebra::Vec3, material::Material, sphere::Sphere};

/// Anything a ray can be tested against. Only spheres exist today; this
/// enum is the seam for adding other primitive types later.
#[derive(Clone, Copy, Debug)]
pub enum Object {
    Sphere(Sphere),
}

impl Object {
    pub fn intersect(&self, ro: Vec3, rd: Vec3) -> Option<(f32, f32)> {
        match self {
            Self::Sphere(s) => s.intersect(ro, rd),
        }
    }

    pub fn material(&self) -> &Material {
        match self {
            Self::Sphere(s) => &s.material,
        }
    }

    /// Reference point for emissive primitives acting as lights, and for
    /// the surface normal at a hit point.
    pub fn center(&self) -> Vec3 {
        match self {
            Self::Sphere(s) => s.center,
        }
    }
}

use crate::algebra::Vec3;

#[derive(Clone, Copy, Debug)]
pub struct Material {
    /// Diffuse/reflective albedo, channels in [0,1] by convention.
    pub surface_color: Vec3,
    /// Radiance emitted by the surface; zero means non-emissive.
    pub emission_color: Vec3,
    pub reflection: f32,
    pub transparency: f32,
}

impl Material {
    /// Emissive surfaces act as light sources for the diffuse branch.
    pub fn is_emissive(&self) -> bool {
        self.emission_color.0 > 0.0
            || self.emission_color.1 > 0.0
            || self.emission_color.2 > 0.0
    }

    pub fn reflects_or_transmits(&self) -> bool {
        self.reflection > 0.0 || self.transparency > 0.0
    }
}

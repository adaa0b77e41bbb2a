//! Scene ownership and JSON loading. Scenes are immutable for the whole
//! run; the renderer only ever borrows the object list.

use std::collections::HashMap;

use anyhow::Context;
use serde::Deserialize;

use crate::{
    algebra::{vec3_from_array, Vec3},
    material::Material,
    object::Object,
    sphere::Sphere,
};

pub struct Scene {
    pub objects: Vec<Object>,
}

#[derive(Deserialize)]
struct MaterialJson {
    rgb: [f32; 3],
    #[serde(default)]
    emission: [f32; 3],
    #[serde(default)]
    reflection: f32,
    #[serde(default)]
    transparency: f32,
}

#[derive(Deserialize)]
struct SphereJson {
    #[allow(dead_code)]
    name: String,
    #[serde(deserialize_with = "vec3_from_array")]
    center: Vec3,
    radius: f32,
    mat: String,
}

#[derive(Deserialize)]
struct SceneFile {
    materials: HashMap<String, MaterialJson>,
    spheres: Vec<SphereJson>,
}

impl Scene {
    pub fn load(path: &str) -> anyhow::Result<Scene> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading scene file {path}"))?;
        let file: SceneFile =
            serde_json::from_str(&data).with_context(|| format!("parsing {path}"))?;

        let materials: HashMap<String, Material> = file
            .materials
            .into_iter()
            .map(|(name, m)| {
                let mat = Material {
                    surface_color: m.rgb.into(),
                    emission_color: m.emission.into(),
                    reflection: m.reflection,
                    transparency: m.transparency,
                };
                (name, mat)
            })
            .collect();

        let mut objects = Vec::with_capacity(file.spheres.len());
        for s in file.spheres {
            let material = *materials
                .get(&s.mat)
                .with_context(|| format!("sphere references unknown material '{}'", s.mat))?;
            objects.push(Object::Sphere(Sphere::new(s.center, s.radius, material)));
        }

        Ok(Scene { objects })
    }

    /// The built-in demo scene: three shaded spheres over a giant floor
    /// sphere, lit by two emissive spheres.
    pub fn default_scene() -> Scene {
        let sphere = |center, radius, surface_color, emission_color, reflection, transparency| {
            Object::Sphere(Sphere::new(
                center,
                radius,
                Material { surface_color, emission_color, reflection, transparency },
            ))
        };

        let objects = vec![
            // Red opaque
            sphere(Vec3(0.0, 0.0, -10.0), 1.5, Vec3(1.0, 0.2, 0.2), Vec3::ZERO, 0.5, 0.0),
            // Glass
            sphere(Vec3(3.0, 0.0, -8.0), 1.2, Vec3(0.9, 0.9, 0.9), Vec3::ZERO, 0.9, 0.9),
            // Blue metallic
            sphere(Vec3(-3.0, 0.5, -7.0), 1.0, Vec3(0.2, 0.3, 0.8), Vec3::ZERO, 0.7, 0.0),
            // Floor (giant sphere)
            sphere(Vec3(0.0, -1004.0, -10.0), 1000.0, Vec3(0.4, 0.6, 0.4), Vec3::ZERO, 0.1, 0.0),
            // Yellow light
            sphere(Vec3(-5.0, 10.0, -5.0), 1.0, Vec3(1.0, 1.0, 1.0), Vec3(2.0, 2.0, 1.5), 0.0, 0.0),
            // Blue light
            sphere(Vec3(5.0, 8.0, -8.0), 0.8, Vec3(1.0, 1.0, 1.0), Vec3(1.0, 1.5, 2.5), 0.0, 0.0),
        ];

        Scene { objects }
    }
}

//! The rendering core: recursive Whitted trace plus the per-frame pixel
//! loop. Everything here is a pure function of (scene, camera, ray);
//! misses are a normal outcome, never an error.

use rayon::prelude::*;

use crate::{
    algebra::{mix, Vec3},
    camera::Camera,
    framebuffer::Framebuffer,
    object::Object,
};

pub const MAX_RAY_DEPTH: u32 = 5;
/// Flat sky color returned for rays that hit nothing.
pub const BACKGROUND: Vec3 = Vec3(0.5, 0.7, 0.9);
/// Vertical field of view in degrees.
const FOV: f32 = 30.0;
/// Offset along the normal that keeps secondary rays off the surface
/// they just left.
const BIAS: f32 = 1e-4;
/// Refractive index for all transparent surfaces.
const IOR: f32 = 1.1;

/// Nearest positive hit along the ray, linear scan over every object.
/// When t0 is negative the origin sits inside the sphere and t1 is used.
fn nearest_hit(ro: Vec3, rd: Vec3, objects: &[Object]) -> Option<(f32, &Object)> {
    let mut tnear = f32::INFINITY;
    let mut hit = None;
    for object in objects {
        if let Some((t0, t1)) = object.intersect(ro, rd) {
            let t = if t0 < 0.0 { t1 } else { t0 };
            if t < tnear {
                tnear = t;
                hit = Some(object);
            }
        }
    }
    hit.map(|o| (tnear, o))
}

/// Diffuse shading from every emissive object, with binary shadow rays.
/// Any occluder along the shadow ray blocks the light entirely; there is
/// deliberately no distance check against the light itself.
fn direct_lighting(phit: Vec3, nhit: Vec3, object: &Object, objects: &[Object]) -> Vec3 {
    let mut color = Vec3::ZERO;
    for (i, light) in objects.iter().enumerate() {
        if !light.material().is_emissive() {
            continue;
        }
        let light_dir = light.center().sub(phit).normalize();
        let shadow_ro = phit.add(nhit.scale(BIAS));
        let occluded = objects
            .iter()
            .enumerate()
            .any(|(j, o)| j != i && o.intersect(shadow_ro, light_dir).is_some());
        if occluded {
            continue;
        }
        let dot_ln = nhit.dot(light_dir);
        if dot_ln > 0.0 {
            let contrib = object
                .material()
                .surface_color
                .mul(light.material().emission_color)
                .scale(dot_ln);
            color = color.add(contrib);
        }
    }
    color
}

/// Recursive Whitted shading, capped at `MAX_RAY_DEPTH` bounces.
pub fn trace(ro: Vec3, rd: Vec3, objects: &[Object], depth: u32) -> Vec3 {
    let (tnear, object) = match nearest_hit(ro, rd, objects) {
        Some(hit) => hit,
        None => return BACKGROUND,
    };
    let material = object.material();

    let phit = ro.add(rd.scale(tnear));
    let mut nhit = phit.sub(object.center()).normalize();
    let mut inside = false;
    if rd.dot(nhit) > 0.0 {
        // Exiting the sphere from the inside.
        nhit = nhit.neg();
        inside = true;
    }

    let mut color = if material.reflects_or_transmits() && depth < MAX_RAY_DEPTH {
        let facingratio = -rd.dot(nhit);
        let fresnel = mix((1.0 - facingratio).powi(3), 1.0, 0.1);

        let refl_dir = rd.sub(nhit.scale(2.0 * rd.dot(nhit))).normalize();
        let reflection = trace(phit.add(nhit.scale(BIAS)), refl_dir, objects, depth + 1);

        let mut refraction = Vec3::ZERO;
        if material.transparency > 0.0 {
            let eta = if inside { IOR } else { 1.0 / IOR };
            let cosi = -nhit.dot(rd);
            let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
            if k >= 0.0 {
                let refr_dir = rd
                    .scale(eta)
                    .add(nhit.scale(eta * cosi - k.sqrt()))
                    .normalize();
                // Bias flips sign here: the refracted ray starts just
                // inside the surface it is transmitting through.
                refraction = trace(phit.sub(nhit.scale(BIAS)), refr_dir, objects, depth + 1);
            }
        }

        reflection
            .scale(fresnel)
            .add(refraction.scale((1.0 - fresnel) * material.transparency))
            .mul(material.surface_color)
    } else {
        direct_lighting(phit, nhit, object, objects)
    };

    // Self-illumination applies on every path.
    color = color.add(material.emission_color);
    color
}

/// Render one full frame: every pixel maps to a primary ray through the
/// camera basis and traces at depth 0. Rows are independent, so the scan
/// is parallelized over them.
pub fn render(frame: &mut Framebuffer, objects: &[Object], camera: &Camera) {
    let width = frame.width;
    let height = frame.height;
    let inv_width = 1.0 / width as f32;
    let inv_height = 1.0 / height as f32;
    let aspect = width as f32 / height as f32;
    let angle = (std::f32::consts::PI * 0.5 * FOV / 180.0).tan();

    frame
        .pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                let xx = (2.0 * ((x as f32 + 0.5) * inv_width) - 1.0) * angle * aspect;
                let yy = (1.0 - 2.0 * ((y as f32 + 0.5) * inv_height)) * angle;
                let raydir = camera
                    .forward
                    .add(camera.right.scale(xx))
                    .add(camera.up.scale(yy))
                    .normalize();
                *pixel = trace(camera.position, raydir, objects, 0);
            }
        });
}

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3(pub f32, pub f32, pub f32);

impl Vec3 {
    pub const ZERO: Vec3 = Vec3(0.0, 0.0, 0.0);

    pub fn add(self, v: Self) -> Self { Self(self.0+v.0, self.1+v.1, self.2+v.2) }
    pub fn sub(self, v: Self) -> Self { Self(self.0-v.0, self.1-v.1, self.2-v.2) }
    pub fn scale(self, f: f32) -> Self { Self(self.0*f, self.1*f, self.2*f) }
    pub fn mul(self, v: Self) -> Self { Self(self.0*v.0, self.1*v.1, self.2*v.2) }
    pub fn dot(self, v: Self) -> f32 { self.0*v.0 + self.1*v.1 + self.2*v.2 }
    pub fn cross(self, v: Self) -> Self {
        Self(self.1*v.2-self.2*v.1, self.2*v.0-self.0*v.2, self.0*v.1-self.1*v.0)
    }
    pub fn norm(self) -> f32 { self.dot(self).sqrt() }
    pub fn neg(self) -> Self { Self(-self.0,-self.1,-self.2) }

    /// Zero-length vectors come back unchanged, so callers never divide by zero.
    pub fn normalize(self) -> Self {
        let len = self.norm();
        if len > 0.0 { self.scale(1.0/len) } else { self }
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0 && self.1 == 0.0 && self.2 == 0.0
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(a: [f32; 3]) -> Self { Vec3(a[0], a[1], a[2]) }
}

/* Custom helper so Serde turns a JSON array into Vec3 */
pub fn vec3_from_array<'de, D>(d: D) -> Result<Vec3, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let arr = <[f32; 3]>::deserialize(d)?;
    Ok(arr.into())
}

/// Linear blend: `b*t + a*(1-t)`.
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    b * t + a * (1.0 - t)
}

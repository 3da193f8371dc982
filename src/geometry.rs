use std::fmt;
use std::ops::Deref;

/// Components compare by bit pattern, with every `NaN` equal to every other,
/// so a mesh that read `NaN` still equals itself after a save and reload.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default)]
pub struct Vector2f(pub [f32; 2]);

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default)]
pub struct Vector3f(pub [f32; 3]);

/// A point referenced by faces.
pub type Position = Vector3f;
/// A `(u, v)` texture coordinate.
pub type TextureCoordinate = Vector2f;
/// A direction. Not normalized.
pub type Normal = Vector3f;

impl Vector2f {
    #[inline]
    #[must_use]
    pub const fn new(u: f32, v: f32) -> Self {
        Vector2f([u, v])
    }

    #[inline]
    pub fn u(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn v(&self) -> f32 {
        self.0[1]
    }
}

impl Vector3f {
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3f([x, y, z])
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.0[2]
    }
}

impl Deref for Vector2f {
    type Target = [f32; 2];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for Vector3f {
    type Target = [f32; 3];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<[f32; 2]> for Vector2f {
    fn from(value: [f32; 2]) -> Self {
        Vector2f(value)
    }
}

impl From<[f32; 3]> for Vector3f {
    fn from(value: [f32; 3]) -> Self {
        Vector3f(value)
    }
}

fn same_component(a: f32, b: f32) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

impl PartialEq for Vector2f {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().zip(&other.0).all(|(&a, &b)| same_component(a, b))
    }
}

impl PartialEq for Vector3f {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().zip(&other.0).all(|(&a, &b)| same_component(a, b))
    }
}

// Space separated, as the components appear after the record keyword.
impl fmt::Display for Vector2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0[0], self.0[1])
    }
}

impl fmt::Display for Vector3f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.0[0], self.0[1], self.0[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_shortest_round_trip() {
        assert_eq!(Vector3f::new(1.0, -0.5, 2.25).to_string(), "1 -0.5 2.25");
        assert_eq!(Vector2f::new(0.1, 0.0).to_string(), "0.1 0");
    }

    #[test]
    fn equality_follows_bit_patterns() {
        assert_eq!(Vector3f::new(f32::NAN, 1.0, 2.0), Vector3f::new(f32::NAN, 1.0, 2.0));
        assert_eq!(Vector2f::new(-f32::NAN, 0.0), Vector2f::new(f32::NAN, 0.0));
        assert_eq!(Vector3f::new(f32::INFINITY, 0.0, 0.0), Vector3f::new(f32::INFINITY, 0.0, 0.0));
        assert_ne!(Vector3f::new(0.0, 0.0, 0.0), Vector3f::new(-0.0, 0.0, 0.0));
        assert_ne!(Vector2f::new(1.0, 2.0), Vector2f::new(1.0, 2.5));
    }

    #[test]
    fn accessors() {
        let p = Vector3f::from([1.0, 2.0, 3.0]);
        assert_eq!((p.x(), p.y(), p.z()), (1.0, 2.0, 3.0));
        let t = Vector2f::from([0.25, 0.75]);
        assert_eq!((t.u(), t.v()), (0.25, 0.75));
        assert_eq!(t[1], 0.75);
    }
}

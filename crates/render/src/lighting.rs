use glam::{Vec3, Vec4};

/// Fixed directional light and ambient term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub ambient: Vec4,
    pub light_color: Vec3,
    pub light_direction: Vec3,
    /// Blinn half vector. Set equal to the light direction rather than derived
    /// from the eye position.
    pub half_vector: Vec3,
}

impl Lighting {
    /// Grey ambient and a yellow light from the top right near corner.
    pub const FIXED: Lighting = Lighting {
        ambient: Vec4::new(0.5, 0.5, 0.5, 1.0),
        light_color: Vec3::new(1.0, 1.0, 0.0),
        light_direction: Vec3::new(20.0, 20.0, 20.0),
        half_vector: Vec3::new(20.0, 20.0, 20.0),
    };
}

impl Default for Lighting {
    fn default() -> Self {
        Self::FIXED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_vector_matches_direction() {
        let l = Lighting::default();
        assert_eq!(l.half_vector, l.light_direction);
        assert_eq!(l.ambient.w, 1.0);
    }
}

use glam::{Mat4, Vec3, Vec4};

/// Uniform names the scene shader exposes.
pub mod names {
    pub const MODEL_MATRIX: &str = "modelMatrix";
    pub const AMBIENT: &str = "Ambient";
    pub const LIGHT_COLOR: &str = "LightColor1";
    pub const LIGHT_DIRECTION: &str = "LightDirection1";
    pub const HALF_VECTOR: &str = "HalfVector1";
}

/// A value destined for a named uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Mat4(Mat4),
    Vec4(Vec4),
    Vec3(Vec3),
}

/// CPU-side copy of the shader's uniform block, addressed by name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformBlock {
    pub model_matrix: Mat4,
    pub ambient: Vec4,
    pub light_color: Vec3,
    pub light_direction: Vec3,
    pub half_vector: Vec3,
}

impl Default for UniformBlock {
    fn default() -> Self {
        Self {
            model_matrix: Mat4::IDENTITY,
            ambient: Vec4::ZERO,
            light_color: Vec3::ZERO,
            light_direction: Vec3::ZERO,
            half_vector: Vec3::ZERO,
        }
    }
}

impl UniformBlock {
    /// Store `value` under `name`.
    ///
    /// Unknown names and values of the wrong type leave the block unchanged and
    /// return `false`.
    pub fn set(&mut self, name: &str, value: UniformValue) -> bool {
        let slot_matched = match (name, value) {
            (names::MODEL_MATRIX, UniformValue::Mat4(m)) => {
                self.model_matrix = m;
                true
            }
            (names::AMBIENT, UniformValue::Vec4(v)) => {
                self.ambient = v;
                true
            }
            (names::LIGHT_COLOR, UniformValue::Vec3(v)) => {
                self.light_color = v;
                true
            }
            (names::LIGHT_DIRECTION, UniformValue::Vec3(v)) => {
                self.light_direction = v;
                true
            }
            (names::HALF_VECTOR, UniformValue::Vec3(v)) => {
                self.half_vector = v;
                true
            }
            _ => false,
        };
        if !slot_matched {
            tracing::debug!(name, ?value, "no matching uniform, ignored");
        }
        slot_matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_known_uniforms() {
        let mut block = UniformBlock::default();
        let m = Mat4::from_rotation_x(0.5);
        assert!(block.set(names::MODEL_MATRIX, UniformValue::Mat4(m)));
        assert!(block.set(names::AMBIENT, UniformValue::Vec4(Vec4::ONE)));
        assert!(block.set(names::HALF_VECTOR, UniformValue::Vec3(Vec3::X)));
        assert_eq!(block.model_matrix, m);
        assert_eq!(block.ambient, Vec4::ONE);
        assert_eq!(block.half_vector, Vec3::X);
    }

    #[test]
    fn unknown_name_is_ignored() {
        let mut block = UniformBlock::default();
        assert!(!block.set("LightColor2", UniformValue::Vec3(Vec3::ONE)));
        assert_eq!(block, UniformBlock::default());
    }

    #[test]
    fn wrong_type_is_ignored() {
        let mut block = UniformBlock::default();
        assert!(!block.set(names::MODEL_MATRIX, UniformValue::Vec3(Vec3::ONE)));
        assert_eq!(block.model_matrix, Mat4::IDENTITY);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut block = UniformBlock::default();
        assert!(!block.set("ambient", UniformValue::Vec4(Vec4::ONE)));
    }
}

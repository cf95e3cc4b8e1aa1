use crate::lighting::Lighting;
use crate::uniforms::{UniformBlock, UniformValue, names};
use litcube_geometry::INDEX_COUNT;
use litcube_scene::SceneState;

/// Indices drawn per frame: the whole cube and platform.
pub const DRAW_INDEX_COUNT: u32 = INDEX_COUNT as u32;

/// Everything a backend needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub scene: SceneState,
    pub uniforms: UniformBlock,
    pub index_count: u32,
}

impl Frame {
    /// Derive the model transform from `scene` and push it, together with the
    /// lighting, into a fresh uniform block.
    pub fn build(scene: &SceneState, lighting: &Lighting) -> Self {
        let mut uniforms = UniformBlock::default();
        let values = [
            (names::MODEL_MATRIX, UniformValue::Mat4(scene.model_matrix())),
            (names::AMBIENT, UniformValue::Vec4(lighting.ambient)),
            (names::LIGHT_COLOR, UniformValue::Vec3(lighting.light_color)),
            (names::LIGHT_DIRECTION, UniformValue::Vec3(lighting.light_direction)),
            (names::HALF_VECTOR, UniformValue::Vec3(lighting.half_vector)),
        ];
        for (name, value) in values {
            uniforms.set(name, value);
        }

        Self {
            scene: *scene,
            uniforms,
            index_count: DRAW_INDEX_COUNT,
        }
    }
}

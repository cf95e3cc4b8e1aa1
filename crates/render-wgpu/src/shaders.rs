/// WGSL shader for the lit cube and platform.
///
/// Uniform fields mirror the named uniforms: `modelMatrix`, `Ambient`,
/// `LightColor1`, `LightDirection1`, `HalfVector1`. vec3 values are padded to
/// vec4 so the block matches the host layout without extra padding fields.
pub const SCENE_SHADER: &str = r#"
struct SceneUniforms {
    view_proj: mat4x4<f32>,
    model_matrix: mat4x4<f32>,
    ambient: vec4<f32>,
    light_color: vec4<f32>,
    light_direction: vec4<f32>,
    half_vector: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: SceneUniforms;

const SHININESS: f32 = 20.0;
const STRENGTH: f32 = 1.0;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) color: vec4<f32>,
    @location(2) normal: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
    @location(1) normal: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    let world_pos = uniforms.model_matrix * vec4<f32>(vertex.position, 1.0);

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * world_pos;
    out.color = vertex.color;
    out.normal = (uniforms.model_matrix * vec4<f32>(vertex.normal, 0.0)).xyz;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let normal = normalize(in.normal);
    let diffuse = max(0.0, dot(normal, normalize(uniforms.light_direction.xyz)));
    var specular = max(0.0, dot(normal, normalize(uniforms.half_vector.xyz)));
    if diffuse == 0.0 {
        specular = 0.0;
    } else {
        specular = pow(specular, SHININESS) * STRENGTH;
    }

    let scattered = uniforms.ambient.rgb + uniforms.light_color.rgb * diffuse;
    let reflected = uniforms.light_color.rgb * specular;
    let rgb = min(in.color.rgb * scattered + reflected, vec3<f32>(1.0));
    return vec4<f32>(rgb, in.color.a);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_reads_all_three_attribute_slots() {
        for slot in ["@location(0) position", "@location(1) color", "@location(2) normal"] {
            assert!(SCENE_SHADER.contains(slot), "missing {slot}");
        }
    }

    #[test]
    fn shader_entry_points() {
        assert!(SCENE_SHADER.contains("fn vs_main"));
        assert!(SCENE_SHADER.contains("fn fs_main"));
    }
}

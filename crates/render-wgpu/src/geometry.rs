use crate::error::RenderError;
use litcube_geometry::{
    COLORS, INDICES, NORMALS, POSITIONS, color_bytes, indices_u16, normal_bytes, position_bytes,
};
use std::borrow::Cow;
use wgpu::util::DeviceExt;

const POSITION_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const COLOR_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x4];
const NORMAL_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![2 => Float32x3];

/// One buffer per attribute, tightly packed: slot 0 position, 1 color, 2 normal.
pub fn vertex_layouts() -> [wgpu::VertexBufferLayout<'static>; 3] {
    [
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &POSITION_ATTRIBUTES,
        },
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 4]>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &COLOR_ATTRIBUTES,
        },
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &NORMAL_ATTRIBUTES,
        },
    ]
}

/// Contents and usage of one static buffer.
#[derive(Debug, Clone)]
pub struct BufferUpload {
    pub label: &'static str,
    pub usage: wgpu::BufferUsages,
    pub contents: Cow<'static, [u8]>,
}

/// The four static uploads, in order: positions, colors, normals, indices.
///
/// Attribute bytes are the store arrays as-is. wgpu has no 8-bit index
/// format, so indices go up as `u16`.
pub fn geometry_uploads() -> [BufferUpload; 4] {
    [
        BufferUpload {
            label: "position_buffer",
            usage: wgpu::BufferUsages::VERTEX,
            contents: Cow::Borrowed(position_bytes()),
        },
        BufferUpload {
            label: "color_buffer",
            usage: wgpu::BufferUsages::VERTEX,
            contents: Cow::Borrowed(color_bytes()),
        },
        BufferUpload {
            label: "normal_buffer",
            usage: wgpu::BufferUsages::VERTEX,
            contents: Cow::Borrowed(normal_bytes()),
        },
        BufferUpload {
            label: "index_buffer",
            usage: wgpu::BufferUsages::INDEX,
            contents: Cow::Owned(bytemuck::cast_slice::<u16, u8>(&indices_u16()).to_vec()),
        },
    ]
}

/// GPU-resident copy of the geometry store.
pub struct GpuGeometry {
    position_buffer: wgpu::Buffer,
    color_buffer: wgpu::Buffer,
    normal_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuGeometry {
    /// Validate the store and upload it. Any GPU error here is fatal.
    pub fn initialize(device: &wgpu::Device) -> Result<Self, RenderError> {
        litcube_geometry::validate(&POSITIONS, &COLORS, &NORMALS, &INDICES)?;

        device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let [positions, colors, normals, indices] = geometry_uploads().map(|upload| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(upload.label),
                contents: &upload.contents,
                usage: upload.usage,
            })
        });

        pop_error_scope(device, "geometry upload")?;
        pop_error_scope(device, "geometry upload")?;

        tracing::debug!(
            vertices = POSITIONS.len(),
            indices = INDICES.len(),
            "geometry uploaded"
        );

        Ok(Self {
            position_buffer: positions,
            color_buffer: colors,
            normal_buffer: normals,
            index_buffer: indices,
            index_count: INDICES.len() as u32,
        })
    }

    /// Bind all three attribute buffers and the index buffer.
    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.position_buffer.slice(..));
        pass.set_vertex_buffer(1, self.color_buffer.slice(..));
        pass.set_vertex_buffer(2, self.normal_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
    }

    /// Number of indices uploaded.
    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

/// Pop one error scope and turn a captured error into [`RenderError::Gpu`].
pub(crate) fn pop_error_scope(
    device: &wgpu::Device,
    what: &'static str,
) -> Result<(), RenderError> {
    match pollster::block_on(device.pop_error_scope()) {
        Some(err) => Err(RenderError::Gpu {
            what,
            message: err.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_uploads_are_the_store_bytes() {
        let [positions, colors, normals, _] = geometry_uploads();
        assert_eq!(&*positions.contents, bytemuck::cast_slice::<_, u8>(&POSITIONS));
        assert_eq!(&*colors.contents, bytemuck::cast_slice::<_, u8>(&COLORS));
        assert_eq!(&*normals.contents, bytemuck::cast_slice::<_, u8>(&NORMALS));
    }

    #[test]
    fn index_upload_is_widened_store() {
        let [.., indices] = geometry_uploads();
        let widened: Vec<u16> = INDICES.iter().map(|i| u16::from(*i)).collect();
        assert_eq!(&*indices.contents, bytemuck::cast_slice::<u16, u8>(&widened));
        assert_eq!(indices.contents.len(), INDICES.len() * 2);
        assert_eq!(indices.usage, wgpu::BufferUsages::INDEX);
    }

    #[test]
    fn attribute_uploads_are_vertex_buffers() {
        let uploads = geometry_uploads();
        for upload in &uploads[..3] {
            assert_eq!(upload.usage, wgpu::BufferUsages::VERTEX);
        }
    }

    #[test]
    fn layouts_use_slots_zero_to_two() {
        let layouts = vertex_layouts();
        let slots: Vec<u32> = layouts
            .iter()
            .map(|l| l.attributes[0].shader_location)
            .collect();
        assert_eq!(slots, vec![0, 1, 2]);
        assert_eq!(layouts[0].attributes[0].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(layouts[1].attributes[0].format, wgpu::VertexFormat::Float32x4);
        assert_eq!(layouts[2].attributes[0].format, wgpu::VertexFormat::Float32x3);
    }

    #[test]
    fn layouts_are_tightly_packed() {
        for layout in vertex_layouts() {
            let attr = layout.attributes[0];
            assert_eq!(attr.offset, 0);
            assert_eq!(layout.array_stride, attr.format.size());
        }
    }

    #[test]
    fn buffer_sizes_match_vertex_count() {
        let uploads = geometry_uploads();
        for (upload, layout) in uploads.iter().zip(vertex_layouts()) {
            assert_eq!(
                upload.contents.len() as u64,
                layout.array_stride * POSITIONS.len() as u64
            );
        }
    }
}

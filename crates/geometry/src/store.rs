use glam::Vec3;

/// 1/sqrt(3): each component of a unit corner diagonal.
const N: f32 = 0.577_350_27;

/// Number of vertices shared by every attribute array.
pub const VERTEX_COUNT: usize = 12;

/// Vertices `0..CUBE_VERTEX_COUNT` belong to the cube, the rest to the platform.
pub const CUBE_VERTEX_COUNT: usize = 8;

/// Number of one-byte indices in [`INDICES`].
pub const INDEX_COUNT: usize = 42;

/// Vertex positions (x, y, z).
#[rustfmt::skip]
pub const POSITIONS: [[f32; 3]; VERTEX_COUNT] = [
    [ -5.0, -5.0,  -5.0], // 0 left,  bottom, far
    [  5.0, -5.0,  -5.0], // 1 right, bottom, far
    [  5.0, -5.0,   5.0], // 2 right, bottom, near
    [ -5.0, -5.0,   5.0], // 3 left,  bottom, near
    [ -5.0,  5.0,  -5.0], // 4 left,  top,    far
    [  5.0,  5.0,  -5.0], // 5 right, top,    far
    [  5.0,  5.0,   5.0], // 6 right, top,    near
    [ -5.0,  5.0,   5.0], // 7 left,  top,    near
    [-20.0, -5.0, -20.0], // 8  platform back left
    [-20.0, -5.0,  20.0], // 9  platform front left
    [ 20.0, -5.0,  20.0], // 10 platform front right
    [ 20.0, -5.0, -20.0], // 11 platform back right
];

/// Vertex colors (r, g, b, a). Blue cube, white platform.
#[rustfmt::skip]
pub const COLORS: [[f32; 4]; VERTEX_COUNT] = [
    [0.0, 0.0, 1.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0],
];

/// Vertex normals. The platform corners lean outward by a factor of four on
/// x and z, so they are not unit length.
#[rustfmt::skip]
pub const NORMALS: [[f32; 3]; VERTEX_COUNT] = [
    [   -N,  -N,    -N],
    [    N,  -N,    -N],
    [    N,  -N,     N],
    [   -N,  -N,     N],
    [   -N,   N,    -N],
    [    N,   N,    -N],
    [    N,   N,     N],
    [   -N,   N,     N],
    [-4.0 * N, -N, -4.0 * N],
    [-4.0 * N, -N,  4.0 * N],
    [ 4.0 * N, -N,  4.0 * N],
    [ 4.0 * N, -N, -4.0 * N],
];

/// Triangle list. Cube faces are counter-clockwise when seen from outside;
/// the second platform triangle is wound the other way.
#[rustfmt::skip]
pub const INDICES: [u8; INDEX_COUNT] = [
    2, 3, 0,  1, 2, 0,    // bottom
    5, 4, 7,  6, 5, 7,    // top
    6, 7, 3,  2, 6, 3,    // front
    4, 5, 1,  0, 4, 1,    // back
    7, 4, 0,  3, 7, 0,    // left
    5, 6, 2,  1, 5, 2,    // right
    8, 9, 10, 8, 11, 10,  // platform
];

/// A violated geometry invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("attribute arrays disagree: {positions} positions, {colors} colors, {normals} normals")]
    VertexCountMismatch {
        positions: usize,
        colors: usize,
        normals: usize,
    },
    #[error("index {index} at position {at} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        at: usize,
        index: u8,
        vertex_count: usize,
    },
    #[error("index count {0} is not a multiple of three")]
    PartialTriangle(usize),
    #[error("cube normal {vertex} has length {length}, expected 1")]
    NonUnitNormal { vertex: usize, length: f32 },
}

/// Check the store invariants against the given arrays.
pub fn validate(
    positions: &[[f32; 3]],
    colors: &[[f32; 4]],
    normals: &[[f32; 3]],
    indices: &[u8],
) -> Result<(), GeometryError> {
    if positions.len() != colors.len() || positions.len() != normals.len() {
        return Err(GeometryError::VertexCountMismatch {
            positions: positions.len(),
            colors: colors.len(),
            normals: normals.len(),
        });
    }

    if indices.len() % 3 != 0 {
        return Err(GeometryError::PartialTriangle(indices.len()));
    }

    if let Some((at, &index)) = indices
        .iter()
        .enumerate()
        .find(|(_, i)| usize::from(**i) >= positions.len())
    {
        return Err(GeometryError::IndexOutOfRange {
            at,
            index,
            vertex_count: positions.len(),
        });
    }

    for (vertex, n) in normals.iter().take(CUBE_VERTEX_COUNT).enumerate() {
        let length = Vec3::from_array(*n).length();
        if (length - 1.0).abs() > 1e-5 {
            return Err(GeometryError::NonUnitNormal { vertex, length });
        }
    }

    Ok(())
}

/// Number of triangles described by [`INDICES`].
pub fn triangle_count() -> usize {
    INDICES.len() / 3
}

/// Indices widened to 16 bits, for backends without an 8-bit index format.
pub fn indices_u16() -> Vec<u16> {
    INDICES.iter().copied().map(u16::from).collect()
}

pub fn position_bytes() -> &'static [u8] {
    bytemuck::cast_slice(&POSITIONS)
}

pub fn color_bytes() -> &'static [u8] {
    bytemuck::cast_slice(&COLORS)
}

pub fn normal_bytes() -> &'static [u8] {
    bytemuck::cast_slice(&NORMALS)
}

//! Geometry Store: the fixed cube and platform meshes.
//!
//! # Invariants
//! - Positions, colors and normals describe the same 12 vertices, in the same order.
//! - Every index refers to an existing vertex; indices form whole triangles.
//! - Cube normals are unit length. Platform normals are deliberately not.

mod store;

pub use store::{
    COLORS, CUBE_VERTEX_COUNT, GeometryError, INDEX_COUNT, INDICES, NORMALS, POSITIONS,
    VERTEX_COUNT, color_bytes, indices_u16, normal_bytes, position_bytes, triangle_count, validate,
};

pub fn crate_info() -> &'static str {
    "litcube-geometry v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("geometry"));
    }
}

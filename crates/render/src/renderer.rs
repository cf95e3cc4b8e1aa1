use crate::frame::Frame;
use crate::lighting::Lighting;
use glam::{Mat4, Vec3};
use litcube_scene::SceneState;
use std::convert::Infallible;
use std::fmt::Write;

/// Fixed camera the scene is viewed through.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 20.0, 55.0),
            target: Vec3::ZERO,
            fov_degrees: 60.0,
            near: 0.1,
            far: 200.0,
        }
    }
}

impl RenderView {
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fov_degrees.to_radians(), aspect, self.near, self.far);
        let view = Mat4::look_at_rh(self.eye, self.target, Vec3::Y);
        proj * view
    }
}

/// Renderer interface. One call draws exactly one frame of the given scene.
///
/// The renderer reads the scene; it never mutates it.
pub trait Renderer {
    /// What a rendered frame produces.
    type Output;
    type Error;

    fn render_frame(&mut self, scene: &SceneState) -> Result<Self::Output, Self::Error>;
}

/// Text renderer for headless runs.
///
/// Produces the same [`Frame`] a GPU backend would upload, formatted as text.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    lighting: Lighting,
    frames: u64,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;
    type Error = Infallible;

    fn render_frame(&mut self, scene: &SceneState) -> Result<String, Infallible> {
        self.frames += 1;
        let frame = Frame::build(scene, &self.lighting);
        let u = &frame.uniforms;

        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "=== Frame {} (pitch={:.1}, yaw={:.1}) ===",
            self.frames, scene.pitch, scene.yaw
        );
        let _ = writeln!(out, "modelMatrix:");
        for row in 0..4 {
            let r = u.model_matrix.row(row);
            let _ = writeln!(out, "  [{:>8.4} {:>8.4} {:>8.4} {:>8.4}]", r.x, r.y, r.z, r.w);
        }
        let _ = writeln!(
            out,
            "Ambient: ({:.2}, {:.2}, {:.2}, {:.2})",
            u.ambient.x, u.ambient.y, u.ambient.z, u.ambient.w
        );
        for (name, v) in [
            ("LightColor1", u.light_color),
            ("LightDirection1", u.light_direction),
            ("HalfVector1", u.half_vector),
        ] {
            let _ = writeln!(out, "{name}: ({:.2}, {:.2}, {:.2})", v.x, v.y, v.z);
        }
        let _ = writeln!(
            out,
            "draw: {} indices ({} triangles)",
            frame.index_count,
            frame.index_count / 3
        );

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use litcube_scene::Rotation;

    #[test]
    fn debug_renderer_unrotated() {
        let mut renderer = DebugTextRenderer::new();
        let output = renderer.render_frame(&SceneState::new()).unwrap();

        assert!(output.contains("Frame 1 (pitch=0.0, yaw=0.0)"));
        assert!(output.contains("[  1.0000   0.0000   0.0000   0.0000]"));
        assert!(output.contains("draw: 42 indices (14 triangles)"));
        assert!(output.contains("LightColor1: (1.00, 1.00, 0.00)"));
    }

    #[test]
    fn debug_renderer_counts_frames() {
        let mut renderer = DebugTextRenderer::new();
        let mut scene = SceneState::new();
        renderer.render_frame(&scene).unwrap();
        scene.apply(Rotation::YawRight);
        let output = renderer.render_frame(&scene).unwrap();

        assert_eq!(renderer.frames(), 2);
        assert!(output.contains("Frame 2 (pitch=0.0, yaw=-2.0)"));
    }

    #[test]
    fn render_view_default() {
        let view = RenderView::default();
        assert_eq!(view.fov_degrees, 60.0);
        assert_eq!(view.target, Vec3::ZERO);
    }

    #[test]
    fn whole_platform_is_in_front_of_camera() {
        let vp = RenderView::default().view_projection(1.0);
        for corner in [
            Vec3::new(-20.0, -5.0, -20.0),
            Vec3::new(20.0, -5.0, 20.0),
            Vec3::new(-20.0, -5.0, 20.0),
        ] {
            let clip = vp * corner.extend(1.0);
            let ndc = clip.truncate() / clip.w;
            assert!(clip.w > 0.0);
            assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0, "{corner} -> {ndc}");
            assert!((0.0..=1.0).contains(&ndc.z));
        }
    }
}

use glam::Mat4;
use serde::{Deserialize, Serialize};

/// Degrees added or removed by a single rotation key press.
pub const ROTATION_STEP_DEGREES: f32 = 2.0;

/// One step of cube rotation, produced by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
}

/// Cube orientation in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneState {
    pub pitch: f32,
    pub yaw: f32,
}

impl SceneState {
    /// Unrotated cube.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one rotation step.
    pub fn apply(&mut self, rotation: Rotation) {
        match rotation {
            Rotation::PitchUp => self.pitch += ROTATION_STEP_DEGREES,
            Rotation::PitchDown => self.pitch -= ROTATION_STEP_DEGREES,
            Rotation::YawLeft => self.yaw += ROTATION_STEP_DEGREES,
            Rotation::YawRight => self.yaw -= ROTATION_STEP_DEGREES,
        }
        tracing::debug!(pitch = self.pitch, yaw = self.yaw, ?rotation, "scene rotated");
    }

    /// Object-to-world transform: identity, then pitch about X, then yaw about Y.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::IDENTITY
            * Mat4::from_rotation_x(self.pitch.to_radians())
            * Mat4::from_rotation_y(self.yaw.to_radians())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(pitch: f32, yaw: f32) -> Mat4 {
        Mat4::from_rotation_x(pitch.to_radians()) * Mat4::from_rotation_y(yaw.to_radians())
    }

    #[test]
    fn starts_unrotated() {
        let s = SceneState::new();
        assert_eq!(s.pitch, 0.0);
        assert_eq!(s.yaw, 0.0);
        assert_eq!(s.model_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn pitch_steps_cancel() {
        let mut s = SceneState::new();
        for _ in 0..7 {
            s.apply(Rotation::PitchUp);
        }
        for _ in 0..7 {
            s.apply(Rotation::PitchDown);
        }
        assert_eq!(s.pitch, 0.0);
        assert_eq!(s.yaw, 0.0);
    }

    #[test]
    fn yaw_left_then_right_twice() {
        let mut s = SceneState::new();
        s.apply(Rotation::YawLeft);
        s.apply(Rotation::YawRight);
        s.apply(Rotation::YawRight);
        assert_eq!(s.yaw, -2.0);
        assert_eq!(s.pitch, 0.0);
        let expected_yaw = Mat4::from_rotation_y((-2.0f32).to_radians());
        assert!(s.model_matrix().abs_diff_eq(expected_yaw, 1e-6));
    }

    #[test]
    fn interleaving_does_not_matter() {
        let mut a = SceneState::new();
        let mut b = SceneState::new();
        use Rotation::*;
        for r in [PitchUp, YawLeft, PitchUp, YawRight, YawLeft] {
            a.apply(r);
        }
        for r in [YawLeft, YawLeft, YawRight, PitchUp, PitchUp] {
            b.apply(r);
        }
        assert_eq!(a, b);
        assert!(a.model_matrix().abs_diff_eq(expected(4.0, 2.0), 1e-6));
    }

    #[test]
    fn rotation_order_is_pitch_then_yaw() {
        let s = SceneState { pitch: 30.0, yaw: 60.0 };
        let m = s.model_matrix();
        assert!(m.abs_diff_eq(expected(30.0, 60.0), 1e-6));
        let swapped =
            Mat4::from_rotation_y(60.0f32.to_radians()) * Mat4::from_rotation_x(30.0f32.to_radians());
        assert!(!m.abs_diff_eq(swapped, 1e-3));
    }

    #[test]
    fn no_wraparound() {
        let mut s = SceneState::new();
        for _ in 0..200 {
            s.apply(Rotation::YawLeft);
        }
        assert_eq!(s.yaw, 400.0);
        assert!(s.model_matrix().abs_diff_eq(expected(0.0, 40.0), 1e-5));
    }

    #[test]
    fn state_serializes() {
        let s = SceneState { pitch: 2.0, yaw: -4.0 };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"pitch":2.0,"yaw":-4.0}"#);
        let back: SceneState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}

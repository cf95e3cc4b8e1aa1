use crate::key::Key;
use litcube_scene::Rotation;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Rotate the cube by one step.
    Rotate(Rotation),
    /// Leave the main loop.
    Quit,
    /// Unbound key.
    Noop,
}

/// Fixed key bindings: I/K pitch, J/L yaw, Escape quits.
pub fn binding(key: Key) -> Action {
    match key {
        Key::I => Action::Rotate(Rotation::PitchUp),
        Key::K => Action::Rotate(Rotation::PitchDown),
        Key::J => Action::Rotate(Rotation::YawLeft),
        Key::L => Action::Rotate(Rotation::YawRight),
        Key::Escape => Action::Quit,
        Key::Other => Action::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_keys_are_paired() {
        assert_eq!(binding(Key::I), Action::Rotate(Rotation::PitchUp));
        assert_eq!(binding(Key::K), Action::Rotate(Rotation::PitchDown));
        assert_eq!(binding(Key::J), Action::Rotate(Rotation::YawLeft));
        assert_eq!(binding(Key::L), Action::Rotate(Rotation::YawRight));
    }

    #[test]
    fn escape_quits() {
        assert_eq!(binding(Key::Escape), Action::Quit);
    }

    #[test]
    fn other_keys_do_nothing() {
        assert_eq!(binding(Key::Other), Action::Noop);
    }
}

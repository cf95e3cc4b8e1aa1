use crate::action::{Action, binding};
use crate::key::InputEvent;
use litcube_scene::SceneState;

/// Whether the main loop should keep going after a drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Applies queued window events to the scene.
#[derive(Debug, Default)]
pub struct InputHandler {
    applied: u64,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of rotation steps applied so far.
    pub fn applied(&self) -> u64 {
        self.applied
    }

    /// Drain every pending event in order.
    ///
    /// Returns [`LoopControl::Exit`] on the first quit request. Events after it
    /// are not applied.
    pub fn drain<I>(&mut self, events: I, scene: &mut SceneState) -> LoopControl
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            let action = match event {
                InputEvent::Quit => Action::Quit,
                InputEvent::KeyDown(key) => binding(key),
                InputEvent::KeyUp(_) | InputEvent::Other => Action::Noop,
            };

            match action {
                Action::Rotate(rotation) => {
                    scene.apply(rotation);
                    self.applied += 1;
                }
                Action::Quit => {
                    tracing::info!("quit requested");
                    return LoopControl::Exit;
                }
                Action::Noop => {}
            }
        }
        LoopControl::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{Key, parse_key_script};
    use glam::Mat4;

    #[test]
    fn scripted_yaw_scenario() {
        let mut scene = SceneState::new();
        let mut handler = InputHandler::new();
        let events = parse_key_script("JLL").unwrap();
        assert_eq!(handler.drain(events, &mut scene), LoopControl::Continue);
        assert_eq!(scene.yaw, -2.0);
        assert_eq!(scene.pitch, 0.0);
        assert_eq!(handler.applied(), 3);
        assert!(
            scene
                .model_matrix()
                .abs_diff_eq(Mat4::from_rotation_y((-2.0f32).to_radians()), 1e-6)
        );
    }

    #[test]
    fn i_and_k_cancel() {
        let mut scene = SceneState::new();
        let mut handler = InputHandler::new();
        handler.drain(parse_key_script("IIIKKK").unwrap(), &mut scene);
        assert_eq!(scene.pitch, 0.0);
        handler.drain(parse_key_script("KIKI").unwrap(), &mut scene);
        assert_eq!(scene.pitch, 0.0);
    }

    #[test]
    fn quit_stops_processing() {
        let mut scene = SceneState::new();
        let mut handler = InputHandler::new();
        let events = vec![
            InputEvent::KeyDown(Key::I),
            InputEvent::Quit,
            InputEvent::KeyDown(Key::I),
        ];
        assert_eq!(handler.drain(events, &mut scene), LoopControl::Exit);
        assert_eq!(scene.pitch, 2.0);
    }

    #[test]
    fn escape_is_quit() {
        let mut scene = SceneState::new();
        let mut handler = InputHandler::new();
        let control = handler.drain([InputEvent::KeyDown(Key::Escape)], &mut scene);
        assert_eq!(control, LoopControl::Exit);
    }

    #[test]
    fn key_up_and_other_events_are_ignored() {
        let mut scene = SceneState::new();
        let mut handler = InputHandler::new();
        let events = [
            InputEvent::KeyUp(Key::I),
            InputEvent::Other,
            InputEvent::KeyDown(Key::Other),
        ];
        assert_eq!(handler.drain(events, &mut scene), LoopControl::Continue);
        assert_eq!(scene, SceneState::new());
        assert_eq!(handler.applied(), 0);
    }

    #[test]
    fn empty_queue_continues() {
        let mut scene = SceneState::new();
        let mut handler = InputHandler::new();
        assert_eq!(
            handler.drain(std::iter::empty(), &mut scene),
            LoopControl::Continue
        );
    }
}

//! Translation from winit events to the toolkit-neutral camera inputs.

use glam::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::{MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

use crate::renderer::camera::{DragButton, Key, ScrollDirection};

/// Winit reports cursor position separately from button presses, so the last
/// known position is tracked here and handed to the controller on press.
#[derive(Default)]
pub struct InputState {
    pub cursor: Vec2,
}

impl InputState {
    /// Must see every cursor move, including ones the UI consumes.
    pub fn track(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Vec2::new(position.x as f32, position.y as f32);
    }
}

pub fn camera_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyE => Key::E,
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::Escape => Key::Escape,
        _ => return None,
    };
    Some(key)
}

pub fn drag_button(button: MouseButton) -> Option<DragButton> {
    match button {
        MouseButton::Left => Some(DragButton::Left),
        MouseButton::Middle => Some(DragButton::Middle),
        MouseButton::Right => Some(DragButton::Right),
        _ => None,
    }
}

/// One zoom step per wheel event regardless of its magnitude.
pub fn scroll_direction(delta: MouseScrollDelta) -> Option<ScrollDirection> {
    let y = match delta {
        MouseScrollDelta::LineDelta(_, y) => y as f64,
        MouseScrollDelta::PixelDelta(pos) => pos.y,
    };

    if y > 0.0 {
        Some(ScrollDirection::Up)
    } else if y < 0.0 {
        Some(ScrollDirection::Down)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::camera::CameraController;

    #[test]
    fn maps_movement_and_zoom_keys() {
        assert_eq!(camera_key(KeyCode::KeyW), Some(Key::W));
        assert_eq!(camera_key(KeyCode::KeyQ), Some(Key::Q));
        assert_eq!(camera_key(KeyCode::ArrowLeft), Some(Key::Left));
        assert_eq!(camera_key(KeyCode::Escape), Some(Key::Escape));
        assert_eq!(camera_key(KeyCode::KeyZ), None);
    }

    #[test]
    fn press_after_unseen_moves_starts_from_tracked_cursor() {
        let mut input = InputState::default();
        let mut cam = CameraController::default();

        input.track(PhysicalPosition::new(10.0, 10.0));
        input.track(PhysicalPosition::new(300.0, 200.5));
        cam.press(DragButton::Left, input.cursor);

        let before = cam.state;
        cam.motion(input.cursor);
        assert_eq!(cam.state, before);
    }

    #[test]
    fn maps_mouse_buttons() {
        assert_eq!(drag_button(MouseButton::Left), Some(DragButton::Left));
        assert_eq!(drag_button(MouseButton::Middle), Some(DragButton::Middle));
        assert_eq!(drag_button(MouseButton::Back), None);
    }

    #[test]
    fn wheel_up_zooms_in() {
        assert_eq!(
            scroll_direction(MouseScrollDelta::LineDelta(0.0, 1.0)),
            Some(ScrollDirection::Up)
        );
        assert_eq!(
            scroll_direction(MouseScrollDelta::LineDelta(0.0, -3.0)),
            Some(ScrollDirection::Down)
        );
        assert_eq!(
            scroll_direction(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 12.5))),
            Some(ScrollDirection::Up)
        );
        assert_eq!(scroll_direction(MouseScrollDelta::LineDelta(2.0, 0.0)), None);
    }
}

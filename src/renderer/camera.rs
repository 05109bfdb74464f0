use glam::{Mat4, Vec2, Vec3};

use crate::config::{
    FOV_Y_DEGREES, INITIAL_DISTANCE, INITIAL_PAN, INITIAL_PITCH, INITIAL_YAW, KEY_MOVE_FACTOR,
    MIN_DISTANCE, ORBIT_SENSITIVITY, PAN_SENSITIVITY, PITCH_LIMIT, WINDOW_HEIGHT, WINDOW_WIDTH,
    Z_FAR, Z_NEAR, ZOOM_STEP,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragButton {
    Left,
    Middle,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    W,
    A,
    S,
    D,
    Q,
    E,
    Up,
    Down,
    Left,
    Right,
    Escape,
}

/// What the event loop should do after the controller handled an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    Ignored,
    Redraw,
    Exit,
}

/// Orbit camera pose. Angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    /// Rotation about X, kept within `[-PITCH_LIMIT, PITCH_LIMIT]`.
    pub pitch: f32,
    /// Rotation about Y, unbounded.
    pub yaw: f32,
    pub pan: Vec2,
    /// Never below `MIN_DISTANCE`.
    pub distance: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            pitch: INITIAL_PITCH,
            yaw: INITIAL_YAW,
            pan: INITIAL_PAN,
            distance: INITIAL_DISTANCE,
        }
    }
}

impl CameraState {
    /// Eye-space translation, then pitch about X, then yaw about Y.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(-self.pan.x, -self.pan.y, -self.distance))
            * Mat4::from_rotation_x(self.pitch.to_radians())
            * Mat4::from_rotation_y(self.yaw.to_radians())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { button: DragButton, last: Vec2 },
}

#[derive(Clone, Debug, Default)]
pub struct CameraController {
    pub state: CameraState,
    drag: DragState,
}

impl CameraController {
    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.state.view_matrix()
    }

    pub fn reset(&mut self) -> Response {
        *self = Self::default();
        Response::Redraw
    }

    /// A press always (re)starts a drag, replacing any drag already in progress.
    pub fn press(&mut self, button: DragButton, cursor: Vec2) -> Response {
        self.drag = DragState::Dragging {
            button,
            last: cursor,
        };
        Response::Ignored
    }

    pub fn release(&mut self, button: DragButton) -> Response {
        if let DragState::Dragging { button: held, .. } = self.drag {
            if held == button {
                self.drag = DragState::Idle;
            }
        }
        Response::Ignored
    }

    pub fn motion(&mut self, cursor: Vec2) -> Response {
        let DragState::Dragging { button, last } = self.drag else {
            return Response::Ignored;
        };

        let delta = cursor - last;
        self.drag = DragState::Dragging {
            button,
            last: cursor,
        };

        match button {
            DragButton::Left => self.orbit(delta),
            DragButton::Middle => self.pan(delta),
            DragButton::Right => Response::Ignored,
        }
    }

    pub fn scroll(&mut self, direction: ScrollDirection) -> Response {
        match direction {
            ScrollDirection::Up => self.zoom_in(),
            ScrollDirection::Down => self.zoom_out(),
        }
    }

    pub fn key(&mut self, key: Key) -> Response {
        let step = self.state.distance * KEY_MOVE_FACTOR;

        match key {
            Key::Escape => return Response::Exit,
            Key::Q => return self.zoom_in(),
            Key::E => return self.zoom_out(),
            Key::W | Key::Down => self.state.pan.y += step,
            Key::S | Key::Up => self.state.pan.y -= step,
            Key::A | Key::Left => self.state.pan.x -= step,
            Key::D | Key::Right => self.state.pan.x += step,
        }

        log::debug!("pan -> ({:.3}, {:.3})", self.state.pan.x, self.state.pan.y);
        Response::Redraw
    }

    fn orbit(&mut self, delta: Vec2) -> Response {
        self.state.yaw += delta.x * ORBIT_SENSITIVITY;
        self.state.pitch =
            (self.state.pitch + delta.y * ORBIT_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        Response::Redraw
    }

    fn pan(&mut self, delta: Vec2) -> Response {
        let scale = self.state.distance * PAN_SENSITIVITY;
        self.state.pan.x -= delta.x * scale;
        self.state.pan.y += delta.y * scale;
        Response::Redraw
    }

    fn zoom_in(&mut self) -> Response {
        self.state.distance = (self.state.distance - ZOOM_STEP).max(MIN_DISTANCE);
        log::debug!("distance -> {:.2}", self.state.distance);
        Response::Redraw
    }

    fn zoom_out(&mut self) -> Response {
        self.state.distance += ZOOM_STEP;
        log::debug!("distance -> {:.2}", self.state.distance);
        Response::Redraw
    }
}

/// Perspective projection rebuilt on every window reshape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: FOV_Y_DEGREES.to_radians(),
            aspect: WINDOW_WIDTH as f32 / WINDOW_HEIGHT as f32,
            near: Z_NEAR,
            far: Z_FAR,
        }
    }
}

impl Projection {
    /// Zero height is floored to one. A zero width (minimised window) keeps the
    /// previous aspect.
    pub fn reshape(&mut self, width: u32, height: u32) {
        if width == 0 {
            return;
        }
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }
}

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub projection: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(projection: &Projection, view: Mat4) -> Self {
        Self {
            projection: projection.matrix().to_cols_array_2d(),
            view: view.to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn starts_at_initial_pose() {
        let cam = CameraController::default();
        assert_eq!(cam.state.pitch, 20.0);
        assert_eq!(cam.state.yaw, 30.0);
        assert_eq!(cam.state.distance, 6.0);
        assert_eq!(cam.state.pan, Vec2::ZERO);
        assert_eq!(cam.drag(), DragState::Idle);
    }

    #[test]
    fn left_drag_orbits() {
        let mut cam = CameraController::default();
        cam.press(DragButton::Left, Vec2::new(100.0, 100.0));
        let r = cam.motion(Vec2::new(110.0, 90.0));

        assert_eq!(r, Response::Redraw);
        assert!(close(cam.state.yaw, 35.0));
        assert!(close(cam.state.pitch, 15.0));
    }

    #[test]
    fn motion_deltas_are_incremental() {
        let mut cam = CameraController::default();
        cam.press(DragButton::Left, Vec2::new(0.0, 0.0));
        cam.motion(Vec2::new(10.0, 0.0));
        cam.motion(Vec2::new(20.0, 0.0));

        assert!(close(cam.state.yaw, 40.0));
        assert_eq!(
            cam.drag(),
            DragState::Dragging {
                button: DragButton::Left,
                last: Vec2::new(20.0, 0.0)
            }
        );
    }

    #[test]
    fn pitch_stays_clamped_for_any_drag_sequence() {
        let mut cam = CameraController::default();
        cam.press(DragButton::Left, Vec2::ZERO);

        let mut y = 0.0;
        for dy in [500.0, -37.0, 1000.0, -4000.0, 13.0, 9999.0, -1.0] {
            y += dy;
            cam.motion(Vec2::new(0.0, y));
            assert!((-90.0..=90.0).contains(&cam.state.pitch), "{}", cam.state.pitch);
        }
    }

    #[test]
    fn yaw_is_unbounded() {
        let mut cam = CameraController::default();
        cam.press(DragButton::Left, Vec2::ZERO);
        cam.motion(Vec2::new(2000.0, 0.0));
        assert!(close(cam.state.yaw, 1030.0));
    }

    #[test]
    fn middle_drag_pans_proportionally_to_distance() {
        let mut cam = CameraController::default();
        cam.press(DragButton::Middle, Vec2::new(50.0, 50.0));
        cam.motion(Vec2::new(70.0, 50.0));

        assert!(close(cam.state.pan.x, -1.8));
        assert!(close(cam.state.pan.y, 0.0));

        cam.motion(Vec2::new(70.0, 60.0));
        assert!(close(cam.state.pan.y, 0.9));
    }

    #[test]
    fn pan_speed_follows_zoom() {
        let mut cam = CameraController::default();
        for _ in 0..10 {
            cam.key(Key::E);
        }
        assert!(close(cam.state.distance, 9.0));

        cam.press(DragButton::Middle, Vec2::new(50.0, 50.0));
        cam.motion(Vec2::new(70.0, 50.0));
        assert!(close(cam.state.pan.x, -2.7));
        cam.release(DragButton::Middle);

        cam.key(Key::W);
        assert!(close(cam.state.pan.y, 0.45));
    }

    #[test]
    fn right_drag_only_tracks_the_cursor() {
        let mut cam = CameraController::default();
        let before = cam.state;
        cam.press(DragButton::Right, Vec2::ZERO);
        assert_eq!(cam.motion(Vec2::new(40.0, 40.0)), Response::Ignored);
        assert_eq!(cam.state, before);
    }

    #[test]
    fn motion_without_a_held_button_is_ignored() {
        let mut cam = CameraController::default();
        let before = cam.state;
        assert_eq!(cam.motion(Vec2::new(40.0, 40.0)), Response::Ignored);
        assert_eq!(cam.state, before);
    }

    #[test]
    fn only_the_matching_release_ends_a_drag() {
        let mut cam = CameraController::default();
        cam.press(DragButton::Left, Vec2::ZERO);
        cam.release(DragButton::Middle);
        assert!(matches!(cam.drag(), DragState::Dragging { .. }));

        cam.release(DragButton::Left);
        assert_eq!(cam.drag(), DragState::Idle);

        let before = cam.state;
        cam.motion(Vec2::new(30.0, 30.0));
        assert_eq!(cam.state, before);
    }

    #[test]
    fn scrolling_down_has_no_upper_bound() {
        let mut cam = CameraController::default();
        for _ in 0..50 {
            assert_eq!(cam.scroll(ScrollDirection::Down), Response::Redraw);
        }
        assert!(close(cam.state.distance, 21.0));
    }

    #[test]
    fn distance_never_drops_below_one() {
        let mut cam = CameraController::default();
        for _ in 0..30 {
            cam.scroll(ScrollDirection::Up);
            assert!(cam.state.distance >= 1.0);
        }
        for _ in 0..5 {
            cam.key(Key::Q);
            assert!(cam.state.distance >= 1.0);
        }
        assert_eq!(cam.state.distance, 1.0);

        cam.key(Key::E);
        assert!(close(cam.state.distance, 1.3));
    }

    #[test]
    fn movement_keys_scale_with_distance() {
        let mut cam = CameraController::default();

        cam.key(Key::W);
        assert!(close(cam.state.pan.y, 0.3));
        cam.key(Key::S);
        assert!(close(cam.state.pan.y, 0.0));
        cam.key(Key::A);
        assert!(close(cam.state.pan.x, -0.3));
        cam.key(Key::D);
        cam.key(Key::D);
        assert!(close(cam.state.pan.x, 0.3));
    }

    #[test]
    fn arrow_keys_use_the_inverted_vertical_convention() {
        let mut cam = CameraController::default();

        cam.key(Key::Up);
        assert!(close(cam.state.pan.y, -0.3));
        cam.key(Key::Down);
        cam.key(Key::Down);
        assert!(close(cam.state.pan.y, 0.3));
        cam.key(Key::Left);
        assert!(close(cam.state.pan.x, -0.3));
        cam.key(Key::Right);
        assert!(close(cam.state.pan.x, 0.0));
    }

    #[test]
    fn escape_requests_exit_without_touching_state() {
        let mut cam = CameraController::default();
        let before = cam.state;
        assert_eq!(cam.key(Key::Escape), Response::Exit);
        assert_eq!(cam.state, before);
    }

    #[test]
    fn reset_restores_initial_pose() {
        let mut cam = CameraController::default();
        cam.key(Key::E);
        cam.press(DragButton::Left, Vec2::ZERO);
        cam.motion(Vec2::new(10.0, 10.0));
        cam.reset();

        assert_eq!(cam.state, CameraState::default());
        assert_eq!(cam.drag(), DragState::Idle);
    }

    #[test]
    fn view_translates_origin_to_look_at_point() {
        let state = CameraState {
            pitch: 33.0,
            yaw: -71.0,
            pan: Vec2::new(0.5, -1.5),
            distance: 4.0,
        };
        let p = state.view_matrix().transform_point3(Vec3::ZERO);
        assert!((p - Vec3::new(-0.5, 1.5, -4.0)).length() < 1e-5);
    }

    #[test]
    fn view_applies_yaw_before_pitch_to_world_points() {
        let state = CameraState {
            pitch: 90.0,
            yaw: 90.0,
            pan: Vec2::ZERO,
            distance: 0.0,
        };
        // Yaw 90 about Y sends +X to -Z, then pitch 90 about X sends -Z to +Y.
        let p = state.view_matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::Y).length() < 1e-5, "{p:?}");
    }

    #[test]
    fn reshape_floors_zero_height() {
        let mut proj = Projection::default();
        proj.reshape(800, 0);
        assert_eq!(proj.aspect, 800.0);
        assert!(proj.matrix().is_finite());

        proj.reshape(1024, 768);
        assert!((proj.aspect - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn minimised_window_keeps_previous_aspect() {
        let mut proj = Projection::default();
        proj.reshape(1024, 768);

        proj.reshape(0, 768);
        assert!((proj.aspect - 4.0 / 3.0).abs() < 1e-6);
        assert!(proj.matrix().is_finite());

        proj.reshape(0, 0);
        assert!(proj.matrix().is_finite());
    }
}

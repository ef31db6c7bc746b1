use winit::event::{DeviceEvent, ElementState, MouseButton, MouseScrollDelta, TouchPhase, WindowEvent};

use crate::traits::{InputSource, MoveDelta, MoveHandler};

/// Pixels per wheel "line", roughly what browsers report per notch
pub const PIXELS_PER_LINE: f32 = 100.0;

/// Pointer lock change the host should apply to its window (cursor grab + visibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerLockRequest {
    Engage,
    Release,
}

/// Adapter that turns Winit events into raw movement deltas
#[derive(Debug, Clone, Default)]
pub struct WinitInputAdapter {
    /// Whether relative mouse motion is currently captured
    pointer_locked: bool,
    /// Tracked touch id and its last sample
    touch: Option<(u64, (f32, f32))>,
    /// Deltas not yet delivered to a handler
    pending: Vec<MoveDelta>,
}

impl WinitInputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_locked(&self) -> bool {
        self.pointer_locked
    }

    pub fn pending(&self) -> &[MoveDelta] {
        &self.pending
    }

    /// Process a Winit WindowEvent; a left click asks the host to toggle pointer lock
    pub fn process_window_event(&mut self, event: &WindowEvent) -> Option<PointerLockRequest> {
        match event {
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => return Some(self.on_click()),
            WindowEvent::MouseWheel { delta, .. } => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * PIXELS_PER_LINE,
                    MouseScrollDelta::PixelDelta(position) => -position.y as f32,
                };
                self.on_wheel(amount);
            }
            WindowEvent::Touch(touch) => {
                self.on_touch(
                    touch.id,
                    touch.phase,
                    touch.location.x as f32,
                    touch.location.y as f32,
                );
            }
            WindowEvent::Focused(false) => self.on_focus_lost(),
            _ => {}
        }
        None
    }

    /// Process a Winit DeviceEvent (raw mouse motion)
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.on_pointer_motion(*dx as f32, *dy as f32);
        }
    }

    /// Toggle the logical pointer lock
    pub fn on_click(&mut self) -> PointerLockRequest {
        self.pointer_locked = !self.pointer_locked;
        if self.pointer_locked {
            PointerLockRequest::Engage
        } else {
            PointerLockRequest::Release
        }
    }

    /// Relative mouse motion, only forwarded while the pointer is locked
    pub fn on_pointer_motion(&mut self, dx: f32, dy: f32) {
        if self.pointer_locked {
            self.pending.push(MoveDelta::pointer(dx, dy));
        }
    }

    /// Single-touch drag; the first sample of a touch yields a zero delta
    pub fn on_touch(&mut self, id: u64, phase: TouchPhase, x: f32, y: f32) {
        match (phase, self.touch) {
            (TouchPhase::Started, None) => {
                self.touch = Some((id, (x, y)));
                self.pending.push(MoveDelta::touch(0.0, 0.0));
            }
            (TouchPhase::Moved, Some((tracked, (last_x, last_y)))) if tracked == id => {
                self.touch = Some((id, (x, y)));
                self.pending.push(MoveDelta::touch(x - last_x, y - last_y));
            }
            (TouchPhase::Ended | TouchPhase::Cancelled, Some((tracked, _))) if tracked == id => {
                self.touch = None;
            }
            _ => {}
        }
    }

    /// Vertical scroll; positive zooms out
    pub fn on_wheel(&mut self, amount: f32) {
        self.pending.push(MoveDelta::wheel(amount));
    }

    pub fn on_focus_lost(&mut self) {
        self.pointer_locked = false;
        self.touch = None;
    }
}

impl InputSource for WinitInputAdapter {
    fn drain_moves(&mut self, handler: &mut dyn MoveHandler) {
        for delta in self.pending.drain(..) {
            handler.handle_move(delta);
        }
    }
}

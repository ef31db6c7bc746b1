/// Which physical input produced a movement delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Mouse,
    Touch,
    Wheel,
}

/// Raw per-event movement: pointer/touch motion in pixels and vertical wheel amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveDelta {
    pub dx: f32,
    pub dy: f32,
    pub wheel: f32,
    pub kind: InputKind,
}

impl MoveDelta {
    pub const fn pointer(dx: f32, dy: f32) -> Self {
        Self { dx, dy, wheel: 0.0, kind: InputKind::Mouse }
    }

    pub const fn touch(dx: f32, dy: f32) -> Self {
        Self { dx, dy, wheel: 0.0, kind: InputKind::Touch }
    }

    pub const fn wheel(amount: f32) -> Self {
        Self { dx: 0.0, dy: 0.0, wheel: amount, kind: InputKind::Wheel }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0 && self.wheel == 0.0
    }
}

/// Receiver of movement deltas (e.g. an orbit camera)
pub trait MoveHandler {
    fn handle_move(&mut self, delta: MoveDelta);
}

/// Source of movement deltas
pub trait InputSource {
    /// Deliver every delta queued since the last drain, oldest first
    fn drain_moves(&mut self, handler: &mut dyn MoveHandler);
}

use glam::Vec2;

/// Raw input state an external source reports for one frame. The select
/// field is the level state of the button; edge detection happens in
/// [`EdgeTrigger`], not at the device.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer position in screen pixels, origin top-left.
    pub pointer: Vec2,
    pub select_held: bool,
    /// Raw scroll delta in device units (e.g. 120 per wheel detent).
    pub scroll: f32,
}

impl FrameInput {
    pub fn pointer_at(x: f32, y: f32) -> Self {
        Self {
            pointer: Vec2::new(x, y),
            ..Self::default()
        }
    }

    pub fn with_select(mut self) -> Self {
        self.select_held = true;
        self
    }

    pub fn with_scroll(mut self, scroll: f32) -> Self {
        self.scroll = scroll;
        self
    }
}

/// Turns a held button level into a once-per-press edge: `update` returns
/// true only on the frame the state goes from released to held.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTrigger {
    was_held: bool,
}

impl EdgeTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, held: bool) -> bool {
        let pressed = held && !self.was_held;
        self.was_held = held;
        pressed
    }
}

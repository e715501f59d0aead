/// Discrete user actions delivered once per key or button press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Leave the main loop
    Quit,
    /// Begin continuous stepping until the pattern is stable
    Start,
    /// Toggle the cell under a screen position
    Toggle { x: f32, y: f32 },
    /// Move the camera back to the origin
    ResetCamera,
    /// Switch to the next neighbor-counting algorithm
    CycleAlgorithm,
}

/// Everything the input layer gathered during one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub events: Vec<InputEvent>,
    /// Held pan direction, each axis in -1..=1
    pub pan: (i64, i64),
}

impl FrameInput {
    pub fn quit_requested(&self) -> bool {
        self.events.contains(&InputEvent::Quit)
    }
}

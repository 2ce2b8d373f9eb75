/// Input event types the engine understands.
/// These are generic; scenes interpret them as needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer (mouse/touch) pressed at surface coordinates.
    PointerDown { x: f32, y: f32 },
    /// Key pressed, identified by the host key code.
    KeyDown { key_code: u32 },
    /// The drawing surface changed size.
    Resized { width: f32, height: f32 },
    /// Scene-specific event from the host UI (start buttons and the like).
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// FIFO queue of input events, handed to the scene each frame
/// and drained after it ran.
#[derive(Debug)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        InputQueue {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Take all queued events, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

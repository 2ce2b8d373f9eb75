use ember_engine::{
    DrawList, FrameBuffer, FrameLayout, InputEvent, InputQueue, Scene, SceneConfig, SceneContext,
};

/// Generic scene runner that wires up the engine loop.
///
/// Each concrete scene crate creates a `thread_local!` SceneRunner and
/// exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct SceneRunner<S: Scene> {
    scene: S,
    ctx: SceneContext,
    input: InputQueue,
    canvas: DrawList,
    frame_buffer: FrameBuffer,
    config: SceneConfig,
    initialized: bool,
}

impl<S: Scene> SceneRunner<S> {
    pub fn new(scene: S) -> Self {
        let config = scene.config();
        Self::with_config(scene, config)
    }

    /// Build a runner from an explicit config, normally the scene's own
    /// with host option overrides already applied.
    pub fn with_config(scene: S, config: SceneConfig) -> Self {
        let layout = FrameLayout::from_config(&config);
        let ctx = SceneContext::from_config(&config);
        let canvas = DrawList::with_capacity(config.max_commands);
        let frame_buffer = FrameBuffer::new(layout);

        Self {
            scene,
            ctx,
            input: InputQueue::new(),
            canvas,
            frame_buffer,
            config,
            initialized: false,
        }
    }

    /// Initialize the scene. Call once after construction.
    pub fn init(&mut self) {
        self.scene.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Resize the drawing surface. The scene also sees this as an
    /// input event on its next frame.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.ctx.set_surface_size(width, height);
        self.input.push(InputEvent::Resized { width, height });
    }

    /// Run one animation frame: advance the scene, repaint, publish.
    pub fn frame(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        self.scene.frame(&mut self.ctx, &self.input, dt);

        // Drain input after the scene consumed it
        self.input.drain();

        // Repaint from committed state
        self.canvas.clear();
        self.scene.paint(&self.ctx, &mut self.canvas);

        self.frame_buffer
            .publish(&self.canvas, &self.ctx.events, self.ctx.width, self.ctx.height);
    }

    // ---- Pointer accessors for host-side buffer reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame_buffer.as_ptr()
    }

    pub fn frame_len_floats(&self) -> u32 {
        self.frame_buffer.len_floats() as u32
    }

    pub fn surface_width(&self) -> f32 {
        self.ctx.width
    }

    pub fn surface_height(&self) -> f32 {
        self.ctx.height
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_commands(&self) -> u32 {
        self.config.max_commands as u32
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.frame_buffer.layout().buffer_total_floats as u32
    }
}

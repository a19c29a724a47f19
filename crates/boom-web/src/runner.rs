use boom_engine::{Clock, GameState, InputEvent, InputQueue, RenderBuffer, StateStack};

/// Game runner that wires the application states to the host loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see `export_game!`), because wasm-bindgen
/// cannot export the runner directly.
pub struct GameRunner {
    states: StateStack,
    input: InputQueue,
    render_buffer: RenderBuffer,
    clock: Clock,
    quit: bool,
}

impl GameRunner {
    pub fn new(initial: Box<dyn GameState>) -> Self {
        Self::with_clock(initial, Clock::default())
    }

    pub fn with_clock(initial: Box<dyn GameState>, clock: Clock) -> Self {
        let mut states = StateStack::new();
        states.push(initial);
        Self {
            states,
            input: InputQueue::new(),
            render_buffer: RenderBuffer::new(),
            clock,
            quit: false,
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Whether the game has ended (quit requested or no state left).
    pub fn is_finished(&self) -> bool {
        self.quit || self.states.is_empty()
    }

    /// Run one frame: advance the clock, deliver input, update and draw the top state.
    /// `now_ms` is the host timestamp in milliseconds.
    pub fn tick(&mut self, now_ms: f64) {
        if self.is_finished() {
            return;
        }

        let dt = self.clock.advance(now_ms / 1000.0);

        for event in self.input.drain() {
            match event {
                InputEvent::KeyDown { key_code } => self.states.key_pressed(key_code),
                InputEvent::KeyUp { key_code } => self.states.key_released(key_code),
                InputEvent::Quit => {
                    log::info!("Quit received");
                    self.quit = true;
                    self.states.clear();
                    return;
                }
            }
        }

        self.states.update(dt);

        self.render_buffer.clear();
        self.states.draw(&mut self.render_buffer);
    }

    /// Step of the most recent tick, in seconds.
    pub fn last_dt(&self) -> f32 {
        self.clock.dt()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    // ---- Pointer accessors for host-side reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn spheres_ptr(&self) -> *const f32 {
        self.render_buffer.spheres_ptr()
    }

    pub fn sphere_count(&self) -> u32 {
        self.render_buffer.sphere_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        self.render_buffer.camera_ptr()
    }
}

use crate::renderer::instance::RenderBuffer;

/// What the state stack should do after a state's update.
pub enum Transition {
    /// Stay on the current state.
    None,
    /// Pause the current state and run a new one on top.
    Push(Box<dyn GameState>),
    /// Drop the current state and resume the one below.
    Pop,
    /// Swap the current state for a new one.
    Replace(Box<dyn GameState>),
    /// Drop every state.
    Quit,
}

impl std::fmt::Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transition::None => write!(f, "None"),
            Transition::Push(state) => write!(f, "Push({})", state.name()),
            Transition::Pop => write!(f, "Pop"),
            Transition::Replace(state) => write!(f, "Replace({})", state.name()),
            Transition::Quit => write!(f, "Quit"),
        }
    }
}

/// One application screen (menu, match, pause overlay).
/// Only the top state of a `StateStack` receives updates and input.
pub trait GameState {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Advance by `dt` seconds.
    fn update(&mut self, dt: f32) -> Transition;

    /// Fill the render buffer for this frame.
    fn draw(&self, buffer: &mut RenderBuffer);

    fn key_pressed(&mut self, _key_code: u32) {}

    fn key_released(&mut self, _key_code: u32) {}
}

/// Stack of application states.
#[derive(Default)]
pub struct StateStack {
    states: Vec<Box<dyn GameState>>,
}

impl StateStack {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    pub fn push(&mut self, state: Box<dyn GameState>) {
        log::debug!("State push: {}", state.name());
        self.states.push(state);
    }

    pub fn pop(&mut self) -> Option<Box<dyn GameState>> {
        let state = self.states.pop();
        if let Some(state) = &state {
            log::debug!("State pop: {}", state.name());
        }
        state
    }

    pub fn replace(&mut self, state: Box<dyn GameState>) -> Option<Box<dyn GameState>> {
        let old = self.states.pop();
        log::debug!(
            "State replace: {} -> {}",
            old.as_ref().map_or("<empty>", |s| s.name()),
            state.name()
        );
        self.states.push(state);
        old
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }

    pub fn top(&self) -> Option<&dyn GameState> {
        self.states.last().map(|s| s.as_ref())
    }

    /// Update the top state and apply the transition it returns.
    pub fn update(&mut self, dt: f32) {
        let Some(top) = self.states.last_mut() else {
            return;
        };
        match top.update(dt) {
            Transition::None => {}
            Transition::Push(state) => self.push(state),
            Transition::Pop => {
                self.pop();
            }
            Transition::Replace(state) => {
                self.replace(state);
            }
            Transition::Quit => {
                log::info!("Quit requested by {}", top_name(&self.states));
                self.clear();
            }
        }
    }

    /// Draw the top state.
    pub fn draw(&self, buffer: &mut RenderBuffer) {
        if let Some(top) = self.states.last() {
            top.draw(buffer);
        }
    }

    pub fn key_pressed(&mut self, key_code: u32) {
        if let Some(top) = self.states.last_mut() {
            top.key_pressed(key_code);
        }
    }

    pub fn key_released(&mut self, key_code: u32) {
        if let Some(top) = self.states.last_mut() {
            top.key_released(key_code);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }
}

fn top_name(states: &[Box<dyn GameState>]) -> &str {
    states.last().map_or("<empty>", |s| s.name())
}

use crate::api::types::ObjectId;

/// Goal of an AI-controlled player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiGoal {
    #[default]
    Idle,
    Flee,
    Chase,
}

/// Decision state of an AI-controlled player.
/// Targets are ids, resolved against the scene on every use.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AiState {
    pub goal: AiGoal,
    /// Object being fled from or chased.
    pub target: Option<ObjectId>,
    /// Closest opponent seen at the last decision that found one.
    pub last_opponent: Option<ObjectId>,
    /// Time since the last decision.
    pub decision_timer: f32,
    /// Disabled AI players stand still.
    pub enabled: bool,
}

impl AiState {
    pub fn new() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }
}

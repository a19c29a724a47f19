use crate::components::item::ItemKind;

/// Destructible scenery.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BlockState {
    /// Item dropped when destroyed. `None` rolls a random kind.
    pub loot: Option<ItemKind>,
}

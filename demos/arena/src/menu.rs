//! Keyboard-driven list menu used by the title and pause screens.

use boom_engine::{RenderBuffer, SphereInstance};

use crate::game::{KEY_DOWN, KEY_ENTER, KEY_UP};

const MARKER_X: f32 = -4.0;
const MARKER_TOP: f32 = 3.0;
const MARKER_SPACING: f32 = 1.5;
const MARKER_RADIUS: f32 = 0.4;
const ITEM_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];
const SELECTED_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Result of feeding a key to a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    NotHandled,
    Moved,
    /// Enter was pressed on the item at this index.
    Selected(usize),
}

#[derive(Debug, Clone)]
pub struct Menu {
    title: String,
    items: Vec<String>,
    selected: usize,
}

impl Menu {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
            selected: 0,
        }
    }

    pub fn with_item(mut self, name: impl Into<String>) -> Self {
        self.add_item(name);
        self
    }

    pub fn add_item(&mut self, name: impl Into<String>) {
        self.items.push(name.into());
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }

    /// Move the highlight up, wrapping to the last item.
    pub fn up(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + self.items.len() - 1) % self.items.len();
        }
    }

    /// Move the highlight down, wrapping to the first item.
    pub fn down(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    pub fn key_pressed(&mut self, key_code: u32) -> MenuAction {
        match key_code {
            KEY_UP => {
                self.up();
                MenuAction::Moved
            }
            KEY_DOWN => {
                self.down();
                MenuAction::Moved
            }
            KEY_ENTER if !self.items.is_empty() => {
                log::debug!("{}: {}", self.title, self.items[self.selected]);
                MenuAction::Selected(self.selected)
            }
            _ => MenuAction::NotHandled,
        }
    }

    /// One marker per item, top to bottom; the highlighted one is red.
    pub fn draw(&self, buffer: &mut RenderBuffer) {
        for i in 0..self.items.len() {
            let color = if i == self.selected {
                SELECTED_COLOR
            } else {
                ITEM_COLOR
            };
            buffer.push_sphere(SphereInstance {
                center: [MARKER_X, MARKER_TOP - i as f32 * MARKER_SPACING, 0.0],
                radius: MARKER_RADIUS,
                color,
            });
        }
    }
}

use wasm_bindgen::prelude::*;
use boom_engine::*;

mod game;
mod menu;
mod meshes;
use game::MainMenuState;

boom_web::export_game!(MainMenuState::new(), "arena");

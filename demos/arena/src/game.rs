use boom_engine::*;
use glam::Vec3;

use crate::menu::{Menu, MenuAction};
use crate::meshes::mesh_source;

// DOM key codes
pub(crate) const KEY_ENTER: u32 = 13;
pub(crate) const KEY_SPACE: u32 = 32;
pub(crate) const KEY_ESCAPE: u32 = 27;
pub(crate) const KEY_LEFT: u32 = 37;
pub(crate) const KEY_UP: u32 = 38;
pub(crate) const KEY_RIGHT: u32 = 39;
pub(crate) const KEY_DOWN: u32 = 40;
pub(crate) const KEY_P: u32 = 80;

const ARENA_HALF: f32 = 6.0;
const BLOCK_SPACING: f32 = 2.0;
const CAMERA_SMOOTHING: f32 = 0.9;
const INTRO_ZOOM_DISTANCE: f32 = 22.0;
const INTRO_ZOOM_SECONDS: f32 = 2.0;

/// Arrow keys currently held.
#[derive(Debug, Default, Clone, Copy)]
struct Arrows {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
}

impl Arrows {
    fn set(&mut self, key_code: u32, held: bool) -> bool {
        match key_code {
            KEY_LEFT => self.left = held,
            KEY_RIGHT => self.right = held,
            KEY_UP => self.up = held,
            KEY_DOWN => self.down = held,
            _ => return false,
        }
        true
    }

    /// Z rotation for the held combination, or `None` when standing still.
    /// Up faces 180°, right 90°, down 0°, left 270°.
    fn rotation(&self) -> Option<f32> {
        let dx = self.right as i32 - self.left as i32;
        let dy = self.up as i32 - self.down as i32;
        if dx == 0 && dy == 0 {
            return None;
        }
        let travel = (dy as f32).atan2(dx as f32).to_degrees();
        Some((travel + 90.0).rem_euclid(360.0))
    }
}

/// One bomberman match: a human against two AI players on a block grid.
pub struct ArenaState {
    scene: Scene,
    human: ObjectId,
    arrows: Arrows,
    lay_bomb: bool,
    pause: bool,
    quit: bool,
}

impl ArenaState {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        let loader = ManifestMeshLoader::new(mesh_source(), config.mesh_dir.clone());
        let mut scene = Scene::with_loader(config, Box::new(loader));

        scene.add(Object::level("arena"));
        let human = scene.add(
            Object::player("Player", "player")
                .with_pos(Vec3::new(-ARENA_HALF, -ARENA_HALF, 0.0))
                .with_animation("idle"),
        );
        scene.add(
            Object::ai_player("Red", "player")
                .with_pos(Vec3::new(ARENA_HALF, ARENA_HALF, 0.0))
                .with_animation("idle"),
        );
        scene.add(
            Object::ai_player("Blue", "player")
                .with_pos(Vec3::new(ARENA_HALF, -ARENA_HALF, 0.0))
                .with_animation("idle"),
        );

        let steps = (2.0 * ARENA_HALF / BLOCK_SPACING) as i32;
        let mut placed = 0;
        for i in 1..steps {
            for j in 1..steps {
                let x = -ARENA_HALF + i as f32 * BLOCK_SPACING;
                let y = -ARENA_HALF + j as f32 * BLOCK_SPACING;
                // Every fourth block carries an extra bomb; the rest roll
                let loot = (placed % 4 == 0).then_some(ItemKind::ExtraBomb);
                scene.add(Object::block("block", loot).with_pos(Vec3::new(x, y, 0.0)));
                placed += 1;
            }
        }

        let camera = scene.camera_mut();
        camera.set_smoothing(CAMERA_SMOOTHING);
        camera.zoom_to(INTRO_ZOOM_DISTANCE, INTRO_ZOOM_SECONDS);

        log::info!("Arena ready: {} objects, {} blocks", scene.len(), placed);

        Self {
            scene,
            human,
            arrows: Arrows::default(),
            lay_bomb: false,
            pause: false,
            quit: false,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn human(&self) -> ObjectId {
        self.human
    }

    fn steer_human(&mut self) {
        let rotation = self.arrows.rotation();
        if let Some(player) = self.scene.get_mut(self.human) {
            match rotation {
                Some(z) => {
                    player.rotation.z = z;
                    player.set_moving(true);
                }
                None => player.set_moving(false),
            }
        }
    }

    /// Walk animation while moving, idle otherwise.
    fn animate_players(&mut self) {
        for id in self.scene.ids_of_type(ObjectType::Player) {
            if let Some(player) = self.scene.get_mut(id) {
                let name = if player.is_moving() { "walk" } else { "idle" };
                player.animation.play_if_different(name);
            }
        }
    }

    fn handle_events(&mut self) -> Transition {
        for event in self.scene.drain_events() {
            match event {
                SceneEvent::PlayerKilled { player, .. } if player == self.human => {
                    log::info!("You were blown up");
                }
                SceneEvent::ItemPicked { player, kind, .. } if player == self.human => {
                    log::info!("Picked up {:?}", kind);
                }
                SceneEvent::MatchWon { winner } => {
                    if winner == self.human {
                        log::info!("You win!");
                    } else {
                        log::info!("Match over");
                    }
                    return Transition::Pop;
                }
                _ => {}
            }
        }
        if self.scene.count(ObjectType::Player) == 0 {
            log::info!("Nobody survived");
            return Transition::Pop;
        }
        Transition::None
    }
}

impl Default for ArenaState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for ArenaState {
    fn name(&self) -> &str {
        "arena"
    }

    fn update(&mut self, dt: f32) -> Transition {
        if self.quit {
            return Transition::Quit;
        }
        if self.pause {
            self.pause = false;
            // Releases while paused never reach this state
            self.arrows = Arrows::default();
            let mut snapshot = RenderBuffer::new();
            self.scene.render(&mut snapshot);
            return Transition::Push(Box::new(PausedState::new(snapshot)));
        }

        if std::mem::take(&mut self.lay_bomb) {
            self.scene.lay_bomb(self.human);
        }
        self.steer_human();

        self.scene.update(dt);
        self.animate_players();

        if let Some(pos) = self.scene.get(self.human).map(|p| p.pos) {
            self.scene.camera_mut().follow(pos, dt);
        }

        self.handle_events()
    }

    fn draw(&self, buffer: &mut RenderBuffer) {
        self.scene.render(buffer);
    }

    fn key_pressed(&mut self, key_code: u32) {
        if self.arrows.set(key_code, true) {
            return;
        }
        match key_code {
            KEY_SPACE => self.lay_bomb = true,
            KEY_ESCAPE => self.quit = true,
            KEY_P => self.pause = true,
            _ => {}
        }
    }

    fn key_released(&mut self, key_code: u32) {
        self.arrows.set(key_code, false);
    }
}

/// Title screen. Starting a match pushes the arena; the arena pops back here when it ends.
pub struct MainMenuState {
    menu: Menu,
    chosen: Option<usize>,
    quit: bool,
    camera: CameraUniform,
}

impl MainMenuState {
    const START: usize = 0;
    const EXIT: usize = 1;

    pub fn new() -> Self {
        Self {
            menu: Menu::new("Boom").with_item("Start Match").with_item("Exit"),
            chosen: None,
            quit: false,
            camera: Camera::default().uniform(),
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }
}

impl Default for MainMenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for MainMenuState {
    fn name(&self) -> &str {
        "main menu"
    }

    fn update(&mut self, _dt: f32) -> Transition {
        if self.quit {
            return Transition::Quit;
        }
        match self.chosen.take() {
            Some(Self::START) => {
                log::info!("Starting match");
                Transition::Push(Box::new(ArenaState::new()))
            }
            Some(Self::EXIT) => Transition::Quit,
            _ => Transition::None,
        }
    }

    fn draw(&self, buffer: &mut RenderBuffer) {
        buffer.camera = self.camera;
        self.menu.draw(buffer);
    }

    fn key_pressed(&mut self, key_code: u32) {
        if key_code == KEY_ESCAPE {
            self.quit = true;
            return;
        }
        if let MenuAction::Selected(index) = self.menu.key_pressed(key_code) {
            self.chosen = Some(index);
        }
    }
}

/// Frozen frame with a Resume/Exit menu shown while the match is paused.
/// P or Escape also resumes.
pub struct PausedState {
    frame: RenderBuffer,
    menu: Menu,
    resume: bool,
    exit: bool,
}

impl PausedState {
    const RESUME: usize = 0;
    const EXIT: usize = 1;

    pub fn new(frame: RenderBuffer) -> Self {
        Self {
            frame,
            menu: Menu::new("Paused").with_item("Resume Game").with_item("Exit"),
            resume: false,
            exit: false,
        }
    }
}

impl GameState for PausedState {
    fn name(&self) -> &str {
        "paused"
    }

    fn update(&mut self, _dt: f32) -> Transition {
        if self.exit {
            Transition::Quit
        } else if self.resume {
            Transition::Pop
        } else {
            Transition::None
        }
    }

    fn draw(&self, buffer: &mut RenderBuffer) {
        buffer.instances.extend_from_slice(&self.frame.instances);
        buffer.spheres.extend_from_slice(&self.frame.spheres);
        buffer.camera = self.frame.camera;
        self.menu.draw(buffer);
    }

    fn key_pressed(&mut self, key_code: u32) {
        if key_code == KEY_P || key_code == KEY_ESCAPE {
            self.resume = true;
            return;
        }
        match self.menu.key_pressed(key_code) {
            MenuAction::Selected(Self::RESUME) => self.resume = true,
            MenuAction::Selected(Self::EXIT) => self.exit = true,
            _ => {}
        }
    }
}

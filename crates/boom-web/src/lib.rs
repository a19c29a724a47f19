pub mod runner;

pub use runner::GameRunner;

/// Browser wall clock in milliseconds.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, game_frame, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use boom_engine::*;
///
/// mod game;
/// use game::ArenaState;
///
/// boom_web::export_game!(ArenaState::new(), "arena");
/// ```
///
/// # Arguments
///
/// - `$initial`: Expression building the first state (anything implementing `boom_engine::GameState`)
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($initial:expr, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let runner = $crate::GameRunner::new(Box::new($initial));

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            log::info!("{}: initialized", $game_name);
        }

        /// Tick with a host timestamp in milliseconds (e.g. from requestAnimationFrame).
        #[wasm_bindgen]
        pub fn game_tick(now_ms: f64) {
            with_runner(|r| r.tick(now_ms));
        }

        /// Tick using the browser clock.
        #[wasm_bindgen]
        pub fn game_frame() {
            let now = $crate::now_ms();
            with_runner(|r| r.tick(now));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_quit() {
            with_runner(|r| r.push_input(InputEvent::Quit));
        }

        #[wasm_bindgen]
        pub fn game_is_finished() -> bool {
            with_runner(|r| r.is_finished())
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_spheres_ptr() -> *const f32 {
            with_runner(|r| r.spheres_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sphere_count() -> u32 {
            with_runner(|r| r.sphere_count())
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr())
        }

        // ---- Layout constants ----

        #[wasm_bindgen]
        pub fn get_instance_stride_bytes() -> u32 {
            boom_engine::DrawInstance::STRIDE_BYTES as u32
        }

        #[wasm_bindgen]
        pub fn get_sphere_stride_bytes() -> u32 {
            boom_engine::SphereInstance::STRIDE_BYTES as u32
        }
    };
}

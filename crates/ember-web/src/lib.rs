pub mod runner;

pub use runner::SceneRunner;

/// Generate all `#[wasm_bindgen]` exports for a scene.
///
/// Generates:
/// - `thread_local!` storage for the SceneRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (scene_init, scene_frame, input handlers,
///   frame buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use ember_engine::*;
///
/// mod field;
/// use field::AmbientField;
///
/// ember_web::export_scene!(AmbientField, "ambient-field");
/// ```
///
/// # Arguments
///
/// - `$scene_type`: The scene struct type that implements `ember_engine::Scene`
/// - `$scene_name`: A string literal used in log messages
#[macro_export]
macro_rules! export_scene {
    ($scene_type:ty, $scene_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SceneRunner<$scene_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SceneRunner<$scene_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("Scene not initialized. Call scene_init() first.");
                f(runner)
            })
        }

        /// Initialize the scene. `options` is an optional JSON string of
        /// `RunnerOptions` overrides (seed, surface size, capacities).
        #[wasm_bindgen]
        pub fn scene_init(options: Option<String>) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let scene = <$scene_type>::new();
            let mut config = scene.config();
            if let Some(json) = options.as_deref() {
                match RunnerOptions::from_json(json) {
                    Ok(overrides) => overrides.apply(&mut config),
                    Err(err) => {
                        log::warn!("{}: ignoring malformed options: {}", $scene_name, err)
                    }
                }
            }

            let runner = $crate::SceneRunner::with_config(scene, config);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $scene_name);
        }

        #[wasm_bindgen]
        pub fn scene_frame(dt: f32) {
            with_runner(|r| r.frame(dt));
        }

        #[wasm_bindgen]
        pub fn scene_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn scene_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn scene_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        #[wasm_bindgen]
        pub fn scene_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_frame_ptr() -> *const f32 {
            with_runner(|r| r.frame_ptr())
        }

        #[wasm_bindgen]
        pub fn get_frame_len_floats() -> u32 {
            with_runner(|r| r.frame_len_floats())
        }

        #[wasm_bindgen]
        pub fn get_surface_width() -> f32 {
            with_runner(|r| r.surface_width())
        }

        #[wasm_bindgen]
        pub fn get_surface_height() -> f32 {
            with_runner(|r| r.surface_height())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_commands() -> u32 {
            with_runner(|r| r.max_commands())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}

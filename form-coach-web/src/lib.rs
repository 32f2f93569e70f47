//! Form Coach Web - squat and push-up rep counting from pose landmarks
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! MediaPipe Pose runs in JavaScript; each frame's landmarks are pushed
//! through `update_landmarks`, and the HUD reads counters back out.

pub mod bridge;
pub mod counter;
pub mod geometry;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{update_landmarks, set_exercise_mode, get_counter_overlay_text, get_workout_summary};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Start a fresh workout - call once the camera and pose model are up
#[wasm_bindgen]
pub fn init() {
    bridge::reset_session();
    console_log!("✅ Form coach ready: {}", bridge::get_exercise_mode());
}

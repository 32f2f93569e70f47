//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod errors;
mod landmarks;
mod session;

pub use errors::BridgeError;

pub use landmarks::{
    // WASM entry points
    update_landmarks,
    set_frame_size,
    // Internal API
    get_all_landmarks,
    get_frame_size,
    parse_landmarks,
    pose_signals,
    Landmark,
    LANDMARK_FLOATS,
};

pub use session::{
    set_exercise_mode,
    get_exercise_mode,
    configure_exercise,
    get_reps,
    get_good_reps,
    get_phase,
    get_feedback,
    get_counter_overlay_text,
    get_workout_summary,
    get_form_quality,
    reset_session,
    build_thresholds,
    overlay_text,
};

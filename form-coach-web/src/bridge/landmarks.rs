//! Landmark storage and JS bridge
//!
//! Receives MediaPipe Pose landmarks from JavaScript, keeps the latest
//! frame, and drives the active rep counter once per frame.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::geometry::{FrameSize, PoseSignals, POSE_LANDMARK_COUNT};
use super::errors::BridgeError;
use super::session::process_pose;

/// Floats per frame: 33 landmarks × (x, y, z)
pub const LANDMARK_FLOATS: usize = POSE_LANDMARK_COUNT * 3;

// ============================================================================
// LANDMARK DATA STRUCTURE
// ============================================================================

/// A single 3D landmark point (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,  // 0-1 normalized
    pub y: f32,  // 0-1 normalized
    pub z: f32,  // Relative depth
}

/// Internal storage for the current frame
struct LandmarkStore {
    landmarks: [Landmark; POSE_LANDMARK_COUNT],
    has_data: bool,
    frame_size: FrameSize,
}

impl Default for LandmarkStore {
    fn default() -> Self {
        Self {
            landmarks: [Landmark::default(); POSE_LANDMARK_COUNT],
            has_data: false,
            frame_size: FrameSize::default(),
        }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static LANDMARKS: RefCell<LandmarkStore> = RefCell::new(LandmarkStore::default());
}

/// Decode a flat x,y,z buffer. An empty buffer means no pose this frame.
pub fn parse_landmarks(data: &[f32]) -> Result<Option<[Landmark; POSE_LANDMARK_COUNT]>, BridgeError> {
    if data.is_empty() {
        return Ok(None);
    }
    if data.len() != LANDMARK_FLOATS {
        return Err(BridgeError::InvalidLandmarkCount(data.len()));
    }

    let mut landmarks = [Landmark::default(); POSE_LANDMARK_COUNT];
    for (lm, xyz) in landmarks.iter_mut().zip(data.chunks_exact(3)) {
        *lm = Landmark {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        };
    }
    Ok(Some(landmarks))
}

/// Pose signals for a stored frame
pub fn pose_signals(landmarks: &[Landmark; POSE_LANDMARK_COUNT], size: FrameSize) -> PoseSignals {
    let points = landmarks.map(|lm| (lm.x, lm.y));
    PoseSignals::extract(&points, size)
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript once per video frame with a flat Float32Array of
/// 99 values (33 landmarks × x, y, z), or an empty array when MediaPipe
/// found no pose.
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) {
    let parsed = match parse_landmarks(data) {
        Ok(parsed) => parsed,
        Err(err) => {
            web_sys::console::warn_1(&err.to_string().into());
            return;
        }
    };

    let signals = LANDMARKS.with(|store_cell| {
        let mut store = store_cell.borrow_mut();
        match parsed {
            Some(landmarks) => {
                store.landmarks = landmarks;
                store.has_data = true;
                pose_signals(&store.landmarks, store.frame_size)
            }
            None => {
                store.has_data = false;
                PoseSignals::unavailable()
            }
        }
    });

    process_pose(&signals);
}

/// Pixel size of the video frame, used to scale landmarks before angles
#[wasm_bindgen]
pub fn set_frame_size(width: f32, height: f32) {
    if !(width > 0.0 && height > 0.0) {
        return;
    }
    LANDMARKS.with(|store_cell| {
        store_cell.borrow_mut().frame_size = FrameSize { width, height };
    });
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Latest landmarks, if the last frame had a pose
pub fn get_all_landmarks() -> Option<[Landmark; POSE_LANDMARK_COUNT]> {
    LANDMARKS.with(|store_cell| {
        let store = store_cell.borrow();
        if store.has_data {
            Some(store.landmarks)
        } else {
            None
        }
    })
}

pub fn get_frame_size() -> FrameSize {
    LANDMARKS.with(|store_cell| store_cell.borrow().frame_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::session::{get_phase, get_reps};
    use crate::geometry::{LEFT_HIP, LEFT_KNEE, LEFT_ANKLE, LEFT_SHOULDER,
        RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE, RIGHT_SHOULDER};

    /// Side-on figure with both knees at `knee_deg` and hips at `hip_y`
    fn frame(knee_deg: f32, hip_y: f32) -> Vec<f32> {
        let mut data = vec![0.5; LANDMARK_FLOATS];
        let mut set = |idx: usize, x: f32, y: f32| {
            data[idx * 3] = x;
            data[idx * 3 + 1] = y;
            data[idx * 3 + 2] = 0.0;
        };
        let size = FrameSize::default();
        let shin = 0.15;
        let theta = knee_deg.to_radians();
        for (shoulder, hip, knee, ankle) in [
            (LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE, LEFT_ANKLE),
            (RIGHT_SHOULDER, RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE),
        ] {
            set(shoulder, 0.5, hip_y - 0.3);
            set(hip, 0.5, hip_y);
            set(knee, 0.5, hip_y + 0.15);
            // Rotate the shin away from the thigh by `knee_deg` in pixel space
            let dx = shin * size.height * theta.sin() / size.width;
            let dy = -shin * theta.cos();
            set(ankle, 0.5 + dx, hip_y + 0.15 + dy);
        }
        data
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(parse_landmarks(&[0.0; 12]), Err(BridgeError::InvalidLandmarkCount(12)));
        assert_eq!(parse_landmarks(&[]), Ok(None));
    }

    #[test]
    fn test_parse_orders_xyz() {
        let data: Vec<f32> = (0..LANDMARK_FLOATS).map(|i| i as f32).collect();
        let landmarks = parse_landmarks(&data).unwrap().unwrap();
        assert_eq!(landmarks[2], Landmark { x: 6.0, y: 7.0, z: 8.0 });
    }

    #[test]
    fn test_frame_helper_builds_expected_knee_angle() {
        let landmarks = parse_landmarks(&frame(80.0, 0.6)).unwrap().unwrap();
        let signals = pose_signals(&landmarks, FrameSize::default());
        assert!((signals.knee_angle.unwrap() - 80.0).abs() < 0.5);
        assert!((signals.hip_y.unwrap() - 0.6).abs() < 1e-5);
    }

    #[test]
    fn test_frames_drive_the_active_counter() {
        update_landmarks(&frame(175.0, 0.35));
        assert_eq!(get_phase(), "up");
        for _ in 0..12 {
            update_landmarks(&frame(80.0, 0.6));
        }
        assert_eq!(get_phase(), "down");
        update_landmarks(&frame(175.0, 0.35));
        assert_eq!(get_reps(), 1);

        update_landmarks(&[]);
        assert!(get_all_landmarks().is_none());
        assert_eq!(get_reps(), 1);
    }

    #[test]
    fn test_frame_size_ignores_nonsense() {
        set_frame_size(0.0, 720.0);
        assert_eq!(get_frame_size(), FrameSize::default());
        set_frame_size(1280.0, 720.0);
        assert_eq!(get_frame_size(), FrameSize { width: 1280.0, height: 720.0 });
    }
}

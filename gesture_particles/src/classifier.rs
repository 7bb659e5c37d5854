//! Landmark → [`HandSample`] classification.
//!
//! A finger counts as extended when its tip is clearly farther from the
//! wrist than its middle joint (`|tip − wrist| > 1.2 · |pip − wrist|`).
//! Gestures are tested in order:
//!
//! | Test | Gesture |
//! |---|---|
//! | thumb and all four fingers extended | OpenPalm |
//! | none of the four fingers extended | ClosedFist |
//! | index and middle only | Victory |
//! | thumb tip within 0.1 of index tip | Pinch |
//! | otherwise | None |

use particle_morph::{Gesture, HandSample};
use tracing::debug;

use crate::landmarks::*;

const EXTENSION_RATIO: f32 = 1.2;
const PINCH_DISTANCE:  f32 = 0.1;

// ════════════════════════════════════════════════════════════════════════════
// VideoFrame
// ════════════════════════════════════════════════════════════════════════════

/// One camera frame as seen by the classifier: its timestamp and the
/// detected hand, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VideoFrame {
    /// Presentation time, seconds.
    pub timestamp: f64,
    pub landmarks: Option<HandLandmarks>,
}

impl VideoFrame {
    pub fn with_hand(timestamp: f64, landmarks: HandLandmarks) -> Self {
        VideoFrame { timestamp, landmarks: Some(landmarks) }
    }

    pub fn empty(timestamp: f64) -> Self {
        VideoFrame { timestamp, landmarks: None }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Pure classification
// ════════════════════════════════════════════════════════════════════════════

fn extended(hand: &HandLandmarks, tip: usize, pip: usize) -> bool {
    hand.distance(tip, WRIST) > hand.distance(pip, WRIST) * EXTENSION_RATIO
}

/// Classify a single hand.
pub fn classify_landmarks(hand: &HandLandmarks) -> HandSample {
    let wrist = hand.point(WRIST);
    let mcp   = hand.point(MIDDLE_MCP);
    let roll  = (mcp[0] - wrist[0]).atan2(-(mcp[1] - wrist[1]));

    let thumb  = extended(hand, THUMB_TIP,  THUMB_MCP);
    let index  = extended(hand, INDEX_TIP,  INDEX_PIP);
    let middle = extended(hand, MIDDLE_TIP, MIDDLE_PIP);
    let ring   = extended(hand, RING_TIP,   RING_PIP);
    let pinky  = extended(hand, PINKY_TIP,  PINKY_PIP);
    let count  = [index, middle, ring, pinky].iter().filter(|&&e| e).count();

    let gesture = if thumb && count == 4 {
        Gesture::OpenPalm
    } else if count == 0 {
        Gesture::ClosedFist
    } else if index && middle && !ring && !pinky {
        Gesture::Victory
    } else if hand.distance(THUMB_TIP, INDEX_TIP) < PINCH_DISTANCE {
        Gesture::Pinch
    } else {
        Gesture::None
    };

    HandSample::present(gesture, roll, [wrist[0], wrist[1]])
}

// ════════════════════════════════════════════════════════════════════════════
// GestureClassifier: per-frame debounce
// ════════════════════════════════════════════════════════════════════════════

/// Classifies each new video frame once.
///
/// A frame whose timestamp equals the last processed one returns the cached
/// sample unchanged, so polling faster than the camera delivers frames does
/// not flicker the hand in and out.
#[derive(Debug, Default)]
pub struct GestureClassifier {
    last_timestamp: Option<f64>,
    last:           HandSample,
}

impl GestureClassifier {
    pub fn new() -> Self { Self::default() }

    pub fn classify(&mut self, frame: &VideoFrame) -> HandSample {
        if self.last_timestamp == Some(frame.timestamp) {
            return self.last;
        }
        self.last_timestamp = Some(frame.timestamp);

        let sample = match &frame.landmarks {
            Some(hand) => classify_landmarks(hand),
            None       => HandSample::absent(),
        };
        if sample.gesture != self.last.gesture || sample.present != self.last.present {
            debug!(
                gesture = sample.gesture.name(),
                present = sample.present,
                t = frame.timestamp,
                "gesture changed"
            );
        }
        self.last = sample;
        sample
    }

    /// Most recent output.
    pub fn last(&self) -> HandSample { self.last }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

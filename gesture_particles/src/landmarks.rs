//! Hand landmarks in the 21-point convention used by common hand trackers,
//! plus synthetic poses for the keyboard simulator.
//!
//! Coordinates are normalized image coordinates: `x` to the right, `y` down,
//! both `0‥1`.  `z` is relative depth and is ignored by the classifier.

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST:      usize = 0;
pub const THUMB_CMC:  usize = 1;
pub const THUMB_MCP:  usize = 2;
pub const THUMB_IP:   usize = 3;
pub const THUMB_TIP:  usize = 4;
pub const INDEX_MCP:  usize = 5;
pub const INDEX_PIP:  usize = 6;
pub const INDEX_TIP:  usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP:   usize = 13;
pub const RING_PIP:   usize = 14;
pub const RING_TIP:   usize = 16;
pub const PINKY_MCP:  usize = 17;
pub const PINKY_PIP:  usize = 18;
pub const PINKY_TIP:  usize = 20;

// ════════════════════════════════════════════════════════════════════════════
// HandLandmarks
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLandmarks {
    pub points: [[f32; 3]; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [[f32; 3]; LANDMARK_COUNT]) -> Self {
        HandLandmarks { points }
    }

    pub fn point(&self, idx: usize) -> [f32; 3] { self.points[idx] }

    /// Image-plane distance between two landmarks.
    pub fn distance(&self, a: usize, b: usize) -> f32 {
        let (p, q) = (self.points[a], self.points[b]);
        (p[0] - q[0]).hypot(p[1] - q[1])
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Synthetic poses
// ════════════════════════════════════════════════════════════════════════════

/// Hand shapes the simulator can hold up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pose {
    Open,
    Fist,
    Victory,
    /// Thumb tip on a curled index; the other three fingers up.
    Pinch,
    /// Index finger alone, thumb out.  Matches no gesture.
    Point,
}

impl Pose {
    pub const ALL: [Pose; 5] = [Pose::Open, Pose::Fist, Pose::Victory, Pose::Pinch, Pose::Point];

    pub fn name(self) -> &'static str {
        match self {
            Pose::Open    => "open",
            Pose::Fist    => "fist",
            Pose::Victory => "victory",
            Pose::Pinch   => "pinch",
            Pose::Point   => "point",
        }
    }

    /// `[thumb, index, middle, ring, pinky]` extended flags.
    fn fingers(self) -> [bool; 5] {
        match self {
            Pose::Open    => [true,  true,  true,  true,  true ],
            Pose::Fist    => [false, false, false, false, false],
            Pose::Victory => [false, true,  true,  false, false],
            Pose::Pinch   => [false, false, true,  true,  true ],
            Pose::Point   => [true,  true,  false, false, false],
        }
    }
}

// Offsets from the wrist for an upright right hand, palm to camera.
const FINGER_DX:     [f32; 4] = [-0.05, 0.0, 0.04, 0.08];
const MCP_DY:        f32 = -0.16;
const PIP_DY:        f32 = -0.22;
const EXTENDED_DY:   [f32; 2] = [-0.27, -0.32];
const CURLED_DY:     [f32; 2] = [-0.18, -0.14];

const THUMB_BASE:     [[f32; 2]; 2] = [[-0.06, -0.04], [-0.12, -0.08]];
const THUMB_EXTENDED: [[f32; 2]; 2] = [[-0.17, -0.12], [-0.22, -0.16]];
const THUMB_CURLED:   [[f32; 2]; 2] = [[-0.08, -0.12], [-0.04, -0.14]];
/// Thumb tip resting against the curled index tip.
const THUMB_ON_INDEX: [f32; 2] = [-0.04, -0.15];

/// Landmarks for `pose` with the wrist at `wrist`, rotated by `roll` radians
/// (positive tilts the fingers toward +x).
pub fn synthetic_hand(pose: Pose, wrist: [f32; 2], roll: f32) -> HandLandmarks {
    let mut offsets = [[0.0f32; 2]; LANDMARK_COUNT];
    let ext = pose.fingers();

    offsets[THUMB_CMC] = THUMB_BASE[0];
    offsets[THUMB_MCP] = THUMB_BASE[1];
    let [ip, tip] = if ext[0] { THUMB_EXTENDED } else { THUMB_CURLED };
    offsets[THUMB_IP]  = ip;
    offsets[THUMB_TIP] = if pose == Pose::Pinch { THUMB_ON_INDEX } else { tip };

    for (f, &dx) in FINGER_DX.iter().enumerate() {
        let mcp = INDEX_MCP + f * 4;
        let [dip_dy, tip_dy] = if ext[f + 1] { EXTENDED_DY } else { CURLED_DY };
        offsets[mcp]     = [dx, MCP_DY];
        offsets[mcp + 1] = [dx, PIP_DY];
        offsets[mcp + 2] = [dx, dip_dy];
        offsets[mcp + 3] = [dx, tip_dy];
    }

    let (sin, cos) = roll.sin_cos();
    let mut points = [[0.0f32; 3]; LANDMARK_COUNT];
    for (p, [ox, oy]) in points.iter_mut().zip(offsets) {
        *p = [
            wrist[0] + ox * cos - oy * sin,
            wrist[1] + ox * sin + oy * cos,
            0.0,
        ];
    }
    HandLandmarks { points }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrist_is_the_anchor() {
        let h = synthetic_hand(Pose::Open, [0.3, 0.7], 0.4);
        assert_eq!(h.point(WRIST), [0.3, 0.7, 0.0]);
    }

    #[test]
    fn roll_preserves_distances() {
        let upright = synthetic_hand(Pose::Victory, [0.5, 0.8], 0.0);
        let tilted  = synthetic_hand(Pose::Victory, [0.5, 0.8], 1.1);
        for idx in 1..LANDMARK_COUNT {
            let a = upright.distance(WRIST, idx);
            let b = tilted.distance(WRIST, idx);
            assert!((a - b).abs() < 1e-5, "landmark {}", idx);
        }
    }

    #[test]
    fn fingers_point_up_the_image() {
        let h = synthetic_hand(Pose::Open, [0.5, 0.8], 0.0);
        for tip in [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP] {
            assert!(h.point(tip)[1] < h.point(WRIST)[1]);
        }
    }
}

//! Hand samples: what the gesture classifier reports each detection cycle.

// ════════════════════════════════════════════════════════════════════════════
// Gesture
// ════════════════════════════════════════════════════════════════════════════

/// Discrete gesture label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Gesture {
    /// Hand visible but no recognised pose.
    #[default]
    None,
    /// All five fingers extended.
    OpenPalm,
    /// No finger extended.
    ClosedFist,
    /// Index and middle extended, ring and pinky curled.
    Victory,
    /// Thumb tip touching index tip.
    Pinch,
}

impl Gesture {
    pub const ALL: [Gesture; 5] = [
        Gesture::None,
        Gesture::OpenPalm,
        Gesture::ClosedFist,
        Gesture::Victory,
        Gesture::Pinch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Gesture::None       => "none",
            Gesture::OpenPalm   => "open palm",
            Gesture::ClosedFist => "closed fist",
            Gesture::Victory    => "victory",
            Gesture::Pinch      => "pinch",
        }
    }

    /// Parse a short label (`none`, `open`, `fist`, `victory`/`peace`, `pinch`).
    pub fn parse(s: &str) -> Option<Gesture> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none"                         => Some(Gesture::None),
            "open" | "open_palm" | "palm"  => Some(Gesture::OpenPalm),
            "fist" | "closed_fist"         => Some(Gesture::ClosedFist),
            "victory" | "peace" | "v"      => Some(Gesture::Victory),
            "pinch" | "heart"              => Some(Gesture::Pinch),
            _                              => None,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HandSample
// ════════════════════════════════════════════════════════════════════════════

/// One classifier output.  Each new sample replaces the previous one whole.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct HandSample {
    pub gesture: Gesture,
    /// In-plane roll of the hand, radians.  Carried for consumers; the blend
    /// engine does not use it.
    pub roll:    f32,
    /// Wrist position in normalized image coordinates.
    pub anchor:  [f32; 2],
    pub present: bool,
}

impl HandSample {
    /// No hand in view.
    pub fn absent() -> Self { HandSample::default() }

    pub fn present(gesture: Gesture, roll: f32, anchor: [f32; 2]) -> Self {
        HandSample { gesture, roll, anchor, present: true }
    }
}

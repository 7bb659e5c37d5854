//! Gesture → shape mapping.

use crate::hand::Gesture;
use crate::kind::ShapeKind;

/// Pick the target shape for a hand sample.
///
/// Losing the hand falls straight back to Idle, whatever the last gesture
/// was; there is no hold-over.  A present hand with no recognised gesture
/// is Idle as well.
pub fn select_shape(gesture: Gesture, present: bool) -> ShapeKind {
    if !present {
        return ShapeKind::Idle;
    }
    match gesture {
        Gesture::OpenPalm   => ShapeKind::OpenHand,
        Gesture::ClosedFist => ShapeKind::ClosedFist,
        Gesture::Victory    => ShapeKind::Victory,
        Gesture::Pinch      => ShapeKind::Pinch,
        Gesture::None       => ShapeKind::Idle,
    }
}

//! `ShapeKind`: which precomputed target the live buffer is approaching.

use particle_shapes::Shape;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Default planet + ring; also the fallback for everything unmapped.
    Idle,
    /// Firework burst.
    OpenHand,
    /// Planet + ring, selected explicitly by a fist.  Shares Idle's buffer
    /// and spin; see [`ShapeKind::same_target`].
    ClosedFist,
    /// Text glyph cloud.
    Victory,
    /// Heart.
    Pinch,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Idle,
        ShapeKind::OpenHand,
        ShapeKind::ClosedFist,
        ShapeKind::Victory,
        ShapeKind::Pinch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Idle       => "idle",
            ShapeKind::OpenHand   => "fireworks",
            ShapeKind::ClosedFist => "planet",
            ShapeKind::Victory    => "text",
            ShapeKind::Pinch      => "heart",
        }
    }

    /// Idle and ClosedFist both show the planet, and both spin.
    pub fn is_planet(self) -> bool {
        matches!(self, ShapeKind::Idle | ShapeKind::ClosedFist)
    }

    /// The kind whose buffer this kind displays.  ClosedFist is the Idle
    /// planet under another name.
    pub fn buffer_key(self) -> ShapeKind {
        match self {
            ShapeKind::ClosedFist => ShapeKind::Idle,
            other                 => other,
        }
    }

    /// Whether moving from `self` to `other` leaves the target unchanged.
    pub fn same_target(self, other: ShapeKind) -> bool {
        self.buffer_key() == other.buffer_key()
    }

    /// Generator recipe for this kind; `text` is the victory literal.
    pub fn shape(self, text: &str) -> Shape<'_> {
        match self {
            ShapeKind::Idle | ShapeKind::ClosedFist => Shape::PlanetRing,
            ShapeKind::OpenHand                     => Shape::Fireworks,
            ShapeKind::Victory                      => Shape::Text(text),
            ShapeKind::Pinch                        => Shape::Heart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_planet_kinds_spin() {
        let spinning: Vec<_> = ShapeKind::ALL.into_iter().filter(|k| k.is_planet()).collect();
        assert_eq!(spinning, vec![ShapeKind::Idle, ShapeKind::ClosedFist]);
    }

    #[test]
    fn fist_and_idle_share_one_target() {
        assert_eq!(ShapeKind::ClosedFist.buffer_key(), ShapeKind::Idle);
        assert!(ShapeKind::Idle.same_target(ShapeKind::ClosedFist));
        assert!(ShapeKind::ClosedFist.same_target(ShapeKind::Idle));
        assert!(!ShapeKind::Idle.same_target(ShapeKind::Pinch));
        for kind in ShapeKind::ALL.into_iter().filter(|k| !k.is_planet()) {
            assert_eq!(kind.buffer_key(), kind);
        }
    }

    #[test]
    fn victory_carries_its_text() {
        assert_eq!(ShapeKind::Victory.shape("HELLO"), Shape::Text("HELLO"));
        assert_eq!(ShapeKind::ClosedFist.shape("x"), Shape::PlanetRing);
    }
}

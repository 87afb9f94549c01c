//! Fielder layout primitives and hot-zone driven adaptation.

use rand::seq::IndexedRandom;

/// Number of fielders in every layout.
pub const FIELDERS_PER_SIDE: usize = 11;

/// Layout slots that get overwritten by hot-zone centroids, in assignment order.
///
/// A crude heuristic repositioning: the two mid-field slots chase the batter's
/// favourite landing areas while the rest of the template stays put.
pub const HOT_ZONE_SLOTS: [usize; 2] = [3, 6];

/// A position in canvas coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate (0..=600 on the client canvas).
    pub x: f64,
    /// Vertical coordinate (0..=400 on the client canvas).
    pub y: f64,
}

impl Point {
    /// Build a point from explicit coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Delivery styles the bowler can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallType {
    /// Swinging delivery.
    Swing,
    /// Spin delivery.
    Spin,
    /// Fast delivery.
    Fast,
    /// Yorker.
    Yorker,
}

const ALL_BALL_TYPES: [BallType; 4] = [
    BallType::Swing,
    BallType::Spin,
    BallType::Fast,
    BallType::Yorker,
];

impl BallType {
    /// Wire name for this delivery style.
    pub fn as_str(&self) -> &'static str {
        match self {
            BallType::Swing => "swing",
            BallType::Spin => "spin",
            BallType::Fast => "fast",
            BallType::Yorker => "yorker",
        }
    }

    /// Draw a delivery style uniformly at random.
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        ALL_BALL_TYPES.choose(rng).copied().unwrap_or(BallType::Fast)
    }
}

/// Clone `template` and overwrite the [`HOT_ZONE_SLOTS`] with up to two hot
/// zones, leaving the shared template untouched.
///
/// Zones beyond the number of slots are ignored, so the result always has the
/// same length as the template.
pub fn adapt_layout(template: &[Point], hot_zones: &[Point]) -> Vec<Point> {
    let mut layout = template.to_vec();
    for (&slot, zone) in HOT_ZONE_SLOTS.iter().zip(hot_zones) {
        if let Some(fielder) = layout.get_mut(slot) {
            *fielder = *zone;
        }
    }
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn template() -> Vec<Point> {
        AppConfig::default().preset_for_over(0).to_vec()
    }

    #[test]
    fn adaptation_without_zones_is_the_template() {
        let base = template();
        let adapted = adapt_layout(&base, &[]);
        assert_eq!(adapted, base);
        assert_eq!(adapted.len(), FIELDERS_PER_SIDE);
    }

    #[test]
    fn one_zone_moves_only_the_first_slot() {
        let base = template();
        let zone = Point::new(123.0, 321.0);
        let adapted = adapt_layout(&base, &[zone]);

        assert_eq!(adapted.len(), FIELDERS_PER_SIDE);
        assert_eq!(adapted[HOT_ZONE_SLOTS[0]], zone);
        assert_eq!(adapted[HOT_ZONE_SLOTS[1]], base[HOT_ZONE_SLOTS[1]]);
    }

    #[test]
    fn two_zones_fill_both_slots_in_order() {
        let base = template();
        let zones = [Point::new(10.0, 20.0), Point::new(30.0, 40.0)];
        let adapted = adapt_layout(&base, &zones);

        assert_eq!(adapted.len(), FIELDERS_PER_SIDE);
        assert_eq!(adapted[HOT_ZONE_SLOTS[0]], zones[0]);
        assert_eq!(adapted[HOT_ZONE_SLOTS[1]], zones[1]);
    }

    #[test]
    fn extra_zones_are_ignored() {
        let base = template();
        let zones = [
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(3.0, 3.0),
        ];
        let adapted = adapt_layout(&base, &zones);
        assert_eq!(adapted.len(), FIELDERS_PER_SIDE);
        assert_eq!(adapted[HOT_ZONE_SLOTS[0]], zones[0]);
        assert_eq!(adapted[HOT_ZONE_SLOTS[1]], zones[1]);
    }

    #[test]
    fn template_is_not_mutated() {
        let base = template();
        let before = base.clone();
        let _ = adapt_layout(&base, &[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert_eq!(base, before);
    }

    #[test]
    fn ball_type_wire_names() {
        assert_eq!(BallType::Swing.as_str(), "swing");
        assert_eq!(BallType::Spin.as_str(), "spin");
        assert_eq!(BallType::Fast.as_str(), "fast");
        assert_eq!(BallType::Yorker.as_str(), "yorker");
    }

    #[test]
    fn random_ball_type_is_from_the_fixed_set() {
        let mut rng = rand::rng();
        for _ in 0..32 {
            let ball = BallType::random(&mut rng);
            assert!(ALL_BALL_TYPES.contains(&ball));
        }
    }
}

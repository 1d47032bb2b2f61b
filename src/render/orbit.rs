//! Orbit layout for the ecosystem visualization.
//!
//! Items sit on a circle around the hub at their registry angle. The whole
//! ring turns at a constant rate while each item turns back by the same
//! amount, so logos and labels stay upright. Coordinates are percentages
//! of the (square) container, hub at (50, 50), Y down.

use std::f32::consts::TAU;

use super::layout::Bounds;
use crate::config::OrbitConfig;
use crate::content::PlatformEntry;

/// Placement of one orbit item at a given time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTransform {
    pub index: usize,
    /// Item center after the ring rotation, percent
    pub center_pct: (f32, f32),
    /// Rotation of the ring, rad
    pub outer_rotation: f32,
    /// Counter-rotation applied to the item's content, rad
    pub inner_rotation: f32,
}

impl ItemTransform {
    /// Net rotation of the item's content; always zero.
    pub fn content_rotation(&self) -> f32 {
        self.outer_rotation + self.inner_rotation
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLayout {
    pub radius_pct: f32,
    pub period_secs: f32,
    /// Radius of an item's hit disc, percent
    pub item_radius_pct: f32,
}

impl Default for OrbitLayout {
    fn default() -> Self {
        OrbitLayout::from(&OrbitConfig::default())
    }
}

impl From<&OrbitConfig> for OrbitLayout {
    fn from(cfg: &OrbitConfig) -> Self {
        Self {
            radius_pct: cfg.radius_pct,
            period_secs: cfg.period_secs,
            item_radius_pct: 7.0,
        }
    }
}

impl OrbitLayout {
    pub const CENTER_PCT: f32 = 50.0;

    /// Resting position of an item at `angle_degrees`, before any rotation.
    pub fn base_position(&self, angle_degrees: f32) -> (f32, f32) {
        self.position_at(angle_degrees.to_radians())
    }

    fn position_at(&self, angle: f32) -> (f32, f32) {
        (
            Self::CENTER_PCT + self.radius_pct * angle.cos(),
            Self::CENTER_PCT + self.radius_pct * angle.sin(),
        )
    }

    /// Ring rotation at `elapsed` seconds, in [0, 2π).
    pub fn outer_rotation(&self, elapsed: f32) -> f32 {
        (TAU * elapsed / self.period_secs).rem_euclid(TAU)
    }

    /// Counter-rotation of item content; opposite of the ring's.
    pub fn inner_rotation(&self, elapsed: f32) -> f32 {
        -self.outer_rotation(elapsed)
    }

    pub fn item(&self, index: usize, entry: &PlatformEntry, elapsed: f32) -> ItemTransform {
        let outer = self.outer_rotation(elapsed);
        ItemTransform {
            index,
            center_pct: self.position_at(entry.angle_radians() + outer),
            outer_rotation: outer,
            inner_rotation: -outer,
        }
    }

    pub fn layout(&self, entries: &[PlatformEntry], elapsed: f32) -> Vec<ItemTransform> {
        entries
            .iter()
            .enumerate()
            .map(|(i, e)| self.item(i, e, elapsed))
            .collect()
    }

    /// Index of the item under `point_pct`, topmost (last drawn) first.
    pub fn hit_test(&self, entries: &[PlatformEntry], elapsed: f32, point_pct: (f32, f32)) -> Option<usize> {
        let r2 = self.item_radius_pct * self.item_radius_pct;
        self.layout(entries, elapsed)
            .iter()
            .rev()
            .find(|item| {
                let dx = item.center_pct.0 - point_pct.0;
                let dy = item.center_pct.1 - point_pct.1;
                dx * dx + dy * dy <= r2
            })
            .map(|item| item.index)
    }
}

/// Percent → pixel position inside `container`.
pub fn to_pixels(pct: (f32, f32), container: Bounds) -> (f32, f32) {
    (
        container.x + container.width * pct.0 / 100.0,
        container.y + container.height * pct.1 / 100.0,
    )
}

/// Pixel position → percent of `container`.
pub fn to_percent(px: (f32, f32), container: Bounds) -> (f32, f32) {
    if container.width <= 0.0 || container.height <= 0.0 {
        return (OrbitLayout::CENTER_PCT, OrbitLayout::CENTER_PCT);
    }
    (
        (px.0 - container.x) / container.width * 100.0,
        (px.1 - container.y) / container.height * 100.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PLATFORMS;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_base_positions() {
        let orbit = OrbitLayout::default();
        let (x, y) = orbit.base_position(0.0);
        assert!(close(x, 95.0) && close(y, 50.0));
        let (x, y) = orbit.base_position(180.0);
        assert!(close(x, 5.0) && close(y, 50.0));
        let (x, y) = orbit.base_position(60.0);
        assert!(close(x, 50.0 + 45.0 * 0.5) && close(y, 50.0 + 45.0 * 3f32.sqrt() / 2.0));
    }

    #[test]
    fn test_items_stay_on_circle() {
        let orbit = OrbitLayout::default();
        for t in [0.0, 3.3, 17.0, 39.9, 123.4] {
            for item in orbit.layout(&PLATFORMS, t) {
                let dx = item.center_pct.0 - 50.0;
                let dy = item.center_pct.1 - 50.0;
                assert!(close((dx * dx + dy * dy).sqrt(), 45.0), "t={} item={:?}", t, item);
            }
        }
    }

    #[test]
    fn test_counter_rotation_cancels_exactly() {
        let orbit = OrbitLayout::default();
        for i in 0..1000 {
            let t = i as f32 * 0.173;
            for item in orbit.layout(&PLATFORMS, t) {
                assert_eq!(item.content_rotation(), 0.0, "t={}", t);
            }
            assert_eq!(orbit.outer_rotation(t) + orbit.inner_rotation(t), 0.0);
        }
    }

    #[test]
    fn test_full_revolution_after_period() {
        let orbit = OrbitLayout::default();
        let start = orbit.item(0, &PLATFORMS[0], 0.0);
        let later = orbit.item(0, &PLATFORMS[0], orbit.period_secs);
        assert!(close(start.center_pct.0, later.center_pct.0));
        assert!(close(start.center_pct.1, later.center_pct.1));
        let quarter = orbit.outer_rotation(orbit.period_secs / 4.0);
        assert!(close(quarter, std::f32::consts::FRAC_PI_2));
    }

    #[test]
    fn test_hit_test() {
        let orbit = OrbitLayout::default();
        let shield = orbit.item(1, &PLATFORMS[1], 0.0);
        assert_eq!(orbit.hit_test(&PLATFORMS, 0.0, shield.center_pct), Some(1));
        assert_eq!(orbit.hit_test(&PLATFORMS, 0.0, (50.0, 50.0)), None);
        // A twelfth of a turn later the old spot is empty
        assert_eq!(orbit.hit_test(&PLATFORMS, orbit.period_secs / 12.0, shield.center_pct), None);
    }

    #[test]
    fn test_pixel_round_trip() {
        let container = Bounds::new(100.0, 200.0, 400.0, 400.0);
        let px = to_pixels((95.0, 50.0), container);
        assert!(close(px.0, 480.0) && close(px.1, 400.0));
        let pct = to_percent(px, container);
        assert!(close(pct.0, 95.0) && close(pct.1, 50.0));
    }
}

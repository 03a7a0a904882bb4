//! Color legend drawn as a diagonal strip of diamonds along the top-left
//! edge of the grid.

use crate::geometry::{Diamond, Point, Translate};
use crate::scene::{ColorbarRecord, SwatchRecord, TextAnchor, TickRecord};

/// Rotation of the tick labels, parallel to the strip.
const TICK_ROTATION: f64 = -45.0;

/// Round half toward positive infinity, as `Math.round` does.
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Layout of the color legend for a given palette size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorbarLayout {
    palette_len: usize,
    x_mid: f64,
    start_lane: usize,
    shift: f64,
}

impl ColorbarLayout {
    /// Whether a legend of `palette_len` swatches is drawn for `items` items.
    ///
    /// The strip runs along the grid's top-left edge, which has `items - 1`
    /// lanes; a palette of `items + 1` or more entries does not fit.
    #[must_use]
    pub fn fits(items: usize, palette_len: usize) -> bool {
        palette_len < items + 1
    }

    /// Layout for a palette of `palette_len` entries on a grid of `items`
    /// items, or `None` when the palette does not fit.
    #[must_use]
    pub fn new(items: usize, palette_len: usize, x_mid: f64, shift: f64) -> Option<Self> {
        if !Self::fits(items, palette_len) {
            return None;
        }
        // Centers the strip along the edge; `items >= palette_len` here.
        let start_lane = round_half_up(0.5 * (items - palette_len) as f64) as usize;
        Some(Self { palette_len, x_mid, start_lane, shift })
    }

    /// Lane of the first swatch.
    #[must_use]
    pub fn start_lane(&self) -> usize {
        self.start_lane
    }

    /// Rhombus of swatch `i`, before the strip shift.
    #[must_use]
    pub fn swatch(&self, i: usize) -> Diamond {
        Diamond::at(self.x_mid, 0, i + self.start_lane)
    }

    /// Anchor of tick `k` (0 for the domain minimum, 1 for the maximum).
    #[must_use]
    pub fn tick_anchor(&self, k: usize) -> Point {
        let position = (k * (self.palette_len + 1) + self.start_lane) as f64;
        Point::new(self.x_mid - 0.5 * position, 0.5 * position + 0.5)
    }

    /// Legend record for a palette and its domain.
    #[must_use]
    pub fn record(&self, palette: &[String], domain: [f64; 2]) -> ColorbarRecord {
        let swatches = palette
            .iter()
            .take(self.palette_len)
            .enumerate()
            .map(|(i, fill)| SwatchRecord { points: self.swatch(i).vertices(), fill: fill.clone() })
            .collect();

        let ticks = domain
            .iter()
            .enumerate()
            .map(|(k, &value)| TickRecord {
                anchor: self.tick_anchor(k),
                value: round_half_up(100.0 * value) / 100.0,
                text_anchor: if k == 0 { TextAnchor::Start } else { TextAnchor::End },
                rotation: TICK_ROTATION,
            })
            .collect();

        ColorbarRecord { shift: Translate::new(self.shift, 0.0), swatches, ticks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(k: usize) -> Vec<String> {
        (0..k).map(|i| format!("#{i}{i}{i}")).collect()
    }

    #[test]
    fn test_visibility_threshold_is_strict() {
        assert!(ColorbarLayout::fits(5, 5));
        assert!(!ColorbarLayout::fits(5, 6));
        assert!(ColorbarLayout::new(5, 6, 2.5, -2.0).is_none());
        assert!(ColorbarLayout::new(5, 4, 2.5, -2.0).is_some());
    }

    #[test]
    fn test_start_lane_rounds_half_up() {
        assert_eq!(ColorbarLayout::new(5, 2, 2.5, -2.0).unwrap().start_lane(), 2);
        assert_eq!(ColorbarLayout::new(6, 2, 3.0, -2.0).unwrap().start_lane(), 2);
        assert_eq!(ColorbarLayout::new(3, 3, 1.5, -2.0).unwrap().start_lane(), 0);
    }

    #[test]
    fn test_swatches_follow_rhombus_formula() {
        let layout = ColorbarLayout::new(6, 2, 3.0, -2.0).unwrap();
        // lane 2, row 0: apex (3 - 1.5, 1 + 0.5)
        assert_eq!(layout.swatch(0).apex, Point::new(1.5, 1.5));
        assert_eq!(layout.swatch(1).apex, Point::new(1.0, 2.0));
    }

    #[test]
    fn test_record() {
        let layout = ColorbarLayout::new(6, 2, 3.0, -2.0).unwrap();
        let record = layout.record(&palette(2), [-0.123_45, 0.987_65]);

        assert_eq!(record.shift, Translate::new(-2.0, 0.0));
        assert_eq!(record.swatches.len(), 2);
        assert_eq!(record.swatches[1].fill, "#111");

        assert_eq!(record.ticks.len(), 2);
        assert_eq!(record.ticks[0].value, -0.12);
        assert_eq!(record.ticks[1].value, 0.99);
        assert_eq!(record.ticks[0].text_anchor, TextAnchor::Start);
        assert_eq!(record.ticks[1].text_anchor, TextAnchor::End);
        assert_eq!(record.ticks[0].rotation, -45.0);
        // k = 0: position 2; k = 1: position 3 + 2
        assert_eq!(record.ticks[0].anchor, Point::new(2.0, 1.5));
        assert_eq!(record.ticks[1].anchor, Point::new(0.5, 3.0));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(1.5), 2.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(2.4), 2.0);
    }
}

use serde::{Deserialize, Serialize};

use crate::routing::types::{GridPoint, Orientation, TILE_MM};

/// Tiles between consecutive suggested tray runs.
pub const TRAY_INTERVAL_TILES: i32 = 4;

/// A suggested tray run. Shaped like a tray record without identity.
///
/// `orientation` records which pass produced the run. On a floor one tile deep (or wide)
/// both endpoints coincide, so it cannot be read back from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraySuggestion {
    pub a: GridPoint,
    pub b: GridPoint,
    pub orientation: Orientation,
    pub max_capacity: u32,
    pub occupancy: u32,
}

/// Suggest a regular tray grid for a floor of `width_mm` × `height_mm`.
///
/// The floor is divided into whole tiles (partial tiles are dropped). Horizontal runs are
/// placed every fourth row spanning all columns, then vertical runs every fourth column
/// spanning all rows. Grid coordinates are 1-based.
pub fn suggest_grid(width_mm: u32, height_mm: u32, default_capacity: u32) -> Vec<TraySuggestion> {
    let cols = (width_mm / TILE_MM) as i32;
    let rows = (height_mm / TILE_MM) as i32;

    let suggest = |a: GridPoint, b: GridPoint, orientation: Orientation| TraySuggestion {
        a,
        b,
        orientation,
        max_capacity: default_capacity,
        occupancy: 0,
    };

    let horizontals = (TRAY_INTERVAL_TILES..=rows)
        .step_by(TRAY_INTERVAL_TILES as usize)
        .map(|y| {
            suggest(
                GridPoint::new(1, y),
                GridPoint::new(cols, y),
                Orientation::Horizontal,
            )
        });
    let verticals = (TRAY_INTERVAL_TILES..=cols)
        .step_by(TRAY_INTERVAL_TILES as usize)
        .map(|x| {
            suggest(
                GridPoint::new(x, 1),
                GridPoint::new(x, rows),
                Orientation::Vertical,
            )
        });

    horizontals.chain(verticals).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn square_floor_gets_one_run_each_way() {
        let suggestions = suggest_grid(2400, 2400, 100);
        assert_eq!(
            suggestions,
            vec![
                TraySuggestion {
                    a: GridPoint::new(1, 4),
                    b: GridPoint::new(4, 4),
                    orientation: Orientation::Horizontal,
                    max_capacity: 100,
                    occupancy: 0,
                },
                TraySuggestion {
                    a: GridPoint::new(4, 1),
                    b: GridPoint::new(4, 4),
                    orientation: Orientation::Vertical,
                    max_capacity: 100,
                    occupancy: 0,
                },
            ]
        );
    }

    #[test]
    fn partial_tiles_are_dropped() {
        // 2399 mm is 3 whole tiles, too few for a run.
        assert!(suggest_grid(2399, 2399, 100).is_empty());
    }

    #[test]
    fn horizontals_come_before_verticals() {
        let suggestions = suggest_grid(6000, 4800, 50);
        // cols = 10, rows = 8: horizontals at y=4,8; verticals at x=4,8.
        let ys: Vec<i32> = suggestions
            .iter()
            .filter(|s| s.orientation == Orientation::Horizontal)
            .map(|s| s.a.y)
            .collect();
        let xs: Vec<i32> = suggestions
            .iter()
            .filter(|s| s.orientation == Orientation::Vertical)
            .map(|s| s.a.x)
            .collect();
        assert_eq!(ys, vec![4, 8]);
        assert_eq!(xs, vec![4, 8]);
        assert_eq!(suggestions[0].b, GridPoint::new(10, 4));
        assert_eq!(suggestions[2].b, GridPoint::new(4, 8));
        assert!(suggestions.iter().all(|s| s.max_capacity == 50));
    }

    #[test]
    fn narrow_floor_gets_only_horizontals() {
        let suggestions = suggest_grid(1800, 6000, 100);
        assert_eq!(suggestions.len(), 2);
        assert!(
            suggestions
                .iter()
                .all(|s| s.orientation == Orientation::Horizontal)
        );
    }

    #[test]
    fn single_row_floor_keeps_vertical_runs_vertical() {
        let suggestions = suggest_grid(2400, 600, 100);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].a, GridPoint::new(4, 1));
        assert_eq!(suggestions[0].b, GridPoint::new(4, 1));
        assert_eq!(suggestions[0].orientation, Orientation::Vertical);
    }

    #[test]
    fn zero_sized_floor_suggests_nothing() {
        assert!(suggest_grid(0, 0, 100).is_empty());
    }

    proptest! {
        #[test]
        fn suggestions_are_idempotent(w in 0u32..200_000, h in 0u32..200_000, cap in 0u32..1000) {
            prop_assert_eq!(suggest_grid(w, h, cap), suggest_grid(w, h, cap));
        }

        #[test]
        fn suggestions_stay_on_the_floor(w in 0u32..100_000, h in 0u32..100_000) {
            let cols = (w / TILE_MM) as i32;
            let rows = (h / TILE_MM) as i32;
            let suggestions = suggest_grid(w, h, 100);
            let expected = (rows / TRAY_INTERVAL_TILES + cols / TRAY_INTERVAL_TILES) as usize;
            prop_assert_eq!(suggestions.len(), expected);
            for s in &suggestions {
                prop_assert!(s.a.x >= 1 && s.b.x <= cols);
                prop_assert!(s.a.y >= 1 && s.b.y <= rows);
                prop_assert_eq!(s.occupancy, 0);
            }
        }
    }
}

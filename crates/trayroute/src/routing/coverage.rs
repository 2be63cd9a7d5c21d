use super::types::{GridPoint, Orientation, TraySegment};

/// Grid cells covered by a tray segment, in ascending order along its axis.
///
/// Vertical segments yield one cell per row between the endpoints, horizontal segments one
/// cell per column. A segment whose endpoints coincide covers exactly that cell. Diagonal
/// segments cover nothing.
pub fn covered_cells(segment: &TraySegment) -> Vec<GridPoint> {
    let (a, b) = (segment.a, segment.b);
    match segment.orientation() {
        Orientation::Point => vec![a],
        Orientation::Vertical => (a.y.min(b.y)..=a.y.max(b.y))
            .map(|y| GridPoint::new(a.x, y))
            .collect(),
        Orientation::Horizontal => (a.x.min(b.x)..=a.x.max(b.x))
            .map(|x| GridPoint::new(x, a.y))
            .collect(),
        Orientation::Diagonal => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tray(a: (i32, i32), b: (i32, i32)) -> TraySegment {
        TraySegment {
            id: 1,
            project_id: 1,
            name: None,
            a: GridPoint::new(a.0, a.1),
            b: GridPoint::new(b.0, b.1),
            max_capacity: 100,
            occupancy: 0,
        }
    }

    #[test]
    fn vertical_segment_covers_each_row() {
        let cells = covered_cells(&tray((3, 1), (3, 5)));
        let expected: Vec<GridPoint> = (1..=5).map(|y| GridPoint::new(3, y)).collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn reversed_endpoints_still_ascend() {
        let cells = covered_cells(&tray((3, 5), (3, 1)));
        assert_eq!(cells.first(), Some(&GridPoint::new(3, 1)));
        assert_eq!(cells.last(), Some(&GridPoint::new(3, 5)));
        assert_eq!(cells.len(), 5);
    }

    #[test]
    fn horizontal_segment_covers_each_column() {
        let cells = covered_cells(&tray((6, 2), (2, 2)));
        let expected: Vec<GridPoint> = (2..=6).map(|x| GridPoint::new(x, 2)).collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn degenerate_segment_covers_one_cell() {
        assert_eq!(covered_cells(&tray((4, 4), (4, 4))), vec![GridPoint::new(4, 4)]);
    }

    #[test]
    fn diagonal_segment_covers_nothing() {
        assert!(covered_cells(&tray((1, 1), (3, 3))).is_empty());
    }

    #[test]
    fn negative_coordinates_are_covered() {
        let cells = covered_cells(&tray((-2, 0), (1, 0)));
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0], GridPoint::new(-2, 0));
    }
}
